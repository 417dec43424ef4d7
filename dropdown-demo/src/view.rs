//! A dropdown view drawn with crossterm.
//!
//! Element state (parts, classes, focus, listeners) is kept the same way the
//! in-memory view keeps it. [`TerminalView::draw`] paints the last frame and
//! records where each part landed so mouse clicks can be mapped back.

use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use dropdown::widget::truncate_label;
use dropdown::{Class, DropdownFrame, DropdownView, ListenerId, ListenerKind, Part};
use log::debug;

const LEFT: u16 = 2;
const SEARCH_ROW: u16 = 2;
const LIST_TOP: u16 = 4;
const BOX_WIDTH: u16 = 34;

#[derive(Debug, Clone, Copy)]
struct Rect {
    x: u16,
    y: u16,
    width: u16,
    height: u16,
}

impl Rect {
    fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

pub struct TerminalView {
    parts: BTreeSet<Part>,
    classes: BTreeMap<Part, BTreeSet<Class>>,
    focused: Option<Part>,
    listeners: BTreeMap<usize, (Part, ListenerKind)>,
    next_listener: usize,
    frame: DropdownFrame,
    max_rows: usize,
    /// First visible row of the scrolled list
    offset: usize,
    /// Part areas from the last draw, topmost last
    hits: Vec<(Part, Rect)>,
}

impl TerminalView {
    pub fn new(max_rows: usize) -> Self {
        let parts = [Part::Root, Part::SearchBox, Part::SearchIcon, Part::ListContainer]
            .into_iter()
            .collect();
        Self {
            parts,
            classes: BTreeMap::new(),
            focused: None,
            listeners: BTreeMap::new(),
            next_listener: 0,
            frame: DropdownFrame::default(),
            max_rows: max_rows.max(1),
            offset: 0,
            hits: Vec::new(),
        }
    }

    pub fn focused(&self) -> Option<Part> {
        self.focused
    }

    /// The topmost part under a screen cell.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Part> {
        self.hits
            .iter()
            .rev()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(part, _)| *part)
    }

    /// Keep the focused row inside the scroll window.
    fn follow_focus(&mut self) {
        if let Some(Part::Item(index)) = self.focused {
            if index < self.offset {
                self.offset = index;
            } else if index >= self.offset + self.max_rows {
                self.offset = index + 1 - self.max_rows;
            }
        }
        let max_offset = self.frame.rows.len().saturating_sub(self.max_rows);
        self.offset = self.offset.min(max_offset);
    }

    pub fn draw(&mut self, out: &mut impl Write, status: &[String]) -> io::Result<()> {
        self.hits.clear();
        let accent = accent_color(self.frame.theme.as_deref());

        queue!(
            out,
            Clear(ClearType::All),
            cursor::MoveTo(LEFT, 0),
            SetAttribute(Attribute::Bold),
            Print("Dropdown demo"),
            SetAttribute(Attribute::Reset),
            Print("  Tab/Down: list  Enter: select  Esc: back  Ctrl+Q: quit"),
        )?;

        self.draw_search_row(out, accent)?;
        let list_height = if self.has_class(Part::Root, Class::Open) {
            self.draw_list(out, accent)?
        } else {
            0
        };

        let status_top = LIST_TOP + list_height.max(self.max_rows as u16) + 1;
        for (i, line) in status.iter().enumerate() {
            queue!(
                out,
                cursor::MoveTo(LEFT, status_top + i as u16),
                SetForegroundColor(Color::DarkGrey),
                Print(line),
                SetForegroundColor(Color::Reset),
            )?;
        }
        out.flush()
    }

    fn draw_search_row(&mut self, out: &mut impl Write, accent: Color) -> io::Result<()> {
        let inner = (BOX_WIDTH - 4) as usize;
        let (content, dim) = if self.frame.text.is_empty() {
            (self.frame.placeholder.as_str(), true)
        } else {
            (self.frame.text.as_str(), false)
        };
        let shown = pad(&truncate_label(content, inner), inner);
        let icon = if self.has_class(Part::SearchIcon, Class::IconSearch) {
            "⌕"
        } else {
            "▾"
        };

        self.hits
            .push((Part::Root, Rect::new(LEFT, SEARCH_ROW, BOX_WIDTH, 1)));
        self.hits
            .push((Part::SearchBox, Rect::new(LEFT + 1, SEARCH_ROW, BOX_WIDTH - 4, 1)));
        self.hits
            .push((Part::SearchIcon, Rect::new(LEFT + BOX_WIDTH - 2, SEARCH_ROW, 1, 1)));

        let border = if self.has_class(Part::SearchBox, Class::Active) {
            accent
        } else {
            Color::Reset
        };
        queue!(
            out,
            cursor::MoveTo(LEFT, SEARCH_ROW),
            SetForegroundColor(border),
            Print("["),
            SetForegroundColor(if dim { Color::DarkGrey } else { Color::Reset }),
        )?;
        if self.focused == Some(Part::SearchBox) {
            queue!(out, SetAttribute(Attribute::Underlined))?;
        }
        queue!(
            out,
            Print(shown),
            SetAttribute(Attribute::Reset),
            SetForegroundColor(border),
            Print("] "),
            SetForegroundColor(accent),
            Print(icon),
            SetForegroundColor(Color::Reset),
        )
    }

    /// Draw the open list, returning its height in rows.
    fn draw_list(&mut self, out: &mut impl Write, accent: Color) -> io::Result<u16> {
        let rows = &self.frame.rows;
        if rows.is_empty() {
            queue!(
                out,
                cursor::MoveTo(LEFT + 1, LIST_TOP),
                SetForegroundColor(Color::DarkGrey),
                Print("no matches"),
                SetForegroundColor(Color::Reset),
            )?;
            return Ok(1);
        }

        let end = (self.offset + self.max_rows).min(rows.len());
        let height = (end - self.offset) as u16;
        let label_width = (BOX_WIDTH - 4) as usize;
        let mut hits = vec![(Part::ListContainer, Rect::new(LEFT, LIST_TOP, BOX_WIDTH, height))];

        for (line, index) in (self.offset..end).enumerate() {
            let row = &rows[index];
            let y = LIST_TOP + line as u16;
            let marker = if row.selected { "•" } else { " " };
            queue!(out, cursor::MoveTo(LEFT, y))?;
            if row.focused {
                queue!(out, SetAttribute(Attribute::Reverse))?;
            }
            queue!(
                out,
                SetForegroundColor(accent),
                Print(marker),
                SetForegroundColor(Color::Reset),
                Print(" "),
                Print(pad(&row.label, label_width)),
                SetAttribute(Attribute::Reset),
            )?;
            hits.push((Part::Item(index), Rect::new(LEFT, y, BOX_WIDTH - 2, 1)));
        }

        if self.frame.scrollable {
            let x = LEFT + BOX_WIDTH - 1;
            let travel = rows.len().saturating_sub(self.max_rows).max(1);
            let thumb = LIST_TOP + (self.offset * (height as usize - 1) / travel) as u16;
            for y in LIST_TOP..LIST_TOP + height {
                let glyph = if y == thumb { "█" } else { "│" };
                queue!(out, cursor::MoveTo(x, y), Print(glyph))?;
            }
            hits.push((Part::ScrollIndicator, Rect::new(x, thumb, 1, 1)));
        }

        self.hits.extend(hits);
        Ok(height)
    }
}

fn accent_color(theme: Option<&str>) -> Color {
    match theme {
        Some("dark") => Color::Cyan,
        Some("light") => Color::Blue,
        Some("warm") => Color::Yellow,
        _ => Color::Reset,
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

impl DropdownView for TerminalView {
    fn has_part(&self, part: Part) -> bool {
        self.parts.contains(&part)
    }

    fn add_class(&mut self, part: Part, class: Class) {
        self.classes.entry(part).or_default().insert(class);
    }

    fn remove_class(&mut self, part: Part, class: Class) {
        if let Some(set) = self.classes.get_mut(&part) {
            set.remove(&class);
        }
    }

    fn has_class(&self, part: Part, class: Class) -> bool {
        self.classes
            .get(&part)
            .is_some_and(|set| set.contains(&class))
    }

    fn focus(&mut self, part: Part) {
        if self.parts.contains(&part) {
            self.focused = Some(part);
        }
    }

    fn blur(&mut self, part: Part) {
        if self.focused == Some(part) {
            self.focused = None;
        }
    }

    fn set_search_text(&mut self, text: &str) {
        self.frame.text = text.to_string();
    }

    fn listen(&mut self, part: Part, kind: ListenerKind) -> ListenerId {
        let id = self.next_listener;
        self.next_listener += 1;
        self.listeners.insert(id, (part, kind));
        debug!("[terminal_view] listener {} attached to {} ({:?})", id, part, kind);
        ListenerId(id)
    }

    fn unlisten(&mut self, id: ListenerId) {
        if let Some((part, kind)) = self.listeners.remove(&id.0) {
            debug!("[terminal_view] listener {} detached from {} ({:?})", id.0, part, kind);
        }
    }

    fn render(&mut self, frame: &DropdownFrame) {
        self.parts.retain(|part| !matches!(part, Part::Item(_) | Part::ScrollIndicator));
        self.parts.extend((0..frame.rows.len()).map(Part::Item));
        if frame.scrollable {
            self.parts.insert(Part::ScrollIndicator);
        }
        if let Some(focused) = self.focused
            && !self.parts.contains(&focused)
        {
            self.focused = None;
        }
        self.frame = frame.clone();
        self.follow_focus();
    }
}
