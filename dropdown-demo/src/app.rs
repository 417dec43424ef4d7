//! Routes terminal input to the dropdown host.
//!
//! The terminal has no element focus of its own, so this layer plays the
//! browser's part: keys go to the focused part, clicks go through the view's
//! hit map, Tab moves focus in and out of the control, and focus changes on
//! the search box are turned into `Focus`/`Blur` events.

use std::collections::VecDeque;
use std::io::{self, Write};

use crossterm::event::{
    Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use dropdown::{
    DropdownEvent, DropdownHost, DropdownView, EventResult, HostEvent, Key, KeyPress, Part,
};
use log::{debug, info};
use serde_json::Value;

use crate::view::TerminalView;

const STATUS_LINES: usize = 4;

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Demo {
    host: DropdownHost<Value, TerminalView>,
    status: VecDeque<String>,
}

impl Demo {
    pub fn new(host: DropdownHost<Value, TerminalView>) -> Self {
        let mut demo = Self {
            host,
            status: VecDeque::new(),
        };
        demo.collect_events();
        demo
    }

    /// Give the search box focus, as if the page autofocused it.
    pub fn focus_search(&mut self) {
        let before = self.host.view().focused();
        self.host.view_mut().focus(Part::SearchBox);
        self.sync_focus(before);
    }

    pub fn draw(&mut self, out: &mut impl Write) -> io::Result<()> {
        let status: Vec<String> = self.status.iter().cloned().collect();
        self.host.view_mut().draw(out, &status)
    }

    pub fn handle(&mut self, event: Event) -> Flow {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }

    pub fn shutdown(&mut self) {
        self.host.unmount();
        info!("Dropdown unmounted");
    }

    fn handle_key(&mut self, event: KeyEvent) -> Flow {
        if event.kind == KeyEventKind::Release {
            return Flow::Continue;
        }
        let press = KeyPress::from(event);
        if press.modifiers.ctrl && matches!(press.key, Key::Char('c') | Key::Char('q')) {
            return Flow::Quit;
        }

        match self.host.view().focused() {
            Some(part @ (Part::SearchBox | Part::Item(_))) => {
                let result = self.dispatch(HostEvent::Key { target: part, key: press });
                let leaves = matches!(press.key, Key::Tab | Key::BackTab);
                if part == Part::SearchBox && !result.is_handled() && leaves {
                    self.leave(press);
                }
            }
            _ => {
                if matches!(press.key, Key::Tab | Key::BackTab) {
                    self.dispatch(HostEvent::ComponentFocus { key: press, active: true });
                    self.focus_search();
                }
            }
        }
        Flow::Continue
    }

    fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        match self.host.view().hit_test(event.column, event.row) {
            Some(Part::SearchBox) => self.focus_search(),
            Some(part) => {
                self.dispatch(HostEvent::Click(part));
            }
            None => {
                let before = self.host.view().focused();
                if let Some(part) = before {
                    self.host.view_mut().blur(part);
                }
                self.sync_focus(before);
            }
        }
    }

    /// Tab past the search box: focus leaves the control.
    fn leave(&mut self, press: KeyPress) {
        self.dispatch(HostEvent::ComponentFocus { key: press, active: false });
        let before = self.host.view().focused();
        self.host.view_mut().blur(Part::SearchBox);
        self.sync_focus(before);
    }

    fn dispatch(&mut self, event: HostEvent) -> EventResult {
        let before = self.host.view().focused();
        let result = self.host.dispatch(event);
        debug!("dispatch -> {:?}", result);
        self.sync_focus(before);
        result
    }

    /// Turn search-box focus changes into focus/blur events.
    fn sync_focus(&mut self, before: Option<Part>) {
        let after = self.host.view().focused();
        let had = before == Some(Part::SearchBox);
        let has = after == Some(Part::SearchBox);
        if had && !has {
            self.host.dispatch(HostEvent::Blur(Part::SearchBox));
        } else if !had && has {
            self.host.dispatch(HostEvent::Focus(Part::SearchBox));
        }
        self.collect_events();
    }

    fn collect_events(&mut self) {
        for event in self.host.take_events() {
            let line = match event {
                DropdownEvent::Selection(Some(record)) => format!("selection: {}", record),
                DropdownEvent::Selection(None) => "selection: none".to_string(),
                DropdownEvent::Touched(touched) => format!("touched: {}", touched),
                DropdownEvent::Diagnostic(diagnostic) => format!("diagnostic: {}", diagnostic),
            };
            info!("{}", line);
            self.status.push_back(line);
            while self.status.len() > STATUS_LINES {
                self.status.pop_front();
            }
        }
    }
}
