use dropdown::prelude::*;
use serde_json::{Value, json};

fn host_with(config: DropdownConfig, records: Vec<Value>) -> DropdownHost<Value, MemoryView> {
    let mut dropdown = Dropdown::new(config).unwrap();
    dropdown.set_records(records);
    let mut host = DropdownHost::new(dropdown, MemoryView::new());
    host.mount().unwrap();
    host
}

fn letters() -> DropdownHost<Value, MemoryView> {
    host_with(
        DropdownConfig::new("name", "id"),
        vec![json!({"name": "A", "id": 1}), json!({"name": "B", "id": 2})],
    )
}

fn key(host: &mut DropdownHost<Value, MemoryView>, target: Part, key: Key) -> EventResult {
    host.dispatch(HostEvent::Key {
        target,
        key: KeyPress::new(key),
    })
}

// ============================================================================
// Keyboard commit
// ============================================================================

#[test]
fn test_enter_commits_second_entry() {
    let mut host = letters();
    key(&mut host, Part::SearchBox, Key::Down);
    key(&mut host, Part::Item(0), Key::Down);
    host.take_events();

    assert_eq!(key(&mut host, Part::Item(1), Key::Enter), EventResult::Consumed);
    assert_eq!(
        host.take_events(),
        vec![
            DropdownEvent::Selection(Some(json!({"name": "B", "id": 2}))),
            DropdownEvent::Touched(false),
        ]
    );

    let dropdown = host.dropdown();
    assert_eq!(dropdown.selected(), &DisplayItem::new("B", 2));
    assert_eq!(dropdown.text(), "B");
    assert_eq!(dropdown.query(), "");
    assert_eq!(dropdown.mode(), DropdownMode::Closed);
    assert_eq!(dropdown.cursor(), None);
    assert_eq!(host.view().text(), "B");
    assert_eq!(host.view().focused(), None);
    assert!(!host.view().has_class(Part::Root, Class::Open));
}

#[test]
fn test_commit_marks_row_selected() {
    let mut host = letters();
    key(&mut host, Part::SearchBox, Key::Down);
    key(&mut host, Part::Item(0), Key::Enter);

    let rows = host.view().rows();
    assert!(rows[0].selected);
    assert!(!rows[1].selected);
    assert!(rows.iter().all(|row| !row.focused));
}

#[test]
fn test_commit_after_search_clears_query() {
    let mut host = host_with(
        DropdownConfig::new("name", "id"),
        vec![
            json!({"name": "Apple", "id": 1}),
            json!({"name": "Banana", "id": 2}),
            json!({"name": "Cherry", "id": 3}),
        ],
    );
    host.dispatch(HostEvent::Input("che".into()));
    assert_eq!(host.dropdown().visible_count(), 1);

    key(&mut host, Part::SearchBox, Key::Down);
    key(&mut host, Part::Item(0), Key::Enter);

    let events = host.take_events();
    assert_eq!(
        events.last(),
        Some(&DropdownEvent::Touched(false))
    );
    assert!(events.contains(&DropdownEvent::Selection(Some(json!({"name": "Cherry", "id": 3})))));
    assert_eq!(host.dropdown().text(), "Cherry");
    assert_eq!(host.dropdown().query(), "");
    assert_eq!(host.dropdown().visible_count(), 3);
}

// ============================================================================
// Mouse commit
// ============================================================================

#[test]
fn test_click_commits_like_enter() {
    let mut host = letters();
    host.dispatch(HostEvent::Click(Part::Root));
    host.take_events();

    assert_eq!(host.dispatch(HostEvent::Click(Part::Item(0))), EventResult::Consumed);
    assert_eq!(
        host.take_events(),
        vec![
            DropdownEvent::Selection(Some(json!({"name": "A", "id": 1}))),
            DropdownEvent::Touched(false),
        ]
    );
    assert_eq!(host.dropdown().text(), "A");
    assert!(!host.dropdown().is_open());
}

#[test]
fn test_click_on_missing_entry_is_ignored() {
    let mut host = letters();
    assert_eq!(host.dispatch(HostEvent::Click(Part::Item(5))), EventResult::Ignored);
    assert!(host.take_events().is_empty());
}

// ============================================================================
// Unresolved selections
// ============================================================================

#[test]
fn test_entry_without_record_selects_none() {
    let mut host = host_with(
        DropdownConfig::new("name", "id"),
        vec![json!({"name": "orphan"})],
    );
    key(&mut host, Part::SearchBox, Key::Down);
    host.take_events();
    key(&mut host, Part::Item(0), Key::Enter);

    assert_eq!(
        host.take_events(),
        vec![DropdownEvent::Selection(None), DropdownEvent::Touched(false)]
    );
    assert_eq!(host.dropdown().text(), "orphan");
}

#[test]
fn test_entry_without_value_ignores_zero_valued_record() {
    let mut host = host_with(
        DropdownConfig::new("name", "id"),
        vec![json!({"name": "orphan"}), json!({"name": "Zero", "id": 0})],
    );
    key(&mut host, Part::SearchBox, Key::Down);
    host.take_events();
    key(&mut host, Part::Item(0), Key::Enter);

    assert_eq!(
        host.take_events(),
        vec![DropdownEvent::Selection(None), DropdownEvent::Touched(false)]
    );
    assert_eq!(host.dropdown().text(), "orphan");
}

#[test]
fn test_zero_valued_record_still_resolves() {
    let mut host = host_with(
        DropdownConfig::new("name", "id"),
        vec![json!({"name": "orphan"}), json!({"name": "Zero", "id": 0})],
    );
    host.dispatch(HostEvent::Click(Part::Item(1)));

    assert_eq!(
        host.take_events(),
        vec![
            DropdownEvent::Selection(Some(json!({"name": "Zero", "id": 0}))),
            DropdownEvent::Touched(false),
        ]
    );
}

#[test]
fn test_diagnostics_queued_when_enabled() {
    let mut dropdown = Dropdown::new(DropdownConfig::new("name", "id").diagnostics()).unwrap();
    dropdown.set_records(vec![json!({"name": "orphan"})]);
    assert_eq!(
        dropdown.take_events(),
        vec![DropdownEvent::Diagnostic(Diagnostic::missing("id", 0))]
    );

    let mut host = DropdownHost::new(dropdown, MemoryView::new());
    host.mount().unwrap();
    key(&mut host, Part::SearchBox, Key::Down);
    host.take_events();
    key(&mut host, Part::Item(0), Key::Enter);

    assert_eq!(
        host.take_events(),
        vec![
            DropdownEvent::Diagnostic(Diagnostic::NoMatch { value: 0 }),
            DropdownEvent::Selection(None),
            DropdownEvent::Touched(false),
        ]
    );
}

#[test]
fn test_diagnostics_not_queued_by_default() {
    let mut dropdown = Dropdown::<Value>::new(DropdownConfig::new("name", "id")).unwrap();
    dropdown.set_records(vec![json!({"name": "orphan"})]);
    assert!(dropdown.take_events().is_empty());
}

// ============================================================================
// Bound model
// ============================================================================

#[test]
fn test_model_sets_selection_and_text() {
    let mut host = letters();
    let model = json!({"name": "B", "id": 2});
    host.dropdown_mut().set_model(Some(&model));
    host.render();

    assert_eq!(host.dropdown().selected(), &DisplayItem::new("B", 2));
    assert_eq!(host.view().text(), "B");
    assert!(host.view().rows()[1].selected);
    assert!(host.take_events().is_empty());
}

#[test]
fn test_empty_model_clears_selection() {
    let mut host = letters();
    host.dropdown_mut().set_model(Some(&json!({"name": "A", "id": 1})));
    host.dropdown_mut().set_model(Some(&json!({})));
    host.render();

    assert!(host.dropdown().selected().is_sentinel());
    assert_eq!(host.dropdown().text(), "");
    assert!(host.view().rows().iter().all(|row| !row.selected));
}

#[test]
fn test_model_drops_search_in_progress() {
    let mut host = host_with(
        DropdownConfig::new("name", "id"),
        vec![
            json!({"name": "Apple", "id": 1}),
            json!({"name": "Banana", "id": 2}),
            json!({"name": "Cherry", "id": 3}),
        ],
    );
    host.dispatch(HostEvent::Input("che".into()));
    assert_eq!(host.dropdown().visible_count(), 1);

    host.dropdown_mut().set_model(Some(&json!({"name": "Apple", "id": 1})));
    host.render();

    assert_eq!(host.dropdown().text(), "Apple");
    assert_eq!(host.dropdown().query(), "");
    assert_eq!(host.dropdown().visible_count(), 3);
    assert_eq!(host.dropdown().mode(), DropdownMode::Open);
    assert!(host.view().rows()[0].selected);
}

#[test]
fn test_absent_model_keeps_selection() {
    let mut host = letters();
    host.dropdown_mut().set_model(Some(&json!({"name": "A", "id": 1})));
    host.dropdown_mut().set_model(None);

    assert_eq!(host.dropdown().selected(), &DisplayItem::new("A", 1));
    assert_eq!(host.dropdown().text(), "A");
}

#[test]
fn test_new_records_keep_selection() {
    let mut host = letters();
    key(&mut host, Part::SearchBox, Key::Down);
    key(&mut host, Part::Item(0), Key::Enter);

    host.dropdown_mut()
        .set_records(vec![json!({"name": "Z", "id": 26}), json!({"name": "A", "id": 1})]);
    host.render();

    assert_eq!(host.dropdown().selected(), &DisplayItem::new("A", 1));
    assert!(host.view().rows()[1].selected);
}
