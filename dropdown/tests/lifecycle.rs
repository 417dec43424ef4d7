use dropdown::prelude::*;
use dropdown::ListenerKind;
use serde_json::{Value, json};

fn numbered(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| json!({"name": format!("entry {i}"), "id": i}))
        .collect()
}

fn host(rows: usize, records: usize) -> DropdownHost<Value, MemoryView> {
    let config = DropdownConfig::new("name", "id").max_visible_rows(rows);
    let mut dropdown = Dropdown::new(config).unwrap();
    dropdown.set_records(numbered(records));
    DropdownHost::new(dropdown, MemoryView::new())
}

fn count(view: &MemoryView, kind: ListenerKind) -> usize {
    view.listeners().iter().filter(|(_, k)| *k == kind).count()
}

// ============================================================================
// after_view_init
// ============================================================================

#[test]
fn test_mount_attaches_navigation_listener() {
    let mut host = host(8, 3);
    assert!(!host.dropdown().navigation_bound());

    host.mount().unwrap();
    assert!(host.dropdown().navigation_bound());
    assert!(host.view().has_listener(Part::SearchBox, ListenerKind::Navigation));
    assert_eq!(host.view().render_count(), 1);
}

#[test]
fn test_mount_twice_attaches_once() {
    let mut host = host(8, 3);
    host.mount().unwrap();
    host.mount().unwrap();
    assert_eq!(count(host.view(), ListenerKind::Navigation), 1);
}

#[test]
fn test_missing_search_box_is_an_error() {
    let dropdown = Dropdown::<Value>::new(DropdownConfig::new("name", "id")).unwrap();
    let mut host = DropdownHost::new(dropdown, MemoryView::new().without_part(Part::SearchBox));

    assert_eq!(host.mount(), Err(DropdownError::MissingPart(Part::SearchBox)));
    assert!(!host.dropdown().navigation_bound());
    assert!(host.view().listeners().is_empty());
}

#[test]
fn test_missing_list_container_is_an_error() {
    let dropdown = Dropdown::<Value>::new(DropdownConfig::new("name", "id")).unwrap();
    let mut host =
        DropdownHost::new(dropdown, MemoryView::new().without_part(Part::ListContainer));

    let err = host.mount().unwrap_err();
    assert_eq!(err, DropdownError::MissingPart(Part::ListContainer));
    assert_eq!(err.to_string(), "View part 'list-container' not found");
}

// ============================================================================
// after_render
// ============================================================================

#[test]
fn test_scroll_guard_bound_when_indicator_exists() {
    let mut host = host(2, 5);
    host.mount().unwrap();

    assert!(host.view().has_part(Part::ScrollIndicator));
    assert!(host.dropdown().scroll_guard_bound());
    assert!(host.view().has_listener(Part::ScrollIndicator, ListenerKind::StopClickPropagation));
}

#[test]
fn test_scroll_guard_bound_exactly_once() {
    let mut host = host(2, 5);
    host.mount().unwrap();
    for _ in 0..5 {
        host.render();
    }
    host.dispatch(HostEvent::Click(Part::Root));
    host.dispatch(HostEvent::Input("entry".into()));

    assert_eq!(count(host.view(), ListenerKind::StopClickPropagation), 1);
}

#[test]
fn test_scroll_guard_waits_for_indicator() {
    let mut host = host(2, 1);
    host.mount().unwrap();
    assert!(!host.view().has_part(Part::ScrollIndicator));
    assert!(!host.dropdown().scroll_guard_bound());

    host.dropdown_mut().set_records(numbered(5));
    host.render();
    assert!(host.dropdown().scroll_guard_bound());
}

#[test]
fn test_scroll_guard_needs_mount() {
    let mut host = host(2, 5);
    host.render();
    assert!(host.view().has_part(Part::ScrollIndicator));
    assert!(!host.dropdown().scroll_guard_bound());
}

#[test]
fn test_guarded_indicator_click_keeps_list_state() {
    let mut host = host(2, 5);
    host.mount().unwrap();

    assert_eq!(host.dispatch(HostEvent::Click(Part::ScrollIndicator)), EventResult::Consumed);
    assert!(!host.dropdown().is_open());
}

#[test]
fn test_unguarded_indicator_click_bubbles_to_root() {
    let mut host = host(2, 5);
    host.render();

    host.dispatch(HostEvent::Click(Part::ScrollIndicator));
    assert!(host.dropdown().is_open());
}

// ============================================================================
// destroy
// ============================================================================

#[test]
fn test_destroy_detaches_all_listeners() {
    let mut host = host(2, 5);
    host.mount().unwrap();
    assert_eq!(host.view().listeners().len(), 2);

    host.unmount();
    assert!(host.view().listeners().is_empty());
    assert!(!host.dropdown().navigation_bound());
    assert!(!host.dropdown().scroll_guard_bound());
}

#[test]
fn test_destroy_is_idempotent() {
    let mut host = host(8, 3);
    host.mount().unwrap();
    host.unmount();
    host.unmount();
    assert!(host.view().listeners().is_empty());
}

#[test]
fn test_no_rebind_after_destroy() {
    let mut host = host(2, 5);
    host.mount().unwrap();
    host.unmount();

    host.render();
    assert!(!host.dropdown().scroll_guard_bound());

    let err = host.mount().unwrap_err();
    assert!(matches!(err, DropdownError::Destroyed(_)));
    assert!(host.view().listeners().is_empty());
}

#[test]
fn test_keys_after_destroy_fall_back_to_text() {
    let mut host = host(8, 3);
    host.mount().unwrap();
    host.unmount();

    let result = host.dispatch(HostEvent::Key {
        target: Part::SearchBox,
        key: KeyPress::new(Key::Down),
    });
    assert_eq!(result, EventResult::Ignored);
    assert!(!host.dropdown().is_open());
}
