use dropdown::prelude::*;
use serde_json::Value;

#[test]
fn test_defaults() {
    let config = DropdownConfig::default();
    assert_eq!(config.text_field, "text");
    assert_eq!(config.value_field, "value");
    assert!(config.search_enabled);
    assert!(!config.year_mode);
    assert!(!config.diagnostics);
    assert_eq!(config.theme, None);
    assert_eq!(config.placeholder, "");
    assert_eq!(config.max_label_width, Some(30));
    assert_eq!(config.max_visible_rows, 8);
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder() {
    let config = DropdownConfig::new("label", "key")
        .search_enabled(false)
        .theme("compact")
        .placeholder("Search…")
        .max_label_width(None)
        .max_visible_rows(4)
        .diagnostics();

    assert_eq!(config.field_names().text_field, "label");
    assert_eq!(config.field_names().value_field, "key");
    assert!(!config.search_enabled);
    assert_eq!(config.theme.as_deref(), Some("compact"));
    assert_eq!(config.placeholder, "Search…");
    assert_eq!(config.max_label_width, None);
    assert_eq!(config.max_visible_rows, 4);
    assert!(config.diagnostics);
}

// ============================================================================
// Deserialization
// ============================================================================

#[test]
fn test_partial_json_fills_defaults() {
    let config: DropdownConfig =
        serde_json::from_str(r#"{ "text_field": "year", "value_field": "year", "year_mode": true }"#)
            .unwrap();
    assert!(config.year_mode);
    assert!(config.search_enabled);
    assert_eq!(config.max_visible_rows, 8);
}

#[test]
fn test_empty_json_is_default() {
    let config: DropdownConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, DropdownConfig::default());
}

#[test]
fn test_null_label_width_disables_truncation() {
    let config: DropdownConfig = serde_json::from_str(r#"{ "max_label_width": null }"#).unwrap();
    assert_eq!(config.max_label_width, None);
}

#[test]
fn test_wrong_type_rejected() {
    let result: Result<DropdownConfig, _> = serde_json::from_str(r#"{ "max_visible_rows": "many" }"#);
    assert!(result.is_err());
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_empty_text_field_rejected() {
    let config = DropdownConfig::new("", "id");
    assert_eq!(
        config.validate(),
        Err(DropdownError::EmptyFieldName { role: "text" })
    );
}

#[test]
fn test_blank_value_field_rejected() {
    let config = DropdownConfig::new("name", "  ");
    let err = config.validate().unwrap_err();
    assert_eq!(err, DropdownError::EmptyFieldName { role: "value" });
    assert_eq!(err.to_string(), "The value field name must not be empty");
}

#[test]
fn test_zero_rows_rejected() {
    let config = DropdownConfig::new("name", "id").max_visible_rows(0);
    assert_eq!(config.validate(), Err(DropdownError::NoVisibleRows));
}

#[test]
fn test_new_dropdown_validates_config() {
    let result = Dropdown::<Value>::new(DropdownConfig::new("", "id"));
    assert!(matches!(result, Err(DropdownError::EmptyFieldName { .. })));
}

#[test]
fn test_dropdown_ids_are_unique() {
    let a = Dropdown::<Value>::new(DropdownConfig::default()).unwrap();
    let b = Dropdown::<Value>::new(DropdownConfig::default()).unwrap();
    assert_ne!(a.id(), b.id());
    assert!(a.id().to_string().starts_with("__dropdown_"));
}
