//! ClickrankError 测试

use clickrank::errors::ClickrankError;

#[test]
fn test_error_codes_unique() {
    let errors = [
        ClickrankError::database_config("x"),
        ClickrankError::database_connection("x"),
        ClickrankError::database_operation("x"),
        ClickrankError::validation("x"),
        ClickrankError::not_found("x"),
        ClickrankError::serialization("x"),
        ClickrankError::file_operation("x"),
        ClickrankError::config("x"),
    ];
    let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), errors.len());
}

#[test]
fn test_format_simple_and_display() {
    let err = ClickrankError::not_found("Listing 7 not found");
    assert_eq!(err.format_simple(), "Resource Not Found: Listing 7 not found");
    assert_eq!(err.to_string(), err.format_simple());
    assert_eq!(err.message(), "Listing 7 not found");
}

#[test]
fn test_format_colored_contains_parts() {
    let err = ClickrankError::validation("bad input");
    let out = err.format_colored();
    assert!(out.contains("E004"));
    assert!(out.contains("bad input"));
}

#[test]
fn test_upstream_classification() {
    assert!(ClickrankError::database_connection("down").is_upstream());
    assert!(ClickrankError::database_operation("locked").is_upstream());
    assert!(!ClickrankError::not_found("x").is_upstream());
    assert!(!ClickrankError::config("x").is_upstream());
}

#[test]
fn test_from_conversions() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    assert!(matches!(
        ClickrankError::from(io),
        ClickrankError::FileOperation(_)
    ));

    let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(matches!(
        ClickrankError::from(json),
        ClickrankError::Serialization(_)
    ));

    let db = sea_orm::DbErr::Custom("boom".into());
    assert!(matches!(
        ClickrankError::from(db),
        ClickrankError::DatabaseOperation(_)
    ));
}
