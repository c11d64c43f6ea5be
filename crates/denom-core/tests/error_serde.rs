use denom_core::{DenomError, ErrorInfo};

#[test]
fn errors_roundtrip_through_json() {
    let err = DenomError::Table(
        ErrorInfo::new("table-order", "table must be strictly ascending and unique")
            .with_context("position", "3")
            .with_hint("sort and deduplicate the input"),
    );
    let json = serde_json::to_string(&err).unwrap();
    let restored: DenomError = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, err);
    assert_eq!(restored.info().code, "table-order");
}

#[test]
fn display_includes_context_and_hint() {
    let err = DenomError::Path(
        ErrorInfo::new("path-length", "path length outside 1..=8")
            .with_context("length", "9")
            .with_hint("split the decomposition"),
    );
    let rendered = err.to_string();
    assert!(rendered.contains("path-length"));
    assert!(rendered.contains("length=9"));
    assert!(rendered.contains("hint: split the decomposition"));
}
