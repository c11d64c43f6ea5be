use denom_core::{DenomError, DenominationTable, MAX_DENOMINATIONS};

#[test]
fn rejects_unsorted_input() {
    let err = DenominationTable::new(vec![1, 3, 2]).unwrap_err();
    match err {
        DenomError::Table(info) => {
            assert_eq!(info.code, "table-order");
            assert_eq!(info.context.get("position"), Some(&"1".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_duplicates() {
    let err = DenominationTable::new(vec![1, 2, 2, 3]).unwrap_err();
    match err {
        DenomError::Table(info) => assert_eq!(info.code, "table-order"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_non_positive_values() {
    let err = DenominationTable::new(vec![0, 1, 2]).unwrap_err();
    match err {
        DenomError::Table(info) => assert_eq!(info.code, "table-sign"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_oversized_tables() {
    let values: Vec<i64> = (1..=(MAX_DENOMINATIONS as i64 + 1)).collect();
    let err = DenominationTable::new(values).unwrap_err();
    match err {
        DenomError::Table(info) => {
            assert_eq!(info.code, "table-capacity");
            assert_eq!(info.context.get("cap"), Some(&"256".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn stores_values_descending() {
    let table = DenominationTable::new(vec![1, 5, 10]).unwrap();
    assert_eq!(table.values(), &[10, 5, 1]);
    assert_eq!(table.len(), 3);
}

#[test]
fn active_range_applies_dust_floor_and_ceiling() {
    let table = DenominationTable::new(vec![1, 2, 5, 10, 50, 100]).unwrap();
    // dust < v <= ceiling, i.e. the floor itself is excluded.
    assert_eq!(table.active(2, 50), &[50, 10, 5]);
    assert_eq!(table.active(0, 100), &[100, 50, 10, 5, 2, 1]);
    assert_eq!(table.active(100, 1000), &[] as &[i64]);
    assert_eq!(table.active(50, 10), &[] as &[i64]);
}

#[test]
fn standard_table_is_valid() {
    let table = DenominationTable::standard();
    assert_eq!(table.len(), 129);
    assert!(table.len() <= MAX_DENOMINATIONS);
    // Rebuilding through the validating constructor must accept it.
    let mut ascending = table.values().to_vec();
    ascending.reverse();
    assert_eq!(DenominationTable::new(ascending).unwrap(), table);
}
