use denom_core::{decode_path, encode_path, DenomError, EncodedPath};
use proptest::prelude::*;

#[test]
fn append_order_is_recovered() {
    let path = EncodedPath::empty().push(3).push(0).push(255);
    assert_eq!(path.decode(3), vec![3, 0, 255]);
    assert_eq!(path.as_raw(), (3u64 << 16) | 255);
}

#[test]
fn leading_zero_indices_survive() {
    // Index 0 in the oldest slot is indistinguishable from padding without
    // the term count; decoding with the right count must keep it.
    let path = encode_path(&[0, 0, 7]).unwrap();
    assert_eq!(path.decode(3), vec![0, 0, 7]);
}

#[test]
fn length_limits_are_enforced() {
    let err = encode_path(&[]).unwrap_err();
    match err {
        DenomError::Path(info) => assert_eq!(info.code, "path-length"),
        other => panic!("unexpected error: {other:?}"),
    }
    let err = encode_path(&[0; 9]).unwrap_err();
    match err {
        DenomError::Path(info) => {
            assert_eq!(info.code, "path-length");
            assert_eq!(info.context.get("length"), Some(&"9".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(decode_path(EncodedPath::empty(), 9).is_err());
}

proptest! {
    #[test]
    fn roundtrip_all_lengths(indices in prop::collection::vec(any::<u8>(), 1..=8)) {
        let path = encode_path(&indices).unwrap();
        prop_assert_eq!(decode_path(path, indices.len()).unwrap(), indices);
    }
}
