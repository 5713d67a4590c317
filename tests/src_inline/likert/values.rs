use super::{LikertError, Rating, ValueVector};

#[test]
fn test_rating_bounds() {
    assert!(Rating::new(0.0).is_ok());
    assert!(Rating::new(1.0).is_ok());
    assert_eq!(Rating::new(1.5), Err(LikertError::OutOfRange(1.5)));
    assert!(Rating::new(-0.01).is_err());
    assert!(Rating::new(f64::NAN).is_err());
}

#[test]
fn test_rating_serde_rejects_out_of_range() {
    let ok: Rating = serde_json::from_str("0.25").unwrap();
    assert_eq!(ok.get(), 0.25);
    assert!(serde_json::from_str::<Rating>("2").is_err());
    assert_eq!(serde_json::to_string(&Rating::ONE).unwrap(), "1.0");
}

#[test]
fn test_with_leaves_original_snapshot() {
    let a = ValueVector::unset(3);
    let b = a.with(1, Some(Rating::ONE));
    assert_eq!(a.answered(), 0);
    assert_eq!(b.answered(), 1);
    assert_eq!(b[1], Some(Rating::ONE));
    assert_eq!(b.get(0), None);
    assert!(!b.is_complete());
}

#[test]
fn test_vector_json_uses_null_for_unset() {
    let v = ValueVector::try_from(vec![Some(0.5), None]).unwrap();
    assert_eq!(serde_json::to_string(&v).unwrap(), "[0.5,null]");
    let back: ValueVector = serde_json::from_str("[0.5,null]").unwrap();
    assert_eq!(back, v);
    assert!(ValueVector::try_from(vec![Some(3.0)]).is_err());
}

#[test]
fn test_complete_vector() {
    let v = ValueVector::try_from(vec![Some(0.0), Some(1.0)]).unwrap();
    assert!(v.is_complete());
    assert_eq!(v.to_f64s(), vec![Some(0.0), Some(1.0)]);
    assert!(ValueVector::unset(0).is_complete());
}
