use super::RatingControl;
use crate::likert::{LikertError, Rating};

#[test]
fn test_single_point_scale_rejected() {
    assert_eq!(
        RatingControl::new(1).unwrap_err(),
        LikertError::InvalidPointCount(1)
    );
    assert_eq!(
        RatingControl::new(0).unwrap_err(),
        LikertError::InvalidPointCount(0)
    );
}

#[test]
fn test_index_value_round_trip() {
    for count in 2..=11 {
        let control = RatingControl::new(count).unwrap();
        for i in 0..count {
            let v = control.index_to_value(i).unwrap().get();
            assert!((v - i as f64 / (count - 1) as f64).abs() < 1e-12);
            assert_eq!(control.nearest_index(v), Some(i));
        }
    }
}

#[test]
fn test_five_point_values() {
    let control = RatingControl::new(5).unwrap();
    let points: Vec<f64> = control.points().collect();
    assert_eq!(points, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert!(matches!(
        control.index_to_value(5),
        Err(LikertError::IndexOutOfRange { index: 5, count: 5 })
    ));
}

#[test]
fn test_nearest_index_tolerance() {
    let control = RatingControl::new(5).unwrap();
    assert_eq!(control.nearest_index(0.75 + 0.00005), Some(3));
    assert_eq!(control.nearest_index(0.75 + 0.0002), None);
    assert_eq!(control.nearest_index(0.33), None);
}

#[test]
fn test_sync_adopts_matching_value() {
    let mut control = RatingControl::new(5).unwrap();
    control.sync(Some(Rating::new(0.5).unwrap()));
    assert_eq!(control.selected(), Some(2));
}

#[test]
fn test_sync_without_match_keeps_selection() {
    let mut control = RatingControl::new(5).unwrap();
    control.sync(Some(Rating::new(0.33).unwrap()));
    assert_eq!(control.selected(), None);

    control.select(1).unwrap();
    control.sync(Some(Rating::new(0.33).unwrap()));
    assert_eq!(control.selected(), Some(1));
    control.sync(None);
    assert_eq!(control.selected(), Some(1));
}

#[test]
fn test_select_updates_selection_and_returns_value() {
    let mut control = RatingControl::new(5).unwrap();
    let v = control.select(3).unwrap();
    assert_eq!(v.get(), 0.75);
    assert_eq!(control.selected(), Some(3));

    assert!(control.select(7).is_err());
    assert_eq!(control.selected(), Some(3));
}

#[test]
fn test_disabled_control_rejects_select() {
    let mut control = RatingControl::new(3).unwrap();
    control.set_disabled(true);
    assert_eq!(control.select(0), Err(LikertError::Disabled));
    assert_eq!(control.selected(), None);

    control.sync(Some(Rating::ONE));
    assert_eq!(control.selected(), Some(2));
}
