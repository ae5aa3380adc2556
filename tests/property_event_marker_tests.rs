use chart_overlays::core::{DataPoint, ScreenPoint};
use chart_overlays::overlays::{EventMarker, place_event_markers};
use proptest::prelude::*;

proptest! {
    #[test]
    fn placed_markers_are_ordered_and_spaced(
        mut xs in prop::collection::vec(0.0f64..2000.0, 0..128),
        min_spacing in 1.0f64..40.0,
    ) {
        xs.sort_by(f64::total_cmp);
        let markers: Vec<EventMarker> = xs
            .iter()
            .enumerate()
            .map(|(i, x)| EventMarker::new(format!("m-{i}"), format!("k-{i}"), *x))
            .collect();
        let identity = |point: DataPoint| ScreenPoint::new(point.x, point.y);

        let placed = place_event_markers(&markers, &identity, min_spacing).expect("placement");
        prop_assert_eq!(placed.len(), markers.len());

        for marker in &placed {
            prop_assert!(marker.x >= marker.raw_x);
        }
        for pair in placed.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(b.x >= a.x);
            if b.raw_x - a.raw_x < min_spacing {
                prop_assert!(b.x - a.x >= min_spacing - 1e-9);
            }
            if b.x != b.raw_x {
                prop_assert!((b.x - (a.x + min_spacing)).abs() <= 1e-9);
            }
        }
    }
}
