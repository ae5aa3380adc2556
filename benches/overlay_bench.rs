use chart_overlays::core::{AxisExtent, CartesianMapper, PlotBounds};
use chart_overlays::overlays::{
    CenterPoint, EventMarker, EventMarkerStyle, MarkerHighlight, QuadrantOverlayTheme,
    build_event_marker_overlay, build_quadrant_overlay, place_event_markers,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_quadrant_overlay(c: &mut Criterion) {
    let bounds = PlotBounds::new(60.0, 40.0, 1600.0, 900.0).expect("bounds");
    let mapper = CartesianMapper::for_bounds(
        bounds,
        AxisExtent::new(40.0, 90.0),
        AxisExtent::new(0.0, 60_000.0),
    )
    .expect("mapper");
    let theme = QuadrantOverlayTheme::default();
    let center = CenterPoint::new(70.0, 12_000.0);

    c.bench_function("quadrant_overlay", |b| {
        b.iter(|| {
            let _ = build_quadrant_overlay(
                black_box(bounds),
                black_box(&center),
                black_box(&mapper),
                black_box(&theme),
            )
            .expect("overlay");
        })
    });
}

fn bench_event_markers_10k(c: &mut Criterion) {
    let bounds = PlotBounds::new(0.0, 0.0, 1920.0, 600.0).expect("bounds");
    let mapper = CartesianMapper::for_bounds(
        bounds,
        AxisExtent::new(0.0, 10_000.0),
        AxisExtent::new(0.0, 1.0),
    )
    .expect("mapper");
    let markers: Vec<EventMarker> = (0..10_000)
        .map(|i| EventMarker::new(format!("m-{i}"), format!("k-{i}"), i as f64))
        .collect();
    let style = EventMarkerStyle::default();

    c.bench_function("event_markers_place_and_build_10k", |b| {
        b.iter(|| {
            let placed = place_event_markers(black_box(&markers), &mapper, style.min_spacing_px)
                .expect("placement");
            let _ = build_event_marker_overlay(
                &placed,
                bounds,
                MarkerHighlight {
                    selected_id: Some("m-42"),
                    hovered_id: None,
                },
                &style,
            )
            .expect("overlay");
        })
    });
}

criterion_group!(benches, bench_quadrant_overlay, bench_event_markers_10k);
criterion_main!(benches);
