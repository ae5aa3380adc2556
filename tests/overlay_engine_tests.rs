use chart_overlays::api::{CenterTracker, OverlayEngine, OverlayEngineConfig};
use chart_overlays::core::{
    AxisExtent, AxisExtentProvider, AxisId, CartesianMapper, PlotBounds, ScreenPoint,
    StaticAxisExtents,
};
use chart_overlays::overlays::{EventMarker, QUADRANT_OVERLAY_GROUP};
use chart_overlays::render::NullRenderer;

struct ZoomedAxes {
    x: (f64, f64),
    y: (f64, f64),
}

impl AxisExtentProvider for ZoomedAxes {
    fn extent(&self, axis: AxisId) -> Option<AxisExtent> {
        let (min, max) = match axis {
            AxisId::X => self.x,
            AxisId::Y => self.y,
        };
        Some(AxisExtent::new(min, max))
    }
}

fn bounds() -> PlotBounds {
    PlotBounds::new(0.0, 0.0, 400.0, 300.0).expect("bounds")
}

fn engine() -> OverlayEngine<NullRenderer> {
    OverlayEngine::new(NullRenderer::default(), OverlayEngineConfig::default()).expect("engine")
}

#[test]
fn center_is_replaced_only_when_extents_move() {
    let mut tracker = CenterTracker::new();
    assert!(!tracker.center().initialized);

    let axes = ZoomedAxes {
        x: (40.0, 90.0),
        y: (0.0, 60_000.0),
    };
    assert!(tracker.on_render_complete(&axes));
    assert_eq!((tracker.center().x, tracker.center().y), (65.0, 30_000.0));
    assert!(!tracker.on_render_complete(&axes));

    let zoomed = ZoomedAxes {
        x: (60.0, 90.0),
        y: (0.0, 60_000.0),
    };
    assert!(tracker.on_render_complete(&zoomed));
    assert_eq!(tracker.center().x, 75.0);
}

#[test]
fn overlays_stay_empty_until_first_render_completes() {
    let mut engine = engine();
    let mapper = CartesianMapper::for_bounds(
        bounds(),
        AxisExtent::new(0.0, 100.0),
        AxisExtent::new(0.0, 10.0),
    )
    .expect("mapper");

    let before = engine.render(bounds(), &mapper).expect("render before");
    assert!(before.find_group(QUADRANT_OVERLAY_GROUP).expect("quadrants").is_empty());

    assert!(engine.on_render_complete(&mapper));
    let after = engine.render(bounds(), &mapper).expect("render after");
    let quadrants = after.find_group(QUADRANT_OVERLAY_GROUP).expect("quadrants");
    assert_eq!(quadrants.rects().len(), 4);
    assert!(quadrants.rects().iter().all(|rect| rect.width == 200.0 && rect.height == 150.0));

    let renderer = engine.into_renderer();
    assert_eq!(renderer.render_count, 2);
    assert_eq!(renderer.last_rect_count, 4);
}

#[test]
fn first_marker_is_selected_after_load_and_clicks_switch_selection() {
    let mut engine = engine();
    engine.set_markers(vec![
        EventMarker::new("sku-1", "2024-05-01 10:00", 10.0),
        EventMarker::new("sku-2", "2024-05-01 10:01", 12.0),
        EventMarker::new("sku-3", "2024-05-01 10:30", 200.0),
    ]);
    assert_eq!(engine.selection().selected_id(), Some("sku-1"));

    let mapper = CartesianMapper::for_bounds(
        bounds(),
        AxisExtent::new(0.0, 400.0),
        AxisExtent::new(0.0, 1.0),
    )
    .expect("mapper");
    engine.render(bounds(), &mapper).expect("render");
    let xs: Vec<f64> = engine.placed_markers().iter().map(|m| m.x).collect();
    assert_eq!(xs, vec![10.0, 26.0, 200.0]);

    assert!(engine.pointer_click(Some("marker-sku-3")));
    assert_eq!(engine.selection().selected_id(), Some("sku-3"));

    // The second marker was pushed to x=26, so its icon covers 26..42.
    assert!(engine.pointer_click_at(ScreenPoint::new(30.0, 8.0)));
    assert_eq!(engine.selection().selected_id(), Some("sku-2"));

    assert!(!engine.pointer_click_at(ScreenPoint::new(300.0, 8.0)));
    assert_eq!(engine.selection().selected_id(), Some("sku-2"));

    let scene = engine.render(bounds(), &mapper).expect("render");
    let selected = scene.find_group("marker-sku-2").expect("selected group");
    assert_eq!(selected.rects()[0].fill_opacity, 0.8);
}

#[test]
fn hover_moves_tooltip_once_per_marker() {
    let mut engine = engine();
    engine.set_markers(vec![EventMarker::new("a", "k", 100.0)]);
    let mapper = CartesianMapper::for_bounds(
        bounds(),
        AxisExtent::new(0.0, 400.0),
        AxisExtent::new(0.0, 1.0),
    )
    .expect("mapper");
    engine.render(bounds(), &mapper).expect("render");

    assert!(engine.pointer_move_at(ScreenPoint::new(104.0, 200.0)));
    assert_eq!(engine.selection().hovered_id(), Some("a"));
    let tooltip = engine.tooltip();
    assert!(tooltip.visible);
    assert_eq!(tooltip.position, ScreenPoint::new(108.0, 45.0));

    assert!(!engine.pointer_move_at(ScreenPoint::new(110.0, 150.0)));

    assert!(engine.pointer_move_at(ScreenPoint::new(300.0, 150.0)));
    assert!(!engine.tooltip().visible);
    assert_eq!(engine.selection().hovered_id(), None);
    assert!(!engine.pointer_leave());
}

#[test]
fn external_selection_and_static_extents() {
    let mut engine = engine();
    engine.set_markers(vec![
        EventMarker::new("a", "k0", 1.0),
        EventMarker::new("b", "k1", 2.0),
    ]);
    assert!(engine.select_marker("b"));
    assert!(!engine.select_marker("b"));

    let extents = StaticAxisExtents::new(AxisExtent::new(0.0, 10.0), AxisExtent::new(0.0, 4.0));
    assert!(engine.on_render_complete(&extents));
    assert_eq!((engine.center().x, engine.center().y), (5.0, 2.0));
}

#[test]
fn config_loads_from_partial_json() {
    let config = OverlayEngineConfig::from_json_str(
        r#"{ "marker_style": { "min_spacing_px": 20.0 }, "select_first_marker": false }"#,
    )
    .expect("config");
    assert_eq!(config.marker_style.min_spacing_px, 20.0);
    assert_eq!(config.quadrant_theme.fill_opacity, 0.12);

    let mut engine = OverlayEngine::new(NullRenderer::default(), config).expect("engine");
    engine.set_markers(vec![EventMarker::new("a", "k", 1.0)]);
    assert_eq!(engine.selection().selected_id(), None);

    let defaults = OverlayEngineConfig::from_json_str("{}").expect("defaults");
    assert!(defaults.select_first_marker);
    assert!(defaults.to_json_pretty().expect("json").contains("quadrant_theme"));
}

#[test]
fn default_tracing_is_opt_in() {
    let installed = chart_overlays::telemetry::init_default_tracing();
    if cfg!(feature = "telemetry") {
        assert!(installed || !chart_overlays::telemetry::init_default_tracing());
    } else {
        assert!(!installed);
    }
}
