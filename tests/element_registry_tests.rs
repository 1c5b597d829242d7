use chart_violin::config::{ChartOptions, ElementStyle};
use chart_violin::core::Orientation;
use chart_violin::elements::{
    DensityCoord, ElementRegistry, ViolinElement, ViolinPayload, ViolinViewModel,
};
use chart_violin::render::{CanvasCommand, RecordingCanvas};
use chart_violin::ChartError;

fn violin_at(x: f64, min: f64, max: f64) -> Box<ViolinElement> {
    Box::new(ViolinElement::new(ViolinViewModel {
        x,
        y: 60.0,
        base: 300.0,
        width: 40.0,
        height: 0.0,
        orientation: Orientation::Vertical,
        dataset_index: 0,
        index: 0,
        style: ElementStyle::default(),
        violin: ViolinPayload {
            min,
            max,
            max_estimate: 2.0,
            coords: vec![DensityCoord::new(60.0, 2.0)],
            boxplot_data: None,
            outliers: Vec::new(),
            items: Vec::new(),
        },
    }))
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut registry = ElementRegistry::new();
    registry
        .register("a", violin_at(100.0, 100.0, 20.0))
        .expect("register");
    let err = registry
        .register("a", violin_at(200.0, 100.0, 20.0))
        .expect_err("duplicate");
    assert!(matches!(err, ChartError::DuplicateElement(ref id) if id == "a"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn draw_all_follows_registration_order() {
    let mut registry = ElementRegistry::new();
    registry
        .register("right", violin_at(300.0, 100.0, 20.0))
        .expect("register");
    registry
        .register("left", violin_at(100.0, 100.0, 20.0))
        .expect("register");
    assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["right", "left"]);

    let mut canvas = RecordingCanvas::default();
    registry
        .draw_all(&mut canvas, &ChartOptions::default())
        .expect("draw");

    let outline_starts: Vec<f64> = canvas
        .commands()
        .windows(2)
        .filter_map(|pair| match pair {
            [CanvasCommand::BeginPath, CanvasCommand::MoveTo { x, y }] if *y == 100.0 => Some(*x),
            _ => None,
        })
        .collect();
    assert_eq!(outline_starts, vec![300.0, 100.0]);
    assert_eq!(canvas.save_depth(), 0);
}

#[test]
fn draw_all_stops_at_first_failure() {
    let mut registry = ElementRegistry::new();
    registry
        .register("broken", violin_at(100.0, 20.0, 100.0))
        .expect("register");
    registry
        .register("fine", violin_at(200.0, 100.0, 20.0))
        .expect("register");

    let mut canvas = RecordingCanvas::default();
    let err = registry
        .draw_all(&mut canvas, &ChartOptions::default())
        .expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidClipBounds { .. }));
    assert!(canvas.commands().is_empty());
}

#[test]
fn hit_test_reports_overlapping_elements() {
    let mut registry = ElementRegistry::new();
    registry
        .register("a", violin_at(100.0, 100.0, 20.0))
        .expect("register");
    registry
        .register("b", violin_at(130.0, 100.0, 20.0))
        .expect("register");

    assert_eq!(registry.hit_test(115.0, 50.0), vec!["a", "b"]);
    assert_eq!(registry.hit_test(145.0, 50.0), vec!["b"]);
    assert!(registry.hit_test(115.0, 150.0).is_empty());
}

#[test]
fn removed_elements_are_no_longer_drawn() {
    let mut registry = ElementRegistry::new();
    registry
        .register("a", violin_at(100.0, 100.0, 20.0))
        .expect("register");
    assert!(registry.remove("a").is_some());
    assert!(registry.get("a").is_none());
    assert!(registry.is_empty());

    let mut canvas = RecordingCanvas::default();
    registry
        .draw_all(&mut canvas, &ChartOptions::default())
        .expect("draw");
    assert!(canvas.commands().is_empty());
}
