use chart_violin::config::ChartOptions;
use chart_violin::core::Orientation;
use chart_violin::elements::{
    ChartElement, ClipBounds, DensityCoord, ViolinElement, ViolinPayload, ViolinViewModel,
    select_outline_coordinates,
};
use chart_violin::render::RecordingCanvas;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn density_coords(count: usize) -> Vec<DensityCoord> {
    // Interleaved so the selection has to sort.
    (0..count)
        .map(|i| {
            let v = if i % 2 == 0 { i as f64 } else { (count - i) as f64 };
            let t = v / count as f64;
            DensityCoord::new(v * 0.5, (t * std::f64::consts::PI).sin())
        })
        .collect()
}

fn bench_select_outline_coordinates_10k(c: &mut Criterion) {
    let coords = density_coords(10_000);
    let bounds = ClipBounds::new(4_500.0, 500.0);

    c.bench_function("select_outline_coordinates_10k", |b| {
        b.iter(|| {
            let _ = select_outline_coordinates(black_box(&coords), black_box(bounds));
        })
    });
}

fn bench_violin_draw_recording_1k(c: &mut Criterion) {
    let element = ViolinElement::new(ViolinViewModel {
        x: 400.0,
        y: 300.0,
        base: 600.0,
        width: 80.0,
        height: 0.0,
        orientation: Orientation::Vertical,
        dataset_index: 0,
        index: 0,
        style: Default::default(),
        violin: ViolinPayload {
            min: 500.0,
            max: 0.0,
            max_estimate: 1.0,
            coords: density_coords(1_000),
            boxplot_data: None,
            outliers: vec![520.0, 540.0],
            items: Vec::new(),
        },
    });
    let options = ChartOptions::default();

    c.bench_function("violin_draw_recording_1k", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::default();
            element
                .draw(black_box(&mut canvas), black_box(&options))
                .expect("draw should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_select_outline_coordinates_10k,
    bench_violin_draw_recording_1k
);
criterion_main!(benches);
