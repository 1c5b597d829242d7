use chart_violin::config::{AxisConfig, AxisTicksConfig, StatsSelector};
use chart_violin::elements::{
    BoxplotData, ClipBounds, DensityCoord, ViolinPayload, resolve_clip_bounds,
    select_outline_coordinates,
};
use proptest::prelude::*;

fn coord_strategy() -> impl Strategy<Value = DensityCoord> {
    (-100.0f64..600.0, 0.0f64..10.0).prop_map(|(v, estimate)| DensityCoord::new(v, estimate))
}

fn selector_strategy() -> impl Strategy<Value = Option<StatsSelector>> {
    prop::option::of(prop_oneof![
        Just(StatsSelector::Min),
        Just(StatsSelector::Q1),
        Just(StatsSelector::Median),
        Just(StatsSelector::Q3),
        Just(StatsSelector::Max),
        Just(StatsSelector::WhiskerMin),
        Just(StatsSelector::WhiskerMax),
        Just(StatsSelector::Other),
    ])
}

proptest! {
    #[test]
    fn selection_is_sorted_and_exact(
        coords in prop::collection::vec(coord_strategy(), 0..64),
        a in 0.0f64..500.0,
        b in 0.0f64..500.0
    ) {
        let bounds = ClipBounds::new(a.max(b), a.min(b));
        let selected = select_outline_coordinates(&coords, bounds);

        for pair in selected.windows(2) {
            prop_assert!(pair[0].v >= pair[1].v);
        }
        prop_assert!(selected.iter().all(|coord| coord.v <= bounds.chart_min && coord.v >= bounds.chart_max));

        let expected = coords
            .iter()
            .filter(|coord| coord.v <= bounds.chart_min && coord.v >= bounds.chart_max)
            .count();
        prop_assert_eq!(selected.len(), expected);
        for coord in &selected {
            prop_assert!(coords.contains(coord));
        }
    }

    #[test]
    fn selection_is_idempotent(
        coords in prop::collection::vec(coord_strategy(), 0..64),
        a in 0.0f64..500.0,
        b in 0.0f64..500.0
    ) {
        let bounds = ClipBounds::new(a.max(b), a.min(b));
        let before = coords.clone();
        let once = select_outline_coordinates(&coords, bounds);
        let twice = select_outline_coordinates(&coords, bounds);
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(select_outline_coordinates(&once, bounds), once);
        prop_assert_eq!(coords, before);
    }

    #[test]
    fn overrides_apply_only_for_whisker_selectors(
        min_stats in selector_strategy(),
        max_stats in selector_strategy(),
        whisker_min in 50.0f64..100.0,
        whisker_max in 0.0f64..50.0
    ) {
        let payload = ViolinPayload {
            min: 120.0,
            max: -10.0,
            max_estimate: 1.0,
            coords: Vec::new(),
            boxplot_data: Some(BoxplotData {
                index: 0,
                whisker_min_px: whisker_min,
                whisker_max_px: whisker_max,
            }),
            outliers: Vec::new(),
            items: Vec::new(),
        };
        let axis = AxisConfig::with_ticks(AxisTicksConfig { min_stats, max_stats });
        let bounds = resolve_clip_bounds(&payload, Some(&axis));

        let expected_min = if min_stats == Some(StatsSelector::WhiskerMin) { whisker_min } else { 120.0 };
        let expected_max = if max_stats == Some(StatsSelector::WhiskerMax) { whisker_max } else { -10.0 };
        prop_assert_eq!(bounds, ClipBounds::new(expected_min, expected_max));
    }
}
