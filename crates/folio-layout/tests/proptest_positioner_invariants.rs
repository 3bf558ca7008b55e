//! Property-based invariants for the carousel positioner and snapping.
//!
//! 1. The active item is always unrotated, full scale, opaque, and unblurred
//! 2. Rotation of an item is independent of which item is active
//! 3. Snapping is monotonic in the drag delta
//! 4. Sub-threshold gestures never move the active index
//! 5. Settled indices stay in range

use folio_core::item::Item;
use folio_layout::{
    CarouselParams, CarouselPositioner, DragOutcome, DragSession, SpacingPolicy, settle_index,
    snap_shift,
};
use proptest::prelude::*;

fn items(n: usize) -> Vec<Item> {
    (1..=n as u32).map(|id| Item::new(id, format!("item {id}"))).collect()
}

fn params_strategy() -> impl Strategy<Value = CarouselParams> {
    (
        0.0f64..120.0,
        0.0f64..120.0,
        any::<bool>(),
        0.0f64..24.0,
        0.0f64..1.0,
        -20.0f64..20.0,
        -240.0f64..240.0,
        0.0f64..280.0,
    )
        .prop_map(
            |(near_gap, far_gap, fixed, skew, alternation, rotate, curve, amplitude)| {
                let mut params = CarouselParams::default();
                params.layout.active_neighbor_gap = near_gap;
                params.layout.inactive_gap = far_gap;
                params.layout.spacing_policy = if fixed {
                    SpacingPolicy::Fixed
                } else {
                    SpacingPolicy::BalancedByScale
                };
                params.rotation.random_skew = skew;
                params.rotation.alternation_strength = alternation;
                params.path.rotate = rotate;
                params.path.curve = curve;
                params.path.wave_amplitude = amplitude;
                params
            },
        )
}

proptest! {
    #[test]
    fn active_item_is_neutral(
        params in params_strategy(),
        count in 1usize..30,
        active_seed in any::<usize>(),
    ) {
        let items = items(count);
        let active = active_seed % count;
        let positioner = CarouselPositioner::new(&params, &items);
        let t = positioner.item_transform(active, active, 0.0).expect("active in range");
        prop_assert_eq!(t.distance, 0);
        prop_assert_eq!(t.rotation, params.rotation.active_rotation);
        prop_assert_eq!(t.scale, params.layout.active_scale);
        prop_assert_eq!(t.opacity, 1.0);
        prop_assert_eq!(t.blur, 0.0);
        prop_assert!(t.visible);
    }

    #[test]
    fn rotation_ignores_active_index(
        params in params_strategy(),
        count in 3usize..30,
        a in any::<usize>(),
        b in any::<usize>(),
        index in any::<usize>(),
    ) {
        let items = items(count);
        let index = index % count;
        let a = a % count;
        let b = b % count;
        prop_assume!(index != a && index != b);
        let positioner = CarouselPositioner::new(&params, &items);
        let ra = positioner.item_transform(index, a, 0.0).expect("in range").rotation;
        let rb = positioner.item_transform(index, b, 0.0).expect("in range").rotation;
        prop_assert_eq!(ra.to_bits(), rb.to_bits());
        prop_assert!(ra.abs() <= params.rotation.random_skew + 1e-9);
    }

    #[test]
    fn every_output_is_finite(
        params in params_strategy(),
        count in 1usize..20,
        active in 0usize..20,
        drag in -2000.0f64..2000.0,
    ) {
        let items = items(count);
        let positioner = CarouselPositioner::new(&params, &items);
        for t in positioner.frame(active, drag) {
            prop_assert!(t.offset.x.is_finite() && t.offset.y.is_finite());
            prop_assert!(t.scale > 0.0);
            prop_assert!((0.0..=1.0).contains(&t.opacity));
            prop_assert!(t.blur >= 0.0);
            prop_assert_eq!(t.visible, t.distance.unsigned_abs() <= params.layout.visible_range as u64);
        }
    }

    #[test]
    fn snap_is_monotonic(
        a in -5000.0f64..5000.0,
        b in -5000.0f64..5000.0,
        spacing in 0.0f64..200.0,
        bias in 0.35f64..0.95,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        // More leftward (smaller) delta advances at least as far.
        prop_assert!(snap_shift(lo, spacing, bias) >= snap_shift(hi, spacing, bias));
    }

    #[test]
    fn settled_index_in_range(
        start in 0usize..64,
        delta in -10_000.0f64..10_000.0,
        count in 1usize..64,
        spacing in 0.0f64..200.0,
    ) {
        let index = settle_index(start, delta, count, spacing, 0.7);
        prop_assert!(index < count);
    }

    #[test]
    fn sub_threshold_gesture_is_a_click(
        start_x in -1000.0f64..1000.0,
        moves in prop::collection::vec(-5.0f64..=5.0, 0..16),
        active in 0usize..8,
    ) {
        let mut session = DragSession::begin(1, start_x, active);
        for dx in moves {
            session.update(start_x + dx, 5.0);
            prop_assert_eq!(session.live_delta(), 0.0);
        }
        prop_assert_eq!(session.end(8, 40.0, 0.7), DragOutcome::Click);
    }
}
