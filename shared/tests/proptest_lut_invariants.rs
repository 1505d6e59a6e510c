//! Property-based invariant tests for lookup table sampling and raster
//! derivation.
//!
//! Verifies:
//! 1. a lookup table has exactly the requested number of entries
//! 2. its first and last entries are the gradient's end colors
//! 3. every entry lies between its neighbouring stop colors, channel by channel
//! 4. raster derivation is deterministic and always positive

use proptest::prelude::*;
use shared::{build_color_lut, derive_raster, Gradient, GradientStop, Range, Rgba};

fn color() -> impl Strategy<Value = Rgba> {
    any::<[u8; 4]>().prop_map(|[r, g, b, a]| Rgba::new(r, g, b, a))
}

/// Stops at strictly increasing positions running from 0 to 1.
fn gradient() -> impl Strategy<Value = Gradient> {
    (
        proptest::collection::btree_set(1u32..1000, 0..8),
        proptest::collection::vec(color(), 10),
    )
        .prop_map(|(inner, colors)| {
            let positions = std::iter::once(0.0)
                .chain(inner.into_iter().map(|p| p as f64 / 1000.0))
                .chain(std::iter::once(1.0));
            let stops = positions
                .zip(colors.into_iter().cycle())
                .map(|(position, color)| GradientStop::new(position, color))
                .collect();
            Gradient::new(stops).expect("generated stops are valid")
        })
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Size and end colors
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn lut_has_requested_size_and_end_colors(gradient in gradient(), size in 2usize..512) {
        let lut = build_color_lut(&gradient, size).unwrap();
        let stops = gradient.stops();

        prop_assert_eq!(lut.len(), size);
        prop_assert_eq!(Rgba::unpack(lut[0]), stops[0].color);
        prop_assert_eq!(Rgba::unpack(lut[size - 1]), stops[stops.len() - 1].color);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. No channel overshoots its bracketing stops
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn samples_stay_between_bracketing_stops(gradient in gradient(), t in 0.0f64..=1.0) {
        let stops = gradient.stops();
        let upper = stops.iter().position(|s| s.position >= t).unwrap().max(1);
        let (from, to) = (stops[upper - 1].color, stops[upper].color);
        let sample = gradient.sample(t);

        let within = |v: u8, a: u8, b: u8| a.min(b) <= v && v <= a.max(b);
        prop_assert!(within(sample.r, from.r, to.r));
        prop_assert!(within(sample.g, from.g, to.g));
        prop_assert!(within(sample.b, from.b, to.b));
        prop_assert!(within(sample.a, from.a, to.a));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Raster derivation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn raster_is_deterministic_and_positive(
        min_x in -10.0f64..10.0,
        span_x in 0.01f64..10.0,
        min_y in -10.0f64..10.0,
        span_y in 0.01f64..10.0,
        scale in 100.0f64..1000.0,
    ) {
        let x = Range::new(min_x, min_x + span_x).unwrap();
        let y = Range::new(min_y, min_y + span_y).unwrap();

        let first = derive_raster(x, y, scale).unwrap();
        let second = derive_raster(x, y, scale).unwrap();

        prop_assert_eq!(first, second);
        prop_assert!(first.width >= 1 && first.height >= 1);
        prop_assert_eq!(first.width as f64, (x.span() * scale).round());
        prop_assert_eq!(first.height as f64, (y.span() * scale).round());
    }
}
