//! Property-based tests for sizing and packing using proptest.
//!
//! Properties verified:
//! - Container dimensions stay within their bounds for any viewport
//! - Font scaling never drops below the device minimum
//! - Render sizes stay inside the dataset's range on every render
//! - Packed words stay inside the canvas and never overlap

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordcloud_core::font::dynamic_font_size;
use wordcloud_core::invoker::LayoutPlan;
use wordcloud_core::layout::{HeuristicMeasure, Rect, TextMeasure};
use wordcloud_core::viewport::{cloud_dimensions, minimum_height};
use wordcloud_core::{DatasetKind, DeviceClass, ViewDimensions, Viewport, WordRecord};

fn any_kind() -> impl Strategy<Value = DatasetKind> {
    prop_oneof![Just(DatasetKind::Slang), Just(DatasetKind::Emoji)]
}

// ==========================================================================
// PROPERTY: Container dimensions
// ==========================================================================

proptest! {
    #[test]
    fn prop_width_between_zero_and_max(width in 0.0f64..4000.0, height in 0.0f64..3000.0) {
        let dims = cloud_dimensions(Viewport::new(width, height));
        prop_assert!(dims.width >= 0.0);
        prop_assert!(dims.width <= 800.0);
    }

    #[test]
    fn prop_height_respects_floor(width in 0.0f64..4000.0, height in 0.0f64..3000.0) {
        let viewport = Viewport::new(width, height);
        let dims = cloud_dimensions(viewport);
        prop_assert!(dims.height >= minimum_height(viewport));
        prop_assert!(dims.height >= 0.0);
    }
}

// ==========================================================================
// PROPERTY: Font scaling floors
// ==========================================================================

proptest! {
    #[test]
    fn prop_font_never_below_device_minimum(
        base in -100.0f64..200.0,
        width in 0.0f64..2000.0,
        height in 0.0f64..2000.0,
    ) {
        let dims = ViewDimensions { width, height };
        prop_assert!(dynamic_font_size(base, dims, DeviceClass::Desktop) >= 14.0);
        prop_assert!(dynamic_font_size(base, dims, DeviceClass::Mobile) >= 12.0);
    }
}

// ==========================================================================
// PROPERTY: Render-time size ranges
// ==========================================================================

proptest! {
    #[test]
    fn prop_render_sizes_in_range(
        kind in any_kind(),
        width in 200.0f64..2000.0,
        height in 300.0f64..1400.0,
        seed in any::<u64>(),
        renders in 1usize..4,
    ) {
        let viewport = Viewport::new(width, height);
        let plan = LayoutPlan::new(kind, viewport);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut words: Vec<WordRecord> = (0..25)
            .map(|i| WordRecord::new(format!("w{i}"), "d", 100.0))
            .collect();

        let (lo, hi) = match (kind, viewport.device()) {
            (DatasetKind::Slang, _) => (12.0, 24.0),
            (DatasetKind::Emoji, DeviceClass::Mobile) => (24.0, 32.0),
            (DatasetKind::Emoji, DeviceClass::Desktop) => (32.0, 42.0),
        };
        for _ in 0..renders {
            plan.assign_sizes(&mut words, &mut rng);
            for word in &words {
                prop_assert!(word.size >= lo && word.size <= hi, "size {} outside [{}, {}]", word.size, lo, hi);
            }
        }
    }
}

// ==========================================================================
// PROPERTY: Packing invariants
// ==========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_packed_words_disjoint_and_inside(
        kind in any_kind(),
        count in 0usize..40,
        seed in any::<u64>(),
    ) {
        let plan = LayoutPlan::new(kind, Viewport::new(1024.0, 768.0));
        let mut rng = StdRng::seed_from_u64(seed);
        let mut words: Vec<WordRecord> = (0..count)
            .map(|i| WordRecord::new(format!("term{i}"), "meaning", 0.0))
            .collect();
        plan.assign_sizes(&mut words, &mut rng);

        let measure = HeuristicMeasure::default();
        let placed = plan.run(&words, &measure, &mut rng);
        prop_assert!(placed.len() <= words.len());

        let (w, h) = (plan.canvas.width, plan.canvas.height);
        let boxes: Vec<Rect> = placed
            .iter()
            .map(|p| {
                Rect::around_text(measure.measure(&p.text, p.size), p.rotate)
                    .inflate(plan.padding)
                    .translate(p.x + w / 2.0, p.y + h / 2.0)
            })
            .collect();

        for (i, a) in boxes.iter().enumerate() {
            prop_assert!(a.x0 >= -1e-6 && a.y0 >= -1e-6 && a.x1 <= w + 1e-6 && a.y1 <= h + 1e-6);
            for b in boxes.iter().skip(i + 1) {
                // shrink slightly so float noise on touching edges is not an overlap
                prop_assert!(!a.inflate(-1e-6).intersects(&b.inflate(-1e-6)));
            }
        }
    }
}
