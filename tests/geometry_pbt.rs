use formicary_lib::model::geometry::{angle_difference, wrap_angle, wrap_position};
use formicary_lib::model::pheromone::PheromoneField;
use formicary_lib::model::vector::Vector2D;
use proptest::prelude::*;
use std::f32::consts::PI;

prop_compose! {
    fn arb_overshoot()(
        x in -1.5f32..801.5,
        y in -1.5f32..601.5
    ) -> Vector2D {
        Vector2D::new(x, y)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_wrap_angle_range(theta in -1000.0f32..1000.0) {
        let w = wrap_angle(theta);
        prop_assert!(w > -PI && w <= PI, "wrap_angle({}) = {}", theta, w);
    }

    #[test]
    fn test_wrap_angle_idempotent(theta in -1000.0f32..1000.0) {
        let once = wrap_angle(theta);
        prop_assert_eq!(wrap_angle(once), once);
    }

    #[test]
    fn test_angle_difference_is_antisymmetric(a in -3.0f32..3.0, b in -3.0f32..3.0) {
        let forward = angle_difference(a, b);
        let back = angle_difference(b, a);
        prop_assert!(forward.abs() <= PI);
        if forward.abs() < PI - 1e-3 {
            prop_assert!((forward + back).abs() < 1e-5);
        }
    }

    #[test]
    fn test_wrapped_position_stays_on_map(p in arb_overshoot()) {
        let w = wrap_position(p, 800.0, 600.0);
        prop_assert!((0.0..=800.0).contains(&w.x));
        prop_assert!((0.0..=600.0).contains(&w.y));
    }

    #[test]
    fn test_field_never_exceeds_capacity(capacity in 1usize..64, deposits in 0usize..256) {
        let mut field = PheromoneField::new(capacity, 1.0);
        for i in 0..deposits {
            field.deposit(Vector2D::new(i as f32, 0.0), i % 2);
        }
        prop_assert_eq!(field.len(), deposits.min(capacity));
        if deposits > 0 {
            let newest = field.iter().last().map(|p| p.position.x);
            prop_assert_eq!(newest, Some((deposits - 1) as f32));
            let oldest = field.iter().next().map(|p| p.position.x);
            prop_assert_eq!(oldest, Some(deposits.saturating_sub(capacity) as f32));
        }
    }
}
