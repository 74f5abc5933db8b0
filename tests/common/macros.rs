/// Asserts the carrying flag of the first ant of a colony.
#[macro_export]
macro_rules! assert_carrying {
    ($world:expr, $colony:expr, $expected:expr) => {
        let ant = $world.colonies[$colony].ants[0];
        assert_eq!(
            ant.carrying_food, $expected,
            "Colony {} lead ant carrying flag mismatch",
            $colony
        );
    };
}

/// Asserts a colony's delivered food counter.
#[macro_export]
macro_rules! assert_collected {
    ($world:expr, $colony:expr, $count:expr) => {
        assert_eq!(
            $world.colonies[$colony].food_collected, $count,
            "Colony {} food_collected mismatch",
            $colony
        );
    };
}

/// Asserts the number of live markers in the shared field.
#[macro_export]
macro_rules! assert_pheromones {
    ($world:expr, $count:expr) => {
        assert_eq!($world.pheromones.len(), $count, "Pheromone count mismatch");
    };
}

/// Asserts two angles are equal up to a small tolerance.
#[macro_export]
macro_rules! assert_angle_eq {
    ($a:expr, $b:expr) => {
        let (a, b): (f32, f32) = ($a, $b);
        assert!((a - b).abs() < 1e-5, "Angle {} != {}", a, b);
    };
}
