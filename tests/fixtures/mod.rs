//! Shared builders for integration tests

use elo_rating::RatedEntity;

/// Entity with an explicit rating
pub fn rated(name: &str, rating: f64) -> RatedEntity {
    RatedEntity::with_rating(name, rating).expect("finite test rating")
}

/// A pair of entities starting from the default rating
pub fn fresh_pair() -> (RatedEntity, RatedEntity) {
    (RatedEntity::new("A"), RatedEntity::new("B"))
}

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} to be within {} of {}",
        actual,
        tolerance,
        expected
    );
}
