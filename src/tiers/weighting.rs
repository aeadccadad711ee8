use super::types::{Position, ScoreValue, StatLine};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightVector {
    pub ppg: f64,
    pub apg: f64,
    pub rpg: f64,
    pub stl: f64,
    pub blk: f64,
}

impl WeightVector {
    pub fn total(&self) -> f64 {
        self.ppg + self.apg + self.rpg + self.stl + self.blk
    }
}

// Each vector sums to 1.0.
pub const OVERALL_WEIGHTS: WeightVector = WeightVector { ppg: 0.40, apg: 0.25, rpg: 0.15, stl: 0.10, blk: 0.10 };

pub const POINT_GUARD_WEIGHTS: WeightVector = WeightVector { ppg: 0.30, apg: 0.45, rpg: 0.05, stl: 0.15, blk: 0.05 };
pub const SHOOTING_GUARD_WEIGHTS: WeightVector = WeightVector { ppg: 0.45, apg: 0.20, rpg: 0.10, stl: 0.15, blk: 0.10 };
pub const SMALL_FORWARD_WEIGHTS: WeightVector = WeightVector { ppg: 0.40, apg: 0.20, rpg: 0.20, stl: 0.10, blk: 0.10 };
pub const POWER_FORWARD_WEIGHTS: WeightVector = WeightVector { ppg: 0.30, apg: 0.10, rpg: 0.35, stl: 0.10, blk: 0.15 };
pub const CENTER_WEIGHTS: WeightVector = WeightVector { ppg: 0.25, apg: 0.05, rpg: 0.40, stl: 0.05, blk: 0.25 };

pub fn weights_for(position: &Position) -> &'static WeightVector {
    match position {
        Position::PointGuard => &POINT_GUARD_WEIGHTS,
        Position::ShootingGuard => &SHOOTING_GUARD_WEIGHTS,
        Position::SmallForward => &SMALL_FORWARD_WEIGHTS,
        Position::PowerForward => &POWER_FORWARD_WEIGHTS,
        Position::Center => &CENTER_WEIGHTS,
        Position::Unknown(_) => &OVERALL_WEIGHTS,
    }
}

pub fn weighted_score(stats: &StatLine, weights: &WeightVector) -> ScoreValue {
    stats.ppg * weights.ppg
        + stats.apg * weights.apg
        + stats.rpg * weights.rpg
        + stats.stl * weights.stl
        + stats.blk * weights.blk
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_every_weight_vector_sums_to_one() {
        let vectors = [
            ("overall", OVERALL_WEIGHTS),
            ("PG", POINT_GUARD_WEIGHTS),
            ("SG", SHOOTING_GUARD_WEIGHTS),
            ("SF", SMALL_FORWARD_WEIGHTS),
            ("PF", POWER_FORWARD_WEIGHTS),
            ("C", CENTER_WEIGHTS),
        ];

        for (name, weights) in vectors {
            assert!(
                (weights.total() - 1.0).abs() < EPSILON,
                "{name} weights sum to {}",
                weights.total()
            );
        }
    }

    #[test]
    fn test_unknown_position_uses_overall_weights() {
        let weights = weights_for(&Position::Unknown("G-F".to_string()));
        assert_eq!(*weights, OVERALL_WEIGHTS);
    }

    #[test]
    fn test_weighted_score() {
        let stats = StatLine::new(10.0, 4.0, 2.0, 1.0, 1.0);
        // 4.0 + 1.0 + 0.3 + 0.1 + 0.1
        assert!((weighted_score(&stats, &OVERALL_WEIGHTS) - 5.5).abs() < EPSILON);
    }
}
