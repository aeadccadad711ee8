use super::types::{Position, StatLine, Tier, TierAssignment};
use super::weighting::{weighted_score, weights_for, OVERALL_WEIGHTS};

/// Scores `stats` twice, once with the overall weights and once with the
/// weights for `position`, and maps both scores onto the fixed tier rubric.
pub fn classify(stats: &StatLine, position: &Position) -> TierAssignment {
    let overall_score = weighted_score(stats, &OVERALL_WEIGHTS);
    let position_score = weighted_score(stats, weights_for(position));

    TierAssignment {
        overall_tier: Tier::from_score(overall_score),
        position_tier: Tier::from_score(position_score),
    }
}

/// Same as [`classify`] for a raw position label.
pub fn classify_label(stats: &StatLine, position: &str) -> TierAssignment {
    classify(stats, &Position::parse(position))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_positions() -> Vec<Position> {
        vec![
            Position::PointGuard,
            Position::ShootingGuard,
            Position::SmallForward,
            Position::PowerForward,
            Position::Center,
            Position::Unknown("WING".to_string()),
        ]
    }

    #[test]
    fn test_zero_stats_are_bench_everywhere() {
        for position in all_positions() {
            let tiers = classify(&StatLine::default(), &position);
            assert_eq!(tiers.overall_tier, Tier::Bench);
            assert_eq!(tiers.position_tier, Tier::Bench);
        }
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let stats = StatLine::new(30.0, 0.0, 0.0, 0.0, 0.0);
        let tiers = classify(&stats, &Position::Center);

        assert_eq!(tiers.overall_tier, Tier::Superstar);
        assert_eq!(tiers.overall_tier.as_str(), "Tier 1 - Superstar");
        // 30 * 0.25 = 7.5
        assert_eq!(tiers.position_tier, Tier::Starter);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::from_score(12.0), Tier::Superstar);
        assert_eq!(Tier::from_score(11.999), Tier::AllStar);
        assert_eq!(Tier::from_score(10.0), Tier::AllStar);
        assert_eq!(Tier::from_score(5.0), Tier::Starter);
        assert_eq!(Tier::from_score(4.999), Tier::RolePlayer);
        assert_eq!(Tier::from_score(2.0), Tier::RolePlayer);
        assert_eq!(Tier::from_score(1.999), Tier::Bench);
        assert_eq!(Tier::from_score(f64::NAN), Tier::Bench);
    }

    #[test]
    fn test_position_is_case_insensitive() {
        let stats = StatLine::new(12.0, 9.0, 4.0, 2.0, 0.3);
        assert_eq!(classify_label(&stats, "pg"), classify(&stats, &Position::PointGuard));
        assert_eq!(classify_label(&stats, "Pg"), classify_label(&stats, "PG"));
    }

    #[test]
    fn test_unknown_position_matches_overall() {
        let stats = StatLine::new(18.0, 3.0, 9.0, 1.0, 2.0);
        let tiers = classify_label(&stats, "forward");
        assert_eq!(tiers.overall_tier, tiers.position_tier);
    }

    #[test]
    fn test_point_guard_rewards_assists() {
        // overall: 4.0 + 2.5 + 0.3 + 0.2 + 0.0 = 7.0, PG: 3.0 + 4.5 + 0.1 + 0.3 = 7.9
        let stats = StatLine::new(10.0, 10.0, 2.0, 2.0, 0.0);
        let tiers = classify(&stats, &Position::PointGuard);
        assert_eq!(tiers.overall_tier, Tier::Starter);
        assert_eq!(tiers.position_tier, Tier::Starter);

        let playmaker = StatLine::new(12.0, 14.0, 3.0, 2.0, 0.0);
        let tiers = classify(&playmaker, &Position::PointGuard);
        // overall 8.95, PG 10.35
        assert_eq!(tiers.overall_tier, Tier::Starter);
        assert_eq!(tiers.position_tier, Tier::AllStar);
    }

    #[test]
    fn test_negative_stats_are_not_clamped() {
        let stats = StatLine::new(-10.0, 0.0, 0.0, 0.0, 0.0);
        let tiers = classify(&stats, &Position::SmallForward);
        assert_eq!(tiers.overall_tier, Tier::Bench);
    }

    #[test]
    fn test_tier_is_monotonic_in_each_stat() {
        let base = StatLine::new(8.0, 3.0, 4.0, 0.5, 0.5);
        let bumps: [fn(&mut StatLine, f64); 5] = [
            |s, v| s.ppg += v,
            |s, v| s.apg += v,
            |s, v| s.rpg += v,
            |s, v| s.stl += v,
            |s, v| s.blk += v,
        ];

        for position in all_positions() {
            for bump in bumps {
                let mut previous = classify(&base, &position);
                for step in 1..=80 {
                    let mut stats = base;
                    bump(&mut stats, f64::from(step) * 0.5);
                    let current = classify(&stats, &position);
                    assert!(current.overall_tier <= previous.overall_tier);
                    assert!(current.position_tier <= previous.position_tier);
                    previous = current;
                }
            }
        }
    }
}
