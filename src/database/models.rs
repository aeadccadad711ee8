use serde::Serialize;

use crate::tiers::StatLine;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub player_id: i64,
    pub name: String,
    pub team: String,
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonStats {
    pub stats_id: i64,
    pub player_id: i64,
    pub season: String,
    #[serde(flatten)]
    pub stats: StatLine,
    pub plus_minus: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HypotheticalPlayer {
    pub id: i64,
    pub name: String,
    pub team: String,
    pub position: String,
}

/// Identity fields written for a hypothetical player; `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHypothetical {
    pub name: String,
    pub team: String,
    pub position: String,
}

// DTO for the player/stats join
#[derive(Debug, Clone, PartialEq)]
pub struct HypotheticalRecord {
    pub player: HypotheticalPlayer,
    pub stats: StatLine,
}

/// Season row as delivered by the ingestion collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSeasonStats {
    pub player_id: i64,
    pub season: String,
    pub ppg: Option<f64>,
    pub apg: Option<f64>,
    pub rpg: Option<f64>,
    pub stl: Option<f64>,
    pub blk: Option<f64>,
    pub plus_minus: Option<f64>,
}
