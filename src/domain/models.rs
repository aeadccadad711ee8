use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::database::models::{HypotheticalRecord, NewHypothetical, Player};
use crate::errors::{EngineError, Result};
use crate::pagination::PageMeta;
use crate::tiers::{classify_label, Position, StatLine, TierAssignment};

// ---- Inputs ----

/// Hypothetical player payload as received from the boundary. Every key is
/// optional here so that absent keys can be reported together.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HypotheticalInput {
    pub name: Option<String>,
    pub team: Option<String>,
    pub position: Option<String>,
    #[serde(rename = "PPG")]
    pub ppg: Option<Value>,
    #[serde(rename = "APG")]
    pub apg: Option<Value>,
    #[serde(rename = "RPG")]
    pub rpg: Option<Value>,
    #[serde(rename = "STL")]
    pub stl: Option<Value>,
    #[serde(rename = "BLK")]
    pub blk: Option<Value>,
}

impl HypotheticalInput {
    /// Checks that all eight keys are present, coerces the stats to numbers
    /// and uppercases the position.
    pub fn validate(self) -> Result<(NewHypothetical, StatLine)> {
        let missing: Vec<String> = [
            ("name", self.name.is_none()),
            ("team", self.team.is_none()),
            ("position", self.position.is_none()),
            ("PPG", self.ppg.is_none()),
            ("APG", self.apg.is_none()),
            ("RPG", self.rpg.is_none()),
            ("STL", self.stl.is_none()),
            ("BLK", self.blk.is_none()),
        ]
        .into_iter()
        .filter(|(_, absent)| *absent)
        .map(|(field, _)| field.to_string())
        .collect();

        if !missing.is_empty() {
            return Err(EngineError::MissingFields(missing));
        }

        let line = StatLine::new(
            coerce_stat("PPG", self.ppg)?,
            coerce_stat("APG", self.apg)?,
            coerce_stat("RPG", self.rpg)?,
            coerce_stat("STL", self.stl)?,
            coerce_stat("BLK", self.blk)?,
        );
        let player = NewHypothetical {
            name: self.name.unwrap_or_default(),
            team: self.team.unwrap_or_default(),
            position: Position::parse(&self.position.unwrap_or_default()).to_string(),
        };

        Ok((player, line))
    }
}

fn coerce_stat(field: &str, value: Option<Value>) -> Result<f64> {
    let invalid = || EngineError::InvalidValue { field: field.to_string() };

    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).ok_or_else(invalid)
}

/// JSON roster consumed by the ingestion service.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterFile {
    pub players: Vec<RosterPlayer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterPlayer {
    pub player_id: i64,
    pub name: String,
    pub team: String,
    pub position: String,
    #[serde(default)]
    pub seasons: Vec<RosterSeason>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterSeason {
    pub season: String,
    #[serde(rename = "PPG")]
    pub ppg: Option<f64>,
    #[serde(rename = "APG")]
    pub apg: Option<f64>,
    #[serde(rename = "RPG")]
    pub rpg: Option<f64>,
    #[serde(rename = "STL")]
    pub stl: Option<f64>,
    #[serde(rename = "BLK")]
    pub blk: Option<f64>,
    pub plus_minus: Option<f64>,
}

// ---- Results ----

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerPage {
    pub data: Vec<Player>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerProfile {
    #[serde(flatten)]
    pub player: Player,
    /// `None` when the player has no season rows.
    pub averages: Option<StatLine>,
    #[serde(flatten)]
    pub tiers: TierAssignment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparedPlayer {
    pub id: i64,
    pub name: String,
    pub season: String,
    #[serde(flatten)]
    pub stats: StatLine,
    #[serde(flatten)]
    pub tiers: TierAssignment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub category: String,
    pub player1: ComparedPlayer,
    pub player2: ComparedPlayer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HypotheticalProfile {
    pub id: i64,
    pub name: String,
    pub team: String,
    pub position: String,
    pub stats: StatLine,
    #[serde(flatten)]
    pub tiers: TierAssignment,
}

impl From<HypotheticalRecord> for HypotheticalProfile {
    fn from(record: HypotheticalRecord) -> Self {
        let tiers = classify_label(&record.stats, &record.player.position);
        Self {
            id: record.player.id,
            name: record.player.name,
            team: record.player.team,
            position: record.player.position,
            stats: record.stats,
            tiers,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.error.is_none()
    }
}
