use std::fmt;

use serde::{Serialize, Serializer};

pub type ScoreValue = f64;

/// Per-game box-score line used for scoring. Absent values are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StatLine {
    #[serde(rename = "PPG", default)]
    pub ppg: f64,
    #[serde(rename = "APG", default)]
    pub apg: f64,
    #[serde(rename = "RPG", default)]
    pub rpg: f64,
    #[serde(rename = "STL", default)]
    pub stl: f64,
    #[serde(rename = "BLK", default)]
    pub blk: f64,
}

impl StatLine {
    pub fn new(ppg: f64, apg: f64, rpg: f64, stl: f64, blk: f64) -> Self {
        Self { ppg, apg, rpg, stl, blk }
    }

    /// Builds a line from nullable columns, reading null as zero.
    pub fn from_nullable(
        ppg: Option<f64>,
        apg: Option<f64>,
        rpg: Option<f64>,
        stl: Option<f64>,
        blk: Option<f64>,
    ) -> Self {
        Self {
            ppg: ppg.unwrap_or(0.0),
            apg: apg.unwrap_or(0.0),
            rpg: rpg.unwrap_or(0.0),
            stl: stl.unwrap_or(0.0),
            blk: blk.unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Position {
    PointGuard,
    ShootingGuard,
    SmallForward,
    PowerForward,
    Center,
    /// Any other label, kept uppercase. Scored with the overall weights.
    Unknown(String),
}

impl Position {
    pub fn parse(label: &str) -> Self {
        let normalized = label.trim().to_uppercase();
        match normalized.as_str() {
            "PG" => Position::PointGuard,
            "SG" => Position::ShootingGuard,
            "SF" => Position::SmallForward,
            "PF" => Position::PowerForward,
            "C" => Position::Center,
            _ => Position::Unknown(normalized),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Position::PointGuard => "PG",
            Position::ShootingGuard => "SG",
            Position::SmallForward => "SF",
            Position::PowerForward => "PF",
            Position::Center => "C",
            Position::Unknown(label) => label,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Performance band. Declared strongest first, so `Superstar < Bench` in `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Superstar,  // >= 12
    AllStar,    // >= 10
    Starter,    // >= 5
    RolePlayer, // >= 2
    Bench,
}

impl Tier {
    pub fn from_score(score: ScoreValue) -> Self {
        if score >= 12.0 {
            Tier::Superstar
        } else if score >= 10.0 {
            Tier::AllStar
        } else if score >= 5.0 {
            Tier::Starter
        } else if score >= 2.0 {
            Tier::RolePlayer
        } else {
            Tier::Bench
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Superstar => "Tier 1 - Superstar",
            Tier::AllStar => "Tier 2 - All-Star",
            Tier::Starter => "Tier 3 - Starter",
            Tier::RolePlayer => "Tier 4 - Role Player",
            Tier::Bench => "Tier 5 - Bench",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Tier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierAssignment {
    pub overall_tier: Tier,
    pub position_tier: Tier,
}
