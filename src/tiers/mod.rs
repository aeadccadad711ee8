pub mod classify;
pub mod types;
pub mod weighting;

pub use classify::{classify, classify_label};
pub use types::{Position, StatLine, Tier, TierAssignment};
pub use weighting::{weighted_score, weights_for, WeightVector};
