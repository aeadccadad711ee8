pub mod comparison;
pub mod hypothetical;
pub mod ingestion;
pub mod players;

pub use comparison::ComparisonService;
pub use hypothetical::HypotheticalPlayerService;
pub use ingestion::IngestionService;
pub use players::PlayerService;
