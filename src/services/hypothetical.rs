use log::info;

use crate::database::{HypotheticalRecord, StatRepository};
use crate::domain::{HypotheticalInput, HypotheticalProfile};
use crate::errors::{EngineError, Result};

/// Lifecycle of user-authored players. Each player owns exactly one stats
/// snapshot, written and removed together with it.
pub struct HypotheticalPlayerService {
    repository: StatRepository,
}

impl HypotheticalPlayerService {
    pub fn new(repository: StatRepository) -> Self {
        Self { repository }
    }

    pub fn create(&self, input: HypotheticalInput) -> Result<HypotheticalProfile> {
        let (player, stats) = input.validate()?;
        let created = self.repository.create_hypothetical(&player, &stats)?;
        info!("Created hypothetical player {} ({})", created.id, created.name);

        Ok(HypotheticalRecord { player: created, stats }.into())
    }

    pub fn get(&self, id: i64) -> Result<HypotheticalProfile> {
        self.repository
            .find_hypothetical(id)?
            .map(HypotheticalProfile::from)
            .ok_or_else(|| EngineError::not_found(format!("hypothetical player {id}")))
    }

    pub fn list(&self) -> Result<Vec<HypotheticalProfile>> {
        let records = self.repository.list_hypotheticals()?;
        Ok(records.into_iter().map(HypotheticalProfile::from).collect())
    }

    pub fn update(&self, id: i64, input: HypotheticalInput) -> Result<HypotheticalProfile> {
        let (player, stats) = input.validate()?;
        self.repository.update_hypothetical(id, &player, &stats)?;
        info!("Updated hypothetical player {id}");

        self.get(id)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        self.repository.delete_hypothetical(id)?;
        info!("Deleted hypothetical player {id}");
        Ok(())
    }
}
