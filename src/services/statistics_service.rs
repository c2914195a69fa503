// src/services/statistics_service.rs
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::{PetFilter, PetStatus, StatSummary, StatsState};
use crate::error::AppResult;
use crate::events::{EventBus, StatisticsLoadFailed, StatisticsLoaded};
use crate::repositories::PetRepository;

/// Aggregates the landing-page pet counts.
///
/// Holds the last published summary and the loading flag. A failed load
/// keeps the previous summary; the loading flag clears after the first
/// load settles either way.
pub struct StatisticsService {
    pet_repo: Arc<dyn PetRepository>,
    event_bus: Arc<EventBus>,
    state: RwLock<StatsState>,
}

impl StatisticsService {
    pub fn new(pet_repo: Arc<dyn PetRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            pet_repo,
            event_bus,
            state: RwLock::new(StatsState::new()),
        }
    }

    /// Run the three count queries concurrently and publish the result.
    ///
    /// Never fails: errors are logged and leave the summary untouched.
    pub async fn load(&self) -> StatsState {
        let summary = match self.fetch_summary().await {
            Ok(summary) => Some(summary),
            Err(reason) => {
                log::error!("Failed to load pet statistics: {}", reason);
                self.event_bus.emit(StatisticsLoadFailed::new(reason));
                None
            }
        };

        let (state, cleared_loading) = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let cleared = state.settle(summary);
            (*state, cleared)
        };

        if cleared_loading {
            log::debug!("Statistics loading finished");
        }

        if let Some(summary) = summary {
            log::info!(
                "Pet statistics: {} registered, {} found, {} for adoption",
                summary.registered,
                summary.found,
                summary.for_adoption
            );
            self.event_bus.emit(StatisticsLoaded::new(summary));
        }

        state
    }

    /// Current summary and loading flag
    pub fn state(&self) -> StatsState {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn summary(&self) -> StatSummary {
        self.state().summary
    }

    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    /// Number of pets with a given status; `Registered` counts every pet
    pub async fn count_by_status(&self, status: PetStatus) -> AppResult<u64> {
        self.pet_repo.count_pets(filter_for(status)).await
    }

    /// All three counts, or a description of every query that failed
    async fn fetch_summary(&self) -> Result<StatSummary, String> {
        let (registered, found, for_adoption) = tokio::join!(
            self.pet_repo.count_pets(filter_for(PetStatus::Registered)),
            self.pet_repo.count_pets(filter_for(PetStatus::Found)),
            self.pet_repo.count_pets(filter_for(PetStatus::ForAdoption)),
        );

        match (registered, found, for_adoption) {
            (Ok(registered), Ok(found), Ok(for_adoption)) => {
                Ok(StatSummary::new(registered, found, for_adoption))
            }
            (registered, found, for_adoption) => {
                let failures: Vec<String> = [
                    ("registered", registered.err()),
                    ("found", found.err()),
                    ("for-adoption", for_adoption.err()),
                ]
                .into_iter()
                .filter_map(|(name, err)| err.map(|e| format!("{} count: {}", name, e)))
                .collect();

                Err(failures.join("; "))
            }
        }
    }
}

/// Registered is the implicit status of every pet, so it counts them all
fn filter_for(status: PetStatus) -> PetFilter {
    match status {
        PetStatus::Registered => PetFilter::All,
        other => PetFilter::Status(other),
    }
}
