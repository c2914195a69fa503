// src/application/commands/statistics_commands.rs

use crate::application::{dto::*, state::AppState};

/// Load the landing-page pet counts
pub async fn get_pet_statistics(state: &AppState) -> Result<PetStatisticsDto, String> {
    let stats = state.statistics_service.load().await;
    Ok(PetStatisticsDto::from(stats))
}
