use std::sync::Arc;

use tracing::{error, info};

use crate::dtos::results::SearchTeamResult;
use crate::error_messages::get_error_message;
use crate::models::team::{Category, Team};
use crate::services::team_service::TeamRepository;

/// Searches by sport, optionally narrowed by name and categories.
pub struct SearchTeamUseCase {
    repository: Arc<dyn TeamRepository>,
}

impl SearchTeamUseCase {
    pub fn new(repository: Arc<dyn TeamRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        sport: &str,
        team_name: Option<&str>,
        categories: &[Category],
    ) -> SearchTeamResult {
        let sport = sport.trim();
        if sport.is_empty() {
            return SearchTeamResult::failed("Sport is required");
        }

        match self.repository.find_team(sport, team_name, categories).await {
            Ok(response) => {
                let teams: Vec<Team> = response.data.into_iter().map(Team::from).collect();
                info!("Found {} {} teams", teams.len(), sport);
                SearchTeamResult::found(teams)
            }
            // the backend answers 404 when nothing matches
            Err(e) if e.is_not_found() => SearchTeamResult::found(Vec::new()),
            Err(e) => {
                error!("Team search failed: {}", e);
                SearchTeamResult::failed(get_error_message(&e))
            }
        }
    }
}
