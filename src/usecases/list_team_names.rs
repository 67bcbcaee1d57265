use std::sync::Arc;

use tracing::warn;

use crate::models::team::Sport;
use crate::services::team_service::TeamRepository;

/// Names offered as suggestions when typing a team name. Failures only
/// degrade the suggestions, so they are logged and swallowed.
pub struct ListTeamNamesUseCase {
    repository: Arc<dyn TeamRepository>,
}

impl ListTeamNamesUseCase {
    pub fn new(repository: Arc<dyn TeamRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, sport: Sport) -> Vec<String> {
        match self.repository.list_teams(sport.as_str()).await {
            Ok(response) => response.data.into_iter().map(|team| team.name).collect(),
            Err(e) => {
                warn!("Could not load {} team names: {}", sport, e);
                Vec::new()
            }
        }
    }
}
