use std::sync::Arc;

use tracing::{error, warn};

use crate::dtos::results::RetrieveTeamResult;
use crate::error_messages::get_error_message;
use crate::models::team::Team;
use crate::services::team_service::TeamRepository;

pub struct RetrieveTeamUseCase {
    repository: Arc<dyn TeamRepository>,
}

impl RetrieveTeamUseCase {
    pub fn new(repository: Arc<dyn TeamRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, sport: &str, name: &str) -> RetrieveTeamResult {
        let (sport, name) = (sport.trim(), name.trim());
        if sport.is_empty() {
            return RetrieveTeamResult::failed("Sport is required");
        }
        if name.is_empty() {
            return RetrieveTeamResult::failed("Team name is required");
        }

        match self.repository.retrieve_team(sport, name).await {
            Ok(response) if response.status == 200 => RetrieveTeamResult::found(Team::from(response.data)),
            Ok(response) => {
                warn!("Retrieve team answered with status {}", response.status);
                RetrieveTeamResult::failed("Failed to retrieve team")
            }
            Err(e) if e.is_not_found() => RetrieveTeamResult::failed("Team not found"),
            Err(e) => {
                error!("Retrieve team '{}' failed: {}", name, e);
                RetrieveTeamResult::failed(get_error_message(&e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::fakes::{api_err, ok, team_json, FakeTeamRepository, TeamCall};

    #[tokio::test]
    async fn requires_sport_then_name() {
        let fake = Arc::new(FakeTeamRepository::default());
        let use_case = RetrieveTeamUseCase::new(fake.clone());

        assert_eq!(use_case.execute("", "").await.error.as_deref(), Some("Sport is required"));
        assert_eq!(
            use_case.execute("Paddle", " ").await.error.as_deref(),
            Some("Team name is required")
        );
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn returns_the_team() {
        let fake = Arc::new(FakeTeamRepository::replying(ok(200, team_json("Los Pumas", "Football"))));
        let result = RetrieveTeamUseCase::new(fake.clone())
            .execute("Football", "Los Pumas")
            .await;

        assert!(result.success);
        assert_eq!(result.team.unwrap().stats.draws, 2);
        assert_eq!(
            fake.calls(),
            vec![TeamCall::Retrieve("Football".into(), "Los Pumas".into())]
        );
    }

    #[tokio::test]
    async fn missing_team_is_reported() {
        let fake = Arc::new(FakeTeamRepository::replying(api_err(404, Some("not_found"), "team not found")));
        let result = RetrieveTeamUseCase::new(fake).execute("Football", "Ghosts").await;

        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Team not found"));
    }
}
