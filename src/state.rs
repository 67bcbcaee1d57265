use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::user::DisplayUser;
use crate::services::api_client::ApiClient;
use crate::services::match_announcement_service::{MatchAnnouncementApiAdapter, MatchAnnouncementRepository};
use crate::services::team_service::{TeamApiAdapter, TeamRepository};
use crate::usecases::{
    CreateMatchAnnouncementUseCase, CreateTeamUseCase, FindMatchAnnouncementsUseCase, ListTeamNamesUseCase,
    RetrieveTeamUseCase, SearchTeamUseCase,
};

/// Team use cases, all sharing one repository.
#[derive(Clone)]
pub struct TeamModule {
    pub create_team: Arc<CreateTeamUseCase>,
    pub search_team: Arc<SearchTeamUseCase>,
    pub retrieve_team: Arc<RetrieveTeamUseCase>,
    pub list_team_names: Arc<ListTeamNamesUseCase>,
}

impl TeamModule {
    pub fn new(repository: Arc<dyn TeamRepository>) -> Self {
        TeamModule {
            create_team: Arc::new(CreateTeamUseCase::new(repository.clone())),
            search_team: Arc::new(SearchTeamUseCase::new(repository.clone())),
            retrieve_team: Arc::new(RetrieveTeamUseCase::new(repository.clone())),
            list_team_names: Arc::new(ListTeamNamesUseCase::new(repository)),
        }
    }
}

#[derive(Clone)]
pub struct MatchAnnouncementModule {
    pub create: Arc<CreateMatchAnnouncementUseCase>,
    pub find: Arc<FindMatchAnnouncementsUseCase>,
}

impl MatchAnnouncementModule {
    pub fn new(repository: Arc<dyn MatchAnnouncementRepository>) -> Self {
        MatchAnnouncementModule {
            create: Arc::new(CreateMatchAnnouncementUseCase::new(repository.clone())),
            find: Arc::new(FindMatchAnnouncementsUseCase::new(repository)),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub teams: TeamModule,
    pub announcements: MatchAnnouncementModule,
}

impl AppState {
    /// Wires both feature modules to the HTTP adapters.
    pub fn new(config: AppConfig) -> Result<Self> {
        let api = ApiClient::new(&config)?;
        Ok(AppState {
            teams: TeamModule::new(Arc::new(TeamApiAdapter::new(api.clone()))),
            announcements: MatchAnnouncementModule::new(Arc::new(MatchAnnouncementApiAdapter::new(api))),
            config,
        })
    }

    pub fn with_team_repository(mut self, repository: Arc<dyn TeamRepository>) -> Self {
        self.teams = TeamModule::new(repository);
        self
    }

    pub fn with_announcement_repository(mut self, repository: Arc<dyn MatchAnnouncementRepository>) -> Self {
        self.announcements = MatchAnnouncementModule::new(repository);
        self
    }

    pub fn display_user(&self) -> &DisplayUser {
        &self.config.display_user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::team::Sport;
    use crate::usecases::fakes::{ok, team_json, FakeTeamRepository, TeamCall};
    use serde_json::json;

    #[tokio::test]
    async fn substituted_repository_reaches_every_team_use_case() {
        let fake = Arc::new(FakeTeamRepository::replying(ok(200, json!([team_json("Boca", "Paddle")]))));
        let state = AppState::new(AppConfig::default())
            .unwrap()
            .with_team_repository(fake.clone());

        let names = state.teams.list_team_names.execute(Sport::Paddle).await;

        assert_eq!(names, vec!["Boca".to_string()]);
        assert_eq!(fake.calls(), vec![TeamCall::List("Paddle".into())]);
        assert_eq!(state.display_user().name, "Jorge");
    }
}
