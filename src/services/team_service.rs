// services/team_service.rs
use async_trait::async_trait;
use tracing::info;

use crate::errors::Result;
use crate::models::team::{Category, CreateTeamRequest, TeamPayload};
use crate::services::api_client::{ApiClient, ApiResponse};

/// Port the team use cases depend on.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    async fn create_team(&self, request: &CreateTeamRequest) -> Result<ApiResponse<TeamPayload>>;

    async fn find_team(
        &self,
        sport: &str,
        team_name: Option<&str>,
        categories: &[Category],
    ) -> Result<ApiResponse<Vec<TeamPayload>>>;

    /// Every team of a sport, used to feed name autocompletion.
    async fn list_teams(&self, sport: &str) -> Result<ApiResponse<Vec<TeamPayload>>>;

    async fn retrieve_team(&self, sport: &str, name: &str) -> Result<ApiResponse<TeamPayload>>;
}

/// `name` and `category` only appear when they carry a value.
pub fn team_search_params(team_name: Option<&str>, categories: &[Category]) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(name) = team_name.filter(|n| !n.is_empty()) {
        params.push(("name", name.to_string()));
    }
    if !categories.is_empty() {
        params.push(("category", Category::join(categories)));
    }
    params
}

#[derive(Debug, Clone)]
pub struct TeamApiAdapter {
    api: ApiClient,
}

impl TeamApiAdapter {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl TeamRepository for TeamApiAdapter {
    async fn create_team(&self, request: &CreateTeamRequest) -> Result<ApiResponse<TeamPayload>> {
        info!("Creating team '{}'", request.name);
        let url = self.api.endpoint(&["team"]);
        self.api.post(url, request, "Error creating team").await
    }

    async fn find_team(
        &self,
        sport: &str,
        team_name: Option<&str>,
        categories: &[Category],
    ) -> Result<ApiResponse<Vec<TeamPayload>>> {
        let url = self.api.endpoint(&["sport", sport, "team"]);
        let params = team_search_params(team_name, categories);
        self.api.get(url, &params, "Error finding teams").await
    }

    async fn list_teams(&self, sport: &str) -> Result<ApiResponse<Vec<TeamPayload>>> {
        let url = self.api.endpoint(&["sport", sport, "team"]);
        self.api.get(url, &[], "Error listing teams").await
    }

    async fn retrieve_team(&self, sport: &str, name: &str) -> Result<ApiResponse<TeamPayload>> {
        let url = self.api.endpoint(&["sport", sport, "team", name]);
        self.api.get(url, &[], "Error retrieving team").await
    }
}
