use std::sync::Arc;

use tracing::{error, info, warn};

use crate::dtos::results::CreateTeamResult;
use crate::error_messages::get_error_message;
use crate::models::team::{CreateTeamRequest, Team};
use crate::services::team_service::TeamRepository;

pub struct CreateTeamUseCase {
    repository: Arc<dyn TeamRepository>,
}

impl CreateTeamUseCase {
    pub fn new(repository: Arc<dyn TeamRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, request: &CreateTeamRequest) -> CreateTeamResult {
        if request.name.trim().is_empty() {
            return CreateTeamResult::failed("Team name is required");
        }
        if request.sport.is_none() {
            return CreateTeamResult::failed("Sport is required");
        }

        match self.repository.create_team(request).await {
            Ok(response) if response.status == 201 => {
                info!("Team '{}' created", response.data.name);
                CreateTeamResult::created(Team::from(response.data))
            }
            Ok(response) => {
                warn!("Create team answered with status {}", response.status);
                CreateTeamResult::failed("Failed to create team")
            }
            Err(e) => {
                error!("Create team failed: {}", e);
                CreateTeamResult::failed(get_error_message(&e))
            }
        }
    }
}
