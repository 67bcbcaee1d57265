use std::sync::Arc;

use tracing::{error, info, warn};
use validator::Validate;

use crate::dtos::results::CreateMatchAnnouncementResult;
use crate::error_messages::get_error_message;
use crate::models::match_announcement::CreateMatchAnnouncementRequest;
use crate::services::match_announcement_service::MatchAnnouncementRepository;

pub struct CreateMatchAnnouncementUseCase {
    repository: Arc<dyn MatchAnnouncementRepository>,
}

/// First failing check wins; team name, sport, day and location are checked
/// in that order.
fn validate(request: &CreateMatchAnnouncementRequest) -> Option<&'static str> {
    if request.team_name.trim().is_empty() {
        return Some("El nombre del equipo es obligatorio");
    }
    if request.sport.trim().is_empty() {
        return Some("El deporte es obligatorio");
    }
    if request.day.is_empty() {
        return Some("La fecha del partido es obligatoria");
    }
    if request.location.validate().is_err() {
        return Some("La ubicación completa es obligatoria");
    }
    None
}

impl CreateMatchAnnouncementUseCase {
    pub fn new(repository: Arc<dyn MatchAnnouncementRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, request: &CreateMatchAnnouncementRequest) -> CreateMatchAnnouncementResult {
        if let Some(message) = validate(request) {
            return CreateMatchAnnouncementResult::failed(message);
        }

        match self.repository.create(request).await {
            Ok(response) if response.status == 201 || response.status == 200 => {
                info!(
                    "Announcement {:?} published for '{}'",
                    response.data.id, response.data.team_name
                );
                CreateMatchAnnouncementResult::created(response.data)
            }
            Ok(response) => {
                warn!("Create announcement answered with status {}", response.status);
                CreateMatchAnnouncementResult::failed("Error al crear el anuncio")
            }
            Err(e) => {
                error!("Create announcement failed: {}", e);
                CreateMatchAnnouncementResult::failed(get_error_message(&e))
            }
        }
    }
}
