use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{debug, error, warn};

use crate::dtos::results::FindMatchAnnouncementsResult;
use crate::error_messages::get_error_message;
use crate::models::match_announcement::FindMatchAnnouncementsQuery;
use crate::services::match_announcement_service::MatchAnnouncementRepository;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub struct FindMatchAnnouncementsUseCase {
    repository: Arc<dyn MatchAnnouncementRepository>,
    today: fn() -> NaiveDate,
}

impl FindMatchAnnouncementsUseCase {
    pub fn new(repository: Arc<dyn MatchAnnouncementRepository>) -> Self {
        Self {
            repository,
            today: local_today,
        }
    }

    /// Replaces the clock used for the default `from_date`.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Past announcements are never listed: a missing or empty `from_date`
    /// becomes today's date.
    pub async fn execute(&self, query: &FindMatchAnnouncementsQuery) -> FindMatchAnnouncementsResult {
        let mut query = query.clone();
        if query.from_date.as_deref().map_or(true, str::is_empty) {
            query.from_date = Some((self.today)().format("%Y-%m-%d").to_string());
        }

        match self.repository.find(&query).await {
            Ok(response) if response.status == 200 => {
                debug!(
                    "Page {}/{} with {} announcements",
                    response.data.pagination.number,
                    response.data.pagination.out_of,
                    response.data.data.len()
                );
                FindMatchAnnouncementsResult::page(response.data.data, response.data.pagination)
            }
            Ok(response) if response.status == 404 => FindMatchAnnouncementsResult::empty(),
            Ok(response) => {
                warn!("Find announcements answered with status {}", response.status);
                FindMatchAnnouncementsResult::failed("Error al obtener los anuncios")
            }
            Err(e) if e.is_not_found() => FindMatchAnnouncementsResult::empty(),
            Err(e) => {
                error!("Find announcements failed: {}", e);
                FindMatchAnnouncementsResult::failed(get_error_message(&e))
            }
        }
    }
}
