// services/match_announcement_service.rs
use async_trait::async_trait;
use tracing::info;

use crate::errors::Result;
use crate::models::match_announcement::{
    CreateMatchAnnouncementRequest, FindMatchAnnouncementsQuery, MatchAnnouncement,
    PaginatedMatchAnnouncements,
};
use crate::services::api_client::{ApiClient, ApiResponse};

#[async_trait]
pub trait MatchAnnouncementRepository: Send + Sync {
    async fn create(&self, request: &CreateMatchAnnouncementRequest) -> Result<ApiResponse<MatchAnnouncement>>;

    async fn find(&self, query: &FindMatchAnnouncementsQuery) -> Result<ApiResponse<PaginatedMatchAnnouncements>>;
}

#[derive(Debug, Clone)]
pub struct MatchAnnouncementApiAdapter {
    api: ApiClient,
}

impl MatchAnnouncementApiAdapter {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl MatchAnnouncementRepository for MatchAnnouncementApiAdapter {
    async fn create(&self, request: &CreateMatchAnnouncementRequest) -> Result<ApiResponse<MatchAnnouncement>> {
        info!(
            "Publishing announcement for '{}' ({}) on {}",
            request.team_name, request.sport, request.day
        );
        let url = self.api.endpoint(&["match-announcement"]);
        self.api.post(url, request, "Error creating match announcement").await
    }

    async fn find(&self, query: &FindMatchAnnouncementsQuery) -> Result<ApiResponse<PaginatedMatchAnnouncements>> {
        let url = self.api.endpoint(&["match-announcement"]);
        self.api
            .get(url, &query.query_params(), "Error finding match announcements")
            .await
    }
}
