pub mod api_client;
pub mod match_announcement_service;
pub mod team_service;
