pub mod create_match_announcement;
pub mod create_team;
pub mod find_match_announcements;
pub mod list_team_names;
pub mod retrieve_team;
pub mod search_team;

pub use create_match_announcement::CreateMatchAnnouncementUseCase;
pub use create_team::CreateTeamUseCase;
pub use find_match_announcements::FindMatchAnnouncementsUseCase;
pub use list_team_names::ListTeamNamesUseCase;
pub use retrieve_team::RetrieveTeamUseCase;
pub use search_team::SearchTeamUseCase;
