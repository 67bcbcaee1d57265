use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::models::match_announcement::{MatchAnnouncement, PaginationInfo};
use crate::models::team::Team;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTeamResult {
    pub team: Option<Team>,
    pub success: bool,
    pub error: Option<String>,
}

impl CreateTeamResult {
    pub fn created(team: Team) -> Self {
        Self {
            team: Some(team),
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            team: None,
            success: false,
            error: Some(error.into()),
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchTeamResult {
    pub teams: Vec<Team>,
    pub success: bool,
    pub error: Option<String>,
}

impl SearchTeamResult {
    pub fn found(teams: Vec<Team>) -> Self {
        Self {
            teams,
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            teams: Vec::new(),
            success: false,
            error: Some(error.into()),
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetrieveTeamResult {
    pub team: Option<Team>,
    pub success: bool,
    pub error: Option<String>,
}

impl RetrieveTeamResult {
    pub fn found(team: Team) -> Self {
        Self {
            team: Some(team),
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            team: None,
            success: false,
            error: Some(error.into()),
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateMatchAnnouncementResult {
    pub announcement: Option<MatchAnnouncement>,
    pub success: bool,
    pub error: Option<String>,
}

impl CreateMatchAnnouncementResult {
    pub fn created(announcement: MatchAnnouncement) -> Self {
        Self {
            announcement: Some(announcement),
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            announcement: None,
            success: false,
            error: Some(error.into()),
        }
    }
}

/// One page of the feed. Failures still carry the empty pagination block.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindMatchAnnouncementsResult {
    pub announcements: Vec<MatchAnnouncement>,
    pub pagination: PaginationInfo,
    pub success: bool,
    pub error: Option<String>,
}

impl FindMatchAnnouncementsResult {
    pub fn page(announcements: Vec<MatchAnnouncement>, pagination: PaginationInfo) -> Self {
        Self {
            announcements,
            pagination,
            success: true,
            error: None,
        }
    }

    pub fn empty() -> Self {
        Self::page(Vec::new(), PaginationInfo::empty())
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            announcements: Vec::new(),
            pagination: PaginationInfo::empty(),
            success: false,
            error: Some(error.into()),
        }
    }
}
