use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use validator::Validate;

use crate::errors::AppError;
use crate::models::team::{Category, Sport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnnouncementStatus {
    Pending,
    Confirmed,
    Cancelled,
    Expired,
}

/// Chip colour used when rendering a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Warning,
    Success,
    Error,
    Default,
}

impl AnnouncementStatus {
    pub const ALL: [AnnouncementStatus; 4] = [
        AnnouncementStatus::Pending,
        AnnouncementStatus::Confirmed,
        AnnouncementStatus::Cancelled,
        AnnouncementStatus::Expired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnnouncementStatus::Pending => "PENDING",
            AnnouncementStatus::Confirmed => "CONFIRMED",
            AnnouncementStatus::Cancelled => "CANCELLED",
            AnnouncementStatus::Expired => "EXPIRED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnnouncementStatus::Pending => "Pendiente",
            AnnouncementStatus::Confirmed => "Confirmado",
            AnnouncementStatus::Cancelled => "Cancelado",
            AnnouncementStatus::Expired => "Expirado",
        }
    }

    pub fn color(&self) -> StatusColor {
        match self {
            AnnouncementStatus::Pending => StatusColor::Warning,
            AnnouncementStatus::Confirmed => StatusColor::Success,
            AnnouncementStatus::Cancelled => StatusColor::Error,
            AnnouncementStatus::Expired => StatusColor::Default,
        }
    }

    /// Only PENDING can still move; the backend owns every transition.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, AnnouncementStatus::Pending)
    }
}

impl fmt::Display for AnnouncementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnnouncementStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        AnnouncementStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::invalid_data(format!("Unknown status '{}'", wanted)))
    }
}

/// Opponent levels an announcement accepts. Serialized with a `type` tag and
/// only the fields of the active variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdmittedCategories {
    Specific {
        #[serde(default)]
        categories: Vec<u8>,
    },
    GreaterThan {
        min_level: u8,
    },
    LessThan {
        max_level: u8,
    },
    Between {
        min_level: u8,
        max_level: u8,
    },
}

impl AdmittedCategories {
    pub fn type_name(&self) -> &'static str {
        match self {
            AdmittedCategories::Specific { .. } => "SPECIFIC",
            AdmittedCategories::GreaterThan { .. } => "GREATER_THAN",
            AdmittedCategories::LessThan { .. } => "LESS_THAN",
            AdmittedCategories::Between { .. } => "BETWEEN",
        }
    }

    pub fn admits(&self, category: Category) -> bool {
        let level = category.level();
        match self {
            AdmittedCategories::Specific { categories } => categories.contains(&level),
            AdmittedCategories::GreaterThan { min_level } => level >= *min_level,
            AdmittedCategories::LessThan { max_level } => level <= *max_level,
            AdmittedCategories::Between {
                min_level,
                max_level,
            } => level >= *min_level && level <= *max_level,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            AdmittedCategories::Specific { categories } => format!(
                "Categorías: {}",
                categories
                    .iter()
                    .map(|c| format!("L{}", c))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            AdmittedCategories::GreaterThan { min_level } => format!("Nivel >= L{}", min_level),
            AdmittedCategories::LessThan { max_level } => format!("Nivel <= L{}", max_level),
            AdmittedCategories::Between {
                min_level,
                max_level,
            } => format!("Nivel L{} - L{}", min_level, max_level),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Location {
    #[validate(length(min = 1))]
    pub country: String,
    #[validate(length(min = 1))]
    pub province: String,
    #[validate(length(min = 1))]
    pub locality: String,
}

impl Location {
    pub fn new(
        country: impl Into<String>,
        province: impl Into<String>,
        locality: impl Into<String>,
    ) -> Self {
        Location {
            country: country.into(),
            province: province.into(),
            locality: locality.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.locality, self.province, self.country)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchAnnouncement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub team_name: String,
    pub sport: Sport,
    pub day: DateTime<FixedOffset>,
    pub time_slot: TimeSlot,
    pub location: Location,
    pub admitted_categories: AdmittedCategories,
    pub status: AnnouncementStatus,
    pub created_at: DateTime<FixedOffset>,
}

/// Times are kept as the local `YYYY-MM-DDTHH:MM:SS` text the form produces;
/// the backend resolves the timezone from the location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlotInput {
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMatchAnnouncementRequest {
    pub team_name: String,
    pub sport: String,
    pub day: String,
    pub time_slot: TimeSlotInput,
    pub location: Location,
    pub admitted_categories: AdmittedCategories,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationFilter {
    pub country: Option<String>,
    pub province: Option<String>,
    pub locality: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindMatchAnnouncementsQuery {
    pub sports: Vec<Sport>,
    pub categories: Vec<Category>,
    pub statuses: Vec<AnnouncementStatus>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub location: Option<LocationFilter>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl FindMatchAnnouncementsQuery {
    /// Query-string pairs in the order the backend documents them. A parameter
    /// is only present when it carries a value.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if !self.sports.is_empty() {
            let sports: Vec<&str> = self.sports.iter().map(Sport::as_str).collect();
            params.push(("sports", sports.join(",")));
        }

        if !self.categories.is_empty() {
            params.push(("categories", Category::join(&self.categories)));
        }

        if !self.statuses.is_empty() {
            let statuses: Vec<&str> = self.statuses.iter().map(AnnouncementStatus::as_str).collect();
            params.push(("statuses", statuses.join(",")));
        }

        if let Some(from_date) = non_empty(&self.from_date) {
            params.push(("fromDate", from_date.to_string()));
        }

        if let Some(to_date) = non_empty(&self.to_date) {
            params.push(("toDate", to_date.to_string()));
        }

        if let Some(location) = &self.location {
            if let Some(country) = non_empty(&location.country) {
                params.push(("country", country.to_string()));
            }
            if let Some(province) = non_empty(&location.province) {
                params.push(("province", province.to_string()));
            }
            if let Some(locality) = non_empty(&location.locality) {
                params.push(("locality", locality.to_string()));
            }
        }

        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            params.push(("limit", limit.to_string()));
        }

        if let Some(offset) = self.offset.filter(|o| *o > 0) {
            params.push(("offset", offset.to_string()));
        }

        params
    }
}

/// Page block of a paginated answer. The backend names the page count
/// `out_of`; envelopes expose it as `outOf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub number: u32,
    #[serde(rename = "outOf", alias = "out_of")]
    pub out_of: u32,
    pub total: u64,
}

impl PaginationInfo {
    pub fn empty() -> Self {
        PaginationInfo {
            number: 1,
            out_of: 0,
            total: 0,
        }
    }

    pub fn is_consistent(&self) -> bool {
        if self.total == 0 && self.out_of != 0 {
            return false;
        }
        self.out_of == 0 || (1..=self.out_of).contains(&self.number)
    }
}

impl Default for PaginationInfo {
    fn default() -> Self {
        PaginationInfo::empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedMatchAnnouncements {
    #[serde(default)]
    pub data: Vec<MatchAnnouncement>,
    #[serde(default)]
    pub pagination: PaginationInfo,
}
