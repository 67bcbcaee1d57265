use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sport {
    Football,
    Paddle,
    Tennis,
}

impl Sport {
    pub const ALL: [Sport; 3] = [Sport::Football, Sport::Paddle, Sport::Tennis];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Football => "Football",
            Sport::Paddle => "Paddle",
            Sport::Tennis => "Tennis",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sport {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Sport::ALL
            .into_iter()
            .find(|sport| sport.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::invalid_data(format!("Unknown sport '{}'", wanted)))
    }
}

/// Skill tier: 0 is unranked, 1..=7 are ranked levels with 7 the most advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(u8);

impl Category {
    pub const UNRANKED: Category = Category(0);
    pub const MIN_RANKED: u8 = 1;
    pub const MAX: u8 = 7;

    pub fn new(level: u8) -> Result<Self, AppError> {
        if level > Self::MAX {
            return Err(AppError::invalid_data(format!(
                "Category must be between 0 and {}, got {}",
                Self::MAX,
                level
            )));
        }
        Ok(Category(level))
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    pub fn is_ranked(&self) -> bool {
        self.0 >= Self::MIN_RANKED
    }

    pub fn label(&self) -> String {
        match self.0 {
            0 => "Unranked".to_string(),
            1 => "L1 - Principiante".to_string(),
            7 => "L7 - Avanzado".to_string(),
            level => format!("L{}", level),
        }
    }

    /// Comma-joined levels, the shape the backend expects in query strings.
    pub fn join(categories: &[Category]) -> String {
        categories
            .iter()
            .map(|c| c.0.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = s
            .trim()
            .trim_start_matches(['L', 'l'])
            .parse::<u8>()
            .map_err(|_| AppError::invalid_data(format!("Invalid category '{}'", s.trim())))?;
        Category::new(level)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    #[serde(rename = "Wins")]
    pub wins: u32,
    #[serde(rename = "Losses")]
    pub losses: u32,
    #[serde(rename = "Draws")]
    pub draws: u32,
}

impl TeamStats {
    pub fn played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Category")]
    pub category: Category,
    #[serde(rename = "Sport")]
    pub sport: Sport,
}

/// Team exactly as the backend sends it; `Members` may arrive as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPayload {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Category")]
    pub category: Category,
    #[serde(rename = "Stats", default)]
    pub stats: TeamStats,
    #[serde(rename = "Sport")]
    pub sport: Sport,
    #[serde(rename = "Members", default)]
    pub members: Option<Vec<Player>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Category")]
    pub category: Category,
    #[serde(rename = "Stats")]
    pub stats: TeamStats,
    #[serde(rename = "Sport")]
    pub sport: Sport,
    #[serde(rename = "Members")]
    pub members: Vec<Player>,
}

impl From<TeamPayload> for Team {
    fn from(payload: TeamPayload) -> Self {
        Team {
            name: payload.name,
            category: payload.category,
            stats: payload.stats,
            sport: payload.sport,
            members: payload.members.unwrap_or_default(),
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateTeamRequest {
    pub sport: Option<Sport>,
    pub name: String,
    pub category: Option<Category>,
    pub players: Option<Vec<String>>,
}

impl CreateTeamRequest {
    pub fn new(sport: Sport, name: impl Into<String>) -> Self {
        CreateTeamRequest {
            sport: Some(sport),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_players(mut self, players: Vec<String>) -> Self {
        self.players = Some(players);
        self
    }
}
