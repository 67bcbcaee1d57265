use serde::{Deserialize, Serialize};

/// Identity shown in the front end header. There is no login: this is a
/// placeholder supplied through configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayUser {
    pub name: String,
    pub email: String,
    pub avatar_url: String,
}

impl Default for DisplayUser {
    fn default() -> Self {
        DisplayUser {
            name: "Jorge".to_string(),
            email: "jorge@sportlink.com".to_string(),
            avatar_url: "https://i.pravatar.cc/150?img=12".to_string(),
        }
    }
}

impl DisplayUser {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}
