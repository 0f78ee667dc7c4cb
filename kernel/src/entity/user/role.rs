use serde::{Deserialize, Serialize};

/// Librarian grants the catalog-mutation capability, including marking
/// instances renewed or returned. Rows store the codes m/l.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Member,
    Librarian,
}

impl UserRole {
    pub fn as_code(&self) -> &'static str {
        match self {
            UserRole::Member => "m",
            UserRole::Librarian => "l",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "m" => Some(UserRole::Member),
            "l" => Some(UserRole::Librarian),
            _ => None,
        }
    }
}
