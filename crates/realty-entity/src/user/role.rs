//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Back-office role of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full administrator.
    Admin,
    /// Manages listings and clients.
    #[default]
    Agent,
    /// Read-only access.
    Viewer,
}

impl UserRole {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Agent => "agent",
            Self::Viewer => "viewer",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names_match_as_str() {
        for role in [UserRole::Admin, UserRole::Agent, UserRole::Viewer] {
            assert_eq!(serde_json::to_value(role).unwrap(), role.as_str());
            assert_eq!(role.to_string(), role.as_str());
        }
        assert_eq!(UserRole::default(), UserRole::Agent);
        assert!(serde_json::from_str::<UserRole>("\"owner\"").is_err());
    }
}
