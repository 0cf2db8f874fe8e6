//! Roles and session
//!
//! The role picked in the header gates every edit affordance. Views receive
//! it as an explicit [`Session`] value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

/// User role in the catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    /// Browse only
    #[default]
    Reader,
    /// May edit descriptions and metadata
    Contributor,
    /// Same edit rights as a contributor
    ProductOwner,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Reader, Role::Contributor, Role::ProductOwner];

    /// Wire value, also used as the `<option>` value in the role selector
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Reader => "reader",
            Role::Contributor => "contributor",
            Role::ProductOwner => "productOwner",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Reader => "Reader",
            Role::Contributor => "Contributor",
            Role::ProductOwner => "Product Owner",
        }
    }

    /// Contributors and product owners are privileged
    pub fn is_privileged(&self) -> bool {
        matches!(self, Role::Contributor | Role::ProductOwner)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// What the current user may do
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
}

impl Session {
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    pub fn can_edit(&self) -> bool {
        self.role.is_privileged()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privileged_roles() {
        assert!(!Session::new(Role::Reader).can_edit());
        assert!(Session::new(Role::Contributor).can_edit());
        assert!(Session::new(Role::ProductOwner).can_edit());
    }

    #[test]
    fn test_role_round_trips_through_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("admin".parse::<Role>().is_err());
        assert_eq!(serde_json::to_string(&Role::ProductOwner).unwrap(), "\"productOwner\"");
    }
}
