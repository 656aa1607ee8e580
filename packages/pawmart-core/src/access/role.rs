use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Access level of the current viewer.
///
/// `Seller` and `Admin` both carry seller capability; only `Admin` carries
/// admin capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// No authenticated session.
    #[default]
    Guest,
    User,
    Seller,
    Admin,
}

impl Role {
    /// Read a role string coming from a session or the backend.
    ///
    /// Anything unrecognized becomes `Guest`. Never widen this default.
    pub fn from_session(value: &str) -> Self {
        value.parse().unwrap_or(Role::Guest)
    }

    /// Read the role stored on a backend user record. Records with no role,
    /// or a blank one, are plain users; anything else goes through
    /// [`Role::from_session`].
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Role::User,
            Some(role) => Role::from_session(role),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Role::Guest)
    }

    pub fn is_seller(&self) -> bool {
        matches!(self, Role::Seller | Role::Admin)
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Whether this role meets `capability` on its own.
    pub fn satisfies(&self, capability: Capability) -> bool {
        match capability {
            Capability::Public => true,
            Capability::Authenticated => self.is_authenticated(),
            Capability::Seller => self.is_seller(),
            Capability::Admin => self.is_admin(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::User => "user",
            Role::Seller => "seller",
            Role::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Guest => "Guest",
            Role::User => "User",
            Role::Seller => "Seller",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guest" => Ok(Role::Guest),
            "user" => Ok(Role::User),
            "seller" => Ok(Role::Seller),
            "admin" => Ok(Role::Admin),
            _ => Err(ParseError::UnknownRole(s.to_string())),
        }
    }
}

/// Decodes through [`Role::from_session`], so unknown and null roles fail
/// closed to `Guest` instead of erroring.
impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map_or(Role::Guest, Role::from_session))
    }
}

/// Minimum requirement attached to a route or action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Public,
    Authenticated,
    Seller,
    Admin,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Capability::Public => "public",
            Capability::Authenticated => "authenticated",
            Capability::Seller => "seller",
            Capability::Admin => "admin",
        })
    }
}

impl FromStr for Capability {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(Capability::Public),
            "authenticated" => Ok(Capability::Authenticated),
            "seller" => Ok(Capability::Seller),
            "admin" => Ok(Capability::Admin),
            _ => Err(ParseError::UnknownCapability(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_role_fails_closed() {
        assert_eq!(Role::from_session("superuser"), Role::Guest);
        assert_eq!(Role::from_session(""), Role::Guest);
        assert_eq!(Role::from_session(" Admin "), Role::Admin);
    }

    #[test]
    fn test_role_decodes_fail_closed() {
        let role: Role = serde_json::from_str(r#""superuser""#).unwrap();
        assert_eq!(role, Role::Guest);
        let role: Role = serde_json::from_str("null").unwrap();
        assert_eq!(role, Role::Guest);
        let role: Role = serde_json::from_str(r#""seller""#).unwrap();
        assert_eq!(role, Role::Seller);
    }

    #[test]
    fn test_stored_role_defaults() {
        assert_eq!(Role::from_stored(None), Role::User);
        assert_eq!(Role::from_stored(Some("")), Role::User);
        assert_eq!(Role::from_stored(Some(" \t")), Role::User);
        assert_eq!(Role::from_stored(Some("admin")), Role::Admin);
        assert_eq!(Role::from_stored(Some("root")), Role::Guest);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Role::Admin.label(), "Admin");
        assert_eq!(Role::Guest.to_string(), "guest");
    }

    #[test]
    fn test_role_flags() {
        assert!(!Role::Guest.is_authenticated());
        assert!(!Role::User.is_seller());
        assert!(Role::Seller.is_seller());
        assert!(!Role::Seller.is_admin());
        assert!(Role::Admin.is_seller());
        assert!(Role::Admin.is_admin());
    }

    #[test]
    fn test_satisfies_is_monotonic() {
        let roles = [Role::Guest, Role::User, Role::Seller, Role::Admin];
        let caps = [
            Capability::Public,
            Capability::Authenticated,
            Capability::Seller,
            Capability::Admin,
        ];
        for (i, role) in roles.iter().enumerate() {
            for (j, cap) in caps.iter().enumerate() {
                assert_eq!(role.satisfies(*cap), i >= j, "{role} vs {cap}");
            }
        }
    }
}
