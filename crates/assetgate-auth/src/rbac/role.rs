//! Principal role enumeration.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Role claimed by a credential.
///
/// Parsing never fails: any value outside the known set becomes
/// [`Role::Unrecognized`], which can never satisfy a role requirement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Regular staff member.
    Staff,
    /// A role string this service does not know. Keeps the raw value.
    Unrecognized(String),
}

impl Role {
    /// Parses a role claim, case-insensitively.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("admin") {
            Self::Admin
        } else if trimmed.eq_ignore_ascii_case("staff") {
            Self::Staff
        } else {
            Self::Unrecognized(trimmed.to_string())
        }
    }

    /// Canonical string form, used for the injected role header.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "Admin",
            Self::Staff => "Staff",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Whether this is one of the known roles.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse(" STAFF "), Role::Staff);
    }

    #[test]
    fn test_unknown_role_is_kept_verbatim() {
        let role = Role::parse("Auditor");
        assert_eq!(role, Role::Unrecognized("Auditor".to_string()));
        assert!(!role.is_recognized());
        assert_eq!(role.as_str(), "Auditor");
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"Admin\"");
        let parsed: Role = serde_json::from_str("\"staff\"").unwrap();
        assert_eq!(parsed, Role::Staff);
    }
}
