//! Role requirement declared by a route.

use std::collections::HashSet;
use std::fmt;

use super::role::Role;

/// The set of roles a route accepts. An empty set imposes no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleRequirement {
    roles: HashSet<Role>,
}

impl RoleRequirement {
    /// No restriction: any authenticated principal passes, with or without a role.
    pub fn none() -> Self {
        Self::default()
    }

    /// Accepts principals holding any of the given roles.
    pub fn any_of(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
        }
    }

    /// Shorthand for a single-role requirement.
    pub fn only(role: Role) -> Self {
        Self::any_of([role])
    }

    /// Whether this requirement accepts everyone.
    pub fn is_unrestricted(&self) -> bool {
        self.roles.is_empty()
    }

    /// Decides whether a claimed role satisfies this requirement.
    ///
    /// A missing or unrecognized role only passes an unrestricted requirement.
    pub fn permits(&self, role: Option<&Role>) -> bool {
        if self.roles.is_empty() {
            return true;
        }
        match role {
            Some(role) if role.is_recognized() => self.roles.contains(role),
            _ => false,
        }
    }
}

impl fmt::Display for RoleRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.roles.is_empty() {
            return f.write_str("*");
        }
        let mut names: Vec<&str> = self.roles.iter().map(Role::as_str).collect();
        names.sort_unstable();
        f.write_str(&names.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrestricted_accepts_missing_role() {
        let req = RoleRequirement::none();
        assert!(req.permits(None));
        assert!(req.permits(Some(&Role::parse("whatever"))));
    }

    #[test]
    fn test_member_role_is_permitted() {
        let req = RoleRequirement::any_of([Role::Admin, Role::Staff]);
        assert!(req.permits(Some(&Role::Staff)));
    }

    #[test]
    fn test_non_member_and_missing_roles_are_refused() {
        let req = RoleRequirement::only(Role::Admin);
        assert!(!req.permits(Some(&Role::Staff)));
        assert!(!req.permits(None));
    }

    #[test]
    fn test_unrecognized_never_matches_even_if_listed() {
        let odd = Role::parse("auditor");
        let req = RoleRequirement::only(odd.clone());
        assert!(!req.is_unrestricted());
        assert!(!req.permits(Some(&odd)));
    }

    #[test]
    fn test_display_is_sorted() {
        let req = RoleRequirement::any_of([Role::Staff, Role::Admin]);
        assert_eq!(req.to_string(), "Admin|Staff");
        assert_eq!(RoleRequirement::none().to_string(), "*");
    }
}
