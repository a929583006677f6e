//! Navigation guard
//!
//! Decides, for every navigation attempt, whether the target route may be
//! shown for the current session or where to send the user instead.

use crate::config::AuthConfig;
use crate::session::SessionSnapshot;
use internport_http::types::Role;

/// Access requirement declared by a route
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    RequiresAuth,
    /// Only for visitors who are not logged in (login, registration)
    RequiresGuest,
    /// Logged in with exactly this role
    Role(Role),
}

/// Per-route metadata consumed by the guard
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMeta {
    pub access: Access,
    /// The generic authenticated landing page, forwarded to the role's home
    pub landing: bool,
}

impl RouteMeta {
    pub fn public() -> Self {
        Self::with_access(Access::Public)
    }

    pub fn requires_auth() -> Self {
        Self::with_access(Access::RequiresAuth)
    }

    pub fn requires_guest() -> Self {
        Self::with_access(Access::RequiresGuest)
    }

    pub fn role(role: Role) -> Self {
        Self::with_access(Access::Role(role))
    }

    /// Authenticated landing page
    pub fn landing() -> Self {
        Self {
            access: Access::RequiresAuth,
            landing: true,
        }
    }

    fn with_access(access: Access) -> Self {
        Self {
            access,
            landing: false,
        }
    }

    /// A role requirement implies authentication
    pub fn needs_auth(&self) -> bool {
        matches!(self.access, Access::RequiresAuth | Access::Role(_))
    }
}

/// Outcome of a navigation attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Allow,
    Redirect(&'static str),
}

/// Home route for a role; shared by the guard and the login flow
pub fn home_path(role: Option<&Role>) -> &'static str {
    match role {
        Some(Role::Student) => "/student",
        Some(Role::Company) => "/company",
        Some(Role::Admin) => "/admin",
        Some(Role::Other(_)) | None => "/",
    }
}

/// Decide a navigation. Pure; evaluate it on every navigation.
pub fn guard(target: &RouteMeta, session: &SessionSnapshot) -> Navigation {
    let authenticated = session.is_authenticated();
    let role = session.role();

    if target.needs_auth() && !authenticated {
        return Navigation::Redirect(AuthConfig::LOGIN_PATH);
    }

    if target.access == Access::RequiresGuest && authenticated {
        return Navigation::Redirect(home_path(role));
    }

    if let Access::Role(required) = &target.access {
        if role != Some(required) {
            return Navigation::Redirect(home_path(role));
        }
    }

    if target.landing && authenticated {
        return match role {
            Some(Role::Student | Role::Company | Role::Admin) => {
                Navigation::Redirect(home_path(role))
            }
            // Unknown role: stay on the landing page instead of looping
            _ => Navigation::Allow,
        };
    }

    Navigation::Allow
}

#[cfg(test)]
mod tests {
    use super::*;
    use internport_http::types::UserProfile;

    fn session_as(role: Role) -> SessionSnapshot {
        SessionSnapshot::authenticated("t", Some(UserProfile::new(role, "u@x.com")))
    }

    #[test]
    fn test_requires_auth_without_session_goes_to_login() {
        let empty = SessionSnapshot::empty();
        assert_eq!(
            guard(&RouteMeta::requires_auth(), &empty),
            Navigation::Redirect("/login")
        );
        assert_eq!(
            guard(&RouteMeta::role(Role::Company), &empty),
            Navigation::Redirect("/login")
        );
        assert_eq!(
            guard(&RouteMeta::landing(), &empty),
            Navigation::Redirect("/login")
        );
    }

    #[test]
    fn test_guest_route_sends_user_home() {
        assert_eq!(
            guard(&RouteMeta::requires_guest(), &session_as(Role::Company)),
            Navigation::Redirect("/company")
        );
        assert_eq!(
            guard(&RouteMeta::requires_guest(), &session_as(Role::Student)),
            Navigation::Redirect("/student")
        );
        assert_eq!(
            guard(&RouteMeta::requires_guest(), &session_as(Role::Other("mentor".into()))),
            Navigation::Redirect("/")
        );
        assert_eq!(
            guard(&RouteMeta::requires_guest(), &SessionSnapshot::empty()),
            Navigation::Allow
        );
    }

    #[test]
    fn test_role_mismatch_sends_user_home() {
        assert_eq!(
            guard(&RouteMeta::role(Role::Company), &session_as(Role::Student)),
            Navigation::Redirect("/student")
        );
        assert_eq!(
            guard(&RouteMeta::role(Role::Admin), &session_as(Role::Company)),
            Navigation::Redirect("/company")
        );
        assert_eq!(
            guard(&RouteMeta::role(Role::Student), &session_as(Role::Student)),
            Navigation::Allow
        );
    }

    #[test]
    fn test_role_route_with_token_but_no_user() {
        let session = SessionSnapshot::authenticated("t", None);
        assert_eq!(
            guard(&RouteMeta::role(Role::Admin), &session),
            Navigation::Redirect("/")
        );
    }

    #[test]
    fn test_landing_forwards_to_role_home() {
        assert_eq!(
            guard(&RouteMeta::landing(), &session_as(Role::Admin)),
            Navigation::Redirect("/admin")
        );
        assert_eq!(
            guard(&RouteMeta::landing(), &session_as(Role::Student)),
            Navigation::Redirect("/student")
        );
    }

    #[test]
    fn test_landing_with_unknown_role_does_not_loop() {
        assert_eq!(
            guard(&RouteMeta::landing(), &session_as(Role::Other("mentor".into()))),
            Navigation::Allow
        );
        assert_eq!(
            guard(&RouteMeta::landing(), &SessionSnapshot::authenticated("t", None)),
            Navigation::Allow
        );
    }

    #[test]
    fn test_public_routes_always_allowed() {
        assert_eq!(
            guard(&RouteMeta::public(), &SessionSnapshot::empty()),
            Navigation::Allow
        );
        assert_eq!(
            guard(&RouteMeta::public(), &session_as(Role::Admin)),
            Navigation::Allow
        );
        assert_eq!(
            guard(&RouteMeta::requires_auth(), &session_as(Role::Student)),
            Navigation::Allow
        );
    }

    #[test]
    fn test_home_paths() {
        assert_eq!(home_path(Some(&Role::Student)), "/student");
        assert_eq!(home_path(Some(&Role::Company)), "/company");
        assert_eq!(home_path(Some(&Role::Admin)), "/admin");
        assert_eq!(home_path(Some(&Role::Other("x".into()))), "/");
        assert_eq!(home_path(None), "/");
    }
}
