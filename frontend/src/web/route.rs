//! Route definitions - domain model.
//!
//! Pure logic, no DOM or web_sys in sight. The guard predicates here
//! drive every navigation decision the router makes.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Login page
    Login,
    /// Account registration
    Register,
    /// The contact log (default route, needs auth)
    #[default]
    Log,
    /// Contact entry form (needs auth)
    NewContact,
    /// Page not found
    NotFound,
}

impl AppRoute {
    /// Parses a URL path into a route.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/log" => Self::Log,
            "/log/new" => Self::NewContact,
            "/login" => Self::Login,
            "/register" => Self::Register,
            _ => Self::NotFound,
        }
    }

    /// Canonical URL path of this route.
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Log => "/log",
            Self::NewContact => "/log/new",
            Self::NotFound => "/404",
        }
    }

    /// Whether this route is only reachable with a session.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Log | Self::NewContact)
    }

    /// Whether an authenticated visitor should be moved along (the
    /// login and registration pages serve no purpose once signed in).
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// Where unauthenticated visitors of a guarded route end up.
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// Where authenticated visitors of a public-only route end up.
    pub fn auth_success_redirect() -> Self {
        Self::Log
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip_through_parsing() {
        for route in [
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::Log,
            AppRoute::NewContact,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn root_path_is_the_log() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Log);
    }

    #[test]
    fn unknown_paths_become_not_found() {
        assert_eq!(AppRoute::from_path("/qsl"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/log/edit"), AppRoute::NotFound);
    }

    #[test]
    fn guards_cover_the_right_routes() {
        assert!(AppRoute::Log.requires_auth());
        assert!(AppRoute::NewContact.requires_auth());
        assert!(!AppRoute::Login.requires_auth());
        assert!(!AppRoute::NotFound.requires_auth());

        assert!(AppRoute::Login.should_redirect_when_authenticated());
        assert!(AppRoute::Register.should_redirect_when_authenticated());
        assert!(!AppRoute::Log.should_redirect_when_authenticated());
    }
}
