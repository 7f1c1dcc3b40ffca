//! Console routes and the admission guard for protected views

use std::fmt::Display;

use crate::session::SessionState;

/// Views of the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Login form
    Login,
    /// Promotion list (protected)
    Promotions,
}

impl Route {
    /// Parse a path, optionally prefixed by the base path.
    ///
    /// `/` and anything unrecognised lead to the promotion list, which the
    /// guard then sends to the login view when nobody is logged in.
    pub fn from_path(path: &str, base_path: &str) -> Self {
        let path = path.trim();
        let relative = match path.strip_prefix(base_path) {
            Some(rest) if !base_path.is_empty() && (rest.is_empty() || rest.starts_with('/')) => {
                rest
            }
            _ => path,
        };

        match relative.trim_end_matches('/') {
            "/login" | "login" => Self::Login,
            _ => Self::Promotions,
        }
    }

    /// Path relative to the base path
    pub fn to_path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Promotions => "/promotions",
        }
    }

    /// Full path including the base path
    pub fn full_path(self, base_path: &str) -> String {
        format!("{}{}", base_path, self.to_path())
    }

    /// Whether the view needs an authenticated session
    pub fn requires_auth(self) -> bool {
        matches!(self, Self::Promotions)
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// Outcome of running the guard for a requested route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Session still loading: show a waiting indicator, admit nothing
    Wait,
    /// Render the requested view
    Admit(Route),
    /// Send the user elsewhere
    Redirect(Route),
}

/// Decide whether `route` may be rendered in the given session state.
///
/// Must be re-run on every navigation and after every session change.
pub fn guard(route: Route, state: SessionState) -> Admission {
    match state {
        SessionState::Loading => Admission::Wait,
        SessionState::Authenticated => Admission::Admit(route),
        SessionState::Unauthenticated if route.requires_auth() => {
            log::debug!("Access to {} denied, redirecting to login", route);
            Admission::Redirect(Route::Login)
        }
        SessionState::Unauthenticated => Admission::Admit(route),
    }
}
