//! Navigation guard deciding between proceed, login, and home.
//!
//! STATE MACHINE
//! =============
//! The session is one of anonymous, authenticated-valid or
//! authenticated-expired. For each navigation, first match wins:
//!
//! 1. not `/login` and expired      -> logout, login with return target
//! 2. route needs auth and anonymous -> login with return target
//! 3. `/login` and valid            -> home
//! 4. otherwise                     -> proceed

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::{SessionPhase, SessionStore};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
/// Query parameter carrying the return target on the login route.
pub const REDIRECT_PARAM: &str = "redirect";

/// Navigable views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Login,
    Plans,
    Payments,
}

impl AppRoute {
    pub const ALL: [Self; 4] = [Self::Home, Self::Login, Self::Plans, Self::Payments];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => HOME_PATH,
            Self::Login => LOGIN_PATH,
            Self::Plans => "/plans",
            Self::Payments => "/payments",
        }
    }

    pub fn requires_auth(self) -> bool {
        !matches!(self, Self::Login)
    }

    /// Match a path (query and fragment ignored, trailing `/` tolerated).
    pub fn from_path(path: &str) -> Option<Self> {
        let path = strip_query(path);
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { HOME_PATH } else { trimmed };
        Self::ALL.into_iter().find(|r| r.path() == normalized)
    }
}

/// Result of evaluating one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Proceed,
    RedirectToLogin { redirect: String },
    RedirectToHome,
}

impl GuardOutcome {
    /// Where to navigate instead, or `None` to proceed.
    pub fn target(&self) -> Option<String> {
        match self {
            Self::Proceed => None,
            Self::RedirectToLogin { redirect } => Some(login_url(redirect)),
            Self::RedirectToHome => Some(HOME_PATH.to_owned()),
        }
    }
}

/// Decide the outcome for `destination` (path plus optional query) given the
/// session phase. Pure; the caller performs any logout.
pub fn evaluate(destination: &str, phase: SessionPhase) -> GuardOutcome {
    let route = AppRoute::from_path(destination);
    let is_login = route == Some(AppRoute::Login);
    let requires_auth = route.is_some_and(AppRoute::requires_auth);

    if !is_login && phase == SessionPhase::AuthenticatedExpired {
        return GuardOutcome::RedirectToLogin { redirect: destination.to_owned() };
    }
    if requires_auth && phase == SessionPhase::Anonymous {
        GuardOutcome::RedirectToLogin { redirect: destination.to_owned() }
    } else if is_login && phase == SessionPhase::AuthenticatedValid {
        GuardOutcome::RedirectToHome
    } else {
        GuardOutcome::Proceed
    }
}

/// Evaluate a navigation against the live session, logging out first when
/// the token has expired.
pub fn guard_navigation(session: &SessionStore, destination: &str) -> GuardOutcome {
    let phase = session.phase();
    let outcome = evaluate(destination, phase);
    if phase == SessionPhase::AuthenticatedExpired && matches!(outcome, GuardOutcome::RedirectToLogin { .. }) {
        leptos::logging::log!("session expired; signing out before {destination}");
        session.logout();
    }
    outcome
}

/// Where the guard component navigates for `outcome`, given the session
/// phase seen on its previous run. `RedirectToHome` goes to `/`, except on
/// the run where the session has just become valid: that is a fresh sign-in
/// on `/login`, which follows the sanitised `redirect` value instead.
pub fn navigation_target(
    outcome: &GuardOutcome,
    previous: Option<SessionPhase>,
    redirect: Option<&str>,
) -> Option<String> {
    let just_signed_in = previous.is_some_and(|p| p != SessionPhase::AuthenticatedValid);
    match outcome {
        GuardOutcome::RedirectToHome if just_signed_in => Some(post_login_target(redirect)),
        _ => outcome.target(),
    }
}

/// Path plus query, the form used as the login return target.
pub fn destination(path: &str, search: &str) -> String {
    let query = search.trim_start_matches('?');
    if query.is_empty() { path.to_owned() } else { format!("{path}?{query}") }
}

/// `/login?redirect=<encoded target>`.
pub fn login_url(redirect: &str) -> String {
    format!("{LOGIN_PATH}?{REDIRECT_PARAM}={}", urlencoding::encode(redirect))
}

/// Where to go after a successful login: a same-site absolute path from the
/// `redirect` query value, else home. Never back to the login view itself.
pub fn post_login_target(redirect: Option<&str>) -> String {
    let Some(target) = redirect.map(str::trim).filter(|r| !r.is_empty()) else {
        return HOME_PATH.to_owned();
    };
    let same_site = target.starts_with('/') && !target.starts_with("//") && !target.contains('\\');
    if !same_site || AppRoute::from_path(target) == Some(AppRoute::Login) {
        return HOME_PATH.to_owned();
    }
    target.to_owned()
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}
