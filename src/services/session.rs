use std::rc::Rc;

use yew::prelude::*;

use crate::models::{AppSettings, UserProfile};
use crate::services::storage::LocalStorage;

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

pub const KEY_TOKEN: &str = "token";
pub const KEY_PROFILE: &str = "profile_v1";
pub const KEY_SETTINGS: &str = "recipe_settings_v1";

/// Cached login state. It is only a cache: the server may have expired the
/// token without this side knowing until the next `check-auth`.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Session {
    pub token: Option<String>,
    pub profile: UserProfile,
}

pub enum SessionAction {
    LoggedIn { token: String, profile: Option<UserProfile> },
    ProfileUpdated(UserProfile),
    TokenRejected,
    LoggedOut,
}

impl Session {
    pub fn load() -> Self {
        Self {
            token: LocalStorage::get_string(KEY_TOKEN),
            profile: LocalStorage::get(KEY_PROFILE).unwrap_or_default(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn display_name(&self) -> &str {
        let name = self.profile.name.trim();
        if name.is_empty() { "User" } else { name }
    }

    pub fn display_email(&self) -> &str {
        let email = self.profile.email.trim();
        if email.is_empty() { "user@example.com" } else { email }
    }

    /// State transition without touching storage.
    pub fn apply(&self, action: SessionAction) -> Session {
        match action {
            SessionAction::LoggedIn { token, profile } => Session {
                token: Some(token),
                profile: profile.unwrap_or_else(|| self.profile.clone()),
            },
            SessionAction::ProfileUpdated(profile) => Session {
                token: self.token.clone(),
                profile,
            },
            SessionAction::TokenRejected => Session {
                token: None,
                profile: self.profile.clone(),
            },
            SessionAction::LoggedOut => Session::default(),
        }
    }

    fn persist(&self) {
        match &self.token {
            Some(token) => LocalStorage::set_string(KEY_TOKEN, token),
            None => LocalStorage::remove(KEY_TOKEN),
        }
        if self.profile == UserProfile::default() {
            LocalStorage::remove(KEY_PROFILE);
        } else {
            LocalStorage::set(KEY_PROFILE, &self.profile);
        }
    }
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        next.persist();
        Rc::new(next)
    }
}

pub type SessionContext = UseReducerHandle<Session>;
pub type SettingsContext = UseStateHandle<AppSettings>;

#[hook]
pub fn use_session() -> SessionContext {
    // App always provides the context; fall back to a detached reducer so a
    // component rendered in isolation still works.
    let fallback = use_reducer(Session::load);
    use_context::<SessionContext>().unwrap_or(fallback)
}

#[hook]
pub fn use_settings() -> SettingsContext {
    let fallback = use_state(|| LocalStorage::get::<AppSettings>(KEY_SETTINGS).unwrap_or_default());
    use_context::<SettingsContext>().unwrap_or(fallback)
}
