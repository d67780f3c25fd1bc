use payloads::identity;
use yewdux::prelude::*;

/// Which top-level view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Landing,
    Login,
    Signup,
}

/// View state for the whole client.
///
/// Transitions are plain methods so they can be exercised without
/// rendering; the components only ever mutate state through them.
#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub mode: Mode,
    pub username: String,
    pub password: String,
    pub loading: bool,
    pub error: Option<String>,
}

impl State {
    /// Explicit navigation between views. Every mode change resets the
    /// fields and any error; the initial landing transitions are covered
    /// trivially since the fields start empty.
    pub fn open(&mut self, mode: Mode) {
        self.mode = mode;
        self.username.clear();
        self.password.clear();
        self.error = None;
    }

    /// Username input. The signup field is normalized on every change;
    /// the login field accepts raw input.
    pub fn set_username(&mut self, raw: &str) {
        self.username = match self.mode {
            Mode::Signup => identity::normalize_username(raw),
            _ => raw.to_string(),
        };
    }

    pub fn set_password(&mut self, raw: &str) {
        self.password = raw.to_string();
    }

    /// Submit gating: never while a request is in flight; signup also
    /// requires a username and a long-enough password. Login defers all
    /// validation to the backend.
    pub fn can_submit(&self) -> bool {
        if self.loading {
            return false;
        }
        match self.mode {
            Mode::Signup => {
                identity::signup_fields_valid(&self.username, &self.password)
            }
            _ => true,
        }
    }

    pub fn begin_submit(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// A failed submission re-enables the form in place: mode and field
    /// values stay put so the user can correct and resubmit.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// A successful signup returns to the landing view with clear fields.
    pub fn finish_signup(&mut self) {
        self.loading = false;
        self.open(Mode::Landing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(mode: Mode) -> State {
        State {
            mode,
            username: "alice".to_string(),
            password: "longenough1".to_string(),
            loading: false,
            error: Some("stale".to_string()),
        }
    }

    #[test]
    fn opening_a_mode_resets_fields_and_error() {
        for target in [Mode::Landing, Mode::Login, Mode::Signup] {
            let mut state = filled(Mode::Login);
            state.open(target);
            assert_eq!(state.mode, target);
            assert!(state.username.is_empty());
            assert!(state.password.is_empty());
            assert_eq!(state.error, None);
        }
    }

    #[test]
    fn signup_username_is_normalized_on_every_change() {
        let mut state = State {
            mode: Mode::Signup,
            ..State::default()
        };
        state.set_username("Jo!!hn_Doe");
        assert_eq!(state.username, "john_doe");

        // Feeding the field's own value back through changes nothing.
        let current = state.username.clone();
        state.set_username(&current);
        assert_eq!(state.username, "john_doe");
    }

    #[test]
    fn login_username_accepts_raw_input() {
        let mut state = State {
            mode: Mode::Login,
            ..State::default()
        };
        state.set_username("John!");
        assert_eq!(state.username, "John!");
    }

    #[test]
    fn submit_disabled_while_loading() {
        for mode in [Mode::Login, Mode::Signup] {
            let mut state = filled(mode);
            assert!(state.can_submit());
            state.begin_submit();
            assert!(!state.can_submit());
        }
    }

    #[test]
    fn signup_submit_requires_username_and_password_length() {
        let mut state = filled(Mode::Signup);
        assert!(state.can_submit());

        state.username.clear();
        assert!(!state.can_submit());

        state.username = "alice".to_string();
        state.password = "short77".to_string();
        assert!(!state.can_submit());

        state.password = "12345678".to_string();
        assert!(state.can_submit());
    }

    #[test]
    fn login_submit_has_no_field_gating() {
        let state = State {
            mode: Mode::Login,
            ..State::default()
        };
        // Empty fields go to the backend and come back rejected.
        assert!(state.can_submit());
    }

    #[test]
    fn begin_submit_clears_previous_error() {
        let mut state = filled(Mode::Login);
        state.begin_submit();
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn failure_keeps_mode_and_fields() {
        let mut state = filled(Mode::Login);
        state.begin_submit();
        state.fail("Invalid credentials");
        assert_eq!(state.mode, Mode::Login);
        assert_eq!(state.username, "alice");
        assert_eq!(state.password, "longenough1");
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn signup_rejection_stays_on_the_signup_view() {
        let mut state = filled(Mode::Signup);
        state.begin_submit();
        state.fail("username taken");
        assert_eq!(state.mode, Mode::Signup);
        assert_eq!(state.error.as_deref(), Some("username taken"));
    }

    #[test]
    fn successful_signup_lands_with_clear_fields() {
        let mut state = filled(Mode::Signup);
        state.begin_submit();
        state.finish_signup();
        assert_eq!(state.mode, Mode::Landing);
        assert!(state.username.is_empty());
        assert!(state.password.is_empty());
        assert_eq!(state.error, None);
        assert!(!state.loading);
    }
}
