// Form state and local validation for the auth screens
//
// Validation mirrors the backend's account rules and runs before any
// request is issued: malformed input never leaves the client. Field
// errors are stored next to the field that produced them and cleared on
// the next edit.

use crossterm::event::KeyCode;
use regex::Regex;
use std::sync::OnceLock;

/// Loose email shape check; the backend does the authoritative validation
fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap())
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// A single-line editable text field
#[derive(Debug, Default, Clone)]
pub struct TextField {
    pub value: String,
    /// Validation or backend error attached to this field
    pub error: Option<String>,
    /// Render as asterisks (passwords)
    pub masked: bool,
}

impl TextField {
    pub fn masked() -> Self {
        Self {
            masked: true,
            ..Self::default()
        }
    }

    /// Apply a key press; returns true if the field consumed it
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char(c) if !c.is_control() => {
                self.value.push(c);
            }
            KeyCode::Backspace => {
                self.value.pop();
            }
            _ => return false,
        }
        // Editing clears a stale error
        self.error = None;
        true
    }

    /// Text shown in the UI (masked fields render as asterisks)
    pub fn display(&self) -> String {
        if self.masked {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Login
// ─────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFocus {
    #[default]
    Email,
    Password,
}

/// State for the login screen
#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: TextField,
    pub password: TextField,
    pub focus: LoginFocus,
    /// Toast-level error from the backend (bad credentials etc.)
    pub api_error: Option<String>,
    /// True while the login request is in flight
    pub submitting: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            password: TextField::masked(),
            ..Self::default()
        }
    }

    pub fn focused_field(&mut self) -> &mut TextField {
        match self.focus {
            LoginFocus::Email => &mut self.email,
            LoginFocus::Password => &mut self.password,
        }
    }

    pub fn next_focus(&mut self) {
        self.focus = match self.focus {
            LoginFocus::Email => LoginFocus::Password,
            LoginFocus::Password => LoginFocus::Email,
        };
    }

    /// Validate both fields; returns true when the form may be submitted
    pub fn validate(&mut self) -> bool {
        self.email.error = None;
        self.password.error = None;

        if self.email.value.trim().is_empty() {
            self.email.error = Some("Email is required".to_string());
        } else if !is_valid_email(self.email.value.trim()) {
            self.email.error = Some("Email is invalid".to_string());
        }

        if self.password.value.is_empty() {
            self.password.error = Some("Password is required".to_string());
        } else if self.password.value.chars().count() < 6 {
            self.password.error = Some("Password must be at least 6 characters".to_string());
        }

        self.email.error.is_none() && self.password.error.is_none()
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Registration (Email -> OTP -> Complete)
// ─────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterStep {
    #[default]
    Email,
    Otp,
    Complete,
    /// Account created; waiting for the redirect back to login
    Done,
}

/// Which field has focus on the Complete step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompleteFocus {
    #[default]
    Username,
    Password,
    ConfirmPassword,
}

/// State for the multi-step registration flow
#[derive(Debug, Default)]
pub struct RegisterFlow {
    pub step: RegisterStep,
    pub email: TextField,
    pub otp: TextField,
    pub username: TextField,
    pub password: TextField,
    pub confirm_password: TextField,
    pub complete_focus: CompleteFocus,
    /// Flow-level backend error (registration failed outright)
    pub api_error: Option<String>,
    pub submitting: bool,
}

impl RegisterFlow {
    pub fn new() -> Self {
        Self {
            password: TextField::masked(),
            confirm_password: TextField::masked(),
            ..Self::default()
        }
    }

    /// Field currently receiving typed input for the active step
    pub fn focused_field(&mut self) -> &mut TextField {
        match self.step {
            RegisterStep::Email => &mut self.email,
            RegisterStep::Otp => &mut self.otp,
            RegisterStep::Complete | RegisterStep::Done => match self.complete_focus {
                CompleteFocus::Username => &mut self.username,
                CompleteFocus::Password => &mut self.password,
                CompleteFocus::ConfirmPassword => &mut self.confirm_password,
            },
        }
    }

    pub fn next_focus(&mut self) {
        if self.step == RegisterStep::Complete {
            self.complete_focus = match self.complete_focus {
                CompleteFocus::Username => CompleteFocus::Password,
                CompleteFocus::Password => CompleteFocus::ConfirmPassword,
                CompleteFocus::ConfirmPassword => CompleteFocus::Username,
            };
        }
    }

    /// Step back one screen; returns false from the first step
    pub fn back(&mut self) -> bool {
        self.step = match self.step {
            RegisterStep::Email => return false,
            RegisterStep::Otp => RegisterStep::Email,
            RegisterStep::Complete => RegisterStep::Otp,
            RegisterStep::Done => return false,
        };
        true
    }

    pub fn validate_email_step(&mut self) -> bool {
        self.email.error = None;
        if self.email.value.trim().is_empty() {
            self.email.error = Some("Email is required".to_string());
        } else if !is_valid_email(self.email.value.trim()) {
            self.email.error = Some("Email is invalid".to_string());
        }
        self.email.error.is_none()
    }

    pub fn validate_otp_step(&mut self) -> bool {
        self.otp.error = None;
        let otp = self.otp.value.trim();
        if otp.is_empty() {
            self.otp.error = Some("OTP is required".to_string());
        } else if otp.chars().count() != 5 {
            self.otp.error = Some("OTP must be 5 digits".to_string());
        }
        self.otp.error.is_none()
    }

    pub fn validate_complete_step(&mut self) -> bool {
        self.username.error = None;
        self.password.error = None;
        self.confirm_password.error = None;

        if self.username.value.trim().is_empty() {
            self.username.error = Some("Username is required".to_string());
        } else if self.username.value.trim().chars().count() < 3 {
            self.username.error = Some("Username must be at least 3 characters".to_string());
        }

        if self.password.value.is_empty() {
            self.password.error = Some("Password is required".to_string());
        } else {
            if self.password.value.chars().count() < 6 {
                self.password.error = Some("Password must be at least 6 characters".to_string());
            }
            if self.password.value != self.confirm_password.value {
                self.confirm_password.error = Some("Passwords don't match".to_string());
            }
        }

        self.username.error.is_none()
            && self.password.error.is_none()
            && self.confirm_password.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("code.warrior@dsaquest.com"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("has space@x.com"));
    }

    #[test]
    fn login_requires_email_and_long_enough_password() {
        let mut form = LoginForm::new();
        assert!(!form.validate());
        assert!(form.email.error.is_some());
        assert!(form.password.error.is_some());

        form.email.value = "user@example.com".to_string();
        form.password.value = "short".to_string();
        assert!(!form.validate());
        assert!(form.email.error.is_none());
        assert_eq!(
            form.password.error.as_deref(),
            Some("Password must be at least 6 characters")
        );

        form.password.value = "longenough".to_string();
        assert!(form.validate());
    }

    #[test]
    fn typing_clears_field_error() {
        let mut form = LoginForm::new();
        form.validate();
        assert!(form.email.error.is_some());

        form.email.handle_key(KeyCode::Char('a'));
        assert!(form.email.error.is_none());
    }

    #[test]
    fn otp_must_be_five_digits() {
        let mut flow = RegisterFlow::new();
        flow.otp.value = "123".to_string();
        assert!(!flow.validate_otp_step());

        flow.otp.value = "12345".to_string();
        assert!(flow.validate_otp_step());
    }

    #[test]
    fn complete_step_enforces_username_and_password_rules() {
        let mut flow = RegisterFlow::new();
        flow.username.value = "ab".to_string();
        flow.password.value = "secret1".to_string();
        flow.confirm_password.value = "secret2".to_string();

        assert!(!flow.validate_complete_step());
        assert!(flow.username.error.is_some());
        assert_eq!(
            flow.confirm_password.error.as_deref(),
            Some("Passwords don't match")
        );

        flow.username.value = "abc".to_string();
        flow.confirm_password.value = "secret1".to_string();
        assert!(flow.validate_complete_step());
    }

    #[test]
    fn back_walks_steps_toward_email() {
        let mut flow = RegisterFlow::new();
        flow.step = RegisterStep::Complete;
        assert!(flow.back());
        assert_eq!(flow.step, RegisterStep::Otp);
        assert!(flow.back());
        assert_eq!(flow.step, RegisterStep::Email);
        assert!(!flow.back());
    }

    #[test]
    fn masked_field_displays_asterisks() {
        let mut field = TextField::masked();
        field.handle_key(KeyCode::Char('a'));
        field.handle_key(KeyCode::Char('b'));
        assert_eq!(field.display(), "**");
        field.handle_key(KeyCode::Backspace);
        assert_eq!(field.display(), "*");
    }
}
