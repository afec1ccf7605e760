//! Mocked sign-in for the per-app login dialog.
//!
//! Nothing is verified: any non-empty email/password pair is accepted after a
//! simulated round trip. A dismissed dialog does not cancel the pending
//! request; its result simply no longer matches an open attempt and is dropped.

use crate::app::AppName;
use std::time::Duration;
use thiserror::Error;

pub const AUTH_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("Please enter both email and password")]
    MissingCredentials,
    #[error("Invalid credentials. Please try again.")]
    Rejected,
    #[error("A login attempt is already in progress")]
    InProgress,
    #[error("No login dialog is open")]
    Closed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }

    pub fn validate(&self) -> Result<(), LoginError> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(LoginError::MissingCredentials)
        }
    }
}

pub async fn authenticate(credentials: &Credentials, delay: Duration) -> bool {
    tokio::time::sleep(delay).await;
    credentials.is_complete()
}

/// Identifies one submission of one dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attempt {
    session: u64,
    seq: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success(AppName),
    Rejected,
    Stale,
}

#[derive(Debug, Clone)]
pub struct LoginDialog {
    app: AppName,
    session: u64,
    submitted: u64,
    pending: Option<Attempt>,
    error: Option<LoginError>,
}

impl LoginDialog {
    /// `session` must differ between dialogs so that results addressed to a
    /// dismissed dialog never match a newer one.
    pub fn new(app: AppName, session: u64) -> Self {
        Self {
            app,
            session,
            submitted: 0,
            pending: None,
            error: None,
        }
    }

    pub fn app(&self) -> &AppName {
        &self.app
    }

    pub fn title(&self) -> String {
        format!("Login to {}", self.app)
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn error(&self) -> Option<&LoginError> {
        self.error.as_ref()
    }

    pub fn submit(&mut self, credentials: &Credentials) -> Result<Attempt, LoginError> {
        if self.is_loading() {
            return Err(LoginError::InProgress);
        }
        if let Err(e) = credentials.validate() {
            self.error = Some(e.clone());
            return Err(e);
        }

        self.submitted += 1;
        let attempt = Attempt {
            session: self.session,
            seq: self.submitted,
        };
        self.pending = Some(attempt);
        self.error = None;
        Ok(attempt)
    }

    pub fn resolve(&mut self, attempt: Attempt, authenticated: bool) -> LoginOutcome {
        if self.pending != Some(attempt) {
            return LoginOutcome::Stale;
        }
        self.pending = None;

        if authenticated {
            LoginOutcome::Success(self.app.clone())
        } else {
            self.error = Some(LoginError::Rejected);
            LoginOutcome::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialog() -> LoginDialog {
        LoginDialog::new(AppName::new("Instagram"), 1)
    }

    #[test]
    fn test_missing_fields_keep_dialog_open() {
        for (email, password) in [("", ""), ("a@b.com", ""), ("", "x")] {
            let mut d = dialog();
            let res = d.submit(&Credentials::new(email, password));
            assert_eq!(res, Err(LoginError::MissingCredentials));
            assert!(!d.is_loading());
            assert_eq!(
                d.error().map(|e| e.to_string()).as_deref(),
                Some("Please enter both email and password")
            );
        }
    }

    #[test]
    fn test_submit_then_success() {
        let mut d = dialog();
        let attempt = d.submit(&Credentials::new("a@b.com", "x")).unwrap();
        assert!(d.is_loading());
        assert_eq!(d.error(), None);
        assert_eq!(
            d.resolve(attempt, true),
            LoginOutcome::Success(AppName::new("Instagram"))
        );
        assert!(!d.is_loading());
    }

    #[test]
    fn test_rejection_shows_message() {
        let mut d = dialog();
        let attempt = d.submit(&Credentials::new("a@b.com", "x")).unwrap();
        assert_eq!(d.resolve(attempt, false), LoginOutcome::Rejected);
        assert_eq!(d.error(), Some(&LoginError::Rejected));
        assert!(d.submit(&Credentials::new("a@b.com", "x")).is_ok());
    }

    #[test]
    fn test_busy_dialog_ignores_submit() {
        let mut d = dialog();
        d.submit(&Credentials::new("a@b.com", "x")).unwrap();
        assert_eq!(
            d.submit(&Credentials::new("a@b.com", "x")),
            Err(LoginError::InProgress)
        );
    }

    #[test]
    fn test_foreign_attempt_is_stale() {
        let mut old = LoginDialog::new(AppName::new("X"), 1);
        let stale = old.submit(&Credentials::new("a", "b")).unwrap();

        let mut current = LoginDialog::new(AppName::new("X"), 2);
        current.submit(&Credentials::new("a", "b")).unwrap();
        assert_eq!(current.resolve(stale, true), LoginOutcome::Stale);
        assert!(current.is_loading());
    }

    #[test]
    fn test_title() {
        assert_eq!(dialog().title(), "Login to Instagram");
    }

    #[tokio::test(start_paused = true)]
    async fn test_authenticate_waits_for_delay() {
        let start = tokio::time::Instant::now();
        assert!(authenticate(&Credentials::new("a@b.com", "x"), AUTH_DELAY).await);
        assert!(start.elapsed() >= AUTH_DELAY);
        assert!(!authenticate(&Credentials::new("", "x"), AUTH_DELAY).await);
    }
}
