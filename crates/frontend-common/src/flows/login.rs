//! Login form and the redirect after signing in

use super::{RequestTracker, Submission};
use crate::auth::context::SessionStore;
use crate::auth::error_messages::LOGIN_SUCCEEDED;
use crate::config::AuthConfig;
use crate::error::{AuthError, ValidationError};
use crate::navigation::{Navigator, Route};
use crate::services::ParkingApi;
use parkspot_http::Identity;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginPhase {
    Editing,
    Submitting,
    Succeeded { message: String },
    Failed { message: String },
}

/// A login in flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginTicket {
    generation: u64,
    email: String,
    password: String,
}

impl LoginTicket {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Navigation owed after a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    generation: u64,
    pub to: Route,
    pub after: Duration,
}

pub struct LoginFlow {
    session: SessionStore,
    email: String,
    password: String,
    phase: LoginPhase,
    validation: Option<ValidationError>,
    tracker: RequestTracker,
    redirect_delay: Duration,
}

impl LoginFlow {
    pub fn new(session: SessionStore) -> Self {
        Self {
            session,
            email: String::new(),
            password: String::new(),
            phase: LoginPhase::Editing,
            validation: None,
            tracker: RequestTracker::default(),
            redirect_delay: AuthConfig::login_redirect_delay(),
        }
    }

    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }

    pub fn phase(&self) -> &LoginPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.tracker.is_in_flight()
    }

    pub fn validation(&self) -> Option<ValidationError> {
        self.validation
    }

    /// Fields as last entered; kept after a failure for correction
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// The acknowledgment or error shown under the form
    pub fn message(&self) -> Option<String> {
        match &self.phase {
            LoginPhase::Succeeded { message } | LoginPhase::Failed { message } => {
                Some(message.clone())
            }
            LoginPhase::Editing | LoginPhase::Submitting => {
                self.validation.map(|err| err.to_string())
            }
        }
    }

    pub fn begin(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<Submission<LoginTicket>, ValidationError> {
        if self.tracker.is_in_flight() {
            debug!("login already in flight, ignoring submission");
            return Ok(Submission::Suppressed);
        }

        self.email = email.to_string();
        self.password = password.to_string();

        if email.trim().is_empty() || password.is_empty() {
            self.validation = Some(ValidationError::MissingCredentials);
            return Err(ValidationError::MissingCredentials);
        }

        let Some(generation) = self.tracker.start() else {
            return Ok(Submission::Suppressed);
        };
        self.validation = None;
        self.phase = LoginPhase::Submitting;
        Ok(Submission::Started(LoginTicket {
            generation,
            email: email.trim().to_string(),
            password: password.to_string(),
        }))
    }

    /// Apply the login outcome; on success the session is written and a
    /// redirect to the landing page is returned.
    pub fn complete(
        &mut self,
        ticket: LoginTicket,
        outcome: Result<Identity, AuthError>,
    ) -> Option<Redirect> {
        if !self.tracker.finish(ticket.generation) {
            debug!("dropping stale login result");
            return None;
        }

        match outcome {
            Ok(identity) => {
                info!(user = %identity.id, "login succeeded");
                self.session.set_identity(Some(identity));
                self.phase = LoginPhase::Succeeded {
                    message: LOGIN_SUCCEEDED.to_string(),
                };
                Some(Redirect {
                    generation: ticket.generation,
                    to: Route::Home,
                    after: self.redirect_delay,
                })
            }
            Err(err) => {
                info!(error = %err, "login rejected");
                self.phase = LoginPhase::Failed {
                    message: err.message().to_string(),
                };
                None
            }
        }
    }

    /// Perform a due redirect unless the form was left in the meantime
    pub fn follow_redirect<N: Navigator + ?Sized>(
        &mut self,
        redirect: Redirect,
        navigator: &mut N,
    ) -> bool {
        if !self.tracker.is_current(redirect.generation) {
            return false;
        }
        navigator.navigate(redirect.to);
        true
    }

    /// Submit the form: log in, acknowledge, wait, then go to the landing page
    pub async fn submit<A, N>(
        &mut self,
        api: &A,
        navigator: &mut N,
        email: &str,
        password: &str,
    ) -> Result<Submission<()>, ValidationError>
    where
        A: ParkingApi + ?Sized,
        N: Navigator + ?Sized,
    {
        let ticket = match self.begin(email, password)? {
            Submission::Started(ticket) => ticket,
            Submission::Suppressed => return Ok(Submission::Suppressed),
        };

        let outcome = api.login(ticket.email(), ticket.password()).await;
        if let Some(redirect) = self.complete(ticket, outcome) {
            tokio::time::sleep(redirect.after).await;
            self.follow_redirect(redirect, navigator);
        }
        Ok(Submission::Started(()))
    }

    /// The form was left; pending results and redirects are dropped
    pub fn abandon(&mut self) {
        self.tracker.invalidate();
        self.phase = LoginPhase::Editing;
        self.validation = None;
    }
}
