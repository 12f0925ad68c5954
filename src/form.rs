//! The waitlist submission state machine.
//!
//! One `WaitlistForm` exists per rendered form instance. It owns the email
//! value, the status flag and the outcome message; nothing here is shared or
//! persisted.

use crate::domain::WaitlistEmail;
use crate::waitlist_client::WaitlistAck;
use crate::waitlist_client::WaitlistClient;
use crate::waitlist_client::WaitlistClientError;

pub const CONFIRMATION_MESSAGE: &str = "You’re in! We’ll keep you posted.";
pub const ALREADY_REGISTERED_MESSAGE: &str = "You're already on the list. 🚀";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";
pub const NETWORK_FAILURE_MESSAGE: &str = "Network error, please try again";

/// Exactly one variant is active at a time. `Idle` is the rest state and is
/// never re-entered: a new submission from a terminal state goes straight
/// back to `Loading`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Loading,
    Success,
    Exists,
    Error,
}

/// `Idle -> Loading -> {Success | Exists | Error}`, driven by `begin` and
/// `resolve`; no transition happens without one of those events.
#[derive(Debug)]
pub struct WaitlistForm {
    email: String,
    status: SubmissionStatus,
    message: String,
}

impl Default for WaitlistForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            status: SubmissionStatus::Idle,
            message: String::new(),
        }
    }
}

impl WaitlistForm {
    pub fn with_email(email: String) -> Self {
        Self {
            email,
            ..Self::default()
        }
    }

    pub fn email(&self) -> &str { &self.email }

    pub fn status(&self) -> SubmissionStatus { self.status }

    pub fn message(&self) -> &str { &self.message }

    /// Enter `Loading` and clear the previous outcome message. Happens
    /// synchronously, before any request is issued. An empty email is a
    /// silent no-op: no state change, and `None` tells the caller to issue no
    /// request.
    pub fn begin(&mut self) -> Option<WaitlistEmail> {
        let email = WaitlistEmail::parse(self.email.clone())?;
        self.status = SubmissionStatus::Loading;
        self.message.clear();
        Some(email)
    }

    /// Apply the single terminal transition for a settled request. The email
    /// is cleared only on `Success`; a duplicate keeps it so the visitor sees
    /// what they typed.
    pub fn resolve(
        &mut self,
        outcome: Result<WaitlistAck, WaitlistClientError>,
    ) {
        match outcome {
            Ok(WaitlistAck::Accepted) => {
                self.status = SubmissionStatus::Success;
                self.message = CONFIRMATION_MESSAGE.to_string();
                self.email.clear();
            }
            Ok(WaitlistAck::AlreadyRegistered) => {
                self.status = SubmissionStatus::Exists;
                self.message = ALREADY_REGISTERED_MESSAGE.to_string();
            }
            Ok(WaitlistAck::Rejected { detail }) => {
                self.status = SubmissionStatus::Error;
                self.message = detail.unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            }
            Err(e) => {
                tracing::warn!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "waitlist submission did not complete"
                );
                self.status = SubmissionStatus::Error;
                self.message = NETWORK_FAILURE_MESSAGE.to_string();
            }
        }
    }

    /// One submission attempt end to end: guard, `Loading`, one request, one
    /// terminal transition. `Loading` is never left unresolved once the
    /// request settles. No retry; the visitor re-invokes.
    pub async fn submit(
        &mut self,
        client: &WaitlistClient,
    ) {
        let Some(email) = self.begin() else {
            return;
        };
        self.resolve(client.join(&email).await);
    }
}
