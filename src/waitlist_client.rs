use std::fmt::Debug;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::WaitlistEmail;
use crate::utils::error_chain_fmt;

/// Fixed tag identifying where a signup came from; the backend stores it
/// alongside the email.
pub const SOURCE_TAG: &str = "landing";

/// Client for the external service that persists waitlist signups.
///
/// Establishing a HTTP connection is expensive; a single `Client` is kept at
/// the top level (`App`) and extracted by handlers, so connections are reused.
pub struct WaitlistClient {
    http_client: Client,
    base_url: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct JoinRequestBody<'a> {
    email: &'a str,
    source: &'a str,
}

/// Wire shape of the backend's reply. The outcome is reported in the body,
/// not in the HTTP status code.
#[derive(Deserialize)]
struct JoinResponseBody {
    status: String,
    detail: Option<String>,
}

/// Backend verdict on a signup attempt. `Rejected` covers every status the
/// contract does not name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WaitlistAck {
    Accepted,
    AlreadyRegistered,
    Rejected { detail: Option<String> },
}

#[derive(thiserror::Error)]
pub enum WaitlistClientError {
    #[error("failed to reach the waitlist backend")]
    Transport(#[source] reqwest::Error),
    #[error("the waitlist backend returned a malformed response")]
    MalformedResponse(#[source] reqwest::Error),
}

impl Debug for WaitlistClientError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)?;
        Ok(())
    }
}

impl WaitlistClient {
    pub fn new(
        base_url: String,
        timeout: Duration,
    ) -> Self {
        Self {
            http_client: Client::new(),
            base_url,
            timeout,
        }
    }

    /// `POST {base_url}/api/waitlist` with the email and source tag.
    ///
    /// An empty `base_url` (same-origin in the original deployment) leaves
    /// the request URL relative, which a server-side client cannot resolve;
    /// that surfaces as `Transport`, just like connectivity loss.
    #[tracing::instrument(
        name = "Registering email with the waitlist backend",
        skip(self, email),
        fields(email = %email.as_ref())
    )]
    pub async fn join(
        &self,
        email: &WaitlistEmail,
    ) -> Result<WaitlistAck, WaitlistClientError> {
        let url = format!("{}/api/waitlist", self.base_url);
        let body = JoinRequestBody {
            email: email.as_ref(),
            source: SOURCE_TAG,
        };

        let response = self
            .http_client
            .post(&url)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(WaitlistClientError::Transport)?;

        // no `error_for_status`: a 4xx/5xx reply still carries the verdict in
        // its body
        let body: JoinResponseBody = response
            .json()
            .await
            .map_err(WaitlistClientError::MalformedResponse)?;

        Ok(match body.status.as_str() {
            "ok" => WaitlistAck::Accepted,
            "exists" => WaitlistAck::AlreadyRegistered,
            _ => WaitlistAck::Rejected { detail: body.detail },
        })
    }
}
