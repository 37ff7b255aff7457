//! HTTP client for the seat service.
//!
//! Every call is a single best-effort attempt: no retry, no backoff, no
//! caching. The client carries a cookie store so the corporate session
//! cookie set by the `/auth/login` redirect flow is presented on every
//! request.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use reqwest::Client;

use crate::config::Config;
use crate::error::{Result, RoostError};

use super::{BookingRequest, Seat, SessionUser};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the four seat service endpoints
#[derive(Debug, Clone)]
pub struct SeatServiceClient {
    client: Client,
    base_url: String,
}

impl SeatServiceClient {
    /// Create a client from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api.base_url)
    }

    /// Create a client for the given base URL
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(RoostError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The corporate sign-in URL (redirect-based OIDC flow, sets the
    /// session cookie)
    pub fn login_url(&self) -> String {
        format!("{}/auth/login", self.base_url)
    }

    /// Fetch the full seat collection
    pub async fn list_seats(&self) -> Result<Vec<Seat>> {
        let url = format!("{}/seats", self.base_url);
        let response = self.client.get(&url).send().await?;
        let response = check_status(response).await?;
        Ok(response.json::<Vec<Seat>>().await?)
    }

    /// Book a seat. Non-2xx responses are errors; the caller surfaces them
    /// as a generic failure notification.
    pub async fn book_seat(&self, request: &BookingRequest) -> Result<()> {
        let url = format!("{}/book", self.base_url);
        let response = self.client.post(&url).json(request).send().await?;
        check_status(response).await?;
        Ok(())
    }

    /// Release a previously booked seat
    pub async fn release_seat(&self, seat_id: u32) -> Result<()> {
        let url = format!("{}/release/{}", self.base_url, seat_id);
        let response = self.client.post(&url).send().await?;
        check_status(response).await?;
        Ok(())
    }

    /// Fetch the identity behind the current session cookie
    pub async fn whoami(&self) -> Result<SessionUser> {
        let url = format!("{}/me", self.base_url);
        let response = self.client.get(&url).send().await?;
        let response = check_status(response).await?;
        Ok(response.json::<SessionUser>().await?)
    }
}

/// Map non-2xx responses to `RoostError::Api`, keeping the backend's detail
/// message when one is present.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
        .unwrap_or_else(|| status.to_string());

    Err(RoostError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Process-wide client instance.
///
/// The session cookie lives in the client's cookie store, so all callers
/// (poller, booking handlers, one-shot commands) must share one instance.
static CLIENT: OnceLock<Arc<SeatServiceClient>> = OnceLock::new();

/// Get the shared client, creating it from the loaded config on first use
pub fn get_or_init_client() -> Result<Arc<SeatServiceClient>> {
    if let Some(client) = CLIENT.get() {
        return Ok(client.clone());
    }

    let config = Config::load()?;
    let client = Arc::new(SeatServiceClient::from_config(&config)?);
    // Another thread may have raced us; keep whichever won.
    let _ = CLIENT.set(client);
    Ok(CLIENT.get().expect("client initialized above").clone())
}
