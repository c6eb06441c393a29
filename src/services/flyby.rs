use reqwest::header::{HeaderMap, HeaderValue, ORIGIN, REFERER};
use reqwest::Client;
use std::time::Duration;
use crate::config::FlybySettings;
use crate::core::Flyby;
use crate::error::{FlybyError, Result};
use crate::models::{ActivityId, RawResponse};

/// Flyby API client
///
/// Issues a single GET per lookup against `{base_url}{activity_id}`. The
/// upstream service only answers requests that look browser-originated, so
/// every request carries fixed `referer` and `origin` headers.
#[derive(Debug, Clone)]
pub struct FlybyClient {
    base_url: String,
    client: Client,
}

impl FlybyClient {
    /// Create a new Flyby client
    pub fn new(settings: &FlybySettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, header_value(&settings.referer)?);
        headers.insert(ORIGIN, header_value(&settings.origin)?);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            base_url: settings.base_url.clone(),
            client: builder.build()?,
        })
    }

    /// Client with the built-in endpoint and headers
    pub fn with_defaults() -> Result<Self> {
        Self::new(&FlybySettings::default())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL queried for an activity
    pub fn matches_url(&self, activity_id: ActivityId) -> String {
        format!("{}{}", self.base_url, activity_id)
    }

    /// Fetch the raw Flyby payload for an activity
    pub async fn fetch(&self, activity_id: ActivityId) -> Result<RawResponse> {
        let url = self.matches_url(activity_id);

        tracing::debug!("Fetching flyby matches from: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Flyby lookup for {} failed: {}", activity_id, status);
            return Err(FlybyError::Connectivity {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;

        let raw: RawResponse = serde_json::from_str(&body).map_err(|e| {
            FlybyError::malformed(format!("Failed to parse flyby response: {}", e))
        })?;

        tracing::debug!(
            "Fetched {} flyby matches for activity {}",
            raw.matches.len(),
            activity_id
        );

        Ok(raw)
    }

    /// Fetch and wrap the payload in a result view
    pub async fn lookup(&self, activity_id: ActivityId) -> Result<Flyby> {
        self.fetch(activity_id).await.map(Flyby::new)
    }
}

/// Find flybys for an activity using the built-in endpoint
pub async fn flyby(activity_id: ActivityId) -> Result<Flyby> {
    FlybyClient::with_defaults()?.lookup(activity_id).await
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| FlybyError::invalid_argument(format!("invalid header value '{}': {}", value, e)))
}
