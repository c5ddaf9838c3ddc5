// client.rs
use crate::config::SourceConfig;
use crate::repository::ApiError;
use crate::repository::Property;
use rand::Rng;
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = "listing-browser/0.1";

/// Read-only access to the remote listing collection.
///
/// `fetch_by_id` re-downloads and scans the whole collection on every call.
/// The dataset is small and static, so the extra round-trip is cheaper than
/// keeping a cache coherent.
pub trait PropertyRepository {
    fn fetch_all(&self) -> Result<Vec<Property>, ApiError>;
    fn fetch_by_id(&self, id: &str) -> Result<Property, ApiError>;
}

#[derive(Debug)]
pub struct PropertyClient {
    client: Client,
    listings_url: Url,
}

impl PropertyClient {
    pub fn new(config: &SourceConfig) -> Result<Self, ApiError> {
        let listings_url =
            Url::parse(&config.listings_url).map_err(|e| ApiError::Fetch(e.to_string()))?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Fetch(e.to_string()))?;

        Ok(Self {
            client,
            listings_url,
        })
    }

    fn fetch_payload(&self) -> Result<Value, ApiError> {
        const MAX_ATTEMPTS: u64 = 3;
        const JITTER_MAX_MS: u64 = 250;

        let mut last_err = None;

        for attempt in 1..=MAX_ATTEMPTS {
            match self.try_fetch_payload() {
                Ok(payload) => return Ok(payload),
                Err(e) => {
                    eprintln!("⚠️ Listing fetch attempt {attempt} failed: {e:?}");

                    last_err = Some(e);

                    // backoff
                    let jitter = rand::thread_rng().gen_range(0..=JITTER_MAX_MS);
                    std::thread::sleep(Duration::from_millis(200 * attempt + jitter));
                }
            }
        }

        Err(last_err.unwrap_or_else(|| ApiError::Fetch("retry loop exhausted".into())))
    }

    fn try_fetch_payload(&self) -> Result<Value, ApiError> {
        let resp = self
            .client
            .get(self.listings_url.clone())
            .send()
            .map_err(|e| ApiError::Fetch(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Fetch(format!("HTTP {status} from listing source")));
        }

        resp.json::<Value>()
            .map_err(|e| ApiError::Fetch(e.to_string()))
    }

    /// The source serves either a bare JSON array or an envelope object with
    /// a `properties` field. Any other well-formed shape degrades to an empty
    /// collection; an element that is not a valid listing fails the fetch.
    pub(crate) fn extract_properties(payload: &Value) -> Result<Vec<Property>, ApiError> {
        let items = match payload {
            Value::Array(items) => items,
            Value::Object(map) => match map.get("properties").and_then(Value::as_array) {
                Some(items) => items,
                None => return Ok(Vec::new()),
            },
            _ => return Ok(Vec::new()),
        };

        let properties: Result<Vec<_>, _> = items
            .iter()
            .map(|v| serde_json::from_value(v.clone()))
            .collect();

        properties.map_err(|e| ApiError::Fetch(e.to_string()))
    }
}

impl PropertyRepository for PropertyClient {
    fn fetch_all(&self) -> Result<Vec<Property>, ApiError> {
        let payload = self.fetch_payload()?;
        Self::extract_properties(&payload)
    }

    fn fetch_by_id(&self, id: &str) -> Result<Property, ApiError> {
        let properties = self.fetch_all()?;
        select_by_id(properties, id)
    }
}

/// Scans a fetched collection for a single listing by its opaque id.
pub(crate) fn select_by_id(properties: Vec<Property>, id: &str) -> Result<Property, ApiError> {
    properties
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| ApiError::NotFound(id.to_string()))
}
