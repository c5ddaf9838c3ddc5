use std::env;

/// Public static dataset the browser ships against.
const DEFAULT_LISTINGS_URL: &str =
    "https://s3.us-central-1.wasabisys.com/mashvisor-cdn/task-fe-listings.json";

pub struct SourceConfig {
    pub listings_url: String,
}

impl SourceConfig {
    /// Reads the listing source address from the environment, falling back
    /// to the bundled dataset when `LISTINGS_URL` is unset.
    pub fn from_env() -> Self {
        Self {
            listings_url: env::var("LISTINGS_URL")
                .unwrap_or_else(|_| DEFAULT_LISTINGS_URL.to_string()),
        }
    }
}
