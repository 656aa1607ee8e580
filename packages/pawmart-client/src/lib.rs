//! REST client for the PawMart backend.
//!
//! Supplies the two snapshots the core consumes: the listings collection and
//! the viewer's role. Everything else here feeds the dashboard tables.
//!
//! # Example
//!
//! ```rust,ignore
//! use pawmart_client::BackendClient;
//! use pawmart_core::listings::{filter_and_sort, ListingQuery};
//!
//! let client = BackendClient::new("http://localhost:5000")?;
//! let listings = client.fetch_listings().await?;
//! let page = filter_and_sort(&listings, &ListingQuery::default());
//!
//! let session = client.resolve_session(Some("buyer@example.com")).await;
//! ```

pub mod error;

pub use error::{ClientError, Result};

use pawmart_core::access::Session;
use pawmart_core::directory::{Order, UserAccount};
use pawmart_core::listings::{Category, Listing};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Role lookup body. The backend answers `null` for unknown emails.
#[derive(Debug, Deserialize)]
struct RoleRecord {
    role: Option<String>,
}

/// Decode a listings array one record at a time.
///
/// A record that does not fit the listing shape (an unknown category, a
/// missing price) is logged and dropped; the rest of the snapshot survives.
pub fn decode_listings(raw: Vec<serde_json::Value>) -> Vec<Listing> {
    let total = raw.len();
    let listings: Vec<Listing> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let id = value
                .get("_id")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            match serde_json::from_value::<Listing>(value) {
                Ok(listing) => Some(listing),
                Err(e) => {
                    tracing::warn!(index, id = %id, error = %e, "Skipping malformed listing");
                    None
                }
            }
        })
        .collect();

    if listings.len() < total {
        tracing::warn!(total, kept = listings.len(), "Dropped malformed listings");
    }
    listings
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base URL must start with http:// or https://, got {base_url:?}"
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "GET");

        let resp = self.client.get(&url).query(query).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    // ========================================================================
    // Listings
    // ========================================================================

    /// Full listings snapshot, in backend order. Malformed records are
    /// skipped, see [`decode_listings`].
    pub async fn fetch_listings(&self) -> Result<Vec<Listing>> {
        let raw: Vec<serde_json::Value> = self.get_json("/listings", &[]).await?;
        let listings = decode_listings(raw);
        tracing::info!(count = listings.len(), "Fetched listings");
        Ok(listings)
    }

    pub async fn fetch_listings_by_category(&self, category: Category) -> Result<Vec<Listing>> {
        let raw: Vec<serde_json::Value> = self
            .get_json("/listings", &[("category", category.label())])
            .await?;
        Ok(decode_listings(raw))
    }

    pub async fn fetch_listing(&self, id: &str) -> Result<Listing> {
        self.get_json(&format!("/listings/{}", urlencoding::encode(id)), &[])
            .await
    }

    pub async fn fetch_my_listings(&self, email: &str) -> Result<Vec<Listing>> {
        let raw: Vec<serde_json::Value> = self.get_json("/my-listings", &[("email", email)]).await?;
        Ok(decode_listings(raw))
    }

    // ========================================================================
    // Users and sessions
    // ========================================================================

    /// Role stored on the backend's user record; `"user"` when it has none.
    pub async fn fetch_user_role(&self, email: &str) -> Result<String> {
        let path = format!("/users/email/{}", urlencoding::encode(email));
        let record: Option<RoleRecord> = self.get_json(&path, &[]).await?;
        Ok(record
            .and_then(|r| r.role)
            .filter(|role| !role.trim().is_empty())
            .unwrap_or_else(|| "user".to_string()))
    }

    /// Build the session snapshot for a signed-in email, or a guest session.
    ///
    /// A failed role lookup degrades to a plain user, never to a wider role.
    pub async fn resolve_session(&self, email: Option<&str>) -> Session {
        let Some(email) = email else {
            return Session::guest();
        };

        match self.fetch_user_role(email).await {
            Ok(role) => Session::authenticated(email, Some(role.as_str())),
            Err(e) => {
                tracing::warn!(email, error = %e, "Role lookup failed, treating as user");
                Session::authenticated(email, None)
            }
        }
    }

    pub async fn fetch_users(&self) -> Result<Vec<UserAccount>> {
        self.get_json("/users", &[]).await
    }

    // ========================================================================
    // Orders
    // ========================================================================

    pub async fn fetch_orders(&self) -> Result<Vec<Order>> {
        self.get_json("/orders", &[]).await
    }

    pub async fn fetch_my_orders(&self, email: &str) -> Result<Vec<Order>> {
        self.get_json("/my-orders", &[("email", email)]).await
    }
}
