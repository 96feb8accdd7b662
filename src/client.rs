use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::model::{Meal, SearchResponse};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

/// Anything that can answer a meal search by name
#[async_trait]
pub trait MealSource: Send + Sync {
    /// Search by (already trimmed) name; an empty list means no matches
    async fn search(&self, query: &str) -> Result<Vec<Meal>, FinderError>;
}

/// Client for TheMealDB's `search.php` endpoint
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a client from configuration
    pub fn new(config: &FinderConfig) -> Result<Self, FinderError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| FinderError::ClientError(e.to_string()))?;

        Ok(MealDbClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FinderError> {
        let config = FinderConfig {
            base_url: base_url.into(),
            ..FinderConfig::default()
        };
        Self::new(&config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl MealSource for MealDbClient {
    async fn search(&self, query: &str) -> Result<Vec<Meal>, FinderError> {
        let url = format!("{}/search.php", self.base_url);
        debug!("GET {} s={:?}", url, query);

        let body = self
            .client
            .get(&url)
            .query(&[("s", query)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let response: SearchResponse = serde_json::from_str(&body)?;
        let meals = response.into_meals();
        debug!("search {:?} returned {} meal(s)", query, meals.len());
        Ok(meals)
    }
}
