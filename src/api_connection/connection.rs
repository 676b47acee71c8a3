use reqwest::Client;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fmt;
use std::time::Duration;
use tokio::task::JoinSet;

use super::endpoints::{Meal, MealSearchResponse, MEALDB_BASE_URL, MEALDB_PUBLIC_KEY};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub enum MealDbError {
    NetworkError(reqwest::Error),
    ApiError {
        status: reqwest::StatusCode,
        error_body: String,
    },
}

impl fmt::Display for MealDbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealDbError::NetworkError(err) => write!(f, "Network error: {}", err),
            MealDbError::ApiError { status, error_body } => {
                write!(f, "API error {}: {}", status, error_body)
            }
        }
    }
}

impl Error for MealDbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MealDbError::NetworkError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MealDbError {
    fn from(err: reqwest::Error) -> Self {
        MealDbError::NetworkError(err)
    }
}

/// Client for TheMealDB recipe search endpoint.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl MealDbClient {
    /// Build a client from the environment: `MEALDB_BASE_URL` and
    /// `MEALDB_API_KEY` override the public defaults.
    pub fn from_env() -> Self {
        let base_url = env::var("MEALDB_BASE_URL").unwrap_or_else(|_| MEALDB_BASE_URL.to_string());
        let api_key = env::var("MEALDB_API_KEY").unwrap_or_else(|_| MEALDB_PUBLIC_KEY.to_string());
        Self::new(base_url, api_key)
    }

    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        MealDbClient {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Search for meals matching a dish name. `Ok(None)` means the dish is
    /// unknown to the API (its `meals` field was null or empty).
    pub async fn search_meals(&self, dish: &str) -> Result<Option<Vec<Meal>>, MealDbError> {
        let url = format!("{}/{}/search.php", self.base_url, self.api_key);
        let response = self
            .client
            .get(&url)
            .query(&[("s", dish.trim())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(MealDbError::ApiError { status, error_body });
        }

        let body = response.json::<MealSearchResponse>().await?;
        Ok(body.meals.filter(|meals| !meals.is_empty()))
    }

    /// Fetch all dishes concurrently, one task per dish, joining every
    /// task before returning. A dish whose fetch fails or returns no data
    /// maps to `None` instead of failing the whole batch; there is no
    /// retry and no ordering guarantee among dishes.
    pub async fn fetch_all(&self, dishes: &[String]) -> HashMap<String, Option<Vec<Meal>>> {
        let mut tasks = JoinSet::new();
        for dish in dishes {
            let client = self.clone();
            let dish = dish.clone();
            tasks.spawn(async move {
                let meals = match client.search_meals(&dish).await {
                    Ok(meals) => meals,
                    Err(err) => {
                        eprintln!("Error fetching data for '{}': {}", dish, err);
                        None
                    }
                };
                (dish, meals)
            });
        }

        let mut results = HashMap::new();
        while let Some(joined) = tasks.join_next().await {
            if let Ok((dish, meals)) = joined {
                results.insert(dish, meals);
            }
        }
        results
    }
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::from_env()
    }
}
