//! CocktailDbGateway - reqwest implementation of the drink gateway.
//!
//! Talks to the public TheCocktailDB JSON API. Every endpoint returns a
//! `{ "drinks": [...] | null }` payload; a `null` or empty list is the API's
//! way of saying "no result" and is normalized to `None` / an empty vec so
//! callers never distinguish "missing" from "empty".

use std::collections::HashMap;

use futures::future;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use shaker_core::ShakerError;
use shaker_core::config::{ApiSettings, DEFAULT_API_BASE_URL};
use shaker_core::drink::{
    DrinkDetail, DrinkGateway, DrinkSummary, INGREDIENT_SLOTS, extract_ingredients,
};
use shaker_core::error::Result;

/// Gateway implementation backed by TheCocktailDB HTTP API.
#[derive(Clone)]
pub struct CocktailDbGateway {
    client: Client,
    base_url: String,
}

impl Default for CocktailDbGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl CocktailDbGateway {
    /// Creates a gateway against the public API.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Creates a gateway from API settings (config override of the base URL).
    pub fn from_settings(settings: &ApiSettings) -> Self {
        Self::new().with_base_url(&settings.base_url)
    }

    /// Overrides the API base URL (configuration and tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    async fn fetch_records(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<DrinkRecord>> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, "requesting recipe API");

        let response = self.client.get(&url).query(query).send().await?;
        if !response.status().is_success() {
            return Err(ShakerError::network(format!(
                "recipe API returned {} for {endpoint}",
                response.status()
            )));
        }

        let payload: DrinkListPayload = response.json().await?;
        Ok(payload.drinks.unwrap_or_default())
    }

    async fn fetch_random_one(&self) -> Result<Option<DrinkSummary>> {
        let records = self.fetch_records("random.php", &[]).await?;
        Ok(records.into_iter().next().map(DrinkRecord::into_summary))
    }
}

#[async_trait::async_trait]
impl DrinkGateway for CocktailDbGateway {
    async fn lookup_by_id(&self, id: &str) -> Result<Option<DrinkDetail>> {
        let records = self.fetch_records("lookup.php", &[("i", id)]).await?;
        Ok(records.into_iter().next().map(DrinkRecord::into_detail))
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<DrinkSummary>> {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            // Rejected locally, no network call.
            return Ok(Vec::new());
        }

        let records = self.fetch_records("search.php", &[("s", trimmed)]).await?;
        Ok(records
            .into_iter()
            .map(DrinkRecord::into_summary)
            .collect())
    }

    async fn fetch_random_batch(&self, count: usize) -> Vec<DrinkSummary> {
        let calls = (0..count).map(|_| self.fetch_random_one());
        // Join-all barrier: wait for every call to settle, successes and
        // failures alike, in issue order.
        let settled = future::join_all(calls).await;

        settled
            .into_iter()
            .filter_map(|outcome| match outcome {
                Ok(Some(drink)) => Some(drink),
                Ok(None) => None,
                Err(err) => {
                    warn!(error = %err, "dropping failed random drink fetch");
                    None
                }
            })
            .collect()
    }
}

// ============================================================================
// Wire format
// ============================================================================

/// Envelope of every TheCocktailDB response; `null` means "no result".
#[derive(Deserialize, Debug)]
struct DrinkListPayload {
    drinks: Option<Vec<DrinkRecord>>,
}

/// A raw drink record as served by the API.
///
/// The numbered ingredient/measure fields (`strIngredient1..15`,
/// `strMeasure1..15`) are captured through the flattened map and turned into
/// an ordered slot list before extraction.
#[derive(Deserialize, Debug)]
struct DrinkRecord {
    #[serde(rename = "idDrink")]
    id: String,
    #[serde(rename = "strDrink")]
    name: String,
    #[serde(rename = "strDrinkThumb")]
    thumbnail_url: Option<String>,
    #[serde(rename = "strCategory")]
    category: Option<String>,
    #[serde(rename = "strAlcoholic")]
    alcoholic: Option<String>,
    #[serde(rename = "strInstructions")]
    instructions: Option<String>,
    #[serde(rename = "strGlass")]
    glass: Option<String>,
    #[serde(flatten)]
    extra: HashMap<String, Option<String>>,
}

impl DrinkRecord {
    fn ingredient_slots(&self) -> Vec<(Option<String>, Option<String>)> {
        (1..=INGREDIENT_SLOTS)
            .map(|index| {
                let ingredient = self
                    .extra
                    .get(&format!("strIngredient{index}"))
                    .cloned()
                    .flatten();
                let measure = self
                    .extra
                    .get(&format!("strMeasure{index}"))
                    .cloned()
                    .flatten();
                (ingredient, measure)
            })
            .collect()
    }

    fn into_summary(self) -> DrinkSummary {
        DrinkSummary {
            id: self.id,
            name: self.name,
            thumbnail_url: self.thumbnail_url.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
        }
    }

    fn into_detail(self) -> DrinkDetail {
        let ingredients = extract_ingredients(&self.ingredient_slots());
        DrinkDetail {
            id: self.id,
            name: self.name,
            thumbnail_url: self.thumbnail_url.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            alcoholic: self.alcoholic.unwrap_or_default(),
            instructions: self.instructions.unwrap_or_default(),
            glass: self.glass.unwrap_or_default(),
            ingredients,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn margarita_record() -> &'static str {
        r#"{
            "drinks": [{
                "idDrink": "11007",
                "strDrink": "Margarita",
                "strDrinkThumb": "https://example.com/margarita.jpg",
                "strCategory": "Ordinary Drink",
                "strAlcoholic": "Alcoholic",
                "strInstructions": "Shake with ice. Strain into glass.",
                "strGlass": "Cocktail glass",
                "strIngredient1": "Tequila",
                "strIngredient2": " ",
                "strIngredient3": "Lime juice",
                "strIngredient4": null,
                "strMeasure1": "1 1/2 oz ",
                "strMeasure2": "1/2 oz",
                "strMeasure3": "1 oz",
                "strMeasure4": null
            }]
        }"#
    }

    #[tokio::test]
    async fn test_lookup_by_id_maps_record_and_slots() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/lookup.php")
            .match_query(Matcher::UrlEncoded("i".into(), "11007".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(margarita_record())
            .create_async()
            .await;

        let gateway = CocktailDbGateway::new().with_base_url(server.url());
        let detail = gateway.lookup_by_id("11007").await.unwrap().unwrap();

        assert_eq!(detail.name, "Margarita");
        assert_eq!(detail.glass, "Cocktail glass");
        // Blank slot 2 is skipped, order of the rest is preserved.
        assert_eq!(detail.ingredients.len(), 2);
        assert_eq!(detail.ingredients[0].name, "Tequila");
        assert_eq!(detail.ingredients[0].measure.as_deref(), Some("1 1/2 oz"));
        assert_eq!(detail.ingredients[1].name, "Lime juice");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_lookup_by_id_null_drinks_is_not_found() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/lookup.php")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"drinks": null}"#)
            .create_async()
            .await;

        let gateway = CocktailDbGateway::new().with_base_url(server.url());

        assert_eq!(gateway.lookup_by_id("999999").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_search_by_name_maps_summaries() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search.php")
            .match_query(Matcher::UrlEncoded("s".into(), "margarita".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(margarita_record())
            .create_async()
            .await;

        let gateway = CocktailDbGateway::new().with_base_url(server.url());
        let drinks = gateway.search_by_name(" margarita ").await.unwrap();

        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0].id, "11007");
        assert_eq!(drinks[0].category, "Ordinary Drink");
    }

    #[tokio::test]
    async fn test_blank_search_term_performs_no_network_call() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search.php")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let gateway = CocktailDbGateway::new().with_base_url(server.url());

        assert!(gateway.search_by_name("").await.unwrap().is_empty());
        assert!(gateway.search_by_name("   ").await.unwrap().is_empty());

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_random_batch_issues_count_calls_without_dedup() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/random.php")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(margarita_record())
            .expect(12)
            .create_async()
            .await;

        let gateway = CocktailDbGateway::new().with_base_url(server.url());
        let drinks = gateway.fetch_random_batch(12).await;

        // The gateway reports raw arrivals; dedup is the caller's concern.
        assert_eq!(drinks.len(), 12);
        assert!(drinks.iter().all(|d| d.id == "11007"));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_random_batch_swallows_failures() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/random.php")
            .with_status(500)
            .expect(5)
            .create_async()
            .await;

        let gateway = CocktailDbGateway::new().with_base_url(server.url());

        // Every call fails; the batch still settles to an empty list.
        assert!(gateway.fetch_random_batch(5).await.is_empty());
    }

    #[tokio::test]
    async fn test_random_batch_keeps_successes_when_some_calls_fail() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        // mockito serves one canned response per route, so a raw listener
        // answers here: the first two connections fail, the rest succeed.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let seen = hits.clone();

        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                let call = seen.fetch_add(1, Ordering::SeqCst);
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf).await;
                let response = if call < 2 {
                    "HTTP/1.1 500 Internal Server Error\r\n\
                     content-length: 0\r\nconnection: close\r\n\r\n"
                        .to_string()
                } else {
                    let body = margarita_record();
                    format!(
                        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n\
                         content-length: {}\r\nconnection: close\r\n\r\n{body}",
                        body.len()
                    )
                };
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        let gateway = CocktailDbGateway::new().with_base_url(format!("http://{addr}"));
        let drinks = gateway.fetch_random_batch(12).await;

        // Every call is issued; the two failures are dropped, the ten
        // successes survive.
        assert_eq!(hits.load(Ordering::SeqCst), 12);
        assert_eq!(drinks.len(), 10);
        assert!(drinks.iter().all(|d| d.id == "11007"));
    }

    #[tokio::test]
    async fn test_random_batch_drops_empty_results() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/random.php")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"drinks": null}"#)
            .create_async()
            .await;

        let gateway = CocktailDbGateway::new().with_base_url(server.url());

        assert!(gateway.fetch_random_batch(3).await.is_empty());
    }
}
