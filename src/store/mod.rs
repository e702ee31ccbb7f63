
//! One-shot fetches of encoded match sums by filter key. The wide-column
//! store sits behind a thin HTTP row gateway; the aggregation layer only
//! sees the `MatchSumStore` trait so tests can swap in an in-memory map.

mod errors;
pub use errors::*;

// external uses
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

// my mods
use crate::models::{MatchFilters, MatchSum};

/// Fetch one pre-aggregated sum for a filter key. A missing row is
/// `Ok(None)`, never an error; decode failures on a present row are.
#[async_trait]
pub trait MatchSumStore : Send + Sync {
    async fn get(&self, filters : &MatchFilters) -> Result<Option<MatchSum>>;
}

/// Production store backed by the row gateway. The gateway resolves a
/// single row per request:
///
/// ```text
/// GET {base}/{keyspace}/match-sums
///     ?championId=..&enemyId=..&patch=..&tier=..&region=..&role=..
/// ```
///
/// 404 means "no row for this filter"; any other non-success status is a
/// store error.
#[derive(Debug, Clone)]
pub struct HttpMatchSumStore {
    client : Client,
    row_uri : String,
}

impl HttpMatchSumStore {

    pub fn new(base_url : &str, keyspace : &str, timeout : Duration) -> Result<HttpMatchSumStore> {
        let client = Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(HttpMatchSumStore {
            client,
            row_uri : format!("{}/{}/match-sums", base_url.trim_end_matches('/'), keyspace),
        })
    }
}

#[async_trait]
impl MatchSumStore for HttpMatchSumStore {

    async fn get(&self, filters : &MatchFilters) -> Result<Option<MatchSum>> {
        let response = self.client.get(&self.row_uri)
            .query(&[
                ("championId", filters.champion_id.to_string()),
                ("enemyId", filters.enemy_id.to_string()),
                ("patch", filters.patch.clone()),
                ("tier", filters.tier.to_string()),
                ("region", (filters.region as i32).to_string()),
                ("role", (filters.role as i32).to_string()),
            ])
            .send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = response.error_for_status()?;
        let sum = response.json::<MatchSum>().await
            .chain_err(|| ErrorKind::Decode)?;
        Ok(Some(sum))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::models::{Region, Role};

    fn filters(patch : &str) -> MatchFilters {
        MatchFilters {
            champion_id : 64,
            enemy_id : crate::models::ANY_ENEMY,
            patch : patch.to_string(),
            tier : 0x50,
            region : Region::NA,
            role : Role::JUNGLE,
        }
    }

    #[tokio::test]
    async fn present_row_decodes() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("GET", "/athena/match-sums")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("championId".into(), "64".into()),
                mockito::Matcher::UrlEncoded("patch".into(), "6.17".into()),
                mockito::Matcher::UrlEncoded("region".into(), "1".into()),
                mockito::Matcher::UrlEncoded("role".into(), "2".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"scalars":{"plays":4,"wins":3}}"#)
            .create_async().await;

        let store = HttpMatchSumStore::new(&server.url(), "athena", Duration::from_secs(1)).unwrap();
        let sum = store.get(&filters("6.17")).await.unwrap().unwrap();

        mock.assert_async().await;
        assert_eq!(sum.scalars.plays, 4);
        assert_eq!(sum.scalars.wins, 3);
    }

    #[tokio::test]
    async fn missing_row_is_none() {
        let mut server = mockito::Server::new_async().await;
        server.mock("GET", "/athena/match-sums")
            .match_query(mockito::Matcher::Any)
            .with_status(404)
            .create_async().await;

        let store = HttpMatchSumStore::new(&server.url(), "athena", Duration::from_secs(1)).unwrap();
        assert!(store.get(&filters("6.17")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn garbage_row_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server.mock("GET", "/athena/match-sums")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("not json")
            .create_async().await;

        let store = HttpMatchSumStore::new(&server.url(), "athena", Duration::from_secs(1)).unwrap();
        let err = store.get(&filters("6.17")).await.unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Decode));
    }

    #[tokio::test]
    async fn server_failure_is_error() {
        let mut server = mockito::Server::new_async().await;
        server.mock("GET", "/athena/match-sums")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .create_async().await;

        let store = HttpMatchSumStore::new(&server.url(), "athena", Duration::from_secs(1)).unwrap();
        assert!(store.get(&filters("6.17")).await.is_err());
    }
}
