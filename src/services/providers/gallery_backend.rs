/// Gallery commerce backend provider
///
/// Fetches a user's order and booking history from the gallery's REST API:
/// GET /user/{user_id}/orders -> { orders: [...], bookings: [...], error? }
///
/// Responses are read through the Redis cache with a short TTL so a burst
/// of recommendation requests does not hammer the history service, while
/// fresh purchases still show up within minutes.
use crate::{
    cached,
    db::{Cache, CacheKey},
    error::{AppError, AppResult},
    models::UserHistory,
    services::providers::HistoryProvider,
};
use reqwest::Client as HttpClient;

const HISTORY_CACHE_TTL: u64 = 300; // 5 minutes

#[derive(Clone)]
pub struct GalleryHistoryProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    cache: Cache,
}

impl GalleryHistoryProvider {
    /// Creates a new provider for the given backend base URL
    pub fn new(cache: Cache, api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            cache,
        }
    }

    /// URL of the order-history endpoint for a user
    fn orders_url(&self, user_id: &str) -> String {
        format!("{}/user/{}/orders", self.api_url, user_id)
    }
}

#[async_trait::async_trait]
impl HistoryProvider for GalleryHistoryProvider {
    async fn fetch_user_history(&self, user_id: &str) -> AppResult<UserHistory> {
        cached!(
            self.cache,
            CacheKey::UserHistory(user_id.to_string()),
            HISTORY_CACHE_TTL,
            async move {
                let url = self.orders_url(user_id);

                let response = self
                    .http_client
                    .get(&url)
                    .bearer_auth(&self.api_key)
                    .send()
                    .await?;

                if !response.status().is_success() {
                    let status = response.status();
                    let body = response.text().await.unwrap_or_default();
                    return Err(AppError::ExternalApi(format!(
                        "History service returned status {}: {}",
                        status, body
                    )));
                }

                let history: UserHistory = response.json().await?;

                tracing::info!(
                    user_id = %user_id,
                    orders = history.orders.len(),
                    bookings = history.bookings.len(),
                    "User history fetched"
                );

                Ok(history)
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_redis_client;

    async fn create_test_provider() -> GalleryHistoryProvider {
        // The client is lazy; nothing connects unless a request is made
        let client = create_redis_client("redis://localhost:6379").unwrap();
        let (cache, _handle) = Cache::new(client).await;

        GalleryHistoryProvider::new(
            cache,
            "test_key".to_string(),
            "http://gallery.local/api".to_string(),
        )
    }

    #[tokio::test]
    async fn test_orders_url() {
        let provider = create_test_provider().await;
        assert_eq!(
            provider.orders_url("user-42"),
            "http://gallery.local/api/user/user-42/orders"
        );
    }
}
