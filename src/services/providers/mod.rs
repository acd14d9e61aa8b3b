/// Order-history provider abstraction
///
/// The engine reads purchase history through this trait so scoring stays
/// independently testable without a live backend. One production
/// implementation exists (the gallery commerce backend); tests substitute
/// mocks or stubs.
use async_trait::async_trait;

use crate::{error::AppResult, models::UserHistory};

pub mod gallery_backend;

pub use gallery_backend::GalleryHistoryProvider;

/// Trait for order-history providers
///
/// Implementations must surface transport failures as errors and leave the
/// interpretation of the response's `error` field to the caller, so the
/// fail-soft decision lives in one place.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch a user's order and booking history
    async fn fetch_user_history(&self, user_id: &str) -> AppResult<UserHistory>;
}
