use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::Artwork;
use crate::services::RecommendationEngine;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Recommendation engine, wired to the history provider at startup
    pub engine: Arc<RecommendationEngine>,
    pub inner: Arc<RwLock<AppStateInner>>,
}

/// Inner state that can be modified
pub struct AppStateInner {
    /// The artwork catalog, keyed by artwork id
    pub artworks: HashMap<Uuid, Artwork>,
}

impl AppState {
    /// Creates application state with an empty catalog
    pub fn new(engine: Arc<RecommendationEngine>) -> Self {
        Self {
            engine,
            inner: Arc::new(RwLock::new(AppStateInner {
                artworks: HashMap::new(),
            })),
        }
    }
}
