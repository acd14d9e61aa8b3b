use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Artwork, ArtworkStatus};
use crate::services::recommendations::{self, DEFAULT_RECOMMENDATION_LIMIT, DEFAULT_SIMILAR_LIMIT};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct CreateArtworkRequest {
    pub title: String,
    pub artist: String,
    pub medium: String,
    pub price: f64,
    pub status: Option<ArtworkStatus>,
}

#[derive(Debug, Serialize)]
pub struct ArtworkResponse {
    pub id: Uuid,
    pub title: String,
    pub artist: String,
    pub medium: String,
    pub price: f64,
    pub status: ArtworkStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&Artwork> for ArtworkResponse {
    fn from(artwork: &Artwork) -> Self {
        Self {
            id: artwork.id,
            title: artwork.title.clone(),
            artist: artwork.artist.clone(),
            medium: artwork.medium.clone(),
            price: artwork.price,
            status: artwork.status,
            created_at: artwork.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateArtworkStatusRequest {
    pub status: ArtworkStatus,
}

#[derive(Debug, Deserialize)]
pub struct PersonalizedRecommendationsRequest {
    pub user_id: String,
    #[serde(default = "default_recommendation_limit")]
    pub limit: usize,
}

#[derive(Debug, Deserialize)]
pub struct SimilarArtworksRequest {
    pub artwork_id: Uuid,
    #[serde(default = "default_similar_limit")]
    pub limit: usize,
}

fn default_recommendation_limit() -> usize {
    DEFAULT_RECOMMENDATION_LIMIT
}

fn default_similar_limit() -> usize {
    DEFAULT_SIMILAR_LIMIT
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Get the artwork catalog
pub async fn get_artworks(State(state): State<AppState>) -> Json<Vec<ArtworkResponse>> {
    let inner = state.inner.read().await;
    let artworks: Vec<ArtworkResponse> = inner.artworks.values().map(ArtworkResponse::from).collect();
    Json(artworks)
}

/// List a new artwork
pub async fn create_artwork(
    State(state): State<AppState>,
    Json(request): Json<CreateArtworkRequest>,
) -> (StatusCode, Json<ArtworkResponse>) {
    let mut artwork = Artwork::new(request.title, request.artist, request.medium, request.price);

    if let Some(status) = request.status {
        artwork.status = status;
    }

    let response = ArtworkResponse::from(&artwork);

    let mut inner = state.inner.write().await;
    inner.artworks.insert(artwork.id, artwork);

    (StatusCode::CREATED, Json(response))
}

/// Update the sale status of an artwork
pub async fn update_artwork_status(
    State(state): State<AppState>,
    Path(artwork_id): Path<Uuid>,
    Json(request): Json<UpdateArtworkStatusRequest>,
) -> AppResult<Json<ArtworkResponse>> {
    let mut inner = state.inner.write().await;

    let artwork = inner
        .artworks
        .get_mut(&artwork_id)
        .ok_or_else(|| AppError::NotFound(format!("Artwork {} not found", artwork_id)))?;

    artwork.status = request.status;

    Ok(Json(ArtworkResponse::from(&*artwork)))
}

/// Personalized recommendations for a user
///
/// Always responds 200 with a (possibly empty) list: a cold-start user or
/// an unreachable history service yields an empty list, not an error.
pub async fn recommend_personalized(
    State(state): State<AppState>,
    Json(request): Json<PersonalizedRecommendationsRequest>,
) -> AppResult<Json<Vec<ArtworkResponse>>> {
    if request.user_id.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "User id cannot be empty".to_string(),
        ));
    }

    // Snapshot the catalog so the lock is not held across the history fetch
    let catalog: Vec<Artwork> = {
        let inner = state.inner.read().await;
        inner.artworks.values().cloned().collect()
    };

    let recommendations = state
        .engine
        .recommend_personalized(&request.user_id, &catalog, request.limit)
        .await;

    Ok(Json(
        recommendations.iter().map(ArtworkResponse::from).collect(),
    ))
}

/// Artworks similar to a reference artwork
pub async fn recommend_similar(
    State(state): State<AppState>,
    Json(request): Json<SimilarArtworksRequest>,
) -> AppResult<Json<Vec<ArtworkResponse>>> {
    let inner = state.inner.read().await;

    let reference = inner
        .artworks
        .get(&request.artwork_id)
        .ok_or_else(|| AppError::NotFound(format!("Artwork {} not found", request.artwork_id)))?;

    let catalog: Vec<Artwork> = inner.artworks.values().cloned().collect();
    let similar = recommendations::recommend_similar(reference, &catalog, request.limit);

    Ok(Json(similar.iter().map(ArtworkResponse::from).collect()))
}
