/// Personalized artwork recommendations
///
/// Derives a taste profile from a user's purchase history, scores every
/// available catalog artwork against it on four weighted signals, and
/// returns the top matches. Also provides a pure similarity ranking for
/// "more like this" suggestions on artwork detail pages.
///
/// Recommendations are a non-critical enhancement: any failure along the
/// way degrades to an empty list and never surfaces as an error.
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{
    Artwork, ArtistAffinity, MediumAffinity, PreferenceProfile, PriceBand, PurchaseRecord,
    UserHistory,
};
use crate::services::providers::HistoryProvider;

/// Maximum contribution of an exact artist match
const ARTIST_WEIGHT: f64 = 100.0;
/// Maximum contribution of a price-band match
const PRICE_WEIGHT: f64 = 75.0;
/// Maximum contribution of a medium match
const MEDIUM_WEIGHT: f64 = 50.0;
/// Maximum contribution of the near-artist name bonus
const SIMILAR_ARTIST_WEIGHT: f64 = 25.0;
/// Normalization denominator for the 0-100 scale
const MAX_POSSIBLE_SCORE: f64 =
    ARTIST_WEIGHT + PRICE_WEIGHT + MEDIUM_WEIGHT + SIMILAR_ARTIST_WEIGHT;

/// Candidates scoring at or below this normalized value are dropped
const RELEVANCE_FLOOR: f64 = 20.0;

/// Per-purchase weight multiplier for artists. Repeat purchases from the
/// same artist are a stronger signal than medium affinity.
const ARTIST_COUNT_WEIGHT: f64 = 2.0;
/// Per-purchase weight multiplier for mediums
const MEDIUM_COUNT_WEIGHT: f64 = 1.5;

/// Default number of personalized recommendations
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 6;
/// Default number of similar-artwork suggestions
pub const DEFAULT_SIMILAR_LIMIT: usize = 4;

/// An artwork with its relevance score and the signals that produced it
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub artwork: Artwork,
    /// Normalized score in [0, 100]
    pub score: f64,
    /// Human-readable per-signal breakdown
    pub reasons: Vec<String>,
}

/// Recommendation engine over a user's order history
pub struct RecommendationEngine {
    history: Arc<dyn HistoryProvider>,
}

impl RecommendationEngine {
    /// Creates an engine reading history through the given provider
    pub fn new(history: Arc<dyn HistoryProvider>) -> Self {
        Self { history }
    }

    /// Generates personalized recommendations for a user
    ///
    /// Fetches the user's history, derives a preference profile, and ranks
    /// the available catalog against it. Users with no purchase history get
    /// an empty list rather than a generic fallback, and so does any request
    /// where the history collaborator fails or reports an error.
    pub async fn recommend_personalized(
        &self,
        user_id: &str,
        catalog: &[Artwork],
        limit: usize,
    ) -> Vec<Artwork> {
        let history = match self.history.fetch_user_history(user_id).await {
            Ok(history) => history,
            Err(e) => {
                tracing::warn!(
                    user_id = %user_id,
                    error = %e,
                    "History fetch failed, returning no recommendations"
                );
                return Vec::new();
            }
        };

        if let Some(error) = &history.error {
            tracing::debug!(
                user_id = %user_id,
                error = %error,
                "History service reported an error"
            );
            return Vec::new();
        }

        if history.orders.is_empty() {
            tracing::debug!(user_id = %user_id, "Cold-start user, no personalized recommendations");
            return Vec::new();
        }

        let profile = analyze_history(&history);
        let scored = score_candidates(&profile, catalog);

        tracing::info!(
            user_id = %user_id,
            catalog_size = catalog.len(),
            candidates = scored.len(),
            "Personalized recommendations scored"
        );

        scored
            .into_iter()
            .take(limit)
            .map(|candidate| candidate.artwork)
            .collect()
    }
}

/// Derives a preference profile from a history snapshot
///
/// Tallies purchase counts per artist and per medium, computes the mean
/// paid price, and builds three overlapping price bands from narrowest to
/// widest. Orders missing a medium still count toward artist affinity.
pub fn analyze_history(history: &UserHistory) -> PreferenceProfile {
    let mut artist_counts: HashMap<String, u32> = HashMap::new();
    let mut medium_counts: HashMap<String, u32> = HashMap::new();
    let mut prices = Vec::new();
    let mut profile = PreferenceProfile::default();

    for order in &history.orders {
        *artist_counts.entry(order.artist.clone()).or_default() += 1;

        if let Some(medium) = &order.medium {
            *medium_counts.entry(medium.clone()).or_default() += 1;
        }

        let price = order.effective_price();
        prices.push(price);

        profile.purchase_history.push(PurchaseRecord {
            artwork_id: order.artwork_id.clone(),
            artist: order.artist.clone(),
            medium: order
                .medium
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            price,
        });
        profile.purchased_ids.insert(order.artwork_id.clone());
    }

    if !prices.is_empty() {
        profile.average_price = prices.iter().sum::<f64>() / prices.len() as f64;
    }

    profile.favorite_artists = artist_counts
        .into_iter()
        .map(|(artist, count)| ArtistAffinity {
            artist,
            count,
            weight: count as f64 * ARTIST_COUNT_WEIGHT,
        })
        .collect();
    // Ties broken by name so the ranking is deterministic
    profile
        .favorite_artists
        .sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.artist.cmp(&b.artist))
        });

    profile.preferred_mediums = medium_counts
        .into_iter()
        .map(|(medium, count)| MediumAffinity {
            medium,
            count,
            weight: count as f64 * MEDIUM_COUNT_WEIGHT,
        })
        .collect();
    profile
        .preferred_mediums
        .sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.medium.cmp(&b.medium))
        });

    if !prices.is_empty() {
        let avg = profile.average_price;
        let min = prices.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = prices.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        profile.price_bands = vec![
            // Tight around the average
            PriceBand {
                min: avg * 0.75,
                max: avg * 1.25,
                weight: 3.0,
            },
            // Moderate expansion
            PriceBand {
                min: avg * 0.5,
                max: avg * 1.5,
                weight: 2.0,
            },
            // Actual purchase range with buffer
            PriceBand {
                min: min * 0.8,
                max: max * 1.2,
                weight: 1.0,
            },
        ];
    }

    profile.exhibition_history = history.bookings.clone();

    profile
}

/// Scores the catalog against a profile and ranks the results
///
/// Artworks that are not available or already owned are filtered before
/// scoring; everything else is scored. Candidates at or below the
/// relevance floor are dropped. The sort is stable, so equal scores keep
/// their catalog order.
pub fn score_candidates(profile: &PreferenceProfile, catalog: &[Artwork]) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = catalog
        .iter()
        .filter(|artwork| {
            artwork.is_available() && !profile.is_purchased(&artwork.id.to_string())
        })
        .filter_map(|artwork| {
            let (score, reasons) = score_artwork(profile, artwork);
            (score > RELEVANCE_FLOOR).then(|| ScoredCandidate {
                artwork: artwork.clone(),
                score,
                reasons,
            })
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    scored
}

/// Scores one artwork against the profile, normalized to [0, 100]
fn score_artwork(profile: &PreferenceProfile, artwork: &Artwork) -> (f64, Vec<String>) {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    // Exact artist match, scaled by purchase frequency and capped at full
    // weight by the third purchase. The near-artist bonus applies only when
    // there is no exact match.
    if let Some(affinity) = profile.artist_affinity(&artwork.artist) {
        let points = ARTIST_WEIGHT * (affinity.weight / 3.0).min(1.0);
        score += points;
        reasons.push(format!("Same artist: {}", artwork.artist));
        tracing::debug!(artist = %artwork.artist, points, "Artist match");
    } else if favorite_shares_token(profile, &artwork.artist) {
        let points = SIMILAR_ARTIST_WEIGHT * 0.5;
        score += points;
        reasons.push(format!("Similar artist: {}", artwork.artist));
        tracing::debug!(artist = %artwork.artist, points, "Similar artist bonus");
    }

    // Overlapping bands all match independently; only the strongest counts
    if let Some(band_weight) = profile.best_band_weight(artwork.price) {
        let points = PRICE_WEIGHT * band_weight / 3.0;
        score += points;
        reasons.push(format!("Within price range: {}", artwork.price));
        tracing::debug!(price = artwork.price, points, "Price band match");
    }

    if let Some(affinity) = profile.medium_affinity(&artwork.medium) {
        let points = MEDIUM_WEIGHT * affinity.weight / 3.0;
        score += points;
        reasons.push(format!("Preferred medium: {}", artwork.medium));
        tracing::debug!(medium = %artwork.medium, points, "Medium match");
    }

    (score / MAX_POSSIBLE_SCORE * 100.0, reasons)
}

/// Whether any favorite artist's name shares a token with the candidate's
///
/// Tokens come from whitespace-splitting both names; only favorite tokens
/// longer than three characters count, and matching is a case-insensitive
/// substring test in either direction. Catches shared surnames and
/// workshop attributions.
fn favorite_shares_token(profile: &PreferenceProfile, artist: &str) -> bool {
    let candidate_tokens: Vec<String> = artist
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    profile.favorite_artists.iter().any(|favorite| {
        favorite
            .artist
            .to_lowercase()
            .split_whitespace()
            .any(|token| {
                token.len() > 3
                    && candidate_tokens
                        .iter()
                        .any(|candidate| candidate.contains(token) || token.contains(candidate.as_str()))
            })
    })
}

/// Ranks catalog artworks by similarity to a reference artwork
///
/// Pure and synchronous; excludes the reference itself and anything not
/// currently available. There is no relevance floor here, so weakly
/// similar artworks can still fill the list.
pub fn recommend_similar(reference: &Artwork, catalog: &[Artwork], limit: usize) -> Vec<Artwork> {
    let mut scored: Vec<(f64, &Artwork)> = catalog
        .iter()
        .filter(|artwork| artwork.id != reference.id && artwork.is_available())
        .map(|artwork| (similarity_score(reference, artwork), artwork))
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    scored
        .into_iter()
        .take(limit)
        .map(|(_, artwork)| artwork.clone())
        .collect()
}

/// Flat similarity score between two artworks
///
/// +50 same artist, +30 same medium, +20/+10 price closeness by relative
/// difference. Two zero-priced artworks get no closeness bonus.
pub fn similarity_score(a: &Artwork, b: &Artwork) -> f64 {
    let mut score = 0.0;

    if a.artist == b.artist {
        score += 50.0;
    }

    if a.medium == b.medium {
        score += 30.0;
    }

    let average_price = (a.price + b.price) / 2.0;
    if average_price > 0.0 {
        let price_ratio = (a.price - b.price).abs() / average_price;
        if price_ratio < 0.3 {
            score += 20.0;
        } else if price_ratio < 0.5 {
            score += 10.0;
        }
    }

    score
}
