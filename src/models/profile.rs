use std::collections::HashSet;

use serde::Serialize;

use super::ExhibitionBooking;

/// Weighted affinity for one artist, derived from purchase counts
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ArtistAffinity {
    pub artist: String,
    pub count: u32,
    pub weight: f64,
}

/// Weighted affinity for one medium
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MediumAffinity {
    pub medium: String,
    pub count: u32,
    pub weight: f64,
}

/// A (min, max, weight) price band derived from purchase price statistics
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PriceBand {
    pub min: f64,
    pub max: f64,
    pub weight: f64,
}

impl PriceBand {
    /// Whether a price falls inside this band (bounds inclusive)
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// One recorded purchase, kept for exclusion and diagnostics
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PurchaseRecord {
    pub artwork_id: String,
    pub artist: String,
    pub medium: String,
    pub price: f64,
}

/// A user's taste profile, derived fresh from their order history for the
/// duration of a single recommendation request. Never persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PreferenceProfile {
    /// Artists ranked by weight (purchase count x 2.0), descending
    pub favorite_artists: Vec<ArtistAffinity>,
    /// Mediums ranked by weight (purchase count x 1.5), descending
    pub preferred_mediums: Vec<MediumAffinity>,
    /// Overlapping price bands, narrowest/highest-confidence first
    pub price_bands: Vec<PriceBand>,
    /// Mean effective price across all orders
    pub average_price: f64,
    /// Every recorded purchase
    pub purchase_history: Vec<PurchaseRecord>,
    /// Exhibition bookings, carried for future extension but not scored
    pub exhibition_history: Vec<ExhibitionBooking>,
    /// Artwork identifiers the user already owns
    #[serde(skip)]
    pub purchased_ids: HashSet<String>,
}

impl PreferenceProfile {
    /// Whether the profile carries any purchase signal at all
    pub fn has_purchases(&self) -> bool {
        !self.purchase_history.is_empty()
    }

    /// Looks up the affinity entry for an artist by exact name
    pub fn artist_affinity(&self, artist: &str) -> Option<&ArtistAffinity> {
        self.favorite_artists.iter().find(|a| a.artist == artist)
    }

    /// Looks up the affinity entry for a medium by exact name
    pub fn medium_affinity(&self, medium: &str) -> Option<&MediumAffinity> {
        self.preferred_mediums.iter().find(|m| m.medium == medium)
    }

    /// Weight of the best-matching price band for a price, if any band
    /// contains it. Bands overlap; only the strongest match counts.
    pub fn best_band_weight(&self, price: f64) -> Option<f64> {
        self.price_bands
            .iter()
            .filter(|band| band.contains(price))
            .map(|band| band.weight)
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Whether the user already owns the artwork
    pub fn is_purchased(&self, artwork_id: &str) -> bool {
        self.purchased_ids.contains(artwork_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with_bands() -> PreferenceProfile {
        PreferenceProfile {
            price_bands: vec![
                PriceBand {
                    min: 75.0,
                    max: 125.0,
                    weight: 3.0,
                },
                PriceBand {
                    min: 50.0,
                    max: 150.0,
                    weight: 2.0,
                },
                PriceBand {
                    min: 40.0,
                    max: 180.0,
                    weight: 1.0,
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_band_contains_bounds_inclusive() {
        let band = PriceBand {
            min: 75.0,
            max: 125.0,
            weight: 3.0,
        };
        assert!(band.contains(75.0));
        assert!(band.contains(125.0));
        assert!(!band.contains(74.99));
        assert!(!band.contains(125.01));
    }

    #[test]
    fn test_best_band_weight_takes_maximum_of_overlaps() {
        let profile = profile_with_bands();
        // 100.0 falls in all three bands; the narrow band wins
        assert_eq!(profile.best_band_weight(100.0), Some(3.0));
        // 60.0 falls only in the two wider bands
        assert_eq!(profile.best_band_weight(60.0), Some(2.0));
        // 45.0 falls only in the widest band
        assert_eq!(profile.best_band_weight(45.0), Some(1.0));
        assert_eq!(profile.best_band_weight(500.0), None);
    }

    #[test]
    fn test_empty_profile_has_no_purchases() {
        let profile = PreferenceProfile::default();
        assert!(!profile.has_purchases());
        assert!(!profile.is_purchased("a1"));
        assert_eq!(profile.artist_affinity("Claude Monet"), None);
        assert_eq!(profile.medium_affinity("oil"), None);
    }
}
