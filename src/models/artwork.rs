use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sale status of an artwork in the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ArtworkStatus {
    /// Listed and purchasable
    Available,
    /// Held for a pending order
    Reserved,
    /// Sold and no longer purchasable
    Sold,
}

/// A catalog artwork
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artwork {
    /// Unique identifier for the artwork
    pub id: Uuid,
    /// Display title
    pub title: String,
    /// Attributed artist
    pub artist: String,
    /// Material/technique tag (oil, watercolor, sculpture, ...)
    pub medium: String,
    /// Listing price
    pub price: f64,
    /// Sale status
    pub status: ArtworkStatus,
    /// When the artwork was listed
    pub created_at: DateTime<Utc>,
}

impl Artwork {
    /// Creates a new available artwork
    pub fn new(title: String, artist: String, medium: String, price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            artist,
            medium,
            price,
            status: ArtworkStatus::Available,
            created_at: Utc::now(),
        }
    }

    /// Whether the artwork can currently be purchased
    pub fn is_available(&self) -> bool {
        self.status == ArtworkStatus::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_artwork_is_available() {
        let artwork = Artwork::new(
            "Water Lilies".to_string(),
            "Claude Monet".to_string(),
            "oil".to_string(),
            1200.0,
        );
        assert_eq!(artwork.title, "Water Lilies");
        assert_eq!(artwork.status, ArtworkStatus::Available);
        assert!(artwork.is_available());
    }

    #[test]
    fn test_sold_artwork_is_not_available() {
        let mut artwork = Artwork::new(
            "Water Lilies".to_string(),
            "Claude Monet".to_string(),
            "oil".to_string(),
            1200.0,
        );
        artwork.status = ArtworkStatus::Sold;
        assert!(!artwork.is_available());
    }

    #[test]
    fn test_status_serialization() {
        let available_json = serde_json::to_string(&ArtworkStatus::Available).unwrap();
        let sold_json = serde_json::to_string(&ArtworkStatus::Sold).unwrap();

        assert_eq!(available_json, "\"available\"");
        assert_eq!(sold_json, "\"sold\"");
    }
}
