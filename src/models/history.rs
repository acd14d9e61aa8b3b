use serde::{Deserialize, Serialize};

// ============================================================================
// Order-history service wire types
// ============================================================================

/// Response from GET /user/{id}/orders
///
/// The history service reports failure through the `error` field rather than
/// a non-2xx status, so a parsed response may still carry no usable history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserHistory {
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
    #[serde(default)]
    pub bookings: Vec<ExhibitionBooking>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One past artwork purchase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Identifier of the purchased artwork. Older rows use the camelCase
    /// spelling.
    #[serde(alias = "artworkId")]
    pub artwork_id: String,
    pub artist: String,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, alias = "totalAmount")]
    pub total_amount: Option<f64>,
}

impl OrderRecord {
    /// Price paid for the order.
    ///
    /// Falls back to the order total when no per-item price was recorded,
    /// and to 0.0 when neither field is present. Records without any price
    /// still count toward artist and medium affinity.
    pub fn effective_price(&self) -> f64 {
        self.price.or(self.total_amount).unwrap_or(0.0)
    }
}

/// One past exhibition booking
///
/// Not used by scoring; carried through into the preference profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExhibitionBooking {
    #[serde(alias = "exhibitionId")]
    pub exhibition_id: String,
    #[serde(default, alias = "exhibitionTitle")]
    pub exhibition_title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_price_prefers_price() {
        let order = OrderRecord {
            artwork_id: "a1".to_string(),
            artist: "Claude Monet".to_string(),
            medium: Some("oil".to_string()),
            price: Some(250.0),
            total_amount: Some(300.0),
        };
        assert_eq!(order.effective_price(), 250.0);
    }

    #[test]
    fn test_effective_price_falls_back_to_total() {
        let order = OrderRecord {
            artwork_id: "a1".to_string(),
            artist: "Claude Monet".to_string(),
            medium: None,
            price: None,
            total_amount: Some(300.0),
        };
        assert_eq!(order.effective_price(), 300.0);
    }

    #[test]
    fn test_effective_price_defaults_to_zero() {
        let order = OrderRecord {
            artwork_id: "a1".to_string(),
            artist: "Claude Monet".to_string(),
            medium: None,
            price: None,
            total_amount: None,
        };
        assert_eq!(order.effective_price(), 0.0);
    }

    #[test]
    fn test_order_deserialization_snake_case() {
        let json = r#"{
            "artwork_id": "42",
            "artist": "Mary Cassatt",
            "medium": "pastel",
            "price": 850.0
        }"#;

        let order: OrderRecord = serde_json::from_str(json).unwrap();
        assert_eq!(order.artwork_id, "42");
        assert_eq!(order.artist, "Mary Cassatt");
        assert_eq!(order.medium, Some("pastel".to_string()));
        assert_eq!(order.effective_price(), 850.0);
    }

    #[test]
    fn test_order_deserialization_camel_case_aliases() {
        let json = r#"{
            "artworkId": "42",
            "artist": "Mary Cassatt",
            "totalAmount": 900.0
        }"#;

        let order: OrderRecord = serde_json::from_str(json).unwrap();
        assert_eq!(order.artwork_id, "42");
        assert_eq!(order.medium, None);
        assert_eq!(order.effective_price(), 900.0);
    }

    #[test]
    fn test_user_history_with_error_field() {
        let json = r#"{"error": "user not found"}"#;

        let history: UserHistory = serde_json::from_str(json).unwrap();
        assert!(history.orders.is_empty());
        assert!(history.bookings.is_empty());
        assert_eq!(history.error, Some("user not found".to_string()));
    }

    #[test]
    fn test_user_history_full_payload() {
        let json = r#"{
            "orders": [
                {"artwork_id": "1", "artist": "Claude Monet", "medium": "oil", "price": 100.0}
            ],
            "bookings": [
                {"exhibitionId": "e1", "exhibitionTitle": "Impressionists"}
            ]
        }"#;

        let history: UserHistory = serde_json::from_str(json).unwrap();
        assert_eq!(history.orders.len(), 1);
        assert_eq!(history.bookings.len(), 1);
        assert_eq!(history.bookings[0].exhibition_id, "e1");
        assert_eq!(
            history.bookings[0].exhibition_title,
            Some("Impressionists".to_string())
        );
        assert_eq!(history.error, None);
    }
}
