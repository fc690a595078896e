use serde::{Deserialize, Serialize};

/// A pending order awaiting an approve/decline decision.
///
/// Only `id` is meaningful to the admin UI; every other backend field is
/// carried opaquely so the review screens never grow coupling to its shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: u64,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl Order {
    /// Best-effort human label for a row, taken from whichever descriptive
    /// field the backend happened to send.
    pub fn summary(&self) -> String {
        for key in ["description", "title", "name"] {
            if let Some(text) = self.details.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
        format!("Order #{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_are_kept_opaquely() {
        let order: Order =
            serde_json::from_str(r#"{"id":7,"status":"PENDING","weight":420}"#).unwrap();
        assert_eq!(order.id, 7);
        assert_eq!(
            order.details.get("status").and_then(|v| v.as_str()),
            Some("PENDING")
        );
    }

    #[test]
    fn summary_falls_back_to_id() {
        let order: Order = serde_json::from_str(r#"{"id":3}"#).unwrap();
        assert_eq!(order.summary(), "Order #3");
    }

    #[test]
    fn summary_prefers_description() {
        let order: Order =
            serde_json::from_str(r#"{"id":3,"description":"Furniture, 2 pallets"}"#).unwrap();
        assert_eq!(order.summary(), "Furniture, 2 pallets");
    }
}
