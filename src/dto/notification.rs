use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: NotificationType,

    #[serde(default)]
    pub payload: NotificationPayload,

    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,

    /// Mutated only through the notifications service
    #[serde(default)]
    pub read: bool,
}

#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    NewOrder,
    NewEnquiry,
    OrderStatusUpdate,
    Custom,
    Test,
}

impl NotificationType {
    ///
    /// Types that warrant a blocking popup instead of
    /// a passive toast (for businesses configured that way).
    ///
    pub fn requires_attention(&self) -> bool {
        matches!(self, Self::NewOrder | Self::NewEnquiry)
    }
}

///
/// Every field is optional on the wire. Events missing
/// fields are still stored and counted; consumers omit
/// absent fields instead of failing.
///
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationPayload {
    pub title: String,
    pub message: String,
    pub order_id: Option<String>,
    pub order_number: Option<String>,
    pub enquiry_id: Option<String>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub total_amount: Option<f64>,
    pub item_count: Option<u32>,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn notification_json_deserialize_full() {
        let json = json!({
            "id": "n-1",
            "type": "NEW_ORDER",
            "payload": {
                "title": "New order",
                "message": "Order #1042 placed",
                "orderId": "o-1042",
                "orderNumber": "1042",
                "customerName": "Jo",
                "totalAmount": 23.5,
                "itemCount": 3,
            },
            "timestamp": "2024-06-01T12:00:00Z",
        });

        let record = serde_json::from_value::<NotificationRecord>(json).unwrap();

        assert_eq!(record.id, "n-1");
        assert_eq!(record.kind, NotificationType::NewOrder);
        assert_eq!(record.payload.order_id.as_deref(), Some("o-1042"));
        assert_eq!(record.payload.total_amount, Some(23.5));
        assert!(!record.read);
    }

    #[test]
    fn notification_json_deserialize_missing_payload_fields() {
        let json = json!({
            "id": "n-2",
            "type": "NEW_ENQUIRY",
            "payload": {},
            "timestamp": "2024-06-01T12:00:00Z",
        });

        let record = serde_json::from_value::<NotificationRecord>(json).unwrap();

        assert!(record.payload.title.is_empty());
        assert!(record.payload.customer_name.is_none());
    }

    #[test]
    fn notification_json_deserialize_missing_payload() {
        let json = json!({
            "id": "n-3",
            "type": "TEST",
            "timestamp": "2024-06-01T12:00:00Z",
        });

        let record = serde_json::from_value::<NotificationRecord>(json).unwrap();

        assert_eq!(record.payload, NotificationPayload::default());
    }

    #[test]
    fn attention_required_types() {
        assert!(NotificationType::NewOrder.requires_attention());
        assert!(NotificationType::NewEnquiry.requires_attention());
        assert!(!NotificationType::OrderStatusUpdate.requires_attention());
        assert!(!NotificationType::Custom.requires_attention());
        assert!(!NotificationType::Test.requires_attention());
    }
}
