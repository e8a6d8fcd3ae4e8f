use crate::enums::LoyaltyEventType;

use super::loyalty_event_accumulate_points::LoyaltyEventAccumulatePoints;

model! {
    /// 积分账户上发生的事件
    pub struct LoyaltyEvent {
        required id: String => "id",
        required kind: LoyaltyEventType => "type",
        required created_at: String => "created_at",
        /// `type` 为 ACCUMULATE_POINTS 时存在
        optional accumulate_points: LoyaltyEventAccumulatePoints => "accumulate_points",
        required loyalty_account_id: String => "loyalty_account_id",
        optional location_id: String => "location_id",
        /// SQUARE 或 LOYALTY_API
        required source: String => "source",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{decode::from_json_value, enums::LoyaltyEventType, serializer::JsonSerialize};

    use super::LoyaltyEvent;

    #[test]
    fn type_wire_name() {
        let event: LoyaltyEvent = from_json_value(json!({
            "id": "E1",
            "type": "ACCUMULATE_POINTS",
            "created_at": "2020-05-08T21:41:12Z",
            "accumulate_points": {"loyalty_program_id": "P1", "points": 6, "order_id": "O1"},
            "loyalty_account_id": "A1",
            "source": "LOYALTY_API"
        }))
        .unwrap();

        assert_eq!(event.get_kind(), &LoyaltyEventType::AccumulatePoints);
        assert_eq!(
            event.get_accumulate_points().and_then(|p| p.get_points()),
            Some(&6)
        );

        let value = event.json_serialize(true).unwrap();
        assert_eq!(value["type"], json!("ACCUMULATE_POINTS"));
        assert!(value.get("kind").is_none());
    }
}
