use super::loyalty_event_accumulate_points::LoyaltyEventAccumulatePoints;

model! {
    pub struct AccumulateLoyaltyPointsRequest {
        required accumulate_points: LoyaltyEventAccumulatePoints => "accumulate_points",
        required idempotency_key: String => "idempotency_key",
        required location_id: String => "location_id",
    }
}
