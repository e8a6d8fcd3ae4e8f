string_enum! {
    pub enum LoyaltyEventType {
        AccumulatePoints => "ACCUMULATE_POINTS",
        CreateReward => "CREATE_REWARD",
        RedeemReward => "REDEEM_REWARD",
        DeleteReward => "DELETE_REWARD",
        AdjustPoints => "ADJUST_POINTS",
        ExpirePoints => "EXPIRE_POINTS",
        Other => "OTHER",
        AccumulatePromotionPoints => "ACCUMULATE_PROMOTION_POINTS",
    }
}
