string_enum! {
    /// 结算明细的活动类型
    pub enum ActivityType {
        Adjustment => "ADJUSTMENT",
        AppFeeRefund => "APP_FEE_REFUND",
        AppFeeRevenue => "APP_FEE_REVENUE",
        AutomaticSavings => "AUTOMATIC_SAVINGS",
        AutomaticSavingsReversed => "AUTOMATIC_SAVINGS_REVERSED",
        Charge => "CHARGE",
        DepositFee => "DEPOSIT_FEE",
        DepositFeeReversed => "DEPOSIT_FEE_REVERSED",
        Dispute => "DISPUTE",
        Escheatment => "ESCHEATMENT",
        Fee => "FEE",
        FreeProcessing => "FREE_PROCESSING",
        HoldAdjustment => "HOLD_ADJUSTMENT",
        InitialBalanceChange => "INITIAL_BALANCE_CHANGE",
        MoneyTransfer => "MONEY_TRANSFER",
        MoneyTransferReversal => "MONEY_TRANSFER_REVERSAL",
        OpenDispute => "OPEN_DISPUTE",
        Other => "OTHER",
        OtherAdjustment => "OTHER_ADJUSTMENT",
        PaidServiceFee => "PAID_SERVICE_FEE",
        PaidServiceFeeRefund => "PAID_SERVICE_FEE_REFUND",
        RedemptionCode => "REDEMPTION_CODE",
        Refund => "REFUND",
        ReleaseAdjustment => "RELEASE_ADJUSTMENT",
        ReserveHold => "RESERVE_HOLD",
        ReserveRelease => "RESERVE_RELEASE",
        ReturnedPayout => "RETURNED_PAYOUT",
        SquareCapitalPayment => "SQUARE_CAPITAL_PAYMENT",
        SquareCapitalReversedPayment => "SQUARE_CAPITAL_REVERSED_PAYMENT",
        SubscriptionFee => "SUBSCRIPTION_FEE",
        SubscriptionFeePaidRefund => "SUBSCRIPTION_FEE_PAID_REFUND",
        SubscriptionFeeRefund => "SUBSCRIPTION_FEE_REFUND",
        TaxOnFee => "TAX_ON_FEE",
        ThirdPartyFee => "THIRD_PARTY_FEE",
        ThirdPartyFeeRefund => "THIRD_PARTY_FEE_REFUND",
        Payout => "PAYOUT",
        AutomaticBitcoinConversions => "AUTOMATIC_BITCOIN_CONVERSIONS",
        AutomaticBitcoinConversionsReversed => "AUTOMATIC_BITCOIN_CONVERSIONS_REVERSED",
        CreditCardRepayment => "CREDIT_CARD_REPAYMENT",
        CreditCardRepaymentReversed => "CREDIT_CARD_REPAYMENT_REVERSED",
        LocalOffersCashback => "LOCAL_OFFERS_CASHBACK",
        LocalOffersFee => "LOCAL_OFFERS_FEE",
        PercentageProcessingEnrollment => "PERCENTAGE_PROCESSING_ENROLLMENT",
        PercentageProcessingDeactivation => "PERCENTAGE_PROCESSING_DEACTIVATION",
        PercentageProcessingRepayment => "PERCENTAGE_PROCESSING_REPAYMENT",
        PercentageProcessingRepaymentReversed => "PERCENTAGE_PROCESSING_REPAYMENT_REVERSED",
        ProcessingFee => "PROCESSING_FEE",
        ProcessingFeeRefund => "PROCESSING_FEE_REFUND",
        UndoProcessingFeeRefund => "UNDO_PROCESSING_FEE_REFUND",
        GiftCardLoadFee => "GIFT_CARD_LOAD_FEE",
        GiftCardLoadFeeRefund => "GIFT_CARD_LOAD_FEE_REFUND",
        UndoGiftCardLoadFeeRefund => "UNDO_GIFT_CARD_LOAD_FEE_REFUND",
        BalanceFoldersTransfer => "BALANCE_FOLDERS_TRANSFER",
        BalanceFoldersTransferReversed => "BALANCE_FOLDERS_TRANSFER_REVERSED",
        GiftCardPoolTransfer => "GIFT_CARD_POOL_TRANSFER",
        GiftCardPoolTransferReversed => "GIFT_CARD_POOL_TRANSFER_REVERSED",
        SquarePayrollTransfer => "SQUARE_PAYROLL_TRANSFER",
        SquarePayrollTransferReversed => "SQUARE_PAYROLL_TRANSFER_REVERSED",
    }
}

#[cfg(test)]
mod tests {
    use super::ActivityType;

    #[test]
    fn every_value_maps_back_to_itself() {
        for value in ActivityType::VALUES {
            let activity = ActivityType::from(*value);
            assert!(activity.is_known(), "{} should be known", value);
            assert_eq!(activity.as_str(), *value);
        }
    }
}
