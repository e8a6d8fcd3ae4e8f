string_enum! {
    /// ISO 4217 货币代码
    pub enum Currency {
        UnknownCurrency => "UNKNOWN_CURRENCY",
        Aed => "AED",
        Ars => "ARS",
        Aud => "AUD",
        Bgn => "BGN",
        Brl => "BRL",
        Btc => "BTC",
        Cad => "CAD",
        Chf => "CHF",
        Clp => "CLP",
        Cny => "CNY",
        Cop => "COP",
        Czk => "CZK",
        Dkk => "DKK",
        Egp => "EGP",
        Eur => "EUR",
        Gbp => "GBP",
        Hkd => "HKD",
        Huf => "HUF",
        Idr => "IDR",
        Ils => "ILS",
        Inr => "INR",
        Isk => "ISK",
        Jpy => "JPY",
        Krw => "KRW",
        Mxn => "MXN",
        Myr => "MYR",
        Ngn => "NGN",
        Nok => "NOK",
        Nzd => "NZD",
        Php => "PHP",
        Pln => "PLN",
        Ron => "RON",
        Rub => "RUB",
        Sar => "SAR",
        Sek => "SEK",
        Sgd => "SGD",
        Thb => "THB",
        Try => "TRY",
        Twd => "TWD",
        Uah => "UAH",
        Usd => "USD",
        Vnd => "VND",
        Xts => "XTS",
        Zar => "ZAR",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Currency;

    #[test]
    fn lookup() {
        assert_eq!(Currency::from("USD"), Currency::Usd);
        assert_eq!(Currency::Jpy.as_str(), "JPY");
        assert!(Currency::VALUES.contains(&"EUR"));
        assert_eq!(Currency::VALUES.len(), 45);
    }

    #[test]
    fn unknown_code_is_kept() {
        let currency = Currency::from("XYZ".to_owned());
        assert!(!currency.is_known());
        assert_eq!(currency.to_string(), "XYZ");
        assert_eq!(serde_json::to_value(&currency).unwrap(), json!("XYZ"));
    }

    #[test]
    fn serde() {
        let currency: Currency = serde_json::from_value(json!("GBP")).unwrap();
        assert_eq!(currency, Currency::Gbp);
        assert_eq!(serde_json::to_value(&Currency::Gbp).unwrap(), json!("GBP"));
    }
}
