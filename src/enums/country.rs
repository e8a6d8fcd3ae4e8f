string_enum! {
    /// ISO 3166-1 alpha-2 国家代码
    pub enum Country {
        Zz => "ZZ",
        Ae => "AE",
        Ar => "AR",
        At => "AT",
        Au => "AU",
        Be => "BE",
        Br => "BR",
        Ca => "CA",
        Ch => "CH",
        Cn => "CN",
        De => "DE",
        Dk => "DK",
        Es => "ES",
        Fi => "FI",
        Fr => "FR",
        Gb => "GB",
        Hk => "HK",
        Ie => "IE",
        In => "IN",
        It => "IT",
        Jp => "JP",
        Kr => "KR",
        Mx => "MX",
        Nl => "NL",
        No => "NO",
        Nz => "NZ",
        Pl => "PL",
        Pt => "PT",
        Se => "SE",
        Sg => "SG",
        Us => "US",
    }
}
