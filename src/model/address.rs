use crate::enums::Country;

model! {
    /// 实体地址
    pub struct Address {
        nullable address_line_1: String => "address_line_1",
        nullable address_line_2: String => "address_line_2",
        nullable address_line_3: String => "address_line_3",
        /// 城市或城镇
        nullable locality: String => "locality",
        nullable sublocality: String => "sublocality",
        /// 州、省等一级行政区
        nullable administrative_district_level_1: String => "administrative_district_level_1",
        nullable postal_code: String => "postal_code",
        optional country: Country => "country",
        nullable first_name: String => "first_name",
        nullable last_name: String => "last_name",
    }
}
