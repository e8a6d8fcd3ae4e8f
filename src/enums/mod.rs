mod activity_type;
mod assignment_type;
mod catalog_object_type;
mod catalog_pricing_type;
mod country;
mod currency;
mod custom_attribute_visibility;
mod destination_type;
mod error_category;
mod loyalty_event_type;
mod payment_status;
mod payout_status;
mod payout_type;
mod refund_status;
mod sort_order;
mod team_member_status;

pub use activity_type::ActivityType;
pub use assignment_type::AssignmentType;
pub use catalog_object_type::CatalogObjectType;
pub use catalog_pricing_type::CatalogPricingType;
pub use country::Country;
pub use currency::Currency;
pub use custom_attribute_visibility::CustomAttributeVisibility;
pub use destination_type::DestinationType;
pub use error_category::ErrorCategory;
pub use loyalty_event_type::LoyaltyEventType;
pub use payment_status::PaymentStatus;
pub use payout_status::PayoutStatus;
pub use payout_type::PayoutType;
pub use refund_status::RefundStatus;
pub use sort_order::SortOrder;
pub use team_member_status::TeamMemberStatus;
