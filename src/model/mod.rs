pub mod accumulate_loyalty_points_request;
pub mod address;
pub mod api_error;
pub mod catalog_item;
pub mod catalog_item_variation;
pub mod catalog_object;
pub mod create_payment_request;
pub mod create_payment_response;
pub mod create_team_member_request;
pub mod custom_attribute;
pub mod destination;
pub mod list_payments_request;
pub mod list_payments_response;
pub mod loyalty_account;
pub mod loyalty_account_mapping;
pub mod loyalty_event;
pub mod loyalty_event_accumulate_points;
pub mod money;
pub mod payment;
pub mod payment_refund;
pub mod payout;
pub mod payout_entry;
pub mod refund_payment_request;
pub mod team_member;
pub mod team_member_assigned_locations;
pub mod update_payment_request;
pub mod update_team_member_request;
pub mod upsert_catalog_object_request;
pub mod upsert_customer_custom_attribute_request;

pub use accumulate_loyalty_points_request::AccumulateLoyaltyPointsRequest;
pub use address::Address;
pub use api_error::ApiError;
pub use catalog_item::CatalogItem;
pub use catalog_item_variation::CatalogItemVariation;
pub use catalog_object::CatalogObject;
pub use create_payment_request::CreatePaymentRequest;
pub use create_payment_response::CreatePaymentResponse;
pub use create_team_member_request::CreateTeamMemberRequest;
pub use custom_attribute::CustomAttribute;
pub use destination::Destination;
pub use list_payments_request::ListPaymentsRequest;
pub use list_payments_response::ListPaymentsResponse;
pub use loyalty_account::LoyaltyAccount;
pub use loyalty_account_mapping::LoyaltyAccountMapping;
pub use loyalty_event::LoyaltyEvent;
pub use loyalty_event_accumulate_points::LoyaltyEventAccumulatePoints;
pub use money::Money;
pub use payment::Payment;
pub use payment_refund::PaymentRefund;
pub use payout::Payout;
pub use payout_entry::PayoutEntry;
pub use refund_payment_request::RefundPaymentRequest;
pub use team_member::TeamMember;
pub use team_member_assigned_locations::TeamMemberAssignedLocations;
pub use update_payment_request::UpdatePaymentRequest;
pub use update_team_member_request::UpdateTeamMemberRequest;
pub use upsert_catalog_object_request::UpsertCatalogObjectRequest;
pub use upsert_customer_custom_attribute_request::UpsertCustomerCustomAttributeRequest;
