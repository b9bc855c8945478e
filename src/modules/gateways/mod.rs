pub mod models;
pub mod services;

pub use models::{Feature, FormField, PaymentMethod};
pub use services::{
    load_key_material, normalize_key_path, parse_private_key, parse_public_key, AdminNotices,
    DescriptionFilters, Gateway, GatewayRegistry, KeyError,
};
