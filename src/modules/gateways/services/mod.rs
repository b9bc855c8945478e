pub mod gateway;
pub mod keys;
pub mod notices;
pub mod registry;

pub use gateway::Gateway;
pub use keys::{
    load_key_material, normalize_key_path, parse_private_key, parse_public_key, KeyError,
};
pub use notices::AdminNotices;
pub use registry::{DescriptionFilters, GatewayRegistry};
