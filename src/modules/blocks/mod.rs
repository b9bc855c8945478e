pub mod integration;
pub mod scripts;

pub use integration::{BlocksIntegration, PaymentMethodData};
pub use scripts::{ScriptAsset, ScriptRegistry, BLOCK_SCRIPT_DEPS};
