//! Paybase payment gateway base library
//!
//! This library provides the shared building blocks for payment-method
//! integrations: currency and settings validation, key-material checks,
//! structured logging, order-description formatting and blocks-checkout
//! registration. Host services (settings store, admin notices, client asset
//! registry) are modeled as injected collaborators.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::blocks;
pub use modules::gateways;
pub use modules::orders;
