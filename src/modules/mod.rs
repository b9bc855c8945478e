pub mod blocks;
pub mod gateways;
pub mod orders;
