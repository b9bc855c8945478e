pub mod models;

pub use models::{Order, Refund};
