pub mod method;

pub use method::{Feature, FormField, PaymentMethod};
