use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::Currency;

/// Checkout features a payment method may declare support for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Products,
    Refunds,
    Tokenization,
    Subscriptions,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feature::Products => write!(f, "products"),
            Feature::Refunds => write!(f, "refunds"),
            Feature::Tokenization => write!(f, "tokenization"),
            Feature::Subscriptions => write!(f, "subscriptions"),
        }
    }
}

/// A settings form field as rendered by the host admin UI. The gateway only
/// needs the key and display label to build validation messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub key: String,
    pub label: String,
    pub required: bool,
}

impl FormField {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Identity and overridable behavior of one concrete payment method.
///
/// Implementations describe a single method: its id, display strings, the
/// currencies it accepts and its settings form. The shared behavior lives in
/// [`Gateway`](crate::gateways::Gateway), which composes one of these.
pub trait PaymentMethod: Send + Sync {
    /// Stable method id/slug, also used as the logging source and the
    /// description-filter key.
    fn id(&self) -> &str;

    fn title(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    fn icon(&self) -> &str {
        ""
    }

    fn version(&self) -> &str {
        "1.0.0"
    }

    /// Translation catalog domain for the blocks checkout bundle.
    fn text_domain(&self) -> &str {
        self.id()
    }

    /// Base URL the blocks asset bundle is served from.
    fn assets_base_url(&self) -> &str {
        ""
    }

    /// Currencies this method can settle in. Must be non-empty for the
    /// method to ever be available.
    fn supported_currencies(&self) -> &[Currency];

    fn features(&self) -> &[Feature] {
        &[Feature::Products]
    }

    fn supports(&self, feature: Feature) -> bool {
        self.features().contains(&feature)
    }

    fn form_fields(&self) -> Vec<FormField> {
        Vec::new()
    }

    fn field_label(&self, key: &str) -> Option<String> {
        self.form_fields()
            .into_iter()
            .find(|field| field.key == key)
            .map(|field| field.label)
    }

    /// Method-specific configuration check. Gates availability and drives
    /// the needs-setup flag; the default assumes nothing to configure.
    fn check_settings(&self) -> bool {
        true
    }
}
