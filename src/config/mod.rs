//! Gateway configuration and host-store context.
//!
//! Options live in the host's persisted settings store, namespaced per
//! gateway. [`GatewayConfig`] reads them once at gateway construction and is
//! immutable afterwards; nothing here is cached across requests.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::Currency;

/// Default order description template.
pub const DEFAULT_ORDER_TEMPLATE: &str = "Order #{id}";

/// The single positional placeholder an order template must contain.
pub const ORDER_ID_PLACEHOLDER: &str = "{id}";

/// Persisted option storage, namespaced per gateway by the host.
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

/// Settings held in memory, for hosts that hydrate options up front and for
/// tests.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettings {
    options: HashMap<String, String>,
}

impl InMemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InMemorySettings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            options: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl SettingsStore for InMemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.options.get(key).cloned()
    }
}

/// Converts the host's stringly-typed flags to booleans.
pub fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "yes" | "true" | "1"
    )
}

/// Per-gateway options, read once at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    pub enabled: bool,
    pub testmode: bool,
    pub debug: bool,
    pub title: Option<String>,
    pub description: Option<String>,
    pub order_template: String,
}

impl GatewayConfig {
    /// Builds the config from the gateway's settings namespace.
    ///
    /// An order template without exactly one order-id placeholder is
    /// rejected in favor of [`DEFAULT_ORDER_TEMPLATE`]; configuration
    /// problems are never fatal.
    pub fn from_store(store: &dyn SettingsStore) -> Self {
        let order_template = store.get_or("order_template", DEFAULT_ORDER_TEMPLATE);
        let order_template = if valid_order_template(&order_template) {
            order_template
        } else {
            warn!(
                template = %order_template,
                "order template must contain exactly one order id placeholder, using default"
            );
            DEFAULT_ORDER_TEMPLATE.to_string()
        };

        Self {
            enabled: parse_bool(&store.get_or("enabled", "yes")),
            testmode: parse_bool(&store.get_or("testmode", "no")),
            debug: parse_bool(&store.get_or("debug", "no")),
            title: store.get("title"),
            description: store.get("description"),
            order_template,
        }
    }
}

fn valid_order_template(template: &str) -> bool {
    template.matches(ORDER_ID_PLACEHOLDER).count() == 1
}

/// Read-only facts about the host store, injected at gateway construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreContext {
    /// The store's active currency.
    pub currency: Currency,
    /// Base URL of the host admin UI.
    pub admin_url: String,
    /// Store locale, e.g. `en_US`.
    pub locale: String,
    /// Whether the current user may manage store settings.
    pub is_admin_user: bool,
}

impl StoreContext {
    pub fn new(currency: Currency, admin_url: impl Into<String>) -> Self {
        Self {
            currency,
            admin_url: admin_url.into(),
            locale: "en_US".to_string(),
            is_admin_user: false,
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_admin_user(mut self, is_admin_user: bool) -> Self {
        self.is_admin_user = is_admin_user;
        self
    }

    /// Two-letter language code derived from the locale.
    pub fn language(&self) -> &str {
        self.locale.get(..2).unwrap_or(&self.locale)
    }
}
