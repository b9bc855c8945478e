use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::Level;

use crate::config::{GatewayConfig, SettingsStore, StoreContext, ORDER_ID_PLACEHOLDER};
use crate::core::{AppError, Currency, Result};
use crate::modules::orders::Order;

use super::super::models::PaymentMethod;
use super::keys::{self, KeyError};
use super::notices::AdminNotices;
use super::registry::DescriptionFilters;

/// Shared behavior for a single payment method: availability and settings
/// validation, key-material checks, structured logging and order-description
/// formatting.
///
/// Concrete integrations compose this with their own [`PaymentMethod`]
/// implementation; host collaborators (settings store, notice channel,
/// description filters) are injected at construction. One instance is built
/// per request, so nothing is cached across requests.
pub struct Gateway {
    method: Arc<dyn PaymentMethod>,
    config: GatewayConfig,
    store: StoreContext,
    notices: AdminNotices,
    filters: DescriptionFilters,
}

impl Gateway {
    pub fn new(
        method: Arc<dyn PaymentMethod>,
        settings: &dyn SettingsStore,
        store: StoreContext,
        notices: AdminNotices,
        filters: DescriptionFilters,
    ) -> Self {
        let config = GatewayConfig::from_store(settings);

        Self {
            method,
            config,
            store,
            notices,
            filters,
        }
    }

    pub fn id(&self) -> &str {
        self.method.id()
    }

    /// Display title; the settings override wins over the method default.
    pub fn title(&self) -> &str {
        self.config
            .title
            .as_deref()
            .unwrap_or_else(|| self.method.title())
    }

    pub fn description(&self) -> &str {
        self.config
            .description
            .as_deref()
            .unwrap_or_else(|| self.method.description())
    }

    pub fn icon(&self) -> &str {
        self.method.icon()
    }

    pub fn method(&self) -> &dyn PaymentMethod {
        self.method.as_ref()
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn store(&self) -> &StoreContext {
        &self.store
    }

    pub fn notices(&self) -> &AdminNotices {
        &self.notices
    }

    // ---- availability ----

    /// Whether the method should be offered at checkout: the store currency
    /// must be supported, the method's settings check must pass and the
    /// enabled option must be on. No side effects.
    pub fn is_available(&self) -> bool {
        if !self.is_valid_for_use() {
            return false;
        }

        if !self.method.check_settings() {
            return false;
        }

        self.config.enabled
    }

    pub fn needs_setup(&self) -> bool {
        !self.method.check_settings()
    }

    /// Pure currency-membership predicate.
    pub fn is_valid_for_use(&self) -> bool {
        self.method
            .supported_currencies()
            .contains(&self.store.currency)
    }

    // ---- settings ----

    /// Validates the saved settings against the store. On an unsupported
    /// currency a notice naming the store currency and the supported list is
    /// pushed to the admin channel and a validation error is returned, so
    /// the host's save pipeline can block the save.
    pub fn validate_settings(&self) -> Result<()> {
        if self.is_valid_for_use() {
            return Ok(());
        }

        let supported = self
            .method
            .supported_currencies()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let message = format!(
            "Unsupported store currency: {}. Supported currencies: {}",
            self.store.currency, supported
        );
        self.notices.push(message.clone());

        Err(AppError::Validation(message))
    }

    /// Pass-through validator: an empty value records one admin notice built
    /// from the field's label, but the value is returned unchanged either
    /// way. The host's save pipeline checks the notice list separately.
    pub fn validate_required_field<'a>(&self, key: &str, value: &'a str) -> &'a str {
        if value.trim().is_empty() {
            let label = self
                .method
                .field_label(key)
                .unwrap_or_else(|| key.to_string());
            self.notices.push(format!("{label} field must be set."));
        }

        value
    }

    /// Admin UI anchor for one or more settings field keys.
    pub fn settings_field_id(&self, keys: &[&str]) -> String {
        keys.iter()
            .map(|key| format!("#{}_{}", self.id(), key))
            .collect::<Vec<_>>()
            .join(", ")
    }

    // ---- key material ----

    /// Attempts to parse a public-key blob. A failure logs the full
    /// decode-attempt trail and yields false; nothing is raised.
    pub fn validate_public_key(&self, key_data: &str) -> bool {
        match keys::parse_public_key(key_data) {
            Ok(_) => true,
            Err(err) => {
                self.log_key_errors("validate_public_key", &err);
                false
            }
        }
    }

    /// Same contract as [`Self::validate_public_key`], for a private key
    /// with an optional passphrase.
    pub fn validate_private_key(&self, key_data: &str, passphrase: &str) -> bool {
        match keys::parse_private_key(key_data, passphrase) {
            Ok(_) => true,
            Err(err) => {
                self.log_key_errors("validate_private_key", &err);
                false
            }
        }
    }

    pub fn normalize_key_path(&self, key_path: &str) -> String {
        keys::normalize_key_path(key_path)
    }

    // ---- orders ----

    pub fn order_net_total(&self, order: &Order) -> Decimal {
        order.net_total()
    }

    pub fn format_price(&self, amount: Decimal, currency: Currency) -> String {
        currency.format_amount(amount)
    }

    /// Renders the order template with the order id, runs the description
    /// filters registered for this gateway, then strips any markup a filter
    /// may have introduced.
    pub fn order_description(&self, order: &Order) -> String {
        let description = self
            .config
            .order_template
            .replace(ORDER_ID_PLACEHOLDER, &order.id.to_string());
        let description = self.filters.apply(self.id(), description, order);

        strip_markup(&description)
    }

    // ---- admin ----

    pub fn settings_url(&self) -> String {
        format!(
            "{}/admin.php?page=settings&tab=checkout&section={}",
            self.store.admin_url.trim_end_matches('/'),
            self.id()
        )
    }

    pub fn logs_url(&self) -> String {
        format!(
            "{}/admin.php?page=status&tab=logs&source={}",
            self.store.admin_url.trim_end_matches('/'),
            self.id()
        )
    }

    pub fn settings_admin_message(&self) -> String {
        format!(
            "{} is not properly configured. Verify connection settings: {}",
            self.title(),
            self.settings_url()
        )
    }

    pub fn logs_admin_message(&self) -> String {
        format!(
            "See the {} settings page for log details and setup instructions: {}",
            self.title(),
            self.logs_url()
        )
    }

    /// Points store managers at the logs page. Visible to admin users only.
    pub fn push_logs_notice(&self) {
        if self.store.is_admin_user {
            self.notices.push(self.logs_admin_message());
        }
    }

    // ---- utility ----

    /// Marks user-visible messages as non-production while test mode is on.
    pub fn test_message(&self, message: &str) -> String {
        if self.config.testmode {
            format!("TEST: {message}")
        } else {
            message.to_string()
        }
    }

    pub fn language(&self) -> &str {
        self.store.language()
    }

    // ---- logging ----

    /// Structured log entry tagged with the gateway id. DEBUG entries are
    /// dropped unless the debug option is on. Best effort only; logging
    /// never affects the substantive result.
    pub fn log(&self, level: Level, message: &str) {
        self.log_with_context(level, message, &[]);
    }

    /// Like [`Self::log`], with extra context pairs recorded alongside the
    /// gateway id.
    pub fn log_with_context(&self, level: Level, message: &str, context: &[(&str, &str)]) {
        if level == Level::DEBUG && !self.config.debug {
            return;
        }

        let gateway = self.id();
        if level == Level::ERROR {
            tracing::error!(gateway, context = ?context, "{message}");
        } else if level == Level::WARN {
            tracing::warn!(gateway, context = ?context, "{message}");
        } else if level == Level::INFO {
            tracing::info!(gateway, context = ?context, "{message}");
        } else if level == Level::DEBUG {
            tracing::debug!(gateway, context = ?context, "{message}");
        } else {
            tracing::trace!(gateway, context = ?context, "{message}");
        }
    }

    /// Logs the decode-attempt trail left behind by a failed key parse as a
    /// single error entry, flagged for backtrace collection.
    pub fn log_key_errors(&self, source: &str, err: &KeyError) {
        tracing::error!(
            gateway = self.id(),
            source,
            errors = ?err.attempts(),
            backtrace = true,
            "key material validation failed"
        );
    }
}

/// Removes markup tags from a description, keeping the text content.
fn strip_markup(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut in_tag = false;

    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => output.push(c),
            _ => {}
        }
    }

    output.trim().to_string()
}
