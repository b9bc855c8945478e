// End-to-end availability scenario: a {USD, EUR} gateway in a GBP store is
// unavailable and records an operator-facing notice naming both sides.

use std::sync::Arc;

use paybase::config::{InMemorySettings, StoreContext};
use paybase::core::Currency;
use paybase::gateways::{
    AdminNotices, DescriptionFilters, Feature, Gateway, GatewayRegistry, PaymentMethod,
};
use paybase::orders::Order;
use rust_decimal_macros::dec;

struct CardMethod;

impl PaymentMethod for CardMethod {
    fn id(&self) -> &str {
        "cardpay"
    }

    fn title(&self) -> &str {
        "Card payments"
    }

    fn description(&self) -> &str {
        "Pay securely by card."
    }

    fn supported_currencies(&self) -> &[Currency] {
        &[Currency::USD, Currency::EUR]
    }

    fn features(&self) -> &[Feature] {
        &[Feature::Products, Feature::Refunds]
    }
}

fn build_gateway(settings: InMemorySettings, currency: Currency) -> (Arc<Gateway>, AdminNotices) {
    let notices = AdminNotices::new();
    let gateway = Arc::new(Gateway::new(
        Arc::new(CardMethod),
        &settings,
        StoreContext::new(currency, "https://shop.example/wp-admin"),
        notices.clone(),
        DescriptionFilters::new(),
    ));
    (gateway, notices)
}

#[test]
fn test_gbp_store_blocks_the_gateway() {
    let (gateway, notices) = build_gateway(InMemorySettings::new(), Currency::GBP);

    assert!(!gateway.is_available());
    assert!(gateway.validate_settings().is_err());

    let messages = notices.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("GBP"));
    assert!(messages[0].contains("USD, EUR"));
}

#[test]
fn test_supported_store_currency_makes_the_gateway_available() {
    let (gateway, notices) = build_gateway(InMemorySettings::new(), Currency::USD);

    assert!(gateway.is_available());
    assert!(gateway.validate_settings().is_ok());
    assert!(notices.is_empty());
}

#[test]
fn test_disabled_option_blocks_an_otherwise_valid_gateway() {
    let settings = InMemorySettings::new().with("enabled", "no");
    let (gateway, _) = build_gateway(settings, Currency::EUR);

    // Currency and settings check pass, but the method is switched off.
    assert!(gateway.is_valid_for_use());
    assert!(!gateway.is_available());
}

#[test]
fn test_registry_round_trip() {
    let (gateway, _) = build_gateway(InMemorySettings::new(), Currency::USD);

    let mut registry = GatewayRegistry::new();
    registry.register(gateway);

    let resolved = registry.get("cardpay").expect("registered gateway");
    assert_eq!(resolved.id(), "cardpay");
    assert!(registry.get("other").is_err());
}

#[test]
fn test_order_description_uses_the_configured_template() {
    let settings = InMemorySettings::new().with("order_template", "Payment for order {id}");
    let (gateway, _) = build_gateway(settings, Currency::USD);

    let order = Order::new(4711, Currency::USD, dec!(99.90));
    assert_eq!(gateway.order_description(&order), "Payment for order 4711");
    assert_eq!(
        gateway.format_price(order.net_total(), order.currency),
        "99.90 USD"
    );
}

#[test]
fn test_description_filter_can_replace_and_markup_is_stripped() {
    let filters = DescriptionFilters::new();
    filters.register("cardpay", |description, order| {
        format!("<strong>{description}</strong> / {}", order.currency)
    });

    let settings = InMemorySettings::new();
    let notices = AdminNotices::new();
    let gateway = Gateway::new(
        Arc::new(CardMethod),
        &settings,
        StoreContext::new(Currency::USD, "https://shop.example/wp-admin"),
        notices,
        filters,
    );

    let order = Order::new(8, Currency::USD, dec!(10.00));
    assert_eq!(gateway.order_description(&order), "Order #8 / USD");
}
