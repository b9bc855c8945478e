// Property-based tests for refund-aware net totals: only refunds that were
// actually returned through the gateway reduce the total.

use paybase::core::Currency;
use paybase::orders::Order;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

proptest! {
    #[test]
    fn test_net_total_matches_filtered_refund_sum(
        total_cents in 0u64..100_000_000u64,
        refunds in prop::collection::vec((0u64..1_000_000u64, any::<bool>()), 0..8)
    ) {
        let total = Decimal::new(total_cents as i64, 2);
        let mut order = Order::new(1, Currency::USD, total);
        let mut expected = total;

        for (amount_cents, payment_refunded) in refunds {
            let amount = Decimal::new(amount_cents as i64, 2);
            order = order.with_refund(amount, payment_refunded);
            if payment_refunded {
                expected -= amount;
            }
        }

        prop_assert_eq!(order.net_total(), expected);
    }

    #[test]
    fn test_administrative_refunds_never_change_the_net_total(
        total_cents in 0u64..100_000_000u64,
        amounts in prop::collection::vec(0u64..1_000_000u64, 0..8)
    ) {
        let total = Decimal::new(total_cents as i64, 2);
        let mut order = Order::new(1, Currency::EUR, total);

        for amount_cents in amounts {
            order = order.with_refund(Decimal::new(amount_cents as i64, 2), false);
        }

        prop_assert_eq!(order.net_total(), total);
    }
}

#[test]
fn test_mixed_refund_example() {
    let order = Order::new(1001, Currency::USD, dec!(250.00))
        .with_refund(dec!(50.00), true)
        .with_refund(dec!(30.00), false)
        .with_refund(dec!(20.00), true);

    assert_eq!(order.net_total(), dec!(180.00));
}
