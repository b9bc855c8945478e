use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::Currency;

/// An order as exposed by the host's order subsystem. Gateways only read it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub currency: Currency,
    pub total: Decimal,
    pub refunds: Vec<Refund>,
    pub created_at: DateTime<Utc>,
}

/// A refund record attached to an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Refund {
    pub id: Uuid,
    pub amount: Decimal,
    pub reason: Option<String>,
    /// True when the amount was actually returned through the gateway,
    /// false for bookkeeping-only refunds.
    pub payment_refunded: bool,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(id: u64, currency: Currency, total: Decimal) -> Self {
        Self {
            id,
            currency,
            total,
            refunds: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_refund(mut self, amount: Decimal, payment_refunded: bool) -> Self {
        self.refunds.push(Refund::new(amount, payment_refunded));
        self
    }

    /// Order total minus everything genuinely refunded through the gateway.
    ///
    /// Recomputed from the refund list instead of trusting the host's
    /// refunded total, which double-counts refunds recorded without a
    /// gateway-side refund.
    pub fn net_total(&self) -> Decimal {
        let refunded: Decimal = self
            .refunds
            .iter()
            .filter(|refund| refund.payment_refunded)
            .map(|refund| refund.amount)
            .sum();

        self.total - refunded
    }
}

impl Refund {
    pub fn new(amount: Decimal, payment_refunded: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            reason: None,
            payment_refunded,
            created_at: Utc::now(),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}
