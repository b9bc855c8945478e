use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::{AppError, Result};
use crate::modules::orders::Order;

use super::gateway::Gateway;

/// Explicit gateway lookup handed to integrations instead of ambient host
/// state.
#[derive(Default)]
pub struct GatewayRegistry {
    gateways: HashMap<String, Arc<Gateway>>,
}

impl GatewayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a gateway under its method id.
    pub fn register(&mut self, gateway: Arc<Gateway>) {
        self.gateways.insert(gateway.id().to_string(), gateway);
    }

    /// Get a gateway by name
    pub fn get(&self, name: &str) -> Result<Arc<Gateway>> {
        self.gateways
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Gateway '{}' not found", name)))
    }

    pub fn ids(&self) -> Vec<String> {
        self.gateways.keys().cloned().collect()
    }
}

type DescriptionFilterFn = dyn Fn(String, &Order) -> String + Send + Sync;

/// Named extension point for order descriptions.
///
/// Callbacks are registered per gateway id and invoked in registration
/// order as `(description, order) -> description`; each may fully replace
/// the string. Markup stripping happens after the whole chain has run.
#[derive(Clone, Default)]
pub struct DescriptionFilters {
    filters: Arc<Mutex<HashMap<String, Vec<Box<DescriptionFilterFn>>>>>,
}

impl DescriptionFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&self, gateway_id: &str, filter: F)
    where
        F: Fn(String, &Order) -> String + Send + Sync + 'static,
    {
        self.lock()
            .entry(gateway_id.to_string())
            .or_default()
            .push(Box::new(filter));
    }

    pub fn apply(&self, gateway_id: &str, description: String, order: &Order) -> String {
        let filters = self.lock();
        match filters.get(gateway_id) {
            Some(chain) => chain
                .iter()
                .fold(description, |description, filter| filter(description, order)),
            None => description,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<Box<DescriptionFilterFn>>>> {
        match self.filters.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
