use std::sync::Arc;

use serde::Serialize;

use crate::core::{AppError, Result};
use crate::modules::gateways::{Feature, Gateway, GatewayRegistry};

use super::scripts::{ScriptAsset, ScriptRegistry, BLOCK_SCRIPT_DEPS};

/// Display metadata handed to the blocks checkout for one payment method.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentMethodData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub supports: Vec<Feature>,
}

impl PaymentMethodData {
    /// JSON form handed to the client-side payment method script.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "title": self.title,
            "description": self.description,
            "icon": self.icon,
            "supports": self.supports,
        })
    }
}

/// Bridges one registered [`Gateway`] into the blocks checkout registration
/// contract.
///
/// The integration starts uninitialized; [`BlocksIntegration::initialize`]
/// resolves the gateway by name from the injected registry and is a one-way
/// transition. Every other method fails with [`AppError::NotInitialized`]
/// until it has run.
pub struct BlocksIntegration {
    name: String,
    gateway: Option<Arc<Gateway>>,
}

impl BlocksIntegration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gateway: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolves the gateway this integration fronts. Must run before any
    /// other method is called.
    pub fn initialize(&mut self, registry: &GatewayRegistry) -> Result<()> {
        self.gateway = Some(registry.get(&self.name)?);
        Ok(())
    }

    fn gateway(&self) -> Result<&Gateway> {
        self.gateway.as_deref().ok_or_else(|| {
            AppError::not_initialized(format!(
                "blocks integration '{}' used before initialize()",
                self.name
            ))
        })
    }

    /// Whether the checkout should offer this method and enqueue its
    /// assets.
    pub fn is_active(&self) -> Result<bool> {
        Ok(self.gateway()?.is_available())
    }

    /// Live snapshot of the gateway's display metadata. Nothing is cached;
    /// the snapshot reflects the gateway configuration at call time.
    pub fn payment_method_data(&self) -> Result<PaymentMethodData> {
        let gateway = self.gateway()?;
        let method = gateway.method();

        let supports = method
            .features()
            .iter()
            .copied()
            .filter(|feature| method.supports(*feature))
            .collect();

        Ok(PaymentMethodData {
            id: gateway.id().to_string(),
            title: gateway.title().to_string(),
            description: gateway.description().to_string(),
            icon: gateway.icon().to_string(),
            supports,
        })
    }

    /// Registers the method's checkout bundle and translation catalog with
    /// the host's asset registry and returns the handles to enqueue.
    pub fn payment_method_script_handles(
        &self,
        scripts: &mut dyn ScriptRegistry,
    ) -> Result<Vec<String>> {
        let gateway = self.gateway()?;
        let method = gateway.method();

        let handle = format!("{}-blocks", self.name);
        let base = method.assets_base_url().trim_end_matches('/');

        scripts.register(ScriptAsset {
            handle: handle.clone(),
            src: format!("{base}/assets/js/blocks.js"),
            deps: BLOCK_SCRIPT_DEPS.iter().map(|dep| dep.to_string()).collect(),
            version: method.version().to_string(),
            in_footer: true,
        });
        scripts.set_translations(&handle, method.text_domain(), &format!("{base}/languages"));

        Ok(vec![handle])
    }
}
