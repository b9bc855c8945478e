use serde::{Deserialize, Serialize};

/// Dependencies every blocks checkout bundle is registered with.
pub const BLOCK_SCRIPT_DEPS: &[&str] = &[
    "checkout-blocks-registry",
    "store-settings",
    "element",
    "html-entities",
    "i18n",
];

/// One client-side bundle to be registered with the host's asset pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptAsset {
    pub handle: String,
    pub src: String,
    pub deps: Vec<String>,
    pub version: String,
    /// Load after the document body rather than in the head.
    pub in_footer: bool,
}

/// Host-side client asset registry.
///
/// Registration is bookkeeping only; the host decides when registered
/// assets are actually enqueued and delivered.
pub trait ScriptRegistry {
    fn register(&mut self, asset: ScriptAsset);

    /// Associates a translation catalog with a registered handle.
    fn set_translations(&mut self, handle: &str, domain: &str, path: &str);
}
