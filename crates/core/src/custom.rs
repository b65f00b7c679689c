//! Custom block and bullet extension points.
//!
//! Providers are registered by capability name in a `CapabilityRegistry`
//! that the caller passes into layout. A missing registry or provider
//! degrades to "no effect": no lines, or an empty bullet symbol.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;
use smol_str::SmolStr;
use tracing::debug;

use crate::error::{FlowError, Result};
use crate::layout::Line;

/// Capability name of the custom block provider.
pub const DOCUMENT_CUSTOM_BLOCK: &str = "documentCustomBlock";

/// Capability name of the custom bullet provider.
pub const DOCUMENT_CUSTOM_BULLET: &str = "documentCustomBullet";

/// Lays out a block whose content is opaque to the core.
pub trait CustomBlockProvider: Send + Sync {
    /// Lines for `custom` in a column `column_width` wide.
    fn layout_custom_block(&self, block_id: &str, custom: &Value, column_width: f64) -> Vec<Line>;
}

/// Produces ordered-list bullet symbols.
pub trait CustomBulletProvider: Send + Sync {
    fn ordered_symbol(&self, start_index: usize, start_number: usize, glyph_type: &str) -> String;
}

#[derive(Clone)]
pub enum Capability {
    Block(Arc<dyn CustomBlockProvider>),
    Bullet(Arc<dyn CustomBulletProvider>),
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Block(_) => f.write_str("Capability::Block"),
            Capability::Bullet(_) => f.write_str("Capability::Bullet"),
        }
    }
}

/// Named capabilities available to layout.
#[derive(Debug, Clone, Default)]
pub struct CapabilityRegistry {
    capabilities: IndexMap<SmolStr, Capability>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `capability` under `name`; names are unique.
    pub fn register(&mut self, name: &str, capability: Capability) -> Result<()> {
        if self.capabilities.contains_key(name) {
            return Err(FlowError::DuplicateCapability(name.to_string()));
        }
        self.capabilities.insert(SmolStr::new(name), capability);
        Ok(())
    }

    pub fn register_block(&mut self, provider: Arc<dyn CustomBlockProvider>) -> Result<()> {
        self.register(DOCUMENT_CUSTOM_BLOCK, Capability::Block(provider))
    }

    pub fn register_bullet(&mut self, provider: Arc<dyn CustomBulletProvider>) -> Result<()> {
        self.register(DOCUMENT_CUSTOM_BULLET, Capability::Bullet(provider))
    }

    pub fn get(&self, name: &str) -> Option<&Capability> {
        self.capabilities.get(name)
    }

    pub fn block_provider(&self) -> Option<&dyn CustomBlockProvider> {
        match self.get(DOCUMENT_CUSTOM_BLOCK)? {
            Capability::Block(provider) => Some(provider.as_ref()),
            Capability::Bullet(_) => None,
        }
    }

    pub fn bullet_provider(&self) -> Option<&dyn CustomBulletProvider> {
        match self.get(DOCUMENT_CUSTOM_BULLET)? {
            Capability::Bullet(provider) => Some(provider.as_ref()),
            Capability::Block(_) => None,
        }
    }
}

/// Lines of a custom block, or none when no provider is available.
pub fn deal_with_custom_block(
    registry: Option<&CapabilityRegistry>,
    block_id: &str,
    custom: &Value,
    column_width: f64,
) -> Vec<Line> {
    match registry.and_then(CapabilityRegistry::block_provider) {
        Some(provider) => provider.layout_custom_block(block_id, custom, column_width),
        None => {
            debug!(block = block_id, "no custom block provider");
            Vec::new()
        }
    }
}

/// Ordered bullet symbol, or an empty string when no provider is available.
pub fn deal_with_custom_bullet_ordered_symbol(
    registry: Option<&CapabilityRegistry>,
    start_index: usize,
    start_number: usize,
    glyph_type: &str,
) -> String {
    registry
        .and_then(CapabilityRegistry::bullet_provider)
        .map(|provider| provider.ordered_symbol(start_index, start_number, glyph_type))
        .unwrap_or_default()
}
