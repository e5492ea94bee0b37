//! Strategy factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::coordinator::CoordinatorProduct;
use crate::fan::FanProduct;
use crate::pure::PureProduct;
use crate::strategy::{MatrixProduct, ProductError};

/// Factory trait for creating multiplication strategies.
pub trait StrategyFactory: Send + Sync {
    /// Get or create a strategy by name.
    fn get(&self, name: &str) -> Result<Arc<dyn MatrixProduct>, ProductError>;

    /// List all available strategy names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn MatrixProduct>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_strategy(name: &str) -> Result<Arc<dyn MatrixProduct>, ProductError> {
        match name {
            "coordinator" => Ok(Arc::new(CoordinatorProduct::new())),
            "fan" => Ok(Arc::new(FanProduct::new())),
            "pure" => Ok(Arc::new(PureProduct::new())),
            _ => Err(ProductError::Config(format!("unknown strategy: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl StrategyFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn MatrixProduct>, ProductError> {
        // Check cache first
        if let Some(strategy) = self.cache.read().get(name) {
            return Ok(Arc::clone(strategy));
        }

        // Create and cache
        let strategy = Self::create_strategy(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&strategy));
        Ok(strategy)
    }

    fn available(&self) -> Vec<&str> {
        vec!["coordinator", "fan", "pure"]
    }
}
