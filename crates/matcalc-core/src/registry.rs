//! Calculator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::blocked::BlockedMultiplication;
use crate::calculator::{Calculator, MatCalculator, MatError};
use crate::method::MultiplicationMethod;
use crate::naive::NaiveMultiplication;
use crate::strassen::StrassenMultiplication;

/// Factory trait for creating calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Get or create a calculator by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, MatError>;

    /// List all available calculator names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<MultiplicationMethod, Arc<dyn Calculator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_calculator(method: MultiplicationMethod) -> Arc<dyn Calculator> {
        match method {
            MultiplicationMethod::Naive => {
                Arc::new(MatCalculator::new(Arc::new(NaiveMultiplication::new())))
            }
            MultiplicationMethod::Strassen => {
                Arc::new(MatCalculator::new(Arc::new(StrassenMultiplication::new())))
            }
            MultiplicationMethod::Blocked => {
                Arc::new(MatCalculator::new(Arc::new(BlockedMultiplication::new())))
            }
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, MatError> {
        let method: MultiplicationMethod = name.parse()?;

        // Check cache first
        if let Some(calc) = self.cache.read().get(&method) {
            return Ok(Arc::clone(calc));
        }

        // Create and cache
        let calc = Self::create_calculator(method);
        self.cache.write().insert(method, Arc::clone(&calc));
        Ok(calc)
    }

    fn available(&self) -> Vec<&str> {
        MultiplicationMethod::ALL.iter().map(|m| m.key()).collect()
    }
}
