use std::sync::Arc;

use labwear_core::config::WearConfig;
use labwear_core::errors::{LabError, LabResult};
use labwear_core::traits::IWearStrategy;

use crate::strategies::{ExponentialWear, LinearWear};

/// Owns the single shared instance of each wear strategy.
///
/// Every asset holds an `Arc` into this registry, so swapping an asset's
/// strategy never allocates a new formula object.
#[derive(Debug, Clone)]
pub struct StrategyRegistry {
    linear: Arc<dyn IWearStrategy>,
    exponential: Arc<dyn IWearStrategy>,
    default_name: &'static str,
}

impl StrategyRegistry {
    /// Registry with linear as the default strategy.
    pub fn new() -> Self {
        Self {
            linear: Arc::new(LinearWear),
            exponential: Arc::new(ExponentialWear),
            default_name: LinearWear::NAME,
        }
    }

    /// Registry whose default is taken from configuration.
    pub fn from_config(config: &WearConfig) -> LabResult<Self> {
        let mut registry = Self::new();
        registry.default_name = registry.resolve(&config.default_strategy)?.name();
        Ok(registry)
    }

    /// Resolve a strategy by name.
    ///
    /// Matching is case-insensitive and also accepts abbreviated labels
    /// such as `"Lin"` or `"Exp"`.
    pub fn resolve(&self, name: &str) -> LabResult<Arc<dyn IWearStrategy>> {
        let key = name.trim().to_ascii_lowercase();
        match key.get(..3) {
            Some(prefix) if LinearWear::NAME.starts_with(prefix) => Ok(Arc::clone(&self.linear)),
            Some(prefix) if ExponentialWear::NAME.starts_with(prefix) => {
                Ok(Arc::clone(&self.exponential))
            }
            _ => Err(LabError::UnknownStrategy {
                name: name.to_string(),
            }),
        }
    }

    pub fn linear(&self) -> Arc<dyn IWearStrategy> {
        Arc::clone(&self.linear)
    }

    pub fn exponential(&self) -> Arc<dyn IWearStrategy> {
        Arc::clone(&self.exponential)
    }

    /// Strategy assigned to assets registered without an explicit choice.
    pub fn default_strategy(&self) -> Arc<dyn IWearStrategy> {
        if self.default_name == ExponentialWear::NAME {
            self.exponential()
        } else {
            self.linear()
        }
    }

    pub fn names(&self) -> [&'static str; 2] {
        [LinearWear::NAME, ExponentialWear::NAME]
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_names_and_labels() {
        let registry = StrategyRegistry::new();
        assert_eq!(registry.resolve("linear").unwrap().name(), "linear");
        assert_eq!(registry.resolve("Lineal").unwrap().name(), "linear");
        assert_eq!(registry.resolve(" EXPONENTIAL ").unwrap().name(), "exponential");
        assert_eq!(registry.resolve("Exponencial").unwrap().name(), "exponential");
    }

    #[test]
    fn unknown_name_is_typed_error() {
        let registry = StrategyRegistry::new();
        assert!(matches!(
            registry.resolve("logarithmic"),
            Err(LabError::UnknownStrategy { .. })
        ));
        assert!(registry.resolve("li").is_err());
    }

    #[test]
    fn resolved_instances_are_shared() {
        let registry = StrategyRegistry::new();
        let a = registry.resolve("linear").unwrap();
        let b = registry.linear();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn default_comes_from_config() {
        let config = WearConfig {
            default_strategy: "exponential".to_string(),
        };
        let registry = StrategyRegistry::from_config(&config).unwrap();
        assert_eq!(registry.default_strategy().name(), "exponential");

        let bad = WearConfig {
            default_strategy: "quadratic".to_string(),
        };
        assert!(StrategyRegistry::from_config(&bad).is_err());
    }
}
