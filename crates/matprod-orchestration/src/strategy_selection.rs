//! Strategy selection logic.

use std::sync::Arc;

use matprod_core::{MatrixProduct, ProductError, StrategyFactory};

/// Get the strategies to run based on the `--strategy` selection.
pub fn get_strategies_to_run(
    selection: &str,
    factory: &dyn StrategyFactory,
) -> Result<Vec<Arc<dyn MatrixProduct>>, ProductError> {
    match selection {
        "all" => {
            let names = factory.available();
            let mut strategies = Vec::new();
            for name in names {
                strategies.push(factory.get(name)?);
            }
            Ok(strategies)
        }
        name => {
            let strategy = factory.get(name)?;
            Ok(vec![strategy])
        }
    }
}
