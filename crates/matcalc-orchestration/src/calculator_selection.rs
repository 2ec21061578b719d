//! Calculator selection logic.

use std::sync::Arc;

use matcalc_core::calculator::{Calculator, MatError};
use matcalc_core::method::MultiplicationMethod;
use matcalc_core::registry::CalculatorFactory;

/// A calculator paired with the method it implements.
#[derive(Clone)]
pub struct SelectedCalculator {
    pub method: MultiplicationMethod,
    pub calculator: Arc<dyn Calculator>,
}

/// Get calculators to run based on algorithm selection (`"all"` or a single name).
pub fn get_calculators_to_run(
    algo: &str,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<SelectedCalculator>, MatError> {
    let select = |name: &str| -> Result<SelectedCalculator, MatError> {
        Ok(SelectedCalculator {
            method: name.parse()?,
            calculator: factory.get(name)?,
        })
    };

    match algo.trim() {
        "all" => factory.available().into_iter().map(select).collect(),
        name => Ok(vec![select(name)?]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matcalc_core::registry::DefaultFactory;

    #[test]
    fn select_all() {
        let factory = DefaultFactory::new();
        let calcs = get_calculators_to_run("all", &factory).unwrap();
        assert_eq!(calcs.len(), 3);
        assert_eq!(calcs[1].method, MultiplicationMethod::Strassen);
    }

    #[test]
    fn select_single() {
        let factory = DefaultFactory::new();
        let calcs = get_calculators_to_run("strassen", &factory).unwrap();
        assert_eq!(calcs.len(), 1);
        assert_eq!(calcs[0].calculator.name(), "Strassen");
    }

    #[test]
    fn select_unknown() {
        let factory = DefaultFactory::new();
        let result = get_calculators_to_run("unknown", &factory);
        assert!(matches!(result, Err(MatError::Config(_))));
    }
}
