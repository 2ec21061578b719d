//! Golden file integration tests.
//!
//! Reads tests/testdata/matrix_golden.json and verifies every algorithm
//! reproduces the known products, through both the core trait and the
//! validating decorator.

use std::sync::Arc;

use serde::Deserialize;

use matcalc_core::blocked::BlockedMultiplication;
use matcalc_core::calculator::{Calculator, CoreCalculator, MatCalculator};
use matcalc_core::naive::NaiveMultiplication;
use matcalc_core::options::Options;
use matcalc_core::strassen::StrassenMultiplication;
use matcalc_core::{multiply_blocked, multiply_naive, multiply_strassen_with_threshold, Matrix};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    cases: Vec<GoldenCase>,
}

#[derive(Deserialize)]
struct GoldenCase {
    name: String,
    a: Matrix,
    b: Matrix,
    product: Matrix,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/matrix_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn core_calculators() -> Vec<Arc<dyn CoreCalculator>> {
    vec![
        Arc::new(NaiveMultiplication::new()),
        Arc::new(StrassenMultiplication::new()),
        Arc::new(BlockedMultiplication::new()),
    ]
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

#[test]
fn golden_naive() {
    for case in load_golden_data().cases {
        let c = multiply_naive(&case.a, &case.b).unwrap();
        assert_eq!(c, case.product, "naive: {}", case.name);
    }
}

#[test]
fn golden_strassen_thresholds() {
    for case in load_golden_data().cases {
        for threshold in [1, 2, 3, 64] {
            let c = multiply_strassen_with_threshold(&case.a, &case.b, threshold).unwrap();
            assert_eq!(c, case.product, "strassen t={threshold}: {}", case.name);
        }
    }
}

#[test]
fn golden_blocked_tiles() {
    for case in load_golden_data().cases {
        for block in [1, 2, 3, 32] {
            let c = multiply_blocked(&case.a, &case.b, block).unwrap();
            assert_eq!(c, case.product, "blocked b={block}: {}", case.name);
        }
    }
}

// ---------------------------------------------------------------------------
// Trait routes
// ---------------------------------------------------------------------------

#[test]
fn golden_core_calculators() {
    let opts = Options {
        strassen_threshold: 1,
        block_size: 2,
        ..Options::default()
    };
    for case in load_golden_data().cases.iter().filter(|c| !c.a.is_empty()) {
        for core in core_calculators() {
            let c = core.multiply_core(&case.a, &case.b, &opts).unwrap();
            assert_eq!(c, case.product, "{}: {}", core.name(), case.name);
        }
    }
}

#[test]
fn golden_decorated_calculators() {
    let opts = Options::default().normalize();
    for case in load_golden_data().cases {
        for core in core_calculators() {
            let calc = MatCalculator::new(core);
            let c = calc.multiply(&case.a, &case.b, &opts).unwrap();
            assert_eq!(c, case.product, "{}: {}", calc.name(), case.name);
        }
    }
}

#[test]
fn golden_products_are_square() {
    for case in load_golden_data().cases {
        assert_eq!(case.a.size(), case.b.size(), "{}", case.name);
        assert_eq!(case.product.size(), case.a.size(), "{}", case.name);
    }
}
