//! Golden file integration tests.
//!
//! Runs the known products from tests/testdata/matrix_golden.json through
//! the registry and orchestration layer used by the binary.

use serde::Deserialize;

use matcalc_core::registry::DefaultFactory;
use matcalc_core::{Matrix, Options};
use matcalc_orchestration::{analyze_comparison_results, execute_calculations, get_calculators_to_run};

#[derive(Deserialize)]
struct GoldenData {
    cases: Vec<GoldenCase>,
}

#[derive(Deserialize)]
struct GoldenCase {
    name: String,
    a: Matrix,
    b: Matrix,
    product: Matrix,
}

fn load_golden() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../tests/testdata/matrix_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("Failed to read golden file");
    serde_json::from_str(&data).expect("Failed to parse golden file")
}

#[test]
fn golden_all_algorithms() {
    let factory = DefaultFactory::new();
    let calculators = get_calculators_to_run("all", &factory).unwrap();
    let opts = Options {
        strassen_threshold: 1,
        block_size: 2,
        ..Options::default()
    };

    for case in load_golden().cases {
        let results = execute_calculations(&calculators, &case.a, &case.b, &opts);
        assert_eq!(results.len(), 3);
        for result in &results {
            assert_eq!(
                result.outcome.as_ref().unwrap(),
                &case.product,
                "{}: {}",
                result.algorithm,
                case.name
            );
        }
        analyze_comparison_results(&results).unwrap();
    }
}

#[test]
fn golden_json_summary() {
    let factory = DefaultFactory::new();
    let calculators = get_calculators_to_run("strassen", &factory).unwrap();
    let opts = Options::default().normalize();

    for case in load_golden().cases {
        let results = execute_calculations(&calculators, &case.a, &case.b, &opts);
        let json = serde_json::to_value(results[0].summary(true)).unwrap();
        assert_eq!(
            json["result"],
            serde_json::to_value(&case.product).unwrap(),
            "{}",
            case.name
        );
    }
}
