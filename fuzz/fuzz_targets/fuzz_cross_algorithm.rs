#![no_main]

use libfuzzer_sys::fuzz_target;

use matcalc_core::registry::{CalculatorFactory, DefaultFactory};
use matcalc_core::{Matrix, Options};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // Digit-valued operands like the CLI generates, size capped at 20
    let n = usize::from(data[0] % 21);
    let opts = Options {
        strassen_threshold: usize::from(data[1] % 8),
        block_size: usize::from(data[2] % 8),
        ..Options::default()
    }
    .normalize();
    let digits = &data[3..];
    let digit = |i: usize| digits.get(i % digits.len().max(1)).map_or(0, |d| i32::from(d % 10));

    let a = Matrix::from_vec(n, (0..n * n).map(digit).collect()).unwrap();
    let b = Matrix::from_vec(n, (0..n * n).map(|i| digit(i + n * n)).collect()).unwrap();

    let factory = DefaultFactory::new();
    let products: Vec<Matrix> = factory
        .available()
        .into_iter()
        .map(|name| factory.get(name).unwrap().multiply(&a, &b, &opts).unwrap())
        .collect();

    for (name, product) in factory.available().into_iter().zip(&products) {
        assert_eq!(product, &products[0], "{name} disagrees at n={n}");
    }
});
