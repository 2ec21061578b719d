#![no_main]

use libfuzzer_sys::fuzz_target;

use matcalc_core::{multiply_naive, multiply_strassen_with_threshold, MatError, Matrix};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Size capped at 24 so the padded problem stays at most 32x32
    let n = usize::from(data[0] % 25);
    let threshold = usize::from(data[1] % 9);
    let elements = &data[2..];

    let fill = |offset: usize| -> Matrix {
        let values = (0..n * n)
            .map(|i| {
                let at = |k: usize| elements.get((offset + 4 * i + k) % elements.len().max(1)).copied().unwrap_or(0);
                i32::from_le_bytes([at(0), at(1), at(2), at(3)])
            })
            .collect();
        Matrix::from_vec(n, values).unwrap()
    };
    let a = fill(0);
    let b = fill(1);

    match multiply_strassen_with_threshold(&a, &b, threshold) {
        Ok(c) => assert_eq!(c, multiply_naive(&a, &b).unwrap(), "n={n} threshold={threshold}"),
        Err(e) => assert!(threshold == 0 && matches!(e, MatError::Config(_))),
    }
});
