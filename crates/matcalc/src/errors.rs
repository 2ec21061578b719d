//! Error handling and exit codes.

use matcalc_core::calculator::MatError;
use matcalc_core::constants::exit_codes;

/// Exit code for a multiplication error.
#[must_use]
pub fn handle_error(err: &MatError) -> i32 {
    match err {
        MatError::InvalidSize(_) | MatError::Config(_) => exit_codes::ERROR_CONFIG,
        MatError::AllocationFailure(_) | MatError::MemoryLimit { .. } => exit_codes::ERROR_MEMORY,
        MatError::Mismatch => exit_codes::ERROR_MISMATCH,
        MatError::SizeMismatch { .. }
        | MatError::NotSquare { .. }
        | MatError::BufferLength { .. } => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any application error.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<MatError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&MatError::InvalidSize(-1)), 4);
        assert_eq!(handle_error(&MatError::Config("bad".into())), 4);
        assert_eq!(handle_error(&MatError::AllocationFailure(1 << 20)), 5);
        assert_eq!(
            handle_error(&MatError::MemoryLimit {
                estimated: 10,
                limit: 1
            }),
            5
        );
        assert_eq!(handle_error(&MatError::Mismatch), 3);
        assert_eq!(
            handle_error(&MatError::SizeMismatch { left: 2, right: 3 }),
            1
        );
        assert_eq!(
            handle_error(&MatError::BufferLength {
                len: 3,
                expected: 4
            }),
            1
        );
    }

    #[test]
    fn anyhow_codes() {
        assert_eq!(exit_code(&anyhow::Error::new(MatError::Mismatch)), 3);
        assert_eq!(exit_code(&anyhow::anyhow!("disk full")), 1);
        let io = std::io::Error::new(std::io::ErrorKind::Other, "nope");
        assert_eq!(exit_code(&anyhow::Error::new(io)), 1);
    }
}
