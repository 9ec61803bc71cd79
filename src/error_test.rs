// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Tests for error display.

use super::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_key_not_found() {
        assert_eq!(BTreeError::KeyNotFound.to_string(), "key not found");
    }

    #[test]
    fn test_display_index_unsupported() {
        let err = BTreeError::IndexUnsupported { index: 3 };
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_display_bad_argument() {
        let err = BTreeError::BadArgument {
            reason: "order must be >= 2".to_string(),
        };
        assert!(err.to_string().contains("order must be >= 2"));
    }

    #[test]
    fn test_errors_are_equatable() {
        assert_eq!(BTreeError::KeyNotFound, BTreeError::KeyNotFound);
        assert_ne!(BTreeError::KeyNotFound, BTreeError::IndexEmpty);
    }

    #[test]
    fn test_error_implements_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&BTreeError::IndexEmpty);
    }
}
