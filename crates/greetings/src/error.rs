// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The greetings authors

//! Error type for greeting operations.

use thiserror::Error;

/// Failure modes for greeting operations.
///
/// An empty name is the only error. It is returned directly to the caller,
/// never retried, logged, or wrapped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GreetError {
    /// The supplied name was the empty string.
    #[error("name must not be empty")]
    EmptyName,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
