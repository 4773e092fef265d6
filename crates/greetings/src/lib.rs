// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The greetings authors

//! Greeting formatting with validated names.
//!
//! The crate exposes a handful of pure functions: [`hello`] formats a fixed
//! greeting for one name, [`hello_with`] picks a template using a
//! caller-supplied random source, and [`hellos`] / [`hellos_with`] greet a
//! batch of names at once. The empty name is the single failure mode,
//! reported as [`GreetError::EmptyName`] and surfaced directly to the
//! caller.

pub mod error;
pub mod greet;

pub use error::GreetError;
pub use greet::{hello, hello_with, hellos, hellos_with};
