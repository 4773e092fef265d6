// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The greetings authors

//! Greeting operations.
//!
//! Every operation validates the name first: the empty string is rejected
//! with [`GreetError::EmptyName`], anything else is embedded verbatim into a
//! greeting template. Randomized template selection takes the random source
//! as a parameter so callers (and tests) control determinism.

use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::GreetError;

/// Greeting templates. `{}` holds the name; each template keeps the name
/// bounded by punctuation or whitespace so it reads as a whole word.
const TEMPLATES: &[&str] = &[
    "Hi, {}. Welcome!",
    "Great to see you, {}!",
    "Hail, {}! Well met!",
];

/// Format a greeting for `name` using the default template.
///
/// # Errors
///
/// Returns [`GreetError::EmptyName`] if `name` is empty.
pub fn hello(name: &str) -> Result<String, GreetError> {
    if name.is_empty() {
        return Err(GreetError::EmptyName);
    }
    Ok(render(TEMPLATES[0], name))
}

/// Format a greeting for `name`, picking a template with `rng`.
///
/// Every template embeds the name, so repeated calls always greet the same
/// person even when the surrounding text differs.
///
/// # Errors
///
/// Returns [`GreetError::EmptyName`] if `name` is empty.
pub fn hello_with<R: Rng + ?Sized>(name: &str, rng: &mut R) -> Result<String, GreetError> {
    if name.is_empty() {
        return Err(GreetError::EmptyName);
    }
    let template = TEMPLATES.choose(rng).copied().unwrap_or(TEMPLATES[0]);
    Ok(render(template, name))
}

/// Greet every name in `names`, mapping name to greeting.
///
/// Duplicate names collapse to a single entry.
///
/// # Errors
///
/// Returns [`GreetError::EmptyName`] if any name is empty; no partial map is
/// returned.
pub fn hellos<S: AsRef<str>>(names: &[S]) -> Result<BTreeMap<String, String>, GreetError> {
    let mut greetings = BTreeMap::new();
    for name in names {
        let name = name.as_ref();
        greetings.insert(name.to_string(), hello(name)?);
    }
    Ok(greetings)
}

/// Greet every name in `names` with templates drawn from `rng`.
///
/// # Errors
///
/// Returns [`GreetError::EmptyName`] if any name is empty; no partial map is
/// returned.
pub fn hellos_with<S, R>(names: &[S], rng: &mut R) -> Result<BTreeMap<String, String>, GreetError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut greetings = BTreeMap::new();
    for name in names {
        let name = name.as_ref();
        greetings.insert(name.to_string(), hello_with(name, rng)?);
    }
    Ok(greetings)
}

fn render(template: &str, name: &str) -> String {
    template.replacen("{}", name, 1)
}

#[cfg(test)]
#[path = "greet_tests.rs"]
mod tests;
