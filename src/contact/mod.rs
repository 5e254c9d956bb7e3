//! Contact Data Model
//!
//! Defines the contact record and its validation contract.
//!
//! ## Overview
//! A contact is a `(id, name, number)` triple. The `id` is assigned by the
//! owning store and is opaque to this module; `name` and `number` must pass
//! the rules in `validation` before a record may be created or updated.
//!
//! ## Submodules
//! - **`types`**: The `Contact` record shared by both storage backends.
//! - **`validation`**: Pure, backend-independent rule checks. Produces a
//!   `ValidationError` enumerating every violated rule rather than stopping
//!   at the first one.

pub mod types;
pub mod validation;

pub use types::Contact;
pub use validation::{validate, ValidationError, Violation};

#[cfg(test)]
mod tests;
