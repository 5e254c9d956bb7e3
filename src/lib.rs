//! Phonebook Service Library
//!
//! This library crate defines the core modules of the phonebook REST service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of three loosely coupled subsystems:
//!
//! - **`contact`**: The data model. Defines the contact record and the pure
//!   validation rules (name length, number format) that every record must
//!   satisfy before it is persisted.
//! - **`storage`**: The data access layer. Exposes the `ContactStore` trait
//!   with two implementations: an in-memory list for single-process use and a
//!   MongoDB-backed store for persistent deployments.
//! - **`api`**: The HTTP layer. Contains the Axum request handlers, the
//!   request/response DTOs, and the error translator that maps storage and
//!   validation failures to HTTP status codes.

pub mod api;
pub mod contact;
pub mod storage;
