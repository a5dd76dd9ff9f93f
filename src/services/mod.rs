//! Services module - domain logic between the transport seam and the state layer.
//!
//! The services are **framework-agnostic** and have no dependencies on
//! whatever presentation layer consumes the state slots, which keeps them
//! testable against a mocked [`CatalogApi`](crate::api::CatalogApi).
//!
//! # Components
//!
//! - [`CatalogRepository`]: Normalizes transport responses into domain
//!   values. Its failure policy is deliberate: list failures collapse to an
//!   empty list and detail failures to absence, so callers only ever deal
//!   in plain values.

pub mod catalog;

pub use catalog::CatalogRepository;
