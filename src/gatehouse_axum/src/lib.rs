//! Axum integration for the gatehouse authentication library.
//!
//! Each route module pairs an extractor-driven handler with a typed error
//! that knows its HTTP mapping. Handlers parse domain values at the edge and
//! delegate to the framework-agnostic use cases in `gatehouse_application`;
//! store and provider internals never leak into response bodies.

pub mod routes;
