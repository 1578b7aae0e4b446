//! Business layer on top of the `models` crate.
//! - Defines the narrow `ProductStore` interface the HTTP layer talks to.
//! - Keeps paged-listing arithmetic out of the handlers.
//! - Provides clear error types mapped to HTTP status codes upstream.

pub mod errors;
pub mod pagination;
pub mod product;
#[cfg(test)]
pub mod test_support;
