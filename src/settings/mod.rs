//! Configuration loading for the demo binary.
//!
//! Files and environment variables are merged by the `config` crate into a
//! [`raw`] mirror, command-line overrides are applied on top, and the result
//! is validated into a [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
