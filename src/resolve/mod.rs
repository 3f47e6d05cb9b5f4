//! Route resolution: placeholder substitution and query-string overflow.
//!
//! The responsibilities are split into focused submodules so that whole-token
//! placeholder matching, query-string encoding, and the resolution pipeline
//! itself can be tested independently. The same code serves page navigation
//! and backend API URL construction.

mod placeholders;
mod query;
mod resolver;

pub use placeholders::{placeholder_names, substitute};
pub use query::encode_query;
pub use resolver::{ResolveError, Resolver, resolve};
