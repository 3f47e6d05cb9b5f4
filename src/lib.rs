#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod params;
pub mod resolve;
pub mod table;

pub use config::ResolverConfig;
pub use params::{ParamValue, Params};
pub use resolve::{ResolveError, Resolver, resolve};
pub use table::RouteTable;
