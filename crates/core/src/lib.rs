pub mod client;
pub mod error;
pub mod exec;
pub mod logging;
pub mod model;
pub mod resource;
pub mod tree;

pub use error::{RefscopeError, Result};
