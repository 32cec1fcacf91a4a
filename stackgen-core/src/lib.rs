//! Stackgen core library — domain types, parameter loading, name derivation.
//!
//! Public API surface:
//! - [`types`] — newtypes, policies, [`types::JobConfig`]
//! - [`error`] — [`ParamsError`]
//! - [`params`] — parameter directory loading
//! - [`naming`] — stack-name derivation

pub mod error;
pub mod naming;
pub mod params;
pub mod types;

pub use error::ParamsError;
pub use params::ParamFile;
pub use types::{CollisionPolicy, JobConfig, NamingPolicy, StackName};
