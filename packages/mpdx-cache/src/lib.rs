//! # mpdx-cache
//!
//! Normalized GraphQL cache layer for the MPDX donor CRM client: relay-style
//! connections, key-argument discrimination between paginated lists, and the
//! merge policy that folds incoming pages into cached connections.

#![deny(unused_crate_dependencies)]

pub mod cache;
pub mod cli;
pub(crate) mod commands;
pub mod connection;
pub mod policy;
pub mod testing;

pub(self) mod self_prelude {
    pub use indexmap::IndexMap;
    pub use serde::{Deserialize, Serialize};
    pub use std::fmt;
}

pub use cache::*;
pub use connection::*;
pub use policy::*;
