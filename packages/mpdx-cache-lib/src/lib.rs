//! # mpdx-cache-lib
//!
//! `mpdx-cache-lib` is a collection of configuration and runtime utilities
//! used by the `mpdx-cache` crates.

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod defaults;
pub mod utils;
