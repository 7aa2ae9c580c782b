pub mod key;
pub mod store;

pub(self) mod self_prelude {
    pub use super::super::self_prelude::*;
    pub use std::str::FromStr;
}

pub use key::*;
pub use store::*;
