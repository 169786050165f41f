pub mod engine;
pub mod five_or_more;
pub mod server;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;

        pub use std::ops::Add;
    }
}

pub mod prelude {
    pub use super::engine::*;
    pub use super::five_or_more::prelude::*;
    pub use super::server::*;
    pub use super::utils::prelude::*;
}
