pub mod error;
pub mod prelude;
pub mod process;
pub mod profile;
pub mod quirk;
pub mod runtime;
pub mod split;

pub use prelude::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
