pub use super::error::LaunchError;
pub use super::process::{CLASSPATH_SEPARATOR, JavaProcess};
pub use super::profile::Profile;
pub use super::runtime::{JavaRuntime, Runtime};
pub use super::split::split_args;
