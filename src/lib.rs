pub mod error;
pub mod guard;
pub mod launch;
pub mod layout;
pub mod path;
pub mod platform;
pub mod styling;

pub use error::LaunchError;
pub use launch::{Launcher, Outcome};
pub use layout::Layout;
pub use platform::Platform;
