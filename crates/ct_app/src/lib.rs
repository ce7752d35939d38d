pub mod actions;
#[cfg(feature = "egui-desktop")]
pub mod app;
pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod script;
pub mod state;

#[cfg(feature = "egui-desktop")]
pub use app::launch;
pub use error::{AppError, ConfigError};
