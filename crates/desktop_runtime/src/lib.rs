pub mod apps;
pub mod boot;
pub mod components;
pub mod config;
mod effect_executor;
pub mod host;
pub mod icons;
pub mod model;
pub mod placement;
pub mod reducer;
pub mod runtime_context;
pub mod session;
pub mod shell;
pub mod stacking;
pub mod theme;
pub mod timers;
pub mod window_manager;

pub use components::{DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::DesktopConfig;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use session::{DesktopMode, SessionState};
