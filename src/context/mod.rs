//! Application context handed to every subsystem at startup.

use std::sync::Arc;

use crate::settings::{load_settings, Settings};
use crate::Error;

/// Shared, read-only view of the startup settings.
///
/// Cloning is cheap; all clones point at the same [`Settings`] snapshot,
/// which is never mutated after construction.
///
/// ## Example
///
/// ```no_run
/// use chatbot_settings::AppContext;
///
/// let ctx = AppContext::from_env()?;
///
/// let worker_ctx = ctx.clone();
/// std::thread::spawn(move || {
///     let _preview = worker_ctx.settings().link_preview;
/// });
/// # Ok::<(), chatbot_settings::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct AppContext {
    settings: Arc<Settings>,
}

impl AppContext {
    /// Wraps already-loaded settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Loads settings with [`load_settings`] and wraps them.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::new(load_settings()?))
    }

    /// Returns a reference to the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
