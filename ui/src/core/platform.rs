//! Platform detection and task spawning helpers.

use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }
}

pub fn platform_string() -> String {
    match Platform::current() {
        Platform::Web => "web".to_string(),
        Platform::Desktop => "desktop".to_string(),
    }
}

/// Runs `future` on the UI runtime. Must be called from within a component
/// scope.
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    let _ = dioxus::prelude::spawn(future);
}
