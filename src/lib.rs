//! Resolves which entries, shortcuts and colors a browser's contextual
//! action menu shows for a given screen.
//!
//! - [`state`]: the input snapshot ([`state::AppState`]).
//! - [`menu`]: actions, item templates and [`menu::MenuConfiguration`].
//! - [`theme`]: colors, icon and font by browsing mode.
//! - [`config`] and [`logging`]: ambient setup for the `menuctl` binary.

pub mod config;
pub mod logging;
pub mod menu;
pub mod state;
pub mod theme;

pub use menu::{Capabilities, MenuAction, MenuConfiguration};
pub use state::AppState;

/// Resolves the menu for `app_state`. Equal inputs give equal outputs.
pub fn resolve(app_state: &AppState, capabilities: Capabilities) -> MenuConfiguration {
    MenuConfiguration::new(app_state, capabilities)
}
