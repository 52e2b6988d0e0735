use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Per-tab flags for the page currently on screen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabState {
    #[serde(default)]
    pub is_bookmarked: bool,
    #[serde(default)]
    pub desktop_site: bool,
    #[serde(default)]
    pub is_private: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomePanelState {
    #[serde(default)]
    pub is_private: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabTrayState {
    #[serde(default)]
    pub is_private: bool,
}

/// Snapshot of the screen the menu is opened from.
///
/// `Loading` is a context the menu has nothing to offer for; it resolves to
/// an empty menu like any other screen without a row in the item table.
/// Screens this crate does not know yet deserialize as `Other` and resolve
/// the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "kebab-case")]
pub enum AppState {
    Tab(TabState),
    #[serde(rename = "home", alias = "home_panels", alias = "home-panels")]
    HomePanels(HomePanelState),
    #[serde(alias = "tab_tray")]
    TabTray(TabTrayState),
    Loading,
    #[serde(other)]
    Other,
}

pub const SCREEN_NAMES: [&str; 4] = ["tab", "home", "tab-tray", "loading"];

impl AppState {
    pub fn is_private(&self) -> bool {
        match self {
            AppState::Tab(tab) => tab.is_private,
            AppState::HomePanels(home) => home.is_private,
            AppState::TabTray(tray) => tray.is_private,
            AppState::Loading | AppState::Other => false,
        }
    }

    /// Short name used in logs and on the command line.
    pub fn screen_name(&self) -> &'static str {
        match self {
            AppState::Tab(_) => "tab",
            AppState::HomePanels(_) => "home",
            AppState::TabTray(_) => "tab-tray",
            AppState::Loading => "loading",
            AppState::Other => "other",
        }
    }

    /// Builds a snapshot from a screen name plus the flags given for it.
    /// Only `tab` looks at the bookmark and desktop-site flags. Unlike JSON
    /// snapshots, a mistyped name here is an error rather than `Other`.
    pub fn from_screen(name: &str, flags: TabState) -> Result<Self> {
        let state = match name.trim().to_ascii_lowercase().as_str() {
            "tab" => AppState::Tab(flags),
            "home" | "home-panels" | "home_panels" => AppState::HomePanels(HomePanelState {
                is_private: flags.is_private,
            }),
            "tab-tray" | "tab_tray" | "tray" => AppState::TabTray(TabTrayState {
                is_private: flags.is_private,
            }),
            "loading" => AppState::Loading,
            other => {
                return Err(anyhow!(
                    "Unknown screen '{other}'. Known screens: {}",
                    SCREEN_NAMES.join(", ")
                ))
            }
        };
        Ok(state)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let state: AppState =
            serde_json::from_str(json).with_context(|| format!("parsing app state {json}"))?;
        Ok(state)
    }
}
