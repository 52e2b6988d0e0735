use serde::Serialize;
use tracing::debug;

use crate::menu::catalog;
use crate::menu::item::{AssetKey, MenuItem, MenuToolbarItem};
use crate::state::AppState;
use crate::theme::{self, Color, Font, Theme};

/// Platform features that gate individual entries. Read on every resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub private_browsing: bool,
    pub desktop_toggle: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            private_browsing: true,
            desktop_toggle: true,
        }
    }
}

/// Everything the menu needs to render for one state snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuConfiguration {
    items: Vec<MenuItem>,
    toolbar_items: Option<Vec<MenuToolbarItem>>,
    items_per_row: usize,
    is_private_mode: bool,
}

impl MenuConfiguration {
    pub fn new(app_state: &AppState, capabilities: Capabilities) -> Self {
        let config = Self {
            items: menu_items(app_state, capabilities),
            toolbar_items: menu_toolbar_items(app_state),
            items_per_row: items_per_row(app_state),
            is_private_mode: app_state.is_private(),
        };
        debug!(
            screen = app_state.screen_name(),
            items = config.items.len(),
            toolbar = config.toolbar_items.is_some(),
            private = config.is_private_mode,
            "resolved menu configuration"
        );
        config
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn toolbar_items(&self) -> Option<&[MenuToolbarItem]> {
        self.toolbar_items.as_deref()
    }

    pub fn items_per_row(&self) -> usize {
        self.items_per_row
    }

    pub fn is_private_mode(&self) -> bool {
        self.is_private_mode
    }

    pub fn toolbar_color(&self) -> Color {
        theme::toolbar_color(self.is_private_mode)
    }

    pub fn toolbar_tint_color(&self) -> Color {
        theme::toolbar_tint_color(self.is_private_mode)
    }

    pub fn menu_background_color(&self) -> Color {
        theme::menu_background_color(self.is_private_mode)
    }

    pub fn menu_tint_color(&self) -> Color {
        theme::menu_tint_color(self.is_private_mode)
    }

    pub fn menu_font(&self) -> Font {
        theme::menu_font()
    }

    pub fn menu_icon(&self) -> AssetKey {
        theme::menu_icon(self.is_private_mode)
    }

    pub fn shadow_color(&self) -> Color {
        theme::shadow_color(self.is_private_mode)
    }

    pub fn selected_item_tint_color(&self) -> Color {
        theme::selected_item_tint_color()
    }

    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.is_private_mode)
    }
}

fn items_per_row(app_state: &AppState) -> usize {
    match app_state {
        AppState::TabTray(_) => 4,
        _ => 3,
    }
}

// Pushed in display order.
fn menu_items(app_state: &AppState, capabilities: Capabilities) -> Vec<MenuItem> {
    let mut items = Vec::new();
    match app_state {
        AppState::Tab(tab) => {
            items.push(catalog::FIND_IN_PAGE);
            if capabilities.desktop_toggle {
                items.push(if tab.desktop_site {
                    catalog::REQUEST_MOBILE
                } else {
                    catalog::REQUEST_DESKTOP
                });
            }
            items.push(catalog::SETTINGS);
            items.push(catalog::NEW_TAB);
            if capabilities.private_browsing {
                items.push(catalog::NEW_PRIVATE_TAB);
            }
            items.push(if tab.is_bookmarked {
                catalog::REMOVE_BOOKMARK
            } else {
                catalog::ADD_BOOKMARK
            });
        }
        AppState::HomePanels(_) => {
            items.push(catalog::NEW_TAB);
            if capabilities.private_browsing {
                items.push(catalog::NEW_PRIVATE_TAB);
            }
            items.push(catalog::SETTINGS);
        }
        AppState::TabTray(_) => {
            items.push(catalog::NEW_TAB);
            if capabilities.private_browsing {
                items.push(catalog::NEW_PRIVATE_TAB);
            }
            items.push(catalog::CLOSE_ALL_TABS);
            items.push(catalog::SETTINGS);
        }
        _ => {}
    }
    items
}

fn menu_toolbar_items(app_state: &AppState) -> Option<Vec<MenuToolbarItem>> {
    match app_state {
        AppState::Tab(_) | AppState::TabTray(_) => Some(catalog::TOOLBAR.to_vec()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::action::MenuAction;
    use crate::state::{HomePanelState, TabState, TabTrayState};

    fn actions(config: &MenuConfiguration) -> Vec<MenuAction> {
        config.items().iter().map(|item| item.action).collect()
    }

    #[test]
    fn tab_without_capabilities_drops_gated_items() {
        let caps = Capabilities {
            private_browsing: false,
            desktop_toggle: false,
        };
        let config = MenuConfiguration::new(&AppState::Tab(TabState::default()), caps);
        assert_eq!(
            actions(&config),
            vec![
                MenuAction::FindInPage,
                MenuAction::OpenSettings,
                MenuAction::OpenNewNormalTab,
                MenuAction::ToggleBookmarkStatus,
            ]
        );
    }

    #[test]
    fn private_browsing_gate_applies_to_every_screen() {
        let caps = Capabilities {
            private_browsing: false,
            ..Default::default()
        };
        for state in [
            AppState::Tab(TabState::default()),
            AppState::HomePanels(HomePanelState::default()),
            AppState::TabTray(TabTrayState::default()),
        ] {
            let config = MenuConfiguration::new(&state, caps);
            assert!(!config.items().contains(&catalog::NEW_PRIVATE_TAB));
            assert!(config.items().contains(&catalog::NEW_TAB));
        }
    }

    #[test]
    fn desktop_toggle_follows_site_mode() {
        let desktop = MenuConfiguration::new(
            &AppState::Tab(TabState {
                desktop_site: true,
                ..Default::default()
            }),
            Capabilities::default(),
        );
        assert_eq!(desktop.items()[1], catalog::REQUEST_MOBILE);
        assert!(!desktop.items().contains(&catalog::REQUEST_DESKTOP));

        let mobile = MenuConfiguration::new(&AppState::Tab(TabState::default()), Capabilities::default());
        assert_eq!(mobile.items()[1], catalog::REQUEST_DESKTOP);
        assert!(!mobile.items().contains(&catalog::REQUEST_MOBILE));
    }

    #[test]
    fn capability_change_shows_up_on_next_resolution() {
        let state = AppState::HomePanels(HomePanelState::default());
        let before = MenuConfiguration::new(
            &state,
            Capabilities {
                private_browsing: false,
                ..Default::default()
            },
        );
        let after = MenuConfiguration::new(&state, Capabilities::default());
        assert_eq!(before.items().len() + 1, after.items().len());
    }

    #[test]
    fn theme_accessors_match_bundled_theme() {
        let config = MenuConfiguration::new(
            &AppState::TabTray(TabTrayState { is_private: true }),
            Capabilities::default(),
        );
        let theme = config.theme();
        assert_eq!(config.toolbar_color(), theme.toolbar_color);
        assert_eq!(config.toolbar_tint_color(), theme.toolbar_tint_color);
        assert_eq!(config.menu_background_color(), theme.menu_background_color);
        assert_eq!(config.menu_tint_color(), theme.menu_tint_color);
        assert_eq!(config.menu_icon(), theme.menu_icon);
        assert_eq!(config.shadow_color(), theme.shadow_color);
        assert_eq!(config.menu_font(), theme.menu_font);
        assert_eq!(config.selected_item_tint_color(), theme.selected_item_tint_color);
    }
}
