use serde::Serialize;

use crate::menu::action::MenuAction;

/// Name of an image in the host's asset catalog.
pub type AssetKey = &'static str;

/// Localization lookup key: the source string, the table it lives in and the
/// note left for translators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TitleKey {
    pub key: &'static str,
    pub table: &'static str,
    #[serde(skip)]
    pub comment: &'static str,
}

/// Animation the renderer plays when an item is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Animation {
    JumpAndSpin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub title: TitleKey,
    pub action: MenuAction,
    pub icon: AssetKey,
    pub private_mode_icon: AssetKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_icon: Option<AssetKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
}

impl MenuItem {
    pub const fn new(
        title: TitleKey,
        action: MenuAction,
        icon: AssetKey,
        private_mode_icon: AssetKey,
    ) -> Self {
        Self {
            title,
            action,
            icon,
            private_mode_icon,
            selected_icon: None,
            animation: None,
        }
    }

    pub const fn selected(mut self, icon: AssetKey, animation: Animation) -> Self {
        self.selected_icon = Some(icon);
        self.animation = Some(animation);
        self
    }

    /// Icon to draw for the given browsing mode.
    pub fn icon_for(&self, is_private_mode: bool) -> AssetKey {
        if is_private_mode {
            self.private_mode_icon
        } else {
            self.icon
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuToolbarItem {
    pub title: TitleKey,
    pub action: MenuAction,
    pub icon: AssetKey,
}

impl MenuToolbarItem {
    pub const fn new(title: TitleKey, action: MenuAction, icon: AssetKey) -> Self {
        Self {
            title,
            action,
            icon,
        }
    }
}
