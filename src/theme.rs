use std::fmt;

use serde::{Serialize, Serializer};

use crate::menu::item::AssetKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Shade of gray; `white` is the brightness in 0..=255.
    pub const fn gray(white: u8) -> Self {
        Self::rgb(white, white, white)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 0xFF {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Font {
    pub family: &'static str,
    pub size: f32,
}

pub const MENU_TOOLBAR_BACKGROUND_NORMAL: Color = Color::gray(0xF1);
pub const MENU_TOOLBAR_BACKGROUND_PRIVATE: Color = Color::gray(0x35);
pub const MENU_TOOLBAR_TINT_NORMAL: Color = Color::gray(0x73);
pub const MENU_TOOLBAR_TINT_PRIVATE: Color = Color::gray(0xFF);
pub const MENU_BACKGROUND_NORMAL: Color = Color::gray(0xDF);
pub const MENU_BACKGROUND_PRIVATE: Color = Color::gray(0x3B);
pub const MENU_SELECTED_ITEM_TINT: Color = Color::rgb(0x4D, 0x9E, 0xFF);

pub const SHADOW_DARK_GRAY: Color = Color::gray(0x55);
pub const SHADOW_LIGHT_GRAY: Color = Color::gray(0xAA);

pub const MENU_FONT: Font = Font {
    family: "system",
    size: 11.0,
};

pub const MENU_ICON_NORMAL: AssetKey = "bottomNav-menu";
pub const MENU_ICON_PRIVATE: AssetKey = "bottomNav-menu-pbm";

pub fn toolbar_color(is_private_mode: bool) -> Color {
    if is_private_mode {
        MENU_TOOLBAR_BACKGROUND_PRIVATE
    } else {
        MENU_TOOLBAR_BACKGROUND_NORMAL
    }
}

pub fn toolbar_tint_color(is_private_mode: bool) -> Color {
    if is_private_mode {
        MENU_TOOLBAR_TINT_PRIVATE
    } else {
        MENU_TOOLBAR_TINT_NORMAL
    }
}

pub fn menu_background_color(is_private_mode: bool) -> Color {
    if is_private_mode {
        MENU_BACKGROUND_PRIVATE
    } else {
        MENU_BACKGROUND_NORMAL
    }
}

/// Both branches read from the private palette: normal mode tints with the
/// private menu background. Kept as shipped until someone confirms the intent.
pub fn menu_tint_color(is_private_mode: bool) -> Color {
    if is_private_mode {
        MENU_TOOLBAR_TINT_PRIVATE
    } else {
        MENU_BACKGROUND_PRIVATE
    }
}

pub fn menu_icon(is_private_mode: bool) -> AssetKey {
    if is_private_mode {
        MENU_ICON_PRIVATE
    } else {
        MENU_ICON_NORMAL
    }
}

pub fn shadow_color(is_private_mode: bool) -> Color {
    if is_private_mode {
        SHADOW_DARK_GRAY
    } else {
        SHADOW_LIGHT_GRAY
    }
}

pub fn selected_item_tint_color() -> Color {
    MENU_SELECTED_ITEM_TINT
}

pub fn menu_font() -> Font {
    MENU_FONT
}

/// Every styling value for one browsing mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Theme {
    pub toolbar_color: Color,
    pub toolbar_tint_color: Color,
    pub menu_background_color: Color,
    pub menu_tint_color: Color,
    pub menu_font: Font,
    pub menu_icon: AssetKey,
    pub shadow_color: Color,
    pub selected_item_tint_color: Color,
}

impl Theme {
    pub fn for_mode(is_private_mode: bool) -> Self {
        Self {
            toolbar_color: toolbar_color(is_private_mode),
            toolbar_tint_color: toolbar_tint_color(is_private_mode),
            menu_background_color: menu_background_color(is_private_mode),
            menu_tint_color: menu_tint_color(is_private_mode),
            menu_font: menu_font(),
            menu_icon: menu_icon(is_private_mode),
            shadow_color: shadow_color(is_private_mode),
            selected_item_tint_color: selected_item_tint_color(),
        }
    }
}
