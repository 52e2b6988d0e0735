pub mod action;
pub mod catalog;
pub mod dispatch;
pub mod item;
pub mod resolver;

pub use action::MenuAction;
pub use dispatch::{ActionDispatcher, Localizer, TableLocalizer};
pub use item::{Animation, AssetKey, MenuItem, MenuToolbarItem, TitleKey};
pub use resolver::{Capabilities, MenuConfiguration};
