//! Fixed templates for every entry the menu can show.

use crate::menu::action::MenuAction;
use crate::menu::item::{Animation, MenuItem, MenuToolbarItem, TitleKey};

pub const STRING_TABLE: &str = "Menu";

const fn title(key: &'static str, comment: &'static str) -> TitleKey {
    TitleKey {
        key,
        table: STRING_TABLE,
        comment,
    }
}

pub const NEW_TAB_TITLE: TitleKey = title(
    "New Tab",
    "String describing the action of creating a new tab from the menu",
);
pub const NEW_PRIVATE_TAB_TITLE: TitleKey = title(
    "New Private Tab",
    "String describing the action of creating a new private tab from the menu",
);
pub const ADD_BOOKMARK_TITLE: TitleKey = title(
    "Add Bookmark",
    "String describing the action of adding the current site as a bookmark from the menu",
);
pub const REMOVE_BOOKMARK_TITLE: TitleKey = title(
    "Remove Bookmark",
    "String describing the action of remove the current site as a bookmark from the menu",
);
pub const FIND_IN_PAGE_TITLE: TitleKey = title(
    "Find In Page",
    "String describing the action of opening the toolbar that allows users to search for items within a webpage from the menu",
);
pub const VIEW_DESKTOP_SITE_TITLE: TitleKey = title(
    "View Desktop Site",
    "String describing the action of switching a website from a mobile optimized view to a desktop view from the menu",
);
pub const VIEW_MOBILE_SITE_TITLE: TitleKey = title(
    "View Mobile Site",
    "String describing the action of switching a website from a desktop view to a mobile optimized view from the menu",
);
pub const SETTINGS_TITLE: TitleKey = title(
    "Settings",
    "String describing the action of opening the settings menu from the menu",
);
pub const CLOSE_ALL_TABS_TITLE: TitleKey = title(
    "Close All Tabs",
    "String describing the action of closing all tabs in the tab tray at once from the menu",
);
pub const TOP_SITES_TITLE: TitleKey = title(
    "Top Sites",
    "String describing the action of opening the Top Sites home panel from the menu",
);
pub const BOOKMARKS_TITLE: TitleKey = title(
    "Bookmarks",
    "String describing the action of opening the bookmarks home panel from the menu",
);
pub const HISTORY_TITLE: TitleKey = title(
    "History",
    "String describing the action of opening the history home panel from the menu",
);
pub const READING_LIST_TITLE: TitleKey = title(
    "Reading List",
    "String describing the action of opening the reading list home panel from the menu",
);

pub const NEW_TAB: MenuItem = MenuItem::new(
    NEW_TAB_TITLE,
    MenuAction::OpenNewNormalTab,
    "menu-NewTab",
    "menu-NewTab-pbm",
);

pub const NEW_PRIVATE_TAB: MenuItem = MenuItem::new(
    NEW_PRIVATE_TAB_TITLE,
    MenuAction::OpenNewPrivateTab,
    "menu-NewPrivateTab",
    "menu-NewPrivateTab-pbm",
);

pub const ADD_BOOKMARK: MenuItem = MenuItem::new(
    ADD_BOOKMARK_TITLE,
    MenuAction::ToggleBookmarkStatus,
    "menu-Bookmark",
    "menu-Bookmark-pbm",
)
.selected("menu-RemoveBookmark", Animation::JumpAndSpin);

// No private-mode artwork exists for this one.
pub const REMOVE_BOOKMARK: MenuItem = MenuItem::new(
    REMOVE_BOOKMARK_TITLE,
    MenuAction::ToggleBookmarkStatus,
    "menu-RemoveBookmark",
    "menu-RemoveBookmark",
);

pub const FIND_IN_PAGE: MenuItem = MenuItem::new(
    FIND_IN_PAGE_TITLE,
    MenuAction::FindInPage,
    "menu-FindInPage",
    "menu-FindInPage-pbm",
);

pub const REQUEST_DESKTOP: MenuItem = MenuItem::new(
    VIEW_DESKTOP_SITE_TITLE,
    MenuAction::ToggleBrowsingMode,
    "menu-RequestDesktopSite",
    "menu-RequestDesktopSite-pbm",
);

pub const REQUEST_MOBILE: MenuItem = MenuItem::new(
    VIEW_MOBILE_SITE_TITLE,
    MenuAction::ToggleBrowsingMode,
    "menu-ViewMobile",
    "menu-ViewMobile-pbm",
);

pub const SETTINGS: MenuItem = MenuItem::new(
    SETTINGS_TITLE,
    MenuAction::OpenSettings,
    "menu-Settings",
    "menu-Settings-pbm",
);

pub const CLOSE_ALL_TABS: MenuItem = MenuItem::new(
    CLOSE_ALL_TABS_TITLE,
    MenuAction::CloseAllTabs,
    "menu-CloseTabs",
    "menu-CloseTabs-pbm",
);

pub const TOP_SITES: MenuToolbarItem = MenuToolbarItem::new(
    TOP_SITES_TITLE,
    MenuAction::OpenTopSites,
    "menu-panel-TopSites",
);

pub const BOOKMARKS: MenuToolbarItem = MenuToolbarItem::new(
    BOOKMARKS_TITLE,
    MenuAction::OpenBookmarks,
    "menu-panel-Bookmarks",
);

pub const HISTORY: MenuToolbarItem =
    MenuToolbarItem::new(HISTORY_TITLE, MenuAction::OpenHistory, "menu-panel-History");

pub const READING_LIST: MenuToolbarItem = MenuToolbarItem::new(
    READING_LIST_TITLE,
    MenuAction::OpenReadingList,
    "menu-panel-ReadingList",
);

/// The shortcut row, in display order.
pub const TOOLBAR: [MenuToolbarItem; 4] = [TOP_SITES, BOOKMARKS, HISTORY, READING_LIST];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_add_bookmark_animates() {
        let items = [
            NEW_TAB,
            NEW_PRIVATE_TAB,
            ADD_BOOKMARK,
            REMOVE_BOOKMARK,
            FIND_IN_PAGE,
            REQUEST_DESKTOP,
            REQUEST_MOBILE,
            SETTINGS,
            CLOSE_ALL_TABS,
        ];
        let animated = items
            .iter()
            .filter(|item| item.animation.is_some())
            .collect::<Vec<_>>();
        assert_eq!(animated, vec![&ADD_BOOKMARK]);
        assert_eq!(ADD_BOOKMARK.selected_icon, Some("menu-RemoveBookmark"));
        assert!(items.iter().all(|item| item.title.table == STRING_TABLE));
    }

    #[test]
    fn mutually_exclusive_pairs_share_an_action() {
        assert_eq!(ADD_BOOKMARK.action, REMOVE_BOOKMARK.action);
        assert_eq!(REQUEST_DESKTOP.action, REQUEST_MOBILE.action);
        assert_ne!(ADD_BOOKMARK.title, REMOVE_BOOKMARK.title);
    }
}
