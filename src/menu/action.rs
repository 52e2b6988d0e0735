use std::{fmt, str::FromStr};

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

pub const CMD_OPEN_NEW_NORMAL_TAB: u16 = 1000;
pub const CMD_OPEN_NEW_PRIVATE_TAB: u16 = 1001;
pub const CMD_FIND_IN_PAGE: u16 = 1002;
pub const CMD_TOGGLE_BROWSING_MODE: u16 = 1003;
pub const CMD_TOGGLE_BOOKMARK_STATUS: u16 = 1004;
pub const CMD_OPEN_SETTINGS: u16 = 1005;
pub const CMD_CLOSE_ALL_TABS: u16 = 1006;
pub const CMD_OPEN_TOP_SITES: u16 = 2000;
pub const CMD_OPEN_BOOKMARKS: u16 = 2001;
pub const CMD_OPEN_HISTORY: u16 = 2002;
pub const CMD_OPEN_READING_LIST: u16 = 2003;

/// User intent behind a menu entry. Dispatch is by identity only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuAction {
    OpenNewNormalTab,
    OpenNewPrivateTab,
    FindInPage,
    ToggleBrowsingMode,
    ToggleBookmarkStatus,
    OpenSettings,
    CloseAllTabs,
    OpenTopSites,
    OpenBookmarks,
    OpenHistory,
    OpenReadingList,
}

impl MenuAction {
    pub const ALL: [MenuAction; 11] = [
        MenuAction::OpenNewNormalTab,
        MenuAction::OpenNewPrivateTab,
        MenuAction::FindInPage,
        MenuAction::ToggleBrowsingMode,
        MenuAction::ToggleBookmarkStatus,
        MenuAction::OpenSettings,
        MenuAction::CloseAllTabs,
        MenuAction::OpenTopSites,
        MenuAction::OpenBookmarks,
        MenuAction::OpenHistory,
        MenuAction::OpenReadingList,
    ];

    pub fn id(self) -> u16 {
        match self {
            MenuAction::OpenNewNormalTab => CMD_OPEN_NEW_NORMAL_TAB,
            MenuAction::OpenNewPrivateTab => CMD_OPEN_NEW_PRIVATE_TAB,
            MenuAction::FindInPage => CMD_FIND_IN_PAGE,
            MenuAction::ToggleBrowsingMode => CMD_TOGGLE_BROWSING_MODE,
            MenuAction::ToggleBookmarkStatus => CMD_TOGGLE_BOOKMARK_STATUS,
            MenuAction::OpenSettings => CMD_OPEN_SETTINGS,
            MenuAction::CloseAllTabs => CMD_CLOSE_ALL_TABS,
            MenuAction::OpenTopSites => CMD_OPEN_TOP_SITES,
            MenuAction::OpenBookmarks => CMD_OPEN_BOOKMARKS,
            MenuAction::OpenHistory => CMD_OPEN_HISTORY,
            MenuAction::OpenReadingList => CMD_OPEN_READING_LIST,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MenuAction::OpenNewNormalTab => "open-new-normal-tab",
            MenuAction::OpenNewPrivateTab => "open-new-private-tab",
            MenuAction::FindInPage => "find-in-page",
            MenuAction::ToggleBrowsingMode => "toggle-browsing-mode",
            MenuAction::ToggleBookmarkStatus => "toggle-bookmark-status",
            MenuAction::OpenSettings => "open-settings",
            MenuAction::CloseAllTabs => "close-all-tabs",
            MenuAction::OpenTopSites => "open-top-sites",
            MenuAction::OpenBookmarks => "open-bookmarks",
            MenuAction::OpenHistory => "open-history",
            MenuAction::OpenReadingList => "open-reading-list",
        }
    }
}

pub fn decode(cmd_id: u16) -> Option<MenuAction> {
    MenuAction::ALL.into_iter().find(|action| action.id() == cmd_id)
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for MenuAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(id) = s.parse::<u16>() {
            return decode(id).ok_or_else(|| anyhow!("No menu action with id {id}"));
        }
        MenuAction::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| anyhow!("Unknown menu action '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_unique_and_decode_back() {
        let ids = MenuAction::ALL.iter().map(|a| a.id()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), MenuAction::ALL.len());
        for action in MenuAction::ALL {
            assert_eq!(decode(action.id()), Some(action));
        }
        assert_eq!(decode(0), None);
    }

    #[test]
    fn parses_names_and_ids() {
        assert_eq!(
            "find-in-page".parse::<MenuAction>().unwrap(),
            MenuAction::FindInPage
        );
        assert_eq!(
            "2003".parse::<MenuAction>().unwrap(),
            MenuAction::OpenReadingList
        );
        assert!("reload".parse::<MenuAction>().is_err());
        assert!("9999".parse::<MenuAction>().is_err());
    }

    #[test]
    fn serde_name_matches_display() {
        for action in MenuAction::ALL {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{action}\""));
        }
    }
}
