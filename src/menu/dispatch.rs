use std::collections::HashMap;

use anyhow::Result;

use crate::menu::action::MenuAction;
use crate::menu::item::TitleKey;
use crate::state::AppState;

/// Performs the behavior behind a selected entry. The resolver only labels
/// entries; whoever owns the app wires this up.
pub trait ActionDispatcher {
    fn perform(&self, action: MenuAction, app_state: &AppState) -> Result<()>;
}

pub trait Localizer {
    fn localize(&self, title: &TitleKey) -> String;
}

/// Looks titles up in per-table string maps and falls back to the key, the
/// way the platform does when a translation is missing.
#[derive(Debug, Default, Clone)]
pub struct TableLocalizer {
    tables: HashMap<String, HashMap<String, String>>,
}

impl TableLocalizer {
    pub fn new(tables: HashMap<String, HashMap<String, String>>) -> Self {
        Self { tables }
    }
}

impl Localizer for TableLocalizer {
    fn localize(&self, title: &TitleKey) -> String {
        self.tables
            .get(title.table)
            .and_then(|table| table.get(title.key))
            .cloned()
            .unwrap_or_else(|| title.key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::catalog;

    #[test]
    fn falls_back_to_key() {
        let localizer = TableLocalizer::default();
        assert_eq!(localizer.localize(&catalog::SETTINGS_TITLE), "Settings");
    }

    #[test]
    fn uses_matching_table_only() {
        let mut menu = HashMap::new();
        menu.insert("Settings".to_string(), "Einstellungen".to_string());
        let mut other = HashMap::new();
        other.insert("History".to_string(), "Verlauf".to_string());
        let mut tables = HashMap::new();
        tables.insert(catalog::STRING_TABLE.to_string(), menu);
        tables.insert("Toolbar".to_string(), other);

        let localizer = TableLocalizer::new(tables);
        assert_eq!(localizer.localize(&catalog::SETTINGS_TITLE), "Einstellungen");
        assert_eq!(localizer.localize(&catalog::HISTORY_TITLE), "History");
    }
}
