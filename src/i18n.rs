//! Localized menu text
//!
//! Text is organised as locale → container → key. The menus look everything
//! up in the `engineMenuText` container. English and German tables are built
//! in; `<locale>.json` files in a locale directory add or override entries:
//!
//! ```json
//! { "engineMenuText": { "pausemenu.title": "Pause" } }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Container holding all engine menu strings
pub const ENGINE_MENU_TEXT: &str = "engineMenuText";

/// Locale used when a key is missing from the active one
pub const FALLBACK_LOCALE: &str = "en";

type Container = HashMap<String, String>;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("failed to read locale file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse locale file {file}: {source}")]
    Parse {
        file: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct Localization {
    locale: String,
    tables: BTreeMap<String, HashMap<String, Container>>,
}

impl Localization {
    /// Empty localization; every lookup returns its key
    pub fn new(locale: impl Into<String>) -> Self {
        Localization {
            locale: locale.into(),
            tables: BTreeMap::new(),
        }
    }

    /// English and German engine menu text
    pub fn builtin() -> Self {
        let mut i18n = Self::new(FALLBACK_LOCALE);
        i18n.extend("en", ENGINE_MENU_TEXT, EN_ENGINE_MENU_TEXT);
        i18n.extend("de", ENGINE_MENU_TEXT, DE_ENGINE_MENU_TEXT);
        i18n
    }

    pub fn extend(&mut self, locale: &str, container: &str, entries: &[(&str, &str)]) {
        let table = self
            .tables
            .entry(locale.to_string())
            .or_default()
            .entry(container.to_string())
            .or_default();
        for (key, text) in entries {
            table.insert(key.to_string(), text.to_string());
        }
    }

    /// Loads every `<locale>.json` in `dir`, returning how many were read
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize, I18nError> {
        let mut loaded = 0;

        for entry in fs::read_dir(dir.as_ref())? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let Some(locale) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let json = fs::read_to_string(&path)?;
            let containers: HashMap<String, Container> =
                serde_json::from_str(&json).map_err(|source| I18nError::Parse {
                    file: path.display().to_string(),
                    source,
                })?;

            let tables = self.tables.entry(locale.to_string()).or_default();
            for (name, entries) in containers {
                tables.entry(name).or_default().extend(entries);
            }
            log::debug!("loaded locale {} from {}", locale, path.display());
            loaded += 1;
        }

        Ok(loaded)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Switches the active locale; unknown locales are rejected
    pub fn set_locale(&mut self, locale: &str) -> bool {
        if !self.tables.contains_key(locale) {
            log::warn!("unknown locale {}", locale);
            return false;
        }
        self.locale = locale.to_string();
        true
    }

    /// Locale codes with at least one table, sorted
    pub fn available_locales(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    /// Looks up `key`, falling back to English and then to the key itself
    pub fn text(&self, container: &str, key: &str) -> String {
        self.lookup(&self.locale, container, key)
            .or_else(|| self.lookup(FALLBACK_LOCALE, container, key))
            .unwrap_or(key)
            .to_string()
    }

    /// Name of a language in that language, for the language menu
    pub fn language_name(&self, locale: &str) -> String {
        self.lookup(locale, ENGINE_MENU_TEXT, "language.name")
            .unwrap_or(locale)
            .to_string()
    }

    fn lookup(&self, locale: &str, container: &str, key: &str) -> Option<&str> {
        self.tables
            .get(locale)?
            .get(container)?
            .get(key)
            .map(String::as_str)
    }
}

impl Default for Localization {
    fn default() -> Self {
        Self::builtin()
    }
}

const EN_ENGINE_MENU_TEXT: &[(&str, &str)] = &[
    ("language.name", "English"),
    ("titlemenu.title", "Start menu"),
    ("titlemenu.continue", "Continue at last save point"),
    ("titlemenu.load", "Load game"),
    ("titlemenu.newgame", "Start new game"),
    ("titlemenu.fullscreen", "Fullscreen mode"),
    ("titlemenu.windowed", "Window mode"),
    ("titlemenu.exit", "Exit game (Esc)"),
    ("gameovermenu.title", "Game over"),
    ("gameovermenu.load", "Load game"),
    ("gameovermenu.return", "Return to title"),
    ("gameovermenu.exit", "Exit game"),
    ("gamemenu.title", "Menu"),
    ("gamemenu.resume", "Resume"),
    ("gamemenu.save", "Save game"),
    ("gamemenu.load", "Load game"),
    ("gamemenu.language", "Change language"),
    ("gamemenu.fullscreen", "Fullscreen mode"),
    ("gamemenu.windowed", "Window mode"),
    ("gamemenu.return", "Return to title"),
    ("pausemenu.title", "Paused"),
    ("pausemenu.resume", "Resume game (P)"),
    ("pausemenu.return", "Return to title"),
    ("loadmenu.title", "Load game"),
    ("loadmenu.quickload", "Quick load"),
    ("loadmenu.load", "Load"),
    ("loadmenu.cancel", "Cancel"),
    ("loadmenu.empty", "empty"),
    ("loadmenu.loadfailed", "Loading failed!"),
    ("savemenu.title", "Save game"),
    ("savemenu.quicksave", "Quick save"),
    ("savemenu.save", "Save"),
    ("savemenu.cancel", "Cancel"),
    ("savemenu.empty", "empty"),
    ("savemenu.savefailed", "Saving failed!"),
    ("idlemenu.quicksaved", "Game saved"),
    ("langmenu.title", "Language"),
    ("langmenu.cancel", "Cancel"),
];

const DE_ENGINE_MENU_TEXT: &[(&str, &str)] = &[
    ("language.name", "Deutsch"),
    ("titlemenu.title", "Startmenue"),
    ("titlemenu.continue", "Beim letzten Speicherpunkt fortsetzen"),
    ("titlemenu.load", "Spiel laden"),
    ("titlemenu.newgame", "Neues Spiel starten"),
    ("titlemenu.fullscreen", "Vollbildmodus"),
    ("titlemenu.windowed", "Fenstermodus"),
    ("titlemenu.exit", "Spiel beenden (Esc)"),
    ("gameovermenu.title", "Spiel vorbei"),
    ("gameovermenu.load", "Spiel laden"),
    ("gameovermenu.return", "Zurueck zum Titel"),
    ("gameovermenu.exit", "Spiel beenden"),
    ("gamemenu.title", "Menue"),
    ("gamemenu.resume", "Weiter"),
    ("gamemenu.save", "Spiel speichern"),
    ("gamemenu.load", "Spiel laden"),
    ("gamemenu.language", "Sprache wechseln"),
    ("gamemenu.fullscreen", "Vollbildmodus"),
    ("gamemenu.windowed", "Fenstermodus"),
    ("gamemenu.return", "Zurueck zum Titel"),
    ("pausemenu.title", "Pause"),
    ("pausemenu.resume", "Spiel fortsetzen (P)"),
    ("pausemenu.return", "Zurueck zum Titel"),
    ("loadmenu.title", "Spiel laden"),
    ("loadmenu.quickload", "Schnellladen"),
    ("loadmenu.load", "Laden"),
    ("loadmenu.cancel", "Abbrechen"),
    ("loadmenu.empty", "leer"),
    ("loadmenu.loadfailed", "Laden fehlgeschlagen!"),
    ("savemenu.title", "Spiel speichern"),
    ("savemenu.quicksave", "Schnellspeichern"),
    ("savemenu.save", "Speichern"),
    ("savemenu.cancel", "Abbrechen"),
    ("savemenu.empty", "leer"),
    ("savemenu.savefailed", "Speichern fehlgeschlagen!"),
    ("idlemenu.quicksaved", "Spiel gespeichert"),
    ("langmenu.title", "Sprache"),
    ("langmenu.cancel", "Abbrechen"),
];
