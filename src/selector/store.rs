use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use super::catalogue::LanguageEntry;
use super::languages;

/// The single key the selector owns in the durable store.
pub const STORAGE_KEY: &str = "language-selector.last-selected";

/// Minimal durable key/value storage the selector persists its last pick to.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String);
}

/// In-memory store. Clones share the same map, so two selectors built from
/// clones of one store see each other's writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.borrow_mut().insert(key.to_string(), value);
    }
}

#[derive(Default, Serialize, Deserialize)]
struct StoreFile {
    entries: BTreeMap<String, String>,
}

/// Durable store backed by a confy document in the platform config dir.
/// The document is read once; clones share it and write through.
#[derive(Clone)]
pub struct ConfyStore {
    app_name: Rc<str>,
    file: Rc<RefCell<StoreFile>>,
}

impl ConfyStore {
    const CONFIG_NAME: &'static str = "local-storage";

    pub fn new(app_name: &str) -> Self {
        let file = match confy::load::<StoreFile>(app_name, Self::CONFIG_NAME) {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!("Failed to load selector store, starting empty: {}", err);
                StoreFile::default()
            }
        };

        Self {
            app_name: app_name.into(),
            file: Rc::new(RefCell::new(file)),
        }
    }
}

impl KeyValueStore for ConfyStore {
    fn get(&self, key: &str) -> Option<String> {
        self.file.borrow().entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        let mut file = self.file.borrow_mut();
        file.entries.insert(key.to_string(), value);

        match confy::store(&self.app_name, Self::CONFIG_NAME, &*file) {
            Ok(_) => tracing::info!("Selector store written"),
            Err(err) => tracing::error!("Failed to write selector store: {}", err),
        }
    }
}

// Stored as a JSON triple: [code, local name, international name]
#[derive(Debug, Serialize, Deserialize)]
struct StoredSelection(String, String, String);

pub fn encode_selection(entry: &LanguageEntry) -> String {
    let stored = StoredSelection(
        entry.code.to_string(),
        entry.local_name.to_string(),
        entry.international_name.to_string(),
    );
    // A tuple of strings always serializes
    serde_json::to_string(&stored).unwrap_or_default()
}

/// Decodes a stored selection back to its catalogue entry. Anything that is
/// not a triple naming a known code counts as absent.
pub fn decode_selection(raw: &str) -> Option<&'static LanguageEntry> {
    let StoredSelection(code, _, _) = match serde_json::from_str(raw) {
        Ok(stored) => stored,
        Err(err) => {
            tracing::warn!("Ignoring malformed stored selection: {}", err);
            return None;
        }
    };

    let entry = languages::find(&code.to_lowercase());
    if entry.is_none() {
        tracing::warn!("Ignoring stored selection with unknown code '{}'", code);
    }
    entry
}

pub fn load_selection(store: &dyn KeyValueStore) -> Option<&'static LanguageEntry> {
    store
        .get(STORAGE_KEY)
        .and_then(|raw| decode_selection(&raw))
}

pub fn save_selection(store: &mut dyn KeyValueStore, entry: &LanguageEntry) {
    store.set(STORAGE_KEY, encode_selection(entry));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_stored_as_triple() {
        let fr = languages::find("fr").unwrap();

        assert_eq!(encode_selection(fr), r#"["fr","Français","French"]"#);
    }

    #[test]
    fn round_trips_through_store() {
        let mut store = MemoryStore::new();
        let de = languages::find("de").unwrap();

        save_selection(&mut store, de);

        assert_eq!(load_selection(&store), Some(de));
    }

    #[test]
    fn clones_share_contents() {
        let store = MemoryStore::new();
        let mut writer = store.clone();
        writer.set("k", "v".to_string());

        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn confy_store_clones_share_the_loaded_document() {
        let store = ConfyStore {
            app_name: "language-selector-test".into(),
            file: Rc::default(),
        };
        let fr = languages::find("fr").unwrap();
        store
            .file
            .borrow_mut()
            .entries
            .insert(STORAGE_KEY.to_string(), encode_selection(fr));

        let clone = store.clone();

        assert_eq!(load_selection(&clone), Some(fr));
        assert!(Rc::ptr_eq(&store.file, &clone.file));
    }

    #[test]
    fn malformed_values_are_absent() {
        assert_eq!(decode_selection("not json"), None);
        assert_eq!(decode_selection(r#"{"code":"fr"}"#), None);
        assert_eq!(decode_selection(r#"["fr","Français"]"#), None);
        assert_eq!(decode_selection(r#"["zz","Nope","Nope"]"#), None);
    }

    #[test]
    fn missing_key_is_absent() {
        let store = MemoryStore::new();

        assert_eq!(load_selection(&store), None);
    }
}
