pub mod selector;

pub use selector::catalogue::{Catalogue, LanguageEntry};
pub use selector::config::{ActivationMode, GeoCoverage, Icons, SelectorConfig, Theme};
pub use selector::error::SelectorError;
pub use selector::store::{ConfyStore, KeyValueStore, MemoryStore, STORAGE_KEY};
pub use selector::visibility::InputCapabilities;
pub use selector::{LanguageSelector, Origin, Selection, SelectorBuilder, Trigger};
