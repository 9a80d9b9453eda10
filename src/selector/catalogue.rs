use itertools::{Either, Itertools};
use serde::Serialize;

use super::languages;

/// One selectable language. Entries live in the static table and are never
/// mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LanguageEntry {
    pub code: &'static str,
    pub local_name: &'static str,
    pub international_name: &'static str,
}

/// The languages one selector instance offers, in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogue {
    entries: Vec<&'static LanguageEntry>,
    unresolved: Vec<String>,
}

impl Catalogue {
    pub fn all() -> Self {
        Self {
            entries: languages::ALL.iter().collect(),
            unresolved: vec![],
        }
    }

    /// Resolves a caller-supplied list of codes. An empty list means every
    /// known language. Codes are lowercased, sorted first when `sort` is set,
    /// and codes that don't resolve are skipped rather than reported as errors.
    pub fn load<S: AsRef<str>>(options: &[S], sort: bool) -> Self {
        if options.is_empty() {
            return Self::all();
        }

        let mut codes: Vec<String> = options
            .iter()
            .map(|code| code.as_ref().to_lowercase())
            .collect();
        if sort {
            codes.sort();
        }

        let (entries, unresolved): (Vec<_>, Vec<_>) =
            codes
                .into_iter()
                .partition_map(|code| match languages::find(&code) {
                    Some(entry) => Either::Left(entry),
                    None => Either::Right(code),
                });

        for code in &unresolved {
            tracing::warn!("Unknown language code '{}' left out of the catalogue", code);
        }

        Self {
            entries,
            unresolved,
        }
    }

    pub fn entries(&self) -> &[&'static LanguageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Codes from the option list that matched no known language.
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    pub fn find(&self, code: &str) -> Option<&'static LanguageEntry> {
        let code = code.to_lowercase();
        self.entries.iter().copied().find(|entry| entry.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(catalogue: &Catalogue) -> Vec<&'static str> {
        catalogue.entries().iter().map(|entry| entry.code).collect()
    }

    #[test]
    fn empty_options_yield_everything() {
        let catalogue = Catalogue::load::<&str>(&[], true);

        assert_eq!(catalogue.len(), languages::ALL.len());
        assert_eq!(catalogue.entries()[0].code, languages::ALL[0].code);
        assert!(catalogue.unresolved().is_empty());
    }

    #[test]
    fn options_keep_caller_order_without_sort() {
        let catalogue = Catalogue::load(&["fr", "EN", "de"], false);

        assert_eq!(codes(&catalogue), vec!["fr", "en", "de"]);
    }

    #[test]
    fn options_sorted_by_code_before_lookup() {
        let catalogue = Catalogue::load(&["fr", "EN", "de"], true);

        assert_eq!(codes(&catalogue), vec!["de", "en", "fr"]);
    }

    #[test]
    fn unknown_codes_leave_a_gap() {
        let catalogue = Catalogue::load(&["fr", "zz", "en"], false);

        assert_eq!(codes(&catalogue), vec!["fr", "en"]);
        assert_eq!(catalogue.unresolved(), &["zz".to_string()]);
    }

    #[test]
    fn find_is_case_insensitive_and_scoped() {
        let catalogue = Catalogue::load(&["fr"], true);

        assert!(catalogue.find("FR").is_some());
        assert!(catalogue.find("en").is_none());
    }
}
