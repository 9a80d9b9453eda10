use super::catalogue::{Catalogue, LanguageEntry};
use super::config::GeoCoverage;

/// Entries whose local or international name contains `search`, ignoring
/// case, in catalogue order. An empty search matches everything.
pub fn filter(catalogue: &Catalogue, search: &str) -> Vec<&'static LanguageEntry> {
    let needle = search.to_lowercase();
    catalogue
        .entries()
        .iter()
        .copied()
        .filter(|entry| {
            entry.local_name.to_lowercase().contains(&needle)
                || entry.international_name.to_lowercase().contains(&needle)
        })
        .collect()
}

/// What the list area shows: some matches, or the not-found placeholder.
/// There is no empty-list state.
#[derive(Debug, Clone, PartialEq)]
pub enum Candidates {
    Matches(Vec<&'static LanguageEntry>),
    NotFound,
}

impl Candidates {
    pub fn search(catalogue: &Catalogue, search: &str) -> Self {
        let matches = filter(catalogue, search);
        if matches.is_empty() {
            Candidates::NotFound
        } else {
            Candidates::Matches(matches)
        }
    }
}

/// A rendered line of the list area.
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    Entry {
        entry: &'static LanguageEntry,
        label: String,
    },
    NotFound(String),
}

pub fn format_label(entry: &LanguageEntry, coverage: GeoCoverage, reverse_names: bool) -> String {
    match coverage {
        GeoCoverage::Local => entry.local_name.to_string(),
        GeoCoverage::International => entry.international_name.to_string(),
        GeoCoverage::Both if reverse_names => {
            format!("{} ({})", entry.international_name, entry.local_name)
        }
        GeoCoverage::Both => format!("{} ({})", entry.local_name, entry.international_name),
    }
}

pub fn rows(
    candidates: Candidates,
    coverage: GeoCoverage,
    reverse_names: bool,
    not_found_label: &str,
) -> Vec<Row> {
    match candidates {
        Candidates::Matches(entries) => entries
            .into_iter()
            .map(|entry| Row::Entry {
                entry,
                label: format_label(entry, coverage, reverse_names),
            })
            .collect(),
        Candidates::NotFound => vec![Row::NotFound(not_found_label.to_string())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalogue {
        Catalogue::load(&["en", "fr", "de", "es"], false)
    }

    fn codes(entries: &[&'static LanguageEntry]) -> Vec<&'static str> {
        entries.iter().map(|entry| entry.code).collect()
    }

    #[test]
    fn empty_search_returns_whole_catalogue() {
        let catalogue = sample();

        assert_eq!(filter(&catalogue, "").len(), catalogue.len());
    }

    #[test]
    fn matches_international_name_case_insensitively() {
        let catalogue = Catalogue::load(&["en", "fr"], false);

        assert_eq!(codes(&filter(&catalogue, "fren")), vec!["fr"]);
        assert_eq!(codes(&filter(&catalogue, "FREN")), vec!["fr"]);
    }

    #[test]
    fn matches_local_name() {
        let catalogue = sample();

        assert_eq!(codes(&filter(&catalogue, "deutsch")), vec!["de"]);
        assert_eq!(codes(&filter(&catalogue, "ESPAÑ")), vec!["es"]);
    }

    #[test]
    fn keeps_catalogue_order() {
        let catalogue = sample();

        let matched = codes(&filter(&catalogue, "n"));
        assert_eq!(matched, vec!["en", "fr", "de", "es"]);

        let matched = codes(&filter(&catalogue, "sh"));
        assert_eq!(matched, vec!["en", "es"]);
    }

    #[test]
    fn every_match_contains_the_search() {
        let catalogue = Catalogue::all();
        for search in ["a", "ch", "Ind", "ая", "x"] {
            let needle = search.to_lowercase();
            for entry in filter(&catalogue, search) {
                assert!(
                    entry.local_name.to_lowercase().contains(&needle)
                        || entry.international_name.to_lowercase().contains(&needle)
                );
            }
        }
    }

    #[test]
    fn no_match_becomes_not_found_row() {
        let catalogue = sample();

        assert_eq!(Candidates::search(&catalogue, "klingon"), Candidates::NotFound);

        let rendered = rows(
            Candidates::search(&catalogue, "klingon"),
            GeoCoverage::Both,
            false,
            "Language not found",
        );
        assert_eq!(rendered, vec![Row::NotFound("Language not found".to_string())]);
    }

    #[test]
    fn label_formats() {
        let catalogue = sample();
        let fr = catalogue.find("fr").unwrap();

        assert_eq!(format_label(fr, GeoCoverage::Local, false), "Français");
        assert_eq!(format_label(fr, GeoCoverage::International, true), "French");
        assert_eq!(format_label(fr, GeoCoverage::Both, false), "Français (French)");
        assert_eq!(format_label(fr, GeoCoverage::Both, true), "French (Français)");
    }
}
