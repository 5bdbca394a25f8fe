//! Catalog search: a stable substring filter plus the classification the
//! search overlay renders from.

use crate::catalog::Product;

/// Terms offered before the visitor has typed anything.
pub const TRENDING: [&str; 4] = ["W180 King", "Salted Cashews", "Gift Packs", "Bulk 50kg"];

/// Filter the catalog by case-insensitive substring match on name or grade.
///
/// Preserves catalog order; no ranking, no fuzzy matching.
pub fn search<'a>(catalog: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.grade.to_lowercase().contains(&needle)
        })
        .collect()
}

/// What the search overlay should render for the current query.
///
/// An empty query is not a search: it shows trending suggestions, never the
/// full catalog. A non-empty query with zero hits is its own state.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchView<'a> {
    Suggestions,
    NoMatches,
    Matches(Vec<&'a Product>),
}

pub fn classify<'a>(catalog: &'a [Product], query: &str) -> SearchView<'a> {
    if query.is_empty() {
        return SearchView::Suggestions;
    }
    let matches = search(catalog, query);
    if matches.is_empty() {
        SearchView::NoMatches
    } else {
        SearchView::Matches(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn matches_are_an_ordered_subsequence() {
        let all = catalog::catalog();
        let hits = search(all, "w");
        let mut cursor = 0;
        for hit in &hits {
            let pos = all[cursor..]
                .iter()
                .position(|p| p.id == hit.id)
                .expect("hit must appear after the previous one");
            cursor += pos + 1;
        }
    }

    #[test]
    fn match_is_case_insensitive_on_name_or_grade() {
        let all = catalog::catalog();
        let by_grade = search(all, "lwp");
        assert_eq!(by_grade.len(), 1);
        assert_eq!(by_grade[0].grade, "LWP");

        let by_name = search(all, "ROASTED");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Roasted & Salted Gold");

        for hit in search(all, "w1") {
            let needle = "w1";
            assert!(
                hit.name.to_lowercase().contains(needle)
                    || hit.grade.to_lowercase().contains(needle)
            );
        }
    }

    #[test]
    fn empty_query_is_suggestions_not_full_catalog() {
        let all = catalog::catalog();
        assert_eq!(classify(all, ""), SearchView::Suggestions);
        // Distinct from a query with zero hits.
        assert_eq!(classify(all, "almond"), SearchView::NoMatches);
    }

    #[test]
    fn non_empty_query_with_hits_is_matches() {
        let all = catalog::catalog();
        match classify(all, "W240") {
            SearchView::Matches(hits) => {
                assert_eq!(hits.len(), 1);
                assert_eq!(hits[0].grade, "W240");
            }
            other => panic!("expected matches, got {:?}", other),
        }
    }
}
