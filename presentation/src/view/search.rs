//! Fuzzy search over list rows

use super::model::ListRow;
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

fn haystack(row: &ListRow) -> String {
    let mut parts = vec![row.title.as_str()];
    if let Some(subtitle) = &row.subtitle {
        parts.push(subtitle);
    }
    parts.extend(row.keywords.iter().map(String::as_str));
    parts.join(" ")
}

/// Keep the rows matching `query`, best match first.
///
/// A blank query keeps every row in its original order. Rows with equal
/// scores keep their relative order.
pub fn filter_rows(rows: Vec<ListRow>, query: &str) -> Vec<ListRow> {
    let query = query.trim();
    if query.is_empty() {
        return rows;
    }

    let matcher = SkimMatcherV2::default().ignore_case();
    let mut scored: Vec<(i64, ListRow)> = rows
        .into_iter()
        .filter_map(|row| {
            matcher
                .fuzzy_match(&haystack(&row), query)
                .map(|score| (score, row))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, row)| row).collect()
}
