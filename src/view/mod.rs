//! Derived view - the filtered, sorted projection of records shown to the user.
//!
//! [`derive_view`] is a pure function of `(records, search_term, direction)`.
//! It borrows the records and returns references in display order; the source
//! list is never reordered or mutated.

mod collation;
mod table;

use std::cmp::Ordering;

use crate::student::Student;

pub use collation::{compare_names, fold_for_search, CollationKey};
pub use table::{render_table, EMPTY_TABLE_MESSAGE};

/// Name sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orient an ascending comparison. `Equal` stays `Equal`.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Button label for the current direction.
    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Ascending => "A → Z",
            SortDirection::Descending => "Z → A",
        }
    }
}

/// Records whose name contains `search_term`, ignoring case and diacritics.
///
/// A blank term passes every record through in order.
pub fn filter_records<'a>(records: &'a [Student], search_term: &str) -> Vec<&'a Student> {
    let keyword = fold_for_search(search_term.trim());
    if keyword.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|s| fold_for_search(&s.name).contains(&keyword))
        .collect()
}

/// Stable sort by collated name; ties keep their incoming order in both directions.
pub fn sort_records(rows: &mut Vec<&Student>, direction: SortDirection) {
    let mut keyed: Vec<(CollationKey, &Student)> = rows
        .drain(..)
        .map(|s| (CollationKey::new(&s.name), s))
        .collect();
    keyed.sort_by(|a, b| direction.apply(a.0.cmp(&b.0)));
    rows.extend(keyed.into_iter().map(|(_, s)| s));
}

/// Filter then sort: what the table renders.
pub fn derive_view<'a>(
    records: &'a [Student],
    search_term: &str,
    direction: SortDirection,
) -> Vec<&'a Student> {
    let mut rows = filter_records(records, search_term);
    sort_records(&mut rows, direction);
    rows
}
