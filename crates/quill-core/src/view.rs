//! View projection for the dashboard and detail screens.

use chrono::Datelike;

use crate::models::JournalEntry;
use crate::search::filter_entries;
use crate::util::parse_entry_date;

/// Number of entries shown before "view all" is toggled on
pub const RECENT_ENTRY_LIMIT: usize = 4;

/// Tags shown on a dashboard card before the rest collapse into "+N more"
pub const CARD_TAG_LIMIT: usize = 2;

/// The visible slice of `filtered`: the first four, or everything with `show_all`
#[must_use]
pub fn project(filtered: &[JournalEntry], show_all: bool) -> &[JournalEntry] {
    if show_all {
        filtered
    } else {
        &filtered[..filtered.len().min(RECENT_ENTRY_LIMIT)]
    }
}

/// Everything the dashboard needs for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub entries: Vec<JournalEntry>,
    pub total_matches: usize,
    pub show_all: bool,
}

impl DashboardView {
    /// Filter `entries` by `query`, then project the result
    #[must_use]
    pub fn build(entries: &[JournalEntry], query: &str, show_all: bool) -> Self {
        let filtered = filter_entries(entries, query);
        Self {
            entries: project(&filtered, show_all).to_vec(),
            total_matches: filtered.len(),
            show_all,
        }
    }

    /// Matches left out of the visible slice
    pub fn hidden_count(&self) -> usize {
        self.total_matches - self.entries.len()
    }

    /// Label of the show-all toggle in its current state
    pub const fn toggle_label(&self) -> &'static str {
        if self.show_all {
            "Hide entries"
        } else {
            "View all entries"
        }
    }
}

/// Card-sized tag line: the first two tags, then `+N more`
///
/// ```
/// use quill_core::view::tag_summary;
///
/// let tags = ["a", "b", "c", "d"].map(String::from);
/// assert_eq!(tag_summary(&tags), "a, b +2 more");
/// ```
#[must_use]
pub fn tag_summary(tags: &[String]) -> String {
    let shown = tags
        .iter()
        .take(CARD_TAG_LIMIT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    if tags.len() > CARD_TAG_LIMIT {
        format!("{shown} +{} more", tags.len() - CARD_TAG_LIMIT)
    } else {
        shown
    }
}

/// Long form of an entry date, e.g. `January 5, 2024`
///
/// Dates that do not parse are returned unchanged.
#[must_use]
pub fn format_long_date(date: &str) -> String {
    parse_entry_date(date).map_or_else(
        || date.to_string(),
        |parsed| {
            format!(
                "{} {}, {}",
                parsed.format("%B"),
                parsed.day(),
                parsed.year()
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryId;
    use pretty_assertions::assert_eq;

    fn entries(count: usize) -> Vec<JournalEntry> {
        (0..count)
            .map(|index| JournalEntry {
                id: EntryId::from_timestamp_millis(i64::try_from(index).unwrap()),
                title: format!("Entry {index}"),
                date: "2024-01-01".to_string(),
                content: if index % 2 == 0 { "even" } else { "odd" }.to_string(),
                tags: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn project_limits_to_four_unless_showing_all() {
        let filtered = entries(6);
        assert_eq!(project(&filtered, false), &filtered[..4]);
        assert_eq!(project(&filtered, true), filtered.as_slice());
    }

    #[test]
    fn project_handles_short_lists() {
        let filtered = entries(2);
        assert_eq!(project(&filtered, false).len(), 2);
        assert!(project(&[], false).is_empty());
    }

    #[test]
    fn dashboard_counts_hidden_matches() {
        let all = entries(7);

        let collapsed = DashboardView::build(&all, "", false);
        assert_eq!(collapsed.entries.len(), 4);
        assert_eq!(collapsed.hidden_count(), 3);
        assert_eq!(collapsed.toggle_label(), "View all entries");

        let expanded = DashboardView::build(&all, "", true);
        assert_eq!(expanded.entries.len(), 7);
        assert_eq!(expanded.hidden_count(), 0);
        assert_eq!(expanded.toggle_label(), "Hide entries");
    }

    #[test]
    fn dashboard_filters_before_projecting() {
        let all = entries(10);
        let view = DashboardView::build(&all, "EVEN", false);

        assert_eq!(view.total_matches, 5);
        let titles = view
            .entries
            .iter()
            .map(|entry| entry.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["Entry 0", "Entry 2", "Entry 4", "Entry 6"]);
    }

    #[test]
    fn tag_summary_collapses_extra_tags() {
        let tags = |values: &[&str]| values.iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq!(tag_summary(&[]), "");
        assert_eq!(tag_summary(&tags(&["solo"])), "solo");
        assert_eq!(tag_summary(&tags(&["a", "b"])), "a, b");
        assert_eq!(tag_summary(&tags(&["a", "b", "c"])), "a, b +1 more");
    }

    #[test]
    fn format_long_date_spells_out_month() {
        assert_eq!(format_long_date("2024-01-05"), "January 5, 2024");
        assert_eq!(format_long_date("1999-12-31"), "December 31, 1999");
        assert_eq!(format_long_date("someday"), "someday");
    }
}
