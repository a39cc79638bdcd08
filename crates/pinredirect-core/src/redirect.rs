//! Resolution and redirect entry points.
//!
//! [`resolve_target`] is pure. [`redirect_to`] feeds its result to a
//! [`Navigator`], which is the only place a side effect happens.

use crate::mapping::{self, MappingTable};
use crate::navigate::Navigator;

/// Rewrites `url` with the first matching entry of `table`, or returns it
/// unchanged when nothing matches.
///
/// Total over all strings: empty and non-URL inputs are opaque and pass
/// through untouched.
pub fn resolve_target(url: &str, table: &MappingTable) -> String {
    match table.find(url) {
        Some((index, m)) => {
            tracing::debug!(index, prefix = %m.match_prefix, "pinned link");
            // find() already checked the prefix
            m.apply(url).unwrap_or_else(|| url.to_string())
        }
        None => {
            tracing::debug!("no mapping matched, passing through");
            url.to_string()
        }
    }
}

/// Resolves `url` against the built-in table and navigates there.
pub fn redirect_to<N: Navigator + ?Sized>(url: &str, navigator: &mut N) {
    Redirector::new(mapping::builtin()).redirect_to(url, navigator);
}

/// Redirect against a caller-chosen table (e.g. one loaded from config).
#[derive(Debug, Clone, Copy)]
pub struct Redirector<'t> {
    table: &'t MappingTable,
}

impl<'t> Redirector<'t> {
    pub fn new(table: &'t MappingTable) -> Self {
        Self { table }
    }

    pub fn resolve(&self, url: &str) -> String {
        resolve_target(url, self.table)
    }

    pub fn redirect_to<N: Navigator + ?Sized>(&self, url: &str, navigator: &mut N) {
        let destination = self.resolve(url);
        tracing::info!(from = url, to = %destination, "redirect");
        navigator.navigate(&destination);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::PrefixMapping;
    use crate::navigate::RecordingNavigator;

    const MASTER: &str = "https://github.com/leanprover-community/mathlib/blob/master/";
    const PINNED: &str =
        "https://github.com/leanprover-community/mathlib/blob/f694c7dead66f5d4c80f446c796a5aad14707f0e/";

    #[test]
    fn resolves_src_link() {
        let url = format!("{MASTER}src/Foo.lean");
        assert_eq!(
            resolve_target(&url, mapping::builtin()),
            format!("{PINNED}src/Foo.lean")
        );
    }

    #[test]
    fn resolves_archive_link() {
        let url = format!("{MASTER}archive/Bar.lean");
        assert_eq!(
            resolve_target(&url, mapping::builtin()),
            format!("{PINNED}archive/Bar.lean")
        );
    }

    #[test]
    fn resolves_counterexamples_link() {
        let url = format!("{MASTER}counterexamples/Baz.lean#L10");
        assert_eq!(
            resolve_target(&url, mapping::builtin()),
            format!("{PINNED}counterexamples/Baz.lean#L10")
        );
    }

    #[test]
    fn unrelated_url_passes_through() {
        assert_eq!(
            resolve_target("https://example.com/unrelated", mapping::builtin()),
            "https://example.com/unrelated"
        );
    }

    #[test]
    fn other_mathlib_paths_pass_through() {
        let docs = format!("{MASTER}docs/README.md");
        assert_eq!(resolve_target(&docs, mapping::builtin()), docs);
        // prefix without trailing slash does not match
        let bare = format!("{MASTER}src");
        assert_eq!(resolve_target(&bare, mapping::builtin()), bare);
    }

    #[test]
    fn empty_and_garbage_inputs_pass_through() {
        assert_eq!(resolve_target("", mapping::builtin()), "");
        assert_eq!(resolve_target("not a url \u{1F600}", mapping::builtin()), "not a url \u{1F600}");
    }

    #[test]
    fn first_matching_entry_wins() {
        let table = MappingTable::new(vec![
            PrefixMapping::new("https://h/", "first/"),
            PrefixMapping::new("https://h/deeper/", "second/"),
        ]);
        assert_eq!(resolve_target("https://h/deeper/x", &table), "first/deeper/x");
    }

    #[test]
    fn only_leading_occurrence_is_replaced() {
        let table = MappingTable::new(vec![PrefixMapping::new("ab", "X")]);
        assert_eq!(resolve_target("abab", &table), "Xab");
    }

    #[test]
    fn single_pass_only() {
        let table = MappingTable::new(vec![PrefixMapping::new("a", "aa")]);
        assert_eq!(resolve_target("a", &table), "aa");
        assert_eq!(resolve_target("aa", &table), "aaa");
    }

    #[test]
    fn redirect_to_navigates_once_with_resolved_url() {
        let mut nav = RecordingNavigator::default();
        redirect_to(&format!("{MASTER}src/Foo.lean"), &mut nav);
        assert_eq!(nav.destinations(), [format!("{PINNED}src/Foo.lean")]);
    }

    #[test]
    fn redirect_to_unmatched_navigates_to_input() {
        let mut nav = RecordingNavigator::default();
        redirect_to("https://example.com/unrelated", &mut nav);
        assert_eq!(nav.destinations(), ["https://example.com/unrelated"]);
    }

    #[test]
    fn redirector_uses_its_own_table() {
        let table = MappingTable::new(vec![PrefixMapping::new("https://old/", "https://new/")]);
        let redirector = Redirector::new(&table);
        let mut nav = RecordingNavigator::default();
        redirector.redirect_to("https://old/page", &mut nav);
        redirector.redirect_to(&format!("{MASTER}src/Foo.lean"), &mut nav);
        assert_eq!(
            nav.destinations(),
            ["https://new/page".to_string(), format!("{MASTER}src/Foo.lean")]
        );
    }
}
