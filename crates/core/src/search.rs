//! Free-text matching for project search.

/// Case-insensitive substring match of `term` against any of `fields`.
///
/// An empty term matches everything. A non-empty term never matches when
/// every field is absent.
///
/// # Examples
///
/// ```
/// use anken_core::search::matches_term;
/// assert!(matches_term("web", [Some("Webアプリ開発"), None]));
/// assert!(!matches_term("a", [None, None]));
/// assert!(matches_term("", [None, None]));
/// ```
pub fn matches_term<'a>(term: &str, fields: impl IntoIterator<Item = Option<&'a str>>) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}
