//! Query string construction.
//!
//! One style per source: arXiv expects the topic terms OR-joined, every other
//! source takes them as a single space-joined phrase. Both styles are
//! URL-encoded. Pure string construction, no error conditions.

/// Terms joined with `" OR "`, URL-encoded (arXiv style).
pub fn or_query(terms: &[String]) -> String {
    urlencoding::encode(&terms.join(" OR ")).into_owned()
}

/// Terms joined with single spaces, URL-encoded.
pub fn joined_query(terms: &[String]) -> String {
    urlencoding::encode(&terms.join(" ")).into_owned()
}
