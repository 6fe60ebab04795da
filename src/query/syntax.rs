//! Rendering of expanded terms into boolean-mode query text.

use std::fmt::Debug;

/// Characters with special meaning in boolean-mode query strings.
pub const RESERVED_CHARS: &[char] = &['+', '-', '*', '"', '(', ')', '<', '>', '~', '@'];

/// Renders groups of alternative terms into a boolean-mode query string.
pub trait BooleanQuerySyntax: Send + Sync + Debug {
    /// Render one group of alternative terms. An empty string means the group
    /// has nothing to contribute and is skipped.
    fn group(&self, terms: &[String]) -> String;

    /// Join rendered groups into the final query string.
    fn join(&self, groups: &[String]) -> String {
        groups.join(" ")
    }
}

/// `(+a* +b*)` groups, joined with single spaces.
///
/// Terms are emitted verbatim; reserved characters in the input are not
/// escaped. Wrap it in [`SanitizingSyntax`] for untrusted input.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredPrefixSyntax;

impl BooleanQuerySyntax for RequiredPrefixSyntax {
    fn group(&self, terms: &[String]) -> String {
        if terms.is_empty() {
            return String::new();
        }
        let inner = terms
            .iter()
            .map(|term| format!("+{term}*"))
            .collect::<Vec<_>>()
            .join(" ");
        format!("({inner})")
    }
}

/// Strips reserved characters from every term before delegating.
///
/// Terms that end up empty are dropped, and so are groups left without terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct SanitizingSyntax<S> {
    inner: S,
}

impl<S: BooleanQuerySyntax> SanitizingSyntax<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn sanitize(term: &str) -> String {
        term.chars().filter(|c| !RESERVED_CHARS.contains(c)).collect()
    }
}

impl<S: BooleanQuerySyntax> BooleanQuerySyntax for SanitizingSyntax<S> {
    fn group(&self, terms: &[String]) -> String {
        let mut cleaned: Vec<String> = Vec::with_capacity(terms.len());
        for term in terms {
            let term = Self::sanitize(term);
            if !term.is_empty() && !cleaned.contains(&term) {
                cleaned.push(term);
            }
        }
        self.inner.group(&cleaned)
    }

    fn join(&self, groups: &[String]) -> String {
        self.inner.join(groups)
    }
}
