//! Name and version predicates applied to property records.

/// Comparison applied by a [`Filter`] between the input text and its pattern.
///
/// The ordering kinds (`Greater`, `GreaterOrEqual`, `Less`, `LessOrEqual`)
/// compare byte-wise lexicographically, never numerically. For dotted version
/// strings this means "10.0.0" sorts *before* "9.0.0". The quirk is load-bearing:
/// the upstream tool has always compared versions this way and the curated rule
/// bank and pinned ceilings were written against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Substring test.
    Contains,
    /// Prefix test.
    StartsWith,
    /// Suffix test.
    EndsWith,
    /// Exact equality.
    Equals,
    /// Input sorts strictly after the pattern.
    Greater,
    /// Input sorts after the pattern or equals it.
    GreaterOrEqual,
    /// Input sorts strictly before the pattern.
    Less,
    /// Input sorts before the pattern or equals it.
    LessOrEqual,
}

/// How a [`Filter`] treats empty or absent input.
///
/// Kept as a named enum rather than a constructor flag so call sites read as
/// intent ("a missing `since` counts as always available") instead of a bare
/// boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyPolicy {
    /// Empty/absent input matches the filter.
    #[default]
    Pass,
    /// Empty/absent input never matches.
    Reject,
}

/// A single predicate over a text value.
///
/// Evaluation is a pure function of `(kind, pattern, empty, input)` with no
/// error paths: every input, including `None`, produces a boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    kind: FilterKind,
    pattern: String,
    empty: EmptyPolicy,
}

impl Filter {
    /// Create a filter with the default [`EmptyPolicy::Pass`].
    pub fn new(pattern: impl Into<String>, kind: FilterKind) -> Self {
        Self {
            kind,
            pattern: pattern.into(),
            empty: EmptyPolicy::Pass,
        }
    }

    /// Create a filter with an explicit empty-input policy.
    pub fn with_empty_policy(
        pattern: impl Into<String>,
        kind: FilterKind,
        empty: EmptyPolicy,
    ) -> Self {
        Self {
            kind,
            pattern: pattern.into(),
            empty,
        }
    }

    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn empty_policy(&self) -> EmptyPolicy {
        self.empty
    }

    /// Whether this filter's condition holds for `text`.
    ///
    /// `None` and `Some("")` are equivalent and resolve through the empty
    /// policy alone; the pattern is not consulted.
    pub fn matches(&self, text: Option<&str>) -> bool {
        let text = match text {
            None | Some("") => return self.empty == EmptyPolicy::Pass,
            Some(t) => t,
        };

        match self.kind {
            FilterKind::Contains => text.contains(&self.pattern),
            FilterKind::StartsWith => text.starts_with(&self.pattern),
            FilterKind::EndsWith => text.ends_with(&self.pattern),
            FilterKind::Equals => text == self.pattern,
            FilterKind::Greater => text > self.pattern.as_str(),
            FilterKind::GreaterOrEqual => text >= self.pattern.as_str(),
            FilterKind::Less => text < self.pattern.as_str(),
            FilterKind::LessOrEqual => text <= self.pattern.as_str(),
        }
    }
}
