//! Pattern parsing for route segments.
//!
//! Pure functions that turn a pattern string like `/browse/:category` into
//! typed segments once, at registration time, so matching never re-parses.

/// One segment of a parsed route pattern.
///
/// # Examples
///
/// ```
/// use termcast_router::route::pattern::{classify_segment, Segment};
///
/// assert!(matches!(classify_segment("browse"), Segment::Static(_)));
/// assert!(matches!(classify_segment(":category"), Segment::Param(_)));
/// assert!(matches!(classify_segment("~:nickname"), Segment::Prefixed { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text that must match exactly.
    Static(String),
    /// Named parameter: `:category` binds the whole path segment.
    Param(String),
    /// Literal prefix glued to a named parameter in one segment:
    /// `~:nickname` requires the literal `~` immediately followed by the
    /// bound value.
    Prefixed { prefix: String, name: String },
}

impl Segment {
    /// Name of the parameter this segment binds, if any.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Static(_) => None,
            Segment::Param(name) => Some(name),
            Segment::Prefixed { name, .. } => Some(name),
        }
    }

    /// Attempts to bind this segment against one literal path segment.
    ///
    /// Returns the bound (name, value) for parameter segments, `None` for
    /// a static mismatch, and `Some(None)` for a static match. Prefixed
    /// segments require a non-empty remainder after the prefix.
    pub fn bind<'p>(&self, part: &'p str) -> Option<Option<(&str, &'p str)>> {
        match self {
            Segment::Static(text) => (text.as_str() == part).then_some(None),
            Segment::Param(name) => Some(Some((name, part))),
            Segment::Prefixed { prefix, name } => part
                .strip_prefix(prefix.as_str())
                .filter(|rest| !rest.is_empty())
                .map(|rest| Some((name.as_str(), rest))),
        }
    }
}

/// Classifies a single pattern segment (pure function).
///
/// Rules, evaluated in order:
///
/// 1. Leading `:` — named parameter (`:id`)
/// 2. `:` after a literal prefix — prefixed parameter (`~:nickname`)
/// 3. Anything else — static text
pub fn classify_segment(segment: &str) -> Segment {
    if let Some(name) = segment.strip_prefix(':') {
        return Segment::Param(name.to_string());
    }

    match segment.split_once(':') {
        Some((prefix, name)) if !prefix.is_empty() && !name.is_empty() => Segment::Prefixed {
            prefix: prefix.to_string(),
            name: name.to_string(),
        },
        _ => Segment::Static(segment.to_string()),
    }
}

/// Parses a full pattern into segments (pure function).
///
/// The root pattern `/` yields an empty segment list.
///
/// # Examples
///
/// ```
/// use termcast_router::route::pattern::{parse_pattern, Segment};
///
/// let segments = parse_pattern("/docs/:page");
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[1], Segment::Param("page".to_string()));
///
/// assert!(parse_pattern("/").is_empty());
/// ```
pub fn parse_pattern(pattern: &str) -> Vec<Segment> {
    pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .map(classify_segment)
        .collect()
}
