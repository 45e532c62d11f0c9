//! Achievement entity - a badge members can be awarded

/// An achievement definition
///
/// The avatar path is stored explicitly; nothing is derived from the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub avatar_url: Option<String>,
}
