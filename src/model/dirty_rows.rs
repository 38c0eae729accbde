use std::ops::RangeInclusive;

/// Screen rows whose rendered text is stale relative to the buffer.
///
/// An edit dirties either one row or a contiguous run from the edit point to
/// the old or new end of the document, so this is one inclusive range, never
/// materialized. Iteration is ascending and lazy: a renderer that stops at the
/// bottom of the screen pays for visible rows only. Rows at or past the
/// buffer's line count are allowed: they are rows a merge vacated and render
/// as blanks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirtyRows {
    span: Option<RangeInclusive<usize>>,
}

impl DirtyRows {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exactly one row
    pub fn single(row: usize) -> Self {
        Self::span(row..=row)
    }

    /// Every row in `range`; a reversed range is empty
    pub fn span(range: RangeInclusive<usize>) -> Self {
        Self {
            span: (!range.is_empty()).then_some(range),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.span.clone().into_iter().flatten()
    }
}
