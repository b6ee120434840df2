/// First post returned when the caller gives no `start`
pub const DEFAULT_START: i64 = 1;

/// Last post returned when the caller gives no `end`
pub const DEFAULT_END: i64 = 100;

/// Inclusive 1-based window over an author's posts
///
/// `start` below 1 is clamped to 1. A window whose `end` lies before its
/// `start` selects nothing and is stored as `end = start - 1`.
///
/// # Example
/// ```
/// use socialnet_api::domain::post::PageRange;
///
/// let range = PageRange::new(3, 4);
/// assert_eq!(range.offset(), 2);
/// assert_eq!(range.limit(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    start: i64,
    end: i64,
}

impl PageRange {
    pub fn new(start: i64, end: i64) -> Self {
        let start = start.max(1);
        Self {
            start,
            end: end.max(start - 1),
        }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    /// Number of posts skipped before the window
    pub fn offset(&self) -> i64 {
        self.start - 1
    }

    /// Maximum number of posts in the window
    pub fn limit(&self) -> i64 {
        self.end.saturating_sub(self.start).saturating_add(1).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.limit() == 0
    }
}

impl Default for PageRange {
    fn default() -> Self {
        Self::new(DEFAULT_START, DEFAULT_END)
    }
}
