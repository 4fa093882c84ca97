//! Offset/limit paging for list operations

/// Page size used when the caller does not ask for one
pub const DEFAULT_LIMIT: u64 = 10;

/// Largest page a caller may request unless configured otherwise
pub const DEFAULT_MAX_LIMIT: u64 = 100;

/// Largest offset or limit the database driver can bind (a signed 64-bit integer)
pub const MAX_BOUND: u64 = i64::MAX as u64;

/// A resolved window over an id-ordered listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: u64,
    pub limit: u64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Turns caller-supplied paging hints into a bounded [`Page`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePolicy {
    pub default_limit: u64,
    pub max_limit: u64,
}

impl Default for PagePolicy {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: DEFAULT_MAX_LIMIT,
        }
    }
}

impl PagePolicy {
    pub fn with_max_limit(max_limit: u64) -> Self {
        Self {
            max_limit: max_limit.min(MAX_BOUND),
            ..Self::default()
        }
    }

    /// Resolve optional offset/limit, clamping the limit to `max_limit`.
    ///
    /// Both values are held to [`MAX_BOUND`]; an offset that large is past
    /// any stored row and yields an empty page.
    pub fn page(&self, offset: Option<u64>, limit: Option<u64>) -> Page {
        Page {
            offset: offset.unwrap_or(0).min(MAX_BOUND),
            limit: limit
                .unwrap_or(self.default_limit)
                .min(self.max_limit)
                .min(MAX_BOUND),
        }
    }
}
