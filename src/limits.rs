//! Resource limits applied while decoding.
//!
//! The decoder recurses once per nested container, so the depth limit is
//! what keeps hostile input from exhausting the call stack.

/// Nesting depth accepted by [`Limits::default`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Input size accepted by [`Limits::default`] (10 MiB).
pub const MAX_JSON_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Bounds enforced by [`decode_with_limits`](crate::decode_with_limits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of nested arrays/objects.
    pub max_depth: usize,
    /// Maximum input length in bytes.
    pub max_input_size: usize,
    /// Whether bytes after the first value are ignored (`true`) or rejected.
    pub allow_trailing: bool,
}

impl Limits {
    /// The default limits: depth 512, 10 MiB, trailing bytes ignored.
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_input_size: MAX_JSON_SIZE_BYTES,
            allow_trailing: true,
        }
    }

    /// Like [`Limits::new`], but anything other than whitespace after the
    /// value is an error.
    pub const fn strict() -> Self {
        Self {
            allow_trailing: false,
            ..Self::new()
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn with_max_input_size(mut self, max_input_size: usize) -> Self {
        self.max_input_size = max_input_size;
        self
    }

    pub const fn with_allow_trailing(mut self, allow_trailing: bool) -> Self {
        self.allow_trailing = allow_trailing;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_depth, 512);
        assert_eq!(limits.max_input_size, 10 * 1024 * 1024);
        assert!(limits.allow_trailing);
    }

    #[test]
    fn test_strict_limits() {
        let limits = Limits::strict();
        assert!(!limits.allow_trailing);
        assert_eq!(limits.max_depth, Limits::new().max_depth);
    }

    #[test]
    fn test_builders() {
        let limits = Limits::new()
            .with_max_depth(4)
            .with_max_input_size(64)
            .with_allow_trailing(false);
        assert_eq!(limits.max_depth, 4);
        assert_eq!(limits.max_input_size, 64);
        assert_eq!(limits, Limits::strict().with_max_depth(4).with_max_input_size(64));
    }
}
