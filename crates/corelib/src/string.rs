//! Fixed-capacity string with a C-compatible layout.

use std::fmt;
use std::str;

/// Buffer capacity in bytes, terminator included. Contents may be at most
/// `MAX_LEN - 1` bytes long.
pub const MAX_LEN: usize = 1024;

/// Inline string with a fixed 1024-byte buffer, always null-terminated at
/// `data[len]`. The `#[repr(C)]` layout (length, then buffer) is the
/// interoperability contract for consumers reading the raw bytes.
///
/// Every mutating operation that would overflow the buffer leaves the value
/// untouched. That is a silent no-op, not an error: callers that care about
/// overflow must compare length/content before and after.
#[repr(C)]
#[derive(Clone)]
pub struct CimString {
    len: usize,
    data: [u8; MAX_LEN],
}

impl CimString {
    /// Empty string of length zero.
    pub const fn new() -> Self {
        Self {
            len: 0,
            data: [0; MAX_LEN],
        }
    }

    /// Byte length of the contents, terminator excluded. For multibyte UTF-8
    /// contents this is not the number of characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Replace the contents. Silent no-op if `s` does not fit.
    pub fn set(&mut self, s: &str) {
        if s.len() > MAX_LEN - 1 {
            return;
        }
        self.data[..s.len()].copy_from_slice(s.as_bytes());
        self.data[s.len()] = 0;
        self.len = s.len();
    }

    /// Append to the contents. Silent no-op if the combined length does not
    /// fit, and on an empty `s`.
    pub fn append(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        if self.len + s.len() >= MAX_LEN {
            return;
        }
        self.data[self.len..self.len + s.len()].copy_from_slice(s.as_bytes());
        self.len += s.len();
        self.data[self.len] = 0;
    }

    /// Reset to the empty string.
    pub fn clear(&mut self) {
        self.len = 0;
        self.data[0] = 0;
    }

    pub fn as_str(&self) -> &str {
        // Contents are only ever copied from `&str`, and overflow rejection
        // is all-or-nothing, so the prefix is always valid UTF-8.
        str::from_utf8(&self.data[..self.len]).expect("contents set from &str")
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Contents plus the terminating null byte, for C-side consumers.
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.data[..self.len + 1]
    }
}

impl Default for CimString {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for CimString {
    /// Yields the empty string if `s` does not fit.
    fn from(s: &str) -> Self {
        let mut out = Self::new();
        out.set(s);
        out
    }
}

/// Exact byte comparison over the `len` prefix; bytes past the terminator
/// never participate.
impl PartialEq for CimString {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.data[..self.len] == other.data[..other.len]
    }
}

impl Eq for CimString {}

impl fmt::Debug for CimString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CimString").field(&self.as_str()).finish()
    }
}

impl fmt::Display for CimString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
