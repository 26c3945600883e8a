//! Error kinds for the paging and locale cores.
//!
//! Every kind here is recoverable: callers pick a fallback (previous
//! position, default locale list) rather than aborting the hosting viewer.

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// Paging computation rejected its input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PagingError {
    /// Canvas index outside `[0, total)`.
    ///
    /// Indices are never clamped; a silently corrected index would mask
    /// navigation bugs upstream.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Canvas count of the sequence that rejected it.
        total: usize,
    },
}

impl fmt::Display for PagingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, total } => write!(
                f,
                "canvas index out of range (index={} total={})",
                index, total
            ),
        }
    }
}

impl core::error::Error for PagingError {}

/// Locale list operation failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocaleError {
    /// Requested locale name is not present in the list.
    NotFound(String),
    /// Serialized locale string contains an entry with an empty name.
    Malformed {
        /// Zero-based position of the offending comma-separated segment.
        segment: usize,
    },
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(name) => write!(f, "locale not available: {}", name),
            Self::Malformed { segment } => write!(
                f,
                "malformed locale string: empty name (segment={})",
                segment
            ),
        }
    }
}

impl core::error::Error for LocaleError {}
