//! Locale list negotiation and its compact wire form.
//!
//! A viewer session carries an ordered list of display locales; the first
//! entry is the active one, the rest are fallbacks. The operations here
//! merge the configured list with a per-session priority, reorder it so a
//! requested locale becomes primary, and convert it to/from the
//! comma-separated string handed to the session restart machinery
//! (`"en-GB:English,cy-GB:Welsh"`).
//!
//! The wire form does not escape `,` or `:`. Names are IETF-style locale
//! tags, which never contain either character, and labels are expected to
//! follow the same constraint.
//!
//! # Usage
//!
//! ```rust
//! use canvas_nav::locale::{self, LocaleEntry};
//!
//! # fn example() -> Result<(), canvas_nav::error::LocaleError> {
//! let list = vec![
//!     LocaleEntry::with_label("en-GB", "English"),
//!     LocaleEntry::with_label("cy-GB", "Welsh"),
//! ];
//! let reordered = locale::promote(&list, "cy-GB")?;
//! assert_eq!(locale::serialize(&reordered), "cy-GB:Welsh,en-GB:English");
//! # Ok(())
//! # }
//! ```

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::LocaleError;

/// One available display locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleEntry {
    /// IETF-style tag, unique within a list (e.g. `en-GB`).
    pub name: String,
    /// Human-readable name shown in locale switchers.
    pub label: Option<String>,
}

impl LocaleEntry {
    /// Entry with no display label.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
        }
    }

    /// Entry with a display label.
    pub fn with_label(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: Some(label.into()),
        }
    }
}

/// Merge the configured locale list with a per-session priority list.
///
/// Priority entries are matched by name against `configured`; matches are
/// emitted first, in priority order, taking the priority entry's label when
/// it supplies one. Priority entries with no configured counterpart are
/// dropped, never fabricated. The remaining configured entries follow in
/// their original order, so the result is a permutation (with label
/// overrides) of `configured`.
///
/// Duplicate names within `configured` are a loader-guaranteed precondition,
/// not checked here.
pub fn merge_with_priority(
    configured: &[LocaleEntry],
    priority: &[LocaleEntry],
) -> Vec<LocaleEntry> {
    let mut result = Vec::with_capacity(configured.len());
    let mut taken = alloc::vec![false; configured.len()];

    for wanted in priority {
        let Some(pos) = configured.iter().position(|l| l.name == wanted.name) else {
            continue;
        };
        if taken[pos] {
            continue;
        }
        taken[pos] = true;
        let mut entry = configured[pos].clone();
        if wanted.label.is_some() {
            entry.label = wanted.label.clone();
        }
        result.push(entry);
    }

    for (pos, entry) in configured.iter().enumerate() {
        if !taken[pos] {
            result.push(entry.clone());
        }
    }

    result
}

/// Reorder `list` so the entry named `requested` comes first.
///
/// The relative order of all other entries is preserved. Returns a new
/// list; the input is never mutated. Absence of `requested` is an error
/// rather than a silent no-op, since the caller asked for that locale
/// explicitly.
pub fn promote(list: &[LocaleEntry], requested: &str) -> Result<Vec<LocaleEntry>, LocaleError> {
    let pos = list
        .iter()
        .position(|l| l.name == requested)
        .ok_or_else(|| LocaleError::NotFound(String::from(requested)))?;

    let mut result = Vec::with_capacity(list.len());
    result.push(list[pos].clone());
    result.extend(
        list.iter()
            .enumerate()
            .filter(|(i, _)| *i != pos)
            .map(|(_, l)| l.clone()),
    );
    Ok(result)
}

/// Serialize a locale list to its wire form.
///
/// Entries are comma-joined as `name` or `name:label`. This string is the
/// persisted representation carried in session-restart parameters and
/// bookmarked URLs; it must stay stable across versions.
pub fn serialize(list: &[LocaleEntry]) -> String {
    let mut out = String::new();
    for (i, entry) in list.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&entry.name);
        if let Some(label) = &entry.label {
            out.push(':');
            out.push_str(label);
        }
    }
    out
}

/// Parse the wire form produced by [`serialize`].
///
/// Splits on `,`, then each piece on the first `:` into name and optional
/// label. An entry with an empty name is malformed (an empty input counts:
/// it reads as one empty segment); callers should fall back to the
/// configured default list instead of crashing.
pub fn parse(s: &str) -> Result<Vec<LocaleEntry>, LocaleError> {
    let mut result = Vec::new();
    for (segment, piece) in s.split(',').enumerate() {
        let (name, label) = match piece.split_once(':') {
            Some((name, label)) => (name, Some(label)),
            None => (piece, None),
        };
        if name.is_empty() {
            return Err(LocaleError::Malformed { segment });
        }
        result.push(LocaleEntry {
            name: String::from(name),
            label: label.map(String::from),
        });
    }
    Ok(result)
}

/// The fallback locale a "switch language" toggle should offer.
///
/// Returns the *last* entry in `list` whose name differs from
/// `current_name`, or `None` when no other locale exists. With more than
/// two locales the lowest-priority alternate wins; hosts rely on this
/// last-match rule.
pub fn alternate_of<'a>(list: &'a [LocaleEntry], current_name: &str) -> Option<&'a LocaleEntry> {
    list.iter().rev().find(|l| l.name != current_name)
}
