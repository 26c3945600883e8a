//! Spread computation for paged canvas sequences.
//!
//! Decides which canvases are displayed together at one navigation position
//! (single page vs. two-page spread) and which canvas anchors the previous
//! or next page view. Everything here is a pure function of the supplied
//! [`Sequence`] facts and the current index; nothing is cached across
//! navigation requests.
//!
//! # Usage
//!
//! ```rust
//! use canvas_nav::paging::{Sequence, ViewingDirection};
//!
//! # fn example() -> Result<(), canvas_nav::error::PagingError> {
//! let seq = Sequence::new(10, ViewingDirection::LeftToRight, true);
//! assert_eq!(seq.page_view(1)?.as_slice(), &[1, 2]);
//! assert_eq!(seq.next_anchor(1)?, Some(3));
//! # Ok(())
//! # }
//! ```

extern crate alloc;

use smallvec::{smallvec, SmallVec};

use crate::error::PagingError;

/// Reading order declared by the manifest.
///
/// Only [`ViewingDirection::RightToLeft`] affects the visual order of paired
/// canvases; the vertical directions page like left-to-right documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewingDirection {
    #[default]
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

impl ViewingDirection {
    /// Parse the manifest's hyphenated string form.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "left-to-right" => Some(Self::LeftToRight),
            "right-to-left" => Some(Self::RightToLeft),
            "top-to-bottom" => Some(Self::TopToBottom),
            "bottom-to-top" => Some(Self::BottomToTop),
            _ => None,
        }
    }

    /// Whether paired canvases place the higher-numbered canvas on the left.
    pub fn is_right_to_left(self) -> bool {
        matches!(self, Self::RightToLeft)
    }
}

/// Canvas indices displayed together at one navigation position.
///
/// Ordered by visual left-to-right placement (already direction-corrected),
/// holding one or two contiguous indices. Never allocates for the two-up
/// case.
pub type PageView = SmallVec<[usize; 2]>;

/// Whether two-page spreads are available at all for a sequence.
///
/// The manifest must declare paged behavior and the sequence must hold more
/// than one canvas; otherwise every view degenerates to a single canvas.
pub fn paging_enabled(total_canvases: usize, manifest_paging_hint: bool) -> bool {
    manifest_paging_hint && total_canvases > 1
}

/// Read-only facts about one canvas sequence.
///
/// Built once per session from manifest-supplied values and passed to every
/// navigation request. Boundary checks go through the predicates here so
/// "is first" and "is last" cannot drift apart between callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sequence {
    total_canvases: usize,
    direction: ViewingDirection,
    paging: bool,
}

impl Sequence {
    /// Build sequence facts.
    ///
    /// `manifest_paging_hint` is the manifest's declared paged behavior; it
    /// only takes effect when the sequence holds more than one canvas, per
    /// [`paging_enabled`].
    pub fn new(
        total_canvases: usize,
        direction: ViewingDirection,
        manifest_paging_hint: bool,
    ) -> Self {
        Self {
            total_canvases,
            direction,
            paging: paging_enabled(total_canvases, manifest_paging_hint),
        }
    }

    /// Canvas count of the sequence.
    pub fn total_canvases(&self) -> usize {
        self.total_canvases
    }

    /// Declared reading order.
    pub fn direction(&self) -> ViewingDirection {
        self.direction
    }

    /// Whether two-page spreads are in effect.
    pub fn is_paged(&self) -> bool {
        self.paging
    }

    /// First canvas index.
    pub fn first_index(&self) -> usize {
        0
    }

    /// Last canvas index.
    pub fn last_index(&self) -> usize {
        self.total_canvases.saturating_sub(1)
    }

    /// Whether `index` is the opening canvas.
    pub fn is_first(&self, index: usize) -> bool {
        index == self.first_index()
    }

    /// Whether `index` is the closing canvas.
    pub fn is_last(&self, index: usize) -> bool {
        self.total_canvases > 0 && index == self.last_index()
    }

    /// Whether the sequence holds an even number of canvases.
    pub fn is_total_even(&self) -> bool {
        self.total_canvases % 2 == 0
    }

    /// Whether `index` addresses a canvas in this sequence.
    pub fn contains(&self, index: usize) -> bool {
        index < self.total_canvases
    }

    fn check(&self, index: usize) -> Result<(), PagingError> {
        if self.contains(index) {
            Ok(())
        } else {
            Err(PagingError::IndexOutOfRange {
                index,
                total: self.total_canvases,
            })
        }
    }

    /// Candidate view in ascending index order, before direction correction.
    ///
    /// Index 0 is the unpaired cover; pairing odd indices forward and even
    /// indices backward yields the conventional spread pattern, and an
    /// even-total closing canvas stays single. Existing manifests' page
    /// numbering depends on these exact offsets.
    fn ascending_view(&self, index: usize) -> PageView {
        if !self.paging {
            return smallvec![index];
        }
        if self.is_first(index) || (self.is_last(index) && self.is_total_even()) {
            smallvec![index]
        } else if index % 2 == 1 {
            smallvec![index, index + 1]
        } else {
            smallvec![index - 1, index]
        }
    }

    /// Canvases displayed together at `index`, in visual order.
    ///
    /// Right-to-left sequences reverse the pair so the higher-numbered
    /// canvas sits on the left.
    pub fn page_view(&self, index: usize) -> Result<PageView, PagingError> {
        self.check(index)?;
        let mut view = self.ascending_view(index);
        if self.direction.is_right_to_left() {
            view.reverse();
        }
        Ok(view)
    }

    /// Anchor canvas of the page view preceding the one containing `index`.
    ///
    /// `None` means the view containing `index` is already the first.
    /// Direction never changes the anchor: it affects visual placement only,
    /// not sequence order.
    pub fn previous_anchor(&self, index: usize) -> Result<Option<usize>, PagingError> {
        self.check(index)?;
        let first = if self.paging {
            self.ascending_view(index)[0]
        } else {
            index
        };
        Ok(first.checked_sub(1))
    }

    /// Anchor canvas of the page view following the one containing `index`.
    ///
    /// `None` means end of document.
    pub fn next_anchor(&self, index: usize) -> Result<Option<usize>, PagingError> {
        self.check(index)?;
        let last = if self.paging {
            let view = self.ascending_view(index);
            view[view.len() - 1]
        } else {
            index
        };
        let next = last + 1;
        Ok((next < self.total_canvases).then_some(next))
    }
}
