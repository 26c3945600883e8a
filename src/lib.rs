//! Page-navigation and locale-negotiation core for multi-canvas document
//! viewers.
//!
//! Viewers for paginated digital-document manifests (books, scrolls, image
//! sequences) need two pieces of pure logic that are easy to get subtly
//! wrong: deciding which canvases are displayed together as one page view
//! (single page vs. two-page spread, respecting reading direction and
//! canvas-count parity), and reordering the list of available display
//! locales so a requested locale becomes primary without losing the
//! fallbacks. This crate implements both, with no I/O and no hidden state;
//! the hosting session supplies the per-session facts on every call.
//!
//! Manifest acquisition, rendering, and session bootstrapping live outside
//! this crate. The companion `canvas-nav-provider` crate layers a stateful
//! session provider and typed configuration on top of this core.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(
    not(test),
    deny(
        clippy::disallowed_methods,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::panic_in_result_fn,
        clippy::todo,
        clippy::unimplemented
    )
)]

extern crate alloc;

pub mod error;
pub mod locale;
pub mod paging;

pub use error::{LocaleError, PagingError};
pub use locale::LocaleEntry;
pub use paging::{paging_enabled, PageView, Sequence, ViewingDirection};
