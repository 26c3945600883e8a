//! Session provider layer for `canvas-nav`.
//!
//! Sits between a hosting viewer and the pure navigation/locale cores:
//! typed configuration ([`ViewerConfig`]), the capability traits the host
//! implements ([`ManifestAccessor`], [`SessionController`]), and the
//! per-session state record ([`ViewerSession`]) that threads position and
//! the memoized locale list through every request.

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

mod config;
mod manifest;
mod session;

pub use canvas_nav::{LocaleEntry, LocaleError, PageView, PagingError, Sequence, ViewingDirection};
pub use config::{LocaleSpec, LocalisationConfig, ViewerConfig, ViewerOptions};
pub use manifest::{CanvasRecord, ManifestAccessor, StaticManifest};
pub use session::{ProviderError, SessionController, SessionParams, ViewerSession};
