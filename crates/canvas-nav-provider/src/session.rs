//! Stateful session provider over the pure navigation and locale cores.
//!
//! One [`ViewerSession`] exists per manifest-plus-parameters instantiation.
//! Navigation replaces the position; a locale change never mutates the
//! session at all but asks the host's [`SessionController`] to restart with
//! a new serialized locale list, discarding this session wholesale. That
//! restart-not-mutate rule is what keeps paging and locale state free of
//! cross-component races.

use core::fmt;

use log::debug;

use canvas_nav::locale::{self, LocaleEntry};
use canvas_nav::paging::{PageView, Sequence};
use canvas_nav::{LocaleError, PagingError};

use crate::config::ViewerConfig;
use crate::manifest::ManifestAccessor;

/// Per-session request parameters, carried alongside the static
/// configuration when a session starts.
#[derive(Clone, Debug, Default)]
pub struct SessionParams {
    /// Canvas to open on, overriding the manifest's start canvas.
    pub start_canvas: Option<usize>,
    /// Locale priority for this session, most preferred first.
    ///
    /// A restart builds this from the serialized string it was handed; see
    /// [`SessionParams::from_locale_spec`].
    pub locale_priority: Vec<LocaleEntry>,
}

impl SessionParams {
    /// Parameters carrying a locale priority parsed from its wire form.
    ///
    /// A malformed string surfaces as an error so the host can fall back to
    /// the configured default list.
    pub fn from_locale_spec(spec: &str) -> Result<Self, LocaleError> {
        Ok(Self {
            start_canvas: None,
            locale_priority: locale::parse(spec)?,
        })
    }
}

/// Capability to restart the hosting viewer with new session parameters.
///
/// The serialized locale string is the only state carried across a restart;
/// its format is stable so bookmarked and shared URLs keep working.
pub trait SessionController {
    /// Tear down the current session and start a new one whose locale
    /// priority is `serialized`.
    fn restart_with_locales(&mut self, serialized: &str);
}

/// Errors surfaced by the session provider.
#[derive(Debug)]
pub enum ProviderError {
    /// Configuration document failed to parse.
    Config(serde_json::Error),
    /// Manifest has no canvases to display.
    EmptyManifest,
    /// Navigation request addressed a canvas outside the sequence.
    Paging(PagingError),
    /// Locale negotiation failed.
    Locale(LocaleError),
    /// No canvas matches the requested id or label.
    CanvasNotFound(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration parse failed: {}", err),
            Self::EmptyManifest => write!(f, "manifest has no canvases"),
            Self::Paging(err) => write!(f, "paging failed: {}", err),
            Self::Locale(err) => write!(f, "locale negotiation failed: {}", err),
            Self::CanvasNotFound(key) => write!(f, "no canvas matches {:?}", key),
        }
    }
}

impl std::error::Error for ProviderError {}

impl From<serde_json::Error> for ProviderError {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value)
    }
}

impl From<PagingError> for ProviderError {
    fn from(value: PagingError) -> Self {
        Self::Paging(value)
    }
}

impl From<LocaleError> for ProviderError {
    fn from(value: LocaleError) -> Self {
        Self::Locale(value)
    }
}

/// One viewer session: sequence facts, current position, and the memoized
/// locale list.
#[derive(Clone, Debug)]
pub struct ViewerSession {
    sequence: Sequence,
    position: usize,
    locales: Vec<LocaleEntry>,
}

impl ViewerSession {
    /// Start a session against a manifest.
    ///
    /// Facts are validated once here: the manifest must hold at least one
    /// canvas and the start position must address one of them. Two-page
    /// spreads require both the manifest's paged hint and the user's
    /// paging setting. The locale list is merged from configuration and the
    /// session's priority now and never rebuilt afterwards.
    pub fn open<M: ManifestAccessor>(
        manifest: &M,
        config: &ViewerConfig,
        params: &SessionParams,
    ) -> Result<Self, ProviderError> {
        let total = manifest.total_canvases();
        if total == 0 {
            return Err(ProviderError::EmptyManifest);
        }

        let paging_wanted = manifest.paging_supported() && config.options.paging_enabled;
        let sequence = Sequence::new(total, manifest.viewing_direction(), paging_wanted);

        let position = params
            .start_canvas
            .unwrap_or_else(|| manifest.start_canvas_index());
        if !sequence.contains(position) {
            return Err(PagingError::IndexOutOfRange {
                index: position,
                total,
            }
            .into());
        }

        let locales =
            locale::merge_with_priority(&config.locale_entries(), &params.locale_priority);

        debug!(
            "session: open total={} direction={:?} paged={} position={} locales={:?}",
            total,
            sequence.direction(),
            sequence.is_paged(),
            position,
            locale::serialize(&locales)
        );

        Ok(Self {
            sequence,
            position,
            locales,
        })
    }

    /// Sequence facts for this session.
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Current canvas index.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Canvases displayed at the current position, in visual order.
    pub fn page_view(&self) -> Result<PageView, PagingError> {
        self.sequence.page_view(self.position)
    }

    /// Step to the next page view. Returns `false` at the end of the
    /// document, leaving the position unchanged.
    pub fn go_next(&mut self) -> Result<bool, PagingError> {
        match self.sequence.next_anchor(self.position)? {
            Some(next) => {
                debug!("session: next {} -> {}", self.position, next);
                self.position = next;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Step to the previous page view. Returns `false` at the start of the
    /// document, leaving the position unchanged.
    pub fn go_previous(&mut self) -> Result<bool, PagingError> {
        match self.sequence.previous_anchor(self.position)? {
            Some(previous) => {
                debug!("session: previous {} -> {}", self.position, previous);
                self.position = previous;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Jump to a canvas index.
    pub fn go_to(&mut self, index: usize) -> Result<(), PagingError> {
        if !self.sequence.contains(index) {
            return Err(PagingError::IndexOutOfRange {
                index,
                total: self.sequence.total_canvases(),
            });
        }
        debug!("session: jump {} -> {}", self.position, index);
        self.position = index;
        Ok(())
    }

    /// Jump to the canvas with the given manifest id.
    pub fn go_to_canvas_id<M: ManifestAccessor>(
        &mut self,
        manifest: &M,
        id: &str,
    ) -> Result<(), ProviderError> {
        let index = manifest
            .canvas_index_by_id(id)
            .ok_or_else(|| ProviderError::CanvasNotFound(id.to_owned()))?;
        self.go_to(index).map_err(ProviderError::from)
    }

    /// Jump to the canvas with the given label.
    pub fn go_to_canvas_label<M: ManifestAccessor>(
        &mut self,
        manifest: &M,
        label: &str,
    ) -> Result<(), ProviderError> {
        let index = manifest
            .canvas_index_by_label(label)
            .ok_or_else(|| ProviderError::CanvasNotFound(label.to_owned()))?;
        self.go_to(index).map_err(ProviderError::from)
    }

    /// Available locales, primary first.
    pub fn locales(&self) -> &[LocaleEntry] {
        &self.locales
    }

    /// Name of the active display locale, when any locale is configured.
    pub fn active_locale(&self) -> Option<&str> {
        self.locales.first().map(|l| l.name.as_str())
    }

    /// Locale a "switch language" toggle should offer.
    pub fn alternate_locale(&self) -> Option<&LocaleEntry> {
        let current = self.active_locale()?;
        locale::alternate_of(&self.locales, current)
    }

    /// Wire form of the session's locale list.
    pub fn serialized_locales(&self) -> String {
        locale::serialize(&self.locales)
    }

    /// Make `requested` the primary locale by restarting the session.
    ///
    /// This session keeps its state untouched; the controller receives the
    /// reordered list's wire form and owns the restart.
    pub fn change_locale<C: SessionController>(
        &self,
        requested: &str,
        controller: &mut C,
    ) -> Result<(), LocaleError> {
        let reordered = locale::promote(&self.locales, requested)?;
        let serialized = locale::serialize(&reordered);
        debug!("session: locale change to {:?} -> {}", requested, serialized);
        controller.restart_with_locales(&serialized);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::StaticManifest;
    use canvas_nav::ViewingDirection;

    fn config_en_cy() -> ViewerConfig {
        ViewerConfig::from_json(
            r#"{
                "localisation": {
                    "locales": [
                        { "name": "en-GB", "label": "English" },
                        { "name": "cy-GB", "label": "Welsh" }
                    ]
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_open_rejects_empty_manifest() {
        let manifest = StaticManifest::numbered(0, ViewingDirection::LeftToRight, true);
        let err = ViewerSession::open(&manifest, &ViewerConfig::default(), &SessionParams::default())
            .unwrap_err();
        assert!(matches!(err, ProviderError::EmptyManifest));
    }

    #[test]
    fn test_open_rejects_out_of_range_start() {
        let manifest = StaticManifest::numbered(4, ViewingDirection::LeftToRight, true);
        let params = SessionParams {
            start_canvas: Some(4),
            ..SessionParams::default()
        };
        let err =
            ViewerSession::open(&manifest, &ViewerConfig::default(), &params).unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Paging(PagingError::IndexOutOfRange { index: 4, total: 4 })
        ));
    }

    #[test]
    fn test_open_uses_manifest_start_canvas() {
        let manifest =
            StaticManifest::numbered(6, ViewingDirection::LeftToRight, true).with_start_canvas(3);
        let session =
            ViewerSession::open(&manifest, &ViewerConfig::default(), &SessionParams::default())
                .unwrap();
        assert_eq!(session.position(), 3);
    }

    #[test]
    fn test_params_start_canvas_overrides_manifest() {
        let manifest =
            StaticManifest::numbered(6, ViewingDirection::LeftToRight, true).with_start_canvas(3);
        let params = SessionParams {
            start_canvas: Some(1),
            ..SessionParams::default()
        };
        let session = ViewerSession::open(&manifest, &ViewerConfig::default(), &params).unwrap();
        assert_eq!(session.position(), 1);
    }

    #[test]
    fn test_locales_memoized_with_priority_applied() {
        let manifest = StaticManifest::numbered(2, ViewingDirection::LeftToRight, true);
        let params = SessionParams::from_locale_spec("cy-GB:Cymraeg").unwrap();
        let session = ViewerSession::open(&manifest, &config_en_cy(), &params).unwrap();
        assert_eq!(session.active_locale(), Some("cy-GB"));
        assert_eq!(session.serialized_locales(), "cy-GB:Cymraeg,en-GB:English");
    }

    #[test]
    fn test_from_locale_spec_rejects_malformed() {
        let err = SessionParams::from_locale_spec("en-GB,,cy-GB").unwrap_err();
        assert_eq!(err, LocaleError::Malformed { segment: 1 });
    }

    #[test]
    fn test_no_locales_configured() {
        let manifest = StaticManifest::numbered(2, ViewingDirection::LeftToRight, true);
        let session =
            ViewerSession::open(&manifest, &ViewerConfig::default(), &SessionParams::default())
                .unwrap();
        assert_eq!(session.active_locale(), None);
        assert_eq!(session.alternate_locale(), None);
        assert_eq!(session.serialized_locales(), "");
    }
}
