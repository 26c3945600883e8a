//! Manifest capability surface.
//!
//! Manifest acquisition and parsing live outside this workspace; a session
//! only needs a handful of read-only facts plus canvas lookup. Hosts adapt
//! whatever manifest stack they carry by implementing [`ManifestAccessor`].

use canvas_nav::ViewingDirection;

/// Read-only manifest facts consumed per session.
///
/// Values are fixed for the lifetime of a session; a manifest change means
/// a new session.
pub trait ManifestAccessor {
    /// Number of canvases in the active sequence.
    fn total_canvases(&self) -> usize;

    /// Declared reading order.
    fn viewing_direction(&self) -> ViewingDirection;

    /// Whether the manifest declares paged (two-up) behavior.
    fn paging_supported(&self) -> bool;

    /// Canvas the viewer should open on.
    fn start_canvas_index(&self) -> usize {
        0
    }

    /// Resolve a canvas id to its sequence index.
    fn canvas_index_by_id(&self, id: &str) -> Option<usize>;

    /// Resolve a canvas label to its sequence index.
    fn canvas_index_by_label(&self, label: &str) -> Option<usize>;
}

/// One canvas as [`StaticManifest`] stores it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanvasRecord {
    /// Stable canvas id from the manifest.
    pub id: String,
    /// Display label (page number, folio reference).
    pub label: String,
}

/// In-memory [`ManifestAccessor`] for hosts with pre-resolved manifests,
/// and the fixture used throughout this workspace's tests.
#[derive(Clone, Debug)]
pub struct StaticManifest {
    canvases: Vec<CanvasRecord>,
    direction: ViewingDirection,
    paged: bool,
    start_canvas: usize,
}

impl StaticManifest {
    /// Manifest opening on canvas 0.
    pub fn new(canvases: Vec<CanvasRecord>, direction: ViewingDirection, paged: bool) -> Self {
        Self {
            canvases,
            direction,
            paged,
            start_canvas: 0,
        }
    }

    /// Paged manifest of `total` canvases with ids `canvas-0..` and
    /// one-based page-number labels.
    pub fn numbered(total: usize, direction: ViewingDirection, paged: bool) -> Self {
        let canvases = (0..total)
            .map(|i| CanvasRecord {
                id: format!("canvas-{}", i),
                label: format!("{}", i + 1),
            })
            .collect();
        Self::new(canvases, direction, paged)
    }

    /// Override the canvas the viewer opens on.
    pub fn with_start_canvas(mut self, index: usize) -> Self {
        self.start_canvas = index;
        self
    }
}

impl ManifestAccessor for StaticManifest {
    fn total_canvases(&self) -> usize {
        self.canvases.len()
    }

    fn viewing_direction(&self) -> ViewingDirection {
        self.direction
    }

    fn paging_supported(&self) -> bool {
        self.paged
    }

    fn start_canvas_index(&self) -> usize {
        self.start_canvas
    }

    fn canvas_index_by_id(&self, id: &str) -> Option<usize> {
        self.canvases.iter().position(|c| c.id == id)
    }

    fn canvas_index_by_label(&self, label: &str) -> Option<usize> {
        self.canvases.iter().position(|c| c.label == label)
    }
}
