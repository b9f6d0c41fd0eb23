//! Viewport-aware placement geometry for anchored overlays.
//!
//! # Invariants
//!
//! 1. **Totality**: every input produces a valid [`Placement`], including
//!    zero-size overlays and overlays larger than the viewport. No branch
//!    leaves an axis undecided and nothing panics.
//! 2. **Two-phase correction**: placement starts as the caller's preferred
//!    guess ([`MeasurePhase::Guessed`]) and is corrected exactly once per
//!    open, after the overlay's real size is measurable
//!    ([`MeasurePhase::Measured`]).
//! 3. **Containment**: whenever the overlay fits inside the viewport minus
//!    margins, the resolved rectangle lies fully within
//!    `[margin, viewport - margin]` on both axes.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Overlay wider than viewport | tiny viewport / huge menu | keep preferred side, clamp to visible area |
//! | Zero-size overlay | unmeasured surface | placement decided from anchor alone |
//! | Anchor outside viewport | stale coordinates | rect clamped back on-screen |

use plinth_core::geometry::{Point, Rect, Size, Viewport};
use serde::{Deserialize, Serialize};

/// Horizontal alignment of an overlay relative to its anchor.
///
/// `Left` pins the overlay's left edge to the anchor's left reference (the
/// overlay grows rightward); `Right` pins the right edge to the anchor's
/// right reference (grows leftward); `Center` centers on the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Right,
    Center,
}

/// Vertical side of the anchor an overlay opens toward.
///
/// `Bottom` opens below the anchor growing downward; `Top` opens above it
/// growing upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VerticalSide {
    #[default]
    Bottom,
    Top,
}

/// The chosen side pair for an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Placement {
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalSide,
}

impl Placement {
    /// Create a placement from its two axes.
    #[must_use]
    pub const fn new(horizontal: HorizontalAlign, vertical: VerticalSide) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// What an overlay positions itself relative to.
///
/// Point anchors come from cursor or touch coordinates (context menus);
/// rect anchors come from a trigger element's rendered rectangle (dropdowns,
/// tooltips).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Anchor {
    Point(Point),
    Rect(Rect),
}

impl Anchor {
    /// Left reference x (a point anchor collapses both references).
    #[must_use]
    pub fn left_x(&self) -> f32 {
        match self {
            Anchor::Point(p) => p.x,
            Anchor::Rect(r) => r.x,
        }
    }

    /// Right reference x.
    #[must_use]
    pub fn right_x(&self) -> f32 {
        match self {
            Anchor::Point(p) => p.x,
            Anchor::Rect(r) => r.right(),
        }
    }

    /// Horizontal center reference.
    #[must_use]
    pub fn center_x(&self) -> f32 {
        match self {
            Anchor::Point(p) => p.x,
            Anchor::Rect(r) => r.center().x,
        }
    }

    /// Top reference y.
    #[must_use]
    pub fn top_y(&self) -> f32 {
        match self {
            Anchor::Point(p) => p.y,
            Anchor::Rect(r) => r.y,
        }
    }

    /// Bottom reference y.
    #[must_use]
    pub fn bottom_y(&self) -> f32 {
        match self {
            Anchor::Point(p) => p.y,
            Anchor::Rect(r) => r.bottom(),
        }
    }
}

impl From<Point> for Anchor {
    fn from(p: Point) -> Self {
        Anchor::Point(p)
    }
}

impl From<Rect> for Anchor {
    fn from(r: Rect) -> Self {
        Anchor::Rect(r)
    }
}

/// Tuning constants for placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Minimum distance kept between overlay edges and viewport edges.
    pub margin: f32,
    /// Constant shift applied to the active horizontal offset.
    pub offset_x: f32,
    /// Constant shift applied to the active vertical offset.
    pub offset_y: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            margin: 10.0,
            offset_x: 0.0,
            offset_y: 8.0,
        }
    }
}

impl PlacementConfig {
    /// Set the viewport margin.
    #[must_use]
    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the corner offsets.
    #[must_use]
    pub fn offsets(mut self, offset_x: f32, offset_y: f32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }
}

/// Phase of the measure-then-correct placement state machine.
///
/// An overlay opens in `Guessed` with the caller's preferred alignment; once
/// its rendered size is known the correction pass moves it to `Measured`.
/// The transition happens at most once per open event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeasurePhase {
    #[default]
    Guessed,
    Measured,
}

/// A corrected placement together with the concrete on-screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPlacement {
    pub placement: Placement,
    pub rect: Rect,
}

/// Offsets for the presentation layer, mirroring CSS `left`/`right`/`top`/
/// `bottom`: exactly one horizontal and one vertical field is set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnchorOffsets {
    pub left: Option<f32>,
    pub right: Option<f32>,
    pub top: Option<f32>,
    pub bottom: Option<f32>,
}

/// Decide which sides the overlay should render on.
///
/// Decision rule per axis: keep the preferred side unless the overlay's far
/// edge would cross the viewport margin *and* the flipped side fits fully.
/// When neither side fits the preferred side wins, and the caller relies on
/// [`resolve`] clamping to keep the most area visible.
#[must_use]
pub fn compute_placement(
    anchor: Anchor,
    preferred: Placement,
    overlay: Size,
    viewport: Viewport,
    config: &PlacementConfig,
) -> Placement {
    let m = config.margin;
    let w = overlay.width.max(0.0);
    let h = overlay.height.max(0.0);

    let left_fits = anchor.left_x() + w <= viewport.width - m;
    let right_fits = anchor.right_x() - w >= m;

    let horizontal = match preferred.horizontal {
        HorizontalAlign::Left => {
            if !left_fits && right_fits {
                HorizontalAlign::Right
            } else {
                HorizontalAlign::Left
            }
        }
        HorizontalAlign::Right => {
            if !right_fits && left_fits {
                HorizontalAlign::Left
            } else {
                HorizontalAlign::Right
            }
        }
        HorizontalAlign::Center => {
            let cx = anchor.center_x();
            if cx + w / 2.0 > viewport.width - m {
                HorizontalAlign::Right
            } else if cx - w / 2.0 < m {
                HorizontalAlign::Left
            } else {
                HorizontalAlign::Center
            }
        }
    };

    let below_fits = anchor.bottom_y() + h <= viewport.height - m;
    let above_fits = anchor.top_y() - h >= m;

    let vertical = match preferred.vertical {
        VerticalSide::Bottom => {
            if !below_fits && above_fits {
                VerticalSide::Top
            } else {
                VerticalSide::Bottom
            }
        }
        VerticalSide::Top => {
            if !above_fits && below_fits {
                VerticalSide::Bottom
            } else {
                VerticalSide::Top
            }
        }
    };

    Placement::new(horizontal, vertical)
}

/// Project the overlay rectangle for a placement, before clamping.
fn projected_rect(anchor: Anchor, placement: Placement, overlay: Size) -> Rect {
    let w = overlay.width.max(0.0);
    let h = overlay.height.max(0.0);

    let x = match placement.horizontal {
        HorizontalAlign::Left => anchor.left_x(),
        HorizontalAlign::Right => anchor.right_x() - w,
        HorizontalAlign::Center => anchor.center_x() - w / 2.0,
    };
    let y = match placement.vertical {
        VerticalSide::Bottom => anchor.bottom_y(),
        VerticalSide::Top => anchor.top_y() - h,
    };

    Rect::new(x, y, w, h)
}

/// Correct the placement and produce the overlay's on-screen rectangle.
///
/// The rectangle is clamped into `[margin, viewport - margin]` per axis when
/// the overlay fits; when it does not fit, it is clamped to the viewport
/// itself so the most area stays visible. This is the fallback path for
/// degenerate inputs and never fails.
#[must_use]
pub fn resolve(
    anchor: Anchor,
    preferred: Placement,
    overlay: Size,
    viewport: Viewport,
    config: &PlacementConfig,
) -> ResolvedPlacement {
    let placement = compute_placement(anchor, preferred, overlay, viewport, config);
    let raw = projected_rect(anchor, placement, overlay);

    let rect = Rect::new(
        clamp_axis(raw.x, raw.width, viewport.width, config.margin),
        clamp_axis(raw.y, raw.height, viewport.height, config.margin),
        raw.width,
        raw.height,
    );

    ResolvedPlacement { placement, rect }
}

/// Clamp one axis into the margin band, falling back to the viewport band
/// when the overlay is too large for the margins.
fn clamp_axis(pos: f32, len: f32, extent: f32, margin: f32) -> f32 {
    if len <= extent - 2.0 * margin {
        pos.clamp(margin, extent - margin - len)
    } else if len <= extent {
        pos.clamp(0.0, extent - len)
    } else {
        // Larger than the viewport: pin to the near edge.
        0.0
    }
}

/// CSS-style edge offsets for a corrected placement.
///
/// The active corner determines which fields are set: a right-aligned
/// overlay gets a `right` offset measured from the viewport's right edge
/// (`viewport.width - anchor_right + offset_x`), a top-anchored one gets a
/// `bottom` offset, and so on. Corner offsets from [`PlacementConfig`] are
/// applied after flip correction.
#[must_use]
pub fn anchor_offsets(
    anchor: Anchor,
    placement: Placement,
    overlay: Size,
    viewport: Viewport,
    config: &PlacementConfig,
) -> AnchorOffsets {
    let mut out = AnchorOffsets::default();

    match placement.horizontal {
        HorizontalAlign::Left => {
            out.left = Some(anchor.left_x() + config.offset_x);
        }
        HorizontalAlign::Right => {
            out.right = Some(viewport.width - anchor.right_x() + config.offset_x);
        }
        HorizontalAlign::Center => {
            out.left = Some(anchor.center_x() - overlay.width / 2.0 + config.offset_x);
        }
    }

    match placement.vertical {
        VerticalSide::Bottom => {
            out.top = Some(anchor.bottom_y() + config.offset_y);
        }
        VerticalSide::Top => {
            out.bottom = Some(viewport.height - anchor.top_y() + config.offset_y);
        }
    }

    out
}
