use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::render::NodeId;

/// Tooltip anchor strategy: which way the box grows from its anchor point.
///
/// Chosen per hover so the box always extends toward the plot center and
/// never overflows the nearest edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TooltipPlacement {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

/// Picks the placement from plot-area coordinates.
///
/// Pure and total: right-of-center markers push the box left, bottom-half
/// markers push it up.
#[must_use]
pub fn placement_for(cx: f64, cy: f64, plot_width: f64, plot_height: f64) -> TooltipPlacement {
    let right = cx > plot_width / 2.0;
    let bottom = cy > plot_height / 2.0;
    match (right, bottom) {
        (true, false) => TooltipPlacement::DownLeft,
        (true, true) => TooltipPlacement::UpLeft,
        (false, true) => TooltipPlacement::UpRight,
        (false, false) => TooltipPlacement::DownRight,
    }
}

/// One colored line inside the tooltip box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipItem {
    pub color: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipAnchor {
    /// Absolute surface coordinates, margins included.
    pub x: f64,
    pub y: f64,
    pub placement: TooltipPlacement,
}

/// Transient hover state; exactly one instance exists per rendered chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub visible: bool,
    pub title: String,
    pub items: SmallVec<[TooltipItem; 2]>,
    pub anchor: TooltipAnchor,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self {
            visible: false,
            title: String::new(),
            items: SmallVec::new(),
            anchor: TooltipAnchor {
                x: 0.0,
                y: 0.0,
                placement: TooltipPlacement::UpLeft,
            },
        }
    }
}

/// Two-state machine (`hidden` / `shown`) driving the tooltip.
///
/// Pointer events arrive serially from the host, never concurrently with a
/// re-render, so plain mutable state is enough; multi-touch concurrent hover
/// is deliberately unsupported.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipController {
    state: TooltipState,
}

impl TooltipController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    /// `hidden → shown`: adopts the prepared content and anchor.
    pub fn on_marker_enter(
        &mut self,
        title: String,
        item: TooltipItem,
        anchor: TooltipAnchor,
    ) -> &TooltipState {
        self.state = TooltipState {
            visible: true,
            title,
            items: smallvec![item],
            anchor,
        };
        &self.state
    }

    /// `shown → hidden`: content is kept for inspection, visibility drops.
    pub fn on_marker_leave(&mut self) -> &TooltipState {
        self.state.visible = false;
        &self.state
    }
}

/// One hoverable dot: enough context to enlarge the circle and to rebuild
/// the tooltip content without touching the source datasets again.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverTarget {
    pub series: usize,
    pub point: usize,
    pub node: NodeId,
    /// Plot-area coordinates of the dot center.
    pub cx: f64,
    pub cy: f64,
    /// Coerced X in milliseconds and the raw count.
    pub x_ms: f64,
    pub y: f64,
}
