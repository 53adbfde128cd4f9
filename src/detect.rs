// Scroll-boundary detection
//
// The header's vertical position is re-measured on every render pass, but the
// interesting moments are only the boundary crossings: the frame where the
// header's top edge slips under the toolbar, and the frame where it comes
// back out. This module turns the per-frame measurement stream into an
// edge-triggered signal so state writes and animation restarts happen once
// per crossing, not once per frame.

/// Per-frame position sample for the header.
///
/// `header_top` is the header's top edge in screen coordinates (rows from the
/// top of the terminal); `top_inset` is the fixed height of the toolbar
/// region the content scrolls underneath. Both are measured fresh each
/// layout pass; a measurement has no identity and is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMeasurement {
    pub header_top: i32,
    pub top_inset: i32,
}

impl ScrollMeasurement {
    pub fn new(header_top: i32, top_inset: i32) -> Self {
        Self {
            header_top,
            top_inset,
        }
    }

    /// True when the header's top edge has scrolled past the toolbar boundary.
    pub fn is_under_toolbar(&self) -> bool {
        self.header_top - self.top_inset < 0
    }
}

/// Edge-triggered boundary detector.
///
/// `observe` is called every frame with the current measurement and returns
/// `Some(new_value)` only when the boundary side differs from the last
/// reported one. The baseline is `false` (header below the toolbar), which
/// matches the title state's default, so nothing is reported until the
/// header actually crosses.
#[derive(Debug)]
pub struct BoundaryDetector {
    last_reported: bool,
}

impl BoundaryDetector {
    pub fn new() -> Self {
        Self {
            last_reported: false,
        }
    }

    /// Feed one measurement; returns the new boundary side on a crossing.
    pub fn observe(&mut self, measurement: ScrollMeasurement) -> Option<bool> {
        let under = measurement.is_under_toolbar();
        if under == self.last_reported {
            return None;
        }
        self.last_reported = under;
        Some(under)
    }

    /// The most recently reported boundary side.
    #[allow(dead_code)] // State query; exercised in tests
    pub fn reported(&self) -> bool {
        self.last_reported
    }
}

impl Default for BoundaryDetector {
    fn default() -> Self {
        Self::new()
    }
}
