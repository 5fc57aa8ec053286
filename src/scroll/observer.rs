//! Sentinel visibility detection.
//!
//! All positions are in rows of the virtual (unscrolled) list content. The
//! viewport is the window `[scroll_offset, scroll_offset + viewport_height)`
//! grown by the root margin on both sides.

/// Visibility-detection settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Rows added above and below the viewport before checking overlap.
    pub root_margin: u16,
    /// Fraction of the sentinel that must be visible, in `[0.0, 1.0]`.
    /// `0.0` means "any overlap at all".
    pub threshold: f32,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            root_margin: 0,
            threshold: 1.0,
        }
    }
}

impl ObserverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root_margin(mut self, rows: u16) -> Self {
        self.root_margin = rows;
        self
    }

    /// Set the threshold, clamped to `[0.0, 1.0]`. NaN falls back to `1.0`.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = if threshold.is_nan() {
            1.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        self
    }

    fn is_intersecting(&self, fraction: f32) -> bool {
        if self.threshold <= 0.0 {
            fraction > 0.0
        } else {
            fraction >= self.threshold
        }
    }
}

/// Where the sentinel sits relative to the viewport, as measured by the last
/// render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SentinelGeometry {
    /// First content row shown at the top of the viewport
    pub scroll_offset: u32,
    /// Rows available to the list
    pub viewport_height: u32,
    /// Content row the sentinel starts at
    pub sentinel_top: u32,
    /// Rows the sentinel occupies
    pub sentinel_height: u32,
}

impl SentinelGeometry {
    /// Fraction of the sentinel inside the viewport grown by `margin` rows.
    pub fn visible_fraction(&self, margin: u16) -> f32 {
        if self.viewport_height == 0 {
            return 0.0;
        }

        let margin = u64::from(margin);
        let view_top = u64::from(self.scroll_offset).saturating_sub(margin);
        let view_bottom =
            u64::from(self.scroll_offset) + u64::from(self.viewport_height) + margin;

        let top = u64::from(self.sentinel_top);
        if self.sentinel_height == 0 {
            // Zero-height target: visible iff its edge lies inside the view.
            return if (view_top..=view_bottom).contains(&top) {
                1.0
            } else {
                0.0
            };
        }

        let bottom = top + u64::from(self.sentinel_height);
        let overlap = bottom.min(view_bottom).saturating_sub(top.max(view_top));
        overlap as f32 / self.sentinel_height as f32
    }
}

/// Watches one sentinel and reports changes of its intersecting state.
#[derive(Debug)]
pub struct IntersectionObserver {
    options: ObserverOptions,
    generation: u64,
    last: Option<bool>,
}

impl IntersectionObserver {
    pub fn new(options: ObserverOptions, generation: u64) -> Self {
        Self {
            options,
            generation,
            last: None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Feed a new measurement.
    ///
    /// Returns `Some(intersecting)` when the state differs from the previous
    /// measurement. The first measurement after construction always reports.
    pub fn observe(&mut self, geometry: SentinelGeometry) -> Option<bool> {
        let fraction = geometry.visible_fraction(self.options.root_margin);
        let intersecting = self.options.is_intersecting(fraction);

        if self.last == Some(intersecting) {
            return None;
        }
        self.last = Some(intersecting);
        Some(intersecting)
    }
}
