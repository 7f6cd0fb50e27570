use crate::{
    core::{Rect, Viewport},
    math,
};

/// Viewport-visibility and progress tracking for one page region.
///
/// The layout rectangle is captured once at construction. Which progress
/// formula applies is decided by whether the region was already inside the
/// viewport at that moment, and that choice is frozen for the section's
/// lifetime: a section visible on load measures progress against its own
/// bottom edge, any other section against its travel through the viewport.
#[derive(Clone, Debug)]
pub struct SectionModel {
    height: f64,
    top: f64,
    bottom: f64,
    current: f64,
    progress: f64,
    scroll_top: f64,
    visible_on_load: bool,
    is_visible: bool,
}

impl SectionModel {
    pub fn new(bounds: Rect, viewport: &Viewport) -> Self {
        let mut model = Self {
            height: bounds.height,
            top: bounds.top,
            bottom: bounds.bottom,
            current: 0.0,
            progress: 0.0,
            scroll_top: 0.0,
            visible_on_load: false,
            is_visible: false,
        };

        model.check_viewport(viewport);
        if model.is_visible {
            model.visible_on_load = true;
            model.compute_progress(viewport);
        }
        model
    }

    fn check_viewport(&mut self, viewport: &Viewport) {
        self.is_visible =
            self.top < viewport.height + self.scroll_top && self.bottom > self.scroll_top;
    }

    // Progress is intentionally left unclamped; mappings clamp where needed.
    fn compute_progress(&mut self, viewport: &Viewport) {
        if self.visible_on_load {
            self.current = self.scroll_top;
            self.progress = math::normalize(self.current, self.bottom, 0.0);
        } else {
            self.current = self.scroll_top + viewport.height - self.top;
            self.progress = math::normalize(self.current, viewport.height + self.height, 0.0);
        }
    }

    /// Feed the frame's smoothed scroll offset. Returns false when the
    /// section is outside the viewport; the previous `current`/`progress`
    /// are kept stale in that case and nothing should be written.
    pub fn advance(&mut self, scroll_top: f64, viewport: &Viewport) -> bool {
        self.scroll_top = scroll_top.trunc();
        self.check_viewport(viewport);
        if !self.is_visible {
            return false;
        }
        self.compute_progress(viewport);
        true
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn visible_on_load(&self) -> bool {
        self.visible_on_load
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }
}
