//! Capabilities the embedding page injects into the engine.
//!
//! The engine never touches a document directly: the host hands it a sink
//! for transform writes and a clock for frame scheduling. In a browser
//! embedding these wrap `style.transform` assignments and
//! `requestAnimationFrame`; in tests and the CLI they are the in-memory
//! implementations below, which makes every frame step deterministic.

use crate::core::{FrameId, OutputId, Translate3d};

/// Feature detection supplied by the host.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Support {
    /// Touch/mobile device: the engine degrades to a no-op and marks the
    /// document instead of scroll-jacking.
    pub mobile: bool,
    /// The host's wheel events report line-based deltas that need the
    /// legacy multiplier (historically a Firefox quirk).
    pub line_delta_quirk: bool,
}

/// Where transform writes and the mobile-degradation marker go.
///
/// Writes are best-effort by contract; a well-formed document cannot reject
/// them, so the trait is infallible.
pub trait OutputSink {
    fn apply_transform(&mut self, target: &OutputId, transform: Translate3d);

    /// Toggle the CSS class marking mobile degradation on the document.
    fn set_mobile_class(&mut self, enabled: bool);
}

/// Host-provided frame scheduling (request/cancel a callback before the next
/// repaint). Injected so tests can step frames without real timers.
pub trait FrameClock {
    fn request_frame(&mut self) -> FrameId;
    fn cancel_frame(&mut self, frame: FrameId);
}

/// One recorded sink call.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TransformWrite {
    pub target: OutputId,
    pub transform: Translate3d,
    /// Rendered CSS value, what the browser adapter would assign.
    pub css: String,
}

/// Append-only sink used by the CLI and the test suite.
#[derive(Debug, Default)]
pub struct RecordingSink {
    writes: Vec<TransformWrite>,
    mobile_class: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> &[TransformWrite] {
        &self.writes
    }

    pub fn mobile_class(&self) -> bool {
        self.mobile_class
    }

    /// Last write for a given target, if any.
    pub fn last_for(&self, target: &OutputId) -> Option<&TransformWrite> {
        self.writes.iter().rev().find(|w| &w.target == target)
    }

    pub fn clear(&mut self) {
        self.writes.clear();
    }

    pub fn take_writes(&mut self) -> Vec<TransformWrite> {
        std::mem::take(&mut self.writes)
    }
}

impl OutputSink for RecordingSink {
    fn apply_transform(&mut self, target: &OutputId, transform: Translate3d) {
        self.writes.push(TransformWrite {
            target: target.clone(),
            transform,
            css: transform.to_string(),
        });
    }

    fn set_mobile_class(&mut self, enabled: bool) {
        self.mobile_class = enabled;
    }
}

/// Monotonic clock for headless stepping. Never fires callbacks on its own;
/// the driver calls `ScrollEngine::tick` itself and this just hands out ids.
#[derive(Debug, Default)]
pub struct ManualClock {
    next: u64,
    cancelled: Vec<FrameId>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requested(&self) -> u64 {
        self.next
    }

    pub fn cancelled(&self) -> &[FrameId] {
        &self.cancelled
    }
}

impl FrameClock for ManualClock {
    fn request_frame(&mut self) -> FrameId {
        let id = FrameId(self.next);
        self.next += 1;
        id
    }

    fn cancel_frame(&mut self, frame: FrameId) {
        self.cancelled.push(frame);
    }
}
