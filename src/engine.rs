use crate::{
    animator::{FrameInput, SectionAnimator},
    core::{FrameId, OutputId, Translate3d, Viewport},
    error::PagedriftResult,
    host::{FrameClock, OutputSink, Support},
    layout::PageLayout,
    math,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Running,
    /// Touch/mobile device or no content root: the page scrolls natively and
    /// the engine does nothing further. A configuration branch, not an error.
    Degraded,
    Destroyed,
}

/// Tunables. The line-delta multiplier is a compatibility shim for engines
/// that report wheel deltas in lines instead of pixels; it is configurable
/// here instead of being tied to a user-agent sniff.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct EngineOptions {
    pub ease: f64,
    pub key_step: f64,
    pub line_delta_multiplier: f64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            ease: 0.075,
            key_step: 120.0,
            line_delta_multiplier: 15.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaMode {
    #[default]
    Pixel,
    Line,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct WheelInput {
    pub delta_y: f64,
    #[serde(default)]
    pub delta_mode: DeltaMode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,
    Space,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct KeyInput {
    pub key: Key,
    #[serde(default)]
    pub shift: bool,
}

/// The smoothed virtual-scroll state. `current` chases `target` by
/// exponential smoothing each frame; `target` is clamped to the scrollable
/// range on every input event.
#[derive(Clone, Copy, Debug)]
pub struct ScrollState {
    pub current: f64,
    pub target: f64,
    pub ease: f64,
    pub scroll_height: f64,
}

/// Owns the whole animation layer: scroll state, the section animators, the
/// injected sink and clock. The host adapter forwards wheel/key/resize
/// events and invokes `tick` when the scheduled frame fires.
pub struct ScrollEngine<S> {
    state: EngineState,
    support: Support,
    options: EngineOptions,
    viewport: Viewport,
    data: ScrollState,
    section_containers: Vec<OutputId>,
    animators: Vec<SectionAnimator>,
    sink: S,
    clock: Box<dyn FrameClock>,
    pending_frame: Option<FrameId>,
}

impl<S: OutputSink> ScrollEngine<S> {
    /// Build the engine over a measured page. With `support.mobile` set or
    /// no layout supplied, marks the document as mobile-styled and degrades
    /// to a no-op. Otherwise validates the layout, primes the section
    /// containers, and runs the first frame synchronously.
    #[tracing::instrument(skip_all, fields(mobile = support.mobile))]
    pub fn new(
        layout: Option<&PageLayout>,
        support: Support,
        options: EngineOptions,
        viewport: Viewport,
        mut sink: S,
        clock: Box<dyn FrameClock>,
    ) -> PagedriftResult<Self> {
        let data = ScrollState {
            current: 0.0,
            target: 0.0,
            ease: options.ease,
            scroll_height: 0.0,
        };

        let Some(layout) = layout.filter(|_| !support.mobile) else {
            tracing::debug!("degrading to native scroll");
            sink.set_mobile_class(true);
            return Ok(Self {
                state: EngineState::Degraded,
                support,
                options,
                viewport,
                data,
                section_containers: Vec::new(),
                animators: Vec::new(),
                sink,
                clock,
                pending_frame: None,
            });
        };

        layout.validate()?;

        let animators = layout
            .sections
            .iter()
            .map(|spec| SectionAnimator::new(spec.bounds, spec.mapping.clone(), &viewport))
            .collect();

        let mut engine = Self {
            state: EngineState::Running,
            support,
            options,
            viewport,
            data: ScrollState {
                scroll_height: layout.scroll_height,
                ..data
            },
            section_containers: layout.section_containers.clone(),
            animators,
            sink,
            clock,
            pending_frame: None,
        };

        // Prime the compositor: shove the containers offscreen, then snap
        // back to rest before the first real frame.
        let offscreen = -engine.data.scroll_height - engine.viewport.height;
        for container in &engine.section_containers {
            engine
                .sink
                .apply_transform(container, Translate3d::y_px(offscreen));
            engine
                .sink
                .apply_transform(container, Translate3d::y_px(0.0));
        }

        engine.tick();
        Ok(engine)
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.data
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Accumulate a wheel delta into the target offset. Line-based deltas
    /// are scaled by the configured multiplier when the host reported the
    /// quirk; the target is re-clamped afterwards either way.
    pub fn wheel(&mut self, input: WheelInput) {
        if self.state != EngineState::Running {
            return;
        }

        let delta = if self.support.line_delta_quirk && input.delta_mode == DeltaMode::Line {
            input.delta_y * self.options.line_delta_multiplier
        } else {
            input.delta_y
        };

        self.data.target += delta;
        self.clamp_target();
    }

    pub fn key_down(&mut self, input: KeyInput) {
        if self.state != EngineState::Running {
            return;
        }

        match input.key {
            Key::ArrowUp => {
                self.data.target -= self.options.key_step;
                self.clamp_target();
            }
            Key::ArrowDown => {
                self.data.target += self.options.key_step;
                self.clamp_target();
            }
            Key::Space if input.shift => {
                self.data.target -= self.viewport.height;
                self.clamp_target();
            }
            Key::Space => {
                self.data.target += self.viewport.height;
                self.clamp_target();
            }
            // Horizontal paging is recognized but disabled on this page.
            Key::ArrowLeft | Key::ArrowRight => {}
        }
    }

    fn clamp_target(&mut self) {
        self.data.target = math::clamp(
            0.0,
            self.data.scroll_height - self.viewport.height,
            self.data.target,
        );
    }

    /// One animation frame: smooth the offset, schedule the next frame,
    /// move the section containers, run every animator.
    pub fn tick(&mut self) {
        if self.state != EngineState::Running {
            return;
        }

        let smoothed = math::lerp(self.data.current, self.data.target, self.data.ease);
        self.data.current = (smoothed * 100.0).round() / 100.0;

        // Anti-jitter floor: kill sub-pixel drift at the top of the page.
        if self.data.current < 0.1 {
            self.data.current = 0.0;
        }

        self.pending_frame = Some(self.clock.request_frame());

        for container in &self.section_containers {
            self.sink
                .apply_transform(container, Translate3d::y_px(-self.data.current));
        }

        let frame = FrameInput {
            scroll_top: self.data.current,
            target: self.data.target,
        };
        for animator in &mut self.animators {
            animator.run(frame, &self.viewport, &mut self.sink);
        }
    }

    /// Take over the host's new measurements. Deliberately does not re-clamp
    /// the target; the next input event will.
    #[tracing::instrument(skip(self))]
    pub fn resize(&mut self, viewport: Viewport, scroll_height: f64) {
        if self.state != EngineState::Running {
            return;
        }
        self.viewport = viewport;
        self.data.scroll_height = scroll_height;
    }

    /// Cancel the pending frame and go inert. Idempotent; a destroyed
    /// engine ignores all further input without failing.
    pub fn destroy(&mut self) {
        if let Some(frame) = self.pending_frame.take() {
            self.clock.cancel_frame(frame);
        }
        if self.state != EngineState::Destroyed {
            tracing::debug!("scroll engine destroyed");
            self.state = EngineState::Destroyed;
        }
    }
}
