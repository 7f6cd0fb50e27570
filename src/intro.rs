use crate::{
    core::{Length, OutputId, Translate3d},
    ease::Ease,
    error::{PagedriftError, PagedriftResult},
    host::OutputSink,
    math,
};

/// Delay between page load and `play()` on the stock page, in milliseconds.
pub const PLAY_DELAY_MS: f64 = 1000.0;

/// One animated axis of an intro track. `from` and `to` share a unit.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Channel {
    pub from: Length,
    pub to: Length,
}

impl Channel {
    pub fn px(from: f64, to: f64) -> Self {
        Self {
            from: Length::px(from),
            to: Length::px(to),
        }
    }

    pub fn percent(from: f64, to: f64) -> Self {
        Self {
            from: Length::percent(from),
            to: Length::percent(to),
        }
    }

    fn sample(&self, eased: f64) -> Length {
        Length {
            value: math::denormalize(eased, self.to.value, self.from.value),
            unit: self.from.unit,
        }
    }
}

/// One output element's entrance motion.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IntroTrack {
    pub target: OutputId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<Channel>,
    pub duration_ms: f64,
    #[serde(default)]
    pub delay_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineStatus {
    Paused,
    Playing,
    Complete,
}

/// One-shot entrance timeline: constructed paused, played once, never
/// repeated. On completion the caller constructs the scroll engine over the
/// content root; see the `simulate` command for the stock wiring.
#[derive(Clone, Debug)]
pub struct IntroTimeline {
    tracks: Vec<IntroTrack>,
    ease: Ease,
    elapsed_ms: f64,
    total_ms: f64,
    status: TimelineStatus,
}

impl IntroTimeline {
    pub fn new(tracks: Vec<IntroTrack>) -> PagedriftResult<Self> {
        if tracks.is_empty() {
            return Err(PagedriftError::timeline("timeline needs at least one track"));
        }
        let mut total_ms = 0.0f64;
        for track in &tracks {
            if !(track.duration_ms.is_finite() && track.duration_ms > 0.0) {
                return Err(PagedriftError::timeline(format!(
                    "track '{}' duration must be a positive finite number",
                    track.target
                )));
            }
            if !(track.delay_ms.is_finite() && track.delay_ms >= 0.0) {
                return Err(PagedriftError::timeline(format!(
                    "track '{}' delay must be finite and non-negative",
                    track.target
                )));
            }
            if track.x.is_none() && track.y.is_none() {
                return Err(PagedriftError::timeline(format!(
                    "track '{}' animates neither axis",
                    track.target
                )));
            }
            for channel in [&track.x, &track.y].into_iter().flatten() {
                if channel.from.unit != channel.to.unit {
                    return Err(PagedriftError::timeline(format!(
                        "track '{}' mixes units within one channel",
                        track.target
                    )));
                }
            }
            total_ms = total_ms.max(track.delay_ms + track.duration_ms);
        }

        Ok(Self {
            tracks,
            ease: Ease::OutExpo,
            elapsed_ms: 0.0,
            total_ms,
            status: TimelineStatus::Paused,
        })
    }

    /// The stock page's entrance: navigation and links drop in, headlines and
    /// text slide from the left, the image groups fly in from the edges.
    pub fn stock_page() -> Self {
        fn track(
            target: &str,
            x: Option<Channel>,
            y: Option<Channel>,
            duration_ms: f64,
            delay_ms: f64,
        ) -> IntroTrack {
            IntroTrack {
                target: OutputId::new(target),
                x,
                y,
                duration_ms,
                delay_ms,
            }
        }

        let tracks = vec![
            track("navigation", None, Some(Channel::percent(-100.0, 0.0)), 1000.0, 0.0),
            track("links", None, Some(Channel::px(-60.0, 0.0)), 900.0, 100.0),
            track("top-headline", Some(Channel::percent(-80.0, 0.0)), None, 900.0, 100.0),
            track("bottom-headline", Some(Channel::percent(-65.0, 0.0)), None, 1000.0, 0.0),
            track("text", Some(Channel::percent(-65.0, 0.0)), None, 1000.0, 0.0),
            track(
                "right-image",
                Some(Channel::percent(110.0, 0.0)),
                Some(Channel::px(300.0, 0.0)),
                750.0,
                250.0,
            ),
            track(
                "description",
                Some(Channel::percent(100.0, 0.0)),
                Some(Channel::px(200.0, 0.0)),
                800.0,
                200.0,
            ),
            track(
                "fixed-image-container",
                Some(Channel::percent(50.0, 0.0)),
                Some(Channel::px(300.0, 0.0)),
                1000.0,
                0.0,
            ),
            track(
                "image-one-overflow",
                Some(Channel::percent(50.0, 0.0)),
                Some(Channel::px(300.0, 0.0)),
                1000.0,
                0.0,
            ),
            track(
                "fixed-image",
                Some(Channel::percent(-100.0, 0.0)),
                Some(Channel::px(-500.0, 0.0)),
                1000.0,
                0.0,
            ),
        ];

        // Stock track list is well-formed by construction.
        Self::new(tracks).unwrap_or_else(|_| unreachable!("stock tracks validate"))
    }

    pub fn status(&self) -> TimelineStatus {
        self.status
    }

    pub fn is_complete(&self) -> bool {
        self.status == TimelineStatus::Complete
    }

    /// Start playback. Idempotent; a completed timeline stays complete.
    pub fn play(&mut self) {
        if self.status == TimelineStatus::Paused {
            tracing::debug!(tracks = self.tracks.len(), "intro timeline playing");
            self.status = TimelineStatus::Playing;
        }
    }

    /// Advance playback and write every track's current transform. Paused
    /// and completed timelines write nothing; completion is reported exactly
    /// once as the transition into `Complete` (with that frame's final
    /// writes applied).
    pub fn advance(&mut self, dt_ms: f64, sink: &mut dyn OutputSink) -> TimelineStatus {
        match self.status {
            TimelineStatus::Paused | TimelineStatus::Complete => return self.status,
            TimelineStatus::Playing => {}
        }

        self.elapsed_ms += dt_ms.max(0.0);

        for track in &self.tracks {
            let local = (self.elapsed_ms - track.delay_ms) / track.duration_ms;
            let eased = self.ease.apply(math::clamp(0.0, 1.0, local));

            let x = track
                .x
                .map(|c| c.sample(eased))
                .unwrap_or_else(|| Length::px(0.0));
            let y = track
                .y
                .map(|c| c.sample(eased))
                .unwrap_or_else(|| Length::px(0.0));
            sink.apply_transform(&track.target, Translate3d::new(x, y));
        }

        if self.elapsed_ms >= self.total_ms {
            tracing::debug!(elapsed_ms = self.elapsed_ms, "intro timeline complete");
            self.status = TimelineStatus::Complete;
        }
        self.status
    }
}
