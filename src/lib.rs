#![forbid(unsafe_code)]

pub mod animator;
pub mod core;
pub mod ease;
pub mod engine;
pub mod error;
pub mod host;
pub mod intro;
pub mod layout;
pub mod math;
pub mod section;

pub use animator::{FrameInput, Mapping, OverflowStyle, SectionAnimator};
pub use core::{FrameId, Length, OutputId, Rect, Translate3d, Unit, Viewport};
pub use ease::Ease;
pub use engine::{
    DeltaMode, EngineOptions, EngineState, Key, KeyInput, ScrollEngine, ScrollState, WheelInput,
};
pub use error::{PagedriftError, PagedriftResult};
pub use host::{FrameClock, ManualClock, OutputSink, RecordingSink, Support, TransformWrite};
pub use intro::{Channel, IntroTimeline, IntroTrack, TimelineStatus, PLAY_DELAY_MS};
pub use layout::{stock_page_layout, PageLayout, SectionSpec};
pub use section::SectionModel;
