//! Value types shared across the engine: viewport geometry, measured layout
//! rectangles, and the transform strings handed to the host.

/// Window dimensions in CSS pixels. Owned by the engine and mutated only
/// through its resize path, never shared as a global.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A region's static document-relative layout, measured once by the host at
/// construction time and never re-measured.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Unit {
    Px,
    Percent,
}

/// A CSS length. Zero renders unitless, matching hand-written page CSS.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub fn px(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Px,
        }
    }

    pub fn percent(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Percent,
        }
    }
}

impl std::fmt::Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.value == 0.0 {
            return write!(f, "0");
        }
        match self.unit {
            Unit::Px => write!(f, "{}px", self.value),
            Unit::Percent => write!(f, "{}%", self.value),
        }
    }
}

/// A `translate3d(x, y, 0)` transform; the only transform this system writes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Translate3d {
    pub x: Length,
    pub y: Length,
}

impl Translate3d {
    pub fn new(x: Length, y: Length) -> Self {
        Self { x, y }
    }

    pub fn y_px(y: f64) -> Self {
        Self::new(Length::px(0.0), Length::px(y))
    }

    pub fn y_percent(y: f64) -> Self {
        Self::new(Length::px(0.0), Length::percent(y))
    }
}

impl std::fmt::Display for Translate3d {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "translate3d({}, {}, 0)", self.x, self.y)
    }
}

/// Opaque handle naming a host output element.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct OutputId(pub String);

impl OutputId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for OutputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Handle for a scheduled frame callback, returned by the host clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(pub u64);
