/// Easing curves used by the section mappings and the intro timeline.
///
/// `apply` does not clamp its input: the section base model hands over an
/// unclamped progress value on purpose, and the rendered output tracks the
/// raw curve outside `[0, 1]` exactly like the page it reproduces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Acceleration until halfway, then deceleration.
    InOutQuad,
    /// Deceleration to zero velocity.
    OutQuint,
    /// Sharp exponential settle; intro timeline only.
    OutExpo,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::OutQuint => 1.0 + (t - 1.0).powi(5),
            Self::OutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
        }
    }
}
