use crate::{
    core::{OutputId, Rect, Translate3d, Viewport},
    ease::Ease,
    host::OutputSink,
    math,
    section::SectionModel,
};

/// Per-frame input handed to every animator: the smoothed offset and the raw
/// input target.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    pub scroll_top: f64,
    pub target: f64,
}

/// How the image-reveal overflow output is driven.
///
/// `TwoPhase` is the half-height keyframe pair the page computes every frame
/// but has never shipped; it is kept as a selectable arm rather than deleted
/// because it is unclear whether it is a placeholder or a leftover. The stock
/// layout always selects `Eased`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowStyle {
    #[default]
    Eased,
    TwoPhase,
}

/// The closed set of progress-to-transform mappings, one per animated page
/// region. Each variant owns its output bindings; the shared visibility and
/// progress logic lives in [`SectionModel`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mapping {
    /// Eased vertical reveal on an overflow wrapper plus a linear counter
    /// drift on the inner image.
    ImageReveal {
        overflow: OutputId,
        image: OutputId,
        #[serde(default)]
        style: OverflowStyle,
    },
    /// Plain linear parallax between two pixel endpoints.
    Parallax {
        container: OutputId,
        #[serde(default)]
        from_y: f64,
        #[serde(default = "default_parallax_to")]
        to_y: f64,
    },
    /// Fixed secondary image group; overrides the base progress with a
    /// section-height-relative one and drives three outputs.
    FixedGroup {
        container: OutputId,
        overflow: OutputId,
        image: OutputId,
    },
}

fn default_parallax_to() -> f64 {
    25.0
}

/// One animated section: the shared viewport model plus its mapping.
#[derive(Clone, Debug)]
pub struct SectionAnimator {
    model: SectionModel,
    mapping: Mapping,
}

impl SectionAnimator {
    pub fn new(bounds: Rect, mapping: Mapping, viewport: &Viewport) -> Self {
        Self {
            model: SectionModel::new(bounds, viewport),
            mapping,
        }
    }

    pub fn model(&self) -> &SectionModel {
        &self.model
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    /// Advance the section and, when visible, write this frame's transforms.
    /// Out-of-viewport frames are cheap no-ops. Never fails.
    pub fn run(&mut self, frame: FrameInput, viewport: &Viewport, sink: &mut dyn OutputSink) {
        if !self.model.advance(frame.scroll_top, viewport) {
            return;
        }

        match &self.mapping {
            Mapping::ImageReveal {
                overflow,
                image,
                style,
            } => {
                let progress = self.model.progress();

                // Secondary axis against half the section's bottom edge,
                // clamped unlike the base progress.
                let raw = math::normalize(self.model.current(), self.model.bottom() * 0.5, 0.0);
                let phase_a = math::clamp(0.0, 1.0, raw);
                let phase_b = math::clamp(0.0, 1.0, raw - 1.0);
                let two_phase = if phase_a < 1.0 {
                    math::denormalize(Ease::InOutQuad.apply(phase_a), -260.0, 0.0)
                } else {
                    math::denormalize(phase_b, 0.0, -260.0)
                };

                let overflow_y = match style {
                    OverflowStyle::Eased => {
                        math::denormalize(Ease::OutQuint.apply(progress), -260.0, 0.0)
                    }
                    OverflowStyle::TwoPhase => two_phase,
                };

                sink.apply_transform(overflow, Translate3d::y_px(overflow_y));
                sink.apply_transform(
                    image,
                    Translate3d::y_px(math::denormalize(progress, 100.0, 0.0)),
                );
            }
            Mapping::Parallax {
                container,
                from_y,
                to_y,
            } => {
                let y = math::denormalize(self.model.progress(), *to_y, *from_y);
                sink.apply_transform(container, Translate3d::y_px(y));
            }
            Mapping::FixedGroup {
                container,
                overflow,
                image,
            } => {
                // Ignores the base's viewport-relative progress entirely.
                let progress = math::normalize(self.model.current(), self.model.height(), 0.0);

                sink.apply_transform(
                    container,
                    Translate3d::y_px(math::denormalize(progress, 0.0, 100.0)),
                );
                sink.apply_transform(
                    overflow,
                    Translate3d::y_px(math::denormalize(
                        Ease::InOutQuad.apply(progress),
                        0.0,
                        100.0,
                    )),
                );
                sink.apply_transform(
                    image,
                    Translate3d::y_percent(math::denormalize(progress, -100.0, 0.0)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingSink;

    fn viewport() -> Viewport {
        Viewport::new(1280.0, 800.0)
    }

    fn frame(scroll_top: f64) -> FrameInput {
        FrameInput {
            scroll_top,
            target: scroll_top,
        }
    }

    #[test]
    fn hidden_section_writes_nothing() {
        let bounds = Rect {
            top: 2400.0,
            bottom: 2800.0,
            height: 400.0,
        };
        let mut animator = SectionAnimator::new(
            bounds,
            Mapping::Parallax {
                container: OutputId::new("desc"),
                from_y: 0.0,
                to_y: 25.0,
            },
            &viewport(),
        );

        let mut sink = RecordingSink::new();
        animator.run(frame(0.0), &viewport(), &mut sink);
        assert!(sink.writes().is_empty());
    }

    #[test]
    fn parallax_is_linear_between_endpoints() {
        let vp = viewport();
        let bounds = Rect {
            top: 0.0,
            bottom: 1000.0,
            height: 1000.0,
        };
        let mut animator = SectionAnimator::new(
            bounds,
            Mapping::Parallax {
                container: OutputId::new("desc"),
                from_y: 0.0,
                to_y: 25.0,
            },
            &vp,
        );

        let mut sink = RecordingSink::new();
        animator.run(frame(500.0), &vp, &mut sink);

        // visible on load: progress = 500 / 1000 = 0.5 -> y = 12.5px.
        let write = sink.last_for(&OutputId::new("desc")).unwrap();
        assert_eq!(write.css, "translate3d(0, 12.5px, 0)");
    }

    #[test]
    fn image_reveal_writes_both_outputs() {
        let vp = viewport();
        let bounds = Rect {
            top: 100.0,
            bottom: 900.0,
            height: 800.0,
        };
        let mut animator = SectionAnimator::new(
            bounds,
            Mapping::ImageReveal {
                overflow: OutputId::new("overflow"),
                image: OutputId::new("image"),
                style: OverflowStyle::Eased,
            },
            &vp,
        );

        let mut sink = RecordingSink::new();
        animator.run(frame(450.0), &vp, &mut sink);

        // visible on load: progress = 450 / 900 = 0.5.
        let progress: f64 = 0.5;
        let expected_overflow = math::denormalize(Ease::OutQuint.apply(progress), -260.0, 0.0);
        let expected_image = math::denormalize(progress, 100.0, 0.0);

        let overflow = sink.last_for(&OutputId::new("overflow")).unwrap();
        let image = sink.last_for(&OutputId::new("image")).unwrap();
        assert_eq!(overflow.transform, Translate3d::y_px(expected_overflow));
        assert_eq!(image.transform, Translate3d::y_px(expected_image));
    }

    #[test]
    fn two_phase_style_switches_halfway() {
        let vp = viewport();
        let bounds = Rect {
            top: 100.0,
            bottom: 900.0,
            height: 800.0,
        };
        let mut animator = SectionAnimator::new(
            bounds,
            Mapping::ImageReveal {
                overflow: OutputId::new("overflow"),
                image: OutputId::new("image"),
                style: OverflowStyle::TwoPhase,
            },
            &vp,
        );

        // current = 450 equals bottom*0.5 exactly: phase_a clamps to 1, so
        // the second phase applies with phase_b = 0 -> -260px.
        let mut sink = RecordingSink::new();
        animator.run(frame(450.0), &vp, &mut sink);
        let overflow = sink.last_for(&OutputId::new("overflow")).unwrap();
        assert_eq!(overflow.transform, Translate3d::y_px(-260.0));
    }

    #[test]
    fn fixed_group_overrides_progress() {
        let vp = viewport();
        let bounds = Rect {
            top: 0.0,
            bottom: 800.0,
            height: 800.0,
        };
        let mut animator = SectionAnimator::new(
            bounds,
            Mapping::FixedGroup {
                container: OutputId::new("container"),
                overflow: OutputId::new("overflow"),
                image: OutputId::new("image"),
            },
            &vp,
        );

        let mut sink = RecordingSink::new();
        animator.run(frame(400.0), &vp, &mut sink);

        // progress = current / height = 0.5 regardless of the base formula.
        let container = sink.last_for(&OutputId::new("container")).unwrap();
        let overflow = sink.last_for(&OutputId::new("overflow")).unwrap();
        let image = sink.last_for(&OutputId::new("image")).unwrap();

        assert_eq!(container.transform, Translate3d::y_px(50.0));
        assert_eq!(overflow.transform, Translate3d::y_px(50.0));
        assert_eq!(image.transform, Translate3d::y_percent(-50.0));
    }

    #[test]
    fn exposes_model_and_mapping_read_access() {
        let vp = viewport();
        let bounds = Rect {
            top: 0.0,
            bottom: 1000.0,
            height: 1000.0,
        };
        let mapping = Mapping::Parallax {
            container: OutputId::new("desc"),
            from_y: 0.0,
            to_y: 25.0,
        };
        let mut animator = SectionAnimator::new(bounds, mapping.clone(), &vp);

        assert!(animator.model().is_visible());
        assert_eq!(animator.mapping(), &mapping);

        animator.run(frame(500.0), &vp, &mut RecordingSink::new());
        assert_eq!(animator.model().progress(), 0.5);
    }

    #[test]
    fn mapping_json_uses_kind_tag() {
        let mapping = Mapping::Parallax {
            container: OutputId::new("description__container"),
            from_y: 0.0,
            to_y: 25.0,
        };
        let json = serde_json::to_string(&mapping).unwrap();
        assert!(json.contains("\"kind\":\"parallax\""));

        let back: Mapping = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mapping);
    }
}
