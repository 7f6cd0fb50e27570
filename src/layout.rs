use crate::{
    animator::Mapping,
    core::{OutputId, Rect},
    error::{PagedriftError, PagedriftResult},
    intro::IntroTrack,
};

/// Host-measured description of the page: the content root's scrollable
/// height, the top-level section containers the smoothed offset is applied
/// to, and the animated regions with their output bindings.
///
/// This is the document the binary consumes as JSON; a browser adapter
/// builds it from `getBoundingClientRect` measurements instead.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PageLayout {
    pub scroll_height: f64,
    pub section_containers: Vec<OutputId>,
    pub sections: Vec<SectionSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<Vec<IntroTrack>>,
}

/// One animated region: its static layout rectangle plus the mapping that
/// turns scroll progress into transforms.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SectionSpec {
    pub bounds: Rect,
    pub mapping: Mapping,
}

impl PageLayout {
    pub fn validate(&self) -> PagedriftResult<()> {
        if !(self.scroll_height.is_finite() && self.scroll_height > 0.0) {
            return Err(PagedriftError::validation(
                "scroll_height must be a positive finite number",
            ));
        }
        if self.section_containers.is_empty() {
            return Err(PagedriftError::validation(
                "layout needs at least one section container",
            ));
        }
        for id in &self.section_containers {
            if id.0.trim().is_empty() {
                return Err(PagedriftError::validation(
                    "section container ids must be non-empty",
                ));
            }
        }

        for (i, section) in self.sections.iter().enumerate() {
            let b = section.bounds;
            if !(b.top.is_finite() && b.bottom.is_finite() && b.height.is_finite()) {
                return Err(PagedriftError::validation(format!(
                    "section {i} bounds must be finite"
                )));
            }
            if b.bottom < b.top {
                return Err(PagedriftError::validation(format!(
                    "section {i} has bottom above top"
                )));
            }
            if b.height <= 0.0 {
                return Err(PagedriftError::validation(format!(
                    "section {i} height must be > 0"
                )));
            }
            for id in section.mapping_outputs() {
                if id.0.trim().is_empty() {
                    return Err(PagedriftError::validation(format!(
                        "section {i} binds an empty output id"
                    )));
                }
            }
        }

        Ok(())
    }
}

impl SectionSpec {
    /// All output ids this section writes to.
    pub fn mapping_outputs(&self) -> Vec<&OutputId> {
        match &self.mapping {
            Mapping::ImageReveal {
                overflow, image, ..
            } => vec![overflow, image],
            Mapping::Parallax { container, .. } => vec![container],
            Mapping::FixedGroup {
                container,
                overflow,
                image,
            } => vec![container, overflow, image],
        }
    }
}

/// The layout of the page this engine was written for, usable as a fixture
/// and as the default document for the CLI.
pub fn stock_page_layout() -> PageLayout {
    PageLayout {
        scroll_height: 3200.0,
        section_containers: vec![OutputId::new("section-hero"), OutputId::new("section-body")],
        sections: vec![
            SectionSpec {
                bounds: Rect {
                    top: 120.0,
                    bottom: 980.0,
                    height: 860.0,
                },
                mapping: Mapping::ImageReveal {
                    overflow: OutputId::new("right-image__overflow"),
                    image: OutputId::new("right-image__container"),
                    style: Default::default(),
                },
            },
            SectionSpec {
                bounds: Rect {
                    top: 1040.0,
                    bottom: 1760.0,
                    height: 720.0,
                },
                mapping: Mapping::Parallax {
                    container: OutputId::new("description__container"),
                    from_y: 0.0,
                    to_y: 25.0,
                },
            },
            SectionSpec {
                bounds: Rect {
                    top: 2400.0,
                    bottom: 2800.0,
                    height: 400.0,
                },
                mapping: Mapping::FixedGroup {
                    container: OutputId::new("sign-up__container"),
                    overflow: OutputId::new("image-two-overflow"),
                    image: OutputId::new("image-two"),
                },
            },
        ],
        intro: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_layout_validates() {
        assert!(stock_page_layout().validate().is_ok());
    }

    #[test]
    fn json_round_trip() {
        let layout = stock_page_layout();
        let json = serde_json::to_string_pretty(&layout).unwrap();
        let back: PageLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(back.scroll_height, 3200.0);
        assert_eq!(back.sections.len(), 3);
        back.validate().unwrap();
    }

    #[test]
    fn rejects_bad_scroll_height() {
        let mut layout = stock_page_layout();
        layout.scroll_height = 0.0;
        assert!(layout.validate().is_err());
    }

    #[test]
    fn rejects_empty_containers() {
        let mut layout = stock_page_layout();
        layout.section_containers.clear();
        assert!(layout.validate().is_err());
    }

    #[test]
    fn rejects_inverted_bounds() {
        let mut layout = stock_page_layout();
        layout.sections[0].bounds = Rect {
            top: 900.0,
            bottom: 100.0,
            height: 800.0,
        };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn rejects_empty_output_binding() {
        let mut layout = stock_page_layout();
        layout.sections[1].mapping = Mapping::Parallax {
            container: OutputId::new("  "),
            from_y: 0.0,
            to_y: 25.0,
        };
        assert!(layout.validate().is_err());
    }
}
