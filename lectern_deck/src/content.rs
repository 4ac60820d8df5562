// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The authored content document.
//!
//! Field names follow the camelCase JSON produced by the authoring tool.
//! Only the parts the engine needs are modelled; widget parameters stay
//! opaque in [`ActionContent::params`].

use core::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A slide deck as authored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    /// Slides in presentation order.
    #[serde(default)]
    pub slides: Vec<SlideContent>,
}

/// One authored slide.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideContent {
    /// Positioned elements, in paint order.
    #[serde(default)]
    pub elements: Vec<ElementContent>,
    /// Title keywords; the first one names the slide.
    #[serde(default)]
    pub keywords: Vec<Keyword>,
}

/// Title metadata attached to a slide.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyword {
    /// Display text.
    pub main: String,
}

/// One element placed on a slide.
///
/// Geometry is in percent of the slide size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementContent {
    /// Left edge.
    #[serde(default)]
    pub x: f64,
    /// Top edge.
    #[serde(default)]
    pub y: f64,
    /// Width.
    #[serde(default)]
    pub width: f64,
    /// Height.
    #[serde(default)]
    pub height: f64,
    /// The widget this element hosts.
    pub action: ActionContent,
    /// Render the widget behind a button that opens it in a popup.
    #[serde(default)]
    pub display_as_button: bool,
    /// Keep feedback comments visible after answering.
    #[serde(default)]
    pub always_display_comments: bool,
    /// Author-supplied solution text shown in solution mode.
    #[serde(default)]
    pub solution: Option<String>,
}

/// Widget reference handed to an [`ActionFactory`](crate::ActionFactory).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionContent {
    /// Widget library identifier, e.g. `"MultiChoice 1.16"`.
    pub library: String,
    /// Widget parameters, passed through untouched.
    #[serde(default)]
    pub params: Value,
    /// Stable id of this widget instance, if the author tool assigned one.
    #[serde(default)]
    pub sub_content_id: Option<String>,
}

impl Presentation {
    /// Parses a content document from JSON.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let presentation: Self = serde_json::from_str(json).map_err(ContentError::Json)?;
        presentation.validate()?;
        Ok(presentation)
    }

    /// Checks the structural requirements the engine relies on.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.slides.is_empty() {
            return Err(ContentError::NoSlides);
        }
        for (slide, content) in self.slides.iter().enumerate() {
            for (element, el) in content.elements.iter().enumerate() {
                let finite = [el.x, el.y, el.width, el.height]
                    .iter()
                    .all(|v| v.is_finite());
                if !finite {
                    return Err(ContentError::InvalidGeometry { slide, element });
                }
            }
        }
        Ok(())
    }
}

/// Error returned when a content document cannot be used.
#[derive(Debug)]
pub enum ContentError {
    /// The document is not valid JSON for this schema.
    Json(serde_json::Error),
    /// The deck has no slides.
    NoSlides,
    /// An element has non-finite geometry.
    InvalidGeometry {
        /// Slide index.
        slide: usize,
        /// Element ordinal on the slide.
        element: usize,
    },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "malformed content document: {err}"),
            Self::NoSlides => f.write_str("presentation has no slides"),
            Self::InvalidGeometry { slide, element } => {
                write!(f, "element {element} on slide {slide} has non-finite geometry")
            }
        }
    }
}

impl core::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::NoSlides | Self::InvalidGeometry { .. } => None,
        }
    }
}
