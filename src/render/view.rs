//! Views are plain descriptors: a style preset composed with content.
//!
//! There is no view hierarchy to subclass. A cell, a supplementary view and a background are all
//! the same [`View`] type, produced by [`render`] from a [`ViewStyle`] and optional text.

use crate::foundation::core::{DirectionalInsets, Rect};
use crate::foundation::metrics;
use crate::layout::solver::LayoutAttributes;

/// Named colors used by the view presets and demo screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Clear,
    White,
    Label,
    Red,
    Yellow,
    Brown,
    Mint,
    Pink,
    Cyan,
    Blue,
}

impl Color {
    /// Straight-alpha RGBA8 value.
    pub fn rgba8(self) -> [u8; 4] {
        match self {
            Self::Clear => [0, 0, 0, 0],
            Self::White => [255, 255, 255, 255],
            Self::Label => [0, 0, 0, 255],
            Self::Red => [255, 59, 48, 255],
            Self::Yellow => [255, 204, 0, 255],
            Self::Brown => [162, 132, 94, 255],
            Self::Mint => [0, 199, 190, 255],
            Self::Pink => [255, 45, 85, 255],
            Self::Cyan => [50, 173, 230, 255],
            Self::Blue => [0, 122, 255, 255],
        }
    }

    pub fn is_opaque(self) -> bool {
        self.rgba8()[3] == 255
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Font {
    pub size: f64,
    #[serde(default)]
    pub weight: FontWeight,
}

impl Font {
    pub const fn new(size: f64, weight: FontWeight) -> Self {
        Self { size, weight }
    }

    pub const fn body() -> Self {
        Self::new(metrics::LARGE_FONT_SIZE, FontWeight::Regular)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Border {
    pub width: f64,
    pub color: Color,
}

/// Visual attributes of a view, independent of its content.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewStyle {
    pub background: Color,
    pub text_color: Color,
    pub font: Font,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(default)]
    pub corner_radius: f64,
    /// Space between the view's frame and its text.
    #[serde(default)]
    pub label_insets: DirectionalInsets,
    #[serde(default)]
    pub multiline: bool,
}

const LABEL_INSETS: DirectionalInsets = DirectionalInsets::new(
    metrics::SHORT_INSET,
    metrics::MEDIUM_INSET,
    metrics::SHORT_INSET,
    metrics::MEDIUM_INSET,
);

impl ViewStyle {
    /// Grid cell: white multiline text on blue, thin cyan border.
    pub fn collection_cell() -> Self {
        Self {
            background: Color::Blue,
            text_color: Color::White,
            font: Font::body(),
            border: Some(Border {
                width: 1.0,
                color: Color::Cyan,
            }),
            corner_radius: 0.0,
            label_insets: LABEL_INSETS,
            multiline: true,
        }
    }

    /// Plain list row.
    pub fn table_cell() -> Self {
        Self {
            background: Color::Clear,
            text_color: Color::Label,
            font: Font::body(),
            border: None,
            corner_radius: 0.0,
            label_insets: LABEL_INSETS,
            multiline: true,
        }
    }

    /// Headers, footers and badges. The background comes from the view model.
    pub fn supplementary() -> Self {
        Self {
            background: Color::Clear,
            text_color: Color::White,
            font: Font::new(20.0, FontWeight::Medium),
            border: Some(Border {
                width: 1.0,
                color: Color::White,
            }),
            corner_radius: 0.0,
            label_insets: DirectionalInsets::uniform(metrics::SMALL_INSET),
            multiline: false,
        }
    }

    /// Section background decoration.
    pub fn section_background() -> Self {
        Self {
            background: Color::Red,
            text_color: Color::Clear,
            font: Font::body(),
            border: Some(Border {
                width: 3.0,
                color: Color::Mint,
            }),
            corner_radius: 2.0 * metrics::DEFAULT_CORNER_RADIUS,
            label_insets: DirectionalInsets::ZERO,
            multiline: false,
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }
}

/// Content of a supplementary view: text plus the style attributes it overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SupplementaryViewModel {
    pub text: String,
    #[serde(default)]
    pub background: Color,
}

impl SupplementaryViewModel {
    pub fn new(text: impl Into<String>, background: Color) -> Self {
        Self {
            text: text.into(),
            background,
        }
    }
}

/// A configured view, not yet placed.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct View {
    /// Name of the template the view was dequeued from.
    pub template: &'static str,
    pub style: ViewStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Compose a style with content.
pub fn render(template: &'static str, style: ViewStyle, text: Option<String>) -> View {
    View {
        template,
        style,
        text,
    }
}

/// A view together with the layout attributes it was placed with.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlacedView {
    pub attributes: LayoutAttributes,
    /// Frame of the text, when the view shows any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_frame: Option<Rect>,
    pub view: View,
}

impl PlacedView {
    pub fn z_index(&self) -> i32 {
        self.attributes.z_index
    }
}

/// Apply layout attributes (frame and z-index) to a view.
pub fn place(view: View, attributes: LayoutAttributes) -> PlacedView {
    let label_frame = view
        .text
        .as_ref()
        .map(|_| view.style.label_insets.inset_rect(attributes.frame));
    PlacedView {
        attributes,
        label_frame,
        view,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/view.rs"]
mod tests;
