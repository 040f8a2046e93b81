use crate::foundation::error::{MosaicError, MosaicResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Layout axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Leading to trailing.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Axis {
    /// The other axis.
    pub fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Extent of `size` along this axis.
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }
}

/// Insets expressed relative to the reading direction (left-to-right only).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DirectionalInsets {
    /// Top inset.
    #[serde(default)]
    pub top: f64,
    /// Leading inset.
    #[serde(default)]
    pub leading: f64,
    /// Bottom inset.
    #[serde(default)]
    pub bottom: f64,
    /// Trailing inset.
    #[serde(default)]
    pub trailing: f64,
}

impl DirectionalInsets {
    /// Zero insets.
    pub const ZERO: Self = Self {
        top: 0.0,
        leading: 0.0,
        bottom: 0.0,
        trailing: 0.0,
    };

    /// Insets with individual edges.
    pub const fn new(top: f64, leading: f64, bottom: f64, trailing: f64) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    /// Same inset on every edge.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn horizontal(self) -> f64 {
        self.leading + self.trailing
    }

    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }

    /// Shrink `rect` by these insets, never below zero size.
    pub fn inset_rect(self, rect: Rect) -> Rect {
        let x0 = rect.x0 + self.leading;
        let y0 = rect.y0 + self.top;
        let x1 = (rect.x1 - self.trailing).max(x0);
        let y1 = (rect.y1 - self.bottom).max(y0);
        Rect::new(x0, y0, x1, y1)
    }

    /// Grow `rect` by these insets.
    pub fn outset_rect(self, rect: Rect) -> Rect {
        Rect::new(
            rect.x0 - self.leading,
            rect.y0 - self.top,
            rect.x1 + self.trailing,
            rect.y1 + self.bottom,
        )
    }

    /// Check every edge is finite and non-negative.
    pub fn validate(self, what: &str) -> MosaicResult<()> {
        for (edge, value) in [
            ("top", self.top),
            ("leading", self.leading),
            ("bottom", self.bottom),
            ("trailing", self.trailing),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MosaicError::validation(format!(
                    "{what}.{edge} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Position of an item (or of a section-scoped element) in the collection.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct IndexPath {
    pub section: usize,
    pub item: usize,
}

impl IndexPath {
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

impl std::fmt::Display for IndexPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.section, self.item)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
