use crate::foundation::core::{Axis, Size};
use crate::foundation::error::{MosaicError, MosaicResult};

/// A proportion of a container axis, always within `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Fraction(f64);

impl Fraction {
    pub const ZERO: Self = Self(0.0);
    pub const HALF: Self = Self(0.5);
    pub const ONE: Self = Self(1.0);

    /// Build a fraction, rejecting NaN and values outside `[0, 1]`.
    pub fn new(value: f64) -> MosaicResult<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(MosaicError::validation(format!(
                "fraction must be within [0, 1], got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Fraction {
    type Error = MosaicError;

    fn try_from(value: f64) -> MosaicResult<Self> {
        Self::new(value)
    }
}

impl From<Fraction> for f64 {
    fn from(value: Fraction) -> Self {
        value.0
    }
}

/// Sizing mode for one axis of a layout element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Dimension {
    /// A fraction of the container's extent along `of`.
    Fractional { of: Axis, fraction: Fraction },
    /// A fixed extent in points.
    Absolute { points: f64 },
    /// A starting estimate in points, refined once the content has been measured.
    Estimated { points: f64 },
}

impl Dimension {
    /// A fraction of the container width.
    pub fn fractional_width(fraction: f64) -> MosaicResult<Self> {
        Ok(Self::Fractional {
            of: Axis::Horizontal,
            fraction: Fraction::new(fraction)?,
        })
    }

    /// A fraction of the container height.
    pub fn fractional_height(fraction: f64) -> MosaicResult<Self> {
        Ok(Self::Fractional {
            of: Axis::Vertical,
            fraction: Fraction::new(fraction)?,
        })
    }

    pub const fn full_width() -> Self {
        Self::Fractional {
            of: Axis::Horizontal,
            fraction: Fraction::ONE,
        }
    }

    pub const fn full_height() -> Self {
        Self::Fractional {
            of: Axis::Vertical,
            fraction: Fraction::ONE,
        }
    }

    pub const fn absolute(points: f64) -> Self {
        Self::Absolute { points }
    }

    pub const fn estimated(points: f64) -> Self {
        Self::Estimated { points }
    }

    pub fn is_estimated(self) -> bool {
        matches!(self, Self::Estimated { .. })
    }

    /// Resolve against the container the element is laid out in.
    ///
    /// Estimated dimensions resolve to their estimate: no content is measured here.
    pub fn resolve(self, container: Size) -> f64 {
        match self {
            Self::Fractional { of, fraction } => of.extent(container) * fraction.get(),
            Self::Absolute { points } | Self::Estimated { points } => points,
        }
    }

    /// Check point values of deserialized dimensions.
    pub fn validate(self) -> MosaicResult<()> {
        match self.invalid_points() {
            Some(points) => Err(MosaicError::validation(format!(
                "dimension points must be finite and >= 0, got {points}"
            ))),
            None => Ok(()),
        }
    }

    fn invalid_points(self) -> Option<f64> {
        match self {
            Self::Fractional { .. } => None,
            Self::Absolute { points } | Self::Estimated { points } => {
                (!points.is_finite() || points < 0.0).then_some(points)
            }
        }
    }
}

/// Width and height sizing modes of an element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutSize {
    pub width: Dimension,
    pub height: Dimension,
}

impl LayoutSize {
    pub const fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }

    /// Fills the container on both axes.
    pub const fn full() -> Self {
        Self::new(Dimension::full_width(), Dimension::full_height())
    }

    pub fn resolve(self, container: Size) -> Size {
        Size::new(
            self.width.resolve(container),
            self.height.resolve(container),
        )
    }

    /// Check both dimensions; errors name the offending one under `what`.
    pub fn validate(self, what: &str) -> MosaicResult<()> {
        for (axis, dimension) in [("width", self.width), ("height", self.height)] {
            if let Some(points) = dimension.invalid_points() {
                return Err(MosaicError::validation(format!(
                    "{what}.{axis} points must be finite and >= 0, got {points}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/dimension.rs"]
mod tests;
