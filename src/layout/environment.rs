use crate::foundation::core::Size;

/// Width at or above which the horizontal size class is regular.
pub const REGULAR_WIDTH_THRESHOLD: f64 = 600.0;
/// Height at or above which the vertical size class is regular.
pub const REGULAR_HEIGHT_THRESHOLD: f64 = 500.0;

/// Coarse classification of an available extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    #[default]
    Compact,
    Regular,
}

/// What a section provider may inspect during one measurement pass.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutEnvironment {
    /// Content size of the scrollable surface.
    pub container: Size,
    #[serde(default)]
    pub horizontal_size_class: SizeClass,
    #[serde(default)]
    pub vertical_size_class: SizeClass,
}

impl LayoutEnvironment {
    /// Environment with size classes derived from the container size.
    pub fn from_container(container: Size) -> Self {
        Self {
            container,
            horizontal_size_class: classify(container.width, REGULAR_WIDTH_THRESHOLD),
            vertical_size_class: classify(container.height, REGULAR_HEIGHT_THRESHOLD),
        }
    }

    pub fn new(
        container: Size,
        horizontal_size_class: SizeClass,
        vertical_size_class: SizeClass,
    ) -> Self {
        Self {
            container,
            horizontal_size_class,
            vertical_size_class,
        }
    }

    /// A portrait phone: compact width, regular height.
    pub fn phone_portrait() -> Self {
        Self::from_container(Size::new(390.0, 844.0))
    }

    /// A landscape phone: regular width, compact height.
    pub fn phone_landscape() -> Self {
        Self::from_container(Size::new(844.0, 390.0))
    }

    /// Same size classes for a rotated container.
    pub fn rotated(self) -> Self {
        Self {
            container: Size::new(self.container.height, self.container.width),
            horizontal_size_class: self.vertical_size_class,
            vertical_size_class: self.horizontal_size_class,
        }
    }
}

fn classify(extent: f64, threshold: f64) -> SizeClass {
    if extent >= threshold {
        SizeClass::Regular
    } else {
        SizeClass::Compact
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/environment.rs"]
mod tests;
