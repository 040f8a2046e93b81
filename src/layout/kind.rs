use std::borrow::Cow;
use std::fmt;

/// Name of an application-defined element kind.
///
/// Custom kinds live in their own namespace: a custom kind can never be mistaken for one of the
/// built-in kinds, whatever its name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct CustomKind(Cow<'static, str>);

impl CustomKind {
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn owned(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Kind of a supplementary element (item-anchored or boundary).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplementaryKind {
    /// Header attached to the whole scrollable surface.
    Header,
    /// Footer attached to the whole scrollable surface.
    Footer,
    SectionHeader,
    SectionFooter,
    ItemBadge,
    GroupBadge,
    Custom(CustomKind),
}

impl SupplementaryKind {
    pub const fn custom(name: &'static str) -> Self {
        Self::Custom(CustomKind::new(name))
    }
}

impl fmt::Display for SupplementaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header => f.write_str("header"),
            Self::Footer => f.write_str("footer"),
            Self::SectionHeader => f.write_str("section-header"),
            Self::SectionFooter => f.write_str("section-footer"),
            Self::ItemBadge => f.write_str("item-badge"),
            Self::GroupBadge => f.write_str("group-badge"),
            Self::Custom(k) => write!(f, "custom:{}", k.as_str()),
        }
    }
}

/// Kind of a decoration element.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecorationKind {
    SectionBackground,
    Custom(CustomKind),
}

impl fmt::Display for DecorationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SectionBackground => f.write_str("section-background"),
            Self::Custom(k) => write!(f, "custom:{}", k.as_str()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/kind.rs"]
mod tests;
