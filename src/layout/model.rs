use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::{
    foundation::core::{Axis, DirectionalInsets, Vec2},
    foundation::error::{MosaicError, MosaicResult},
    foundation::metrics,
    layout::dimension::{Dimension, LayoutSize},
    layout::environment::LayoutEnvironment,
    layout::kind::{DecorationKind, SupplementaryKind},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// A position on the boundary (or in the middle) of a rectangle.
pub enum RectAlignment {
    Center,
    #[default]
    Top,
    TopLeading,
    Leading,
    BottomLeading,
    Bottom,
    BottomTrailing,
    Trailing,
    TopTrailing,
}

/// Where an element sits along one axis of its container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisPlacement {
    Start,
    Center,
    End,
}

impl RectAlignment {
    pub fn horizontal(self) -> AxisPlacement {
        match self {
            Self::TopLeading | Self::Leading | Self::BottomLeading => AxisPlacement::Start,
            Self::TopTrailing | Self::Trailing | Self::BottomTrailing => AxisPlacement::End,
            Self::Center | Self::Top | Self::Bottom => AxisPlacement::Center,
        }
    }

    pub fn vertical(self) -> AxisPlacement {
        match self {
            Self::TopLeading | Self::Top | Self::TopTrailing => AxisPlacement::Start,
            Self::BottomLeading | Self::Bottom | Self::BottomTrailing => AxisPlacement::End,
            Self::Center | Self::Leading | Self::Trailing => AxisPlacement::Center,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Anchor of a supplementary item relative to the item or group that owns it.
pub struct ContainerAnchor {
    pub alignment: RectAlignment,
    /// Offset in units of the supplementary item's own size.
    #[serde(default = "zero_offset")]
    pub fractional_offset: Vec2,
}

fn zero_offset() -> Vec2 {
    Vec2::ZERO
}

impl ContainerAnchor {
    pub const fn new(alignment: RectAlignment) -> Self {
        Self {
            alignment,
            fractional_offset: Vec2::ZERO,
        }
    }

    pub const fn with_offset(alignment: RectAlignment, x: f64, y: f64) -> Self {
        Self {
            alignment,
            fractional_offset: Vec2::new(x, y),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A non-data view attached to an item or group, such as a badge.
pub struct SupplementaryItem {
    pub size: LayoutSize,
    pub kind: SupplementaryKind,
    pub anchor: ContainerAnchor,
    #[serde(default = "default_supplementary_z_index")]
    pub z_index: i32,
}

fn default_supplementary_z_index() -> i32 {
    1
}

impl SupplementaryItem {
    pub fn new(size: LayoutSize, kind: SupplementaryKind, anchor: ContainerAnchor) -> Self {
        Self {
            size,
            kind,
            anchor,
            z_index: default_supplementary_z_index(),
        }
    }

    pub fn z_index(mut self, z: i32) -> Self {
        self.z_index = z;
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A non-data view attached to an edge of a section or of the whole surface.
pub struct BoundarySupplementaryItem {
    pub size: LayoutSize,
    pub kind: SupplementaryKind,
    pub alignment: RectAlignment,
    /// Keep the element on screen while any part of its section is visible.
    #[serde(default)]
    pub pin_to_visible_bounds: bool,
    /// Reserve space for the element instead of overlapping the content.
    #[serde(default = "default_true")]
    pub extends_boundary: bool,
    #[serde(default)]
    pub z_index: i32,
}

fn default_true() -> bool {
    true
}

impl BoundarySupplementaryItem {
    pub fn new(size: LayoutSize, kind: SupplementaryKind, alignment: RectAlignment) -> Self {
        Self {
            size,
            kind,
            alignment,
            pin_to_visible_bounds: false,
            extends_boundary: true,
            z_index: 0,
        }
    }

    pub fn pinned(mut self) -> Self {
        self.pin_to_visible_bounds = true;
        self
    }

    pub fn overlapping(mut self) -> Self {
        self.extends_boundary = false;
        self
    }

    pub fn z_index(mut self, z: i32) -> Self {
        self.z_index = z;
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A non-data visual spanning a section, drawn behind (or above) its content.
pub struct DecorationItem {
    pub kind: DecorationKind,
    /// Size relative to the section frame.
    #[serde(default = "LayoutSize::full")]
    pub size: LayoutSize,
    #[serde(default)]
    pub content_insets: DirectionalInsets,
    #[serde(default = "default_decoration_z_index")]
    pub z_index: i32,
}

fn default_decoration_z_index() -> i32 {
    -1
}

impl DecorationItem {
    /// A decoration covering the whole section, behind its content.
    pub fn background(kind: DecorationKind) -> Self {
        Self {
            kind,
            size: LayoutSize::full(),
            content_insets: DirectionalInsets::ZERO,
            z_index: default_decoration_z_index(),
        }
    }

    pub fn content_insets(mut self, insets: DirectionalInsets) -> Self {
        self.content_insets = insets;
        self
    }

    pub fn z_index(mut self, z: i32) -> Self {
        self.z_index = z;
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Leaf layout node holding one piece of content.
pub struct Item {
    pub size: LayoutSize,
    #[serde(default)]
    pub content_insets: DirectionalInsets,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supplementary_items: Vec<SupplementaryItem>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
/// A child of a [`Group`].
pub enum GroupChild {
    Item(Item),
    Group(Group),
}

impl From<Item> for GroupChild {
    fn from(value: Item) -> Self {
        Self::Item(value)
    }
}

impl From<Group> for GroupChild {
    fn from(value: Group) -> Self {
        Self::Group(value)
    }
}

impl GroupChild {
    pub fn size(&self) -> LayoutSize {
        match self {
            Self::Item(i) => i.size,
            Self::Group(g) => g.size,
        }
    }

    /// Number of content items one instance of this child consumes.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Item(_) => 1,
            Self::Group(g) => g.leaf_count(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Composite layout node arranging children along one axis.
pub struct Group {
    pub size: LayoutSize,
    pub axis: Axis,
    pub children: Vec<GroupChild>,
    /// Replicate the single child this many times along the axis, splitting the group's extent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<NonZeroUsize>,
    #[serde(default)]
    pub inter_item_spacing: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supplementary_items: Vec<SupplementaryItem>,
}

impl Group {
    /// Number of content items one instance of this group consumes.
    pub fn leaf_count(&self) -> usize {
        let per_pass: usize = self.children.iter().map(GroupChild::leaf_count).sum();
        match self.repeat {
            Some(n) => per_pass * n.get(),
            None => per_pass,
        }
    }

    /// Children in placement order, with repeats expanded.
    pub fn expanded_children(&self) -> impl Iterator<Item = &GroupChild> {
        let times = self.repeat.map_or(1, NonZeroUsize::get);
        (0..times).flat_map(move |_| self.children.iter())
    }

    fn validate(&self, path: &str) -> MosaicResult<()> {
        self.size.validate(&format!("{path}.size"))?;
        if self.children.is_empty() {
            return Err(MosaicError::validation(format!(
                "{path} must have at least one child"
            )));
        }
        if self.repeat.is_some() && self.children.len() != 1 {
            return Err(MosaicError::validation(format!(
                "{path} repeats its child but has {} children",
                self.children.len()
            )));
        }
        if !self.inter_item_spacing.is_finite() || self.inter_item_spacing < 0.0 {
            return Err(MosaicError::validation(format!(
                "{path}.inter_item_spacing must be finite and >= 0"
            )));
        }
        for (idx, s) in self.supplementary_items.iter().enumerate() {
            s.size
                .validate(&format!("{path}.supplementary_items[{idx}].size"))?;
        }
        for (idx, child) in self.children.iter().enumerate() {
            match child {
                GroupChild::Item(item) => {
                    let item_path = format!("{path}.children[{idx}]");
                    item.size.validate(&format!("{item_path}.size"))?;
                    item.content_insets
                        .validate(&format!("{item_path}.content_insets"))?;
                    for (s_idx, s) in item.supplementary_items.iter().enumerate() {
                        s.size.validate(&format!(
                            "{item_path}.supplementary_items[{s_idx}].size"
                        ))?;
                    }
                }
                GroupChild::Group(g) => g.validate(&format!("{path}.children[{idx}]"))?,
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// How a section scrolls across the main scrolling axis.
pub enum OrthogonalScrolling {
    /// Groups wrap onto new rows along the main axis.
    #[default]
    None,
    Continuous,
    /// Continuous, settling on the leading edge of a group.
    ContinuousLeadingEdge,
    /// Pages the width of the visible bounds.
    Paging,
    /// Pages one group at a time.
    GroupPaging,
    /// Pages one group at a time, centering it.
    GroupPagingCentered,
}

impl OrthogonalScrolling {
    pub fn is_orthogonal(self) -> bool {
        self != Self::None
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Appearance preset for list sections.
pub enum ListAppearance {
    #[default]
    Plain,
    Grouped,
    InsetGrouped,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One scrollable or paged region of the surface.
pub struct Section {
    pub group: Group,
    #[serde(default)]
    pub content_insets: DirectionalInsets,
    #[serde(default)]
    pub inter_group_spacing: f64,
    #[serde(default)]
    pub orthogonal_scrolling: OrthogonalScrolling,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub boundary_supplementary_items: Vec<BoundarySupplementaryItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decoration_items: Vec<DecorationItem>,
}

impl Section {
    /// A section whose root group is `group`, with no insets or attachments.
    pub fn new(group: Group) -> Self {
        Self {
            group,
            content_insets: DirectionalInsets::ZERO,
            inter_group_spacing: 0.0,
            orthogonal_scrolling: OrthogonalScrolling::None,
            boundary_supplementary_items: Vec::new(),
            decoration_items: Vec::new(),
        }
    }

    /// Full-width rows of estimated height, one item per row.
    pub fn list(appearance: ListAppearance) -> Self {
        let size = LayoutSize::new(
            Dimension::full_width(),
            Dimension::estimated(metrics::ESTIMATED_SIZE),
        );
        let item = Item {
            size,
            content_insets: DirectionalInsets::ZERO,
            supplementary_items: Vec::new(),
        };
        let group = Group {
            size,
            axis: Axis::Vertical,
            children: vec![item.into()],
            repeat: None,
            inter_item_spacing: 0.0,
            supplementary_items: Vec::new(),
        };
        let mut section = Self::new(group);
        match appearance {
            ListAppearance::Plain => {}
            ListAppearance::Grouped => {
                section.content_insets = DirectionalInsets::new(
                    metrics::LARGE_INSET,
                    0.0,
                    metrics::LARGE_INSET,
                    0.0,
                );
            }
            ListAppearance::InsetGrouped => {
                section.content_insets = DirectionalInsets::new(
                    metrics::LARGE_INSET,
                    metrics::MEDIUM_INSET,
                    metrics::LARGE_INSET,
                    metrics::MEDIUM_INSET,
                );
            }
        }
        section
    }

    /// Number of content items one instance of the root group consumes.
    pub fn items_per_group(&self) -> usize {
        self.group.leaf_count()
    }

    /// Number of root-group instances needed for `item_count` items.
    pub fn group_count(&self, item_count: usize) -> usize {
        let per_group = self.items_per_group();
        if per_group == 0 {
            return 0;
        }
        item_count.div_ceil(per_group)
    }

    /// Validate invariants of a deserialized section.
    pub fn validate(&self) -> MosaicResult<()> {
        self.group.validate("section.group")?;
        self.content_insets.validate("section.content_insets")?;
        if !self.inter_group_spacing.is_finite() || self.inter_group_spacing < 0.0 {
            return Err(MosaicError::validation(
                "section.inter_group_spacing must be finite and >= 0",
            ));
        }
        for (idx, b) in self.boundary_supplementary_items.iter().enumerate() {
            b.size
                .validate(&format!("section.boundary_supplementary_items[{idx}].size"))?;
        }
        for (idx, d) in self.decoration_items.iter().enumerate() {
            d.size
                .validate(&format!("section.decoration_items[{idx}].size"))?;
            d.content_insets
                .validate(&format!("section.decoration_items[{idx}].content_insets"))?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Surface-wide settings of a layout.
pub struct LayoutConfiguration {
    #[serde(default)]
    pub inter_section_spacing: f64,
    /// Boundary items attached to the whole surface rather than one section.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub boundary_supplementary_items: Vec<BoundarySupplementaryItem>,
}

impl LayoutConfiguration {
    pub fn validate(&self) -> MosaicResult<()> {
        if !self.inter_section_spacing.is_finite() || self.inter_section_spacing < 0.0 {
            return Err(MosaicError::validation(
                "configuration.inter_section_spacing must be finite and >= 0",
            ));
        }
        for (idx, b) in self.boundary_supplementary_items.iter().enumerate() {
            b.size.validate(&format!(
                "configuration.boundary_supplementary_items[{idx}].size"
            ))?;
        }
        Ok(())
    }
}

/// Callback producing the section for an index during a measurement pass.
pub type SectionProviderFn = dyn Fn(usize, &LayoutEnvironment) -> Option<Section> + Send + Sync;

#[derive(Clone)]
/// Where a layout's sections come from.
pub enum SectionSource {
    /// One section shape reused for every section.
    Static(Section),
    /// Evaluated per section, per measurement pass.
    Dynamic(Arc<SectionProviderFn>),
}

impl fmt::Debug for SectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(s) => f.debug_tuple("Static").field(s).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

#[derive(Clone, Debug)]
/// A complete, immutable layout description.
///
/// Rebuilding a layout (for instance after a rotation) means running the construction code again;
/// there is no way to mutate one in place.
pub struct CompositionalLayout {
    source: SectionSource,
    configuration: LayoutConfiguration,
}

impl CompositionalLayout {
    /// Static layout: `section` is used for every section.
    pub fn new(section: Section) -> Self {
        Self::with_configuration(SectionSource::Static(section), LayoutConfiguration::default())
    }

    /// Dynamic layout: `provider` is asked for each section on every measurement pass.
    pub fn dynamic<F>(provider: F) -> Self
    where
        F: Fn(usize, &LayoutEnvironment) -> Option<Section> + Send + Sync + 'static,
    {
        Self::with_configuration(
            SectionSource::Dynamic(Arc::new(provider)),
            LayoutConfiguration::default(),
        )
    }

    pub fn with_configuration(source: SectionSource, configuration: LayoutConfiguration) -> Self {
        Self {
            source,
            configuration,
        }
    }

    pub fn source(&self) -> &SectionSource {
        &self.source
    }

    pub fn configuration(&self) -> &LayoutConfiguration {
        &self.configuration
    }

    /// Section for `index` in the pass described by `env`.
    pub fn section_for(&self, index: usize, env: &LayoutEnvironment) -> Option<Section> {
        match &self.source {
            SectionSource::Static(s) => Some(s.clone()),
            SectionSource::Dynamic(provider) => provider(index, env),
        }
    }

    /// Materialise the sections of one pass as plain data.
    pub fn resolve_sections(&self, section_count: usize, env: &LayoutEnvironment) -> LayoutDescription {
        LayoutDescription {
            environment: *env,
            configuration: self.configuration.clone(),
            sections: (0..section_count)
                .map(|idx| self.section_for(idx, env))
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// The sections one measurement pass saw, in order. `None` marks a section without content.
pub struct LayoutDescription {
    pub environment: LayoutEnvironment,
    pub configuration: LayoutConfiguration,
    pub sections: Vec<Option<Section>>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A static layout written as a JSON document, with the item counts to lay out.
pub struct LayoutDocument {
    #[serde(default)]
    pub configuration: LayoutConfiguration,
    pub section: Section,
    /// Items per section; one entry per section.
    pub item_counts: Vec<usize>,
}

impl LayoutDocument {
    pub fn validate(&self) -> MosaicResult<()> {
        self.configuration.validate()?;
        self.section.validate()?;
        if self.item_counts.is_empty() {
            return Err(MosaicError::validation(
                "item_counts must name at least one section",
            ));
        }
        Ok(())
    }

    pub fn into_layout(self) -> (CompositionalLayout, Vec<usize>) {
        (
            CompositionalLayout::with_configuration(
                SectionSource::Static(self.section),
                self.configuration,
            ),
            self.item_counts,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/model.rs"]
mod tests;
