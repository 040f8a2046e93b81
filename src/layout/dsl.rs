use std::num::NonZeroUsize;

use crate::{
    foundation::core::{Axis, DirectionalInsets},
    layout::dimension::LayoutSize,
    layout::environment::LayoutEnvironment,
    layout::model::{
        BoundarySupplementaryItem, CompositionalLayout, DecorationItem, Group, GroupChild, Item,
        LayoutConfiguration, OrthogonalScrolling, Section, SectionSource, SupplementaryItem,
    },
};

pub struct ItemBuilder {
    size: LayoutSize,
    content_insets: DirectionalInsets,
    supplementary_items: Vec<SupplementaryItem>,
}

impl ItemBuilder {
    pub fn new(size: LayoutSize) -> Self {
        Self {
            size,
            content_insets: DirectionalInsets::ZERO,
            supplementary_items: Vec::new(),
        }
    }

    pub fn content_insets(mut self, insets: DirectionalInsets) -> Self {
        self.content_insets = insets;
        self
    }

    pub fn supplementary(mut self, item: SupplementaryItem) -> Self {
        self.supplementary_items.push(item);
        self
    }

    pub fn build(self) -> Item {
        Item {
            size: self.size,
            content_insets: self.content_insets,
            supplementary_items: self.supplementary_items,
        }
    }
}

pub struct GroupBuilder {
    size: LayoutSize,
    axis: Axis,
    children: Vec<GroupChild>,
    repeat: Option<NonZeroUsize>,
    inter_item_spacing: f64,
    supplementary_items: Vec<SupplementaryItem>,
}

impl GroupBuilder {
    pub fn horizontal(size: LayoutSize) -> Self {
        Self::new(size, Axis::Horizontal)
    }

    pub fn vertical(size: LayoutSize) -> Self {
        Self::new(size, Axis::Vertical)
    }

    pub fn new(size: LayoutSize, axis: Axis) -> Self {
        Self {
            size,
            axis,
            children: Vec::new(),
            repeat: None,
            inter_item_spacing: 0.0,
            supplementary_items: Vec::new(),
        }
    }

    /// Append one child, placed after the existing ones.
    pub fn subitem(mut self, child: impl Into<GroupChild>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn subitems<C>(mut self, children: impl IntoIterator<Item = C>) -> Self
    where
        C: Into<GroupChild>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Replace the children with `count` copies of `child`, sharing the group's extent equally.
    pub fn repeating(mut self, child: impl Into<GroupChild>, count: NonZeroUsize) -> Self {
        self.children = vec![child.into()];
        self.repeat = Some(count);
        self
    }

    pub fn inter_item_spacing(mut self, spacing: f64) -> Self {
        self.inter_item_spacing = spacing;
        self
    }

    pub fn supplementary(mut self, item: SupplementaryItem) -> Self {
        self.supplementary_items.push(item);
        self
    }

    pub fn build(self) -> Group {
        Group {
            size: self.size,
            axis: self.axis,
            children: self.children,
            repeat: self.repeat,
            inter_item_spacing: self.inter_item_spacing,
            supplementary_items: self.supplementary_items,
        }
    }
}

pub struct SectionBuilder {
    section: Section,
}

impl SectionBuilder {
    pub fn new(group: Group) -> Self {
        Self {
            section: Section::new(group),
        }
    }

    pub fn content_insets(mut self, insets: DirectionalInsets) -> Self {
        self.section.content_insets = insets;
        self
    }

    pub fn inter_group_spacing(mut self, spacing: f64) -> Self {
        self.section.inter_group_spacing = spacing;
        self
    }

    pub fn orthogonal_scrolling(mut self, behavior: OrthogonalScrolling) -> Self {
        self.section.orthogonal_scrolling = behavior;
        self
    }

    pub fn boundary_item(mut self, item: BoundarySupplementaryItem) -> Self {
        self.section.boundary_supplementary_items.push(item);
        self
    }

    pub fn decoration(mut self, item: DecorationItem) -> Self {
        self.section.decoration_items.push(item);
        self
    }

    pub fn build(self) -> Section {
        self.section
    }
}

pub struct LayoutBuilder {
    source: SectionSource,
    configuration: LayoutConfiguration,
}

impl LayoutBuilder {
    /// Builder for a layout using `section` for every section.
    pub fn new(section: Section) -> Self {
        Self {
            source: SectionSource::Static(section),
            configuration: LayoutConfiguration::default(),
        }
    }

    /// Builder for a layout asking `provider` for each section on every pass.
    pub fn dynamic<F>(provider: F) -> Self
    where
        F: Fn(usize, &LayoutEnvironment) -> Option<Section> + Send + Sync + 'static,
    {
        Self {
            source: SectionSource::Dynamic(std::sync::Arc::new(provider)),
            configuration: LayoutConfiguration::default(),
        }
    }

    pub fn inter_section_spacing(mut self, spacing: f64) -> Self {
        self.configuration.inter_section_spacing = spacing;
        self
    }

    pub fn boundary_item(mut self, item: BoundarySupplementaryItem) -> Self {
        self.configuration.boundary_supplementary_items.push(item);
        self
    }

    pub fn build(self) -> CompositionalLayout {
        CompositionalLayout::with_configuration(self.source, self.configuration)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/dsl.rs"]
mod tests;
