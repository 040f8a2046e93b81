use crate::{
    foundation::core::{Axis, IndexPath, Point, Rect, Size},
    layout::dimension::LayoutSize,
    layout::environment::LayoutEnvironment,
    layout::kind::{DecorationKind, SupplementaryKind},
    layout::model::{
        AxisPlacement, BoundarySupplementaryItem, CompositionalLayout, ContainerAnchor, Group,
        GroupChild, OrthogonalScrolling, SupplementaryItem,
    },
};

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "category", content = "kind", rename_all = "snake_case")]
/// What a set of layout attributes describes.
pub enum ElementCategory {
    Cell,
    Supplementary(SupplementaryKind),
    Decoration(DecorationKind),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Placement of one element, produced by a measurement pass.
pub struct LayoutAttributes {
    pub category: ElementCategory,
    pub index_path: IndexPath,
    pub frame: Rect,
    pub z_index: i32,
    /// Element stays within the visible bounds while its section is on screen.
    #[serde(default)]
    pub pinned: bool,
    /// At least one axis of the frame comes from an estimate.
    #[serde(default)]
    pub estimated: bool,
}

impl LayoutAttributes {
    pub fn is_cell(&self) -> bool {
        self.category == ElementCategory::Cell
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Geometry of one section after a measurement pass.
pub struct SectionGeometry {
    pub index: usize,
    /// Full section frame, including content insets and boundary items.
    pub frame: Rect,
    /// Number of root-group instances laid out.
    pub group_count: usize,
    pub orthogonal_scrolling: OrthogonalScrolling,
    /// Extent of the content along the section's own scrolling axis.
    pub scroll_extent: f64,
    /// `false` when the layout produced no section for this index.
    pub has_layout: bool,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Result of one measurement pass over a layout.
pub struct ResolvedLayout {
    pub content_size: Size,
    pub sections: Vec<SectionGeometry>,
    pub attributes: Vec<LayoutAttributes>,
}

impl ResolvedLayout {
    /// Cell attributes, in index-path order.
    pub fn cells(&self) -> impl Iterator<Item = &LayoutAttributes> {
        self.attributes.iter().filter(|a| a.is_cell())
    }

    pub fn supplementaries<'a>(
        &'a self,
        kind: &'a SupplementaryKind,
    ) -> impl Iterator<Item = &'a LayoutAttributes> + 'a {
        self.attributes
            .iter()
            .filter(move |a| matches!(&a.category, ElementCategory::Supplementary(k) if k == kind))
    }

    pub fn decorations<'a>(
        &'a self,
        kind: &'a DecorationKind,
    ) -> impl Iterator<Item = &'a LayoutAttributes> + 'a {
        self.attributes
            .iter()
            .filter(move |a| matches!(&a.category, ElementCategory::Decoration(k) if k == kind))
    }

    pub fn cell_at(&self, index_path: IndexPath) -> Option<&LayoutAttributes> {
        self.cells().find(|a| a.index_path == index_path)
    }

    /// Number of root-group instances (rows, for vertically stacked sections) in `section`.
    pub fn group_count(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, |s| s.group_count)
    }

    /// Elements whose frame intersects `rect`, sorted by z-index (stable).
    pub fn elements_in_rect(&self, rect: Rect) -> Vec<&LayoutAttributes> {
        let mut out: Vec<&LayoutAttributes> = self
            .attributes
            .iter()
            .filter(|a| overlaps(a.frame, rect))
            .collect();
        out.sort_by_key(|a| a.z_index);
        out
    }
}

fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

/// Run one measurement pass.
///
/// `item_counts` holds the number of items of every section, in order. The surface scrolls
/// vertically; sections with orthogonal scrolling lay their groups out side by side instead of
/// stacking them. Estimated dimensions are used as-is: nothing is measured.
#[tracing::instrument(skip(layout, item_counts), fields(sections = item_counts.len()))]
pub fn resolve_layout(
    layout: &CompositionalLayout,
    item_counts: &[usize],
    env: &LayoutEnvironment,
) -> ResolvedLayout {
    let width = env.container.width.max(0.0);
    let config = layout.configuration();
    let mut out = ResolvedLayout::default();

    let mut y = 0.0;
    let (headers, footers) = split_bands(&config.boundary_supplementary_items);
    y += place_band(
        &headers,
        Rect::new(0.0, y, width, y),
        env.container,
        IndexPath::new(0, 0),
        &mut out.attributes,
    );

    for (section_idx, &item_count) in item_counts.iter().enumerate() {
        if section_idx > 0 {
            y += config.inter_section_spacing;
        }
        let Some(section) = layout.section_for(section_idx, env) else {
            tracing::warn!(section = section_idx, "layout produced no section; treating as empty");
            out.sections.push(SectionGeometry {
                index: section_idx,
                frame: Rect::new(0.0, y, width, y),
                group_count: 0,
                orthogonal_scrolling: OrthogonalScrolling::None,
                scroll_extent: 0.0,
                has_layout: false,
            });
            continue;
        };

        let section_top = y;
        let insets = section.content_insets;
        let content_x0 = insets.leading;
        let content_w = (width - insets.horizontal()).max(0.0);
        let section_path = IndexPath::new(section_idx, 0);
        let mut cursor = section_top + insets.top;

        let (headers, footers) = split_bands(&section.boundary_supplementary_items);
        cursor += place_band(
            &headers,
            Rect::new(content_x0, cursor, content_x0 + content_w, cursor),
            env.container,
            section_path,
            &mut out.attributes,
        );

        let group_container = Size::new(content_w, env.container.height);
        let group_size = section.group.size.resolve(group_container);
        let group_count = section.group_count(item_count);
        let spacing = section.inter_group_spacing;
        let orthogonal = section.orthogonal_scrolling.is_orthogonal();

        let mut next_item = 0usize;
        for g in 0..group_count {
            let step = g as f64;
            let origin = if orthogonal {
                Point::new(content_x0 + step * (group_size.width + spacing), cursor)
            } else {
                Point::new(content_x0, cursor + step * (group_size.height + spacing))
            };
            let frame = Rect::from_origin_size(origin, group_size);
            place_group(
                &section.group,
                frame,
                section_idx,
                item_count,
                &mut next_item,
                &mut out.attributes,
            );
        }

        let stacked = |extent: f64| {
            if group_count == 0 {
                0.0
            } else {
                group_count as f64 * extent + (group_count - 1) as f64 * spacing
            }
        };
        let scroll_extent = if orthogonal {
            stacked(group_size.width)
        } else {
            stacked(group_size.height)
        };
        cursor += if orthogonal {
            if group_count == 0 { 0.0 } else { group_size.height }
        } else {
            scroll_extent
        };

        cursor += place_band(
            &footers,
            Rect::new(content_x0, cursor, content_x0 + content_w, cursor),
            env.container,
            section_path,
            &mut out.attributes,
        );
        cursor += insets.bottom;

        let section_frame = Rect::new(0.0, section_top, width, cursor);
        for decoration in &section.decoration_items {
            let size = decoration.size.resolve(section_frame.size());
            let frame = decoration
                .content_insets
                .inset_rect(Rect::from_origin_size(section_frame.origin(), size));
            out.attributes.push(LayoutAttributes {
                category: ElementCategory::Decoration(decoration.kind.clone()),
                index_path: section_path,
                frame,
                z_index: decoration.z_index,
                pinned: false,
                estimated: false,
            });
        }

        tracing::debug!(
            section = section_idx,
            items = item_count,
            groups = group_count,
            height = cursor - section_top,
            "section resolved"
        );
        out.sections.push(SectionGeometry {
            index: section_idx,
            frame: section_frame,
            group_count,
            orthogonal_scrolling: section.orthogonal_scrolling,
            scroll_extent,
            has_layout: true,
        });
        y = cursor;
    }

    y += place_band(
        &footers,
        Rect::new(0.0, y, width, y),
        env.container,
        IndexPath::new(0, 0),
        &mut out.attributes,
    );
    out.content_size = Size::new(width, y);
    out
}

fn split_bands(
    items: &[BoundarySupplementaryItem],
) -> (Vec<&BoundarySupplementaryItem>, Vec<&BoundarySupplementaryItem>) {
    items
        .iter()
        .partition(|b| b.alignment.vertical() != AxisPlacement::End)
}

/// Place boundary items side by side in a horizontal band starting at `band.y0`.
/// Returns the height the band reserves.
fn place_band(
    items: &[&BoundarySupplementaryItem],
    band: Rect,
    container: Size,
    index_path: IndexPath,
    out: &mut Vec<LayoutAttributes>,
) -> f64 {
    let reference = Size::new(band.width(), container.height);
    let mut height = 0.0f64;
    for item in items {
        let mut size = item.size.resolve(reference);
        size.width = size.width.min(band.width());
        let x = band.x0 + place_along(band.width(), size.width, item.alignment.horizontal());
        out.push(LayoutAttributes {
            category: ElementCategory::Supplementary(item.kind.clone()),
            index_path,
            frame: Rect::from_origin_size(Point::new(x, band.y0), size),
            z_index: item.z_index,
            pinned: item.pin_to_visible_bounds,
            estimated: is_estimated(item.size),
        });
        if item.extends_boundary {
            height = height.max(size.height);
        }
    }
    height
}

fn place_group(
    group: &Group,
    frame: Rect,
    section: usize,
    item_count: usize,
    next_item: &mut usize,
    out: &mut Vec<LayoutAttributes>,
) {
    let first_item = *next_item;
    if first_item >= item_count {
        return;
    }

    let axis = group.axis;
    let spacing = group.inter_item_spacing;
    let container = frame.size();
    let shared_extent = group.repeat.map(|n| {
        let n = n.get();
        ((axis.extent(container) - spacing * (n - 1) as f64) / n as f64).max(0.0)
    });

    let mut offset = 0.0;
    for child in group.expanded_children() {
        let mut size = child.size().resolve(container);
        if let Some(extent) = shared_extent {
            match axis {
                Axis::Horizontal => size.width = extent,
                Axis::Vertical => size.height = extent,
            }
        }
        let origin = match axis {
            Axis::Horizontal => Point::new(frame.x0 + offset, frame.y0),
            Axis::Vertical => Point::new(frame.x0, frame.y0 + offset),
        };
        let child_frame = Rect::from_origin_size(origin, size);
        offset += axis.extent(size) + spacing;

        match child {
            GroupChild::Item(item) => {
                if *next_item >= item_count {
                    continue;
                }
                let index_path = IndexPath::new(section, *next_item);
                *next_item += 1;
                let cell_frame = item.content_insets.inset_rect(child_frame);
                out.push(LayoutAttributes {
                    category: ElementCategory::Cell,
                    index_path,
                    frame: cell_frame,
                    z_index: 0,
                    pinned: false,
                    estimated: is_estimated(item.size),
                });
                place_anchored(&item.supplementary_items, cell_frame, index_path, out);
            }
            GroupChild::Group(inner) => {
                place_group(inner, child_frame, section, item_count, next_item, out);
            }
        }
    }

    place_anchored(
        &group.supplementary_items,
        frame,
        IndexPath::new(section, first_item),
        out,
    );
}

fn place_anchored(
    items: &[SupplementaryItem],
    container: Rect,
    index_path: IndexPath,
    out: &mut Vec<LayoutAttributes>,
) {
    for item in items {
        let size = item.size.resolve(container.size());
        out.push(LayoutAttributes {
            category: ElementCategory::Supplementary(item.kind.clone()),
            index_path,
            frame: anchored_frame(container, size, item.anchor),
            z_index: item.z_index,
            pinned: false,
            estimated: is_estimated(item.size),
        });
    }
}

/// Frame of an element of `size` anchored inside `container`.
pub fn anchored_frame(container: Rect, size: Size, anchor: ContainerAnchor) -> Rect {
    let x = container.x0
        + place_along(container.width(), size.width, anchor.alignment.horizontal())
        + anchor.fractional_offset.x * size.width;
    let y = container.y0
        + place_along(container.height(), size.height, anchor.alignment.vertical())
        + anchor.fractional_offset.y * size.height;
    Rect::from_origin_size(Point::new(x, y), size)
}

fn place_along(container: f64, content: f64, placement: AxisPlacement) -> f64 {
    match placement {
        AxisPlacement::Start => 0.0,
        AxisPlacement::Center => (container - content) * 0.5,
        AxisPlacement::End => container - content,
    }
}

fn is_estimated(size: LayoutSize) -> bool {
    size.width.is_estimated() || size.height.is_estimated()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
