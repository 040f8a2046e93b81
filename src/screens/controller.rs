use crate::data::diff::Changeset;
use crate::data::snapshot::{Identifier, Snapshot};
use crate::data::source::DiffableDataSource;
use crate::foundation::core::{IndexPath, Size};
use crate::foundation::error::MosaicResult;
use crate::layout::environment::LayoutEnvironment;
use crate::layout::kind::{DecorationKind, SupplementaryKind};
use crate::layout::model::CompositionalLayout;
use crate::layout::solver::{ElementCategory, ResolvedLayout, SectionGeometry, resolve_layout};
use crate::render::registry::TemplateRegistry;
use crate::render::view::{PlacedView, View, place};

/// A demo screen, independent of its identifier types.
pub trait DemoScreen {
    fn title(&self) -> &'static str;

    fn layout(&self) -> &CompositionalLayout;

    /// Items per section of the current snapshot.
    fn item_counts(&self) -> Vec<usize>;

    /// Run the measurement pass for `env`.
    fn resolve(&self, env: &LayoutEnvironment) -> ResolvedLayout {
        resolve_layout(self.layout(), &self.item_counts(), env)
    }

    /// Lay out the screen and produce a view for every element.
    fn render(&self, env: &LayoutEnvironment) -> MosaicResult<RenderedScreen>;
}

/// Every view of a screen, placed for one environment.
#[derive(Clone, Debug, serde::Serialize)]
pub struct RenderedScreen {
    pub title: &'static str,
    pub environment: LayoutEnvironment,
    pub content_size: Size,
    pub sections: Vec<SectionGeometry>,
    pub elements: Vec<PlacedView>,
    /// Supplementary elements the layout declared but no provider produced a view for.
    pub skipped: usize,
}

impl RenderedScreen {
    pub fn cells(&self) -> impl Iterator<Item = &PlacedView> {
        self.elements.iter().filter(|e| e.attributes.is_cell())
    }

    pub fn supplementaries<'a>(
        &'a self,
        kind: &'a SupplementaryKind,
    ) -> impl Iterator<Item = &'a PlacedView> + 'a {
        self.elements.iter().filter(
            move |e| matches!(&e.attributes.category, ElementCategory::Supplementary(k) if k == kind),
        )
    }

    pub fn decorations<'a>(
        &'a self,
        kind: &'a DecorationKind,
    ) -> impl Iterator<Item = &'a PlacedView> + 'a {
        self.elements.iter().filter(
            move |e| matches!(&e.attributes.category, ElementCategory::Decoration(k) if k == kind),
        )
    }
}

/// A layout, a template registry and a data source wired together.
pub struct ScreenController<S, I> {
    title: &'static str,
    layout: CompositionalLayout,
    registry: TemplateRegistry,
    data_source: DiffableDataSource<S, I, View>,
}

impl<S: Identifier, I: Identifier> ScreenController<S, I> {
    pub fn new(
        title: &'static str,
        layout: CompositionalLayout,
        registry: TemplateRegistry,
        data_source: DiffableDataSource<S, I, View>,
    ) -> Self {
        Self {
            title,
            layout,
            registry,
            data_source,
        }
    }

    /// Install `snapshot` and return the resulting changeset.
    pub fn apply(&mut self, snapshot: Snapshot<S, I>, animated: bool) -> Changeset {
        self.data_source.apply(snapshot, animated)
    }

    pub fn data_source(&self) -> &DiffableDataSource<S, I, View> {
        &self.data_source
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    fn view_for(&self, category: &ElementCategory, at: IndexPath) -> MosaicResult<Option<View>> {
        match category {
            ElementCategory::Cell => self.data_source.cell(&self.registry, at).map(Some),
            ElementCategory::Supplementary(kind) => {
                self.data_source.supplementary(&self.registry, kind, at)
            }
            ElementCategory::Decoration(kind) => Ok(Some(
                self.registry.dequeue_decoration(kind, at)?.render(),
            )),
        }
    }
}

impl<S: Identifier, I: Identifier> DemoScreen for ScreenController<S, I> {
    fn title(&self) -> &'static str {
        self.title
    }

    fn layout(&self) -> &CompositionalLayout {
        &self.layout
    }

    fn item_counts(&self) -> Vec<usize> {
        self.data_source.item_counts()
    }

    #[tracing::instrument(skip(self), fields(title = self.title))]
    fn render(&self, env: &LayoutEnvironment) -> MosaicResult<RenderedScreen> {
        let resolved = self.resolve(env);
        let mut elements = Vec::with_capacity(resolved.attributes.len());
        let mut skipped = 0usize;
        for attributes in resolved.attributes {
            match self.view_for(&attributes.category, attributes.index_path)? {
                Some(view) => elements.push(place(view, attributes)),
                None => {
                    tracing::trace!(
                        category = ?attributes.category,
                        index_path = %attributes.index_path,
                        "no view for element"
                    );
                    skipped += 1;
                }
            }
        }
        tracing::debug!(elements = elements.len(), skipped, "screen rendered");
        Ok(RenderedScreen {
            title: self.title,
            environment: *env,
            content_size: resolved.content_size,
            sections: resolved.sections,
            elements,
            skipped,
        })
    }
}

impl<S: Identifier, I: Identifier> std::fmt::Debug for ScreenController<S, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenController")
            .field("title", &self.title)
            .field("layout", &self.layout)
            .field("registry", &self.registry)
            .field("data_source", &self.data_source)
            .finish()
    }
}
