use super::*;
use crate::data::diff::UpdateOp;
use crate::render::registry::{CellTemplate, ViewTemplate};
use crate::render::view::{Color, SupplementaryViewModel, View};

fn registry() -> TemplateRegistry {
    let mut r = TemplateRegistry::new();
    r.register_cell(CellTemplate::Collection);
    r.register_supplementary(SupplementaryKind::SectionHeader, ViewTemplate::Supplementary);
    r
}

fn data_source() -> DiffableDataSource<&'static str, u32, View> {
    DiffableDataSource::<&'static str, u32, View>::new(|registry, path, item| {
        Ok(registry
            .dequeue_cell(CellTemplate::Collection, path)?
            .render(item.to_string()))
    })
    .with_supplementary_provider(|registry, ctx| match ctx.kind {
        SupplementaryKind::SectionHeader => {
            let model =
                SupplementaryViewModel::new(format!("{} header", ctx.section), Color::Yellow);
            Ok(Some(
                registry
                    .dequeue_supplementary(ctx.kind, ctx.index_path)?
                    .render(&model),
            ))
        }
        SupplementaryKind::SectionFooter => Ok(Some(
            registry
                .dequeue_supplementary(ctx.kind, ctx.index_path)?
                .render(&SupplementaryViewModel::default()),
        )),
        _ => Ok(None),
    })
}

fn snapshot(items: impl IntoIterator<Item = u32>) -> Snapshot<&'static str, u32> {
    let mut s = Snapshot::new();
    s.append_sections(["main"]).unwrap();
    s.append_items(items, None).unwrap();
    s
}

#[test]
fn applying_the_same_snapshot_twice_is_a_no_op() {
    let mut source = data_source();
    let first = source.apply(snapshot(0..10), true);
    assert_eq!(first.summary().inserts, 1);
    assert!(first.animated);

    let second = source.apply(snapshot(0..10), false);
    assert!(second.is_empty());
    assert_eq!(source.item_counts(), vec![10]);
}

#[test]
fn one_removed_one_inserted_through_apply() {
    let mut source = data_source();
    source.apply(snapshot(0..10), false);

    let mut next = source.snapshot();
    next.delete_items(&[4]).unwrap();
    next.append_items([99], None).unwrap();
    let summary = source.apply(next, true).summary();
    assert_eq!(summary.deletes, 1);
    assert_eq!(summary.inserts, 1);
    assert_eq!(summary.moves, 0);
    assert_eq!(source.index_path(&99), Some(IndexPath::new(0, 9)));
}

#[test]
fn reload_requests_are_consumed() {
    let mut source = data_source();
    source.apply(snapshot(0..3), false);
    let mut next = source.snapshot();
    next.reload_items(&[1]).unwrap();
    assert_eq!(source.apply(next, false).summary().reloads, 1);
    assert!(source.current().reloaded_items().is_empty());
    assert!(source.apply(source.snapshot(), false).is_empty());
}

#[test]
fn reapplying_a_snapshot_with_reloads_reloads_again() {
    let mut source = data_source();
    source.apply(snapshot(0..5), false);
    let mut next = source.snapshot();
    next.reload_items(&[2]).unwrap();

    let first = source.apply(next.clone(), false);
    let second = source.apply(next, false);
    let reload = vec![UpdateOp::ReloadItem {
        at: IndexPath::new(0, 2),
    }];
    assert_eq!(first.operations, reload);
    assert_eq!(second.operations, reload);
    assert!(source.apply(source.snapshot(), false).is_empty());
}

#[test]
fn cells_resolve_through_the_provider() {
    let mut source = data_source();
    source.apply(snapshot([5, 6, 7]), false);
    let registry = registry();

    let view = source.cell(&registry, IndexPath::new(0, 1)).unwrap();
    assert_eq!(view.text.as_deref(), Some("6"));
    assert_eq!(source.item_identifier(IndexPath::new(0, 2)), Some(&7));

    let err = source.cell(&registry, IndexPath::new(0, 3)).unwrap_err();
    assert!(matches!(err, MosaicError::Snapshot(_)));

    let err = source
        .cell(&TemplateRegistry::new(), IndexPath::new(0, 0))
        .unwrap_err();
    assert!(matches!(err, MosaicError::Registry(_)));
}

#[test]
fn unrecognized_kinds_resolve_to_no_view() {
    let mut source = data_source();
    source.apply(snapshot(0..2), false);
    let registry = registry();
    let path = IndexPath::new(0, 0);

    let header = source
        .supplementary(&registry, &SupplementaryKind::SectionHeader, path)
        .unwrap()
        .unwrap();
    assert_eq!(header.text.as_deref(), Some("main header"));

    let badge = source
        .supplementary(&registry, &SupplementaryKind::custom("unknown"), path)
        .unwrap();
    assert!(badge.is_none());

    // Outside the snapshot there is nothing to resolve.
    assert!(
        source
            .supplementary(&registry, &SupplementaryKind::SectionHeader, IndexPath::new(4, 0))
            .unwrap()
            .is_none()
    );

    // A provider that dequeues an unregistered kind fails loudly.
    let err = source
        .supplementary(&registry, &SupplementaryKind::SectionFooter, path)
        .unwrap_err();
    assert!(matches!(err, MosaicError::Registry(_)));
}

#[test]
fn without_provider_supplementaries_are_absent() {
    let mut source = DiffableDataSource::<u8, u8, View>::new(|r, path, _item| {
        Ok(r.dequeue_cell(CellTemplate::Table, path)?.render(""))
    });
    let mut s = Snapshot::new();
    s.append_sections([0]).unwrap();
    source.apply(s, false);
    assert!(
        source
            .supplementary(&registry(), &SupplementaryKind::Header, IndexPath::new(0, 0))
            .unwrap()
            .is_none()
    );
}
