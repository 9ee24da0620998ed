use client::{RosterStore, SortKey};
use pretty_assertions::assert_eq;
use shared_types::PageItem;

use crate::common;

#[tokio::test]
async fn test_search_and_filters_compose() {
    let mut roster = common::seed_roster(20);
    roster[8].name = "Grace Hopper".into();
    let backend = common::spawn_backend(roster).await;
    let (ctrl, _) = common::controller(&backend);
    ctrl.load().await;

    ctrl.filter("Computer Science", "");
    let cs = ctrl.store().read(|s| s.filtered().to_vec());
    assert!(cs.iter().all(|s| s.department == "Computer Science"));

    ctrl.filter("Computer Science", "2");
    let cs_year2 = ctrl.store().read(|s| s.filtered().to_vec());
    assert!(cs_year2
        .iter()
        .all(|s| s.department == "Computer Science" && s.year == 2));
    assert!(cs_year2.len() < cs.len());

    ctrl.search("grace");
    let hits = ctrl.store().read(|s| s.filtered().to_vec());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].student_id, 9);
    assert_eq!(hits[0].name, "Grace Hopper");
}

#[tokio::test]
async fn test_sort_then_filter_drops_sort_order() {
    let backend = common::spawn_backend(common::seed_roster(12)).await;
    let (ctrl, _) = common::controller(&backend);
    ctrl.load().await;

    ctrl.sort(SortKey::Year);
    let years: Vec<i32> = ctrl.store().read(|s| s.filtered().iter().map(|s| s.year).collect());
    assert!(years.windows(2).all(|w| w[0] <= w[1]));

    ctrl.search("student");
    let ids: Vec<i64> = ctrl
        .store()
        .read(|s| s.filtered().iter().map(|s| s.student_id).collect());
    assert_eq!(ids, (1..=12).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_newest_first_sort() {
    let backend = common::spawn_backend(common::seed_roster(6)).await;
    let (ctrl, _) = common::controller(&backend);
    ctrl.load().await;

    ctrl.sort(SortKey::CreatedAt);
    let stamps: Vec<_> = ctrl.store().read(|s| {
        s.filtered()
            .iter()
            .filter_map(|s| s.created_at_parsed())
            .collect()
    });
    assert_eq!(stamps.len(), 6);
    assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_pagination_window_for_100_students() {
    let backend = common::spawn_backend(common::seed_roster(100)).await;
    let (ctrl, _) = common::controller(&backend);
    ctrl.load().await;

    assert_eq!(ctrl.go_to_page(5), 5);
    let meta = ctrl.view().pagination.unwrap();
    assert_eq!(
        meta.items(),
        vec![
            PageItem::Page(1),
            PageItem::Ellipsis,
            PageItem::Page(4),
            PageItem::Page(5),
            PageItem::Page(6),
            PageItem::Ellipsis,
            PageItem::Page(10),
        ]
    );
    assert_eq!(ctrl.view().rows.first().map(|r| r.id), Some(41));
    assert_eq!(ctrl.go_to_page(11), 10);
}

#[tokio::test]
async fn test_filter_resets_page() {
    let backend = common::spawn_backend(common::seed_roster(40)).await;
    let (ctrl, _) = common::controller(&backend);
    ctrl.load().await;
    ctrl.go_to_page(3);

    ctrl.filter("Mathematics", "");
    assert_eq!(ctrl.store().read(|s| s.page()), 1);

    ctrl.go_to_page(2);
    ctrl.sort(SortKey::Name);
    assert_eq!(ctrl.store().read(|s| s.page()), 2);
}

#[tokio::test]
async fn test_no_matches_renders_empty_view() {
    let backend = common::spawn_backend(common::seed_roster(8)).await;
    let (ctrl, _) = common::controller(&backend);
    ctrl.load().await;

    ctrl.filter("", "seven");
    let view = ctrl.view();
    assert!(view.is_empty);
    assert!(view.pagination.is_none());
    assert_eq!(view.stats.active, 0);
    assert_eq!(view.stats.total, 8);
}
