use chrono::{Duration, TimeZone, Utc};
use clipvault_core::view::list::{matches_query, render_list};
use clipvault_core::Item;
use uuid::Uuid;

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
}

fn item(content: &str, age: Duration) -> Item {
    Item::with_id(Uuid::new_v4(), content, fixed_now() - age).unwrap()
}

#[test]
fn filter_is_a_case_insensitive_substring_match() {
    let needle = item("Rust Ownership Notes", Duration::minutes(5));
    let other = item("groceries", Duration::minutes(5));

    assert!(matches_query(&needle, "ownership"));
    assert!(matches_query(&needle, "RUST"));
    assert!(!matches_query(&other, "ownership"));
}

#[test]
fn blank_query_keeps_every_row_visible() {
    let items = vec![
        item("alpha", Duration::minutes(1)),
        item("beta", Duration::minutes(2)),
    ];

    let snapshot = render_list(&items, "", fixed_now());
    assert!(snapshot.rows.iter().all(|row| row.visible));

    let padded = render_list(&items, "   ", fixed_now());
    assert!(padded.rows.iter().all(|row| row.visible));
}

#[test]
fn filtering_never_changes_row_count_or_order() {
    let items = vec![
        item("match this", Duration::minutes(1)),
        item("skip", Duration::minutes(2)),
        item("another match", Duration::minutes(3)),
    ];

    let snapshot = render_list(&items, "match", fixed_now());

    assert_eq!(snapshot.rows.len(), items.len());
    let ids: Vec<_> = snapshot.rows.iter().map(|row| row.id).collect();
    let expected: Vec<_> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, expected);

    let visible: Vec<bool> = snapshot.rows.iter().map(|row| row.visible).collect();
    assert_eq!(visible, vec![true, false, true]);
}

#[test]
fn rows_carry_preview_age_and_char_count() {
    let long_content = "x".repeat(300);
    let items = vec![
        item(&long_content, Duration::hours(3)),
        item("héllo", Duration::seconds(10)),
    ];

    let snapshot = render_list(&items, "", fixed_now());

    let long_row = &snapshot.rows[0];
    assert_eq!(long_row.char_count, 300);
    assert_eq!(long_row.preview.chars().count(), 153);
    assert!(long_row.preview.ends_with("..."));
    assert_eq!(long_row.age, "3h ago");

    let short_row = &snapshot.rows[1];
    assert_eq!(short_row.char_count, 5);
    assert_eq!(short_row.preview, "héllo");
    assert_eq!(short_row.age, "just now");
}

#[test]
fn counter_reflects_whole_collection_even_when_filtered() {
    let items = vec![
        item("visible", Duration::minutes(1)),
        item("hidden", Duration::minutes(2)),
    ];

    let snapshot = render_list(&items, "visible", fixed_now());
    assert_eq!(snapshot.counter, "2 items");
}

#[test]
fn empty_collection_renders_the_empty_state() {
    let snapshot = render_list(&[], "", fixed_now());

    assert!(snapshot.is_empty);
    assert!(snapshot.rows.is_empty());
    assert_eq!(snapshot.counter, "0 items");
}

#[test]
fn singular_counter_for_one_item() {
    let items = vec![item("only one", Duration::minutes(1))];
    let snapshot = render_list(&items, "", fixed_now());
    assert_eq!(snapshot.counter, "1 item");
}
