use datatable_lib::source::fixture;
use datatable_lib::table::SortDirection;
use datatable_lib::{Column, Record, TableConfig, TableView};

fn fixture_view() -> TableView {
    TableView::with_records(TableConfig::default(), fixture::records().unwrap())
}

fn view_of(n: usize) -> TableView {
    let records = fixture::records().unwrap().into_iter().take(n).collect();
    TableView::with_records(TableConfig::default(), records)
}

fn column_values(view: &TableView, column: Column) -> Vec<String> {
    view.filtered()
        .iter()
        .map(|r| column.value(r).to_string())
        .collect()
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_only_returns_matching_names() {
    let mut view = fixture_view();
    for query in ["a", "AN", "son", "Olivia", "zzz", " "] {
        view.search(query);
        let needle = query.to_lowercase();
        for record in view.filtered() {
            assert!(
                record.name.to_lowercase().contains(&needle),
                "{:?} does not contain {:?}",
                record.name,
                query
            );
        }
        let expected = view
            .records()
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .count();
        assert_eq!(view.filtered().len(), expected);
    }
}

#[test]
fn test_empty_search_returns_full_set() {
    let mut view = fixture_view();
    view.search("olivia");
    view.search("");
    assert_eq!(view.filtered(), view.records());
}

#[test]
fn test_search_does_not_match_email() {
    let mut view = fixture_view();
    view.search("example.com");
    assert!(view.filtered().is_empty());
    assert_eq!(view.page_count(), 0);
    assert!(view.page_rows().is_empty());
}

// ============================================================================
// Sort
// ============================================================================

#[test]
fn test_first_sort_is_non_decreasing() {
    for column in Column::ALL {
        let mut view = fixture_view();
        view.sort(column);
        let values = column_values(&view, column);
        assert!(values.windows(2).all(|w| w[0] <= w[1]), "{} not sorted", column);
        assert_eq!(view.sort_direction(), Some(SortDirection::Ascending));
    }
}

#[test]
fn test_second_sort_reverses_prior_order() {
    let mut view = fixture_view();
    view.sort(Column::Phone);
    let before: Vec<Record> = view.filtered().to_vec();

    view.sort(Column::Phone);
    let mut expected = before;
    expected.reverse();
    assert_eq!(view.filtered(), expected.as_slice());
    assert_eq!(view.sort_direction(), Some(SortDirection::Descending));
}

#[test]
fn test_repeat_sort_after_search_reverses_search_order() {
    let mut view = fixture_view();
    view.sort(Column::Name);
    view.search("a");
    let before: Vec<Record> = view.filtered().to_vec();

    view.sort(Column::Name);
    let mut expected = before;
    expected.reverse();
    assert_eq!(view.filtered(), expected.as_slice());
}

#[test]
fn test_switching_column_sorts_ascending() {
    let mut view = fixture_view();
    view.sort(Column::Name);
    view.sort(Column::Name);
    view.sort(Column::Address);
    assert_eq!(view.sort_column(), Some(Column::Address));
    let values = column_values(&view, Column::Address);
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
}

// ============================================================================
// Pagination
// ============================================================================

#[test]
fn test_page_count_is_ceil() {
    for n in [0, 1, 24, 25, 26, 50, 51, 60] {
        let view = view_of(n);
        assert_eq!(view.page_count(), n.div_ceil(25), "n = {}", n);
    }
}

#[test]
fn test_page_slice_matches_window() {
    let mut view = fixture_view();
    view.sort(Column::Email);
    for page in 1..=view.page_count() {
        view.change_page(page);
        let start = (page - 1) * 25;
        let end = (page * 25).min(view.filtered().len());
        assert_eq!(view.page_rows(), &view.filtered()[start..end]);
    }
}

#[test]
fn test_thirty_records_two_pages() {
    let mut view = view_of(30);
    view.search("");
    assert_eq!(view.filtered().len(), 30);
    assert_eq!(view.page_count(), 2);
    assert_eq!(view.page_rows().len(), 25);
    assert!(view.has_next());
    assert!(!view.has_previous());

    assert!(view.next_page());
    assert_eq!(view.current_page(), 2);
    assert_eq!(view.page_rows().len(), 5);
    assert!(!view.has_next());
    assert!(view.has_previous());

    assert!(!view.next_page());
    assert_eq!(view.current_page(), 2);
}

#[test]
fn test_change_page_is_not_clamped() {
    let mut view = view_of(30);
    view.change_page(7);
    assert_eq!(view.current_page(), 7);
    assert!(view.page_rows().is_empty());
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_select_then_deselect_restores_selection() {
    let mut view = fixture_view();
    let first = view.records()[0].clone();
    let second = view.records()[1].clone();
    view.select_row(&first, true);
    let before = view.selection().clone();

    view.select_row(&second, true);
    view.select_row(&second, false);
    assert_eq!(view.selection(), &before);
}

#[test]
fn test_same_email_selected_once() {
    let mut view = fixture_view();
    let record = view.records()[3].clone();
    let mut renamed = record.clone();
    renamed.name = "Someone Else".into();

    view.select_row(&record, true);
    view.select_row(&renamed, true);
    assert_eq!(view.selection().len(), 1);
    assert!(view.is_selected(&record.email));
}

#[test]
fn test_selection_survives_filter_sort_and_paging() {
    let mut view = fixture_view();
    let record = view.records()[59].clone();
    view.select_row(&record, true);

    view.search("no such name");
    view.sort(Column::Phone);
    view.change_page(2);
    assert!(view.is_selected(&record.email));
    assert_eq!(view.selection().len(), 1);
}

#[test]
fn test_selected_json_dump() {
    let mut view = TableView::with_records(
        TableConfig::default(),
        vec![Record::new("Ada", "555-0100", "ada@example.com", "1 Loop Road")],
    );
    assert_eq!(view.selected_json().unwrap(), "[]");

    let ada = view.records()[0].clone();
    view.select_row(&ada, true);
    assert_eq!(
        view.selected_json().unwrap(),
        r#"[{"name":"Ada","phone":"555-0100","email":"ada@example.com","address":"1 Loop Road"}]"#
    );
}
