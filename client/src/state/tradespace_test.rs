use super::*;
use crate::test_support::sample_row;

fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

fn page(draw: u64, rows: usize, filtered: u64, total: u64) -> DesignPage {
    DesignPage {
        draw,
        records_total: total,
        records_filtered: filtered,
        designs: (0..rows).map(|i| sample_row(&format!("d{i}"), i % 2 == 0, 10.0, 20.0)).collect(),
    }
}

// =============================================================
// TableQuery
// =============================================================

#[test]
fn default_query_sorts_by_timestamp_descending() {
    let params = TableQuery::default().to_params();
    assert_eq!(param(&params, "order[0][column]"), Some("1"));
    assert_eq!(param(&params, "order[0][dir]"), Some("desc"));
    assert_eq!(param(&params, "start"), Some("0"));
    assert_eq!(param(&params, "length"), Some("10"));
    assert_eq!(param(&params, "search[value]"), Some(""));
}

#[test]
fn valid_filter_is_sent_on_column_four() {
    let mut query = TableQuery::default();
    assert_eq!(param(&query.to_params(), "columns[4][search][value]"), Some(""));
    query.valid_only = Some(true);
    assert_eq!(param(&query.to_params(), "columns[4][search][value]"), Some("true"));
    query.valid_only = Some(false);
    assert_eq!(param(&query.to_params(), "columns[4][search][value]"), Some("false"));
}

#[test]
fn column_metadata_is_sent_for_every_column() {
    let params = TableQuery::default().to_params();
    assert_eq!(param(&params, "columns[0][name]"), Some("id"));
    assert_eq!(param(&params, "columns[0][orderable]"), Some("false"));
    assert_eq!(param(&params, "columns[3][name]"), Some("model"));
    assert_eq!(param(&params, "columns[3][searchable]"), Some("true"));
    assert_eq!(param(&params, "columns[8][name]"), Some("roi"));
    assert_eq!(param(&params, "columns[8][searchable]"), Some("false"));
}

#[test]
fn column_indices_match_order() {
    for (i, column) in TableColumn::ALL.iter().enumerate() {
        assert_eq!(column.index(), i);
    }
}

// =============================================================
// Draw lifecycle
// =============================================================

#[test]
fn redraw_keeps_parameters_and_bumps_draw() {
    let mut state = TradespaceState::default();
    state.set_valid_only(true);
    state.sort_by(TableColumn::Cost);
    state.set_search("otter".to_owned());
    let before = state.query.clone();

    state.redraw();

    assert_eq!(state.query.draw, before.draw + 1);
    let mut expected = before.to_params();
    let mut actual = state.query.to_params();
    expected.retain(|(k, _)| k != "draw");
    actual.retain(|(k, _)| k != "draw");
    assert_eq!(actual, expected);
}

#[test]
fn sort_by_new_column_starts_ascending_then_toggles() {
    let mut state = TradespaceState::default();
    state.sort_by(TableColumn::Profit);
    assert_eq!(state.query.sort_column, TableColumn::Profit);
    assert_eq!(state.query.sort_dir, SortDir::Asc);
    state.sort_by(TableColumn::Profit);
    assert_eq!(state.query.sort_dir, SortDir::Desc);
}

#[test]
fn sort_by_existing_default_column_flips_to_ascending() {
    let mut state = TradespaceState::default();
    state.sort_by(TableColumn::Timestamp);
    assert_eq!(state.query.sort_dir, SortDir::Asc);
}

#[test]
fn sort_by_results_column_is_ignored() {
    let mut state = TradespaceState::default();
    state.sort_by(TableColumn::Results);
    assert_eq!(state.query, TableQuery::default());
}

#[test]
fn filter_search_and_length_reset_to_first_page() {
    let mut state = TradespaceState::default();
    state.records_filtered = 100;
    state.go_to_page(3);
    assert_eq!(state.query.start, 30);

    state.set_valid_only(true);
    assert_eq!(state.query.start, 0);

    state.go_to_page(2);
    state.set_search("x".to_owned());
    assert_eq!(state.query.start, 0);

    state.go_to_page(2);
    state.set_length(25);
    assert_eq!(state.query.start, 0);
    assert_eq!(state.query.length, 25);
}

#[test]
fn unchanged_search_does_not_redraw() {
    let mut state = TradespaceState::default();
    state.set_search(String::new());
    assert_eq!(state.query.draw, 0);
}

#[test]
fn paging_is_bounded_by_filtered_count() {
    let mut state = TradespaceState::default();
    state.records_filtered = 25;
    assert_eq!(state.page_count(), 3);
    assert!(!state.has_previous());
    assert!(state.has_next());

    state.next_page();
    state.next_page();
    assert_eq!(state.page_index(), 2);
    assert!(!state.has_next());

    state.next_page();
    assert_eq!(state.page_index(), 2);

    state.go_to_page(10);
    assert_eq!(state.query.start, 20);

    state.previous_page();
    assert_eq!(state.page_index(), 1);
}

#[test]
fn apply_page_accepts_current_draw() {
    let mut state = TradespaceState::default();
    state.redraw();
    assert!(state.loading);
    assert!(state.apply_page(page(1, 3, 3, 7)));
    assert_eq!(state.rows.len(), 3);
    assert_eq!(state.records_total, 7);
    assert!(!state.loading);
}

#[test]
fn apply_page_discards_stale_draw() {
    let mut state = TradespaceState::default();
    state.redraw();
    state.redraw();
    assert!(!state.apply_page(page(1, 3, 3, 3)));
    assert!(state.rows.is_empty());
    assert!(state.loading);
}

// =============================================================
// info_line
// =============================================================

#[test]
fn info_line_for_empty_table() {
    let state = TradespaceState::default();
    assert_eq!(state.info_line(), "Showing 0 to 0 of 0 entries");
}

#[test]
fn info_line_reports_visible_range() {
    let mut state = TradespaceState::default();
    state.records_filtered = 25;
    state.go_to_page(1);
    assert!(state.apply_page(page(state.query.draw, 10, 25, 25)));
    assert_eq!(state.info_line(), "Showing 11 to 20 of 25 entries");
}

#[test]
fn info_line_mentions_total_when_filtered() {
    let mut state = TradespaceState::default();
    assert!(state.apply_page(page(0, 2, 2, 9)));
    assert_eq!(state.info_line(), "Showing 1 to 2 of 2 entries (filtered from 9 total entries)");
}

// =============================================================
// page_window / money_cells / delete_prompt
// =============================================================

#[test]
fn page_window_is_empty_without_rows() {
    assert!(TradespaceState::default().page_window(5).is_empty());
}

#[test]
fn page_window_centres_on_current_page() {
    let mut state = TradespaceState::default();
    state.records_filtered = 200;
    state.go_to_page(10);
    assert_eq!(state.page_window(5), vec![8, 9, 10, 11, 12]);
}

#[test]
fn page_window_clamps_at_edges() {
    let mut state = TradespaceState::default();
    state.records_filtered = 200;
    assert_eq!(state.page_window(5), vec![0, 1, 2, 3, 4]);
    state.go_to_page(19);
    assert_eq!(state.page_window(5), vec![15, 16, 17, 18, 19]);
    state.records_filtered = 25;
    state.go_to_page(0);
    assert_eq!(state.page_window(5), vec![0, 1, 2]);
}

#[test]
fn money_cells_follow_row_totals_not_chart_fields() {
    let mut row = sample_row("d1", true, 4.0, 9.5);
    row.total_cost = 5.25;
    row.total_revenue = 11.0;
    assert_eq!(money_cells(&row), ["$5.25".to_owned(), "$11.00".to_owned()]);
}

#[test]
fn delete_prompt_names_design() {
    assert_eq!(delete_prompt("abc"), "Delete design abc?");
}

#[test]
fn reset_clears_rows_and_discards_in_flight_pages() {
    let mut state = TradespaceState::default();
    state.set_search("otter".to_owned());
    state.redraw();
    let in_flight = state.query.draw;

    state.reset();

    assert!(state.rows.is_empty());
    assert!(!state.loading);
    assert!(state.query.search.is_empty());
    assert!(!state.apply_page(page(in_flight, 3, 3, 3)));
}
