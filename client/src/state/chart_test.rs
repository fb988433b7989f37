use super::*;
use crate::test_support::sample_row;

#[test]
fn rebuild_partitions_by_validity() {
    let rows = vec![sample_row("a", true, 10.0, 25.0), sample_row("b", false, 12.0, 8.0)];
    let data = ChartData::rebuild(&rows);
    assert_eq!(data.valid.len(), 1);
    assert_eq!(data.invalid.len(), 1);
    assert_eq!(data.valid[0].row, rows[0]);
    assert_eq!(data.invalid[0].row, rows[1]);
}

#[test]
fn rebuild_plots_cost_against_price() {
    let data = ChartData::rebuild(&[sample_row("a", true, 10.0, 25.0)]);
    assert_eq!((data.valid[0].x, data.valid[0].y), (10.0, 25.0));
}

#[test]
fn rebuild_replaces_previous_series() {
    let first = ChartData::rebuild(&[sample_row("a", true, 1.0, 2.0), sample_row("b", true, 3.0, 4.0)]);
    assert_eq!(first.valid.len(), 2);
    let second = ChartData::rebuild(&[sample_row("c", false, 5.0, 6.0)]);
    assert!(second.valid.is_empty());
    assert_eq!(second.invalid[0].row.design_id, "c");
}

#[test]
fn rebuild_of_empty_page_is_empty() {
    let data = ChartData::rebuild(&[]);
    assert!(data.is_empty());
    assert_eq!(data.bounds().0, AxisRange { min: 0.0, max: 1.0, step: 0.2 });
}

#[test]
fn series_labels_and_lookup() {
    let data = ChartData::rebuild(&[sample_row("a", false, 1.0, 2.0)]);
    assert_eq!(Series::Valid.label(), "Valid");
    assert_eq!(Series::Invalid.label(), "Invalid");
    assert_eq!(data.series(Series::Invalid).len(), 1);
    assert!(data.series(Series::Valid).is_empty());
}

#[test]
fn bounds_cover_every_point_with_nice_steps() {
    let data = ChartData::rebuild(&[sample_row("a", true, 13.0, 42.0), sample_row("b", false, 87.0, 7.0)]);
    let (x, y) = data.bounds();
    assert!(x.min <= 13.0 && x.max >= 87.0);
    assert!(y.min <= 7.0 && y.max >= 42.0);
    assert_eq!(x.step, 20.0);
    assert_eq!(x.min, 0.0);
    assert_eq!(x.max, 100.0);
}

#[test]
fn covering_single_value_pads_range() {
    let range = AxisRange::covering(&[50.0]);
    assert!(range.min < 50.0);
    assert!(range.max > 50.0);
}

#[test]
fn ticks_span_range_inclusive() {
    let range = AxisRange { min: 0.0, max: 100.0, step: 20.0 };
    assert_eq!(range.ticks(), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
}

#[test]
fn tick_labels_are_money() {
    assert_eq!(tick_label(20.0), "$20.00");
}

#[test]
fn frame_maps_extremes_to_plot_edges() {
    let frame = PlotFrame::default();
    let range = AxisRange { min: 0.0, max: 10.0, step: 2.0 };
    assert_eq!(frame.x_px(&range, 0.0), frame.left);
    assert_eq!(frame.x_px(&range, 10.0), frame.width - frame.right);
    assert_eq!(frame.y_px(&range, 10.0), frame.top);
    assert_eq!(frame.y_px(&range, 0.0), frame.height - frame.bottom);
}

#[test]
fn tooltip_sits_at_point_and_carries_thumbnail_and_name() {
    let data = ChartData::rebuild(&[sample_row("a", true, 5.0, 5.0)]);
    let frame = PlotFrame::default();
    let range = AxisRange { min: 0.0, max: 10.0, step: 2.0 };
    let tip = ChartTooltip::at(&data.valid[0], &frame, &range, &range);
    assert_eq!(tip.left, frame.left + frame.plot_width() / 2.0);
    assert_eq!(tip.top, frame.top + frame.plot_height() / 2.0);
    assert_eq!(tip.thumbnail, "thumb-a");
    assert_eq!(tip.name, "Model a");
}
