//! Cost/value scatter plot of the designs on the current table page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fed by the table's page-drawn callback through a `ChartData` signal owned
//! by the page. Points open the design detail on click and show a thumbnail
//! tooltip on hover.

use leptos::prelude::*;

use crate::state::chart::{AxisRange, ChartData, ChartPoint, ChartTooltip, PlotFrame, Series, tick_label};
use crate::util::fields;

const POINT_RADIUS: f64 = 5.0;
const CROSS_STROKE: f64 = 3.0;
const TOOLTIP_WIDTH: u32 = 100;

#[component]
pub fn TradespaceChart(data: RwSignal<ChartData>, on_open: Callback<String>) -> impl IntoView {
    let frame = PlotFrame::default();
    let tooltip = RwSignal::new(None::<ChartTooltip>);
    let bounds = Memo::new(move |_| data.with(ChartData::bounds));

    // A rebuilt dataset invalidates whatever point was hovered.
    Effect::new(move || {
        data.track();
        tooltip.set(None);
    });

    let points = move |series: Series| {
        let (x_range, y_range) = bounds.get();
        data.with(|d| d.series(series).to_vec())
            .into_iter()
            .map(|point| view! { <PlotPoint point series frame x_range y_range tooltip on_open/> })
            .collect_view()
    };

    view! {
        <div
            class="tradespace-chart"
            style:position="relative"
            style:cursor=move || if tooltip.with(Option::is_some) { "pointer" } else { "default" }
        >
            <svg
                width=frame.width.to_string()
                height=frame.height.to_string()
                viewBox=format!("0 0 {} {}", frame.width, frame.height)
            >
                {move || {
                    let (x_range, y_range) = bounds.get();
                    view! { <Axes frame x_range y_range/> }
                }}
                <g class="tradespace-chart__series tradespace-chart__series--invalid">
                    {move || points(Series::Invalid)}
                </g>
                <g class="tradespace-chart__series tradespace-chart__series--valid">
                    {move || points(Series::Valid)}
                </g>
            </svg>
            {move || {
                tooltip
                    .get()
                    .map(|tip| {
                        view! {
                            <div
                                class="tradespace-chart__tooltip"
                                style:position="absolute"
                                style:pointer-events="none"
                                style:left=format!("{}px", tip.left)
                                style:top=format!("{}px", tip.top)
                            >
                                <img src=fields::thumbnail_src(&tip.thumbnail) width=TOOLTIP_WIDTH.to_string() alt=tip.name.clone()/>
                                <div>{tip.name.clone()}</div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn PlotPoint(
    point: ChartPoint,
    series: Series,
    frame: PlotFrame,
    x_range: AxisRange,
    y_range: AxisRange,
    tooltip: RwSignal<Option<ChartTooltip>>,
    on_open: Callback<String>,
) -> impl IntoView {
    let x = frame.x_px(&x_range, point.x);
    let y = frame.y_px(&y_range, point.y);
    let tip = ChartTooltip::at(&point, &frame, &x_range, &y_range);
    let design_id = point.row.design_id;
    let color = series.color();

    let on_enter = move |_| tooltip.set(Some(tip.clone()));
    let on_leave = move |_| tooltip.set(None);
    let on_click = move |_| on_open.run(design_id.clone());

    match series {
        Series::Valid => view! {
            <circle
                cx=x.to_string()
                cy=y.to_string()
                r=POINT_RADIUS.to_string()
                fill=color
                on:mouseenter=on_enter
                on:mouseleave=on_leave
                on:click=on_click
            />
        }
        .into_any(),
        Series::Invalid => {
            let r = POINT_RADIUS;
            let d = format!(
                "M {} {} L {} {} M {} {} L {} {}",
                x - r,
                y - r,
                x + r,
                y + r,
                x - r,
                y + r,
                x + r,
                y - r
            );
            view! {
                <path
                    d=d
                    stroke=color
                    stroke-width=CROSS_STROKE.to_string()
                    fill="none"
                    on:mouseenter=on_enter
                    on:mouseleave=on_leave
                    on:click=on_click
                />
            }
            .into_any()
        }
    }
}

#[component]
fn Axes(frame: PlotFrame, x_range: AxisRange, y_range: AxisRange) -> impl IntoView {
    let bottom = frame.height - frame.bottom;
    let right = frame.width - frame.right;

    let x_ticks = x_range
        .ticks()
        .into_iter()
        .map(|tick| {
            let x = frame.x_px(&x_range, tick);
            view! {
                <line x1=x.to_string() y1=frame.top.to_string() x2=x.to_string() y2=bottom.to_string() class="tradespace-chart__grid"/>
                <text x=x.to_string() y=(bottom + 18.0).to_string() text-anchor="middle" class="tradespace-chart__tick">
                    {tick_label(tick)}
                </text>
            }
        })
        .collect_view();

    let y_ticks = y_range
        .ticks()
        .into_iter()
        .map(|tick| {
            let y = frame.y_px(&y_range, tick);
            view! {
                <line x1=frame.left.to_string() y1=y.to_string() x2=right.to_string() y2=y.to_string() class="tradespace-chart__grid"/>
                <text x=(frame.left - 6.0).to_string() y=(y + 4.0).to_string() text-anchor="end" class="tradespace-chart__tick">
                    {tick_label(tick)}
                </text>
            }
        })
        .collect_view();

    view! {
        <g class="tradespace-chart__axes">
            {x_ticks}
            {y_ticks}
            <line x1=frame.left.to_string() y1=bottom.to_string() x2=right.to_string() y2=bottom.to_string() class="tradespace-chart__axis"/>
            <line x1=frame.left.to_string() y1=frame.top.to_string() x2=frame.left.to_string() y2=bottom.to_string() class="tradespace-chart__axis"/>
            <text x=(frame.left + frame.plot_width() / 2.0).to_string() y=(frame.height - 12.0).to_string() text-anchor="middle" class="tradespace-chart__title">
                "Cost"
            </text>
            <text
                x="16"
                y=(frame.top + frame.plot_height() / 2.0).to_string()
                text-anchor="middle"
                transform=format!("rotate(-90 16 {})", frame.top + frame.plot_height() / 2.0)
                class="tradespace-chart__title"
            >
                "Value"
            </text>
        </g>
    }
}
