//! Design detail view: thumbnail, requirements, physical properties, cost
//! breakdown, market scores and the DSM.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `DesignState.current`. Every render is a full rebuild from the
//! current design; nothing is patched in place.

use leptos::prelude::*;

use crate::components::dsm_table::DsmTable;
use crate::components::requirement_list::RequirementList;
use crate::net::types::{CostAnalysis, DesignResult};
use crate::state::design::DesignState;
use crate::util::fields::{self, CostField, PhysicalField, ScoreField};
use crate::util::format::{self, Tier};
use crate::util::requirements::brick_catalog_url;

/// Detail panel for the Design tab. Shows a placeholder until a design has
/// been opened or uploaded.
#[component]
pub fn DesignDetail() -> impl IntoView {
    let design = expect_context::<RwSignal<DesignState>>();

    move || match design.with(|s| s.current.clone()) {
        Some(design) => view! { <DesignSheet design/> }.into_any(),
        None => view! {
            <p class="design-placeholder">"Upload a design or open one from the tradespace."</p>
        }
        .into_any(),
    }
}

#[component]
fn DesignSheet(design: DesignResult) -> impl IntoView {
    let caption = fields::caption(&design);
    let thumbnail = fields::thumbnail_src(&design.thumbnail);
    let submitted = format::local_timestamp(&design.timestamp);
    let physical = PhysicalField::ALL.map(|field| (field.label(), field.render(&design)));
    let costs = CostField::ALL.map(|field| (field, field.render(&design)));
    let scores = ScoreField::ALL.map(|field| (field.label(), field.render(&design)));
    let price = format::money(design.value.price);
    let profit = format::profit(design.total_profit);
    let roi = format::roi(design.total_roi);
    let revenue = format::money(design.total_revenue);
    let total_cost = format::money(design.total_cost);

    view! {
        <div class="design-detail">
            <figure class="design-detail__figure">
                <img class="design-detail__thumbnail" src=thumbnail alt=caption.clone()/>
                <figcaption>{caption}</figcaption>
                <small class="text-muted">{submitted}</small>
            </figure>

            <section class="design-section design-section--summary">
                <dl class="design-summary">
                    <dt>"Cost"</dt>
                    <dd>{total_cost}</dd>
                    <dt>"Revenue"</dt>
                    <dd>{revenue}</dd>
                    <dt>"Profit"</dt>
                    <dd class=profit.tier.text_class()>{profit.text}</dd>
                    <dt>"ROI"</dt>
                    <dd class=roi.tier.text_class()>{roi.text}</dd>
                </dl>
            </section>

            <RequirementList requirements=design.requirements.clone()/>

            <section class="design-section design-section--physical">
                <h3>"Physical Properties"</h3>
                <table class="table table-sm">
                    <tbody>
                        {physical
                            .into_iter()
                            .map(|(label, value)| view! { <tr><th>{label}</th><td>{value}</td></tr> })
                            .collect_view()}
                    </tbody>
                </table>
            </section>

            <section class="design-section design-section--cost">
                <h3>"Cost"</h3>
                <table class="table table-sm">
                    <tbody>
                        {costs
                            .into_iter()
                            .map(|(field, value)| {
                                view! {
                                    <tr
                                        class:cost-line--detail=field.is_detail()
                                        class:cost-line--total=field == CostField::Total
                                    >
                                        <th>{field.label()}</th>
                                        <td>{value}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
                <BomTable cost=design.cost.clone()/>
            </section>

            <section class="design-section design-section--value">
                <h3>"Value"</h3>
                <table class="table table-sm">
                    <tbody>
                        {scores
                            .into_iter()
                            .map(|(label, score)| {
                                view! {
                                    <tr>
                                        <th>{label}</th>
                                        <td class=score.tier.text_class()>{score.text}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                        <tr class="value-line--price">
                            <th>"Price"</th>
                            <td>{price}</td>
                        </tr>
                    </tbody>
                </table>
                <ScoreLegend/>
            </section>

            <DsmTable dsm=design.dsm.clone()/>
        </div>
    }
}

/// Bill of materials, sorted by part id.
#[component]
fn BomTable(cost: CostAnalysis) -> impl IntoView {
    view! {
        <table class="table table-sm bom">
            <thead>
                <tr>
                    <th>"Part"</th>
                    <th>"Name"</th>
                    <th>"Unit cost"</th>
                    <th>"Quantity"</th>
                    <th>"Cost"</th>
                </tr>
            </thead>
            <tbody>
                {cost
                    .bom
                    .into_iter()
                    .map(|(part, line)| {
                        let line_total = format::money(line.line_total());
                        view! {
                            <tr>
                                <td>
                                    <a href=brick_catalog_url(&part) target="_blank" rel="noopener">{part.clone()}</a>
                                </td>
                                <td>{line.name}</td>
                                <td>{format::money_with(line.cost, 3)}</td>
                                <td>{line.quantity}</td>
                                <td>{line_total}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn ScoreLegend() -> impl IntoView {
    let bands = [(Tier::Info, "75+"), (Tier::Success, "50+"), (Tier::Warning, "25+"), (Tier::Danger, "below 25")];
    view! {
        <p class="score-legend">
            {bands
                .into_iter()
                .map(|(tier, text)| view! { <span class=format!("score-legend__band {}", tier.text_class())>{text}</span> })
                .collect_view()}
        </p>
    }
}
