//! Design structure matrix table.

use leptos::prelude::*;

use crate::net::types::Dsm;
use crate::util::dsm;

/// Square connection matrix in the server-chosen component order.
#[component]
pub fn DsmTable(dsm: Dsm) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    if !dsm::is_well_formed(&dsm) {
        log::warn!("malformed DSM: {} labels, order {:?}", dsm.labels.len(), dsm.order);
    }
    let layout = dsm::layout(&dsm);

    view! {
        <section class="design-section design-section--dsm">
            <h3>"Design Structure Matrix"</h3>
            <table class="dsm">
                <thead>
                    <tr>
                        <th></th>
                        {layout
                            .headers
                            .into_iter()
                            .map(|header| view! { <th title=header.label>{header.position}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {layout
                        .rows
                        .into_iter()
                        .map(|row| {
                            let heading = row.heading();
                            view! {
                                <tr>
                                    <th class="dsm__heading">{heading}</th>
                                    {row
                                        .cells
                                        .into_iter()
                                        .map(|cell| view! { <td class=cell.class()>{cell.text()}</td> })
                                        .collect_view()}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}
