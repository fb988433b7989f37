//! Server-paginated tradespace table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the fetch loop for `TradespaceState`. Any change to the table query
//! (which always carries a fresh draw number) triggers one listing request.
//! Accepted pages are handed to `on_draw` so the chart can follow the table.

use leptos::prelude::*;

use crate::net::types::TradespaceRow;
use crate::state::auth::AuthState;
use crate::state::tradespace::{PAGE_LENGTHS, SortDir, TableColumn, TradespaceState, money_cells};
use crate::util::fields;
use crate::util::format::{self, TieredText};

const PAGER_SPAN: u32 = 5;

#[component]
pub fn TradespaceTable(on_open: Callback<String>, on_draw: Callback<Vec<TradespaceRow>>) -> impl IntoView {
    let tradespace = expect_context::<RwSignal<TradespaceState>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    // Only query changes refetch; applying a page leaves the query alone.
    // A reset also changes the query but leaves `loading` off.
    let query = Memo::new(move |_| tradespace.with(|s| s.query.clone()));
    Effect::new(move || {
        let query = query.get();
        if !tradespace.with_untracked(|s| s.loading) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_designs(&query).await {
                Ok(page) => {
                    let mut accepted = None;
                    tradespace.update(|s| {
                        if s.apply_page(page) {
                            accepted = Some(s.rows.clone());
                        }
                    });
                    match accepted {
                        Some(rows) => on_draw.run(rows),
                        None => log::debug!("discarded stale tradespace draw {}", query.draw),
                    }
                }
                Err(e) => {
                    log::warn!("tradespace draw {} failed: {e}", query.draw);
                    tradespace.update(|s| {
                        if s.query.draw == query.draw {
                            s.loading = false;
                        }
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (query, on_draw);
    });

    let can_delete = Memo::new(move |_| auth.with(AuthState::can_delete));

    let on_delete = Callback::new(move |design_id: String| {
        #[cfg(feature = "hydrate")]
        {
            let prompt = crate::state::tradespace::delete_prompt(&design_id);
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message(&prompt).ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_design(&design_id).await {
                    Ok(()) => tradespace.update(TradespaceState::redraw),
                    Err(e) => log::warn!("delete design {design_id} failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = design_id;
    });

    view! {
        <div class="tradespace-table">
            <div class="tradespace-table__controls">
                <label class="tradespace-table__length">
                    "Show "
                    <select on:change=move |ev| {
                        if let Ok(length) = event_target_value(&ev).parse::<u32>() {
                            tradespace.update(|s| s.set_length(length));
                        }
                    }>
                        {PAGE_LENGTHS
                            .into_iter()
                            .map(|length| {
                                view! {
                                    <option
                                        value=length.to_string()
                                        selected=move || tradespace.with(|s| s.query.length == length)
                                    >
                                        {length}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    " entries"
                </label>
                <label class="tradespace-table__valid-only">
                    <input
                        type="checkbox"
                        prop:checked=move || tradespace.with(|s| s.query.valid_only == Some(true))
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            tradespace.update(|s| s.set_valid_only(checked));
                        }
                    />
                    " Valid only"
                </label>
                <button class="btn btn-sm" on:click=move |_| tradespace.update(TradespaceState::redraw)>
                    "Refresh"
                </button>
                <label class="tradespace-table__search">
                    "Search: "
                    <input
                        type="search"
                        prop:value=move || tradespace.with(|s| s.query.search.clone())
                        on:input=move |ev| {
                            let search = event_target_value(&ev);
                            tradespace.update(|s| s.set_search(search));
                        }
                    />
                </label>
            </div>

            <table class="table table-sm table-hover">
                <thead>
                    <tr>
                        {TableColumn::ALL
                            .into_iter()
                            .map(|column| view! { <ColumnHeader column tradespace/> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = tradespace.with(|s| s.rows.clone());
                        if rows.is_empty() {
                            return view! {
                                <tr>
                                    <td colspan=TableColumn::ALL.len().to_string() class="text-center">
                                        "No matching designs"
                                    </td>
                                </tr>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|row| view! { <DesignRow row can_delete=can_delete.get() on_open on_delete/> })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>

            <div class="tradespace-table__footer">
                <span class="tradespace-table__info">{move || tradespace.with(TradespaceState::info_line)}</span>
                <Show when=move || tradespace.with(|s| s.loading)>
                    <span class="tradespace-table__processing">"Processing..."</span>
                </Show>
                <Pager tradespace/>
            </div>
        </div>
    }
}

#[component]
fn ColumnHeader(column: TableColumn, tradespace: RwSignal<TradespaceState>) -> impl IntoView {
    let indicator = move || {
        tradespace.with(|s| {
            if !column.orderable() || s.query.sort_column != column {
                ""
            } else if s.query.sort_dir == SortDir::Asc {
                " \u{25b2}"
            } else {
                " \u{25bc}"
            }
        })
    };
    view! {
        <th
            class:sortable=column.orderable()
            on:click=move |_| {
                if column.orderable() {
                    tradespace.update(|s| s.sort_by(column));
                }
            }
        >
            {column.title()}
            {indicator}
        </th>
    }
}

#[component]
fn DesignRow(
    row: TradespaceRow,
    can_delete: bool,
    on_open: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let open_id = row.design_id.clone();
    let delete_id = row.design_id.clone();
    let href = format!("?id={}", row.design_id);
    let thumbnail = fields::thumbnail_src(&row.thumbnail);
    let [cost_text, value_text] = money_cells(&row);
    let (valid_icon, valid_class) = if row.is_valid { ("\u{2714}", "text-success") } else { ("\u{2718}", "text-danger") };

    view! {
        <tr>
            <td class="tradespace-table__results">
                <a
                    href=href
                    on:click=move |ev| {
                        ev.prevent_default();
                        on_open.run(open_id.clone());
                    }
                >
                    <img class="tradespace-table__thumbnail" src=thumbnail alt=row.name.clone()/>
                </a>
                {can_delete
                    .then(|| {
                        view! {
                            <button
                                class="btn btn-sm btn-danger"
                                title="Delete"
                                on:click=move |_| on_delete.run(delete_id.clone())
                            >
                                "\u{1f5d1}"
                            </button>
                        }
                    })}
            </td>
            <td>{format::local_timestamp(&row.timestamp)}</td>
            <td>{row.designer.clone()}</td>
            <td>{row.name.clone()}</td>
            <td class=valid_class>{valid_icon}</td>
            <td>{cost_text}</td>
            <td>{value_text}</td>
            <TieredCell value=format::profit(row.total_profit)/>
            <TieredCell value=format::roi(row.total_roi)/>
        </tr>
    }
}

#[component]
fn TieredCell(value: TieredText) -> impl IntoView {
    view! { <td class=value.tier.text_class()>{value.text}</td> }
}

#[component]
fn Pager(tradespace: RwSignal<TradespaceState>) -> impl IntoView {
    view! {
        <nav class="pager">
            <button
                class="btn btn-sm"
                disabled=move || !tradespace.with(TradespaceState::has_previous)
                on:click=move |_| tradespace.update(TradespaceState::previous_page)
            >
                "Previous"
            </button>
            {move || {
                let (pages, current) = tradespace.with(|s| (s.page_window(PAGER_SPAN), s.page_index()));
                pages
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class="btn btn-sm"
                                class:active=page == current
                                on:click=move |_| tradespace.update(|s| s.go_to_page(page))
                            >
                                {page + 1}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="btn btn-sm"
                disabled=move || !tradespace.with(TradespaceState::has_next)
                on:click=move |_| tradespace.update(TradespaceState::next_page)
            >
                "Next"
            </button>
        </nav>
    }
}
