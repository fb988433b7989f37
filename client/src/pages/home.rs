//! Single-page shell: tabs, dialogs and the shared design-loading path.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every way of opening a design (table thumbnail, chart point, `?id=` deep
//! link, upload) ends in `show_design`, which fills `DesignState` and moves
//! to the Design tab. The table reports each accepted page through its
//! page-drawn callback, which rebuilds the chart from the same rows.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::design_detail::DesignDetail;
use crate::components::login_dialog::LoginDialog;
use crate::components::nav_bar::NavBar;
use crate::components::tradespace_chart::TradespaceChart;
use crate::components::tradespace_table::TradespaceTable;
use crate::components::upload_dialog::UploadDialog;
use crate::net::types::{DesignResult, TradespaceRow};
use crate::state::auth::AuthState;
use crate::state::chart::ChartData;
use crate::state::design::DesignState;
use crate::state::tradespace::TradespaceState;
use crate::state::ui::{Tab, UiState};

const PALETTE_DOWNLOAD: &str = "/resources/ISE_Palette.xml";
const SAMPLE_MODEL_DOWNLOAD: &str = "/resources/ModelA.io";

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let design = expect_context::<RwSignal<DesignState>>();
    let tradespace = expect_context::<RwSignal<TradespaceState>>();
    let chart = RwSignal::new(ChartData::default());
    let query = use_query_map();

    let check_session = move || {
        auth.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.set(AuthState { user, loading: false });
        });
    };
    check_session();

    let show_design = Callback::new(move |loaded: DesignResult| {
        design.update(|s| s.display(loaded));
        ui.update(UiState::show_design);
    });

    let load_design = Callback::new(move |design_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_design(&design_id).await {
                Ok(loaded) => show_design.run(loaded),
                Err(e) => log::warn!("load design {design_id} failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (design_id, show_design);
    });

    // Deep link: open `?id=` once, after the session check succeeds.
    let deep_link_done = RwSignal::new(false);
    Effect::new(move || {
        if deep_link_done.get_untracked() {
            return;
        }
        if !auth.with(|s| !s.loading && s.user.is_some()) {
            return;
        }
        deep_link_done.set(true);
        if let Some(design_id) = query.with(|q| q.get("id")).filter(|id| !id.is_empty()) {
            load_design.run(design_id);
        }
    });

    // Showing the tradespace tab always redraws the table.
    let shown_seq = Memo::new(move |_| ui.with(|s| s.tradespace_shown_seq));
    Effect::new(move || {
        if shown_seq.get() > 0 {
            tradespace.update(TradespaceState::redraw);
        }
    });

    let on_draw = Callback::new(move |rows: Vec<TradespaceRow>| chart.set(ChartData::rebuild(&rows)));

    let on_logout = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::logout().await {
                Ok(()) => {
                    chart.set(ChartData::default());
                    tradespace.update(TradespaceState::reset);
                    ui.update(UiState::reset_to_home);
                    check_session();
                }
                Err(e) => log::warn!("logout failed: {e}"),
            }
        });
    });

    let on_logged_in = Callback::new(move |()| check_session());
    let tab_is = move |tab: Tab| ui.with(|s| s.tab == tab);

    view! {
        <NavBar on_logout/>
        <main class="container">
            <section class="tab-pane" class:active=move || tab_is(Tab::Home) hidden=move || !tab_is(Tab::Home)>
                <Landing/>
            </section>
            <section class="tab-pane" class:active=move || tab_is(Tab::Design) hidden=move || !tab_is(Tab::Design)>
                <DesignDetail/>
            </section>
            <section
                class="tab-pane"
                class:active=move || tab_is(Tab::Tradespace)
                hidden=move || !tab_is(Tab::Tradespace)
            >
                <TradespaceChart data=chart on_open=load_design/>
                <TradespaceTable on_open=load_design on_draw/>
            </section>
        </main>
        <Show when=move || ui.with(|s| s.login_open)>
            <LoginDialog on_logged_in/>
        </Show>
        <Show when=move || ui.with(|s| s.upload_open)>
            <UploadDialog on_uploaded=show_design/>
        </Show>
    }
}

#[component]
fn Landing() -> impl IntoView {
    view! {
        <div class="landing">
            <h1>"Design Tradespace"</h1>
            <p>
                "Build a vehicle from the brick palette, upload the model, and compare its cost and value against every other submitted design."
            </p>
            <ul class="landing__downloads">
                <li>
                    <a class="palette-link" href=PALETTE_DOWNLOAD download="">"Brick palette"</a>
                </li>
                <li>
                    <a class="modela-link" href=SAMPLE_MODEL_DOWNLOAD download="">"Sample model"</a>
                </li>
            </ul>
        </div>
    }
}
