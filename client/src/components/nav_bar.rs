//! Top navigation: tabs, upload button and session links.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::{Tab, UiState};

#[component]
pub fn NavBar(on_logout: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let logged_in = move || auth.with(AuthState::is_logged_in);
    let user_name = move || {
        auth.with(|s| s.user.as_ref().map(|u| u.display_name().to_owned()).unwrap_or_default())
    };

    let on_upload = move |_| {
        if logged_in() {
            ui.update(|s| s.upload_open = true);
        } else {
            ui.update(|s| s.login_open = true);
        }
    };

    view! {
        <nav class="navbar">
            <span class="navbar-brand">"Tradespace"</span>
            <ul class="nav nav-tabs">
                {Tab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <li class="nav-item">
                                <a
                                    href="#"
                                    class="nav-link"
                                    class:active=move || ui.with(|s| s.tab == tab)
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        let logged_in = logged_in();
                                        ui.update(|s| {
                                            s.request_tab(tab, logged_in);
                                        });
                                    }
                                >
                                    {tab.title()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class="btn btn-sm" on:click=on_upload>"Upload"</button>
            <Show
                when=logged_in
                fallback=move || {
                    view! {
                        <a href="#" class="nav-link" on:click=move |ev| {
                            ev.prevent_default();
                            ui.update(|s| s.login_open = true);
                        }>
                            "Log in"
                        </a>
                    }
                }
            >
                <span class="navbar-text">{user_name}</span>
                <a href="#" class="nav-link" on:click=move |ev| {
                    ev.prevent_default();
                    on_logout.run(());
                }>
                    "Log out"
                </a>
            </Show>
        </nav>
    }
}
