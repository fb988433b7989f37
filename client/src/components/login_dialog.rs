//! Login dialog (email + passcode) with implicit registration.
//!
//! DESIGN
//! ======
//! A failed login falls through to registration with the same credentials,
//! and a successful registration retries the login once. Only registration
//! errors are surfaced, as per-field messages.

use leptos::prelude::*;

use crate::state::ui::{Dialog, UiState};
#[cfg(feature = "hydrate")]
use crate::state::auth::{LoginField, registration_error};

#[component]
pub fn LoginDialog(on_logged_in: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let email = RwSignal::new(String::new());
    let passcode = RwSignal::new(String::new());
    let email_message = RwSignal::new(String::new());
    let passcode_message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let close = move || ui.update(|s| s.close(Dialog::Login));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        email_message.set(String::new());
        passcode_message.set(String::new());
        let email_value = email.get().trim().to_owned();
        let passcode_value = passcode.get();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api;

            let result = match api::login(&email_value, &passcode_value).await {
                Ok(()) => Ok(()),
                Err(login_err) => {
                    log::debug!("login failed ({login_err}), trying registration");
                    match api::register(&email_value, &passcode_value).await {
                        Ok(()) => api::login(&email_value, &passcode_value).await,
                        Err(e) => {
                            match e.status().and_then(registration_error) {
                                Some((LoginField::Email, text)) => email_message.set(text.to_owned()),
                                Some((LoginField::Passcode, text)) => passcode_message.set(text.to_owned()),
                                None => {}
                            }
                            Err(e)
                        }
                    }
                }
            };
            busy.set(false);
            match result {
                Ok(()) => {
                    passcode.set(String::new());
                    ui.update(|s| s.close(Dialog::Login));
                    on_logged_in.run(());
                }
                Err(e) => log::warn!("login for {email_value} failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, passcode_value, on_logged_in);
            busy.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop">
            <div class="dialog dialog--login">
                <h2>"Log in"</h2>
                <form on:submit=on_submit>
                    <label class="dialog__field">
                        "Email"
                        <input
                            type="email"
                            autocomplete="username"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <small class="dialog__field-message text-danger">{move || email_message.get()}</small>
                    <label class="dialog__field">
                        "Passcode"
                        <input
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || passcode.get()
                            on:input=move |ev| passcode.set(event_target_value(&ev))
                        />
                    </label>
                    <small class="dialog__field-message text-danger">{move || passcode_message.get()}</small>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| close()>"Cancel"</button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>"Log in"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
