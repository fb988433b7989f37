//! Upload dialog for `.io` model files.
//!
//! Selecting a file validates it locally first. Rejected files only show a
//! message; accepted files upload immediately with a progress bar.

use leptos::prelude::*;

use crate::net::types::DesignResult;
use crate::state::design::DesignState;
use crate::state::ui::{Dialog, UiState};

#[component]
pub fn UploadDialog(on_uploaded: Callback<DesignResult>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let design = expect_context::<RwSignal<DesignState>>();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let close = move || ui.update(|s| s.close(Dialog::Upload));

    let on_change = move |_| {
        let Some(input) = input_ref.get() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let accepted = design
                .try_update(|s| s.select_file(&file.name(), file.size()).is_ok())
                .unwrap_or(false);
            if !accepted {
                return;
            }
            leptos::task::spawn_local(async move {
                let on_progress = move |percent: f64| design.update(|s| s.upload_progress = percent);
                match crate::net::api::upload_design(file, on_progress).await {
                    Ok(uploaded) => {
                        input.set_value("");
                        on_uploaded.run(uploaded);
                    }
                    Err(e) => {
                        design.update(|s| s.upload_progress = 0.0);
                        log::warn!("upload failed: {e}");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (input, on_uploaded);
    };

    let progress = move || design.with(|s| s.upload_progress);

    view! {
        <div class="dialog-backdrop" on:click=move |_| ui.update(|s| s.backdrop_click(Dialog::Upload))>
            <div class="dialog dialog--upload" on:click=move |ev| ev.stop_propagation()>
                <h2>"Upload design"</h2>
                <label class="custom-file">
                    <input node_ref=input_ref type="file" accept=".io" class="custom-file-input" on:change=on_change/>
                    <span class="custom-file-label">{move || design.with(|s| s.file_label().to_owned())}</span>
                </label>
                <small class="dialog__field-message text-danger">{move || design.with(|s| s.upload_message.clone())}</small>
                <Show when=move || design.with(DesignState::progress_visible)>
                    <div class="progress">
                        <div
                            class="progress-bar"
                            role="progressbar"
                            style:width=move || format!("{}%", progress())
                            aria-valuenow=move || progress().to_string()
                            aria-valuemin="0"
                            aria-valuemax="100"
                        ></div>
                    </div>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| close()>"Close"</button>
                </div>
            </div>
        </div>
    }
}
