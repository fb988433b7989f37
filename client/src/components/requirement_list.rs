//! Requirement-check list for the design detail view.

use leptos::prelude::*;

use crate::net::types::Requirements;
use crate::util::requirements::{RequirementCheck, RequirementMessage, brick_catalog_url, requirement_checks};

#[component]
pub fn RequirementList(requirements: Requirements) -> impl IntoView {
    let checks = requirement_checks(&requirements);
    let overall = if requirements.is_valid { "Valid design" } else { "Invalid design" };
    let overall_class = if requirements.is_valid { "text-success" } else { "text-danger" };

    view! {
        <section class="design-section design-section--requirements">
            <h3>"Requirements"</h3>
            <p class=format!("requirements__overall {overall_class}")>{overall}</p>
            <ul class="requirements">
                {checks.into_iter().map(|check| view! { <RequirementRow check/> }).collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn RequirementRow(check: RequirementCheck) -> impl IntoView {
    let (icon, class) = if check.is_valid { ("\u{2714}", "text-success") } else { ("\u{2718}", "text-danger") };
    let message = match check.message {
        RequirementMessage::InvalidBricks(ids) => {
            let count = ids.len();
            view! {
                <span>
                    "Invalid bricks: "
                    {ids
                        .into_iter()
                        .enumerate()
                        .map(|(i, id)| {
                            let sep = if i + 1 < count { ", " } else { "" };
                            view! {
                                <a href=brick_catalog_url(&id) target="_blank" rel="noopener">{id.clone()}</a>
                                {sep}
                            }
                        })
                        .collect_view()}
                    "."
                </span>
            }
            .into_any()
        }
        other => view! { <span>{other.plain_text()}</span> }.into_any(),
    };

    view! {
        <li class="requirements__row">
            <span class=format!("requirements__icon {class}")>{icon}</span>
            <span class="requirements__label">{check.kind.label()}</span>
            <span class=format!("requirements__message {class}")>{message}</span>
        </li>
    }
}
