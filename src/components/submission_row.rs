//! Row component for the submissions list.
//!
//! DESIGN
//! ======
//! Submission fields are opaque to the client, so the row shows the id plus
//! a short summary built from whatever scalar fields the record carries.

#[cfg(test)]
#[path = "submission_row_test.rs"]
mod submission_row_test;

use leptos::prelude::*;

use crate::net::types::Submission;

/// One-line preview of a submission's opaque fields: up to three scalar
/// values in record order.
pub fn summary(submission: &Submission) -> String {
    let mut parts = Vec::new();
    for value in submission.fields.values() {
        let text = match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            _ => continue,
        };
        if text.is_empty() {
            continue;
        }
        parts.push(text);
        if parts.len() == 3 {
            break;
        }
    }
    parts.join(", ")
}

/// A single submission row with per-item actions and a link to the detail
/// overlay.
#[component]
pub fn SubmissionRow(
    submission: Submission,
    selector: String,
    on_archive: Callback<u64>,
    on_unarchive: Callback<u64>,
    on_delete: Callback<u64>,
) -> impl IntoView {
    let id = submission.id;
    let href = format!("/{selector}/{id}");
    let preview = summary(&submission);

    view! {
        <div class="submission-row">
            <a class="submission-row__link" href=href>
                <span class="submission-row__id">{format!("#{id}")}</span>
                <span class="submission-row__summary">{preview}</span>
            </a>
            <button
                class="btn submission-row__archive"
                on:click=move |_| on_archive.run(id)
                title="Archive"
            >
                "Archive"
            </button>
            <button
                class="btn submission-row__unarchive"
                on:click=move |_| on_unarchive.run(id)
                title="Unarchive"
            >
                "Unarchive"
            </button>
            <button
                class="btn btn--danger submission-row__delete"
                on:click=move |_| on_delete.run(id)
                title="Delete"
            >
                "Delete"
            </button>
        </div>
    }
}
