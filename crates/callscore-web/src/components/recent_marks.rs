//! Compact summary of the latest marks
//!
//! The dashboard half of what used to be a dual-purpose display: the
//! detail rendering lives in [`crate::components::evaluation_detail`],
//! this list shares the records cache entry with the records view.

use crate::store::{FetchState, PollStore};
use callscore_core::types::Record;
use leptos::prelude::*;

/// How many records the summary shows
const SUMMARY_SIZE: usize = 5;

/// Marks of the first few records, one line each
#[component]
pub fn RecentMarks() -> impl IntoView {
    let store = expect_context::<PollStore>();
    let state = store.subscribe_records();

    move || match state.get() {
        FetchState::Ready(records) if !records.is_empty() => Some(
            view! {
                <div class="evaluations-summary">
                    <h3>"Останні оцінки"</h3>
                    <div class="evaluations-list">
                        {records
                            .iter()
                            .take(SUMMARY_SIZE)
                            .map(summary_line)
                            .collect_view()}
                    </div>
                </div>
            }
            .into_any(),
        ),
        _ => None,
    }
}

fn summary_line(record: &Record) -> impl IntoView {
    let mark = record
        .evaluation
        .as_ref()
        .map(|evaluation| evaluation.mark)
        .filter(|mark| *mark != 0.0)
        .map_or_else(|| "В обробці".to_string(), |mark| mark.to_string());

    view! {
        <div class="evaluation-summary-item">
            <strong>"ID " {record.id} ": "</strong>
            {mark}
        </div>
    }
}
