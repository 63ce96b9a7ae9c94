//! Evaluation lookup by record ID

use crate::components::evaluation_detail::EvaluationDetail;
use crate::services::evaluation::get_evaluation;
use callscore_core::types::EvaluationLookup;
use leptos::prelude::*;

/// Single-field lookup form; a successful lookup swaps in the detail view
#[component]
pub fn QualityEvaluation() -> impl IntoView {
    let record_id = RwSignal::new(String::new());
    let result = RwSignal::new(None::<EvaluationLookup>);
    let error = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);

    let run_lookup = move |_| {
        let id = record_id.get_untracked().trim().to_string();
        if id.is_empty() {
            error.set(Some("Будь ласка, введіть ID запису".to_string()));
            return;
        }

        is_loading.set(true);
        error.set(None);
        result.set(None);

        leptos::task::spawn_local(async move {
            match get_evaluation(&id).await {
                Ok(data) => {
                    result.set(Some(data));
                    error.set(None);
                }
                Err(message) => {
                    error.set(Some(message));
                    result.set(None);
                }
            }
            is_loading.set(false);
        });
    };

    view! {
        <div class="quality-evaluation-page">
            <h2>"Оцінка якості розмови"</h2>
            <div class="evaluation-description">
                "Введіть ID запису для отримання оцінки"
            </div>
            <div class="evaluation-input-group">
                <input
                    type="number"
                    min="1"
                    placeholder="Введіть ID запису"
                    prop:value=move || record_id.get()
                    on:input=move |ev| record_id.set(event_target_value(&ev))
                />
                <button
                    on:click=run_lookup
                    disabled=move || record_id.get().trim().is_empty() || is_loading.get()
                >
                    {move || if is_loading.get() { "Завантаження..." } else { "Отримати" }}
                </button>
            </div>

            {move || error.get().map(|message| view! { <div class="error-message">{message}</div> })}

            {move || {
                result
                    .get()
                    .map(|data| {
                        view! {
                            <div class="result-section">
                                <EvaluationDetail data=data />
                            </div>
                        }
                    })
            }}
        </div>
    }
}
