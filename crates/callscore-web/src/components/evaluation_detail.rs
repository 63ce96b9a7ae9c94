//! Pure rendering of a fetched evaluation payload
//!
//! A function of its input only: no fetching, no timers. The payload
//! arrives pre-coerced from the lookup service.

use callscore_core::types::EvaluationLookup;
use callscore_core::utils::format_timestamp;
use leptos::prelude::*;

/// Detail view of one evaluation lookup result
#[component]
pub fn EvaluationDetail(
    /// Coerced lookup payload
    data: EvaluationLookup,
) -> impl IntoView {
    let status = if data.evaluation.status == "completed" {
        "Завершено"
    } else {
        "В обробці"
    };
    let evaluated_at = data
        .evaluation
        .evaluated_at
        .as_deref()
        .map(format_timestamp)
        .unwrap_or_default();
    let created_at = (!data.created_at.is_empty()).then(|| {
        view! {
            <div class="result-item">
                <strong>"Створено: "</strong>
                {format_timestamp(&data.created_at)}
            </div>
        }
    });

    view! {
        <div class="evaluation-content">
            <div class="result-item">
                <strong>"Текст розмови:"</strong>
                <div class="text-content">{data.speech.text.clone()}</div>
            </div>
            <div class="result-item">
                <strong>"Тип файлу: "</strong>
                {data.speech.file_type.clone()}
            </div>
            <div class="result-item">
                <strong>"Оброблено: "</strong>
                {format_timestamp(&data.speech.processed_at)}
            </div>

            <div class="result-item">
                <strong>"Оцінка: "</strong>
                {data.evaluation.mark}
            </div>
            <div class="result-item">
                <strong>"Коментар: "</strong>
                {data.evaluation.text.clone()}
            </div>
            <div class="result-item">
                <strong>"Статус: "</strong>
                {status}
            </div>
            <div class="result-item">
                <strong>"Оцінено: "</strong>
                {evaluated_at}
            </div>

            <div class="result-item">
                <strong>"Загальна оцінка: "</strong>
                {data.mark}
            </div>
            {created_at}
        </div>
    }
}
