//! Recent records list with client-side pagination

use crate::components::loading::Loading;
use crate::components::pagination::Pagination;
use crate::store::{FetchState, PollStore};
use callscore_core::types::{Evaluation, Record};
use callscore_core::utils::{
    clamp_page, format_timestamp, mark_class, page_items, status_class, status_label, total_pages,
};
use leptos::prelude::*;

/// Fixed number of records per page
pub const PAGE_SIZE: usize = 5;

/// Paginated list of the latest records, fed from the shared polling store
#[component]
pub fn LastRecords() -> impl IntoView {
    let store = expect_context::<PollStore>();
    let state = store.subscribe_records();
    let page = RwSignal::new(1_usize);

    // Keep the page index inside [1, total_pages] when the list changes
    // underneath the viewer
    Effect::new(move |_| {
        if let FetchState::Ready(records) = state.get() {
            let clamped = clamp_page(page.get_untracked(), total_pages(records.len(), PAGE_SIZE));
            if clamped != page.get_untracked() {
                page.set(clamped);
            }
        }
    });

    move || match state.get() {
        FetchState::Failed(message) => {
            Some(view! { <div class="error-message">{message}</div> }.into_any())
        }
        FetchState::Loading => {
            Some(view! { <Loading message="Завантаження записів..." /> }.into_any())
        }
        FetchState::Ready(records) if records.is_empty() => None,
        FetchState::Ready(records) => {
            let total = total_pages(records.len(), PAGE_SIZE);
            let current = clamp_page(page.get(), total);
            let rows = page_items(&records, current, PAGE_SIZE)
                .iter()
                .cloned()
                .map(|record| view! { <RecordCard record=record /> })
                .collect_view();
            let pagination = (total > 1).then(|| {
                view! {
                    <Pagination
                        current_page=current
                        total_pages=total
                        on_page_change=Callback::new(move |next| page.set(next))
                    />
                }
            });

            Some(
                view! {
                    <section class="feature-section">
                        <h2>"📋 Останні записи"</h2>
                        <div class="evaluations-content">{rows}</div>
                        {pagination}
                    </section>
                }
                .into_any(),
            )
        }
    }
}

/// One record: header with ID, status badge and creation time, then the
/// transcription and the evaluation details or a pending placeholder
#[component]
fn RecordCard(record: Record) -> impl IntoView {
    let created_at = record
        .created_at
        .as_deref()
        .map(format_timestamp)
        .unwrap_or_default();
    let transcription = record
        .transcription
        .clone()
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| "Очікується транскрипція...".to_string());
    let evaluation = match record.evaluation {
        Some(evaluation) => view! { <RecordEvaluation evaluation=evaluation /> }.into_any(),
        None => view! {
            <div class="evaluation-pending">
                <p>"Оцінка в процесі..."</p>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="evaluation-item">
            <div class="evaluation-header">
                <div class="header-left">
                    <strong>"ID запису: " {record.id}</strong>
                    <span class=format!("status {}", status_class(record.status))>
                        {status_label(record.status)}
                    </span>
                </div>
                <span class="date">{created_at}</span>
            </div>

            <div class="evaluation-body">
                <div class="transcription">
                    <strong>"Транскрипція:"</strong>
                    <p>{transcription}</p>
                </div>
                {evaluation}
            </div>
        </div>
    }
}

/// The evaluation block of a record
#[component]
fn RecordEvaluation(evaluation: Evaluation) -> impl IntoView {
    let text = if evaluation.text.is_empty() {
        "Текст оцінки відсутній".to_string()
    } else {
        evaluation.text.clone()
    };
    let comment = evaluation.comment.clone().map(|comment| {
        view! {
            <div class="comment">
                <strong>"Коментар: "</strong>
                {comment}
            </div>
        }
    });
    let summary = evaluation.summary.clone().map(|summary| {
        view! {
            <div class="summary">
                <strong>"Підсумок:"</strong>
                <p>{summary}</p>
            </div>
        }
    });
    let marks = evaluation.marks.clone().map(|marks| {
        view! {
            <div class="detailed-marks">
                <strong>"Детальні оцінки:"</strong>
                <ul>
                    {marks
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <li>
                                    <span class="mark-label">{label}":"</span>
                                    <span class=format!("mark-value {}", mark_class(value))>
                                        {value}
                                    </span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        }
    });
    let evaluated_at = evaluation.evaluated_at.clone().map(|timestamp| {
        view! {
            <div class="evaluation-date">
                <strong>"Дата оцінки: "</strong>
                {format_timestamp(&timestamp)}
            </div>
        }
    });

    view! {
        <div class="evaluation-details">
            <div class=format!("mark {}", mark_class(evaluation.mark))>
                <strong>"Оцінка: "</strong>
                {evaluation.mark}
            </div>

            <div class="evaluation-text">
                <strong>"Оцінка розмови:"</strong>
                <p>{text}</p>
            </div>

            {comment}
            {summary}
            {marks}
            {evaluated_at}
        </div>
    }
}
