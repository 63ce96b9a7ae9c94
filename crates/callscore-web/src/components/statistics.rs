//! Aggregate statistics panel

use crate::components::loading::Loading;
use crate::store::{FetchState, PollStore};
use callscore_core::utils::format_average_mark;
use leptos::prelude::*;

/// Statistics panel, fed from the shared polling store
#[component]
pub fn Statistics() -> impl IntoView {
    let store = expect_context::<PollStore>();
    let state = store.subscribe_statistics();

    move || match state.get() {
        FetchState::Failed(message) => {
            view! { <div class="error-message">{message}</div> }.into_any()
        }
        FetchState::Loading => {
            view! { <Loading message="Завантаження статистики..." /> }.into_any()
        }
        FetchState::Ready(stats) => {
            let distribution = stats.marks_distribution.clone().map(|distribution| {
                // JSON object keys are strings; show the marks in order
                let mut entries: Vec<(String, i64)> = distribution.into_iter().collect();
                entries.sort_by_key(|(mark, _)| mark.parse::<i64>().unwrap_or(i64::MAX));

                view! {
                    <div class="statistic-item marks-distribution">
                        <strong>"Розподіл оцінок:"</strong>
                        <div class="marks-grid">
                            {entries
                                .into_iter()
                                .map(|(mark, count)| {
                                    view! {
                                        <div class="mark-item">
                                            <span class="mark">{mark}":"</span>
                                            <span class="count">{count}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                }
            });

            view! {
                <section class="feature-section">
                    <h2>"📊 Статистика"</h2>
                    <div class="statistics-content">
                        <div class="statistic-item">
                            <strong>"Всього записів:"</strong>
                            <span>{stats.total_records}</span>
                        </div>
                        <div class="statistic-item">
                            <strong>"Оцінено записів:"</strong>
                            <span>{stats.evaluated_records}</span>
                        </div>
                        <div class="statistic-item">
                            <strong>"Очікують оцінки:"</strong>
                            <span>{stats.pending_evaluations}</span>
                        </div>
                        <div class="statistic-item">
                            <strong>"Середня оцінка:"</strong>
                            <span>{format_average_mark(stats.average_mark)}</span>
                        </div>
                        {distribution}
                    </div>
                </section>
            }
            .into_any()
        }
    }
}
