//! Main application component with top-level view switching

use crate::components::{
    audio_upload::AudioUpload, last_records::LastRecords, quality_evaluation::QualityEvaluation,
    recent_marks::RecentMarks, statistics::Statistics,
};
use crate::store::PollStore;
use leptos::prelude::*;

/// The subtree currently mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    /// Dashboard with statistics, records and the feature buttons
    Home,
    /// Full-screen upload flow
    Upload,
    /// Full-screen lookup flow
    Lookup,
}

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_context(PollStore::new());
    let current = RwSignal::new(View::Home);

    view! {
        <div class="app">
            <header class="app-header">
                <div class="header-content">
                    <h1>
                        "Система оцінювання дзвінків. Оцінка здійснюється за шкалою від 1 до 10"
                    </h1>
                </div>
            </header>

            {move || match current.get() {
                View::Home => {
                    view! {
                        <div class="main-content">
                            <section class="feature-section">
                                <h2>"🎤 Завантаження аудіо"</h2>
                                <p>"Завантажити новий аудіо файл для оцінки"</p>
                                <button
                                    class="upload-button"
                                    on:click=move |_| current.set(View::Upload)
                                >
                                    "Завантажити аудіо"
                                </button>
                            </section>

                            <section class="feature-section">
                                <h2>"📝 Оцінка якості"</h2>
                                <p>"Отримати оцінку якості розмови за ID запису"</p>
                                <button
                                    class="quality-evaluation-button"
                                    on:click=move |_| current.set(View::Lookup)
                                >
                                    "Оцінка якості розмови"
                                </button>
                            </section>

                            <Statistics />
                            <LastRecords />
                            <RecentMarks />
                        </div>
                    }
                        .into_any()
                }
                View::Upload => {
                    view! {
                        <div class="evaluation-page">
                            <BackButton current=current />
                            <AudioUpload />
                        </div>
                    }
                        .into_any()
                }
                View::Lookup => {
                    view! {
                        <div class="evaluation-page">
                            <BackButton current=current />
                            <QualityEvaluation />
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// Returns to the dashboard
#[component]
fn BackButton(current: RwSignal<View>) -> impl IntoView {
    view! {
        <button class="back-button" on:click=move |_| current.set(View::Home)>
            "← Назад"
        </button>
    }
}
