//! Pagination component for navigating through data

use leptos::prelude::*;

/// Pagination controls; the buttons disable at the boundaries so an
/// out-of-range page can never be requested
#[component]
pub fn Pagination(
    /// Current page (1-based)
    current_page: usize,
    /// Total number of pages
    total_pages: usize,
    /// Callback when page changes
    #[prop(into)]
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let has_prev = current_page > 1;
    let has_next = current_page < total_pages;

    view! {
        <div class="pagination">
            <button
                class="pagination-button"
                disabled=!has_prev
                on:click=move |_| {
                    if has_prev {
                        on_page_change.run(current_page - 1);
                    }
                }
            >
                "←"
            </button>

            <span class="pagination-info">
                "Сторінка " {current_page} " з " {total_pages}
            </span>

            <button
                class="pagination-button"
                disabled=!has_next
                on:click=move |_| {
                    if has_next {
                        on_page_change.run(current_page + 1);
                    }
                }
            >
                "→"
            </button>
        </div>
    }
}
