//! Loading component for displaying loading states

use leptos::prelude::*;

/// Loading indicator component
#[component]
pub fn Loading(
    /// Message shown while data is on its way
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="loading">{message}</div>
    }
}
