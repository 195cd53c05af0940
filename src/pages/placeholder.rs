//! Scenes that have a sidebar entry but no content yet.

use leptos::prelude::*;

#[component]
pub fn PlaceholderPage(title: &'static str) -> impl IntoView {
    view! {
        <section class="placeholder-container">
            <h2>{title}</h2>
            <p class="empty-state">"Coming soon."</p>
        </section>
    }
}
