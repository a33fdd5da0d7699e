//! Not found page component
//!
//! Rendered for any path the route table does not declare.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::Page;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page not-found">
            <h1>"404"</h1>
            <p>"Такой страницы нет."</p>
            <A href=Page::Beginning.path()>"На главную"</A>
        </section>
    }
}
