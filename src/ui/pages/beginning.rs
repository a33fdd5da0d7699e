//! Beginning (home) page component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::Page;
use crate::ui::auth::use_session_context;

/// Beginning page component
#[component]
pub fn BeginningPage() -> impl IntoView {
    let info = ReadSignal::from(use_session_context().info());

    let greeting = move || {
        info.with(|i| match i.username() {
            Some(name) => format!("Добро пожаловать, {}!", name),
            None => "Добро пожаловать!".to_string(),
        })
    };

    view! {
        <section class="page beginning">
            <h1>{greeting}</h1>
            <p>"Команды, игроки, турниры и матчи в одном месте."</p>
            <ul class="section-list">
                {Page::ALL
                    .into_iter()
                    .filter(|page| *page != Page::Beginning)
                    .map(|page| view! { <li><A href=page.path()>{page.label()}</A></li> })
                    .collect_view()}
            </ul>
        </section>
    }
}
