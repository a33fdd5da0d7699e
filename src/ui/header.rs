//! Site header: navigation built from the route table plus the user menu.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::Page;
use crate::ui::auth::UserMenu;

/// Site header component
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <nav class="site-nav">
                {Page::ALL
                    .into_iter()
                    .map(|page| view! { <A href=page.path()>{page.label()}</A> })
                    .collect_view()}
            </nav>
            <UserMenu/>
        </header>
    }
}
