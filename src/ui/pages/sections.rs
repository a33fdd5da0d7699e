//! Section pages
//!
//! Every section shares the same frame, titled from the route table.

use leptos::prelude::*;

use crate::core::Page;

#[component]
fn SectionFrame(page: Page) -> impl IntoView {
    view! {
        <section class=format!("page {}", page.name())>
            <h1>{page.label()}</h1>
        </section>
    }
}

#[component]
pub fn TeamsPage() -> impl IntoView {
    view! { <SectionFrame page=Page::Teams/> }
}

#[component]
pub fn PlayersPage() -> impl IntoView {
    view! { <SectionFrame page=Page::Players/> }
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    view! { <SectionFrame page=Page::Categories/> }
}

#[component]
pub fn TournamentsPage() -> impl IntoView {
    view! { <SectionFrame page=Page::Tournaments/> }
}

#[component]
pub fn MatchesPage() -> impl IntoView {
    view! { <SectionFrame page=Page::Matches/> }
}

#[component]
pub fn StatisticPage() -> impl IntoView {
    view! { <SectionFrame page=Page::Statistic/> }
}
