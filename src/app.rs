use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::core::{ClientSession, HttpSessionApi, Page};
use crate::ui::pages::{
    BeginningPage, CategoriesPage, MatchesPage, NotFoundPage, PlayersPage, StatisticPage,
    TeamsPage, TournamentsPage,
};
use crate::ui::{Header, provide_session_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ru">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The browser entry point passes the session store it has already started
/// initializing. The server render has none and uses an anonymous store
/// that never touches the network, so both sides render the same markup.
#[component]
pub fn App(
    /// Session store owned by the host
    #[prop(optional)]
    session: Option<ClientSession>,
) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let session = provide_session_context(
        session.unwrap_or_else(|| ClientSession::new(HttpSessionApi::same_origin())),
    );
    on_cleanup(move || session.teardown());

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/tournaments-web.css"/>

        <Title text="Турниры"/>

        <Router>
            <Header/>
            <main class="content">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment(Page::Beginning.segment()) view=BeginningPage/>
                    <Route path=StaticSegment(Page::Teams.segment()) view=TeamsPage/>
                    <Route path=StaticSegment(Page::Players.segment()) view=PlayersPage/>
                    <Route path=StaticSegment(Page::Categories.segment()) view=CategoriesPage/>
                    <Route path=StaticSegment(Page::Tournaments.segment()) view=TournamentsPage/>
                    <Route path=StaticSegment(Page::Matches.segment()) view=MatchesPage/>
                    <Route path=StaticSegment(Page::Statistic.segment()) view=StatisticPage/>
                </Routes>
            </main>
        </Router>
    }
}
