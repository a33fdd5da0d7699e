//! Application pages module
//!
//! One component per entry of the route table:
//! - Beginning page (home)
//! - Teams, players, categories, tournaments, matches, statistic sections
//! - Not found page for everything else

mod beginning;
mod not_found;
mod sections;

pub use beginning::BeginningPage;
pub use not_found::NotFoundPage;
pub use sections::{
    CategoriesPage, MatchesPage, PlayersPage, StatisticPage, TeamsPage, TournamentsPage,
};
