//! Route table
//!
//! Static mapping between URL paths and the pages of the application.
//! The Leptos router in `app.rs` is built from these entries, and
//! `Page::resolve` answers the same question outside of a reactive context.

/// A page of the application bound to exactly one URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Beginning,
    Teams,
    Players,
    Categories,
    Tournaments,
    Matches,
    Statistic,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 7] = [
        Page::Beginning,
        Page::Teams,
        Page::Players,
        Page::Categories,
        Page::Tournaments,
        Page::Matches,
        Page::Statistic,
    ];

    /// Path segment used by the router (`""` for the root page).
    pub const fn segment(self) -> &'static str {
        match self {
            Page::Beginning => "",
            Page::Teams => "teams",
            Page::Players => "players",
            Page::Categories => "categories",
            Page::Tournaments => "tournaments",
            Page::Matches => "matches",
            Page::Statistic => "statistic",
        }
    }

    /// Absolute path of the page.
    pub const fn path(self) -> &'static str {
        match self {
            Page::Beginning => "/",
            Page::Teams => "/teams",
            Page::Players => "/players",
            Page::Categories => "/categories",
            Page::Tournaments => "/tournaments",
            Page::Matches => "/matches",
            Page::Statistic => "/statistic",
        }
    }

    /// View identifier of the page.
    pub const fn name(self) -> &'static str {
        match self {
            Page::Beginning => "beginning",
            Page::Teams => "teams",
            Page::Players => "players",
            Page::Categories => "categories",
            Page::Tournaments => "tournaments",
            Page::Matches => "matches",
            Page::Statistic => "statistic",
        }
    }

    /// Navigation label shown in the header.
    pub const fn label(self) -> &'static str {
        match self {
            Page::Beginning => "Главная",
            Page::Teams => "Команды",
            Page::Players => "Игроки",
            Page::Categories => "Категории",
            Page::Tournaments => "Турниры",
            Page::Matches => "Матчи",
            Page::Statistic => "Статистика",
        }
    }

    /// Resolve a location to its page.
    ///
    /// Query strings and fragments are ignored, as are a single trailing
    /// slash and ASCII case. Returns `None` for paths with no declared page.
    pub fn resolve(location: &str) -> Option<Page> {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };

        Page::ALL
            .into_iter()
            .find(|page| page.path().eq_ignore_ascii_case(path))
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_declared_paths_resolve() {
        let expected = [
            ("/", Page::Beginning),
            ("/teams", Page::Teams),
            ("/players", Page::Players),
            ("/categories", Page::Categories),
            ("/tournaments", Page::Tournaments),
            ("/matches", Page::Matches),
            ("/statistic", Page::Statistic),
        ];

        for (path, page) in expected {
            assert_eq!(Page::resolve(path), Some(page), "path {}", path);
        }
    }

    #[test]
    fn test_names_and_paths_are_unique() {
        let names: HashSet<_> = Page::ALL.iter().map(|p| p.name()).collect();
        let paths: HashSet<_> = Page::ALL.iter().map(|p| p.path()).collect();

        assert_eq!(names.len(), Page::ALL.len());
        assert_eq!(paths.len(), Page::ALL.len());
    }

    #[test]
    fn test_segment_matches_path() {
        for page in Page::ALL {
            assert_eq!(format!("/{}", page.segment()), page.path());
        }
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Page::resolve("/login"), None);
        assert_eq!(Page::resolve("/teams/42"), None);
        assert_eq!(Page::resolve(""), None);
        assert_eq!(Page::resolve("teams"), None);
    }

    #[test]
    fn test_resolve_is_lenient_like_the_browser_router() {
        assert_eq!(Page::resolve("/teams/"), Some(Page::Teams));
        assert_eq!(Page::resolve("/Matches"), Some(Page::Matches));
        assert_eq!(Page::resolve("/players?page=2"), Some(Page::Players));
        assert_eq!(Page::resolve("/statistic#top"), Some(Page::Statistic));
        assert_eq!(Page::resolve("/?next=/teams"), Some(Page::Beginning));
    }

    #[test]
    fn test_display_is_view_name() {
        for page in Page::ALL {
            assert_eq!(page.to_string(), page.name());
        }
        assert_eq!(Page::Teams.to_string(), "teams");
    }
}
