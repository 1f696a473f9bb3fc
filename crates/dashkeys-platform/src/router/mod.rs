//! Path routing for the dashboard views.

mod outlet;
mod table;

pub use outlet::RouterOutlet;
pub use table::{Route, RouteMatch, Router, CATCH_ALL};

#[cfg(test)]
mod tests {
    use dashkeys_common::{AppEvent, View};

    use super::*;

    fn dashboard() -> Router {
        Router::dashboard().unwrap()
    }

    #[test]
    fn root_resolves_to_showcase() {
        assert_eq!(dashboard().resolve("/").unwrap().view, "showcase-view");
    }

    #[test]
    fn every_view_path_has_a_route() {
        let router = dashboard();
        for view in View::ALL {
            let resolved = router.resolve(view.path()).unwrap();
            assert_ne!(resolved.view, "not-found-view", "{}", view.path());
            assert!(!resolved.route.contains('('));
        }
    }

    #[test]
    fn named_parameter_is_captured() {
        let resolved = dashboard().resolve("/todos/kanban").unwrap();
        assert_eq!(resolved.view, "todos-view");
        assert_eq!(resolved.route, "/todos/:variant");
        assert_eq!(resolved.params.get("variant").map(String::as_str), Some("kanban"));
    }

    #[test]
    fn parameter_matches_one_segment_only() {
        let resolved = dashboard().resolve("/todos/a/b").unwrap();
        assert_eq!(resolved.view, "not-found-view");
    }

    #[test]
    fn unknown_path_hits_catch_all() {
        let resolved = dashboard().resolve("/nowhere").unwrap();
        assert_eq!(resolved.view, "not-found-view");
        assert!(resolved.params.is_empty());
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        let router = dashboard();
        assert_eq!(router.resolve("/settings?theme=dark").unwrap().view, "settings-view");
        let resolved = router.resolve("/widgets#top").unwrap();
        assert_eq!(resolved.view, "widgets-view");
        assert_eq!(resolved.path, "/widgets");
    }

    #[test]
    fn empty_router_resolves_nothing() {
        assert!(Router::new().resolve("/").is_none());
    }

    #[test]
    fn added_route_goes_before_catch_all() {
        let mut router = dashboard();
        router.add_route("/reports/:id", "reports-view").unwrap();

        let resolved = router.resolve("/reports/42").unwrap();
        assert_eq!(resolved.view, "reports-view");
        assert_eq!(resolved.params["id"], "42");
        assert!(router.routes().last().unwrap().is_catch_all());
    }

    #[test]
    fn adding_existing_pattern_replaces_view() {
        let mut router = dashboard();
        let count = router.routes().len();
        router.add_route("/profile", "account-view").unwrap();
        assert_eq!(router.routes().len(), count);
        assert_eq!(router.resolve("/profile").unwrap().view, "account-view");
    }

    #[test]
    fn remove_route() {
        let mut router = dashboard();
        assert!(router.remove_route("/analytics"));
        assert!(!router.remove_route("/analytics"));
        assert_eq!(router.resolve("/analytics").unwrap().view, "not-found-view");
    }

    #[test]
    fn invalid_patterns_are_rejected() {
        let mut router = Router::new();
        assert!(router.add_route("/a/:", "x").is_err());
        assert!(router.add_route("/a/(b", "x").is_err());
        assert!(router.routes().is_empty());
    }

    #[test]
    fn literal_characters_are_escaped() {
        let mut router = Router::new();
        router.add_route("/a.b", "dot-view").unwrap();
        assert!(router.resolve("/a.b").is_some());
        assert!(router.resolve("/axb").is_none());
    }

    #[test]
    fn outlet_follows_navigate_events() {
        let mut outlet = RouterOutlet::new(dashboard());
        assert!(outlet.location().is_none());

        assert!(outlet.handle(&AppEvent::Navigate {
            path: "/todos".into()
        }));
        assert_eq!(outlet.current_view(), Some("todos-view"));

        assert!(!outlet.handle(&AppEvent::ToggleTheme));
        assert_eq!(outlet.history(), &["/todos".to_string()]);
    }

    #[test]
    fn outlet_keeps_location_when_nothing_matches() {
        let mut outlet = RouterOutlet::new(Router::new());
        outlet.router_mut().add_route("/", "home-view").unwrap();
        outlet.navigate("/");

        assert!(outlet.navigate("/missing").is_none());
        assert_eq!(outlet.current_view(), Some("home-view"));
        assert_eq!(outlet.history().len(), 1);
    }
}
