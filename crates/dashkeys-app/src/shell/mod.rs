//! The keyboard-driven dashboard shell: shortcut dispatch wired to routing,
//! theming, and the transient UI it controls.

mod core;
mod events;
pub mod script;

pub use self::core::{DashboardShell, HELP_OVERLAY};

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use dashkeys_config::DashkeysConfig;
    use dashkeys_platform::{DispatchOutcome, FocusContext, KeyEvent, StorageService};

    use super::script::{parse_script, Step, StepOutcome};
    use super::*;

    fn shell() -> DashboardShell {
        let storage = Rc::new(StorageService::in_memory("dashboard"));
        let mut shell = DashboardShell::new(DashkeysConfig::default(), storage).unwrap();
        shell.init(None, false);
        shell
    }

    #[test]
    fn init_lands_on_showcase_with_light_theme() {
        let shell = shell();
        assert_eq!(shell.outlet().current_view(), Some("showcase-view"));
        assert_eq!(shell.theme().current(), Some("light"));
        assert!(shell.sidebar_open());
        assert_eq!(shell.registry().borrow().len(), 14);
    }

    #[test]
    fn alt_digits_navigate_between_views() {
        let mut shell = shell();
        shell.press(KeyEvent::new("1").alt());
        assert_eq!(shell.outlet().current_view(), Some("todos-view"));
        shell.press(KeyEvent::new("5").alt());
        assert_eq!(shell.outlet().current_view(), Some("settings-view"));
        assert_eq!(shell.outlet().history(), &["/", "/todos", "/settings"]);
    }

    #[test]
    fn search_focus_and_escape() {
        let mut shell = shell();
        shell.press(KeyEvent::new("k").meta());
        assert!(shell.search_focused());

        // Typing in the search field: navigation is suppressed, Escape is not.
        let typing = FocusContext::text_entry();
        let outcome = shell.press(KeyEvent::new("2").alt().with_focus(typing.clone()));
        assert!(matches!(outcome, DispatchOutcome::Suppressed(_)));

        shell.press(KeyEvent::new("Escape").with_focus(typing));
        assert!(!shell.search_focused());
    }

    #[test]
    fn help_overlay_opens_once_and_escape_closes_it() {
        let mut shell = shell();
        shell.press(KeyEvent::new("/").ctrl());
        shell.press(KeyEvent::new("/").meta());
        assert_eq!(shell.transients().borrow().len(), 1);
        assert!(shell.transients().borrow().is_name_open(HELP_OVERLAY));

        let outcome = shell.press(KeyEvent::new("Escape"));
        assert!(matches!(outcome, DispatchOutcome::ClosedTransient(_)));
        assert!(shell.transients().borrow().is_empty());
    }

    #[test]
    fn sidebar_and_theme_toggles() {
        let mut shell = shell();
        shell.press(KeyEvent::new("\\").ctrl());
        assert!(!shell.sidebar_open());
        shell.press(KeyEvent::new("\\").meta());
        assert!(shell.sidebar_open());

        shell.press(KeyEvent::new("T").ctrl().shift());
        assert_eq!(shell.theme().current(), Some("dark"));
        assert_eq!(
            shell.theme().sink().property("--color-background"),
            Some("#121212")
        );
    }

    #[test]
    fn url_theme_wins_at_init() {
        let storage = Rc::new(StorageService::in_memory("dashboard"));
        storage.set("theme", "light");
        let mut shell = DashboardShell::new(DashkeysConfig::default(), storage).unwrap();
        assert_eq!(shell.init(Some("dark"), false), "dark");
    }

    #[test]
    fn replayed_script_closes_stacked_transients_in_order() {
        let mut shell = shell();
        let script = "open A\nopen B\nEscape\nEscape\nEscape\n";
        let outcomes: Vec<StepOutcome> = parse_script(script)
            .unwrap()
            .into_iter()
            .map(|(_, step)| shell.run_step(step))
            .collect();

        let (StepOutcome::Opened(a), StepOutcome::Opened(b)) = (&outcomes[0], &outcomes[1]) else {
            panic!("expected two opened transients");
        };
        assert_eq!(outcomes[2], StepOutcome::Key(DispatchOutcome::ClosedTransient(*b)));
        assert_eq!(outcomes[3], StepOutcome::Key(DispatchOutcome::ClosedTransient(*a)));
        // Nothing open: the registered Escape action runs.
        assert!(matches!(
            outcomes[4],
            StepOutcome::Key(DispatchOutcome::Invoked(_))
        ));
    }

    #[test]
    fn disabled_shell_ignores_shortcuts() {
        let mut shell = shell();
        shell.run_step(Step::Disable);
        assert_eq!(
            shell.run_step(Step::Press(KeyEvent::new("1").alt())),
            StepOutcome::Key(DispatchOutcome::Disabled)
        );
        assert_eq!(shell.outlet().current_view(), Some("showcase-view"));

        shell.run_step(Step::Enable);
        shell.run_step(Step::Press(KeyEvent::new("1").alt()));
        assert_eq!(shell.outlet().current_view(), Some("todos-view"));
    }

    #[test]
    fn close_step_removes_named_transient() {
        let mut shell = shell();
        shell.run_step(Step::Open("menu".into()));
        assert!(matches!(
            shell.run_step(Step::Close("menu".into())),
            StepOutcome::Closed(Some(_))
        ));
        assert_eq!(
            shell.run_step(Step::Close("menu".into())),
            StepOutcome::Closed(None)
        );
    }

    #[test]
    fn help_lists_registered_shortcuts() {
        let shell = shell();
        let help = shell.help();
        assert_eq!(help.len(), 14);
        assert!(help.render_text().contains("Go to Todos"));
    }

    #[test]
    fn custom_keybinds_from_config() {
        let mut config = DashkeysConfig::default();
        config.keybinds.go_to_todos = vec!["Ctrl+Shift+1".into()];
        let storage = Rc::new(StorageService::in_memory("dashboard"));
        let mut shell = DashboardShell::new(config, storage).unwrap();

        assert_eq!(
            shell.press(KeyEvent::new("1").alt()),
            DispatchOutcome::Unmatched("Alt+1".parse().unwrap())
        );
        shell.press(KeyEvent::new("1").ctrl().shift());
        assert_eq!(shell.outlet().current_view(), Some("todos-view"));
    }
}
