//! Dispatch behavior: Escape precedence, the input guard, enable/disable,
//! and the end-to-end keyboard scenarios.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dashkeys_common::{AppEvent, EventBus};

use super::*;
use crate::input::{Chord, FocusContext, KeyEvent};
use crate::navigation::NavigationBridge;
use crate::shortcuts::{SharedRegistry, ShortcutRegistry};
use crate::transient::TransientStack;

fn chord(s: &str) -> Chord {
    s.parse().unwrap()
}

struct Fixture {
    registry: SharedRegistry,
    transients: Rc<RefCell<TransientStack>>,
    dispatcher: Dispatcher,
}

fn fixture() -> Fixture {
    let registry = ShortcutRegistry::shared();
    let transients = Rc::new(RefCell::new(TransientStack::new()));
    let dispatcher = Dispatcher::new(Rc::clone(&registry), transients.clone());
    Fixture {
        registry,
        transients,
        dispatcher,
    }
}

fn count_on(registry: &SharedRegistry, s: &str) -> Rc<Cell<u32>> {
    let count = Rc::new(Cell::new(0));
    let c = Rc::clone(&count);
    registry
        .borrow_mut()
        .register(chord(s), move || c.set(c.get() + 1), s);
    count
}

#[test]
fn matching_chord_invokes_action_and_consumes_event() {
    let f = fixture();
    let count = count_on(&f.registry, "Ctrl+K");

    let mut event = KeyEvent::new("k").ctrl();
    let outcome = f.dispatcher.dispatch(&mut event);

    assert_eq!(outcome, DispatchOutcome::Invoked(chord("Ctrl+K")));
    assert!(outcome.consumed());
    assert_eq!(count.get(), 1);
    assert!(event.default_prevented);
    assert!(event.propagation_stopped);
}

#[test]
fn unmatched_chord_passes_through() {
    let f = fixture();
    let mut event = KeyEvent::new("q").ctrl();

    let outcome = f.dispatcher.dispatch(&mut event);

    assert_eq!(outcome, DispatchOutcome::Unmatched(chord("Ctrl+Q")));
    assert!(!outcome.consumed());
    assert!(!event.default_prevented);
    assert!(!event.propagation_stopped);
}

#[test]
fn bare_modifier_is_ignored() {
    let f = fixture();
    let mut event = KeyEvent::new("Control").ctrl();
    assert_eq!(f.dispatcher.dispatch(&mut event), DispatchOutcome::Ignored);
}

#[test]
fn guard_suppresses_non_allow_listed_chords_in_inputs() {
    let f = fixture();
    let nav = count_on(&f.registry, "Alt+1");
    let search = count_on(&f.registry, "Ctrl+K");
    let escape = count_on(&f.registry, "Escape");

    let typing = FocusContext::text_entry();

    let mut e = KeyEvent::new("1").alt().with_focus(typing.clone());
    assert_eq!(
        f.dispatcher.dispatch(&mut e),
        DispatchOutcome::Suppressed(chord("Alt+1"))
    );
    assert!(!e.default_prevented);

    let mut e = KeyEvent::new("k").ctrl().with_focus(typing.clone());
    assert!(f.dispatcher.dispatch(&mut e).consumed());

    let mut e = KeyEvent::new("Escape").with_focus(typing);
    assert!(f.dispatcher.dispatch(&mut e).consumed());

    assert_eq!(nav.get(), 0);
    assert_eq!(search.get(), 1);
    assert_eq!(escape.get(), 1);
}

#[test]
fn escape_closes_transient_before_registered_action() {
    let f = fixture();
    let escape = count_on(&f.registry, "Escape");
    let modal = f.transients.borrow_mut().open("modal");

    let mut first = KeyEvent::new("Escape");
    assert_eq!(
        f.dispatcher.dispatch(&mut first),
        DispatchOutcome::ClosedTransient(modal)
    );
    assert!(first.default_prevented);
    assert_eq!(escape.get(), 0);
    assert!(f.transients.borrow().is_empty());

    let mut second = KeyEvent::new("Escape");
    assert_eq!(
        f.dispatcher.dispatch(&mut second),
        DispatchOutcome::Invoked(chord("Escape"))
    );
    assert_eq!(escape.get(), 1);
}

#[test]
fn escape_precedence_applies_while_typing() {
    let f = fixture();
    let dropdown = f.transients.borrow_mut().open("search-dropdown");

    let mut event = KeyEvent::new("Escape").with_focus(FocusContext::text_entry());
    assert_eq!(
        f.dispatcher.dispatch(&mut event),
        DispatchOutcome::ClosedTransient(dropdown)
    );
}

#[test]
fn modified_escape_does_not_close_transients() {
    let f = fixture();
    f.transients.borrow_mut().open("modal");

    let mut event = KeyEvent::new("Escape").shift();
    assert_eq!(
        f.dispatcher.dispatch(&mut event),
        DispatchOutcome::Unmatched(chord("Shift+Escape"))
    );
    assert_eq!(f.transients.borrow().len(), 1);
}

#[test]
fn escape_with_nothing_open_and_no_binding_is_unmatched() {
    let f = fixture();
    let mut event = KeyEvent::new("Escape");
    assert_eq!(
        f.dispatcher.dispatch(&mut event),
        DispatchOutcome::Unmatched(chord("Escape"))
    );
}

#[test]
fn disable_blocks_everything_and_enable_restores() {
    let f = fixture();
    let search = count_on(&f.registry, "Ctrl+K");
    let escape = count_on(&f.registry, "Escape");
    f.transients.borrow_mut().open("modal");

    f.dispatcher.disable();
    assert!(!f.dispatcher.is_enabled());

    for mut event in [KeyEvent::new("k").ctrl(), KeyEvent::new("Escape")] {
        assert_eq!(f.dispatcher.dispatch(&mut event), DispatchOutcome::Disabled);
        assert!(!event.default_prevented);
    }
    assert_eq!(search.get(), 0);
    assert_eq!(escape.get(), 0);
    assert_eq!(f.transients.borrow().len(), 1);

    f.dispatcher.enable();
    assert!(f.dispatcher.dispatch(&mut KeyEvent::new("k").ctrl()).consumed());
    assert_eq!(search.get(), 1);
    assert!(matches!(
        f.dispatcher.dispatch(&mut KeyEvent::new("Escape")),
        DispatchOutcome::ClosedTransient(_)
    ));
}

#[test]
fn action_may_unregister_itself() {
    let f = fixture();
    let registry = Rc::clone(&f.registry);
    let runs = Rc::new(Cell::new(0));
    let r = Rc::clone(&runs);
    f.registry.borrow_mut().register(
        chord("Alt+9"),
        move || {
            r.set(r.get() + 1);
            registry.borrow_mut().unregister(&chord("Alt+9"));
        },
        "one shot",
    );

    assert!(f.dispatcher.dispatch(&mut KeyEvent::new("9").alt()).consumed());
    assert_eq!(
        f.dispatcher.dispatch(&mut KeyEvent::new("9").alt()),
        DispatchOutcome::Unmatched(chord("Alt+9"))
    );
    assert_eq!(runs.get(), 1);
}

#[test]
fn action_may_open_transient_ui() {
    let f = fixture();
    let transients = f.transients.clone();
    f.registry.borrow_mut().register(
        chord("Ctrl+/"),
        move || {
            transients.borrow_mut().open("shortcuts-help");
        },
        "Show keyboard shortcuts",
    );

    f.dispatcher.dispatch(&mut KeyEvent::new("/").ctrl());
    assert!(f.transients.borrow().is_name_open("shortcuts-help"));
}

#[test]
#[should_panic(expected = "action failed")]
fn panicking_action_is_not_swallowed() {
    let f = fixture();
    f.registry
        .borrow_mut()
        .register(chord("Alt+0"), || panic!("action failed"), "broken");
    f.dispatcher.dispatch(&mut KeyEvent::new("0").alt());
}

#[test]
fn custom_guard_replaces_default_allow_list() {
    let registry = ShortcutRegistry::shared();
    let transients = Rc::new(RefCell::new(TransientStack::new()));
    let dispatcher = Dispatcher::new(Rc::clone(&registry), transients)
        .with_guard(crate::shortcuts::InputGuard::new(vec![chord("Ctrl+P")]));
    let count = count_on(&registry, "Ctrl+K");

    let mut event = KeyEvent::new("k").ctrl().with_focus(FocusContext::text_entry());
    assert!(matches!(
        dispatcher.dispatch(&mut event),
        DispatchOutcome::Suppressed(_)
    ));
    assert_eq!(count.get(), 0);
}

// -- End-to-end scenarios --

#[test]
fn alt_1_navigates_to_todos() {
    let f = fixture();
    let bus = EventBus::new(8);
    let mut rx = bus.subscribe();
    let bridge = NavigationBridge::new(bus);
    f.registry
        .borrow_mut()
        .register(chord("Alt+1"), move || bridge.navigate("/todos"), "Go to Todos");

    f.dispatcher.dispatch(&mut KeyEvent::new("1").alt());

    assert_eq!(
        rx.try_recv().unwrap(),
        AppEvent::Navigate {
            path: "/todos".into()
        }
    );
    assert!(rx.try_recv().is_err());
}

#[test]
fn ctrl_k_and_cmd_k_share_focus_search() {
    let f = fixture();
    let focused = Rc::new(Cell::new(0));
    let focus_search: Rc<dyn Fn()> = {
        let focused = Rc::clone(&focused);
        Rc::new(move || focused.set(focused.get() + 1))
    };
    {
        let mut registry = f.registry.borrow_mut();
        registry.register_action(chord("Ctrl+K"), Rc::clone(&focus_search), "Focus search");
        registry.register_action(chord("Cmd+K"), focus_search, "Focus search (Mac)");
    }

    f.dispatcher.dispatch(&mut KeyEvent::new("k").ctrl());
    assert_eq!(focused.get(), 1);

    f.dispatcher.dispatch(&mut KeyEvent::new("k").meta());
    assert_eq!(focused.get(), 2);
}

#[test]
fn escape_closes_stacked_transients_one_at_a_time() {
    let f = fixture();
    let a = f.transients.borrow_mut().open("A");
    let b = f.transients.borrow_mut().open("B");

    assert_eq!(
        f.dispatcher.dispatch(&mut KeyEvent::new("Escape")),
        DispatchOutcome::ClosedTransient(b)
    );
    assert!(f.transients.borrow().is_open(a));
    assert!(!f.transients.borrow().is_open(b));

    assert_eq!(
        f.dispatcher.dispatch(&mut KeyEvent::new("Escape")),
        DispatchOutcome::ClosedTransient(a)
    );
    assert!(f.transients.borrow().is_empty());
}
