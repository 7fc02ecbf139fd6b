//! Click routing through the stage: bindings, hit testing, selector
//! resolution.

use std::cell::Cell;
use std::rc::Rc;

use fadedom::{find_element, visible_in, Display, Element, Event, Size, Style};
use fader::{DispatchResult, FadeSpec, InstantFade, Matcher, Speed, Stage, SelectorError};

fn message_page() -> Element {
    Element::col()
        .id("page")
        .child(
            Element::box_()
                .class("message")
                .id("msg")
                .child(Element::link("Toggle").id("toggle-link")),
        )
        .child(
            Element::form()
                .id("form")
                .height(Size::Fixed(5))
                .style(Style::new().hidden()),
        )
        .child(Element::box_().id("other-element").height(Size::Fixed(2)))
}

fn counting_done() -> (Rc<Cell<u32>>, Rc<dyn Fn()>) {
    let calls = Rc::new(Cell::new(0u32));
    let done = {
        let calls = Rc::clone(&calls);
        Rc::new(move || calls.set(calls.get() + 1)) as Rc<dyn Fn()>
    };
    (calls, done)
}

// ============================================================================
// Selectors
// ============================================================================

#[test]
fn test_selector_id_class_and_kind() {
    let root = message_page();

    assert_eq!(Matcher::parse("#form").unwrap().select(&root), vec!["form"]);
    assert_eq!(Matcher::parse(".message").unwrap().select(&root), vec!["msg"]);
    // Kind selection survives an explicit id
    assert_eq!(Matcher::parse("link").unwrap().select(&root), vec!["toggle-link"]);
}

#[test]
fn test_selector_descendant_chain() {
    let root = message_page();
    let ids = Matcher::parse(".message link").unwrap().select(&root);
    assert_eq!(ids, vec!["toggle-link"]);

    let ids = Matcher::parse(".message #toggle-link").unwrap().select(&root);
    assert_eq!(ids, vec!["toggle-link"]);

    // The form sits outside .message, so the chain must not reach it
    assert!(Matcher::parse(".message form").unwrap().select(&root).is_empty());
}

#[test]
fn test_selector_errors() {
    assert_eq!(Matcher::parse(""), Err(SelectorError::Empty));
    assert_eq!(Matcher::parse("   "), Err(SelectorError::Empty));
    assert!(matches!(
        Matcher::parse("#"),
        Err(SelectorError::Unsupported(_))
    ));
    assert!(matches!(
        Matcher::parse("a>b"),
        Err(SelectorError::Unsupported(_))
    ));
}

// ============================================================================
// Dispatch basics
// ============================================================================

#[test]
fn test_click_on_message_link_toggles_form() {
    let mut stage = Stage::new(message_page(), Box::new(InstantFade::new()));
    stage
        .bind_fade(".message #toggle-link", "#form", FadeSpec::toggle(), Speed::Slow, None)
        .unwrap();

    let result = stage.dispatch(&Event::click_on("toggle-link"));
    assert_eq!(result, DispatchResult::Handled(1));

    let form = find_element(stage.root(), "form").unwrap();
    assert_eq!(form.style.display, Display::Block);
    assert_eq!(form.style.opacity, 1.0);
    assert!(visible_in(stage.root(), "form"));
}

#[test]
fn test_kind_selector_trigger_routes_clicks() {
    // A link carrying an explicit id still answers to the bare kind
    // token in the trigger selector
    let mut stage = Stage::new(message_page(), Box::new(InstantFade::new()));
    stage
        .bind_fade(".message link", "#form", FadeSpec::toggle(), Speed::Slow, None)
        .unwrap();

    let result = stage.dispatch(&Event::click_on("toggle-link"));
    assert_eq!(result, DispatchResult::Handled(1));
    assert!(visible_in(stage.root(), "form"));
}

#[test]
fn test_unbound_click_is_not_handled() {
    let mut stage = Stage::new(message_page(), Box::new(InstantFade::new()));
    stage
        .bind_fade("#toggle-link", "#form", FadeSpec::toggle(), Speed::Slow, None)
        .unwrap();

    assert_eq!(
        stage.dispatch(&Event::click_on("other-element")),
        DispatchResult::NotHandled
    );
    assert_eq!(
        stage.dispatch(&Event::Resize { width: 10, height: 10 }),
        DispatchResult::NotHandled
    );
}

#[test]
fn test_click_at_coordinates_uses_hit_test() {
    let mut stage = Stage::new(message_page(), Box::new(InstantFade::new()));
    stage
        .bind_fade("#toggle-link", "#form", FadeSpec::toggle(), Speed::Slow, None)
        .unwrap();

    // The link is the only clickable element, on row 0
    let result = stage.dispatch(&Event::click_at(0, 0));
    assert_eq!(result, DispatchResult::Handled(1));
    assert_eq!(
        find_element(stage.root(), "form").unwrap().style.display,
        Display::Block
    );

    // A click in empty space resolves to nothing
    assert_eq!(
        stage.dispatch(&Event::click_at(79, 23)),
        DispatchResult::NotHandled
    );
}

// ============================================================================
// Rapid and repeated clicks
// ============================================================================

#[test]
fn test_five_rapid_clicks_fire_five_callbacks_in_order() {
    let (calls, done) = counting_done();
    let mut stage = Stage::new(message_page(), Box::new(InstantFade::new()));
    stage
        .bind_fade("#toggle-link", "#form", FadeSpec::toggle(), Speed::Slow, Some(done))
        .unwrap();

    for _ in 0..5 {
        let result = stage.dispatch(&Event::click_on("toggle-link"));
        assert!(result.is_handled());
    }

    assert_eq!(calls.get(), 5);
    // Initially hidden, odd click count: shown
    assert_eq!(
        find_element(stage.root(), "form").unwrap().style.display,
        Display::Block
    );
}

#[test]
fn test_double_click_round_trips_through_stage() {
    let mut stage = Stage::new(
        Element::col()
            .id("page")
            .child(Element::link("Toggle").id("toggle-link"))
            .child(Element::form().id("form").height(Size::Fixed(100))),
        Box::new(InstantFade::new()),
    );
    stage
        .bind_fade("#toggle-link", "#form", FadeSpec::toggle(), Speed::Slow, None)
        .unwrap();

    stage.dispatch(&Event::click_on("toggle-link"));
    {
        let form = find_element(stage.root(), "form").unwrap();
        assert_eq!(form.height, Size::Fixed(0));
        assert_eq!(form.style.opacity, 0.0);
    }

    stage.dispatch(&Event::click_on("toggle-link"));
    {
        let form = find_element(stage.root(), "form").unwrap();
        assert_eq!(form.height, Size::Fixed(100));
        assert_eq!(form.style.opacity, 1.0);
    }
}

// ============================================================================
// Multiple triggers and isolation
// ============================================================================

#[test]
fn test_multiple_links_share_one_binding() {
    let root = Element::col()
        .id("page")
        .child(Element::link("One").id("l1").class("message"))
        .child(Element::link("Two").id("l2").class("message"))
        .child(Element::form().id("form").height(Size::Fixed(100)));

    let mut stage = Stage::new(root, Box::new(InstantFade::new()));
    stage
        .bind_fade(".message", "#form", FadeSpec::toggle(), Speed::Slow, None)
        .unwrap();

    for link in ["l1", "l2"] {
        stage.dispatch(&Event::click_on(link));
        {
            let form = find_element(stage.root(), "form").unwrap();
            assert_eq!(form.height, Size::Fixed(0));
            assert_eq!(form.style.opacity, 0.0);
        }

        stage.dispatch(&Event::click_on(link));
        {
            let form = find_element(stage.root(), "form").unwrap();
            assert_eq!(form.height, Size::Fixed(100));
            assert_eq!(form.style.opacity, 1.0);
        }
    }
}

#[test]
fn test_toggling_leaves_other_elements_alone() {
    let mut stage = Stage::new(message_page(), Box::new(InstantFade::new()));
    stage
        .bind_fade("#toggle-link", "#form", FadeSpec::toggle(), Speed::Slow, None)
        .unwrap();

    stage.dispatch(&Event::click_on("toggle-link"));

    assert!(visible_in(stage.root(), "form"));
    let other = find_element(stage.root(), "other-element").unwrap();
    assert_eq!(other.style.display, Display::Block);
    assert_eq!(other.style.opacity, 1.0);
}

#[test]
fn test_two_bindings_fire_in_registration_order() {
    let root = Element::col()
        .id("page")
        .child(Element::link("Both").id("both"))
        .child(Element::form().id("f1").height(Size::Fixed(2)))
        .child(Element::form().id("f2").height(Size::Fixed(3)));

    let mut stage = Stage::new(root, Box::new(InstantFade::new()));
    stage
        .bind_fade("#both", "#f1", FadeSpec::hide(), Speed::Fast, None)
        .unwrap();
    stage
        .bind_fade("#both", "#f2", FadeSpec::hide(), Speed::Fast, None)
        .unwrap();

    assert_eq!(
        stage.dispatch(&Event::click_on("both")),
        DispatchResult::Handled(2)
    );
    assert_eq!(find_element(stage.root(), "f1").unwrap().style.display, Display::None);
    assert_eq!(find_element(stage.root(), "f2").unwrap().style.display, Display::None);
}

// ============================================================================
// Direct animate calls
// ============================================================================

#[test]
fn test_stage_animate_is_chainable() {
    let mut stage = Stage::new(message_page(), Box::new(InstantFade::new()));

    stage
        .animate("#form", FadeSpec::toggle(), Speed::Slow)
        .animate("#other-element", FadeSpec::hide(), Speed::Fast);

    assert_eq!(find_element(stage.root(), "form").unwrap().style.display, Display::Block);
    assert_eq!(
        find_element(stage.root(), "other-element").unwrap().style.display,
        Display::None
    );
}
