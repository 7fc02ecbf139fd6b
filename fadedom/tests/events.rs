use fadedom::{hit_test, hit_test_any, layout, Element, Event, Key, Modifiers, MouseButton, Rect, Size, Style};

// ============================================================================
// Event construction
// ============================================================================

#[test]
fn test_click_on_carries_target() {
    let event = Event::click_on("toggle-link");
    assert_eq!(
        event,
        Event::Click {
            target: Some("toggle-link".to_string()),
            x: 0,
            y: 0,
            button: MouseButton::Left,
        }
    );
}

#[test]
fn test_click_at_has_no_target() {
    let Event::Click { target, x, y, .. } = Event::click_at(7, 3) else {
        panic!("expected click event");
    };
    assert!(target.is_none());
    assert_eq!((x, y), (7, 3));
}

// ============================================================================
// Crossterm conversions
// ============================================================================

#[test]
fn test_mouse_down_converts_to_click() {
    use crossterm::event::{KeyModifiers, MouseButton as CtBtn, MouseEvent, MouseEventKind};

    let mouse = MouseEvent {
        kind: MouseEventKind::Down(CtBtn::Left),
        column: 12,
        row: 4,
        modifiers: KeyModifiers::empty(),
    };

    let event: Event = mouse.into();
    assert_eq!(
        event,
        Event::Click {
            target: None,
            x: 12,
            y: 4,
            button: MouseButton::Left,
        }
    );
}

#[test]
fn test_mouse_drag_converts_to_move() {
    use crossterm::event::{KeyModifiers, MouseButton as CtBtn, MouseEvent, MouseEventKind};

    let mouse = MouseEvent {
        kind: MouseEventKind::Drag(CtBtn::Left),
        column: 2,
        row: 9,
        modifiers: KeyModifiers::empty(),
    };

    assert_eq!(Event::from(mouse), Event::MouseMove { x: 2, y: 9 });
}

#[test]
fn test_key_conversion() {
    use crossterm::event::KeyCode;

    assert_eq!(Key::from(KeyCode::Enter), Key::Enter);
    assert_eq!(Key::from(KeyCode::Char('q')), Key::Char('q'));
    assert_eq!(Key::from(KeyCode::Esc), Key::Escape);
    assert_eq!(Key::from(KeyCode::Backspace), Key::Backspace);
    assert_eq!(Key::from(KeyCode::BackTab), Key::BackTab);
    assert_eq!(Key::from(KeyCode::Home), Key::Home);
    assert_eq!(Key::from(KeyCode::PageDown), Key::PageDown);
    assert_eq!(Key::from(KeyCode::F(5)), Key::F(5));
}

#[test]
fn test_modifier_conversion() {
    use crossterm::event::KeyModifiers;

    let mods = Modifiers::from(KeyModifiers::CONTROL | KeyModifiers::SHIFT);
    assert!(mods.ctrl);
    assert!(mods.shift);
    assert!(!mods.alt);
    assert!(Modifiers::from(KeyModifiers::empty()).none());
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn test_hit_test_finds_clickable_link() {
    let root = Element::col()
        .id("root")
        .child(Element::link("Toggle").id("link"))
        .child(Element::form().id("form").height(Size::Fixed(5)));

    let rects = layout(&root, Rect::from_size(80, 24));

    // The link occupies row 0
    assert_eq!(hit_test(&rects, &root, 0, 0), Some("link".to_string()));
    // The form is not clickable, so only hit_test_any sees it
    assert_eq!(hit_test(&rects, &root, 0, 2), None);
    assert_eq!(hit_test_any(&rects, &root, 0, 2), Some("form".to_string()));
}

#[test]
fn test_hidden_element_cannot_be_hit() {
    let root = Element::col()
        .id("root")
        .child(
            Element::link("ghost")
                .id("ghost")
                .style(Style::new().hidden()),
        )
        .child(Element::link("real").id("real"));

    let rects = layout(&root, Rect::from_size(80, 24));

    // The hidden link left the flow, so row 0 belongs to the real one
    assert_eq!(hit_test(&rects, &root, 0, 0), Some("real".to_string()));
}
