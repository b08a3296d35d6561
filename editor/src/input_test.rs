use super::*;

// --- Mode ---

#[test]
fn mode_default_is_add() {
    assert_eq!(Mode::default(), Mode::Add);
}

#[test]
fn mode_equality() {
    assert_eq!(Mode::Pan, Mode::Pan);
    assert_ne!(Mode::Add, Mode::Pan);
}

#[test]
fn mode_debug_format() {
    assert_eq!(format!("{:?}", Mode::Add), "Add");
    assert_eq!(format!("{:?}", Mode::Pan), "Pan");
}

// --- Button ---

#[test]
fn button_variants_distinct() {
    let variants = [Button::Primary, Button::Middle, Button::Secondary];
    for (i, a) in variants.iter().enumerate() {
        for (j, b) in variants.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}

// --- Key ---

#[test]
fn key_stores_string() {
    let key = Key("Escape".into());
    assert_eq!(key.0, "Escape");
}

#[test]
fn key_equality() {
    assert_eq!(Key("z".into()), Key("z".into()));
    assert_ne!(Key("z".into()), Key("y".into()));
}

// --- Modifiers ---

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift);
    assert!(!m.ctrl);
    assert!(!m.alt);
    assert!(!m.meta);
}

// --- InputState ---

#[test]
fn input_state_default_is_idle() {
    assert!(matches!(InputState::default(), InputState::Idle));
}

#[test]
fn panning_carries_the_last_pointer_position() {
    let state = InputState::Panning { last_screen: Point::new(4.0, 2.0) };
    let InputState::Panning { last_screen } = state else {
        unreachable!("constructed as Panning");
    };
    assert_eq!(last_screen, Point::new(4.0, 2.0));
}
