//! Integration tests for quantized rotation.
//!
//! Quadrant snapping bins, the lazy snap on enabling the constraint, and
//! the keyword rendering orientation arguments echo back.

use platine_foundation::Rotation;

// =============================================================================
// Snapping Bins
// =============================================================================

#[test]
fn each_bin_maps_to_its_quadrant() {
    let cases = [
        (0.0, 0.0),
        (44.9, 0.0),
        (45.0, 90.0),
        (90.0, 90.0),
        (134.9, 90.0),
        (135.0, 180.0),
        (180.0, 180.0),
        (224.9, 180.0),
        (225.0, 270.0),
        (270.0, 270.0),
        (314.9, 270.0),
        (315.0, 0.0),
        (359.0, 0.0),
    ];
    for (input, expected) in cases {
        let mut r = Rotation::quadrant();
        r.set_degrees(input);
        assert_eq!(r.degrees(), expected, "input {input}");
    }
}

#[test]
fn inputs_outside_one_turn_fall_back_to_zero() {
    let mut r = Rotation::quadrant();
    r.set_degrees(450.0);
    assert_eq!(r.degrees(), 0.0);
    r.set_degrees(-90.0);
    assert_eq!(r.degrees(), 0.0);
}

#[test]
fn quadrant_angles_are_fixed_points() {
    for angle in [0.0, 90.0, 180.0, 270.0] {
        let mut r = Rotation::quadrant();
        r.set_degrees(angle);
        assert_eq!(r.degrees(), angle);
    }
}

// =============================================================================
// Constraint Toggling
// =============================================================================

#[test]
fn unconstrained_rotation_stores_verbatim() {
    let mut r = Rotation::new();
    assert!(!r.constrained());
    r.set_degrees(47.3);
    assert_eq!(r.degrees(), 47.3);
}

#[test]
fn enabling_the_constraint_does_not_touch_the_angle() {
    let mut r = Rotation::new();
    r.set_degrees(100.0);
    r.set_constrained(true);
    assert!(r.constrained());
    // The stored angle stays off-grid until something writes again.
    assert_eq!(r.degrees(), 100.0);
}

#[test]
fn the_write_after_enabling_is_the_first_to_snap() {
    let mut r = Rotation::new();
    r.set_degrees(100.0);
    r.set_constrained(true);
    r.set_degrees(100.0);
    assert_eq!(r.degrees(), 90.0);
}

#[test]
fn disabling_the_constraint_does_not_unsnap() {
    let mut r = Rotation::quadrant();
    r.set_degrees(200.0);
    assert_eq!(r.degrees(), 180.0);

    r.set_constrained(false);
    assert_eq!(r.degrees(), 180.0);
    // Later writes pass through untouched.
    r.set_degrees(200.0);
    assert_eq!(r.degrees(), 200.0);
}

// =============================================================================
// Flags and Rendering
// =============================================================================

#[test]
fn display_renders_the_command_keyword() {
    let mut r = Rotation::quadrant();
    r.set_degrees(90.0);
    assert_eq!(format!("{r}"), "R90");

    r.set_mirror(true);
    assert_eq!(format!("{r}"), "MR90");

    r.set_degrees(0.0);
    assert_eq!(format!("{r}"), "MR0");
}

#[test]
fn mirror_and_spin_start_off() {
    let r = Rotation::new();
    assert!(!r.mirror());
    assert!(!r.spin());
    assert!(!r.allow_mirror());
    assert!(!r.allow_spin());
}

#[test]
fn permission_flags_do_not_police_the_state() {
    let mut r = Rotation::new();
    // Mirror without permission: stored anyway, the flags are data.
    r.set_mirror(true);
    assert!(r.mirror());
    assert!(!r.allow_mirror());

    r.set_allow_spin(true);
    r.set_spin(true);
    r.set_allow_spin(false);
    assert!(r.spin());
}

#[test]
fn default_is_the_unconstrained_constructor() {
    assert_eq!(Rotation::default(), Rotation::new());
    assert_ne!(Rotation::default(), Rotation::quadrant());
}
