//! Integration tests for bounded values and coordinate pairs.
//!
//! Covers clamping, change reporting, precision rounding, formatting, and
//! the composite change events a coordinate pair relays for its children.

use platine_foundation::{Axis, BoundedValue, CoordPair, DEFAULT_PRECISION, format_fixed};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// =============================================================================
// Construction and Bounds
// =============================================================================

#[test]
fn new_value_is_unbounded() {
    let mut v = BoundedValue::new(0.0);
    v.set(1e18);
    assert_eq!(v.raw(), 1e18);
    v.set(-1e18);
    assert_eq!(v.raw(), -1e18);
}

#[test]
fn new_value_uses_default_precision() {
    let v = BoundedValue::new(0.0);
    assert_eq!(v.precision(), DEFAULT_PRECISION);
}

#[test]
fn with_bounds_clamps_the_seed() {
    let v = BoundedValue::new(400.0).with_bounds(0.0, 255.0);
    assert_eq!(v.raw(), 255.0);

    let v = BoundedValue::new(-1.0).with_bounds(0.0, 255.0);
    assert_eq!(v.raw(), 0.0);
}

#[test]
fn bounds_are_readable_back() {
    let v = BoundedValue::new(5.0).with_bounds(1.0, 10.0);
    assert_eq!(v.min(), 1.0);
    assert_eq!(v.max(), 10.0);
}

#[test]
fn set_clamps_at_both_ends() {
    let mut level = BoundedValue::new(128.0).with_bounds(0.0, 255.0);
    level.set(300.0);
    assert_eq!(level.raw(), 255.0);
    level.set(-40.0);
    assert_eq!(level.raw(), 0.0);
}

#[test]
fn set_reports_whether_the_stored_value_moved() {
    let mut v = BoundedValue::new(0.0).with_bounds(0.0, 10.0);
    assert!(v.set(5.0));
    assert!(!v.set(5.0));
    // Saturated writes that land on the current value are not changes.
    v.set(10.0);
    assert!(!v.set(11.0));
    assert!(!v.set(200.0));
}

// =============================================================================
// Reading: get, raw, previous
// =============================================================================

#[test]
fn get_rounds_to_configured_precision() {
    let v = BoundedValue::new(0.12345).with_precision(2);
    assert_eq!(v.get(), 0.12);
    assert_eq!(v.raw(), 0.12345);
}

#[test]
fn rounding_ties_go_away_from_zero() {
    let v = BoundedValue::new(2.5).with_precision(0);
    assert_eq!(v.get(), 3.0);
    let v = BoundedValue::new(-2.5).with_precision(0);
    assert_eq!(v.get(), -3.0);
    let v = BoundedValue::new(0.125).with_precision(2);
    assert_eq!(v.get(), 0.13);
}

#[test]
fn previous_starts_equal_to_the_seed() {
    let v = BoundedValue::new(7.0);
    assert_eq!(v.previous(), 7.0);
}

#[test]
fn previous_follows_each_write() {
    let mut v = BoundedValue::new(1.0);
    v.set(2.0);
    v.set(4.0);
    assert_eq!(v.previous(), 2.0);
    assert_eq!(v.raw(), 4.0);
}

#[test]
fn equality_is_numeric_configuration_only() {
    let mut a = BoundedValue::new(1.5).with_bounds(0.0, 2.0).with_precision(3);
    let b = BoundedValue::new(1.5).with_bounds(0.0, 2.0).with_precision(3);
    a.listen(|_| {});
    assert_eq!(a, b);

    let c = BoundedValue::new(1.5).with_bounds(0.0, 3.0).with_precision(3);
    assert_ne!(a, c);
}

// =============================================================================
// Change Notification
// =============================================================================

#[test]
fn listener_fires_once_per_actual_change() {
    let mut v = BoundedValue::new(0.0).with_bounds(0.0, 100.0);
    let fired = Rc::new(Cell::new(0));
    let seen = Rc::clone(&fired);
    v.listen(move |_| seen.set(seen.get() + 1));

    v.set(1.0);
    v.set(1.0); // no change, no event
    v.set(2.0);
    v.set(500.0); // clamps to 100.0, still a change
    v.set(900.0); // clamps to 100.0 again, silent
    assert_eq!(fired.get(), 3);
}

#[test]
fn listener_payload_is_the_updated_value() {
    let mut v = BoundedValue::new(1.0);
    let observed = Rc::new(Cell::new((0.0, 0.0)));
    let slot = Rc::clone(&observed);
    v.listen(move |value| slot.set((value.raw(), value.previous())));

    v.set(9.0);
    assert_eq!(observed.get(), (9.0, 1.0));
}

#[test]
fn several_listeners_all_fire() {
    let mut v = BoundedValue::new(0.0);
    let count = Rc::new(Cell::new(0));
    for _ in 0..3 {
        let seen = Rc::clone(&count);
        v.listen(move |_| seen.set(seen.get() + 1));
    }
    assert_eq!(v.listener_count(), 3);

    v.set(1.0);
    assert_eq!(count.get(), 3);
}

#[test]
fn ignore_removes_exactly_one_listener() {
    let mut v = BoundedValue::new(0.0);
    let fired = Rc::new(Cell::new(0));

    let seen = Rc::clone(&fired);
    let keep = v.listen(move |_| seen.set(seen.get() + 1));
    let seen = Rc::clone(&fired);
    let noisy = v.listen(move |_| seen.set(seen.get() + 10));

    assert!(v.ignore(noisy));
    assert!(!v.ignore(noisy));
    assert_eq!(v.listener_count(), 1);

    v.set(1.0);
    assert_eq!(fired.get(), 1);
    assert!(v.ignore(keep));
}

// =============================================================================
// Formatting
// =============================================================================

#[test]
fn format_trims_trailing_zeros() {
    assert_eq!(BoundedValue::new(2.5).format(6), "2.5");
    assert_eq!(BoundedValue::new(-0.0254).format(6), "-0.0254");
}

#[test]
fn format_keeps_at_least_one_fractional_digit() {
    assert_eq!(BoundedValue::new(2.0).format(6), "2.0");
    assert_eq!(BoundedValue::new(2.0).format(0), "2.0");
}

#[test]
fn display_uses_the_configured_precision() {
    let v = BoundedValue::new(0.15239999).with_precision(4);
    assert_eq!(format!("{v}"), "0.1524");
}

#[test]
fn format_fixed_matches_the_method() {
    let v = BoundedValue::new(1.27);
    assert_eq!(v.format(6), format_fixed(1.27, 6));
    assert_eq!(format_fixed(100.0, 3), "100.0");
}

// =============================================================================
// Coordinate Pairs
// =============================================================================

#[test]
fn at_positions_both_children() {
    let coord = CoordPair::at(2.54, -2.54);
    assert_eq!(coord.x().raw(), 2.54);
    assert_eq!(coord.y().raw(), -2.54);
}

#[test]
fn new_pair_sits_at_the_origin() {
    let coord = CoordPair::new();
    assert_eq!(coord.x().raw(), 0.0);
    assert_eq!(coord.y().raw(), 0.0);
}

#[test]
fn child_writes_surface_as_composite_events() {
    let mut coord = CoordPair::new();
    let events: Rc<RefCell<Vec<(Axis, f64)>>> = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&events);
    coord.listen(move |axis, value| log.borrow_mut().push((axis, value.raw())));

    coord.set_x(1.0);
    coord.set_y(-2.0);
    assert_eq!(
        events.borrow().as_slice(),
        &[(Axis::X, 1.0), (Axis::Y, -2.0)]
    );
}

#[test]
fn diagonal_set_emits_x_before_y() {
    let mut coord = CoordPair::new();
    let axes: Rc<RefCell<Vec<Axis>>> = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&axes);
    coord.listen(move |axis, _| log.borrow_mut().push(axis));

    assert!(coord.set(3.0, 4.0));
    assert_eq!(axes.borrow().as_slice(), &[Axis::X, Axis::Y]);
}

#[test]
fn partial_moves_emit_only_the_changed_axis() {
    let mut coord = CoordPair::at(1.0, 2.0);
    let axes: Rc<RefCell<Vec<Axis>>> = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&axes);
    coord.listen(move |axis, _| log.borrow_mut().push(axis));

    // X keeps its value; only Y moves.
    assert!(coord.set(1.0, 5.0));
    assert_eq!(axes.borrow().as_slice(), &[Axis::Y]);

    assert!(!coord.set(1.0, 5.0));
    assert_eq!(axes.borrow().len(), 1);
}

#[test]
fn ignore_silences_the_pair() {
    let mut coord = CoordPair::new();
    let fired = Rc::new(Cell::new(0));
    let seen = Rc::clone(&fired);
    let id = coord.listen(move |_, _| seen.set(seen.get() + 1));

    coord.set_x(1.0);
    assert!(coord.ignore(id));
    coord.set_x(2.0);
    assert_eq!(fired.get(), 1);
}

#[test]
fn pair_format_is_bare_display_is_parenthesized() {
    let coord = CoordPair::at(0.0, -2.54);
    assert_eq!(coord.format(6), "0.0 -2.54");
    assert_eq!(format!("{coord}"), "(0.0 -2.54)");
}

#[test]
fn pair_equality_is_component_wise() {
    assert_eq!(CoordPair::at(1.0, 2.0), CoordPair::at(1.0, 2.0));
    assert_ne!(CoordPair::at(1.0, 2.0), CoordPair::at(2.0, 1.0));
}

#[test]
fn axis_display_names() {
    assert_eq!(format!("{}", Axis::X), "x");
    assert_eq!(format!("{}", Axis::Y), "y");
}
