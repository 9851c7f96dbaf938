//! Integration tests for undo/redo journaling.
//!
//! Longer walks than the unit tests: mixed command kinds, deep undo
//! chains, and the document states in between.

use platine_command::{Command, GridCommand, Journal, NameCommand, PinCommand, WireCommand};
use platine_document::Document;
use platine_foundation::ElementId;

fn editing(name: &str) -> (Document, ElementId, Journal) {
    let mut document = Document::new();
    let id = document.add_symbol(name);
    (document, id, Journal::new())
}

fn pin(target: ElementId, args: &str) -> Box<dyn Command> {
    Box::new(PinCommand::parse(target, args).unwrap())
}

fn wire(target: ElementId, args: &str) -> Box<dyn Command> {
    Box::new(WireCommand::parse(target, args).unwrap())
}

// =============================================================================
// LIFO Order
// =============================================================================

#[test]
fn undo_walks_backward_through_history() {
    let (mut document, target, mut journal) = editing("U1");

    journal.apply(pin(target, "'A' (0 2.54)"), &mut document).unwrap();
    journal.apply(pin(target, "'B' (0 -2.54)"), &mut document).unwrap();
    journal
        .apply(wire(target, "(0 0) (2.54 0)"), &mut document)
        .unwrap();

    assert_eq!(journal.undo(&mut document).unwrap(), Some("WIRE"));
    assert_eq!(journal.undo(&mut document).unwrap(), Some("PIN"));

    let symbol = document.symbol(target).unwrap();
    assert_eq!(symbol.pins().len(), 1);
    assert_eq!(symbol.pins()[0].name(), "A");
    assert!(symbol.wires().is_empty());
}

#[test]
fn a_full_undo_walk_restores_the_empty_symbol() {
    let (mut document, target, mut journal) = editing("U1");

    for args in ["'A'", "'B'", "'C'", "'D'"] {
        journal.apply(pin(target, args), &mut document).unwrap();
    }
    assert_eq!(journal.undo_depth(), 4);

    while journal.undo(&mut document).unwrap().is_some() {}

    assert!(document.symbol(target).unwrap().pins().is_empty());
    assert_eq!(journal.undo_depth(), 0);
    assert_eq!(journal.redo_depth(), 4);
}

#[test]
fn redo_replays_forward_in_original_order() {
    let (mut document, target, mut journal) = editing("U1");

    journal.apply(pin(target, "'A'"), &mut document).unwrap();
    journal.apply(pin(target, "'B'"), &mut document).unwrap();
    journal.undo(&mut document).unwrap();
    journal.undo(&mut document).unwrap();

    journal.redo(&mut document).unwrap();
    journal.redo(&mut document).unwrap();
    assert_eq!(journal.redo(&mut document).unwrap(), None);

    let names: Vec<_> = document
        .symbol(target)
        .unwrap()
        .pins()
        .iter()
        .map(|p| p.name().to_string())
        .collect();
    assert_eq!(names, vec!["A", "B"]);
}

// =============================================================================
// Branch Abandonment
// =============================================================================

#[test]
fn editing_after_undo_forgets_the_redo_branch() {
    let (mut document, target, mut journal) = editing("U1");

    journal.apply(pin(target, "'OLD'"), &mut document).unwrap();
    journal.undo(&mut document).unwrap();
    journal.apply(pin(target, "'NEW'"), &mut document).unwrap();

    assert_eq!(journal.redo_depth(), 0);
    assert_eq!(journal.redo(&mut document).unwrap(), None);

    let symbol = document.symbol(target).unwrap();
    assert_eq!(symbol.pins().len(), 1);
    assert_eq!(symbol.pins()[0].name(), "NEW");
}

#[test]
fn depths_track_the_walk() {
    let (mut document, target, mut journal) = editing("U1");

    journal.apply(pin(target, "'A'"), &mut document).unwrap();
    journal.apply(pin(target, "'B'"), &mut document).unwrap();
    assert_eq!((journal.undo_depth(), journal.redo_depth()), (2, 0));

    journal.undo(&mut document).unwrap();
    assert_eq!((journal.undo_depth(), journal.redo_depth()), (1, 1));

    journal.redo(&mut document).unwrap();
    assert_eq!((journal.undo_depth(), journal.redo_depth()), (2, 0));
}

// =============================================================================
// Mixed Command Kinds
// =============================================================================

#[test]
fn wire_undo_removes_every_segment_it_made() {
    let (mut document, target, mut journal) = editing("U1");

    // Three points, two segments, one journal entry.
    journal
        .apply(wire(target, "(0 0) (2.54 0) (2.54 2.54)"), &mut document)
        .unwrap();
    assert_eq!(document.symbol(target).unwrap().wires().len(), 2);
    assert_eq!(journal.undo_depth(), 1);

    journal.undo(&mut document).unwrap();
    assert!(document.symbol(target).unwrap().wires().is_empty());
}

#[test]
fn name_undo_restores_the_displaced_name() {
    let (mut document, target, mut journal) = editing("DRAFT");

    journal
        .apply(
            Box::new(NameCommand::parse(target, "'FINAL'").unwrap()),
            &mut document,
        )
        .unwrap();
    assert_eq!(document.symbol(target).unwrap().name(), "FINAL");

    assert_eq!(journal.undo(&mut document).unwrap(), Some("NAME"));
    assert_eq!(document.symbol(target).unwrap().name(), "DRAFT");
}

#[test]
fn grid_undo_restores_the_snapshot() {
    let mut document = Document::new();
    let mut journal = Journal::new();
    let before = document.grid().snapshot();

    journal
        .apply(
            Box::new(GridCommand::parse("mm 1.27 off").unwrap()),
            &mut document,
        )
        .unwrap();
    assert_ne!(document.grid().snapshot(), before);

    assert_eq!(journal.undo(&mut document).unwrap(), Some("GRID"));
    assert_eq!(document.grid().snapshot(), before);
}

#[test]
fn interleaved_kinds_undo_in_reverse() {
    let (mut document, target, mut journal) = editing("U1");

    journal.apply(pin(target, "'A'"), &mut document).unwrap();
    journal
        .apply(Box::new(GridCommand::parse("mil 100").unwrap()), &mut document)
        .unwrap();
    journal
        .apply(
            Box::new(NameCommand::parse(target, "'U2'").unwrap()),
            &mut document,
        )
        .unwrap();

    let mut verbs = Vec::new();
    while let Some(verb) = journal.undo(&mut document).unwrap() {
        verbs.push(verb);
    }
    assert_eq!(verbs, vec!["NAME", "GRID", "PIN"]);
}

// =============================================================================
// Failure Handling
// =============================================================================

#[test]
fn empty_journal_reports_none_both_ways() {
    let mut document = Document::new();
    let mut journal = Journal::new();
    assert_eq!(journal.undo(&mut document).unwrap(), None);
    assert_eq!(journal.redo(&mut document).unwrap(), None);
}

#[test]
fn a_command_that_fails_to_execute_is_not_recorded() {
    let mut document = Document::new();
    let mut journal = Journal::new();

    // The target id was never minted by this document.
    let orphan = pin(ElementId::new(923), "'A'");
    assert!(journal.apply(orphan, &mut document).is_err());
    assert_eq!(journal.undo_depth(), 0);
    assert_eq!(journal.redo_depth(), 0);
}

#[test]
fn undo_then_redo_round_trips_pin_attributes() {
    let (mut document, target, mut journal) = editing("U1");

    journal
        .apply(pin(target, "'CLK' (0 -5.08) in clk long R90 2"), &mut document)
        .unwrap();
    journal.undo(&mut document).unwrap();
    journal.redo(&mut document).unwrap();

    let symbol = document.symbol(target).unwrap();
    let p = &symbol.pins()[0];
    assert_eq!(p.name(), "CLK");
    assert_eq!(p.origin().y().raw(), -5.08);
    assert_eq!(p.rotation().degrees(), 90.0);
    assert_eq!(p.swap_level(), 2);
    assert_eq!(format!("{}", p.length()), "long");
}
