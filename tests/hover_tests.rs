// Hover exclusivity and cursor selection. Hover timelines are swapped for
// spies that log every play/reverse so the call order can be checked.

use diorama_core::constants::HOVER_DURATION_SEC;
use diorama_core::*;
use std::cell::RefCell;
use std::rc::Rc;

type CallLog = Rc<RefCell<Vec<(usize, &'static str)>>>;

struct SpyTimeline {
    owner: usize,
    log: CallLog,
    inner: Tween,
}

impl Timeline for SpyTimeline {
    fn play(&mut self) {
        self.log.borrow_mut().push((self.owner, "play"));
        self.inner.play();
    }
    fn reverse(&mut self) {
        self.log.borrow_mut().push((self.owner, "reverse"));
        self.inner.reverse();
    }
    fn restart(&mut self) {
        self.inner.restart();
    }
    fn kill(&mut self) {
        self.inner.kill();
    }
    fn tick(&mut self, dt: f32) -> Option<Finished> {
        self.inner.tick(dt)
    }
    fn progress(&self) -> f32 {
        self.inner.progress()
    }
    fn value(&self) -> f32 {
        self.inner.value()
    }
    fn direction(&self) -> Direction {
        self.inner.direction()
    }
    fn is_active(&self) -> bool {
        self.inner.is_active()
    }
}

const NAMES: [&str; 5] = [
    "workbtn_hover_pointer_raycaster",
    "cactus_hover_v2_raycaster",
    "DJ1_hover_raycaster",
    "slider_hover_raycaster",
    "pcbtn_hover_raycaster",
];

fn spied_registry() -> (Registry, CallLog) {
    let nodes = NodeTable::from_descs(
        NAMES
            .iter()
            .map(|n| NodeDesc::new(*n, Transform::default()))
            .collect(),
    );
    let mut registry = Registry::from_nodes(&nodes);
    let log: CallLog = Rc::new(RefCell::new(Vec::new()));
    for i in 0..registry.len() {
        registry.set_hover_timeline(
            ObjectId(i),
            Box::new(SpyTimeline {
                owner: i,
                log: log.clone(),
                inner: Tween::new(HOVER_DURATION_SEC, Ease::Power2Out),
            }),
        );
    }
    (registry, log)
}

#[test]
fn at_most_one_object_is_entered_for_any_hover_sequence() {
    let (mut registry, _) = spied_registry();
    let mut hover = HoverMachine::default();
    // deterministic pseudo-random walk over the objects and "nothing"
    let mut seed = 7u32;
    for _ in 0..500 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let pick = (seed >> 16) as usize % (NAMES.len() + 1);
        let nearest = (pick < NAMES.len()).then_some(ObjectId(pick));
        hover.update(nearest, &mut registry);
        assert!(registry.entered_count() <= 1);
        registry.tick((seed % 7) as f32 / 60.0);
        assert!(registry.entered_count() <= 1);
    }
}

#[test]
fn switching_reverses_the_old_object_before_entering_the_new() {
    let (mut registry, log) = spied_registry();
    let mut hover = HoverMachine::default();
    hover.update(Some(ObjectId(0)), &mut registry);
    hover.update(Some(ObjectId(2)), &mut registry);
    hover.update(Some(ObjectId(4)), &mut registry);
    assert_eq!(
        *log.borrow(),
        vec![(0, "play"), (0, "reverse"), (2, "play"), (2, "reverse"), (4, "play")]
    );
    assert_eq!(hover.state(), HoverState::Hovering(ObjectId(4)));
}

#[test]
fn staying_on_the_same_object_is_a_no_op() {
    let (mut registry, log) = spied_registry();
    let mut hover = HoverMachine::default();
    assert!(hover.update(Some(ObjectId(1)), &mut registry));
    assert!(!hover.update(Some(ObjectId(1)), &mut registry));
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn leaving_to_nothing_reverses() {
    let (mut registry, log) = spied_registry();
    let mut hover = HoverMachine::default();
    hover.update(Some(ObjectId(3)), &mut registry);
    hover.update(None, &mut registry);
    assert_eq!(*log.borrow(), vec![(3, "play"), (3, "reverse")]);
    assert_eq!(hover.state(), HoverState::NoneHovered);
    assert_eq!(hover.hovered(), None);
}

#[test]
fn disabled_objects_are_tracked_but_not_raised() {
    let (mut registry, log) = spied_registry();
    registry.set_hover_disabled(true);
    let mut hover = HoverMachine::default();
    hover.update(Some(ObjectId(0)), &mut registry);
    assert!(log.borrow().is_empty());
    assert_eq!(registry.entered_count(), 0);
    assert_eq!(hover.hovered(), Some(ObjectId(0)));
}

#[test]
fn release_drops_the_current_hover() {
    let (mut registry, log) = spied_registry();
    let mut hover = HoverMachine::default();
    hover.update(Some(ObjectId(2)), &mut registry);
    hover.release(&mut registry);
    assert_eq!(log.borrow().last(), Some(&(2, "reverse")));
    assert_eq!(hover.state(), HoverState::NoneHovered);
}

#[test]
fn hover_raise_completes_and_reverses_back_to_identity() {
    let nodes = NodeTable::from_descs(vec![NodeDesc::new(NAMES[0], Transform::default())]);
    let mut registry = Registry::from_nodes(&nodes);
    let mut hover = HoverMachine::default();
    hover.update(Some(ObjectId(0)), &mut registry);
    registry.tick(1.0);
    let raised = registry.get(ObjectId(0)).unwrap().delta();
    let full = HoverVariant::Default.raised();
    assert!(raised.translate.abs_diff_eq(full.translate, 1e-6));
    assert!(raised.rotate.abs_diff_eq(full.rotate, 1e-6));
    assert!(raised.scale.abs_diff_eq(full.scale, 1e-6));

    hover.update(None, &mut registry);
    registry.tick(1.0);
    assert_eq!(registry.get(ObjectId(0)).unwrap().delta(), PoseDelta::IDENTITY);
}

#[test]
fn cursor_reflects_the_object_under_the_pointer() {
    let nodes = NodeTable::from_descs(
        ["monitor_raycaster", NAMES[0], NAMES[1]]
            .iter()
            .map(|n| NodeDesc::new(*n, Transform::default()))
            .collect(),
    );
    let registry = Registry::from_nodes(&nodes);
    assert_eq!(cursor_for(None, &registry, false), CursorStyle::Default);
    assert_eq!(cursor_for(Some(ObjectId(0)), &registry, false), CursorStyle::Pointer);
    assert_eq!(cursor_for(Some(ObjectId(0)), &registry, true), CursorStyle::NotAllowed);
    assert_eq!(cursor_for(Some(ObjectId(1)), &registry, true), CursorStyle::Pointer);
    assert_eq!(cursor_for(Some(ObjectId(2)), &registry, false), CursorStyle::Default);
    assert_eq!(CursorStyle::NotAllowed.as_css(), "not-allowed");
}

#[test]
fn apply_cursor_deduplicates() {
    let mut hover = HoverMachine::default();
    assert_eq!(hover.apply_cursor(CursorStyle::Pointer), Some(CursorStyle::Pointer));
    assert_eq!(hover.apply_cursor(CursorStyle::Pointer), None);
    assert_eq!(hover.apply_cursor(CursorStyle::Default), Some(CursorStyle::Default));
}

#[test]
fn click_transition_presses_then_springs_back() {
    let nodes = NodeTable::from_descs(vec![NodeDesc::new(NAMES[2], Transform::default())]);
    let mut registry = Registry::from_nodes(&nodes);
    let obj = registry.get_mut(ObjectId(0)).unwrap();
    let click = obj.click.as_mut().unwrap();
    assert_eq!(click.delta(), PoseDelta::IDENTITY);
    click.trigger();
    registry.tick(0.1);
    let pressed = registry.get(ObjectId(0)).unwrap().click.as_ref().unwrap().delta();
    assert!(pressed.scale.y > 1.0);
    assert!(pressed.translate.y < 0.0);
    registry.tick(1.0);
    let rested = registry.get(ObjectId(0)).unwrap().click.as_ref().unwrap().delta();
    assert_eq!(rested, PoseDelta::IDENTITY);
}
