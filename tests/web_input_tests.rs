// Host-side tests for the web front-end's pure helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use glam::{Vec2, Vec3};
use input::*;

#[test]
fn viewport_size_clamps_degenerate_windows() {
    assert_eq!(viewport_size(1280.0, 720.0), Vec2::new(1280.0, 720.0));
    assert_eq!(viewport_size(0.0, -5.0), Vec2::ONE);
}

#[test]
fn pose_from_slice_needs_six_values() {
    let pose = pose_from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(pose.position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(pose.target, Vec3::new(4.0, 5.0, 6.0));
    assert!(pose_from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]).is_none());
    assert!(pose_from_slice(&[]).is_none());
}

#[test]
fn node_desc_unpacks_flat_arrays() {
    let desc = node_desc(
        "pcbtn_hover_raycaster",
        &[1.0, 2.0, 3.0, 0.0, 0.5, 0.0, 2.0, 2.0, 2.0],
        &[0.0, 0.1, 0.0, 0.2, 0.3, 0.4],
        &[0.5, 0.25, 1.0],
    );
    assert_eq!(desc.name, "pcbtn_hover_raycaster");
    assert_eq!(desc.transform.position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(desc.transform.rotation, Vec3::new(0.0, 0.5, 0.0));
    assert_eq!(desc.transform.scale, Vec3::splat(2.0));
    assert_eq!(desc.bounds.center, Vec3::new(0.0, 0.1, 0.0));
    assert_eq!(desc.bounds.half_extents, Vec3::new(0.2, 0.3, 0.4));
    assert_eq!(desc.color, Vec3::new(0.5, 0.25, 1.0));
}

#[test]
fn node_desc_falls_back_on_short_arrays() {
    let desc = node_desc("cloud_01", &[4.0, 5.0, 6.0], &[], &[0.1]);
    assert_eq!(desc.transform.position, Vec3::new(4.0, 5.0, 6.0));
    assert_eq!(desc.transform.rotation, Vec3::ZERO);
    assert_eq!(desc.transform.scale, Vec3::ONE);
    assert_eq!(desc.bounds.half_extents, Vec3::splat(0.5));
    assert_eq!(desc.color, Vec3::ONE);
}

#[test]
fn sound_paths_follow_the_key() {
    assert_eq!(sound_path("click"), "/audio/sfx/click.ogg");
    assert_eq!(sound_path("dj3"), "/audio/sfx/dj3.ogg");
    assert_eq!(sound_path("background"), BACKGROUND_TRACK);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn volumes_are_audible_and_music_sits_under_effects() {
    assert!(volume_for("background") < volume_for("click"));
    assert!(UI_VOLUME > 0.0 && UI_VOLUME <= 1.0);
    assert!(BACKGROUND_VOLUME > 0.0);
}

#[test]
fn page_hooks_are_plain_ids_and_selectors() {
    for id in [CANVAS_ID, THEME_TOGGLE_ID, CAMERA_CYCLE_ID, MUSIC_TOGGLE_ID, MONITOR_VIDEO_ID] {
        assert!(!id.starts_with('#'));
        assert!(!id.contains(' '));
    }
    assert!(MODAL_SELECTOR.starts_with('.'));
    assert!(MODAL_EXIT_SELECTOR.starts_with('.'));
}
