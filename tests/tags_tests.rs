// Name-based classification of scene nodes.

use diorama_core::*;

#[test]
fn corner_buttons_map_to_their_modals() {
    let cases = [
        ("workbtn_hover_pointer_raycaster", Role::WorkButton, Modal::Work),
        ("aboutbtn_hover_pointer_raycaster", Role::AboutButton, Modal::About),
        ("contactbtn_hover_pointer_raycaster", Role::ContactButton, Modal::Contact),
        ("legalbtn_hover_pointer_raycaster", Role::LegalButton, Modal::Legal),
    ];
    for (name, role, modal) in cases {
        let tags = classify(name);
        assert_eq!(tags.role, role, "{}", name);
        assert_eq!(tags.role.modal(), Some(modal));
        assert!(tags.pickable);
        assert!(tags.clickable);
        assert_eq!(tags.hover, Some(HoverVariant::Default));
        assert_eq!(tags.click, None);
    }
}

#[test]
fn dj_pads_parse_their_number() {
    let tags = classify("DJ3_hover_raycaster");
    assert_eq!(tags.role, Role::DjPad(3));
    assert_eq!(tags.hover, Some(HoverVariant::Dj));
    assert_eq!(tags.click, Some(ClickVariant::Dj));
    assert!(tags.pickable && tags.clickable);

    assert_eq!(classify("DJ_9_hover_raycaster").role, Role::DjPad(9));
}

#[test]
fn out_of_range_dj_pad_degrades_to_generic_hover() {
    for name in ["DJ0_hover_raycaster", "DJ12_hover_raycaster", "DJx_hover_raycaster"] {
        let tags = classify(name);
        assert_eq!(tags.role, Role::GenericHover, "{}", name);
        assert!(!tags.clickable);
        // still picked and pressed like any pad
        assert!(tags.pickable);
        assert_eq!(tags.click, Some(ClickVariant::Dj));
    }
}

#[test]
fn desk_controls() {
    let pc = classify("pcbtn_hover_raycaster");
    assert_eq!(pc.role, Role::PcButton);
    assert_eq!(pc.hover, Some(HoverVariant::PcButton));
    assert_eq!(pc.click, Some(ClickVariant::PcButton));

    let slider = classify("slider_hover_raycaster");
    assert_eq!(slider.role, Role::Slider);
    assert_eq!(slider.hover, Some(HoverVariant::Slider));
    assert_eq!(slider.click, None);
    assert!(slider.clickable);
}

#[test]
fn monitor_is_pickable_without_hover() {
    let tags = classify("monitor_raycaster");
    assert_eq!(tags.role, Role::Monitor);
    assert!(tags.pickable);
    assert_eq!(tags.hover, None);
}

#[test]
fn hover_variants_follow_name_markers() {
    assert_eq!(classify("cactus_hover_v2_raycaster").hover, Some(HoverVariant::V2));
    assert_eq!(classify("lamp_hover_v3_raycaster").hover, Some(HoverVariant::V3));
    assert_eq!(classify("Tthings_hover_raycaster").hover, Some(HoverVariant::Tthings));
    assert_eq!(classify("plant_hover_raycaster").hover, Some(HoverVariant::Default));
}

#[test]
fn generic_hover_objects_are_not_clickable() {
    let tags = classify("cactus_hover_v2_raycaster");
    assert_eq!(tags.role, Role::GenericHover);
    assert!(tags.pickable);
    assert!(!tags.clickable);
}

#[test]
fn pointer_marker_makes_anything_clickable() {
    let tags = classify("poster_hover_pointer_raycaster");
    assert_eq!(tags.role, Role::GenericHover);
    assert!(tags.clickable);
}

#[test]
fn decorations_are_not_pickable() {
    let tags = classify("terrain_ground");
    assert_eq!(tags.role, Role::Decoration);
    assert!(!tags.pickable);
    assert!(!tags.clickable);
    assert_eq!(tags.hover, None);
}

#[test]
fn texture_families() {
    assert_eq!(classify("terrain_ground").texture, Some(TextureKey::Terrain));
    assert_eq!(classify("other_props").texture, Some(TextureKey::Other));
    assert_eq!(classify("desk_pcwei").texture, Some(TextureKey::Pcwei));
    assert_eq!(classify("cloud_01").texture, None);
}

#[test]
fn texture_key_names_round_trip() {
    for key in TextureKey::ALL {
        assert_eq!(TextureKey::from_name(key.as_str()), Some(key));
    }
    assert_eq!(TextureKey::from_name("sky"), None);
}

#[test]
fn ambient_markers() {
    assert_eq!(classify("cloud_03").ambient, Some(AmbientKind::Cloud));
    assert_eq!(classify("windmill_roA").ambient, Some(AmbientKind::RotorA));
    assert_eq!(classify("windmill_raB").ambient, Some(AmbientKind::RotorB));
    assert_eq!(classify("terrain_ground").ambient, None);
}

#[test]
fn role_groups() {
    assert!(Role::WorkButton.is_corner_button());
    assert!(!Role::PcButton.is_corner_button());
    assert!(Role::Slider.is_hint_target());
    assert!(Role::DjPad(4).is_hint_target());
    assert!(!Role::Monitor.is_hint_target());
    assert!(!Role::Monitor.is_clickable());
}

#[test]
fn modal_and_sound_names() {
    for modal in Modal::ALL {
        assert_eq!(Modal::from_name(modal.name()), Some(modal));
    }
    assert_eq!(SoundKey::DjPad(7).key(), "dj7");
    assert!(SoundKey::Background.is_looping());
    assert!(SoundKey::DjPad(1).is_looping());
    assert!(!SoundKey::UiClick.is_looping());
}
