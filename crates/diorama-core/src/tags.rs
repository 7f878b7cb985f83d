//! Name-based classification of scene nodes.
//!
//! The scene is authored with role hints embedded in mesh names
//! (`workbtn_hover_pointer_raycaster`, `DJ3_hover_raycaster`, `cloud_01`, ...).
//! Names are parsed exactly once when the scene loads; everything downstream
//! switches on the resulting enums.

use crate::host::Modal;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    GenericHover,
    WorkButton,
    AboutButton,
    ContactButton,
    LegalButton,
    PcButton,
    Slider,
    /// Pad number in `1..=9`.
    DjPad(u8),
    Monitor,
    Decoration,
}

impl Role {
    pub fn modal(self) -> Option<Modal> {
        match self {
            Role::WorkButton => Some(Modal::Work),
            Role::AboutButton => Some(Modal::About),
            Role::ContactButton => Some(Modal::Contact),
            Role::LegalButton => Some(Modal::Legal),
            _ => None,
        }
    }

    /// The four modal buttons in the corners of the diorama.
    pub fn is_corner_button(self) -> bool {
        self.modal().is_some()
    }

    /// Objects the view-cycle hint animates.
    pub fn is_hint_target(self) -> bool {
        matches!(self, Role::Slider | Role::PcButton | Role::DjPad(_))
    }

    pub fn is_clickable(self) -> bool {
        self.is_corner_button() || self.is_hint_target()
    }
}

/// Raised-pose preset for hover transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HoverVariant {
    Default,
    V2,
    V3,
    Dj,
    Tthings,
    Slider,
    PcButton,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickVariant {
    Dj,
    PcButton,
}

/// Texture family swapped by the day/night theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureKey {
    Terrain,
    Other,
    Pcwei,
}

impl TextureKey {
    pub const ALL: [TextureKey; 3] = [TextureKey::Terrain, TextureKey::Other, TextureKey::Pcwei];

    pub fn as_str(self) -> &'static str {
        match self {
            TextureKey::Terrain => "terrain",
            TextureKey::Other => "other",
            TextureKey::Pcwei => "pcwei",
        }
    }

    pub fn from_name(name: &str) -> Option<TextureKey> {
        TextureKey::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AmbientKind {
    Cloud,
    /// Oscillates around X.
    RotorA,
    /// Oscillates around X, mirrored.
    RotorB,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeTags {
    pub role: Role,
    /// Eligible for ray picking.
    pub pickable: bool,
    /// Shows the pointer cursor when hovered.
    pub clickable: bool,
    pub hover: Option<HoverVariant>,
    pub click: Option<ClickVariant>,
    pub texture: Option<TextureKey>,
    pub ambient: Option<AmbientKind>,
}

pub fn classify(name: &str) -> NodeTags {
    let role = classify_role(name);
    let hover = name.contains("hover").then(|| hover_variant(name));
    let click = if name.contains("DJ") {
        Some(ClickVariant::Dj)
    } else if name.contains("pcbtn") {
        Some(ClickVariant::PcButton)
    } else {
        None
    };
    let texture = TextureKey::ALL
        .into_iter()
        .find(|key| name.contains(key.as_str()));
    let ambient = if name.contains("cloud") {
        Some(AmbientKind::Cloud)
    } else if name.contains("roA") {
        Some(AmbientKind::RotorA)
    } else if name.contains("raB") {
        Some(AmbientKind::RotorB)
    } else {
        None
    };
    NodeTags {
        role,
        pickable: name.contains("raycaster") || click.is_some(),
        clickable: name.contains("pointer") || role.is_clickable(),
        hover,
        click,
        texture,
        ambient,
    }
}

fn classify_role(name: &str) -> Role {
    if name.contains("monitor") {
        Role::Monitor
    } else if name.contains("workbtn") {
        Role::WorkButton
    } else if name.contains("aboutbtn") {
        Role::AboutButton
    } else if name.contains("contactbtn") {
        Role::ContactButton
    } else if name.contains("legalbtn") {
        Role::LegalButton
    } else if name.contains("pcbtn") {
        Role::PcButton
    } else if name.contains("slider") {
        Role::Slider
    } else if name.contains("DJ") {
        match dj_pad_number(name) {
            Some(pad) => Role::DjPad(pad),
            None => {
                log::warn!("[scene] DJ node {:?} has no pad number in 1..=9", name);
                Role::GenericHover
            }
        }
    } else if name.contains("hover") {
        Role::GenericHover
    } else {
        Role::Decoration
    }
}

fn dj_pad_number(name: &str) -> Option<u8> {
    let start = name.find("DJ")? + 2;
    let digits: String = name[start..]
        .chars()
        .skip_while(|c| *c == '_')
        .take_while(|c| c.is_ascii_digit())
        .collect();
    let pad = digits.parse::<u8>().ok()?;
    (1..=9).contains(&pad).then_some(pad)
}

fn hover_variant(name: &str) -> HoverVariant {
    if name.contains("v2") {
        HoverVariant::V2
    } else if name.contains("v3") {
        HoverVariant::V3
    } else if name.contains("DJ") {
        HoverVariant::Dj
    } else if name.contains("Tthings") {
        HoverVariant::Tthings
    } else if name.contains("slider") {
        HoverVariant::Slider
    } else if name.contains("pcbtn") {
        HoverVariant::PcButton
    } else {
        HoverVariant::Default
    }
}
