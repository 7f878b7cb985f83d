//! Day/night theme: texture set per tagged mesh plus background and tints.

use crate::constants::{
    DAY_BACKGROUND, DAY_GRID_TINT, DAY_SMOKE_TINT, NIGHT_BACKGROUND, NIGHT_GRID_TINT,
    NIGHT_SMOKE_TINT,
};
use crate::error::RuntimeError;
use crate::host::{SceneSurface, TintUniform};
use crate::scene::{NodeId, NodeTable, TextureId};
use crate::tags::TextureKey;
use fnv::FnvHashMap;
use glam::Vec3;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Day,
    Night,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Day => Theme::Night,
            Theme::Night => Theme::Day,
        }
    }

    /// Resolve a stored preference. Missing or garbage values fall back to day.
    pub fn from_preference(stored: Option<&str>) -> Theme {
        match stored.map(str::parse::<Theme>) {
            Some(Ok(theme)) => theme,
            Some(Err(e)) => {
                log::warn!("[theme] {}, using day", e);
                Theme::Day
            }
            None => Theme::Day,
        }
    }

    pub fn palette(self) -> ThemePalette {
        match self {
            Theme::Day => ThemePalette {
                background: DAY_BACKGROUND,
                grid_tint: DAY_GRID_TINT,
                smoke_tint: DAY_SMOKE_TINT,
            },
            Theme::Night => ThemePalette {
                background: NIGHT_BACKGROUND,
                grid_tint: NIGHT_GRID_TINT,
                smoke_tint: NIGHT_SMOKE_TINT,
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = RuntimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "day" => Ok(Theme::Day),
            "night" => Ok(Theme::Night),
            other => Err(RuntimeError::UnknownTheme(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemePalette {
    pub background: Vec3,
    pub grid_tint: Vec3,
    pub smoke_tint: Vec3,
}

/// Texture handles per (theme, texture family), registered by the loader.
#[derive(Clone, Debug, Default)]
pub struct TextureSet {
    maps: FnvHashMap<(Theme, TextureKey), TextureId>,
}

impl TextureSet {
    pub fn insert(&mut self, theme: Theme, key: TextureKey, texture: TextureId) {
        self.maps.insert((theme, key), texture);
    }

    pub fn with(mut self, theme: Theme, key: TextureKey, texture: TextureId) -> Self {
        self.insert(theme, key, texture);
        self
    }

    pub fn get(&self, theme: Theme, key: TextureKey) -> Option<TextureId> {
        self.maps.get(&(theme, key)).copied()
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemedMesh {
    pub node: NodeId,
    pub key: TextureKey,
    /// Texture currently bound on the host side, as far as we know.
    pub map: Option<TextureId>,
}

pub struct ThemeController {
    meshes: Vec<ThemedMesh>,
    textures: TextureSet,
    active: Option<Theme>,
}

impl ThemeController {
    pub fn new(nodes: &NodeTable, textures: TextureSet) -> Self {
        let meshes: Vec<ThemedMesh> = nodes
            .iter()
            .filter_map(|(node, n)| {
                n.tags.texture.map(|key| ThemedMesh {
                    node,
                    key,
                    map: None,
                })
            })
            .collect();
        log::info!("[theme] {} meshes carry themed textures", meshes.len());
        Self {
            meshes,
            textures,
            active: None,
        }
    }

    pub fn active(&self) -> Option<Theme> {
        self.active
    }

    pub fn meshes(&self) -> &[ThemedMesh] {
        &self.meshes
    }

    pub fn map_for(&self, node: NodeId) -> Option<TextureId> {
        self.meshes
            .iter()
            .find(|m| m.node == node)
            .and_then(|m| m.map)
    }

    /// Apply a theme in one synchronous pass. Returns the number of texture
    /// writes; meshes already showing the target texture are skipped.
    pub fn apply(&mut self, theme: Theme, surface: &mut impl SceneSurface) -> usize {
        let mut writes = 0;
        for mesh in &mut self.meshes {
            let Some(target) = self.textures.get(theme, mesh.key) else {
                continue;
            };
            if mesh.map == Some(target) {
                continue;
            }
            surface.set_mesh_texture(mesh.node, target);
            mesh.map = Some(target);
            writes += 1;
        }
        if self.active != Some(theme) {
            let palette = theme.palette();
            surface.set_background(palette.background);
            surface.set_tint(TintUniform::GridLine, palette.grid_tint);
            surface.set_tint(TintUniform::Smoke, palette.smoke_tint);
            self.active = Some(theme);
        }
        log::info!("[theme] applied {} ({} texture swaps)", theme, writes);
        writes
    }
}
