// DOM hooks and media paths for the web front-end. Tuning values for the
// interaction runtime live in `diorama_core::constants`.

// Canvas the host renderer draws into
pub const CANVAS_ID: &str = "experience-canvas";

// Element ids
pub const THEME_TOGGLE_ID: &str = "theme-toggle-button";
pub const CAMERA_CYCLE_ID: &str = "camera-cycle-button";
pub const MUSIC_TOGGLE_ID: &str = "music-toggle-button";
pub const MONITOR_VIDEO_ID: &str = "monitor-video";

// Selectors
pub const MODAL_SELECTOR: &str = ".modal";
pub const MODAL_EXIT_SELECTOR: &str = ".modal-exit-button";

// Class toggled on overlays and on <body> for the night palette
pub const HIDDEN_CLASS: &str = "hidden";
pub const NIGHT_BODY_CLASS: &str = "dark-theme";

// Audio
pub const SOUND_DIR: &str = "/audio/sfx";
pub const BACKGROUND_TRACK: &str = "/audio/music/background.ogg";
pub const UI_VOLUME: f64 = 0.6;
pub const BACKGROUND_VOLUME: f64 = 0.35;

/// Asset path for a sound key as produced by `SoundKey::key`.
pub fn sound_path(key: &str) -> String {
    if key == "background" {
        BACKGROUND_TRACK.to_string()
    } else {
        format!("{}/{}.ogg", SOUND_DIR, key)
    }
}

pub fn volume_for(key: &str) -> f64 {
    if key == "background" {
        BACKGROUND_VOLUME
    } else {
        UI_VOLUME
    }
}
