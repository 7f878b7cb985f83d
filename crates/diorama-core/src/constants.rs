use glam::Vec3;

// Shared tuning constants for the interaction runtime.

// Hover / click transitions
pub const HOVER_DURATION_SEC: f32 = 0.3;
pub const CLICK_DURATION_SEC: f32 = 0.3;
pub const CLICK_PRESS_SHARE: f32 = 0.5; // press phase length as a fraction of the click duration

// Hit testing
pub const HIT_TEST_MIN_INTERVAL_SEC: f32 = 0.1; // recast at least this often even without pointer motion

// Monitor
pub const MONITOR_BLEND_SEC: f32 = 1.0;
pub const MONITOR_SMOOTHING: f32 = 0.08; // per-frame approach factor for brightness/contrast
pub const MONITOR_EPSILON: f32 = 1e-3;
pub const MONITOR_IDLE_BRIGHTNESS: f32 = 1.0;
pub const MONITOR_IDLE_CONTRAST: f32 = 1.0;
pub const MONITOR_HOVER_BRIGHTNESS: f32 = 1.2;
pub const MONITOR_HOVER_CONTRAST: f32 = 1.3;
pub const MONITOR_WARMUP_BRIGHTNESS: f32 = 0.0; // screen starts dark and warms up on scene entry
pub const MONITOR_WARMUP_CONTRAST: f32 = 0.6;

// Camera
pub const CAMERA_FOVY_DEG: f32 = 35.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;
pub const CAMERA_TWEEN_SEC: f32 = 1.6;
pub const NARROW_VIEWPORT_MAX_PX: f32 = 768.0;

// Resting camera per breakpoint: (position, target)
pub const WIDE_HOME_POSE: [Vec3; 2] = [
    Vec3::new(-5.522_436, 8.036_418, 14.730_256),
    Vec3::new(-0.036_218, 2.079_467, -0.987_473),
];
pub const NARROW_HOME_POSE: [Vec3; 2] = [
    Vec3::new(-12.909_337, 8.550_932, 20.598_656),
    Vec3::new(0.332_982, 2.654_559, -0.505_465),
];

// Camera view presets cycled by the view button. The last entry returns home.
pub const WIDE_VIEW_PRESETS: [[Vec3; 2]; 4] = [
    [Vec3::new(-1.2, 4.2, 4.5), Vec3::new(-0.6, 3.1, -1.2)], // monitor close-up
    [Vec3::new(2.8, 4.6, 5.2), Vec3::new(0.9, 2.4, -0.4)],   // desk: slider, pc button, pads
    [Vec3::new(10.5, 7.2, 8.4), Vec3::new(0.0, 2.2, -0.8)],  // side view
    WIDE_HOME_POSE,
];
pub const NARROW_VIEW_PRESETS: [[Vec3; 2]; 4] = [
    [Vec3::new(-2.1, 5.0, 7.8), Vec3::new(-0.6, 3.1, -1.2)],
    [Vec3::new(4.4, 5.6, 8.9), Vec3::new(0.9, 2.4, -0.4)],
    [Vec3::new(15.8, 9.4, 13.1), Vec3::new(0.0, 2.2, -0.8)],
    NARROW_HOME_POSE,
];

// View-cycle hook indices (post-increment)
pub const GLOW_VIEW_INDEX: usize = 0;
pub const HINT_VIEW_INDEX: usize = 2;

// Slider
pub const SLIDER_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 0.35);
pub const SLIDER_TOGGLE_SEC: f32 = 0.4;

// Colour effects
pub const CLICK_FLASH_COLOR: Vec3 = Vec3::new(1.0, 0.86, 0.38);
pub const CLICK_FLASH_SEC: f32 = 0.45;
pub const GLOW_COLOR: Vec3 = Vec3::new(1.0, 0.93, 0.62);
pub const GLOW_STRENGTH: f32 = 0.65;
pub const GLOW_PERIOD_SEC: f32 = 1.6;
pub const GLOW_STAGGER_SEC: f32 = 0.2;
pub const HINT_TINT: Vec3 = Vec3::new(0.55, 0.85, 1.0);
pub const HINT_DURATION_SEC: f32 = 0.9;
pub const HINT_STAGGER_SEC: f32 = 0.08;
pub const HINT_NUDGE: Vec3 = Vec3::new(0.0, 0.08, 0.0);
pub const HINT_BOOP_SCALE: f32 = 1.15;

// Ambient motion
pub const CLOUD_FLOAT_AMPLITUDE: f32 = 0.5;
pub const CLOUD_FLOAT_SPEED_MIN: f32 = 0.05;
pub const CLOUD_FLOAT_SPEED_SPAN: f32 = 0.1;
pub const CLOUD_ROTATION_SPEED_MIN: f32 = 0.000_05; // radians per frame
pub const CLOUD_ROTATION_SPEED_SPAN: f32 = 0.000_2;
pub const ROTOR_BASE_DEG: f32 = 180.0;
pub const ROTOR_RANGE_DEG: f32 = 10.0;
pub const ROTOR_FREQUENCY: f32 = 1.5;
pub const AMBIENT_SEED: u64 = 0x5EED_D10A;

// Theme palettes
pub const DAY_BACKGROUND: Vec3 = Vec3::new(0.772_549, 0.858_824, 0.654_902); // #c5dba7
pub const NIGHT_BACKGROUND: Vec3 = Vec3::new(0.062_745, 0.078_431, 0.141_176); // #101424
pub const DAY_GRID_TINT: Vec3 = Vec3::new(0.42, 0.36, 0.24);
pub const NIGHT_GRID_TINT: Vec3 = Vec3::new(0.35, 0.55, 1.0);
pub const DAY_SMOKE_TINT: Vec3 = Vec3::new(1.0, 1.0, 1.0);
pub const NIGHT_SMOKE_TINT: Vec3 = Vec3::new(0.62, 0.68, 0.9);
