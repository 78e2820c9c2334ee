/// Scene layout and animation tuning constants.
///
/// These express intended behavior (spacings, rates, time constants) and keep
/// magic numbers out of the code.
// Vertical distance between section meshes (world units)
pub const SECTION_SPACING: f32 = 4.0;

// Number of scroll sections / meshes
pub const SECTION_COUNT: usize = 3;

// Responsive breakpoint (logical px); at or below this the meshes stack at x=0
pub const LAYOUT_BREAKPOINT_PX: f32 = 992.0;

// Horizontal mesh offsets for the wide (alternating) layout
pub const WIDE_LAYOUT_X: [f32; SECTION_COUNT] = [-2.0, 2.0, -2.0];

// Parallax exponential smoothing rate (per second)
pub const PARALLAX_RATE: f32 = 5.0;

// Continuous idle spin rates (rad per second)
pub const IDLE_SPIN_X_PER_SEC: f32 = 0.1;
pub const IDLE_SPIN_Y_PER_SEC: f32 = 0.12;

// Section-crossing rotation tween
pub const TWEEN_DURATION_SEC: f32 = 2.0;
pub const TWEEN_DELTA_X: f32 = 6.0;
pub const TWEEN_DELTA_Y: f32 = 3.0;
pub const TWEEN_DELTA_Z: f32 = 6.0;

// Particle field
pub const PARTICLE_COUNT: usize = 2000;
pub const PARTICLE_SPREAD: f32 = 10.0;

// Camera
pub const CAMERA_FOV_DEG: f32 = 35.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const CAMERA_LOCAL_Z: f32 = 6.0;

// Rendering caps GPU cost on high-DPI displays
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Default material/particle tint, editable at runtime via the panel
pub const DEFAULT_TINT_HEX: &str = "#ffeded";

// DOM ids consumed by the app shell
pub const CANVAS_ID: &str = "scene-canvas";
pub const TINT_INPUT_ID: &str = "tint-color";
