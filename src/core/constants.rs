// Simulation and drawing constants for the background field and scroll tracker.

// Particles
pub const PARTICLE_SIZE: f32 = 1.5; // base dot radius
pub const PARTICLE_SPEED_SPAN: f32 = 0.3; // velocity components drawn from [-span/2, span/2)

// Glow pulse
pub const GLOW_DURATION_FRAMES: u32 = 40;
pub const GLOW_MAX_RADIUS: f32 = 15.0;
pub const GLOW_BASE_ALPHA: f32 = 0.6;

// Proximity
pub const POINTER_PROXIMITY: f32 = 100.0; // entering this radius starts a glow
pub const LINK_DISTANCE: f32 = 200.0; // max length of any connecting line
pub const LINK_FADE_DISTANCE: f32 = 100.0; // lines reach zero alpha here
pub const PARTICLE_LINK_ALPHA: f32 = 0.4;
pub const POINTER_LINK_ALPHA: f32 = 0.5;
pub const POINTER_GLOW_RADIUS: f32 = 100.0;
pub const POINTER_GLOW_ALPHA: f32 = 0.08;

// Dot shading
pub const DOT_DIM_ALPHA: f32 = 0.4; // alpha outside the proximity radius
pub const DOT_BRIGHTNESS_SPAN: f32 = 0.6; // extra alpha at zero distance
pub const DOT_NEAR_TINT: f32 = 0.35; // accent blend for a non-glowing dot at zero distance

// Colours (rgb)
pub const WHITE_RGB: [u8; 3] = [255, 255, 255];
pub const ACCENT_RGB: [u8; 3] = [255, 165, 0];

// Scroll tracking
pub const SCROLL_EASE: f32 = 0.075; // fraction of remaining distance covered per frame
pub const SECTION_ACTIVATION_FRACTION: f32 = 1.0 / 3.0; // activation line below scroll top
pub const PROGRESS_MAX: f32 = 100.0;
