use std::f32::consts::PI;

// Shared visual tuning constants for the globe scene.

// Palette (sRGB, 0..1)
pub const PRIMARY_RGB: [f32; 3] = [0.902, 0.224, 0.275]; // #e63946
pub const PULSE_RGB: [f32; 3] = [1.0, 0.420, 0.420]; // #ff6b6b

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 45.0;
pub const CAMERA_Z: f32 = 2.8;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Globe shells
pub const GLOBE_RADIUS: f32 = 1.0;
pub const GLOBE_OPACITY: f32 = 0.12;
pub const INNER_GLOW_RADIUS: f32 = 0.98;
pub const INNER_GLOW_SEGMENTS: u32 = 24;
pub const INNER_GLOW_OPACITY: f32 = 0.03;
pub const HALO_RADIUS: f32 = 1.15;
pub const HALO_SEGMENTS: u32 = 32;
pub const HALO_OPACITY: f32 = 0.04;

// Rings
pub const EQUATOR_INNER: f32 = 1.005;
pub const EQUATOR_OUTER: f32 = 1.01;
pub const EQUATOR_OPACITY: f32 = 0.15;
pub const SCAN_RING_INNER: f32 = 0.99;
pub const SCAN_RING_OUTER: f32 = 1.03;
pub const SCAN_RING_SWEEP: f32 = PI * 0.4;
pub const SCAN_RING_OPACITY: f32 = 0.2;
pub const SCAN_RING_TILT: f32 = PI / 2.0;
pub const RING_SEGMENTS: u32 = 64;

// Particle shell
pub const PARTICLE_SHELL_MIN: f32 = 1.2;
pub const PARTICLE_SHELL_MAX: f32 = 2.0;
pub const PARTICLE_SIZE: f32 = 0.015;
pub const PARTICLE_OPACITY: f32 = 0.5;

// Markers
pub const MARKER_RADIUS: f32 = 1.02; // markers float just above the wireframe
pub const DOT_RADIUS: f32 = 0.02;
pub const DOT_SEGMENTS: u32 = 8;
pub const DOT_OPACITY: f32 = 0.9;
pub const MARKER_RING_HOLE: f32 = 0.01;
pub const MARKER_RING_SEGMENTS: u32 = 16;
pub const INNER_RING_OUTER: f32 = 0.04;
pub const INNER_RING_OPACITY: f32 = 0.6;
pub const OUTER_RING_OUTER: f32 = 0.06;
pub const OUTER_RING_OPACITY: f32 = 0.3;

// Connections
pub const ARC_BULGE_RADIUS: f32 = 1.35;
pub const ARC_SEGMENTS: u32 = 50;
pub const ARC_OPACITY: f32 = 0.08;
pub const PULSE_RADIUS: f32 = 0.012;
pub const PULSE_SEGMENTS: u32 = 6;
pub const PULSE_OPACITY: f32 = 0.9;
pub const PULSE_SPEED_MIN: f32 = 0.15;
pub const PULSE_SPEED_SPAN: f32 = 0.2;
pub const PULSE_STEP_PER_FRAME: f32 = 0.01; // progress = speed * step per refresh

// Auto-rotation (radians per update)
pub const AUTO_YAW_STEP: f32 = 0.002;
pub const SCAN_ROLL_STEP: f32 = 0.008;
pub const PARTICLE_YAW_STEP: f32 = -0.0005;
pub const PARTICLE_PITCH_STEP: f32 = 0.0002;

// Pointer-driven tilt
pub const POINTER_YAW_SCALE: f32 = 0.3;
pub const POINTER_PITCH_SCALE: f32 = 0.2;
pub const PITCH_DAMPING: f32 = 0.5;
pub const PITCH_EASE_RATE: f32 = 0.02;

// Halo breathing
pub const HALO_SCALE_FREQ: f32 = 0.5;
pub const HALO_SCALE_AMP: f32 = 0.02;
pub const HALO_OPACITY_FREQ: f32 = 0.8;
pub const HALO_OPACITY_BASE: f32 = 0.03;
pub const HALO_OPACITY_AMP: f32 = 0.015;

// Marker pulses
pub const INNER_PULSE_FREQ: f32 = 2.0;
pub const INNER_PULSE_AMP: f32 = 0.8;
pub const OUTER_PULSE_FREQ: f32 = 1.5;
pub const OUTER_PULSE_AMP: f32 = 1.5;
pub const OUTER_PULSE_LAG: f32 = 1.5;
pub const OUTER_RING_PEAK_OPACITY: f32 = 0.25;
pub const DOT_FLICKER_FREQ: f32 = 3.0;
pub const DOT_FLICKER_BASE: f32 = 0.5;
pub const DOT_FLICKER_AMP: f32 = 0.4;

// Pulse envelope
pub const PULSE_SCALE_BASE: f32 = 0.8;
pub const PULSE_SCALE_SPAN: f32 = 0.4;

// Particle field shimmer
pub const PARTICLE_SHIMMER_FREQ: f32 = 0.3;
pub const PARTICLE_OPACITY_BASE: f32 = 0.35;
pub const PARTICLE_OPACITY_AMP: f32 = 0.15;
