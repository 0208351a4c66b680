//! Per-frame update.
//!
//! [`Scene::advance`] is the only place scene nodes move. It takes the frame
//! clock and the latest [`Interaction`] explicitly, so it runs the same way
//! in tests as it does under `requestAnimationFrame`.

use crate::constants::*;
use crate::geometry::euler_xyz;
use crate::interaction::Interaction;
use crate::scene::{wrap_angle, Marker, Scene};
use glam::Vec3;
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    /// Seconds since the loop started.
    pub time_sec: f32,
    /// Display refreshes this update stands for (1 unless frames are skipped).
    pub frame_budget: f32,
}

impl FrameInput {
    pub fn new(time_sec: f32, frame_budget: f32) -> Self {
        Self {
            time_sec,
            frame_budget,
        }
    }
}

/// First-order smoothing: `current + (target - current * damping) * rate`.
///
/// With `damping` in (0, 1] and `rate` in (0, 1) the value settles on
/// `target / damping` without overshooting it.
#[inline]
pub fn ease_toward(current: f32, target: f32, damping: f32, rate: f32) -> f32 {
    current + (target - current * damping) * rate
}

#[inline]
pub fn inner_ring_scale(time: f32, phase: f32) -> f32 {
    1.0 + (time * INNER_PULSE_FREQ + phase).sin() * INNER_PULSE_AMP
}

#[inline]
pub fn outer_ring_scale(time: f32, phase: f32) -> f32 {
    1.0 + (time * OUTER_PULSE_FREQ + phase + OUTER_PULSE_LAG).sin() * OUTER_PULSE_AMP
}

/// Fade a ring out as it grows: full `peak` at scale 1, zero at `1 + amplitude`.
#[inline]
pub fn ring_opacity(scale: f32, peak: f32, amplitude: f32) -> f32 {
    (peak * (1.0 - (scale - 1.0) / amplitude)).clamp(0.0, 1.0)
}

#[inline]
pub fn dot_opacity(time: f32, phase: f32) -> f32 {
    DOT_FLICKER_BASE + (time * DOT_FLICKER_FREQ + phase).sin() * DOT_FLICKER_AMP
}

/// Move pulse progress forward; reaching the end restarts at exactly 0.
#[inline]
pub fn advance_progress(progress: f32, step: f32) -> f32 {
    let next = progress + step.max(0.0);
    if next >= 1.0 || !next.is_finite() {
        0.0
    } else {
        next.max(0.0)
    }
}

/// `sin(π·progress)`: zero at both ends, 1 half way along.
#[inline]
pub fn pulse_envelope(progress: f32) -> f32 {
    (progress * PI).sin().max(0.0)
}

fn animate_marker(marker: &mut Marker, time: f32) {
    let phase = marker.phase;

    let s = inner_ring_scale(time, phase);
    let inner = &mut marker.primitives[Marker::INNER_RING];
    inner.scale = Vec3::new(s, s, 1.0);
    inner.opacity = ring_opacity(s, INNER_RING_OPACITY, INNER_PULSE_AMP);

    let s = outer_ring_scale(time, phase);
    let outer = &mut marker.primitives[Marker::OUTER_RING];
    outer.scale = Vec3::new(s, s, 1.0);
    outer.opacity = ring_opacity(s, OUTER_RING_PEAK_OPACITY, OUTER_PULSE_AMP);

    marker.primitives[Marker::DOT].opacity = dot_opacity(time, phase);
}

impl Scene {
    pub fn advance(&mut self, input: &FrameInput, interaction: &Interaction) {
        let t = input.time_sec;

        // auto-rotation plus pointer tilt, shared by globe, markers and equator
        self.orientation.yaw = wrap_angle(self.orientation.yaw + AUTO_YAW_STEP);
        self.orientation.pitch = ease_toward(
            self.orientation.pitch,
            interaction.target_pitch,
            PITCH_DAMPING,
            PITCH_EASE_RATE,
        );
        let globe_rot = self.orientation.quat();
        self.globe.rotation = globe_rot;
        self.equator.rotation = globe_rot;

        self.scan_roll = wrap_angle(self.scan_roll + SCAN_ROLL_STEP);
        self.scan_ring.rotation = euler_xyz(SCAN_RING_TILT, self.orientation.yaw, self.scan_roll);

        if let Some(halo) = &mut self.halo {
            halo.scale = Vec3::splat(1.0 + (t * HALO_SCALE_FREQ).sin() * HALO_SCALE_AMP);
            halo.opacity = HALO_OPACITY_BASE + (t * HALO_OPACITY_FREQ).sin() * HALO_OPACITY_AMP;
        }

        for marker in &mut self.markers {
            animate_marker(marker, t);
        }

        let step_scale = PULSE_STEP_PER_FRAME * input.frame_budget;
        for arc in &mut self.connections {
            arc.progress = advance_progress(arc.progress, arc.speed * step_scale);
            arc.pulse.position = globe_rot * arc.curve.point(arc.progress);
            let fade = pulse_envelope(arc.progress);
            arc.pulse.opacity = PULSE_OPACITY * fade;
            arc.pulse.scale = Vec3::splat(PULSE_SCALE_BASE + fade * PULSE_SCALE_SPAN);
        }

        let field = &mut self.particles;
        field.yaw = wrap_angle(field.yaw + PARTICLE_YAW_STEP);
        field.pitch = wrap_angle(field.pitch + PARTICLE_PITCH_STEP);
        field.node.rotation = euler_xyz(field.pitch, field.yaw, 0.0);
        field.node.opacity =
            PARTICLE_OPACITY_BASE + (t * PARTICLE_SHIMMER_FREQ).sin() * PARTICLE_OPACITY_AMP;
    }
}

/// Fixed frame skip: lets every `skip`-th display refresh run the update.
#[derive(Clone, Copy, Debug)]
pub struct FrameGate {
    skip: u32,
    counter: u64,
}

impl FrameGate {
    pub fn new(skip: u32) -> Self {
        Self {
            skip: skip.max(1),
            counter: 0,
        }
    }

    /// Call once per refresh. Returns the frame budget when the update should run.
    pub fn tick(&mut self) -> Option<u32> {
        self.counter += 1;
        (self.counter % self.skip as u64 == 0).then_some(self.skip)
    }

    #[inline]
    pub fn skip(&self) -> u32 {
        self.skip
    }
}
