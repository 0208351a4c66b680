use crate::constants::{POINTER_PITCH_SCALE, POINTER_YAW_SCALE};
use glam::Vec2;

/// Latest pointer sample and the rotation it asks for.
///
/// Written by the pointer handlers, read by the frame update.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Interaction {
    /// Normalized device coordinates, x right and y up, both in [-1, 1].
    pub pointer: Option<Vec2>,
    /// Tracked alongside pitch; yaw itself is owned by the auto-rotation.
    pub target_yaw: f32,
    pub target_pitch: f32,
    /// Marker index under the pointer.
    pub hovered: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverChange {
    Unchanged,
    Entered(usize),
    Switched { from: usize, to: usize },
    Left(usize),
}

impl Interaction {
    pub fn pointer_moved(&mut self, ndc: Vec2) {
        let ndc = ndc.clamp(Vec2::NEG_ONE, Vec2::ONE);
        self.pointer = Some(ndc);
        self.target_yaw = ndc.x * POINTER_YAW_SCALE;
        self.target_pitch = -ndc.y * POINTER_PITCH_SCALE;
    }

    /// Pointer left the surface: stop tilting and drop any hover.
    pub fn pointer_left(&mut self) -> HoverChange {
        self.pointer = None;
        self.target_yaw = 0.0;
        self.target_pitch = 0.0;
        self.set_hover(None)
    }

    pub fn set_hover(&mut self, hit: Option<usize>) -> HoverChange {
        let change = match (self.hovered, hit) {
            (None, None) => HoverChange::Unchanged,
            (Some(a), Some(b)) if a == b => HoverChange::Unchanged,
            (None, Some(b)) => HoverChange::Entered(b),
            (Some(a), Some(b)) => HoverChange::Switched { from: a, to: b },
            (Some(a), None) => HoverChange::Left(a),
        };
        self.hovered = hit;
        change
    }
}
