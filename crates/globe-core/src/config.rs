//! Device-class driven scene configuration.
//!
//! The reduced profile is picked once from the user agent; it is never
//! adjusted from measured frame times.

/// Coarse device capability bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Desktop,
    Reduced,
}

impl DeviceClass {
    /// Android browsers get the reduced profile; everything else is desktop.
    pub fn from_user_agent(user_agent: &str) -> Self {
        if user_agent.to_ascii_lowercase().contains("android") {
            DeviceClass::Reduced
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DeviceClass::Desktop => "desktop",
            DeviceClass::Reduced => "reduced",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GlobeConfig {
    pub device: DeviceClass,
    /// Width and height segments of the wireframe sphere.
    pub segment_count: u32,
    pub particle_count: usize,
    /// Inner glow and halo shells.
    pub enable_glow_layers: bool,
    /// Connection arcs and their travelling pulses.
    pub enable_arcs: bool,
    /// Run the update on every n-th display refresh.
    pub frame_skip: u32,
    /// Upper bound for the canvas backing store pixel ratio.
    pub max_pixel_ratio: f64,
}

impl GlobeConfig {
    pub fn desktop() -> Self {
        Self {
            device: DeviceClass::Desktop,
            segment_count: 32,
            particle_count: 200,
            enable_glow_layers: true,
            enable_arcs: true,
            frame_skip: 1,
            max_pixel_ratio: 2.0,
        }
    }

    pub fn reduced() -> Self {
        Self {
            device: DeviceClass::Reduced,
            segment_count: 20,
            particle_count: 50,
            enable_glow_layers: false,
            enable_arcs: false,
            frame_skip: 2,
            max_pixel_ratio: 1.5,
        }
    }

    pub fn for_device(device: DeviceClass) -> Self {
        match device {
            DeviceClass::Desktop => Self::desktop(),
            DeviceClass::Reduced => Self::reduced(),
        }
    }

    pub fn from_user_agent(user_agent: &str) -> Self {
        Self::for_device(DeviceClass::from_user_agent(user_agent))
    }
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self::desktop()
    }
}
