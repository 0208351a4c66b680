// DOM hooks and page-level tuning for the web front-end.
//
// Scene tuning (radii, speeds, colours) lives in `globe_core::constants`;
// this file only names the page elements the globe talks to.

// Mount point; the canvas is created inside it
pub const MOUNT_ID: &str = "globe-container";

// Optional collaborators, skipped when absent
pub const TOOLTIP_ID: &str = "globe-tooltip";
pub const CURSOR_ID: &str = "bug-cursor";

// Classes toggled on the collaborators
pub const TOOLTIP_VISIBLE_CLASS: &str = "visible";
pub const CURSOR_HOVER_CLASS: &str = "hover";

// Added to <body> on reduced-profile devices and while the page is hidden
pub const REDUCED_BODY_CLASS: &str = "android";
pub const PAUSED_BODY_CLASS: &str = "paused";

// Inline style for the created canvas
pub const CANVAS_STYLE: &str = "display:block;width:100%;height:100%;";
