//! Tunable parameters for the touch controls and the demo scene.
//!
//! Values are fixed at startup; nothing here changes at runtime.

/// Player walking speed in units per second
pub const MOVE_PER_SECOND: f32 = 7.0;

/// Camera turn in degrees per canvas pixel dragged
pub const ANGULAR_PER_PIXEL: f32 = 1.0;

/// Redraw cap for the frame loop
pub const TARGET_FRAME_RATE: u32 = 60;

/// UI layout settings
pub mod canvas {
    /// Resolution the layout is authored for
    pub const REFERENCE_WIDTH: f32 = 1920.0;
    pub const REFERENCE_HEIGHT: f32 = 1080.0;

    /// Blend between matching width (0) and height (1) when the aspect differs
    pub const MATCH_WIDTH_OR_HEIGHT: f32 = 0.5;

    /// Side length of the touch position indicators, in canvas units
    pub const INDICATOR_SIZE: f32 = 120.0;
}

/// Player camera settings
pub mod camera {
    /// Camera height above the player's origin
    pub const EYE_HEIGHT: f32 = 1.6;

    /// Vertical field of view in degrees
    pub const FIELD_OF_VIEW: f32 = 60.0;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerSettings {
    /// Units per second
    pub move_per_second: f32,
    /// Degrees per canvas pixel
    pub angular_per_pixel: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            move_per_second: MOVE_PER_SECOND,
            angular_per_pixel: ANGULAR_PER_PIXEL,
        }
    }
}
