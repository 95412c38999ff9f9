use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CanvasRenderMode {
    /// Drawn over the screen in pixel space
    ScreenSpaceOverlay,
    /// Placed `plane_distance` in front of `camera`, filling its view
    ScreenSpaceCamera { camera: Entity, plane_distance: f32 },
    /// Placed at the canvas entity's own transform
    WorldSpace { camera: Option<Entity> },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CanvasScaler {
    ConstantPixelSize {
        scale_factor: f32,
    },
    /// Scale so a layout authored at `reference_resolution` fits the window.
    /// `match_width_or_height` blends between matching width (0) and height (1).
    ScaleWithScreenSize {
        reference_resolution: Vector2<f32>,
        match_width_or_height: f32,
    },
}

impl CanvasScaler {
    /// Screen pixels per canvas unit
    pub fn scale_factor(&self, window: &WindowSize) -> f32 {
        match *self {
            CanvasScaler::ConstantPixelSize { scale_factor } => scale_factor,
            CanvasScaler::ScaleWithScreenSize {
                reference_resolution,
                match_width_or_height,
            } => {
                if reference_resolution.x <= 0.0 || reference_resolution.y <= 0.0 {
                    return 1.0;
                }
                let log_width = (window.width as f32 / reference_resolution.x).log2();
                let log_height = (window.height as f32 / reference_resolution.y).log2();
                let blend = match_width_or_height.clamp(0.0, 1.0);
                (log_width + (log_height - log_width) * blend).exp2()
            }
        }
    }
}

impl Default for CanvasScaler {
    fn default() -> Self {
        CanvasScaler::ConstantPixelSize { scale_factor: 1.0 }
    }
}

/// Root of a UI layout. Canvas-local coordinates have their origin at the
/// centre of the canvas and are independent of the screen resolution.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    pub render_mode: CanvasRenderMode,
    pub scaler: CanvasScaler,
    /// Higher orders sit on top when hit testing
    pub sort_order: i32,
}

impl Canvas {
    pub fn overlay(scaler: CanvasScaler) -> Self {
        Self {
            render_mode: CanvasRenderMode::ScreenSpaceOverlay,
            scaler,
            sort_order: 0,
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::overlay(CanvasScaler::default())
    }
}

/// Axis aligned rectangle in canvas units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Point2<f32>,
    pub max: Point2<f32>,
}

impl Rect {
    pub fn from_center_size(center: Point2<f32>, size: Vector2<f32>) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn size(&self) -> Vector2<f32> {
        self.max - self.min
    }

    pub fn center(&self) -> Point2<f32> {
        nalgebra::center(&self.min, &self.max)
    }

    pub fn contains(&self, point: Point2<f32>) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

/// Layout of a UI element inside its parent rectangle.
///
/// Anchors are normalised positions in the parent rect; the element's rect is
/// the anchored area grown by `size` and shifted by `position`. The default
/// stretches over the whole parent.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct RectTransform {
    pub anchor_min: Vector2<f32>,
    pub anchor_max: Vector2<f32>,
    pub position: Vector2<f32>,
    pub size: Vector2<f32>,
}

impl RectTransform {
    /// Fixed-size element anchored at the parent's centre
    pub fn centered(size: Vector2<f32>) -> Self {
        Self {
            anchor_min: Vector2::new(0.5, 0.5),
            anchor_max: Vector2::new(0.5, 0.5),
            position: Vector2::zeros(),
            size,
        }
    }

    /// Stretch between two anchors with no extra offset
    pub fn anchored(anchor_min: Vector2<f32>, anchor_max: Vector2<f32>) -> Self {
        Self {
            anchor_min,
            anchor_max,
            ..Default::default()
        }
    }

    pub fn resolve(&self, parent: &Rect) -> Rect {
        let parent_size = parent.size();
        let anchor_min = parent.min + parent_size.component_mul(&self.anchor_min);
        let anchor_max = parent.min + parent_size.component_mul(&self.anchor_max);
        let center = nalgebra::center(&anchor_min, &anchor_max) + self.position;
        Rect::from_center_size(center, (anchor_max - anchor_min) + self.size)
    }
}

impl Default for RectTransform {
    fn default() -> Self {
        Self {
            anchor_min: Vector2::zeros(),
            anchor_max: Vector2::new(1.0, 1.0),
            position: Vector2::zeros(),
            size: Vector2::zeros(),
        }
    }
}
