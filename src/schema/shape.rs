use serde::{Deserialize, Serialize};

/// One circle in a procedural pattern: canvas position, size, and color.
/// Shapes are listed in draw order, so later shapes overlay earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Color angle in degrees, always below 360.
    pub hue: u16,
    /// Fill opacity in the 0.0 to 1.0 range.
    pub alpha: f64,
}

impl Shape {
    /// The shape's fill as a CSS color string. Saturation and lightness
    /// are fixed; only the hue varies between shapes.
    pub fn css_color(&self) -> String {
        format!("hsl({}, 70%, 50%)", self.hue)
    }
}
