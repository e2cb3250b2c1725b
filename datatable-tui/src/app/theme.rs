//! Color palette.

use crate::term::Rgb;

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Rgb,
    pub surface: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub accent: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    pub error: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgb::new(26, 26, 46),  // Dark blue
            surface: Rgb::new(40, 40, 70),     // Lighter blue
            text: Rgb::new(232, 232, 232),     // Off-white
            muted: Rgb::new(127, 140, 141),    // Gray
            accent: Rgb::new(78, 204, 163),    // Teal
            success: Rgb::new(46, 204, 113),   // Green
            warning: Rgb::new(241, 196, 15),   // Yellow
            error: Rgb::new(231, 76, 60),      // Red
        }
    }
}
