// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the gallery, the detail form and the toasts.
//!
//! Spacing follows a 4px grid; sizes are in logical pixels.
//!
//! ```
//! use gallery_submit::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let scrim = Color { a: opacity::OVERLAY_MEDIUM, ..palette::BLACK };
//! assert_eq!(spacing::MD, spacing::XS * 2.0);
//! # let _ = scrim;
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Width of one gallery column; tile heights follow the image aspect.
    pub const TILE_WIDTH: f32 = 240.0;
    /// Clamp for tiles with extreme aspect ratios.
    pub const TILE_MIN_HEIGHT: f32 = 120.0;
    pub const TILE_MAX_HEIGHT: f32 = 480.0;

    pub const DETAIL_IMAGE_HEIGHT: f32 = 320.0;
    pub const FORM_WIDTH: f32 = 420.0;
}

pub mod typography {
    /// Screen titles.
    pub const TITLE_MD: f32 = 20.0;
    /// Form inputs.
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// Field errors, counters.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 8.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_is_monotonic() {
        let scale = [
            spacing::XXS,
            spacing::XS,
            spacing::SM,
            spacing::MD,
            spacing::LG,
        ];
        assert!(scale.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn tile_height_bounds_are_ordered() {
        assert!(sizing::TILE_MIN_HEIGHT < sizing::TILE_WIDTH);
        assert!(sizing::TILE_WIDTH < sizing::TILE_MAX_HEIGHT);
    }
}
