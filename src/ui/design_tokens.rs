// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every view.
//!
//! - **Palette**: base and semantic colors
//! - **Opacity**: standard alpha levels
//! - **Spacing**: 4px-based scale
//! - **Sizing**: fixed component dimensions
//! - **Typography**: font size scale
//! - **Border** / **Radius** / **Shadow**
//!
//! ```
//! use column_wallet::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let tint = Color { a: opacity::TINT, ..palette::SUCCESS_500 };
//! let gap = spacing::MD;
//! # let _ = (tint, gap);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.05, 0.05, 0.06);
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.11);
    pub const GRAY_800: Color = Color::from_rgb(0.16, 0.16, 0.18);
    pub const GRAY_600: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_400: Color = Color::from_rgb(0.6, 0.6, 0.6);
    pub const GRAY_200: Color = Color::from_rgb(0.94, 0.94, 0.94);
    pub const GRAY_100: Color = Color::from_rgb(0.96, 0.96, 0.96);
    pub const GRAY_50: Color = Color::from_rgb(0.988, 0.988, 0.988);

    // Accent (indigo)
    pub const ACCENT_400: Color = Color::from_rgb(0.506, 0.549, 0.973);
    pub const ACCENT_500: Color = Color::from_rgb(0.388, 0.4, 0.945);

    // Semantic colors
    pub const SUCCESS_500: Color = Color::from_rgb(0.133, 0.773, 0.369);
    pub const SUCCESS_800: Color = Color::from_rgb(0.086, 0.396, 0.204);
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const ERROR_800: Color = Color::from_rgb(0.6, 0.106, 0.106);
    pub const INFO_500: Color = ACCENT_500;
    pub const DANGER_TEXT: Color = Color::from_rgb(1.0, 0.302, 0.302);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Light tint of a semantic color (toast borders, progress bars).
    pub const TINT: f32 = 0.2;
    pub const SHADOW: f32 = 0.12;
    pub const DISABLED: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    /// Maximum width of the main content column.
    pub const CONTENT_WIDTH: f32 = 480.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    /// Thin colored bar at the bottom of a toast.
    pub const TOAST_ACCENT_HEIGHT: f32 = 3.0;
    /// Brand mark in the header.
    pub const BRAND_MARK: f32 = 10.0;

    // Window
    pub const WINDOW_WIDTH: f32 = 520.0;
    pub const WINDOW_HEIGHT: f32 = 860.0;
    pub const WINDOW_MIN_WIDTH: f32 = 420.0;
    pub const WINDOW_MIN_HEIGHT: f32 = 640.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero heading.
    pub const DISPLAY: f32 = 40.0;
    pub const TITLE_MD: f32 = 20.0;
    /// Brand name and balance.
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    /// Section labels, field labels, footer.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette, Color};
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Floating toast.
    pub const TOAST: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 32.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TINT > 0.0 && opacity::TINT < 1.0);

    assert!(sizing::TOAST_WIDTH < sizing::CONTENT_WIDTH);
    assert!(sizing::WINDOW_MIN_WIDTH <= sizing::WINDOW_WIDTH);
    assert!(sizing::WINDOW_MIN_HEIGHT <= sizing::WINDOW_HEIGHT);

    assert!(typography::DISPLAY > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
