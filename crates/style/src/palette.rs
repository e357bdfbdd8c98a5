//! The KairoLogic brand palette shared by every document and the ledger.
use harbor_types::Color;

pub const NAVY: Color = Color::rgb(0x0B, 0x1E, 0x3D);
pub const NAVY_LIGHT: Color = Color::rgb(0x1A, 0x3A, 0x5F);
pub const GOLD: Color = Color::rgb(0xD4, 0xA5, 0x74);
pub const GOLD_DARK: Color = Color::rgb(0xB8, 0x8F, 0x5F);
pub const ORANGE: Color = Color::rgb(0xFF, 0x6B, 0x35);
pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
pub const CREAM: Color = Color::rgb(0xFF, 0xF8, 0xF0);
pub const SLATE: Color = Color::rgb(0x88, 0x99, 0xAA);

pub const GRAY_50: Color = Color::rgb(0xF9, 0xFA, 0xFB);
pub const GRAY_100: Color = Color::rgb(0xF3, 0xF4, 0xF6);
pub const GRAY_200: Color = Color::rgb(0xE5, 0xE7, 0xEB);
pub const GRAY_400: Color = Color::rgb(0x9C, 0xA3, 0xAF);
pub const GRAY_500: Color = Color::rgb(0x6B, 0x72, 0x80);
pub const GRAY_700: Color = Color::rgb(0x37, 0x41, 0x51);
pub const GRAY_900: Color = Color::rgb(0x11, 0x18, 0x27);

pub const RED_50: Color = Color::rgb(0xFE, 0xF2, 0xF2);
pub const RED_600: Color = Color::rgb(0xDC, 0x26, 0x26);
pub const RED_700: Color = Color::rgb(0xB9, 0x1C, 0x1C);

pub const GREEN_50: Color = Color::rgb(0xF0, 0xFD, 0xF4);
pub const GREEN_600: Color = Color::rgb(0x05, 0x96, 0x69);
pub const GREEN_700: Color = Color::rgb(0x04, 0x78, 0x57);

pub const BLUE_50: Color = Color::rgb(0xEF, 0xF6, 0xFF);
pub const BLUE_600: Color = Color::rgb(0x25, 0x63, 0xEB);
pub const BLUE_700: Color = Color::rgb(0x1D, 0x4E, 0xD8);

pub const AMBER_50: Color = Color::rgb(0xFF, 0xFB, 0xEB);
pub const AMBER_600: Color = Color::rgb(0xD9, 0x77, 0x06);
pub const AMBER_700: Color = Color::rgb(0xB4, 0x53, 0x09);

pub const PURPLE_50: Color = Color::rgb(0xFA, 0xF5, 0xFF);
pub const PURPLE_600: Color = Color::rgb(0x93, 0x33, 0xEA);
