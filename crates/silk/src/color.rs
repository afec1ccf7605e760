use palette::Srgb;

pub type Rgb = Srgb<u8>;

pub const fn hex(value: u32) -> Rgb {
    Srgb::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

pub const PINK_ACCENT: Rgb = hex(0xFF4081);

/// Fallback colours of the empty slots, indexed by slot.
pub const LEG_COLORS: [Rgb; 8] = [
    hex(0x2196F3), // blue
    hex(0xF44336), // red
    hex(0xFFEB3B), // yellow
    hex(0x40C4FF), // light blue accent
    hex(0xE91E63), // pink
    hex(0xFF9800), // orange
    hex(0x9C27B0), // purple
    hex(0x4CAF50), // green
];

/// Material accent swatches the particles draw their colours from.
pub const ACCENTS: [Rgb; 16] = [
    hex(0xFF5252),
    hex(0xFF4081),
    hex(0xE040FB),
    hex(0x7C4DFF),
    hex(0x536DFE),
    hex(0x448AFF),
    hex(0x40C4FF),
    hex(0x18FFFF),
    hex(0x64FFDA),
    hex(0x69F0AE),
    hex(0xB2FF59),
    hex(0xEEFF41),
    hex(0xFFFF00),
    hex(0xFFD740),
    hex(0xFFAB40),
    hex(0xFF6E40),
];

/// Converts to the normalized `f64` components cairo expects.
pub fn to_rgb_f64(color: Rgb) -> (f64, f64, f64) {
    color.into_format::<f64>().into_components()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_unpacks_channels() {
        let c = hex(0x1A237E);
        assert_eq!((c.red, c.green, c.blue), (0x1A, 0x23, 0x7E));
    }

    #[test]
    fn test_to_rgb_f64_normalizes() {
        let (r, g, b) = to_rgb_f64(hex(0xFF0000));
        assert_eq!((r, g, b), (1.0, 0.0, 0.0));
    }
}
