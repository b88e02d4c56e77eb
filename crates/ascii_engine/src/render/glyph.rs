//! Glyph palette used to shade the character grid

/// Glyphs ordered from darkest to brightest
pub const PALETTE: [char; 12] = ['.', ',', '-', '~', ':', ';', '=', '!', '*', '#', '$', '@'];

/// Glyph of a cell nothing was drawn into
pub const BLANK: char = ' ';

/// Map an illumination level in `[0, 1]` onto `palette`
///
/// The level is scaled by the palette length and floored; out-of-range levels
/// clamp to the first or last glyph.
///
/// # Panics
/// Panics if `palette` is empty.
pub fn illumination_to_glyph(illumination: f64, palette: &[char]) -> char {
    assert!(!palette.is_empty(), "glyph palette must not be empty");

    let last = palette.len() - 1;
    let scaled = (illumination * palette.len() as f64).floor();

    // Negative and NaN levels saturate to 0 in the cast
    let index = (scaled as usize).min(last);
    palette[index]
}
