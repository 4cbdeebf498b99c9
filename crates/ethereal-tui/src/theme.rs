use ratatui::style::Color;

/// Site palette: deep night background with a violet accent
pub struct Palette;

impl Palette {
    pub const BG0: Color = Color::Rgb(0x0d, 0x0b, 0x14);
    pub const BG1: Color = Color::Rgb(0x17, 0x14, 0x22);
    pub const BG2: Color = Color::Rgb(0x24, 0x20, 0x33);

    pub const FG0: Color = Color::Rgb(0xee, 0xea, 0xf6);
    pub const FG1: Color = Color::Rgb(0xc4, 0xbe, 0xd6);
    pub const GREY: Color = Color::Rgb(0x6e, 0x68, 0x80);

    pub const ACCENT: Color = Color::Rgb(0xa7, 0x8b, 0xfa);
    pub const GLOW: Color = Color::Rgb(0x5e, 0xea, 0xd4);

    pub const ERROR: Color = Color::Rgb(0xf8, 0x71, 0x71);
    pub const SUCCESS: Color = Color::Rgb(0x86, 0xef, 0xac);
    pub const INFO: Color = Color::Rgb(0x93, 0xc5, 0xfd);
}

/// Blend `fg` toward `bg` by `1 - opacity`, for fades
pub fn fade(fg: Color, bg: Color, opacity: f64) -> Color {
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| -> u8 {
                let t = opacity.clamp(0.0, 1.0);
                (b as f64 + (f as f64 - b as f64) * t).round() as u8
            };
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ => {
            if opacity >= 0.5 {
                fg
            } else {
                bg
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        assert_eq!(fade(Palette::FG0, Palette::BG0, 1.0), Palette::FG0);
        assert_eq!(fade(Palette::FG0, Palette::BG0, 0.0), Palette::BG0);
        assert_eq!(fade(Color::White, Color::Black, 0.2), Color::Black);
    }
}
