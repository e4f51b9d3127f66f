// File: crates/gridder-core/src/theme.rs
// Summary: Named color palettes for grid background, lines and border.

use crate::types::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridTheme {
    pub name: &'static str,
    pub background: Rgba,
    pub line: Rgba,
    pub border: Rgba,
}

impl GridTheme {
    /// White paper, black ink. Matches `GridSpec::default()`.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::WHITE,
            line: Rgba::BLACK,
            border: Rgba::BLACK,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            line: Rgba::rgb(40, 40, 45),
            border: Rgba::rgb(180, 180, 190),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: Rgba::rgb(0x00, 0x2b, 0x36), // base03
            line: Rgba::rgb(0x07, 0x36, 0x42),       // base02
            border: Rgba::rgb(0x93, 0xa1, 0xa1),     // base1
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Rgba::rgb(0xfd, 0xf6, 0xe3), // base3
            line: Rgba::rgb(0xee, 0xe8, 0xd5),       // base2
            border: Rgba::rgb(0x65, 0x7b, 0x83),     // base00
        }
    }

    pub fn blueprint() -> Self {
        Self {
            name: "blueprint",
            background: Rgba::rgb(0x1f, 0x4e, 0x8c),
            line: Rgba::rgb(0x9c, 0xc3, 0xf0),
            border: Rgba::WHITE,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Rgba::BLACK,
            line: Rgba::rgb(0x22, 0x22, 0x22),
            border: Rgba::WHITE,
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<GridTheme> {
    vec![
        GridTheme::light(),
        GridTheme::dark(),
        GridTheme::solarized_dark(),
        GridTheme::solarized_light(),
        GridTheme::blueprint(),
        GridTheme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> GridTheme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(GridTheme::light)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive_and_falls_back() {
        assert_eq!(find("Solarized-Dark"), GridTheme::solarized_dark());
        assert_eq!(find("no-such-theme"), GridTheme::light());
    }
}
