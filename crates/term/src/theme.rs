//! Color themes.
//!
//! Six fixed palettes cycled at runtime. Each theme carries the playfield
//! colors plus one color per piece kind, indexed by [`PieceKind::id`].

use crate::types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    /// Playfield background.
    pub bg: Rgb,
    /// Grid lines and panel text.
    pub grid: Rgb,
    /// Neutral block color (borders, previews without a kind).
    pub block: Rgb,
    /// Emphasis color for labels and overlays.
    pub accent: Rgb,
    /// One color per piece kind, in catalog order I O T L J S Z.
    pub piece_colors: [Rgb; 7],
}

impl Theme {
    pub fn piece_color(&self, kind: PieceKind) -> Rgb {
        self.piece_colors[kind.id() as usize]
    }
}

pub const THEMES: [Theme; 6] = [
    Theme {
        name: "Green",
        bg: Rgb::new(200, 255, 200),
        grid: Rgb::new(80, 180, 80),
        block: Rgb::new(120, 220, 120),
        accent: Rgb::new(30, 100, 30),
        piece_colors: [
            Rgb::new(120, 220, 120),
            Rgb::new(100, 200, 100),
            Rgb::new(80, 180, 80),
            Rgb::new(140, 240, 140),
            Rgb::new(60, 160, 60),
            Rgb::new(110, 210, 110),
            Rgb::new(90, 190, 90),
        ],
    },
    Theme {
        name: "Purple",
        bg: Rgb::new(220, 200, 255),
        grid: Rgb::new(120, 80, 180),
        block: Rgb::new(180, 120, 220),
        accent: Rgb::new(70, 30, 100),
        piece_colors: [
            Rgb::new(180, 120, 220),
            Rgb::new(160, 100, 200),
            Rgb::new(140, 80, 180),
            Rgb::new(200, 140, 240),
            Rgb::new(120, 60, 160),
            Rgb::new(170, 110, 210),
            Rgb::new(150, 90, 190),
        ],
    },
    Theme {
        name: "Classic",
        bg: Rgb::new(30, 30, 30),
        grid: Rgb::new(60, 60, 60),
        block: Rgb::new(255, 255, 255),
        accent: Rgb::new(0, 0, 0),
        piece_colors: [
            Rgb::new(0, 255, 255),
            Rgb::new(255, 255, 0),
            Rgb::new(128, 0, 128),
            Rgb::new(255, 165, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(0, 255, 0),
            Rgb::new(255, 0, 0),
        ],
    },
    Theme {
        name: "Neon",
        bg: Rgb::new(10, 10, 30),
        grid: Rgb::new(40, 0, 60),
        block: Rgb::new(255, 20, 147),
        accent: Rgb::new(0, 255, 255),
        piece_colors: [
            Rgb::new(0, 255, 255),
            Rgb::new(255, 255, 0),
            Rgb::new(255, 20, 147),
            Rgb::new(255, 140, 0),
            Rgb::new(0, 191, 255),
            Rgb::new(57, 255, 20),
            Rgb::new(255, 0, 70),
        ],
    },
    Theme {
        name: "Pastel",
        bg: Rgb::new(245, 239, 255),
        grid: Rgb::new(200, 180, 220),
        block: Rgb::new(255, 220, 240),
        accent: Rgb::new(120, 160, 200),
        piece_colors: [
            Rgb::new(255, 182, 193),
            Rgb::new(255, 255, 153),
            Rgb::new(186, 225, 255),
            Rgb::new(255, 204, 153),
            Rgb::new(204, 255, 204),
            Rgb::new(204, 204, 255),
            Rgb::new(255, 204, 229),
        ],
    },
    Theme {
        name: "Candy",
        bg: Rgb::new(255, 248, 220),
        grid: Rgb::new(255, 182, 193),
        block: Rgb::new(255, 240, 245),
        accent: Rgb::new(255, 105, 180),
        piece_colors: [
            Rgb::new(255, 105, 180),
            Rgb::new(255, 255, 102),
            Rgb::new(102, 204, 255),
            Rgb::new(255, 153, 102),
            Rgb::new(186, 255, 201),
            Rgb::new(204, 153, 255),
            Rgb::new(255, 153, 204),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_has_a_distinct_name() {
        for (i, a) in THEMES.iter().enumerate() {
            for b in THEMES.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn piece_colors_follow_catalog_order() {
        let classic = THEMES[2];
        assert_eq!(classic.name, "Classic");
        assert_eq!(classic.piece_color(PieceKind::I), Rgb::new(0, 255, 255));
        assert_eq!(classic.piece_color(PieceKind::Z), Rgb::new(255, 0, 0));
    }
}
