//! The fixed nine-value ANSI palette and its SGR encoding.

use std::fmt;

/// One of the eight basic ANSI foreground colors, plus "default".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// The `k` in `CSI 3 k m`: `{0..7, 9}`.
    #[inline]
    #[must_use]
    pub const fn sgr_index(self) -> u8 {
        match self {
            Self::Black => 0,
            Self::Red => 1,
            Self::Green => 2,
            Self::Yellow => 3,
            Self::Blue => 4,
            Self::Magenta => 5,
            Self::Cyan => 6,
            Self::White => 7,
            Self::Default => 9,
        }
    }

    /// The full `CSI 3 k m` escape sequence as bytes.
    #[inline]
    #[must_use]
    pub const fn escape(self) -> &'static [u8] {
        match self {
            Self::Default => b"\x1b[39m",
            Self::Black => b"\x1b[30m",
            Self::Red => b"\x1b[31m",
            Self::Green => b"\x1b[32m",
            Self::Yellow => b"\x1b[33m",
            Self::Blue => b"\x1b[34m",
            Self::Magenta => b"\x1b[35m",
            Self::Cyan => b"\x1b[36m",
            Self::White => b"\x1b[37m",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Default => "default",
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sgr_index_matches_spec_table() {
        assert_eq!(Color::Black.sgr_index(), 0);
        assert_eq!(Color::Red.sgr_index(), 1);
        assert_eq!(Color::Green.sgr_index(), 2);
        assert_eq!(Color::Yellow.sgr_index(), 3);
        assert_eq!(Color::Blue.sgr_index(), 4);
        assert_eq!(Color::Magenta.sgr_index(), 5);
        assert_eq!(Color::Cyan.sgr_index(), 6);
        assert_eq!(Color::White.sgr_index(), 7);
        assert_eq!(Color::Default.sgr_index(), 9);
    }

    #[test]
    fn escape_bytes_embed_sgr_index() {
        for c in [
            Color::Default,
            Color::Black,
            Color::Red,
            Color::Green,
            Color::Yellow,
            Color::Blue,
            Color::Magenta,
            Color::Cyan,
            Color::White,
        ] {
            let want = format!("\x1b[3{}m", c.sgr_index());
            assert_eq!(c.escape(), want.as_bytes());
        }
    }
}
