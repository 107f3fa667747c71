use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::ops::Neg;

/// Stone color. Serialized as `1` (black) / `-1` (white).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Stone {
    Black = 1,
    White = -1,
}

impl Stone {
    pub fn opp(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    /// Single-character board glyph.
    pub fn glyph(self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
        }
    }
}

impl Neg for Stone {
    type Output = Self;

    fn neg(self) -> Self {
        self.opp()
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "Black"),
            Stone::White => write!(f, "White"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent() {
        assert_eq!(Stone::Black.opp(), Stone::White);
        assert_eq!(Stone::White.opp(), Stone::Black);
        assert_eq!(-Stone::Black, Stone::White);
    }

    #[test]
    fn glyphs() {
        assert_eq!(Stone::Black.glyph(), 'X');
        assert_eq!(Stone::White.glyph(), 'O');
    }

    #[test]
    fn serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Stone::Black).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Stone::White).unwrap(), "-1");
        let s: Stone = serde_json::from_str("-1").unwrap();
        assert_eq!(s, Stone::White);
    }
}
