use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Point;
use crate::stone::Stone;

/// A single stone placement: who played and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    pub stone: Stone,
    pub point: Point,
}

impl Turn {
    pub fn play(stone: Stone, point: Point) -> Self {
        Turn { stone, point }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.point;
        write!(f, "{} ({x}, {y})", self.stone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality() {
        let t1 = Turn::play(Stone::Black, (1, 1));
        let t2 = Turn::play(Stone::Black, (1, 1));
        let t3 = Turn::play(Stone::White, (1, 1));
        assert_eq!(t1, t2);
        assert_ne!(t1, t3);
    }

    #[test]
    fn display() {
        assert_eq!(Turn::play(Stone::White, (3, 4)).to_string(), "White (3, 4)");
    }

    #[test]
    fn json_shape() {
        let json = serde_json::to_string(&Turn::play(Stone::Black, (2, 5))).unwrap();
        assert_eq!(json, r#"{"stone":1,"point":[2,5]}"#);
    }
}
