use std::fmt;

/// The five colors of mana a card can be. Colorless is the absence of
/// all of them, so it is not a variant here.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    /// The one letter code Scryfall uses in a card's `colors` list.
    pub const fn code(self) -> &'static str {
        match self {
            Color::White => "W",
            Color::Blue => "U",
            Color::Black => "B",
            Color::Red => "R",
            Color::Green => "G",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.code() == code)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::White => "White",
            Color::Blue => "Blue",
            Color::Black => "Black",
            Color::Red => "Red",
            Color::Green => "Green",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn blue_uses_u_code() {
        assert_eq!(Color::Blue.code(), "U");
        assert_eq!(Color::from_code("U"), Some(Color::Blue));
        assert_eq!(Color::from_code("C"), None);
    }

    #[test]
    fn display_uses_full_name() {
        assert_eq!(Color::Green.to_string(), "Green");
    }
}
