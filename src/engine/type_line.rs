use std::fmt;

/// A type line broken into its parts. Multi-face type lines
/// (`"Instant // Sorcery"`) are merged into one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeLine {
    pub card_super_types: Vec<CardSuperType>,
    pub card_types: Vec<CardType>,
    pub card_sub_types: Vec<String>,
}

impl TypeLine {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn parse(line: &str) -> Self {
        let mut ret = Self::empty();
        for face in line.split("//") {
            let (main, subs) = match face.split_once('—') {
                Some((main, subs)) => (main, subs),
                None => (face, ""),
            };
            for word in main.split_whitespace() {
                if let Some(super_type) = CardSuperType::from_name(word) {
                    ret.card_super_types.push(super_type);
                } else if let Some(card_type) = CardType::from_name(word) {
                    ret.card_types.push(card_type);
                }
            }
            ret.card_sub_types
                .extend(subs.split_whitespace().map(String::from));
        }
        ret
    }

    /// Every word of the type line that names a type, supertype or subtype.
    pub fn tags(&self) -> impl Iterator<Item = String> + '_ {
        self.card_super_types
            .iter()
            .map(ToString::to_string)
            .chain(self.card_types.iter().map(ToString::to_string))
            .chain(self.card_sub_types.iter().cloned())
    }
}

#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum CardType {
    Artifact,
    Battle,
    Creature,
    Enchantment,
    Instant,
    Kindred,
    Land,
    Planeswalker,
    Sorcery,
}

impl CardType {
    pub const ALL: [CardType; 9] = [
        CardType::Artifact,
        CardType::Battle,
        CardType::Creature,
        CardType::Enchantment,
        CardType::Instant,
        CardType::Kindred,
        CardType::Land,
        CardType::Planeswalker,
        CardType::Sorcery,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|card_type| card_type.to_string() == name)
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum CardSuperType {
    Basic,
    Legendary,
    Ongoing,
    Snow,
    World,
}

impl CardSuperType {
    pub const ALL: [CardSuperType; 5] = [
        CardSuperType::Basic,
        CardSuperType::Legendary,
        CardSuperType::Ongoing,
        CardSuperType::Snow,
        CardSuperType::World,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|super_type| super_type.to_string() == name)
    }
}

impl fmt::Display for CardSuperType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

pub trait TypeClassQuery<T> {
    fn is(&self, a_type: T) -> bool;
}

impl TypeClassQuery<CardType> for TypeLine {
    fn is(&self, a_type: CardType) -> bool {
        self.card_types.contains(&a_type)
    }
}
