use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::engine::prelude::*;

/// A power or toughness as printed. Most are numbers, some are symbols
/// like `*` or `1+*`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Stat {
    Number(i64),
    Symbol(String),
}

impl From<i64> for Stat {
    fn from(value: i64) -> Self {
        Stat::Number(value)
    }
}

impl From<&str> for Stat {
    fn from(value: &str) -> Self {
        Stat::Symbol(value.into())
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stat::Number(n) => write!(f, "{n}"),
            Stat::Symbol(s) => f.write_str(s),
        }
    }
}

/// One face of a multi-faced card.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CardFace {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub type_line: String,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
}

/// A card record as the guessing engine sees it. Only the attributes the
/// questions look at are kept, anything else in the source data is ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Card {
    pub name: String,
    #[serde(default)]
    pub type_line: String,
    /// Absent on most multi-faced cards, whose faces carry the colors.
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub legalities: BTreeMap<String, String>,
    #[serde(default)]
    pub cmc: f64,
    #[serde(default)]
    pub power: Option<Stat>,
    #[serde(default)]
    pub toughness: Option<Stat>,
    #[serde(default)]
    pub reserved: bool,
    #[serde(default)]
    pub game_changer: bool,
    #[serde(default)]
    pub card_faces: Option<Vec<CardFace>>,
}

impl Card {
    pub fn new(name: impl Into<String>, type_line: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_line: type_line.into(),
            colors: Some(vec![]),
            keywords: vec![],
            legalities: BTreeMap::new(),
            cmc: 0.0,
            power: None,
            toughness: None,
            reserved: false,
            game_changer: false,
            card_faces: None,
        }
    }

    pub fn with_colors(mut self, colors: &[Color]) -> Self {
        self.colors = Some(colors.iter().map(|color| color.code().to_string()).collect());
        self
    }

    pub fn with_cmc(mut self, cmc: f64) -> Self {
        self.cmc = cmc;
        self
    }

    pub fn with_power_toughness(
        mut self,
        power: impl Into<Stat>,
        toughness: impl Into<Stat>,
    ) -> Self {
        self.power = Some(power.into());
        self.toughness = Some(toughness.into());
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    pub fn with_legality(mut self, format: impl Into<String>, status: impl Into<String>) -> Self {
        self.legalities.insert(format.into(), status.into());
        self
    }

    pub fn reserved(mut self) -> Self {
        self.reserved = true;
        self
    }

    pub fn game_changer(mut self) -> Self {
        self.game_changer = true;
        self
    }

    /// Replaces the card level colors with faces, the way Scryfall lays
    /// out transforming and modal double-faced cards.
    pub fn with_faces(mut self, faces: Vec<CardFace>) -> Self {
        self.colors = None;
        self.card_faces = Some(faces);
        self
    }

    pub fn type_line(&self) -> TypeLine {
        TypeLine::parse(&self.type_line)
    }

    /// The card's category tags: every type, supertype and subtype it or
    /// one of its faces has. Reversible cards only carry type lines on
    /// their faces.
    pub fn categories(&self) -> Vec<String> {
        let faces = self.card_faces.iter().flatten();
        let mut tags: Vec<String> = self.type_line().tags().collect();
        for face in faces {
            for tag in TypeLine::parse(&face.type_line).tags() {
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
        }
        tags
    }
}

impl CardFace {
    pub fn new(name: impl Into<String>, type_line: impl Into<String>, colors: &[Color]) -> Self {
        Self {
            name: name.into(),
            type_line: type_line.into(),
            colors: Some(colors.iter().map(|color| color.code().to_string()).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_scryfall_record() {
        let json = r#"{
            "name": "Llanowar Elves",
            "type_line": "Creature — Elf Druid",
            "colors": ["G"],
            "keywords": [],
            "legalities": {"standard": "not_legal", "vintage": "legal"},
            "cmc": 1.0,
            "power": "1",
            "toughness": "1",
            "reserved": false,
            "oracle_text": "{T}: Add {G}."
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.name, "Llanowar Elves");
        assert_eq!(card.power, Some(Stat::Symbol("1".into())));
        assert_eq!(card.legalities["vintage"], "legal");
        assert!(!card.game_changer);
        assert!(card.card_faces.is_none());
    }

    #[test]
    fn numeric_stats_stay_numbers() {
        let card: Card = serde_json::from_str(r#"{"name": "Test", "power": 3}"#).unwrap();
        assert_eq!(card.power, Some(Stat::Number(3)));
        assert_eq!(card.toughness, None);
        assert_eq!(card.colors, None);
    }

    #[test]
    fn categories_come_from_type_line() {
        let card = Card::new("Goblin Assailant", "Creature — Goblin Warrior");
        assert_eq!(card.categories(), vec!["Creature", "Goblin", "Warrior"]);
    }

    #[test]
    fn categories_include_face_tags_once() {
        let card = Card::new("Brazen Borrower // Petty Theft", "").with_faces(vec![
            CardFace::new("Brazen Borrower", "Creature — Faerie Rogue", &[Color::Blue]),
            CardFace::new("Petty Theft", "Instant — Adventure", &[Color::Blue]),
        ]);
        assert_eq!(
            card.categories(),
            vec!["Creature", "Faerie", "Rogue", "Instant", "Adventure"]
        );
    }
}
