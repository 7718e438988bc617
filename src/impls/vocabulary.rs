use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::engine::prelude::*;

/// The words the open ended questions are asked with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    pub card_types: Vec<String>,
    pub creature_types: Vec<String>,
    pub keywords: Vec<String>,
}

/// Scryfall serves its catalogs wrapped in an object, hand written lists
/// are usually bare arrays. Both are accepted.
#[derive(Deserialize)]
#[serde(untagged)]
enum WordList {
    Plain(Vec<String>),
    Catalog { data: Vec<String> },
}

impl From<WordList> for Vec<String> {
    fn from(list: WordList) -> Self {
        match list {
            WordList::Plain(words) | WordList::Catalog { data: words } => words,
        }
    }
}

impl Vocabulary {
    /// Collects the vocabulary from the cards themselves: every printed card
    /// type, the subtypes found on creatures and every keyword in use.
    pub fn derive(cards: &[Card]) -> Self {
        let mut creature_types = BTreeSet::new();
        let mut keywords = BTreeSet::new();

        for card in cards {
            let type_line = card.type_line();
            if type_line.is(CardType::Creature) {
                creature_types.extend(type_line.card_sub_types);
            }
            keywords.extend(card.keywords.iter().cloned());
        }

        Self {
            card_types: CardType::ALL.iter().map(ToString::to_string).collect(),
            creature_types: creature_types.into_iter().collect(),
            keywords: keywords.into_iter().collect(),
        }
    }

    /// Domain of the "is your card a" question: card types first.
    pub fn classifications(&self) -> Vec<String> {
        self.card_types
            .iter()
            .chain(self.creature_types.iter())
            .cloned()
            .collect()
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.classifications(), self.keywords.clone())
    }
}

/// Reads a word list to replace one part of a derived vocabulary.
pub fn read_list(path: &Path) -> Result<Vec<String>> {
    log::info!("vocabulary: reading {}", path.display());
    parse_list(BufReader::new(File::open(path)?))
}

pub fn parse_list(reader: impl Read) -> Result<Vec<String>> {
    let list: WordList = serde_json::from_reader(reader)?;
    Ok(list.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_sorted_words_from_cards() {
        let cards = vec![
            Card::new("Llanowar Elves", "Creature — Elf Druid"),
            Card::new("Forest", "Basic Land — Forest"),
            Card::new("Serra Angel", "Creature — Angel")
                .with_keyword("Flying")
                .with_keyword("Vigilance"),
            Card::new("Birds of Paradise", "Creature — Bird").with_keyword("Flying"),
        ];
        let vocabulary = Vocabulary::derive(&cards);
        assert_eq!(vocabulary.creature_types, vec!["Angel", "Bird", "Druid", "Elf"]);
        assert_eq!(vocabulary.keywords, vec!["Flying", "Vigilance"]);
        assert_eq!(vocabulary.card_types[0], "Artifact");

        let classifications = vocabulary.classifications();
        assert_eq!(classifications.len(), CardType::ALL.len() + 4);
        assert_eq!(classifications.last().map(String::as_str), Some("Elf"));
    }

    #[test]
    fn reads_plain_and_catalog_lists() {
        let plain = parse_list(r#"["Flying", "Trample"]"#.as_bytes()).unwrap();
        assert_eq!(plain, vec!["Flying", "Trample"]);

        let catalog = parse_list(
            r#"{"object": "catalog", "total_values": 2, "data": ["Elf", "Goblin"]}"#.as_bytes(),
        )
        .unwrap();
        assert_eq!(catalog, vec!["Elf", "Goblin"]);
    }

    #[test]
    fn catalog_uses_the_vocabulary() {
        let vocabulary = Vocabulary {
            card_types: vec!["Creature".into()],
            creature_types: vec!["Elf".into()],
            keywords: vec!["Flying".into()],
        };
        let catalog = vocabulary.catalog();
        assert_eq!(catalog.domain(Template::IsA).map(<[Param]>::len), Some(2));
        assert_eq!(
            catalog.domain(Template::Keyword),
            Some(&[Param::Text("Flying".into())][..])
        );
    }
}
