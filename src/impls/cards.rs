use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::engine::prelude::*;

/// A record from a Scryfall bulk file. Only the set fields needed to tell
/// playable cards apart are kept next to the card itself.
#[derive(Deserialize)]
struct ScryfallRecord {
    #[serde(default)]
    set_type: String,
    #[serde(default)]
    set_name: String,
    #[serde(flatten)]
    card: Card,
}

impl ScryfallRecord {
    /// Joke sets, memorabilia, art cards, tokens and the like can't be
    /// someone's card.
    fn is_playable(&self) -> bool {
        !(self.set_type == "funny"
            || self.set_type == "memorabilia"
            || self.set_name.contains("Art Series")
            || self.card.type_line.contains("Token")
            || self.card.type_line.contains("Card"))
    }
}

/// Loads the playable cards from a Scryfall "oracle cards" bulk file.
pub fn load_cards(path: &Path) -> Result<Vec<Card>> {
    info!("cards: reading {}", path.display());
    let file = File::open(path)?;
    parse_cards(BufReader::new(file))
}

/// Parses a JSON array of Scryfall records, keeping the playable cards in
/// their original order.
pub fn parse_cards(reader: impl Read) -> Result<Vec<Card>> {
    let records: Vec<ScryfallRecord> = serde_json::from_reader(reader)?;
    let total = records.len();

    let mut cards = Vec::with_capacity(total);
    for (index, record) in records.into_iter().enumerate() {
        if !record.is_playable() {
            continue;
        }
        if record.card.name.is_empty() {
            return Err(EngineError::EmptyName(index));
        }
        cards.push(record.card);
    }

    info!("cards: kept {} of {} records", cards.len(), total);
    Ok(cards)
}
