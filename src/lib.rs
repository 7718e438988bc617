//! Twenty questions over the whole Magic: The Gathering card pool.
//!
//! The [`engine`] narrows a set of candidate cards down by picking, every
//! round, the question that splits the remaining cards closest to half.
//! [`impls`] loads cards and question vocabulary from Scryfall data and
//! [`client`] plays the player's side over a terminal.

pub mod client;
pub mod engine;
pub mod impls;
