pub mod card;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod mana;
pub mod normalize;
pub mod question;
pub mod selector;
pub mod session;
pub mod type_line;

pub mod prelude;
