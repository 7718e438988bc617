pub mod cards;
pub mod vocabulary;
