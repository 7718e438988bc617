use std::fmt;

use crate::engine::prelude::*;

/// Every kind of question the game knows how to ask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Template {
    IsA,
    Color,
    Keyword,
    LegalIn,
    CmcLessThan,
    PowerLessThan,
    ToughnessLessThan,
    CmcEquals,
    PowerEquals,
    ToughnessEquals,
    FirstLetter,
    Multicolored,
    Monocolored,
    Colorless,
    ReserveList,
    GameChanger,
    /// Only asked when guessing a card directly.
    Named,
}

/// Which printed stat a template reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatKind {
    Power,
    Toughness,
}

impl Template {
    /// Templates the selector may pick from, in the order they are tried.
    pub const ASKABLE: [Template; 16] = [
        Template::IsA,
        Template::Color,
        Template::Keyword,
        Template::LegalIn,
        Template::CmcLessThan,
        Template::PowerLessThan,
        Template::ToughnessLessThan,
        Template::CmcEquals,
        Template::PowerEquals,
        Template::ToughnessEquals,
        Template::FirstLetter,
        Template::Multicolored,
        Template::Monocolored,
        Template::Colorless,
        Template::ReserveList,
        Template::GameChanger,
    ];

    pub const fn text(self) -> &'static str {
        match self {
            Template::IsA => "Is your card a {insert}?",
            Template::Color => "Is your card {insert}?",
            Template::Keyword => "Does your card have {insert}?",
            Template::LegalIn => "Is your card legal in {insert}?",
            Template::CmcLessThan => "Is your card's CMC less than {insert}?",
            Template::PowerLessThan => "Is your card's power less than {insert}?",
            Template::ToughnessLessThan => "Is your card's toughness less than {insert}?",
            Template::CmcEquals => "Is your card's CMC {insert}?",
            Template::PowerEquals => "Is your card's power {insert}?",
            Template::ToughnessEquals => "Is your card's toughness {insert}?",
            Template::FirstLetter => "Is the first letter of your card's name {insert}?",
            Template::Multicolored => "Is your card multicolored?",
            Template::Monocolored => "Is your card monocolored?",
            Template::Colorless => "Is your card colorless?",
            Template::ReserveList => "Is your card on the reserve list?",
            Template::GameChanger => "Is your card a game changer in EDH?",
            Template::Named => "Is your card {insert}?",
        }
    }

    /// The stat every candidate must have for this template to make sense.
    pub const fn required_stat(self) -> Option<StatKind> {
        match self {
            Template::PowerLessThan | Template::PowerEquals => Some(StatKind::Power),
            Template::ToughnessLessThan | Template::ToughnessEquals => Some(StatKind::Toughness),
            _ => None,
        }
    }
}

/// The value substituted into a template.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Param {
    Text(String),
    Color(Color),
    Number(u32),
    Letter(char),
    /// For templates that take no parameter.
    Unit,
}

impl Param {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Param::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Text(text) => f.write_str(text),
            Param::Color(color) => write!(f, "{color}"),
            Param::Number(n) => write!(f, "{n}"),
            Param::Letter(c) => write!(f, "{c}"),
            Param::Unit => Ok(()),
        }
    }
}

/// A template paired with the parameter it is asked with.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Question {
    pub template: Template,
    pub param: Param,
}

impl Question {
    pub fn new(template: Template, param: Param) -> Self {
        Self { template, param }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new(Template::Named, Param::Text(name.into()))
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template.text().replace("{insert}", &self.param.to_string()))
    }
}

/// One question asked during a session together with the answer given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundRecord {
    pub question: Question,
    pub answer: bool,
}
