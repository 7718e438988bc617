use crate::engine::prelude::*;

/// Characters a card name can start with, in the order they are asked.
pub const ALPHABET: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~1234567890ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Formats the legality question asks about.
pub const FORMATS: [&str; 5] = ["Standard", "Pioneer", "Modern", "Vintage", "Commander"];

/// Stat values that stand in for "depends on the game", counted as zero.
const PLACEHOLDERS: [char; 3] = ['X', '*', '?'];

/// Every askable template with the parameters it is tried with.
///
/// Both the templates and their parameters keep their declaration order,
/// which is what the selector breaks ties with.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<(Template, Vec<Param>)>,
}

impl Catalog {
    /// Builds the catalog. `classifications` feeds the "is your card a"
    /// question (card types then creature types), `keywords` the keyword one.
    pub fn new(classifications: Vec<String>, keywords: Vec<String>) -> Self {
        let mut classifications = Some(classifications);
        let mut keywords = Some(keywords);

        let entries = Template::ASKABLE
            .into_iter()
            .map(|template| {
                let domain = match template {
                    Template::IsA => text_params(classifications.take()),
                    Template::Keyword => text_params(keywords.take()),
                    Template::Color => Color::ALL.into_iter().map(Param::Color).collect(),
                    Template::LegalIn => {
                        FORMATS.iter().map(|f| Param::Text(f.to_string())).collect()
                    }
                    Template::CmcLessThan => number_params(1..5),
                    Template::PowerLessThan | Template::ToughnessLessThan => number_params(1..13),
                    Template::CmcEquals | Template::PowerEquals | Template::ToughnessEquals => {
                        number_params(1..20)
                    }
                    Template::FirstLetter => ALPHABET.chars().map(Param::Letter).collect(),
                    Template::Multicolored
                    | Template::Monocolored
                    | Template::Colorless
                    | Template::ReserveList
                    | Template::GameChanger
                    | Template::Named => vec![Param::Unit],
                };
                (template, domain)
            })
            .filter(|(template, domain)| {
                if domain.is_empty() {
                    log::warn!("catalog: no parameters for {template:?}, leaving it out");
                }
                !domain.is_empty()
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> impl Iterator<Item = (Template, &[Param])> {
        self.entries
            .iter()
            .map(|(template, domain)| (*template, domain.as_slice()))
    }

    pub fn domain(&self, template: Template) -> Option<&[Param]> {
        self.entries()
            .find(|(t, _)| *t == template)
            .map(|(_, domain)| domain)
    }
}

fn text_params(values: Option<Vec<String>>) -> Vec<Param> {
    values.into_iter().flatten().map(Param::Text).collect()
}

fn number_params(range: std::ops::Range<u32>) -> Vec<Param> {
    range.map(Param::Number).collect()
}

/// Whether a template can be asked about every one of `candidates`.
/// Stat questions make no sense once any candidate lacks the stat.
pub fn is_applicable(template: Template, candidates: &[Card]) -> bool {
    match template.required_stat() {
        Some(kind) => candidates.iter().all(|card| stat(card, kind).is_some()),
        None => true,
    }
}

/// Answers `question` for `card`.
///
/// Fails only when a stat the question compares is malformed.
pub fn evaluate(question: &Question, card: &Card) -> Result<bool> {
    let param = &question.param;
    let answer = match question.template {
        Template::IsA => param.as_text().is_some_and(|text| {
            card.type_line.contains(text) || card.categories().iter().any(|tag| tag == text)
        }),
        Template::Color => match param {
            Param::Color(color) => ColorView::of(card).contains(*color),
            _ => false,
        },
        Template::Keyword => param
            .as_text()
            .is_some_and(|text| card.keywords.iter().any(|keyword| keyword == text)),
        Template::LegalIn => param
            .as_text()
            .and_then(|format| card.legalities.get(&format.to_lowercase()))
            .is_some_and(|status| status == "legal"),
        Template::CmcLessThan => number(param).is_some_and(|n| card.cmc < f64::from(n)),
        Template::CmcEquals => number(param).is_some_and(|n| card.cmc == f64::from(n)),
        Template::PowerLessThan => compare_stat(card, StatKind::Power, param, |v, n| v < n)?,
        Template::ToughnessLessThan => {
            compare_stat(card, StatKind::Toughness, param, |v, n| v < n)?
        }
        Template::PowerEquals => compare_stat(card, StatKind::Power, param, |v, n| v == n)?,
        Template::ToughnessEquals => compare_stat(card, StatKind::Toughness, param, |v, n| v == n)?,
        Template::FirstLetter => match param {
            Param::Letter(letter) => first_letter(&card.name)
                .is_some_and(|first| first.chars().eq(std::iter::once(*letter))),
            _ => false,
        },
        Template::Multicolored => ColorView::of(card).len() > 1,
        Template::Monocolored => ColorView::of(card).len() == 1,
        Template::Colorless => ColorView::of(card).is_empty(),
        Template::ReserveList => card.reserved,
        Template::GameChanger => card.game_changer,
        Template::Named => param.as_text().is_some_and(|name| card.name == name),
    };
    Ok(answer)
}

fn number(param: &Param) -> Option<u32> {
    match param {
        Param::Number(n) => Some(*n),
        _ => None,
    }
}

fn stat(card: &Card, kind: StatKind) -> Option<&Stat> {
    match kind {
        StatKind::Power => card.power.as_ref(),
        StatKind::Toughness => card.toughness.as_ref(),
    }
}

/// Compares a card's stat against a numeric parameter. A card without the
/// stat answers no; the selector never gets here for such cards.
fn compare_stat(
    card: &Card,
    kind: StatKind,
    param: &Param,
    cmp: impl Fn(i64, i64) -> bool,
) -> Result<bool> {
    let (Some(value), Some(n)) = (stat(card, kind), number(param)) else {
        return Ok(false);
    };
    let value = desymbolize(value).ok_or_else(|| EngineError::MalformedStatValue {
        card: card.name.clone(),
        value: value.to_string(),
    })?;
    Ok(cmp(value, i64::from(n)))
}

/// Turns a printed stat into a number.
///
/// Placeholders (`X`, `*`, `?` and anything starting with one, like `*+1`)
/// count as zero. Otherwise only the leading digit is read, so `1+*` is 1.
/// Returns `None` for anything else.
pub fn desymbolize(stat: &Stat) -> Option<i64> {
    let text = match stat {
        Stat::Number(n) => return Some(*n),
        Stat::Symbol(text) => text.trim(),
    };

    let first = text.chars().next()?;
    if PLACEHOLDERS.contains(&first) {
        return Some(0);
    }
    first.to_digit(10).map(i64::from)
}

/// The first character of a name with diacritics stripped, `Æ` becomes `AE`.
fn first_letter(name: &str) -> Option<&'static str> {
    name.chars().next().and_then(deunicode::deunicode_char)
}
