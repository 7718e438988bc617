use crate::engine::prelude::*;

/// Lazily yields the candidates whose answer to `question` is `answer`,
/// in their original order. `candidates` itself is left untouched.
pub fn filter<'a>(
    candidates: &'a [Card],
    question: &'a Question,
    answer: bool,
) -> impl Iterator<Item = Result<&'a Card>> + 'a {
    candidates.iter().filter_map(move |card| match evaluate(question, card) {
        Ok(matches) if matches == answer => Some(Ok(card)),
        Ok(_) => None,
        Err(e) => Some(Err(e)),
    })
}
