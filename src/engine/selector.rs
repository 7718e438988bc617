use log::{debug, trace};

use crate::engine::prelude::*;

/// Picks the question whose yes/no split of `candidates` is closest to half.
///
/// Templates and parameters are tried in catalog order and the first
/// question with a strictly better split wins. The search stops as soon as
/// a perfect split is found. Returns `None` when every question would get
/// the same answer from every candidate.
pub fn select(catalog: &Catalog, candidates: &[Card]) -> Result<Option<Question>> {
    let total = candidates.len();
    if total < 2 {
        debug!("selector: {total} candidates, nothing to split");
        return Ok(None);
    }

    let target = total / 2;
    let mut best = None;
    let mut best_score = total;

    for (template, domain) in catalog.entries() {
        if !is_applicable(template, candidates) {
            trace!("selector: skipping {template:?}, not every candidate has the stat");
            continue;
        }

        for param in domain {
            let question = Question::new(template, param.clone());
            let score = score(&question, candidates)?;
            if target.abs_diff(score) < target.abs_diff(best_score) {
                trace!("selector: '{question}' splits {score}/{total}");
                best_score = score;
                best = Some(question);
                if best_score == target {
                    debug!("selector: perfect split found");
                    return Ok(best);
                }
            }
        }
    }

    if best_score == 0 || best_score == total {
        debug!("selector: no question splits the {total} candidates");
        return Ok(None);
    }
    debug!("selector: best split is {best_score}/{total}");
    Ok(best)
}

/// How many candidates would answer yes.
pub fn score(question: &Question, candidates: &[Card]) -> Result<usize> {
    let mut score = 0;
    for card in candidates {
        if evaluate(question, card)? {
            score += 1;
        }
    }
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(
            vec!["Creature".into(), "Instant".into(), "Artifact".into()],
            vec!["Flying".into(), "Haste".into()],
        )
    }

    fn creature(name: &str, power: &str) -> Card {
        Card::new(name, "Creature — Bear").with_power_toughness(power, "2")
    }

    #[test]
    fn picks_perfect_type_split() {
        let cards = vec![
            Card::new("Grizzly Bears", "Creature — Bear"),
            Card::new("Lightning Bolt", "Instant"),
            Card::new("Runeclaw Bear", "Creature — Bear"),
            Card::new("Opt", "Instant"),
        ];
        let question = select(&catalog(), &cards).unwrap().unwrap();
        assert_eq!(question, Question::new(Template::IsA, Param::Text("Creature".into())));
        assert_eq!(score(&question, &cards).unwrap(), 2);
    }

    #[test]
    fn first_of_equal_splits_wins() {
        // Creature and both keywords split these 1/2, Creature is declared first.
        let cards = vec![
            Card::new("A", "Creature").with_keyword("Flying"),
            Card::new("B", "Instant").with_keyword("Haste"),
            Card::new("C", "Instant"),
        ];
        let question = select(&catalog(), &cards).unwrap().unwrap();
        assert_eq!(question.template, Template::IsA);
        assert_eq!(question.param, Param::Text("Creature".into()));
    }

    #[test]
    fn returns_none_when_nothing_splits() {
        let cards = vec![
            Card::new("Twin", "Artifact"),
            Card::new("Twin", "Artifact"),
            Card::new("Twin", "Artifact"),
        ];
        assert_eq!(select(&catalog(), &cards).unwrap(), None);
    }

    #[test]
    fn never_returns_degenerate_question() {
        let cards = vec![
            Card::new("Alpha", "Artifact"),
            Card::new("Alpha", "Artifact"),
            Card::new("Beta", "Artifact"),
            Card::new("Alpha", "Artifact"),
            Card::new("Alpha", "Artifact"),
        ];
        let question = select(&catalog(), &cards).unwrap().unwrap();
        let score = score(&question, &cards).unwrap();
        assert!(score > 0 && score < cards.len());
        assert_eq!(question, Question::new(Template::FirstLetter, Param::Letter('B')));
    }

    #[test]
    fn skips_stat_templates_when_one_candidate_lacks_power() {
        // Nothing but power splits these, and the last card has no power printed.
        let mut cards = vec![creature("Sa", "1"), creature("Sb", "1"), creature("Sc", "5")];
        cards.push(Card::new("Sd", "Creature — Bear"));
        assert_eq!(select(&catalog(), &cards).unwrap(), None);

        cards[3] = creature("Sd", "5");
        let question = select(&catalog(), &cards).unwrap().unwrap();
        assert_eq!(question, Question::new(Template::PowerLessThan, Param::Number(2)));
    }

    #[test]
    fn malformed_stat_surfaces() {
        // nothing before the power templates splits these cleanly
        let cards = vec![creature("Same", "∞"), creature("Same", "2"), creature("Same", "3")];
        let catalog = Catalog::new(vec![], vec![]);
        assert!(matches!(
            select(&catalog, &cards),
            Err(EngineError::MalformedStatValue { .. })
        ));
    }

    #[test]
    fn stops_at_perfect_split() {
        // the power templates come later and would fail on "∞"
        let cards = vec![
            creature("Grizzly Bears", "2"),
            Card::new("Bolt", "Instant").with_power_toughness("1", "1"),
            creature("Unbounded", "∞"),
            Card::new("Opt", "Instant").with_power_toughness("1", "1"),
        ];
        assert_eq!(
            select(&catalog(), &cards).unwrap(),
            Some(Question::new(Template::IsA, Param::Text("Creature".into())))
        );
    }

    #[test]
    fn too_few_candidates() {
        assert_eq!(select(&catalog(), &[]).unwrap(), None);
        assert_eq!(select(&catalog(), &[Card::new("Solo", "Land")]).unwrap(), None);
    }
}
