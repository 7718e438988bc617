use log::info;

use crate::engine::prelude::*;

/// How many questions a player has to answer before the game gives up.
pub const DEFAULT_BUDGET: usize = 20;

/// Below this many candidates it is quicker to name them one by one.
const GUESS_THRESHOLD: usize = 3;

/// Answers yes/no questions on the player's behalf. Implementations keep
/// asking until they get a usable answer, so only I/O failures come back
/// as errors.
pub trait Oracle {
    /// `number` is the 1-based index of the question in the session.
    fn ask(&mut self, number: usize, question: &Question) -> Result<bool>;
}

/// Gets told how a session is progressing.
pub trait Reporter {
    fn remaining(&mut self, _count: usize) -> Result<()> {
        Ok(())
    }

    /// The player's answers ruled out every candidate.
    fn no_candidates(&mut self) -> Result<()> {
        Ok(())
    }
}

/// The phases a session moves through. `Confirmed` and `Exhausted` are final.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Asking,
    Guessing,
    Confirmed,
    Exhausted,
}

/// How a finished session ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Confirmed { name: String, questions: usize },
    /// Lists the cards that were never confirmed, empty when the answers
    /// contradicted every card.
    Exhausted { remaining: Vec<String> },
}

/// One game: the shrinking candidate set plus everything asked so far.
pub struct Session<'c> {
    catalog: &'c Catalog,
    budget: usize,
    candidates: Vec<Card>,
    history: Vec<RoundRecord>,
    phase: Phase,
}

impl<'c> Session<'c> {
    pub fn new(catalog: &'c Catalog, candidates: Vec<Card>) -> Self {
        Self::with_budget(catalog, candidates, DEFAULT_BUDGET)
    }

    pub fn with_budget(catalog: &'c Catalog, candidates: Vec<Card>, budget: usize) -> Self {
        Self {
            catalog,
            budget,
            candidates,
            history: vec![],
            phase: Phase::Asking,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    pub fn candidates(&self) -> &[Card] {
        &self.candidates
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Plays the session to the end against `player`.
    pub fn run<P: Oracle + Reporter>(&mut self, player: &mut P) -> Result<Outcome> {
        info!(
            "session: starting with {} candidates and {} questions",
            self.candidates.len(),
            self.budget
        );
        loop {
            if let Some(outcome) = self.step(player)? {
                return Ok(outcome);
            }
        }
    }

    /// Advances by one question, or by one phase change. Returns the outcome
    /// once a final phase is reached.
    pub fn step<P: Oracle + Reporter>(&mut self, player: &mut P) -> Result<Option<Outcome>> {
        match self.phase {
            Phase::Asking => self.ask_round(player)?,
            Phase::Guessing => self.guess_round(player)?,
            Phase::Confirmed | Phase::Exhausted => return Ok(Some(self.outcome())),
        }
        Ok(None)
    }

    fn ask_round<P: Oracle + Reporter>(&mut self, player: &mut P) -> Result<()> {
        if self.budget <= 1 || self.candidates.len() <= GUESS_THRESHOLD {
            self.enter(Phase::Guessing);
            return Ok(());
        }

        let Some(question) = select(self.catalog, &self.candidates)? else {
            self.enter(Phase::Guessing);
            return Ok(());
        };

        self.budget -= 1;
        let answer = player.ask(self.history.len() + 1, &question)?;
        info!("session: '{question}' answered {answer}");

        let remaining = filter(&self.candidates, &question, answer)
            .map(|card| card.cloned())
            .collect::<Result<Vec<_>>>()?;
        self.candidates = remaining;
        self.history.push(RoundRecord { question, answer });
        player.remaining(self.candidates.len())?;
        Ok(())
    }

    fn guess_round<P: Oracle + Reporter>(&mut self, player: &mut P) -> Result<()> {
        if self.budget == 0 {
            self.enter(Phase::Exhausted);
            return Ok(());
        }
        let Some(guess) = self.candidates.last() else {
            player.no_candidates()?;
            self.enter(Phase::Exhausted);
            return Ok(());
        };

        let question = Question::named(guess.name.clone());
        let answer = player.ask(self.history.len() + 1, &question)?;
        self.history.push(RoundRecord { question, answer });
        if answer {
            self.enter(Phase::Confirmed);
        } else {
            self.candidates.pop();
            self.budget -= 1;
        }
        Ok(())
    }

    fn enter(&mut self, phase: Phase) {
        info!(
            "session: {:?} -> {:?} with {} candidates, {} questions left",
            self.phase,
            phase,
            self.candidates.len(),
            self.budget
        );
        self.phase = phase;
    }

    fn outcome(&self) -> Outcome {
        match (self.phase, self.candidates.last()) {
            (Phase::Confirmed, Some(card)) => Outcome::Confirmed {
                name: card.name.clone(),
                questions: self.history.len(),
            },
            _ => Outcome::Exhausted {
                remaining: self.candidates.iter().map(|card| card.name.clone()).collect(),
            },
        }
    }
}
