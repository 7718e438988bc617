use std::io::{self, BufRead, Stdout, Write};

use crossterm::style::Stylize;
use log::{info, warn};

use crate::engine::prelude::*;

pub const POSITIVE_ANSWERS: [&str; 6] = ["yes", "y", "true", "t", "1", "yup"];
pub const NEGATIVE_ANSWERS: [&str; 6] = ["no", "n", "false", "f", "0", "nope"];

/// Reads a yes/no answer, ignoring case and surrounding whitespace.
pub fn parse_answer(input: &str) -> Option<bool> {
    let input = input.trim().to_lowercase();
    if POSITIVE_ANSWERS.contains(&input.as_str()) {
        Some(true)
    } else if NEGATIVE_ANSWERS.contains(&input.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Plays the player's side of a session over a line based terminal.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompts until the player types something that reads as yes or no.
    fn read_answer(&mut self) -> Result<bool> {
        let mut line = String::new();
        loop {
            write!(self.output, ">>> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                let closed = io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before an answer was given",
                );
                return Err(closed.into());
            }

            if let Some(answer) = parse_answer(&line) {
                return Ok(answer);
            }
            let raw = line.trim();
            warn!("console: rejected answer '{raw}'");
            writeln!(self.output, "{}", format!("{raw} is not a valid answer.").yellow())?;
            writeln!(self.output, "Please answer yes or no")?;
        }
    }

    /// Prints the results block for a finished session.
    pub fn report(&mut self, outcome: &Outcome, budget: usize) -> Result<()> {
        writeln!(self.output, "\n{}\n", "#### Results ####".bold())?;
        match outcome {
            Outcome::Confirmed { name, questions } => {
                info!("console: guessed '{name}' in {questions} questions");
                writeln!(self.output, "I guessed your card in {questions} questions")?;
                writeln!(self.output, "Your card was {}", name.as_str().green())?;
            }
            Outcome::Exhausted { remaining } if remaining.is_empty() => {
                info!("console: no card matched");
            }
            Outcome::Exhausted { remaining } => {
                info!("console: gave up with {} cards left", remaining.len());
                writeln!(self.output, "I couldn't guess your card in {budget} questions")?;
                writeln!(self.output, "There were {} cards left?", remaining.len())?;
                writeln!(self.output, "The remaining cards were:")?;
                for name in remaining {
                    writeln!(self.output, "{name}")?;
                }
            }
        }
        self.output.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Oracle for Console<R, W> {
    fn ask(&mut self, number: usize, question: &Question) -> Result<bool> {
        writeln!(self.output, "\n{}", format!("#### Question {number} ####").bold())?;
        writeln!(self.output, "{question}")?;
        self.read_answer()
    }
}

impl<R: BufRead, W: Write> Reporter for Console<R, W> {
    fn remaining(&mut self, count: usize) -> Result<()> {
        writeln!(self.output, "{count} cards remaining")?;
        Ok(())
    }

    fn no_candidates(&mut self) -> Result<()> {
        writeln!(self.output, "{}", "No cards match your answers, something's gone wrong".red())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    fn output(console: Console<&[u8], Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn answers_are_case_insensitive() {
        assert_eq!(parse_answer("YES"), Some(true));
        assert_eq!(parse_answer(" Yup \n"), Some(true));
        assert_eq!(parse_answer("0"), Some(false));
        assert_eq!(parse_answer("Nope"), Some(false));
        assert_eq!(parse_answer("maybe"), None);
        assert_eq!(parse_answer(""), None);
    }

    #[test]
    fn reprompts_until_valid() {
        let mut console = console("maybe\n\nn\n");
        let question = Question::new(Template::IsA, Param::Text("Creature".into()));
        assert!(!console.ask(3, &question).unwrap());

        let text = output(console);
        assert!(text.contains("#### Question 3 ####"));
        assert!(text.contains("Is your card a Creature?"));
        assert!(text.contains("maybe is not a valid answer."));
        assert_eq!(text.matches("Please answer yes or no").count(), 2);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut console = console("perhaps\n");
        let err = console.ask(1, &Question::named("Opt")).unwrap_err();
        assert!(matches!(err, EngineError::Io(ref e) if e.kind() == io::ErrorKind::UnexpectedEof));
    }

    #[test]
    fn reports_remaining_cards() {
        let mut console = console("");
        let outcome = Outcome::Exhausted { remaining: vec!["Opt".into(), "Shock".into()] };
        console.report(&outcome, 20).unwrap();

        let text = output(console);
        assert!(text.contains("I couldn't guess your card in 20 questions"));
        assert!(text.contains("There were 2 cards left?"));
        assert!(text.ends_with("Opt\nShock\n"));
    }

    #[test]
    fn reports_confirmed_card() {
        let mut console = console("");
        let outcome = Outcome::Confirmed { name: "Black Lotus".into(), questions: 7 };
        console.report(&outcome, 20).unwrap();

        let text = output(console);
        assert!(text.contains("I guessed your card in 7 questions"));
        assert!(text.contains("Black Lotus"));
    }
}
