use std::path::PathBuf;

use clap::Parser;
use color_eyre::{eyre::WrapErr, Result};
use log::{info, LevelFilter};

use twenty_questions_arcana::client::Console;
use twenty_questions_arcana::engine::prelude::{Session, DEFAULT_BUDGET};
use twenty_questions_arcana::impls::cards::load_cards;
use twenty_questions_arcana::impls::vocabulary::{read_list, Vocabulary};

#[derive(Debug, Parser)]
#[command(
    name = "twenty-questions",
    version,
    about = "Think of a Magic card, answer yes or no, and let the game guess it."
)]
struct Cli {
    /// Scryfall "oracle cards" bulk data file.
    #[arg(short, long, value_name = "FILE", default_value = "oracle-cards.json")]
    cards: PathBuf,

    /// Number of questions the game may ask, guesses included.
    #[arg(short, long, default_value_t = DEFAULT_BUDGET)]
    budget: usize,

    /// Where to write the log. The terminal is kept for the game itself.
    #[arg(long, value_name = "FILE", default_value = "twenty_questions.log")]
    log_file: PathBuf,

    #[arg(long, value_name = "LEVEL", default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    /// JSON list of card types, replaces the built in list.
    #[arg(long, value_name = "FILE")]
    card_types: Option<PathBuf>,

    /// JSON list of creature types, replaces the ones found in the card data.
    #[arg(long, value_name = "FILE")]
    creature_types: Option<PathBuf>,

    /// JSON list of keywords, replaces the ones found in the card data.
    #[arg(long, value_name = "FILE")]
    keywords: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    simple_logging::log_to_file(&cli.log_file, cli.log_level)
        .wrap_err_with(|| format!("unable to open log file {}", cli.log_file.display()))?;
    info!("main: starting with {cli:?}");

    let cards = load_cards(&cli.cards)
        .wrap_err_with(|| format!("unable to load cards from {}", cli.cards.display()))?;

    let mut vocabulary = Vocabulary::derive(&cards);
    if let Some(path) = &cli.card_types {
        vocabulary.card_types = read_list(path).wrap_err("unable to read card types")?;
    }
    if let Some(path) = &cli.creature_types {
        vocabulary.creature_types = read_list(path).wrap_err("unable to read creature types")?;
    }
    if let Some(path) = &cli.keywords {
        vocabulary.keywords = read_list(path).wrap_err("unable to read keywords")?;
    }
    let catalog = vocabulary.catalog();

    println!("Think of a card. {} cards to choose from.", cards.len());
    let mut console = Console::stdio();
    let mut session = Session::with_budget(&catalog, cards, cli.budget);
    let outcome = session.run(&mut console)?;
    console.report(&outcome, cli.budget)?;

    info!("main: finished after {} questions", session.history().len());
    Ok(())
}
