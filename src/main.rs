//! Wordle Index CLI
//!
//! Plays interactively (you type the feedback), against a fixed target, or
//! runs a batch of self-play games and reports solve statistics.

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use wordle_index::{
    load_dictionary, run_batch, Alphabet, BatchConfig, DictionaryIndex, FeedbackOracle,
    FeedbackPattern, FirstGuessCache, GameSession, GuessSelector, SecretOracle, SelectorConfig,
    SessionConfig, SessionState, Word, MAX_TURNS,
};

#[derive(clap::Parser)]
#[clap(name = "wordle-index")]
struct Options {
    #[clap(long, default_value = "dict.txt")]
    /// dictionary file, one word per line
    dict: PathBuf,

    #[clap(long, default_value = "first-moves.txt")]
    /// file holding precomputed opening guesses; generated if missing
    first_moves: PathBuf,

    #[clap(long)]
    /// neither read nor write the opening guess file
    no_cache: bool,

    #[clap(long)]
    /// if set, all guesses will be possible answers
    hard_mode: bool,

    #[clap(short, long)]
    /// always open with this word
    start: Option<String>,

    #[clap(short, long)]
    /// play a single game against this word instead of asking for feedback
    target: Option<String>,

    #[clap(long, value_enum, default_value = "letters")]
    alphabet: AlphabetKind,

    #[clap(long, value_name = "GAMES")]
    /// play this many games against random secrets and print statistics
    test: Option<usize>,

    #[clap(long)]
    /// seed for secrets and tie-breaks
    seed: Option<u64>,

    #[clap(long)]
    /// score guesses and play games on a single thread
    sequential: bool,

    #[clap(short, long)]
    /// only log warnings and errors
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum AlphabetKind {
    Letters,
    Digits,
}

impl AlphabetKind {
    fn alphabet(self) -> Alphabet {
        match self {
            AlphabetKind::Letters => Alphabet::letters(),
            AlphabetKind::Digits => Alphabet::digits(),
        }
    }
}

/// Asks for feedback on stdin until a well-formed pattern is entered.
///
/// `+` marks a symbol in the right place, `*` one in the wrong place and `-`
/// one that does not match.
struct PromptOracle;

impl FeedbackOracle for PromptOracle {
    fn feedback(&mut self, _guess: &Word) -> wordle_index::Result<FeedbackPattern> {
        let stdin = io::stdin();
        loop {
            print!("Enter result: ");
            io::stdout().flush()?;
            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "reached end of stdin while awaiting feedback",
                )
                .into());
            }
            match FeedbackPattern::parse(line.trim()) {
                Ok(pattern) => return Ok(pattern),
                Err(e) => eprintln!("{}", e),
            }
        }
    }
}

fn parse_word(index: &DictionaryIndex, text: &str) -> Result<Word> {
    let word = index.parse_word(&text.to_lowercase())?;
    if !index.contains(&word) {
        log::warn!("{} is not in the dictionary", word);
    }
    Ok(word)
}

fn play_game<O: FeedbackOracle>(
    session: &mut GameSession<'_>,
    selector: &GuessSelector,
    opening: &[Word],
    oracle: &mut O,
    rng: &mut StdRng,
) -> Result<SessionState> {
    while !session.state().is_terminal() {
        let guess = match session.next_guess(selector, opening, rng)? {
            Some(guess) => guess,
            None => break,
        };
        println!(
            "Move {}: {}",
            session.turn() + 1,
            guess.to_string().to_uppercase()
        );
        let pattern = oracle.feedback(&guess)?;
        println!("         {}", pattern);
        session.submit(guess, pattern)?;
        if let SessionState::InProgress { .. } = session.state() {
            println!("{} candidates left", session.pool().len());
            println!();
        }
    }

    match session.state() {
        SessionState::Solved { turn } => {
            let (answer, _) = session.history()[turn];
            println!(
                "Solved in {} moves! Answer is \"{}\"",
                turn + 1,
                answer.to_string().to_uppercase()
            );
        }
        SessionState::Contradiction => {
            println!("I'm all out of possibilities! Double check your input.")
        }
        SessionState::Unsolved | SessionState::InProgress { .. } => {
            println!("Sorry, no solution was reached in {} moves", MAX_TURNS)
        }
    }
    Ok(session.state())
}

fn main() -> Result<()> {
    let opts = Options::parse();

    let default_level = if opts.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let load_start = std::time::Instant::now();
    let index = load_dictionary(&opts.dict, opts.alphabet.alphabet())
        .with_context(|| format!("failed to load dictionary {}", opts.dict.display()))?;
    log::info!(
        "indexed {} words in {:.2?}",
        index.len(),
        load_start.elapsed()
    );

    let selector = GuessSelector::new(SelectorConfig {
        parallel: !opts.sequential,
        ..SelectorConfig::default()
    });

    let session_config = SessionConfig {
        hard_mode: opts.hard_mode,
        opening: opts
            .start
            .as_deref()
            .map(|start| parse_word(&index, start))
            .transpose()?,
    };

    let cache = if opts.no_cache {
        FirstGuessCache::in_memory()
    } else {
        let mut cache = FirstGuessCache::open(&opts.first_moves, &index).with_context(|| {
            format!("failed to read opening guesses {}", opts.first_moves.display())
        })?;
        if session_config.opening.is_none() {
            cache.prime(&index, &selector).with_context(|| {
                format!("failed to write opening guesses {}", opts.first_moves.display())
            })?;
        }
        cache
    };
    let opening = cache.words();

    let seed = opts.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    if let Some(games) = opts.test {
        let summary = run_batch(
            &index,
            &selector,
            opening,
            &BatchConfig {
                games,
                seed,
                session: session_config,
                parallel: !opts.sequential,
            },
        )?;
        println!("{}", summary);
        return Ok(());
    }

    let mut session = GameSession::new(&index, session_config);
    match opts.target.as_deref() {
        Some(target) => {
            let target = parse_word(&index, target)?;
            play_game(
                &mut session,
                &selector,
                opening,
                &mut SecretOracle::new(target),
                &mut rng,
            )?;
        }
        None => {
            println!("Respond to each guess with 5 of '+' (right place), '*' (wrong place), '-' (no match).");
            println!();
            play_game(&mut session, &selector, opening, &mut PromptOracle, &mut rng)?;
        }
    }
    Ok(())
}
