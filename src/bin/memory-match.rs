//! Terminal front-end for memory-match.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use docopt::Docopt;
use serde::Deserialize;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use memory_match::{
    Difficulty, FlipOutcome, GameConfig, GameSession, HtmlSurface, MatchError, TextSurface,
};

const USAGE: &str = "
memory-match - flip cards, find the pairs.

Usage:
    memory-match [--seed=<n>] [--config=<path>] [--html]
    memory-match (-h | --help)
    memory-match --version

Options:
    -h --help        Show this screen.
    --version        Show version.
    --seed=<n>       Seed the shuffle for a reproducible deal.
    --config=<path>  Load settings from a TOML file.
    --html           Print the board as HTML and exit.

Commands while playing:
    <number>   Flip the card at that position.
    n          Start a new game.
    d <level>  Select difficulty (easy, medium, hard) for the next game.
    q          Quit.
";

const PROMPT: &str = "Enter a card number, 'n', 'd <level>' or 'q'.";

#[derive(Debug, Deserialize)]
struct Args {
    flag_seed: Option<u64>,
    flag_config: Option<String>,
    flag_html: bool,
}

/// One line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Flip(usize),
    NewGame,
    SetDifficulty(Difficulty),
    Quit,
}

impl FromStr for Command {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, MatchError> {
        let s = s.trim();
        match s {
            "q" => return Ok(Command::Quit),
            "n" => return Ok(Command::NewGame),
            _ => {}
        }

        if let Some(level) = s.strip_prefix("d ") {
            return level.trim().parse().map(Command::SetDifficulty);
        }

        s.parse::<usize>()
            .map(Command::Flip)
            .map_err(|_| MatchError::UnknownCommand(s.to_string()))
    }
}

fn main() -> Result<(), MatchError> {
    let args: Args = Docopt::new(USAGE)
        .map(|d| d.version(Some(env!("CARGO_PKG_VERSION").to_string())))
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let mut config = match &args.flag_config {
        Some(path) => GameConfig::from_file(Path::new(path))?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.flag_seed {
        config = config.with_seed(seed);
    }

    let mut session = GameSession::new(config)?;
    let mut stdout = io::stdout();

    if args.flag_html {
        print_html(&session, &mut stdout)?;
        return Ok(());
    }

    play(&mut session, io::stdin().lock(), &mut stdout)
}

fn print_html(session: &GameSession, out: &mut impl Write) -> io::Result<()> {
    let mut surface = HtmlSurface::new();
    session.render_to(&mut surface);
    write!(out, "{}", surface.markup())?;
    out.flush()
}

fn play(session: &mut GameSession, input: impl BufRead, out: &mut impl Write) -> Result<(), MatchError> {
    let mut surface = TextSurface::new(4);

    draw(session, &mut surface, out)?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::NewGame) => session.new_game(),
            Ok(Command::SetDifficulty(difficulty)) => {
                session.set_difficulty(difficulty);
                writeln!(out, "Difficulty set to {}; applies from the next game.", difficulty)?;
                continue;
            }
            Ok(Command::Flip(index)) => match session.activate(index) {
                Ok(FlipOutcome::Flipped) => {}
                Ok(FlipOutcome::AlreadyFlipped) => writeln!(out, "Card {} is already flipped.", index)?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            Err(MatchError::UnknownCommand(input)) => {
                warn!(input, "Unrecognized command");
                writeln!(out, "{}", PROMPT)?;
                continue;
            }
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        }
        draw(session, &mut surface, out)?;
    }
    Ok(())
}

fn draw(session: &GameSession, surface: &mut TextSurface, out: &mut impl Write) -> io::Result<()> {
    session.render_to(surface);
    writeln!(out, "Moves: {}  Time: {}", session.moves(), session.timer_display())?;
    write!(out, "{}", surface)?;
    out.flush()
}
