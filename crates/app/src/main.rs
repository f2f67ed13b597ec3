use std::fmt;
use std::sync::Arc;

use daile_core::model::{AnswerKey, AnswerKeyError, DisplayMode};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{ClipboardError, ClipboardSink, Clock, GameService};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, AppContext, UiApp};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidAnswers { origin: &'static str, source: AnswerKeyError },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidAnswers { origin, source } => {
                write!(f, "invalid {origin} value: {source}")
            }
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgsError::InvalidAnswers { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--answers <a,b,c,d,e,f>] [--dark]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --answers {}", AnswerKey::default());
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DAILE_ANSWERS, DAILE_DARK (1/true), RUST_LOG");
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    answers: AnswerKey,
    display_mode: DisplayMode,
}

/// Values read from the environment, kept apart so parsing stays testable.
#[derive(Debug, Default)]
struct EnvDefaults {
    answers: Option<String>,
    dark: Option<String>,
}

impl EnvDefaults {
    fn from_env() -> Self {
        Self {
            answers: std::env::var("DAILE_ANSWERS").ok(),
            dark: std::env::var("DAILE_DARK").ok(),
        }
    }
}

fn parse_answers(raw: &str, origin: &'static str) -> Result<AnswerKey, ArgsError> {
    raw.parse()
        .map_err(|source| ArgsError::InvalidAnswers { origin, source })
}

fn is_truthy(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: EnvDefaults,
    ) -> Result<Parsed, ArgsError> {
        let mut answers = match env.answers.as_deref() {
            Some(raw) => parse_answers(raw, "DAILE_ANSWERS")?,
            None => AnswerKey::default(),
        };
        let mut display_mode = if env.dark.as_deref().is_some_and(is_truthy) {
            DisplayMode::Dark
        } else {
            DisplayMode::Light
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--answers" => {
                    let value = require_value(args, "--answers")?;
                    answers = parse_answers(&value, "--answers")?;
                }
                "--dark" => display_mode = DisplayMode::Dark,
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self {
            answers,
            display_mode,
        }))
    }
}

/// System clipboard through `arboard`. A fresh handle per write keeps the sink `Sync`.
struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|err| ClipboardError::Write(err.to_string()))
    }
}

struct DesktopApp {
    game: Arc<GameService>,
}

impl UiApp for DesktopApp {
    fn game_service(&self) -> Arc<GameService> {
        Arc::clone(&self.game)
    }
}

fn init_tracing() {
    // RUST_LOG=services=debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, EnvDefaults::from_env()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let args = match parsed {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(args) => args,
    };

    init_tracing();
    info!(mode = ?args.display_mode, "launching");

    let game = GameService::new(Clock::system(), args.answers, Arc::new(SystemClipboard))
        .with_display_mode(args.display_mode);
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        game: Arc::new(game),
    });
    let context = AppContext::new(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Daile")
            .with_always_on_top(false),
    );

    // The desktop launcher owns the async runtime the UI timer runs on.
    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
