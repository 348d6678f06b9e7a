use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::QuizSettingsDraft;
use services::{Clock, PracticeLoopService};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, Layout, UiApp, build_app_context};

const LOG_ENV: &str = "QUIZ_LOG";
const SEED_ENV: &str = "QUIZ_SEED";
const DELAY_ENV: &str = "QUIZ_ADVANCE_DELAY_MS";
const LAYOUT_ENV: &str = "QUIZ_LAYOUT";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidDelay { raw: String },
    InvalidLayout { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidDelay { raw } => write!(f, "invalid --delay-ms value: {raw}"),
            ArgsError::InvalidLayout { raw } => write!(f, "invalid --layout value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    layout: Layout,
    practice_loop: Arc<PracticeLoopService>,
}

impl UiApp for DesktopApp {
    fn layout(&self) -> Layout {
        self.layout
    }

    fn practice_loop(&self) -> Arc<PracticeLoopService> {
        Arc::clone(&self.practice_loop)
    }
}

#[derive(Debug)]
struct Args {
    draft: QuizSettingsDraft,
    layout: Layout,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--seed <u64>] [--delay-ms <ms>] [--layout full|compact]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --delay-ms 1500");
    eprintln!("  --layout full");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_SEED, QUIZ_ADVANCE_DELAY_MS, QUIZ_LAYOUT, QUIZ_LOG");
}

impl Args {
    /// Environment values seed the defaults; flags override them.
    fn parse(
        env: impl Fn(&str) -> Option<String>,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        let mut draft = QuizSettingsDraft::new();
        if let Some(raw) = env(SEED_ENV) {
            draft.seed = Some(parse_seed(raw)?);
        }
        if let Some(raw) = env(DELAY_ENV) {
            draft.advance_delay_ms = Some(parse_delay(raw)?);
        }
        let mut layout = match env(LAYOUT_ENV) {
            Some(raw) => parse_layout(raw)?,
            None => Layout::default(),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => draft.seed = Some(parse_seed(require_value(args, "--seed")?)?),
                "--delay-ms" => {
                    draft.advance_delay_ms = Some(parse_delay(require_value(args, "--delay-ms")?)?);
                }
                "--layout" => layout = parse_layout(require_value(args, "--layout")?)?,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { draft, layout })
    }
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim().parse().map_err(|_| ArgsError::InvalidSeed { raw })
}

fn parse_delay(raw: String) -> Result<u64, ArgsError> {
    raw.trim().parse().map_err(|_| ArgsError::InvalidDelay { raw })
}

fn parse_layout(raw: String) -> Result<Layout, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidLayout { raw })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(|key| std::env::var(key).ok(), &mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    let practice_loop = PracticeLoopService::from_draft(Clock::System, parsed.draft)?;
    info!(
        layout = ?parsed.layout,
        delay_ms = practice_loop.settings().advance_delay_ms(),
        seed = ?practice_loop.settings().seed(),
        "starting comparison symbols trainer"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        layout: parsed.layout,
        practice_loop: Arc::new(practice_loop),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Comparison Symbols")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
