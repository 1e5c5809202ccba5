use std::fmt;
use std::sync::Arc;

use assignment_core::Clock;
use assignment_core::model::SectionId;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt as log_fmt};
use ui::{App, UiApp, build_app_context};

const DEFAULT_TITLE: &str = "AI in Software Engineering Assignment";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTab {
        raw: String,
        source: assignment_core::Error,
    },
    EmptyTitle,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTab { raw, source } => {
                write!(f, "invalid --tab value: {raw} ({source})")
            }
            ArgsError::EmptyTitle => write!(f, "--title must not be empty"),
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgsError::InvalidTab { source, .. } => Some(source),
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

fn parse_tab(raw: String) -> Result<SectionId, ArgsError> {
    raw.parse::<SectionId>()
        .map_err(|err| ArgsError::InvalidTab {
            raw: raw.clone(),
            source: err.into(),
        })
}

struct DesktopApp {
    title: String,
    initial_section: SectionId,
    clock: Clock,
}

impl UiApp for DesktopApp {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn initial_section(&self) -> SectionId {
        self.initial_section
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}

#[derive(Debug, PartialEq)]
struct Args {
    tab: SectionId,
    title: String,
    log_filter: Option<String>,
    help: bool,
}

/// Values read from the environment before flags are applied.
#[derive(Debug, Default)]
struct EnvDefaults {
    tab: Option<String>,
    title: Option<String>,
}

impl EnvDefaults {
    fn from_env() -> Self {
        Self {
            tab: std::env::var("ASSIGNMENT_TAB").ok(),
            title: std::env::var("ASSIGNMENT_TITLE").ok(),
        }
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--tab <section>] [--title <text>] [--log <filter>]");
    eprintln!();
    eprintln!("Sections:");
    eprintln!("  theoretical, practical, ethical, bonus");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --tab theoretical");
    eprintln!("  --title \"{DEFAULT_TITLE}\"");
    eprintln!("  --log {DEFAULT_LOG_FILTER}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ASSIGNMENT_TAB, ASSIGNMENT_TITLE, RUST_LOG");
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: EnvDefaults,
    ) -> Result<Self, ArgsError> {
        let mut tab = match env.tab {
            Some(raw) if !raw.trim().is_empty() => parse_tab(raw)?,
            _ => SectionId::Theoretical,
        };
        let mut title = env
            .title
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let mut log_filter = None;
        let mut help = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--tab" => tab = parse_tab(require_value(args, "--tab")?)?,
                "--title" => {
                    let value = require_value(args, "--title")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyTitle);
                    }
                    title = value;
                }
                "--log" => log_filter = Some(require_value(args, "--log")?),
                "--help" | "-h" => help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            tab,
            title,
            log_filter,
            help,
        })
    }
}

fn init_tracing(log_filter: Option<&str>) {
    let filter = match log_filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(log_fmt::layer())
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, EnvDefaults::from_env()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if parsed.help {
        print_usage();
        return Ok(());
    }

    init_tracing(parsed.log_filter.as_deref());
    info!(tab = %parsed.tab, title = %parsed.title, "launching assignment window");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        title: parsed.title.clone(),
        initial_section: parsed.tab,
        clock: Clock::default_clock(),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(parsed.title)
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
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str], env: EnvDefaults) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse(&mut iter, env)
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let args = parse(&[], EnvDefaults::default()).expect("parse");
        assert_eq!(args.tab, SectionId::Theoretical);
        assert_eq!(args.title, DEFAULT_TITLE);
        assert_eq!(args.log_filter, None);
        assert!(!args.help);
    }

    #[test]
    fn flags_override_environment() {
        let env = EnvDefaults {
            tab: Some("ethical".into()),
            title: Some("From env".into()),
        };
        let args = parse(&["--tab", "Bonus", "--title", "Week 4"], env).expect("parse");
        assert_eq!(args.tab, SectionId::Bonus);
        assert_eq!(args.title, "Week 4");
    }

    #[test]
    fn environment_fills_in_missing_flags() {
        let env = EnvDefaults {
            tab: Some("practical".into()),
            title: Some("   ".into()),
        };
        let args = parse(&["--log", "debug"], env).expect("parse");
        assert_eq!(args.tab, SectionId::Practical);
        assert_eq!(args.title, DEFAULT_TITLE);
        assert_eq!(args.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn rejects_unknown_tab() {
        let err = parse(&["--tab", "summary"], EnvDefaults::default()).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidTab { ref raw, .. } if raw == "summary"));
        assert!(err.to_string().contains("unknown section id"));
    }

    #[test]
    fn rejects_missing_value_and_unknown_flags() {
        let err = parse(&["--tab"], EnvDefaults::default()).unwrap_err();
        assert!(matches!(err, ArgsError::MissingValue { flag: "--tab" }));

        let err = parse(&["--deck-id", "1"], EnvDefaults::default()).unwrap_err();
        assert!(matches!(err, ArgsError::UnknownArg(ref arg) if arg == "--deck-id"));
    }

    #[test]
    fn help_flag_is_recorded() {
        let args = parse(&["-h"], EnvDefaults::default()).expect("parse");
        assert!(args.help);
    }
}
