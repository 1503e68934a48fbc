use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use dioxus::LaunchBuilder;
use tracing_subscriber::{fmt as tracing_fmt, EnvFilter};

use backpack_core::Clock;
use services::{
    AppServices, AuthService, DashboardService, ExamService, LessonService, SubjectService,
    SummaryService,
};
use storage::FileSessionStore;
use ui::{build_app_context, App, UiApp};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
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

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--session-file <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url http://localhost:8080");
    eprintln!("  --session-file backpack-session.json");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  BACKPACK_API_URL, BACKPACK_SESSION_FILE");
}

struct Args {
    api_url: String,
    session_file: PathBuf,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api_url =
            std::env::var("BACKPACK_API_URL").unwrap_or_else(|_| "http://localhost:8080".into());
        let mut session_file = std::env::var("BACKPACK_SESSION_FILE")
            .map_or_else(|_| PathBuf::from("backpack-session.json"), PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    if value.trim().is_empty() || !value.starts_with("http") {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    api_url = value;
                }
                "--session-file" => {
                    let value = require_value(args, "--session-file")?;
                    session_file = PathBuf::from(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            api_url,
            session_file,
        })
    }
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn auth(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn subjects(&self) -> Arc<SubjectService> {
        self.services.subjects()
    }

    fn lessons(&self) -> Arc<LessonService> {
        self.services.lessons()
    }

    fn summaries(&self) -> Arc<SummaryService> {
        self.services.summaries()
    }

    fn dashboard(&self) -> Arc<DashboardService> {
        self.services.dashboard()
    }

    fn exams(&self) -> Arc<ExamService> {
        self.services.exams()
    }
}

/// Make sure the session file's directory exists before the first save.
fn prepare_session_file(path: &Path) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|err| {
        eprintln!("{err}");
        print_usage();
        err
    })?;

    prepare_session_file(&parsed.session_file)?;

    let store = Arc::new(FileSessionStore::new(parsed.session_file));
    let services = AppServices::new_http(&parsed.api_url, store, Clock::default_clock())?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // Explicitly not always-on-top: some dev setups default to a modal-like
    // window otherwise.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Backpack")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
