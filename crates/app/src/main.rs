use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing::info;
use tracing_subscriber::EnvFilter;

use services::{
    CameraAccess, CameraService, Clock, ModuleCatalog, ModuleSessionService, SimulatedCamera,
    UnavailableCamera,
};
use storage::repository::Storage;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCamera { raw: String },
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCamera { raw } => {
                write!(f, "invalid --camera value: {raw} (expected sim or none)")
            }
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
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

/// Which `CameraAccess` implementation backs the live path.
///
/// Desktop builds have no rear camera to capture, so the simulated feed
/// is the default; `none` exercises the denial and fallback flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CameraBackend {
    Simulated,
    None,
}

impl CameraBackend {
    fn from_arg(raw: &str) -> Option<Self> {
        match raw {
            "sim" | "simulated" => Some(Self::Simulated),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

struct DesktopApp {
    sessions: Arc<ModuleSessionService>,
    camera: Arc<CameraService>,
}

impl UiApp for DesktopApp {
    fn sessions(&self) -> Arc<ModuleSessionService> {
        Arc::clone(&self.sessions)
    }

    fn camera(&self) -> Arc<CameraService> {
        Arc::clone(&self.camera)
    }
}

struct Args {
    db_url: String,
    camera: CameraBackend,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] [--camera <sim|none>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite://dashtour.sqlite3");
    eprintln!("  --camera sim");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DASHTOUR_DB_URL, DASHTOUR_CAMERA");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("DASHTOUR_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://dashtour.sqlite3".into(), normalize_sqlite_url);
        let mut camera = std::env::var("DASHTOUR_CAMERA")
            .ok()
            .and_then(|value| CameraBackend::from_arg(&value))
            .unwrap_or(CameraBackend::Simulated);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--camera" => {
                    let value = require_value(args, "--camera")?;
                    camera = CameraBackend::from_arg(&value)
                        .ok_or(ArgsError::InvalidCamera { raw: value.clone() })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url, camera })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so
    // core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let storage = Storage::sqlite(&parsed.db_url).await?;

    let clock = Clock::default_clock();
    let catalog = Arc::new(ModuleCatalog::builtin()?);
    info!(
        modules = catalog.total_modules(),
        camera = ?parsed.camera,
        "dashtour starting"
    );

    let sessions = Arc::new(ModuleSessionService::new(
        clock,
        Arc::clone(&catalog),
        Arc::clone(&storage.progress),
    ));

    let access: Arc<dyn CameraAccess> = match parsed.camera {
        CameraBackend::Simulated => Arc::new(SimulatedCamera::new()),
        CameraBackend::None => Arc::new(UnavailableCamera::new()),
    };
    let camera = Arc::new(CameraService::new(access, Arc::clone(&storage.camera_prefs)));

    let app = DesktopApp { sessions, camera };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("DashTour")
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
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
