//! Process-wide logging runtime: initialization and facade acquisition.
//!
//! # Responsibilities
//! - Build the tracing subscriber from the loaded configuration
//! - Record the output format chosen at startup
//! - Hand out facades; degraded ones before initialization
//!
//! # Design Decisions
//! - Initialization failures are reported to stderr and leave the runtime
//!   uninitialized; acquisition afterwards reports "not initialized" and
//!   returns a no-op facade instead of an error

use std::path::Path;
use std::sync::OnceLock;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::schema::config_path_from_env;
use crate::config::{loader, LoggingConfig, OutputFormat};
use crate::logging::activity::ActivityLogger;
use crate::logging::leveled::AppLogger;

struct Runtime {
    format: OutputFormat,
}

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Initialize from the environment: format selector plus configuration
/// file path, with the bundled default as fallback.
pub fn init() {
    let format = OutputFormat::from_env();
    let path = config_path_from_env();
    let config = loader::load_or_default(Path::new(&path));
    init_with(format, &config);
}

/// Initialize with explicit settings. Reported but non-fatal on failure.
pub fn init_with(format: OutputFormat, config: &LoggingConfig) {
    let filter = match EnvFilter::try_new(config.filter_directives()) {
        Ok(filter) => filter,
        Err(err) => {
            eprintln!(
                "corrlog: invalid filter directives {:?}: {}",
                config.filter_directives(),
                err
            );
            EnvFilter::new("info")
        }
    };

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
    {
        eprintln!("corrlog: failed to initialize logging backend: {}", err);
        return;
    }

    let _ = RUNTIME.set(Runtime { format });
}

pub fn is_initialized() -> bool {
    RUNTIME.get().is_some()
}

/// Output format fixed at initialization; `Text` before init.
pub fn output_format() -> OutputFormat {
    RUNTIME.get().map(|r| r.format).unwrap_or_default()
}

/// Acquire a leveled logger. Degraded (silently inert) when the runtime is
/// not initialized.
pub fn get_logger(name: &str) -> AppLogger {
    if is_initialized() {
        AppLogger::new(name)
    } else {
        eprintln!("corrlog: logging runtime is not initialized, see earlier errors");
        AppLogger::disabled(name)
    }
}

/// Acquire an MDAL activity logger. Degraded when the runtime is not
/// initialized.
pub fn get_mdal_logger(name: &str) -> ActivityLogger {
    if is_initialized() {
        ActivityLogger::new(name, output_format())
    } else {
        eprintln!("corrlog: logging runtime is not initialized, see earlier errors");
        ActivityLogger::disabled(name)
    }
}
