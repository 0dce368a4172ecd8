use std::fmt::{self, Write as _};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "fakeinput=info";

pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
    warnings: Option<Receiver<String>>,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Warnings and errors, for the demo's status area.
    pub fn take_warnings(&mut self) -> Option<Receiver<String>> {
        self.warnings.take()
    }
}

/// Renders `message` first, then the remaining fields as `name=value`.
#[derive(Default)]
struct StatusLine {
    message: String,
    fields: String,
}

impl Visit for StatusLine {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }
}

/// Forwards WARN and ERROR events to the status area; the log file gets everything.
struct StatusLayer {
    tx: Sender<String>,
}

impl<S> Layer<S> for StatusLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = *event.metadata().level();
        if level > Level::WARN {
            return;
        }
        let mut line = StatusLine::default();
        event.record(&mut line);
        let _ = self.tx.send(format!("{level} {}{}", line.message, line.fields));
    }
}

/// Daily-rolling file under the temp dir; `RUST_LOG` overrides the filter.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = std::env::temp_dir().join("fakeinput").join("logs");
    std::fs::create_dir_all(&log_dir).ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "fakeinput.log");
    let (file, guard) = tracing_appender::non_blocking(file_appender);
    let (tx, rx) = mpsc::channel();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file)
                .with_ansi(false),
        )
        .with(StatusLayer { tx })
        .try_init()
        .ok()?;

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(panic = %panic_info, "panic");
        previous(panic_info);
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
        warnings: Some(rx),
    })
}
