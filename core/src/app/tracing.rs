#![allow(dead_code)]

use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Builds and installs the global tracing subscriber of an application.
///
/// Console output goes to stderr, filtered by `CONSOLE_LOG` unless a console filter is given. With the
/// `app_tracing_file` feature, output can additionally go to a log file, filtered by `FILE_LOG`.
#[derive(Default)]
pub struct AppTracingBuilder {
  console_filter: Option<EnvFilter>,
  default_directive: Option<String>,
  log_file_path: Option<PathBuf>,
  file_filter: Option<EnvFilter>,
}
impl AppTracingBuilder {
  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Some(console_filter);
    self
  }

  /// Directive used for filters whose environment variable is unset or invalid, e.g. `"opt_core=debug"`.
  pub fn with_default_directive(mut self, directive: impl Into<String>) -> Self {
    self.default_directive = Some(directive.into());
    self
  }

  pub fn with_log_file_path(mut self, log_file_path: impl Into<PathBuf>) -> Self {
    self.log_file_path = Some(log_file_path.into());
    self
  }
  pub fn with_log_file_path_opt(mut self, log_file_path: Option<impl Into<PathBuf>>) -> Self {
    self.log_file_path = log_file_path.map(Into::into);
    self
  }
  pub fn with_file_filter(mut self, file_filter: EnvFilter) -> Self {
    self.file_filter = Some(file_filter);
    self
  }

  fn env_filter(default_directive: Option<&str>, env: &str) -> EnvFilter {
    EnvFilter::try_from_env(env).unwrap_or_else(|_| match default_directive {
      Some(directive) => EnvFilter::new(directive),
      None => EnvFilter::default(),
    })
  }

  /// Installs the subscriber. Keep the returned [`AppTracing`] alive for as long as events should be written.
  ///
  /// # Panics
  ///
  /// Panics if a global subscriber was already installed.
  pub fn build(self) -> AppTracing {
    let default_directive = self.default_directive.as_deref();
    let console_filter = self.console_filter
      .unwrap_or_else(|| Self::env_filter(default_directive, "CONSOLE_LOG"));
    let file = self.log_file_path.map(|path| {
      let filter = self.file_filter.unwrap_or_else(|| Self::env_filter(default_directive, "FILE_LOG"));
      (path, filter)
    });
    AppTracing::new(console_filter, file)
  }
}

pub struct AppTracing {
  _file_tracing: FileTracing,
}
#[cfg(feature = "app_tracing_file")]
#[derive(Default)]
struct FileTracing(Option<tracing_appender::non_blocking::WorkerGuard>);
#[cfg(not(feature = "app_tracing_file"))]
#[derive(Default)]
struct FileTracing;

impl AppTracing {
  fn new(console_filter: EnvFilter, file: Option<(PathBuf, EnvFilter)>) -> Self {
    let layered = tracing_subscriber::registry()
      .with(tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(console_filter)
      );

    let Some((file_path, file_filter)) = file else {
      layered.init();
      return Self { _file_tracing: FileTracing::default() };
    };

    #[cfg(feature = "app_tracing_file")] {
      match create_log_file(&file_path) {
        Err(e) => {
          layered.init();
          tracing::warn!("Cannot log to file; could not truncate/create and open log file '{}' for writing: {}", file_path.display(), e);
          Self { _file_tracing: FileTracing::default() }
        }
        Ok(log_file) => {
          let (non_blocking, guard) = tracing_appender::non_blocking(std::io::BufWriter::new(log_file));
          layered
            .with(tracing_subscriber::fmt::layer()
              .with_writer(non_blocking)
              .with_ansi(false)
              .with_filter(file_filter)
            )
            .init();
          Self { _file_tracing: FileTracing(Some(guard)) }
        }
      }
    }
    #[cfg(not(feature = "app_tracing_file"))] {
      let _ = file_filter;
      layered.init();
      tracing::warn!("Cannot log to file '{}'; file logging is not enabled", file_path.display());
      Self { _file_tracing: FileTracing::default() }
    }
  }
}

#[cfg(feature = "app_tracing_file")]
fn create_log_file(file_path: &std::path::Path) -> std::io::Result<std::fs::File> {
  if let Some(parent) = file_path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::File::create(file_path)
}
