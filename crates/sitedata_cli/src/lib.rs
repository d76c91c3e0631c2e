//! Command-line plumbing shared by the `manage-news` and `manage-members`
//! binaries.
//!
//! # Responsibility
//! - Parse logging flags and start file logging when requested.
//! - Turn Ctrl-C into an immediate unsaved exit.
//! - Report how a session ended once the console loop returns.

use anyhow::Context;
use clap::Args;
use log::info;
use sitedata_core::{default_log_level, init_logging, SessionOutcome};
use std::path::PathBuf;

mod interrupt;

pub use interrupt::{install_interrupt_handler, write_interrupt_notice};

/// Logging flags common to both tools.
#[derive(Debug, Args)]
pub struct LoggingArgs {
    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "SITEDATA_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error (default: debug in debug builds, info otherwise)
    #[arg(long, env = "SITEDATA_LOG_LEVEL", value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl LoggingArgs {
    /// Starts file logging for `app` if a log directory was given.
    pub fn init(&self, app: &str) -> anyhow::Result<()> {
        let Some(log_dir) = &self.log_dir else {
            return Ok(());
        };
        let level = self.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(app, level, log_dir)
            .with_context(|| format!("cannot start logging in `{}`", log_dir.display()))
    }
}

/// Records the session outcome. Every outcome is a normal exit.
pub fn finish(app: &str, outcome: SessionOutcome) {
    info!("event=app_exit module=cli app={app} outcome={outcome:?}");
}

#[cfg(test)]
mod tests {
    use super::LoggingArgs;

    #[test]
    fn logging_stays_off_without_directory() {
        let args = LoggingArgs {
            log_dir: None,
            log_level: Some("nonsense".to_string()),
        };
        assert!(args.init("manage-news").is_ok());
    }
}
