use std::{fs::File, path::PathBuf, sync::Mutex};

use anyhow::Context;
use clap::ArgAction;

/// Placeholder endpoint. Deployments point `--url` or `NEWSREEL_URL` at a real feed.
pub const DEFAULT_FEED_URL: &str = "https://example.com/api/news.json";

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// URL of the JSON news feed. The built-in default is a placeholder that
    /// serves no feed, so set this (or NEWSREEL_URL) to a real endpoint
    #[arg(long, env = "NEWSREEL_URL", default_value = DEFAULT_FEED_URL)]
    pub url: String,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file. Nothing is logged otherwise, since the
    /// terminal belongs to the UI.
    #[arg(long, env = "NEWSREEL_LOG")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn setup_logging(&self) -> anyhow::Result<()> {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let Some(path) = &self.log_file else {
            return Ok(());
        };
        let file = File::create(path)
            .with_context(|| format!("failed to create log file '{}'", path.display()))?;

        let filter = tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(level_for(self.verbose).into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
        Ok(())
    }
}

fn level_for(verbosity: u8) -> tracing::Level {
    match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn url_override() {
        let cli = Cli::try_parse_from(["newsreel", "--url", "http://localhost:9000/feed"])
            .expect("parse");
        assert_eq!(cli.url, "http://localhost:9000/feed");
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn help_flags_default_url_as_placeholder() {
        use clap::CommandFactory;

        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("placeholder"), "{help}");
        assert!(help.contains("NEWSREEL_URL"), "{help}");
        assert!(help.contains(DEFAULT_FEED_URL), "{help}");
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::try_parse_from(["newsreel", "-vv", "--url", "http://x"]).expect("parse");
        assert_eq!(cli.verbose, 2);
        assert_eq!(level_for(cli.verbose), tracing::Level::DEBUG);
        assert_eq!(level_for(0), tracing::Level::WARN);
        assert_eq!(level_for(9), tracing::Level::TRACE);
    }
}
