#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use ticker_timeline::TimelineConfig;

use crate::error::{DemoError, Result};
use crate::logging;
use crate::session::{Session, SessionOptions, run_for};

#[derive(Debug, Parser)]
#[command(
    name = "ticker-demo",
    about = "Scroll a post timeline in the terminal",
    version
)]
pub struct Cli {
    /// JSON file holding an array of posts, or an error payload.
    #[arg(long)]
    pub posts: PathBuf,

    /// Timeline TOML configuration. Defaults apply when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// How long to run, in seconds.
    #[arg(long, default_value_t = 10)]
    pub seconds: u64,

    /// Delay between frames, in milliseconds.
    #[arg(long, default_value_t = 50)]
    pub frame_ms: u64,

    /// Toggle hover every N seconds to show pause and resume. 0 disables.
    #[arg(long, default_value_t = 3)]
    pub hover_every: u64,

    /// Separate frames with blank lines instead of clearing the screen.
    #[arg(long)]
    pub plain: bool,

    /// Emit logs as JSON lines on stderr.
    #[arg(long)]
    pub log_json: bool,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_json)?;
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    if cli.frame_ms == 0 {
        return Err(DemoError::invalid("--frame-ms must be > 0"));
    }
    let config = match &cli.config {
        Some(path) => TimelineConfig::from_toml_file(path)?,
        None => TimelineConfig::default(),
    };
    let options = SessionOptions {
        hover_every: (cli.hover_every > 0).then(|| Duration::from_secs(cli.hover_every)),
        plain: cli.plain,
    };
    tracing::info!(posts = %cli.posts.display(), seconds = cli.seconds, "demo.start");
    let mut session = Session::start(config, &cli.posts, options)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_for(
        &mut session,
        Duration::from_secs(cli.seconds),
        Duration::from_millis(cli.frame_ms),
        &mut out,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn cli(posts: PathBuf) -> Cli {
        Cli::try_parse_from([
            "ticker-demo".into(),
            "--posts".into(),
            posts.into_os_string(),
            "--seconds".into(),
            "0".into(),
            "--plain".into(),
        ])
        .unwrap()
    }

    #[test]
    fn parses_defaults() {
        let cli = cli(PathBuf::from("posts.json"));
        assert_eq!(cli.frame_ms, 50);
        assert_eq!(cli.hover_every, 3);
        assert!(cli.config.is_none());
        assert!(!cli.log_json);
    }

    #[test]
    fn posts_flag_is_required() {
        assert!(Cli::try_parse_from(["ticker-demo"]).is_err());
    }

    #[test]
    fn zero_frame_delay_is_rejected() {
        let mut cli = cli(PathBuf::from("posts.json"));
        cli.frame_ms = 0;
        let err = run(cli).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn invalid_config_file_fails() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("timeline.toml");
        std::fs::write(&config, "lanes = 0\n").unwrap();
        let mut cli = cli(dir.path().join("posts.json"));
        cli.config = Some(config);
        let err = run(cli).unwrap_err();
        assert!(matches!(err, DemoError::Config(_)));
    }

    #[test]
    fn failure_payload_exits_with_fetch_code() {
        let dir = tempdir().unwrap();
        let posts = dir.path().join("posts.json");
        std::fs::write(&posts, r#"{"error": "no_account", "message": "unknown user"}"#).unwrap();
        let err = run(cli(posts)).unwrap_err();
        assert_eq!(err.to_string(), "could not load posts: no_account: unknown user");
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn runs_to_completion() {
        let dir = tempdir().unwrap();
        let posts = dir.path().join("posts.json");
        std::fs::write(&posts, r#"[{"text": "hello"}]"#).unwrap();
        assert!(run(cli(posts)).is_ok());
    }
}
