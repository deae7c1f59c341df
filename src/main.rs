//! Segment Builder - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Segment Builder - name a segment, pick its schemas, submit it
#[derive(Parser, Debug)]
#[command(name = "segment-builder")]
#[command(version)]
#[command(about = "Terminal form for building and submitting user segments")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// URL the finished segment is POSTed to
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = segment_builder::config::load_config_with_precedence(args.config.clone())?;
        let merged = segment_builder::config::merge_config(config_file);
        let with_env = segment_builder::config::apply_env_overrides(merged);
        segment_builder::config::apply_cli_overrides(with_env, args.endpoint.clone(), args.timeout)
    };
    segment_builder::config::validate(&config)?;

    segment_builder::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    segment_builder::view::run_with_config(&config)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["segment-builder", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["segment-builder", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["segment-builder"]);
        assert_eq!(args.config, None);
        assert_eq!(args.endpoint, None);
        assert_eq!(args.timeout, None);
    }

    #[test]
    fn test_endpoint_and_timeout_flags() {
        let args = Args::parse_from([
            "segment-builder",
            "--endpoint",
            "https://segments.example/api",
            "--timeout",
            "5",
        ]);
        assert_eq!(args.endpoint.as_deref(), Some("https://segments.example/api"));
        assert_eq!(args.timeout, Some(5));
    }

    #[test]
    fn test_timeout_rejects_zero() {
        let result = Args::try_parse_from(["segment-builder", "--timeout", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_path_flag() {
        let args = Args::parse_from(["segment-builder", "--config", "/tmp/sb.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/sb.toml")));
    }
}
