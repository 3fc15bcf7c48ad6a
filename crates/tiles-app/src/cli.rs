use std::path::PathBuf;

use clap::Parser;

/// Web Tiles: up to four web pages side by side in resizable tiles.
#[derive(Parser, Debug)]
#[command(name = "web-tiles", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override, e.g. `debug` or `web_tiles=trace`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Forget stored tile URLs, splitter sizes and flags before starting.
    #[arg(long)]
    pub reset_settings: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["web-tiles"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(!args.reset_settings);
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "web-tiles",
            "--config",
            "/tmp/tiles.toml",
            "--log-level",
            "debug",
            "--reset-settings",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/tiles.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.reset_settings);
    }

    #[test]
    fn unknown_flag_rejected() {
        assert!(Args::try_parse_from(["web-tiles", "--tiles", "5"]).is_err());
    }
}
