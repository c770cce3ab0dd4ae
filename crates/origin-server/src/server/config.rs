use anyhow::bail;
use clap::Parser;
use origin_core::DEFAULT_BACKGROUND;
use std::path::PathBuf;

/// Runtime configuration for the `origin-server` binary.
///
/// All values are parsed from CLI arguments or environment variables (a
/// `.env` file in the working directory is loaded first), with defaults that
/// match a single-host deployment.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "origin-server",
    version,
    about = "An HTTP service rendering certificate-of-origin PDFs"
)]
pub struct CliArgs {
    /// Address to listen on.
    ///
    /// Example: "0.0.0.0:8000" or "127.0.0.1:3000"
    ///
    /// Environment variable: `SERVER_ADDR`
    #[arg(long, env = "SERVER_ADDR", default_value_t = String::from("0.0.0.0:8000"))]
    pub server_addr: String,

    /// Plain-text file holding the next certificate number.
    ///
    /// Created on first use. Its directory must already exist.
    ///
    /// Environment variable: `COUNTER_FILE`
    #[arg(long, env = "COUNTER_FILE", default_value = "counter.txt")]
    pub counter_file: PathBuf,

    /// Scanned blank form drawn under the fields.
    ///
    /// A missing or unreadable image does not stop the service; each
    /// certificate then carries an error line in place of the background.
    ///
    /// Environment variable: `BACKGROUND_IMAGE`
    #[arg(long, env = "BACKGROUND_IMAGE", default_value = DEFAULT_BACKGROUND)]
    pub background_image: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_addr: String,
    pub counter_file: PathBuf,
    pub background_image: PathBuf,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.server_addr.trim().is_empty() {
            bail!("SERVER_ADDR must not be empty");
        }

        if args.counter_file.as_os_str().is_empty() {
            bail!("COUNTER_FILE must not be empty");
        }

        if args.counter_file.is_dir() {
            bail!(
                "COUNTER_FILE ({}) is a directory",
                args.counter_file.display()
            );
        }

        if let Some(parent) = args.counter_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                bail!(
                    "COUNTER_FILE directory ({}) does not exist",
                    parent.display()
                );
            }
        }

        Ok(Self {
            server_addr: args.server_addr,
            counter_file: args.counter_file,
            background_image: args.background_image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(counter_file: PathBuf) -> CliArgs {
        CliArgs {
            server_addr: "127.0.0.1:0".into(),
            counter_file,
            background_image: DEFAULT_BACKGROUND.into(),
        }
    }

    #[test]
    fn defaults_parse() {
        let args = CliArgs::try_parse_from(["origin-server"]).unwrap();
        assert_eq!(args.counter_file, PathBuf::from("counter.txt"));
        assert_eq!(args.background_image, PathBuf::from(DEFAULT_BACKGROUND));
        assert!(ServerConfig::try_from(args).is_ok());
    }

    #[test]
    fn rejects_missing_counter_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServerConfig::try_from(args(dir.path().join("nope").join("counter.txt")))
            .unwrap_err();
        assert!(err.to_string().contains("does not exist"), "{err}");
    }

    #[test]
    fn rejects_directory_as_counter_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ServerConfig::try_from(args(dir.path().to_path_buf())).is_err());
    }

    #[test]
    fn accepts_counter_in_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig::try_from(args(dir.path().join("counter.txt"))).unwrap();
        assert_eq!(config.counter_file, dir.path().join("counter.txt"));
    }
}
