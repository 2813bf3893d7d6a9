use std::path::PathBuf;

use anyhow::Context;

const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory requested paths are resolved against.
    pub root: PathBuf,
}

impl Config {
    /// Builds the configuration from the process arguments and environment.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = Self::from_args(std::env::args().skip(1))?;
        if let Ok(host) = std::env::var("LISTEN_HOST") {
            cfg.host = host;
        }
        Ok(cfg)
    }

    /// Parses the positional `<port>` argument. The program name must already
    /// be stripped from `args`.
    pub fn from_args<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut args = args.into_iter();
        let port = args.next().context("missing <port> argument")?;
        let port = port
            .as_ref()
            .trim()
            .parse::<u16>()
            .with_context(|| format!("invalid port '{}'", port.as_ref()))?;

        Ok(Self {
            host: DEFAULT_HOST.to_string(),
            port,
            root: PathBuf::from("."),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
