//! Workflow orchestration shared by the binaries
//!
//! Keeps CLI argument parsing in the binaries and the tagging logic here, so
//! the workflows run against any [HostingApi](crate::github::HostingApi).

pub mod create;
pub mod fetch;
pub mod interactive;

use crate::config::{self, Config};
use crate::domain::VersionBump;
use crate::error::Result;
use crate::github::GithubClient;

/// Flags every binary accepts
#[derive(clap::Args, Debug, Clone, Default, PartialEq)]
pub struct CommonArgs {
    #[arg(short, long, help = "Enable verbose output on stderr")]
    pub verbose: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    pub config: Option<String>,
}

/// Load configuration and build the API client from `GITHUB_TOKEN`.
///
/// Both steps run before any remote call so configuration errors surface first.
pub fn connect(common: &CommonArgs) -> Result<(Config, GithubClient)> {
    let config = config::load_config(common.config.as_deref())?;
    let token = config::read_token()?;
    let client = GithubClient::new(&token, &config.api_url, config.per_page)?;
    Ok((config, client))
}

/// Command-line bump wins over the configured default
pub fn effective_bump(cli: Option<VersionBump>, config: &Config) -> VersionBump {
    cli.unwrap_or(config.default_bump)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_bump() {
        let config = Config {
            default_bump: VersionBump::Patch,
            ..Config::default()
        };
        assert_eq!(effective_bump(None, &config), VersionBump::Patch);
        assert_eq!(
            effective_bump(Some(VersionBump::Major), &config),
            VersionBump::Major
        );
    }
}
