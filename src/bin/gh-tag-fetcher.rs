use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use gh_tagger::cli::{self, fetch, CommonArgs};
use gh_tagger::domain::VersionBump;
use gh_tagger::{logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "gh-tag-fetcher",
    version,
    about = "Propose the next semantic version tag for every repository of a GitHub organization",
    long_about = "Fetches all repositories from a GitHub organization and their latest semantic \
version tag, then prints each repository together with the bumped version. \
Control how the version is bumped with --bump. Requires GITHUB_TOKEN.\n\n\
The output is the input of gh-tag-creator:\n\n  \
GITHUB_TOKEN=my-token gh-tag-fetcher my-org | gh-tag-creator"
)]
struct Args {
    #[arg(help = "GitHub organization")]
    org: String,

    #[arg(short, long, value_enum, help = "Version bump [default: minor]")]
    bump: Option<VersionBump>,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.common.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let (config, client) = cli::connect(&args.common)?;
    let bump = cli::effective_bump(args.bump, &config);

    let proposals = fetch::fetch_proposals(&client, &args.org, bump)?;

    // Review table only reaches the log stream
    for line in ui::format_review_table(&proposals, &config.host) {
        tracing::info!("{}", line);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for proposal in &proposals {
        writeln!(out, "{}", proposal.to_line(&config.host))?;
    }
    out.flush()?;

    Ok(())
}
