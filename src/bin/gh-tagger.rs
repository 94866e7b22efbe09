use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use gh_tagger::cli::fetch::{self, FetchProgress};
use gh_tagger::cli::{self, interactive, CommonArgs};
use gh_tagger::domain::VersionBump;
use gh_tagger::{logging, ui, TaggerError};

#[derive(clap::Parser)]
#[command(
    name = "gh-tagger",
    version,
    about = "Interactively bump and create semantic version tags across a GitHub organization"
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
            match e.downcast_ref::<TaggerError>() {
                Some(TaggerError::Aborted(reason)) => {
                    ui::display_warning(&format!("{}, abort!", reason))
                }
                _ => ui::display_error(&format!("{:#}", e)),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let (config, client) = cli::connect(&args.common)?;
    let bump = cli::effective_bump(args.bump, &config);

    ui::display_status("Fetching repositories (might take a minute)...");
    let pb = ui::fetch_progress(0);
    let proposals = fetch::fetch_proposals_with(&client, &args.org, bump, |event| match event {
        FetchProgress::Listed(total) => pb.set_length(total as u64),
        FetchProgress::Proposed(proposal) => {
            pb.set_message(format!("Fetched {}", proposal.repo.name));
            pb.inc(1);
        }
    });
    pb.finish_and_clear();
    let proposals = proposals?;

    let outcomes = interactive::apply_selection(
        &client,
        &proposals,
        ui::select_repositories,
        ui::prompt_confirmation_phrase,
    )?;

    for outcome in outcomes {
        ui::display_success(&format!(
            "Created ref: {} in {} (SHA: {})",
            outcome.created.ref_name, outcome.repo, outcome.created.sha
        ));
    }

    Ok(())
}
