use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use gh_tagger::cli::{self, create, CommonArgs};
use gh_tagger::domain::parse_requests;
use gh_tagger::{logging, ui, TaggerError};

#[derive(clap::Parser)]
#[command(
    name = "gh-tag-creator",
    version,
    about = "Create tags in multiple GitHub repositories",
    long_about = "Creates tags in multiple repositories. Each tag is created on the latest \
commit of the repository's default branch. Requires GITHUB_TOKEN.\n\n\
Expects lines of the form 'github.com/org/repo v1.2.3' on stdin, for example \
the output of gh-tag-fetcher:\n\n  \
GITHUB_TOKEN=my-token gh-tag-fetcher my-org | gh-tag-creator\n  \
cat repo-list.txt | gh-tag-creator"
)]
struct Args {
    #[arg(short, long, help = "Don't ask for confirmation")]
    yes: bool,

    #[arg(long, help = "Resolve commits without creating any tag")]
    dry_run: bool,

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

    let lines = io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<String>>>()?;
    let requests = parse_requests(&lines, &config.host)?;

    let resolved = create::resolve_requests(&client, requests)?;

    if !args.yes && !args.dry_run {
        println!();
        for tag in &resolved {
            println!("{}", tag.to_line(&config.host));
        }
        println!();

        if !ui::confirm_on_terminal("Do you want to create the tags listed above?")? {
            return Err(TaggerError::aborted("tag creation declined").into());
        }
    }

    for outcome in create::create_tags(&client, &resolved, args.dry_run)? {
        let verb = if outcome.dry_run { "Would create" } else { "Created" };
        ui::display_success(&format!(
            "{} {} in {} on {} (SHA: {})",
            verb, outcome.created.ref_name, outcome.repo, outcome.branch, outcome.created.sha
        ));
    }

    Ok(())
}
