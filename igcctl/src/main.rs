use std::io;

use chrono::Utc;
use clap::{crate_authors, crate_description, crate_version, CommandFactory, Parser};
use clap_complete::generate;
use eyre::{eyre, Result};
use tracing::{info, trace};

use igcctl::{
    ingest_table, ingest_urls, list_fields, show_track, ListSubCommand, Opts, SubCommand,
};
use igcinfo_common::{init_logging, ConfigFile, Meta};
use igcinfo_engine::{IgcFetcher, Repository};

/// Binary name, using a different binary name
pub const NAME: &str = env!("CARGO_BIN_NAME");
/// Binary version
pub const VERSION: &str = crate_version!();
/// Authors
pub const AUTHORS: &str = crate_authors!();

#[tokio::main]
async fn main() -> Result<()> {
    let started = Utc::now();
    let opts = Opts::parse();

    // Initialise logging.
    //
    init_logging(NAME, opts.tree);

    let cfg = ConfigFile::load(opts.config.as_deref())?;

    // Banner
    //
    if opts.verbose > 0 {
        banner()?;
    }

    // Tracks only live as long as this process.
    //
    let fetcher = IgcFetcher::new(cfg.timeout(), cfg.user_agent.as_deref())?;
    let repo = Repository::new(fetcher).await?;

    let res = handle_subcmd(&repo, &cfg, &opts.subcmd, started).await;
    repo.shutdown();
    res
}

pub async fn handle_subcmd(
    repo: &Repository<IgcFetcher>,
    cfg: &ConfigFile,
    subcmd: &SubCommand,
    started: chrono::DateTime<Utc>,
) -> Result<()> {
    match subcmd {
        // Handle `ingest url...`
        //
        SubCommand::Ingest(iopts) => {
            trace!("ingest");

            let rows = ingest_urls(repo, &iopts.urls).await;
            let failed = rows.iter().filter(|r| r.failed()).count();
            if iopts.json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                println!("{}", ingest_table(&rows));
                let ids = repo.list_ids().await?;
                let ids = ids.iter().map(|id| id.to_string()).collect::<Vec<_>>();
                println!("Stored: [{}]", ids.join(", "));
            }
            if failed > 0 {
                return Err(eyre!("{failed} URL(s) could not be ingested"));
            }
        }

        // Handle `track -i id [-f field] url...`
        //
        SubCommand::Track(topts) => {
            trace!("track");

            let rows = ingest_urls(repo, &topts.urls).await;
            let failed = rows.iter().filter(|r| r.failed()).count();
            info!("{} URL(s) ingested, {failed} failed", rows.len() - failed);

            let out = show_track(repo, &topts.id, topts.field.as_deref(), topts.json).await?;
            println!("{}", out);
        }

        // Meta record of the service
        //
        SubCommand::Info => {
            let meta = Meta::new(started, &cfg.info, VERSION);
            println!("{}", serde_json::to_string_pretty(&meta)?);
        }

        // Standalone completion generation
        //
        // NOTE: you can generate UNIX shells completion on Windows and vice-versa.  Not worth
        //       trying to limit depending on the OS.
        //
        SubCommand::Completion(copts) => {
            let generator = copts.shell;
            generate(generator, &mut Opts::command(), NAME, &mut io::stdout());
        }

        // Standalone `list` command
        //
        SubCommand::List(lopts) => match lopts.cmd {
            ListSubCommand::Fields => {
                println!("{}", list_fields());
            }
        },

        // Standalone `version` command
        //
        SubCommand::Version => {
            eprintln!("{}/{}", NAME, VERSION);
            eprintln!("Modules: ");
            eprintln!("\t{}", igcinfo_common::version());
            eprintln!("\t{}", igcinfo_engine::version());
            eprintln!("\t{}", igcinfo_formats::version());
        }
    }
    Ok(())
}

/// Display banner
///
fn banner() -> Result<()> {
    Ok(eprintln!(
        r##"
{}/{} by {}
{}
"##,
        NAME,
        VERSION,
        AUTHORS,
        crate_description!()
    ))
}
