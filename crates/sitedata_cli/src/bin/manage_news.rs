//! Interactive editor for the news and travel data file.

use anyhow::Context;
use clap::Parser;
use sitedata_cli::{finish, install_interrupt_handler, LoggingArgs};
use sitedata_core::service::news_service::local_today;
use sitedata_core::{
    core_version, run_news_session, Console, NewsDocument, NewsService, YamlFileRepository,
};
use std::io;
use std::path::PathBuf;

const APP: &str = "manage-news";

#[derive(Parser)]
#[command(author, version = core_version(), about, long_about = None)]
struct Cli {
    /// News document to edit
    #[arg(long, env = "SITEDATA_NEWS_FILE", default_value = "_data/news.yml")]
    data_file: PathBuf,

    #[command(flatten)]
    logging: LoggingArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.logging.init(APP)?;

    let repo = YamlFileRepository::<NewsDocument>::new(&cli.data_file);
    let mut service = NewsService::open(repo)
        .with_context(|| format!("cannot load `{}`", cli.data_file.display()))?;

    install_interrupt_handler(APP)?;
    // Stdout stays unlocked so the interrupt listener can print its notice.
    let mut console = Console::new(io::stdin().lock(), io::stdout());
    let outcome = run_news_session(&mut console, &mut service, local_today())?;
    finish(APP, outcome);
    Ok(())
}
