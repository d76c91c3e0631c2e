//! Interactive editor for the research group member data file.

use anyhow::Context;
use clap::Parser;
use sitedata_cli::{finish, install_interrupt_handler, LoggingArgs};
use sitedata_core::{
    core_version, run_member_session, Console, MemberDocument, MemberService, YamlFileRepository,
};
use std::io;
use std::path::PathBuf;

const APP: &str = "manage-members";

#[derive(Parser)]
#[command(author, version = core_version(), about, long_about = None)]
struct Cli {
    /// Group member document to edit
    #[arg(
        long,
        env = "SITEDATA_MEMBERS_FILE",
        default_value = "_data/group_members.yml"
    )]
    data_file: PathBuf,

    #[command(flatten)]
    logging: LoggingArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.logging.init(APP)?;

    let repo = YamlFileRepository::<MemberDocument>::new(&cli.data_file);
    let mut service = MemberService::open(repo)
        .with_context(|| format!("cannot load `{}`", cli.data_file.display()))?;

    install_interrupt_handler(APP)?;
    // Stdout stays unlocked so the interrupt listener can print its notice.
    let mut console = Console::new(io::stdin().lock(), io::stdout());
    let outcome = run_member_session(&mut console, &mut service)?;
    finish(APP, outcome);
    Ok(())
}
