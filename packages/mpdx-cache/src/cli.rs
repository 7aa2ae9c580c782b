pub(crate) use crate::commands::replay;
use clap::{Parser, Subcommand};
use mpdx_cache_lib::config::CacheArgs;

#[derive(Parser, Debug)]
#[clap(
    name = "mpdx-cache",
    about = "MPDX cache tooling",
    version,
    rename_all = "kebab-case"
)]
pub struct Opt {
    #[clap(subcommand)]
    command: Cache,
}

#[derive(Debug, Subcommand)]
pub enum Cache {
    /// Replay recorded page responses through a cache store.
    Replay(CacheArgs),
}

pub fn run_cli() -> anyhow::Result<()> {
    let opt = Opt::try_parse();

    match opt {
        Ok(opt) => match opt.command {
            Cache::Replay(args) => replay::exec(args),
        },
        Err(e) => {
            // Prints the error and exits.
            e.exit()
        }
    }
}
