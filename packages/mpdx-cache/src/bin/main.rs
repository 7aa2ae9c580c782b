use anyhow::Result;

fn main() -> Result<()> {
    mpdx_cache::cli::run_cli()
}
