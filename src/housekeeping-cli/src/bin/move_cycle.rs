use anyhow::Result;
use housekeeping_cli::cli::{parse_or_exit, MoveCycleCli};
use housekeeping_cli::{commands, logging};

fn main() -> Result<()> {
    let cli: MoveCycleCli = parse_or_exit();
    logging::init(cli.verbose);

    commands::cycle::handle(&cli)?;

    Ok(())
}
