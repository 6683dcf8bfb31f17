use anyhow::{bail, Result};
use housekeeping_cli::cli::{parse_or_exit, ScaleDamageCli};
use housekeeping_cli::{commands, logging};

fn main() -> Result<()> {
    let cli: ScaleDamageCli = parse_or_exit();
    logging::init(cli.verbose);

    let summary = commands::damage::handle(&cli)?;
    if summary.has_failures() {
        bail!("{} file(s) could not be rescaled", summary.files_failed);
    }

    Ok(())
}
