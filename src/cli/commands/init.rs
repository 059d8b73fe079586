use crate::config::Config;
use crate::errors::AppResult;
use crate::ledger::LedgerFiles;
use crate::ui::messages::{info, success};

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the ledger file with its header row, if missing
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if cli.test {
        info("Test mode: configuration file left untouched.");
    } else {
        let path = cfg.save()?;
        success(format!("Config file : {}", path.display()));
    }

    let files = LedgerFiles::from_config(cfg);
    if files.store.ensure_created()? {
        success(format!("Ledger created at {}", files.store.path().display()));
        files.audit.note(
            "init",
            &files.store.path().display().to_string(),
            "Ledger initialized",
        );
    } else {
        info(format!(
            "Ledger already exists at {}",
            files.store.path().display()
        ));
    }

    Ok(())
}
