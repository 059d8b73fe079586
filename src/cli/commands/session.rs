use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ledger::LedgerFiles;
use std::io;

/// Run the interactive session on stdin.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let files = LedgerFiles::from_config(cfg);
    let stdin = io::stdin();
    let mut session = Session::new(cfg, &files, stdin.lock());
    session.run()
}
