//! On-disk state: the ledger file, the persisted overtime balance and the
//! internal audit log.

pub mod audit;
pub mod balance;
pub mod codec;
mod fs_utils;
pub mod store;

use crate::config::Config;
use crate::utils::path::{expand_tilde, sibling_of};
use audit::AuditLog;
use balance::BalanceFile;
use store::LedgerStore;

/// The set of files one session works on.
#[derive(Debug, Clone)]
pub struct LedgerFiles {
    pub store: LedgerStore,
    pub balance: BalanceFile,
    pub audit: AuditLog,
}

impl LedgerFiles {
    /// Balance and audit files are resolved next to the ledger unless
    /// configured with an absolute path.
    pub fn from_config(cfg: &Config) -> Self {
        let ledger = expand_tilde(&cfg.ledger);
        let balance = sibling_of(&ledger, &cfg.balance_file);
        let audit = sibling_of(&ledger, &cfg.audit_log);

        Self {
            store: LedgerStore::new(ledger),
            balance: BalanceFile::new(balance),
            audit: AuditLog::new(audit),
        }
    }
}
