// passgen state managers
// Managers hold per-session state: the recent-results ledger.

pub mod history_manager;
