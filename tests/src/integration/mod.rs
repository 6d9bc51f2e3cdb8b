//! Integration flows between ledger-02 (wallets) and ledger-01 (network).

pub mod flows;
