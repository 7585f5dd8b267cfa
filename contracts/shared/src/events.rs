use soroban_sdk::{symbol_short, Symbol};

// Will lifecycle events
pub const WILL_CREATED: Symbol = symbol_short!("will_new");
pub const SHARE_VERIFIED: Symbol = symbol_short!("shr_ver");
pub const SHARE_REVEALED: Symbol = symbol_short!("shr_rev");
pub const WILL_EXECUTED: Symbol = symbol_short!("will_exec");

// Ownership events
pub const OWNERSHIP_DISTRIBUTED: Symbol = symbol_short!("own_dist");
pub const SHARES_TRANSFERRED: Symbol = symbol_short!("frac_xfer");
pub const ASSET_CLAIMED: Symbol = symbol_short!("asset_clm");
