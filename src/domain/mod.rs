//! Domain models for collected account statistics.

mod stats;
mod symbol;

pub use stats::AccountStats;
pub use symbol::SymbolStats;
