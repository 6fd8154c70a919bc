//! Myfxbook account statistics provider.

mod client;
mod provider;


pub use provider::MyfxbookProvider;
