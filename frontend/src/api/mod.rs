pub mod client;
mod leave_requests;
pub mod realtime;
mod session;
pub mod types;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
