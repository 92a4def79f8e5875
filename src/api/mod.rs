//! Board service client module

mod client;
mod traits;

pub use client::ApiClient;
pub use traits::BoardApi;

#[cfg(test)]
pub use traits::MockBoardApi;
