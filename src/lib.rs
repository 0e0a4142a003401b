#![doc(test(attr(deny(warnings))))]

//! Salesbook records sales and expenses, keeps a running balance and an
//! activity log, and persists everything to a local data directory.

pub mod cli;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init(color: bool) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(color);
        tracing::debug!("Salesbook tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init(false);
        super::init(true);
    }
}
