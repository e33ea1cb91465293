//! Process-level initialization.
//!
//! The transform core is pure and needs no setup; only the batch binary
//! initializes logging.

mod logger;

pub use logger::init_logger_with;
