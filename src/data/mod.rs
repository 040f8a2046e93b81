pub mod diff;
pub mod snapshot;
pub mod source;
