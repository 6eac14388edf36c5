#![deny(missing_debug_implementations, clippy::undocumented_unsafe_blocks)]

pub mod attach;

pub use attach::AttachRemoteOptions;
