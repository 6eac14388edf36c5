use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// The debug session will connect to an already-running process.
///
/// The client sends the port of that process later, over the established
/// session, so this configuration carries no fields of its own; on the wire
/// it is the empty JSON object `{}`.
///
/// Every value of this type is equal to every other one; the type itself is
/// the whole signal.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttachRemoteOptions {}

impl AttachRemoteOptions {
    /// Creates the remote-attach configuration.
    pub const fn new() -> Self {
        Self {}
    }
}

impl Display for AttachRemoteOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("AttachRemoteOptions []")
    }
}
