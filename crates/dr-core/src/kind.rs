//! Kind tag carried by every graph vertex.

use serde::{Deserialize, Serialize};

/// Whether a location belongs to a field officer or to a receiver.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum NodeKind {
    Officer,
    Receiver,
}

impl NodeKind {
    #[inline]
    pub fn is_receiver(self) -> bool {
        matches!(self, NodeKind::Receiver)
    }

    /// Label used in response payloads and CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Officer  => "Officer",
            NodeKind::Receiver => "Receiver",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
