use serde::{Deserialize, Serialize};

/// Priority, weight and port for an SRV record, as read from annotations.
///
/// Only the port is range checked; priority and weight are passed through as written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SrvValues {
    pub priority: i64,
    pub weight: i64,
    pub port: i64,
}

impl SrvValues {
    pub fn new(priority: i64, weight: i64, port: i64) -> Self {
        SrvValues {
            priority,
            weight,
            port,
        }
    }

    /// The port as a network port number, if it fits.
    pub fn port(&self) -> Option<u16> {
        u16::try_from(self.port).ok()
    }
}

impl From<SrvValues> for (i64, i64, i64) {
    fn from(value: SrvValues) -> Self {
        (value.priority, value.weight, value.port)
    }
}
