use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tuning for the UDP receive loop.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenerConfig {
    /// Upper bound for a single receive call. Also the worst-case latency
    /// between a stop request and the socket being released.
    #[serde(default = "default_recv_timeout_ms")]
    pub recv_timeout_ms: u64,

    /// Size of the per-datagram receive buffer. Longer datagrams are
    /// truncated by the OS and then rejected by the decoder.
    #[serde(default = "default_recv_buffer_size")]
    pub recv_buffer_size: usize,

    /// Maximum number of datagrams handled concurrently. `0` disables the
    /// limit.
    #[serde(default)]
    pub max_in_flight: usize,

    /// Kernel socket buffer size (SO_RCVBUF / SO_SNDBUF).
    #[serde(default = "default_socket_buffer")]
    pub socket_buffer: usize,
}

impl ListenerConfig {
    pub fn recv_timeout(&self) -> Duration {
        Duration::from_millis(self.recv_timeout_ms)
    }

    pub fn admission_limit(&self) -> Option<usize> {
        (self.max_in_flight > 0).then_some(self.max_in_flight)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            recv_timeout_ms: default_recv_timeout_ms(),
            recv_buffer_size: default_recv_buffer_size(),
            max_in_flight: 0,
            socket_buffer: default_socket_buffer(),
        }
    }
}

fn default_recv_timeout_ms() -> u64 {
    1000
}

fn default_recv_buffer_size() -> usize {
    4096
}

fn default_socket_buffer() -> usize {
    256 * 1024
}
