use super::server::DnsServerHandler;
use super::socket::create_udp_socket;
use emberdns_domain::config::ListenerConfig;
use emberdns_domain::DomainError;
use std::io;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::{watch, Semaphore};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerState {
    Listening,
    Stopping,
    Stopped,
}

/// Owns the bound socket and drives the receive loop.
///
/// Each receive is bounded by `recv_timeout` and raced against the stop
/// token, so a stop request is honoured within one timeout interval even if
/// no datagram ever arrives. Every received datagram is handled on its own
/// task; the loop itself never waits on a reply being sent.
pub struct UdpListener {
    socket: Arc<UdpSocket>,
    local_addr: SocketAddr,
    handler: Arc<DnsServerHandler>,
    recv_timeout: Duration,
    recv_buffer_size: usize,
    admission: Option<Arc<Semaphore>>,
    control: Arc<StopControl>,
}

/// Cloneable remote for a running [`UdpListener`].
#[derive(Clone)]
pub struct ListenerHandle {
    local_addr: SocketAddr,
    control: Arc<StopControl>,
}

struct StopControl {
    shutdown: CancellationToken,
    stop_requested: AtomicBool,
    state: watch::Sender<ListenerState>,
}

impl UdpListener {
    /// Binds the socket and enters `Listening`. Bind failures are returned
    /// as-is and never retried.
    pub async fn bind(
        bind_addr: SocketAddr,
        config: &ListenerConfig,
        handler: DnsServerHandler,
    ) -> Result<Self, DomainError> {
        let socket = create_udp_socket(bind_addr, config).map_err(|e| {
            DomainError::TransportError(format!(
                "Failed to bind UDP socket on {}: {}",
                bind_addr, e
            ))
        })?;
        let local_addr = socket.local_addr().map_err(|e| {
            DomainError::TransportError(format!("Failed to read local address: {}", e))
        })?;

        let (state, _) = watch::channel(ListenerState::Listening);

        info!(
            bind_address = %local_addr,
            recv_timeout_ms = config.recv_timeout_ms,
            max_in_flight = config.max_in_flight,
            "DNS listener bound"
        );

        Ok(Self {
            socket: Arc::new(socket),
            local_addr,
            handler: Arc::new(handler),
            recv_timeout: config.recv_timeout(),
            recv_buffer_size: config.recv_buffer_size,
            admission: config
                .admission_limit()
                .map(|limit| Arc::new(Semaphore::new(limit))),
            control: Arc::new(StopControl {
                shutdown: CancellationToken::new(),
                stop_requested: AtomicBool::new(false),
                state,
            }),
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn handle(&self) -> ListenerHandle {
        ListenerHandle {
            local_addr: self.local_addr,
            control: Arc::clone(&self.control),
        }
    }

    /// Runs until a stop is requested through a [`ListenerHandle`].
    ///
    /// The loop drops its socket reference before reporting `Stopped`;
    /// reply tasks still in flight keep theirs until their send completes.
    pub async fn run(self) {
        info!(bind_address = %self.local_addr, "DNS listener ready");

        let mut recv_buf = vec![0u8; self.recv_buffer_size];
        let shutdown = self.control.shutdown.clone();

        loop {
            let received = tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                result = tokio::time::timeout(
                    self.recv_timeout,
                    self.socket.recv_from(&mut recv_buf),
                ) => result,
            };

            match received {
                Ok(Ok((len, from))) => self.dispatch(&recv_buf[..len], from),
                Ok(Err(e)) if e.kind() == io::ErrorKind::Interrupted => continue,
                Ok(Err(e)) => {
                    error!(error = %e, "UDP recv error");
                }
                Err(_) => {
                    trace!("Receive timed out, checking for stop request");
                    if shutdown.is_cancelled() {
                        break;
                    }
                }
            }
        }

        let UdpListener {
            socket,
            local_addr,
            control,
            ..
        } = self;
        drop(socket);

        control.state.send_replace(ListenerState::Stopped);
        info!(bind_address = %local_addr, "DNS listener stopped");
    }

    fn dispatch(&self, datagram: &[u8], from: SocketAddr) {
        let permit = match &self.admission {
            Some(semaphore) => match Arc::clone(semaphore).try_acquire_owned() {
                Ok(permit) => Some(permit),
                Err(_) => {
                    warn!(client = %from, "Too many datagrams in flight, dropping");
                    return;
                }
            },
            None => None,
        };

        let handler = Arc::clone(&self.handler);
        let socket = Arc::clone(&self.socket);
        let owned_buf: Arc<[u8]> = Arc::from(datagram);

        tokio::spawn(async move {
            let _permit = permit;
            if let Some(response) = handler.handle_datagram(&owned_buf, from).await {
                if let Err(e) = socket.send_to(&response, from).await {
                    error!(client = %from, error = %e, "Failed to send response");
                }
            }
        });
    }
}

impl ListenerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn state(&self) -> ListenerState {
        *self.control.state.borrow()
    }

    /// Requests shutdown. Only the first call has an effect; later calls
    /// return [`DomainError::ListenerAlreadyStopping`].
    pub fn stop(&self) -> Result<(), DomainError> {
        if self
            .control
            .stop_requested
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(DomainError::ListenerAlreadyStopping);
        }

        info!(bind_address = %self.local_addr, "Stopping DNS listener");
        // Stopping must be published before the loop can observe the token
        // and publish Stopped.
        self.control.state.send_replace(ListenerState::Stopping);
        self.control.shutdown.cancel();
        Ok(())
    }

    /// Resolves once the receive loop has exited.
    pub async fn stopped(&self) {
        let mut state = self.control.state.subscribe();
        let _ = state
            .wait_for(|current| *current == ListenerState::Stopped)
            .await;
    }
}
