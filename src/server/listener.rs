use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{Instrument, info};

use crate::http::connection::Connection;

/// Owns the listening socket. Each accepted connection is served on its own
/// task; the listener is closed when [`Server::run_until`] returns.
pub struct Server {
    listener: TcpListener,
    root: PathBuf,
}

impl Server {
    pub async fn bind(addr: &str, root: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("binding {addr}"))?;
        let server = Self {
            listener,
            root: root.into(),
        };
        info!("Listening on {}", server.local_addr()?);
        Ok(server)
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections until `shutdown` completes.
    ///
    /// Connections already being served keep running on their own tasks.
    pub async fn run_until<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            res = self.accept_loop() => res,
            _ = shutdown => {
                info!("Server stopped");
                Ok(())
            }
        }
    }

    /// Starts serving on a background task.
    pub fn spawn(self) -> anyhow::Result<ServerHandle> {
        let addr = self.local_addr()?;
        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(self.run_until(async {
            let _ = stop_rx.await;
        }));

        Ok(ServerHandle {
            addr,
            stop_tx,
            task,
        })
    }

    async fn accept_loop(&self) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = self.listener.accept().await?;
            info!("Accepted connection from {}", peer);

            let root = self.root.clone();
            let span = tracing::info_span!("conn", %peer);
            tokio::spawn(
                async move {
                    let mut conn = Connection::new(socket, root);
                    if let Err(e) = conn.run().await {
                        tracing::error!("Connection error from {}: {:#}", peer, e);
                    }
                }
                .instrument(span),
            );
        }
    }
}

/// A server running in the background.
pub struct ServerHandle {
    addr: SocketAddr,
    stop_tx: oneshot::Sender<()>,
    task: JoinHandle<anyhow::Result<()>>,
}

impl ServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stops accepting and waits for the listener to be released.
    pub async fn stop(self) -> anyhow::Result<()> {
        let _ = self.stop_tx.send(());
        self.task.await.context("server task panicked")?
    }
}
