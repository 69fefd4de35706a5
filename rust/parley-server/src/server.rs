//! HTTP/1 server around [`PredictService`].
//!
//! One task accepts connections until the shutdown signal arrives; each
//! connection is served on its own task.

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use hyper_util::service::TowerToHyperService;
use parley_nlu::Predictor;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower::ServiceBuilder;
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::error::Result;
use crate::handler::{PredictService, cors_layer};

/// A running server.
pub struct ServerHandle {
    /// The address the server is listening on.
    pub local_addr: SocketAddr,
    /// The endpoint URL, e.g. `http://127.0.0.1:8787`.
    pub endpoint: String,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl ServerHandle {
    /// Bind `config.addr` and start serving predictions.
    pub async fn start(config: &ServerConfig, predictor: Arc<Predictor>) -> Result<Self> {
        let service = ServiceBuilder::new()
            .layer(cors_layer())
            .service(PredictService::new(predictor));

        let listener = TcpListener::bind(config.addr).await?;
        let local_addr = listener.local_addr()?;
        let endpoint = format!("http://{}", local_addr);
        info!(%endpoint, "listening");

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = listener.accept() => {
                        let (stream, peer) = match result {
                            Ok(accepted) => accepted,
                            Err(error) => {
                                warn!(%error, "failed to accept connection");
                                continue;
                            }
                        };
                        debug!(%peer, "accepted connection");

                        let hyper_service = TowerToHyperService::new(service.clone());
                        tokio::spawn(async move {
                            if let Err(error) = http1::Builder::new()
                                .serve_connection(TokioIo::new(stream), hyper_service)
                                .await
                            {
                                debug!(%peer, %error, "connection closed with error");
                            }
                        });
                    }
                }
            }
            info!("server stopped");
        });

        Ok(ServerHandle {
            local_addr,
            endpoint,
            shutdown_tx,
            task,
        })
    }

    /// Stop accepting connections and wait for the accept loop to exit.
    pub async fn stop(self) {
        let _ = self.shutdown_tx.send(());
        let _ = self.task.await;
    }
}
