use crate::config::Config;
use crate::http::connection::Connection;
use tokio::net::TcpListener;
use tracing::info;

/// Accept loop: one spawned task per connection.
///
/// Each task owns its socket and its connection state outright; nothing is
/// shared between connections, and a failing connection only logs. It
/// never takes down the loop or its neighbors.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Listening on {}", cfg.listen_addr);

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let cfg = cfg.clone();
        tokio::spawn(async move {
            let conn = Connection::new(socket, &cfg);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {:#}", peer, e);
            }
            tracing::debug!("Done handling {}", peer);
        });
    }
}
