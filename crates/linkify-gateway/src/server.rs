use std::future::Future;
use std::net::SocketAddr;

use axum::extract::DefaultBodyLimit;
use tokio::net::TcpListener;
use tracing::info;
use typed_builder::TypedBuilder;

use crate::app::App;
use crate::state::AppState;

pub const DEFAULT_MAX_BODY_SIZE: usize = 1_000_000;

/// Settings for [`serve`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct ServerSettings {
    /// Address the HTTP listener binds to.
    pub listen_addr: SocketAddr,
    /// Largest accepted request body, in bytes.
    #[builder(default = DEFAULT_MAX_BODY_SIZE)]
    pub max_body_size: usize,
}

/// Binds the listener and serves the gateway until `shutdown` resolves.
pub async fn serve<F>(settings: ServerSettings, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let router = App::router(state).layer(DefaultBodyLimit::max(settings.max_body_size));

    let listener = TcpListener::bind(settings.listen_addr).await?;
    info!(
        listen_addr = %listener.local_addr()?,
        max_body_size = settings.max_body_size,
        "starting gateway server"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("gateway server stopped");
    Ok(())
}
