use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use tracing::info;

use crate::application::{
    http::server::http_server::{router, state},
    logging::init_logger,
};
use crate::args::Args;

mod application;
mod args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let app_state = state(args.clone()).await?;
    let router = router(app_state)?;

    let addr = SocketAddr::new(args.server.host.parse()?, args.server.port);
    info!("listening on {}", addr);

    axum_server::bind(addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
