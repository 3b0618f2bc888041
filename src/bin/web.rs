use std::net::{IpAddr, SocketAddr};

use axum_server::Handle;
use clap::Parser;

use finance_tracker::{
    WebState, add_tracing_layer, build_web_router, graceful_shutdown, setup_logging,
};

/// The web app for finance_tracker.
///
/// Pages are rendered from data fetched from the REST API server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The base URL of the REST API server.
    #[arg(long, env = "API_URL", default_value = "http://127.0.0.1:8000")]
    api_url: String,

    /// The address to serve the web app from.
    #[arg(short, long, default_value = "127.0.0.1")]
    address: IpAddr,

    /// The port to serve the web app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    let state = match WebState::new(&args.api_url) {
        Ok(state) => state,
        Err(error) => {
            tracing::error!("Could not create API client: {error}");
            std::process::exit(1);
        }
    };

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_web_router(state));
    let addr = SocketAddr::new(args.address, args.port);

    tracing::info!("Web app listening on http://{addr}, using the API at {}", args.api_url);
    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server error: {error}");
        std::process::exit(1);
    }
}
