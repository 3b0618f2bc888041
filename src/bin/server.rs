use std::net::{IpAddr, SocketAddr};

use axum_server::Handle;
use clap::Parser;
use rusqlite::Connection;

use finance_tracker::{
    ApiState, add_tracing_layer, build_api_router, graceful_shutdown, setup_logging,
};

/// The REST API server for finance_tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long, env = "DATABASE_PATH")]
    db_path: String,

    /// The address to serve the API from.
    #[arg(short, long, default_value = "127.0.0.1")]
    address: IpAddr,

    /// The port to serve the API from.
    #[arg(short, long, default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    let connection = match Connection::open(&args.db_path) {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("Could not open database {}: {error}", args.db_path);
            std::process::exit(1);
        }
    };

    let state = match ApiState::new(connection) {
        Ok(state) => state,
        Err(error) => {
            tracing::error!("Could not initialize database {}: {error}", args.db_path);
            std::process::exit(1);
        }
    };

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_api_router(state));
    let addr = SocketAddr::new(args.address, args.port);

    tracing::info!("REST API listening on http://{addr}");
    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server error: {error}");
        std::process::exit(1);
    }
}
