use std::{
    fs::OpenOptions,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    process,
    sync::Arc,
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{
    EnvFilter, Layer, filter, layer::SubscriberExt, util::SubscriberInitExt,
};

use tally_rs::{
    AppState, build_router, graceful_shutdown,
    stores::{JsonTransactionStore, TransactionStore},
    transaction::{PersistenceMode, TransactionService},
};

/// The REST API server for tally_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the JSON document that holds the transactions.
    ///
    /// The file is created with an empty list if it does not exist.
    #[arg(long, default_value = "transactions.json")]
    data_path: PathBuf,

    /// The address to serve the API from.
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    address: IpAddr,

    /// The port to serve the API from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// The canonical name of the timezone used to date new transactions, e.g. "Pacific/Auckland".
    #[arg(long, default_value = "Etc/UTC")]
    timezone: String,

    /// Report store read and write errors to clients instead of logging them and carrying on.
    #[arg(long)]
    strict_persistence: bool,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    let store = JsonTransactionStore::new(args.data_path.clone());
    if let Err(error) = store.initialize() {
        tracing::error!("Could not initialize the transaction store: {error}");
        process::exit(1);
    }

    let mode = if args.strict_persistence {
        PersistenceMode::Strict
    } else {
        PersistenceMode::FailSoft
    };
    tracing::info!(
        "Storing transactions in {} ({mode:?})",
        store.path().display()
    );

    let state = match AppState::new(TransactionService::new(Arc::new(store), mode), &args.timezone)
    {
        Ok(state) => state,
        Err(error) => {
            tracing::error!("Could not create the app state: {error}");
            process::exit(1);
        }
    };

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));

    let addr = SocketAddr::new(args.address, args.port);
    tracing::info!("HTTP server listening on {}", addr);

    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server error: {error}");
        process::exit(1);
    }
}

fn setup_logging() {
    let stdout_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")
        .expect("Could not create log file");

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file))
        .with_filter(filter::LevelFilter::DEBUG);

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(debug_log)
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // Errors are logged where they are handled, so skip `TraceLayer`'s 5xx logging.
        .on_failure(());

    router.layer(tracing_layer)
}
