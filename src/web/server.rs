use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use axum::http::{header, HeaderName, HeaderValue};
use axum::Router;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::cli::ServeArgs;

/// Run the static file server.
///
/// # Errors
///
/// Returns an error if the directory is missing, the tokio runtime cannot be
/// created, or the server fails to bind.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Create the router serving the given directory.
///
/// Every response is stamped `Cache-Control: no-store` so the catalog JSON is
/// re-fetched on each reload, matching the cache-bypassing load the page
/// performs.
pub fn create_router(dir: &Path) -> Router {
    let serve_dir = ServeDir::new(dir).append_index_html_on_directories(true);

    Router::new().fallback_service(serve_dir).layer(
        ServiceBuilder::new()
            .layer(SetResponseHeaderLayer::overriding(
                header::CACHE_CONTROL,
                HeaderValue::from_static("no-store, must-revalidate"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-content-type-options"),
                HeaderValue::from_static("nosniff"),
            ))
            // Request timeout to shed slow clients
            .layer(TimeoutLayer::new(Duration::from_secs(30)))
            .layer(ConcurrencyLimitLayer::new(100)),
    )
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    if !args.dir.is_dir() {
        anyhow::bail!("{} is not a directory", args.dir.display());
    }

    let app = create_router(&args.dir);

    let addr = format!("{}:{}", args.address, args.port);
    println!(
        "Serving {} at http://{addr} (caching disabled)",
        args.dir.display()
    );

    if args.open {
        let _ = open::that(format!("http://{addr}"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
