use std::io;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Instant;

use axum::{
    handler::HandlerWithoutStateExt,
    http::{header, StatusCode, Uri},
    middleware,
    response::{IntoResponse, Redirect, Response},
    Router,
};
use landing::route::{Resolution, Route};
use tokio::{fs, net::TcpSocket};
use tracing::{debug, Level};

use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::consts::PORT;
use crate::server_utils::{find_open_port, log_server_start, stash_request_uri, CustomOnResponse};

/// Where to send a request that matched no file in the output directory, if anywhere.
pub fn fallback_redirect(path: &str) -> Option<&'static str> {
    match Route::resolve(path) {
        // The route exists but its page wasn't built
        Resolution::Matched(_) => None,
        Resolution::Redirect(route) => Some(route.path()),
    }
}

async fn handle_not_found(dist_dir: PathBuf, uri: Uri) -> Response {
    if let Some(target) = fallback_redirect(uri.path()) {
        debug!("{} matches no route, redirecting to {}", uri.path(), target);
        return Redirect::temporary(target).into_response();
    }

    let content = fs::read_to_string(dist_dir.join("404.html"))
        .await
        .unwrap_or_else(|_| "Not found".to_string());

    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        content,
    )
        .into_response()
}

pub async fn start_preview_web_server(dist_dir: PathBuf, host: bool) -> io::Result<()> {
    let start_time = Instant::now();

    // run it with hyper, if --host 0.0.0.0 otherwise localhost
    let addr = if host {
        IpAddr::from([0, 0, 0, 0])
    } else {
        IpAddr::from([127, 0, 0, 1])
    };

    let port = find_open_port(&addr, PORT).await?;
    let socket = TcpSocket::new_v4()?;
    let _ = socket.set_reuseaddr(true);

    socket.bind(SocketAddr::new(addr, port))?;

    let listener = socket.listen(1024)?;
    let local_addr = listener.local_addr()?;

    debug!("listening on {}", local_addr);

    let dist_dir_clone = dist_dir.clone();
    let service = (move |uri: Uri| handle_not_found(dist_dir_clone.clone(), uri)).into_service();
    let serve_dir = ServeDir::new(dist_dir).not_found_service(service);

    let router = Router::new()
        .fallback_service(serve_dir)
        .layer(middleware::from_fn(stash_request_uri))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(CustomOnResponse),
        );

    log_server_start(start_time, host, local_addr, "Preview");

    axum::serve(listener, router.into_make_service()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_paths_redirect_to_root() {
        assert_eq!(fallback_redirect("/courses/2024"), Some("/"));
        assert_eq!(fallback_redirect("/about"), Some("/"));
        assert_eq!(fallback_redirect("/abtindex.html"), Some("/"));
    }

    #[test]
    fn test_known_paths_do_not_redirect() {
        assert_eq!(fallback_redirect("/"), None);
        assert_eq!(fallback_redirect("/abt/"), None);
        assert_eq!(fallback_redirect("/abt/index.html"), None);
    }
}
