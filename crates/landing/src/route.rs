//! The two routes of the site and how request paths map onto them.
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// The landing page, with every section.
    Landing,
    /// The auxiliary "about" page.
    About,
}

/// Result of resolving a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Matched(Route),
    /// The path matches no route, the client should be sent to this one instead.
    Redirect(Route),
}

impl Resolution {
    /// The route whose page ends up being shown.
    pub fn route(&self) -> Route {
        match self {
            Resolution::Matched(route) | Resolution::Redirect(route) => *route,
        }
    }
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Landing, Route::About];

    /// Where unmatched paths end up.
    pub const FALLBACK: Route = Route::Landing;

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::About => "/abt/",
        }
    }

    /// Maps a request path to a route.
    ///
    /// Trailing slashes and a trailing `index.html` are ignored, as are query strings and fragments. Anything that
    /// doesn't match redirects to [`Route::FALLBACK`].
    pub fn resolve(path: &str) -> Resolution {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_start_matches('/');
        // Only a whole `index.html` segment is dropped
        let path = if path == "index.html" {
            ""
        } else {
            path.strip_suffix("/index.html").unwrap_or(path)
        };

        match path.trim_end_matches('/') {
            "" => Resolution::Matched(Route::Landing),
            "abt" => Resolution::Matched(Route::About),
            _ => Resolution::Redirect(Route::FALLBACK),
        }
    }
}

/// Whether a raw route points at a file (e.g. `404.html`) rather than a directory.
pub fn guess_if_route_is_endpoint(raw_route: &str) -> bool {
    Path::new(raw_route).extension().is_some()
}

/// Output file for a raw route: `/abt/` is written to `abt/index.html`, endpoints like `404.html` as-is.
pub fn route_file_path(raw_route: &str, output_dir: &Path) -> PathBuf {
    let relative = raw_route.trim_matches('/');

    if guess_if_route_is_endpoint(relative) {
        output_dir.join(relative)
    } else if relative.is_empty() {
        output_dir.join("index.html")
    } else {
        output_dir.join(relative).join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_root() {
        for path in ["", "/", "/index.html", "/?utm_source=mail", "/#signup"] {
            assert_eq!(Route::resolve(path), Resolution::Matched(Route::Landing), "{path}");
        }
    }

    #[test]
    fn test_resolve_about() {
        for path in ["abt", "/abt", "/abt/", "/abt/index.html", "/abt?ref=nav"] {
            assert_eq!(Route::resolve(path), Resolution::Matched(Route::About), "{path}");
        }
    }

    #[test]
    fn test_resolve_unmatched_redirects_to_root() {
        for path in [
            "/about",
            "/abt/team",
            "/signup",
            "/abtx",
            "/index.htm",
            "/abtindex.html",
            "/xyzindex.html",
        ] {
            let resolution = Route::resolve(path);
            assert_eq!(resolution, Resolution::Redirect(Route::Landing), "{path}");
            assert_eq!(resolution.route(), Route::Landing);
        }
    }

    #[test]
    fn test_paths_resolve_to_themselves() {
        for route in Route::ALL {
            assert_eq!(Route::resolve(route.path()), Resolution::Matched(route));
        }
    }

    #[test]
    fn test_route_file_path() {
        let dist = Path::new("dist");
        assert_eq!(route_file_path("/", dist), Path::new("dist/index.html"));
        assert_eq!(route_file_path("/abt/", dist), Path::new("dist/abt/index.html"));
        assert_eq!(route_file_path("404.html", dist), Path::new("dist/404.html"));
    }

    #[test]
    fn test_guess_if_route_is_endpoint() {
        assert!(guess_if_route_is_endpoint("404.html"));
        assert!(!guess_if_route_is_endpoint("/abt/"));
        assert!(!guess_if_route_is_endpoint("/"));
    }
}
