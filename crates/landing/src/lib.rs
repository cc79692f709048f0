//! Static landing site for a coaching course, generated from a JSON content document.
//!
//! The content document is loaded once, a [`SectionBinder`](binder::SectionBinder) hands each section to the
//! fragment rendering it, and the resulting pages are written to the output directory, ready to be served by any
//! static host.
//!
//! ## Example
//! ```rust,no_run
//! use landing::{BuildOptions, BuildOutput, coronate};
//!
//! fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
//!     coronate(BuildOptions::default())
//! }
//! ```

pub mod binder;
pub mod content;
pub mod errors;
pub mod fragments;
pub mod page;
pub mod route;
pub mod signup;

mod build;
mod logging;

pub use build::metadata::{BuildOutput, PageOutput, StaticAssetOutput};
pub use build::options::BuildOptions;
pub use logging::{FormatElapsedTimeOptions, format_elapsed_time, init_logging};

use errors::LandingError;

/// Identifies the generator in the output HTML.
pub const GENERATOR: &str = concat!("landing v", env!("CARGO_PKG_VERSION"));

/// Entrypoint for a site binary. Sets up logging, then builds the site.
///
/// ## Example
/// ```rust,no_run
/// use landing::{BuildOptions, BuildOutput, coronate};
///
/// fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
///   coronate(BuildOptions {
///     base_url: Some("https://coaching.example".to_string()),
///     ..Default::default()
///   })
/// }
/// ```
pub fn coronate(options: BuildOptions) -> Result<BuildOutput, Box<dyn std::error::Error>> {
    init_logging();

    let async_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    Ok(build::execute_build(&options, &async_runtime)?)
}

/// Builds the site on the current tokio runtime without touching logging, for callers that set up their own.
pub async fn build_site(options: &BuildOptions) -> Result<BuildOutput, LandingError> {
    build::build(options).await
}
