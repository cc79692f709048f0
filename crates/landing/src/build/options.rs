use std::path::PathBuf;

use crate::signup::SignupOptions;

/// Build options. Should be passed to [`coronate()`](crate::coronate()).
///
/// ## Example
/// ```rust,no_run
/// use landing::{BuildOptions, BuildOutput, coronate};
///
/// fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
///   coronate(BuildOptions {
///     content_path: "content/site.json".into(),
///     base_url: Some("https://coaching.example".to_string()),
///     ..Default::default()
///   })
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Path to the JSON content document.
    pub content_path: PathBuf,

    pub output_dir: PathBuf,

    /// Directory copied as-is into the output directory, if it exists.
    pub static_dir: PathBuf,

    /// Base URL for the site, e.g. `https://example.com`. Used for canonical URLs.
    pub base_url: Option<String>,

    /// Shown in the navigation bar and page titles.
    pub site_title: String,

    /// Whether to clean the output directory before building.
    pub clean_output_dir: bool,

    /// Fail the build when the content document can't be loaded, instead of rendering placeholders.
    pub strict_content: bool,

    pub signup: SignupOptions,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            content_path: "data/data.json".into(),
            output_dir: "dist".into(),
            static_dir: "static".into(),
            base_url: None,
            site_title: "Think Academy".to_string(),
            clean_output_dir: true,
            strict_content: false,
            signup: SignupOptions::with_endpoint(crate::signup::DEFAULT_ENDPOINT),
        }
    }
}
