use colored::Colorize;
use landing::BuildOptions;
use tracing::{error, info, warn};

pub async fn start_build(options: BuildOptions) -> bool {
    match landing::build_site(&options).await {
        Ok(output) => {
            if !output.content_loaded {
                warn!(name: "build", "{} could not be loaded, every section shows its placeholder", options.content_path.display());
            }
            info!(name: "build", "{}", format!("{} pages, {} static files written to {}", output.pages.len(), output.static_files.len(), options.output_dir.display()).bold());
            true
        }
        Err(err) => {
            error!(name: "build", "Build failed: {}", err);
            false
        }
    }
}
