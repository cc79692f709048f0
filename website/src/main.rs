use std::path::Path;

use landing::{BuildOptions, BuildOutput, coronate};

fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
    let site_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    coronate(BuildOptions {
        content_path: site_dir.join("data/data.json"),
        output_dir: site_dir.join("dist"),
        static_dir: site_dir.join("static"),
        base_url: Some("https://thinkacademy.example".to_string()),
        ..Default::default()
    })
}
