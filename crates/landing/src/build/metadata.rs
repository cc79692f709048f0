use std::{process::Termination, time::Instant};

/// Metadata returned by [`coronate()`](crate::coronate) for a single page after a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutput {
    pub route: String,
    pub file_path: String,
}

/// A file copied from the static directory without any processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAssetOutput {
    pub file_path: String,
    pub original_path: String,
}

/// Metadata returned by [`coronate()`](crate::coronate) after a successful build.
#[derive(Debug)]
pub struct BuildOutput {
    pub start_time: Instant,
    /// Whether the content document was available. When `false`, every section rendered its placeholder.
    pub content_loaded: bool,
    pub pages: Vec<PageOutput>,
    pub static_files: Vec<StaticAssetOutput>,
}

impl BuildOutput {
    pub fn new(start_time: Instant) -> Self {
        Self {
            start_time,
            content_loaded: false,
            pages: Vec::new(),
            static_files: Vec::new(),
        }
    }

    pub(crate) fn add_page(&mut self, route: String, file_path: String) {
        self.pages.push(PageOutput { route, file_path });
    }

    pub(crate) fn add_static_file(&mut self, file_path: String, original_path: String) {
        self.static_files.push(StaticAssetOutput {
            file_path,
            original_path,
        });
    }
}

impl Default for BuildOutput {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl Termination for BuildOutput {
    fn report(self) -> std::process::ExitCode {
        0.into()
    }
}
