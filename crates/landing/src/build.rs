use std::{
    fs, io,
    path::Path,
    process,
    time::{Instant, SystemTime, UNIX_EPOCH},
};

use colored::{ColoredString, Colorize};
use log::{debug, info, trace};
use rayon::prelude::*;

use crate::{
    BuildOptions, BuildOutput,
    binder::SectionBinder,
    content::load_content,
    errors::{BuildError, LandingError},
    logging::{FormatElapsedTimeOptions, format_elapsed_time, print_title},
    page::{PageContext, pages},
    route::route_file_path,
};

pub mod metadata;
pub mod options;

pub fn execute_build(
    options: &BuildOptions,
    async_runtime: &tokio::runtime::Runtime,
) -> Result<BuildOutput, LandingError> {
    async_runtime.block_on(async { build(options).await })
}

pub async fn build(options: &BuildOptions) -> Result<BuildOutput, LandingError> {
    let build_start = Instant::now();
    let mut build_metadata = BuildOutput::new(build_start);

    print_title("loading content");
    let content = load_content(&options.content_path);
    if !content.is_loaded() && options.strict_content {
        return Err(BuildError::ContentUnavailable.into());
    }
    build_metadata.content_loaded = content.is_loaded();
    let binder = SectionBinder::new(content);

    trace!(target: "build", "Setting up required directories...");

    // The previous output is moved next to the new one and deleted in the background
    let old_dist_tmp_dir = if options.clean_output_dir && options.output_dir.exists() {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let num = (duration.as_secs() + duration.subsec_nanos() as u64) % 100000;
        let dir_name = options
            .output_dir
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "dist".to_string());
        let new_dir_for_old_dist = options
            .output_dir
            .with_file_name(format!(".{}_old_{}_{}", dir_name, process::id(), num));

        match fs::rename(&options.output_dir, &new_dir_for_old_dist) {
            Ok(()) => Some(new_dir_for_old_dist),
            Err(err) => {
                debug!(target: "build", "Could not move old output aside ({}), removing it in place", err);
                fs::remove_dir_all(&options.output_dir)?;
                None
            }
        }
    } else {
        None
    };

    let clean_up_handle = tokio::spawn(async move {
        if let Some(old_dist) = old_dist_tmp_dir {
            let _ = fs::remove_dir_all(old_dist);
        }
    });

    info!(target: "build", "Output directory: {}", options.output_dir.display());

    print_title("generating pages");
    let pages_start = Instant::now();

    let route_format_options = FormatElapsedTimeOptions {
        additional_fn: Some(&|msg: ColoredString| {
            let formatted_msg = format!("(+{})", msg);
            if msg.fgcolor.is_none() {
                formatted_msg.dimmed()
            } else {
                formatted_msg.into()
            }
        }),
        ..Default::default()
    };

    let section_format_options = FormatElapsedTimeOptions {
        sec_red_threshold: 5,
        sec_yellow_threshold: 1,
        millis_red_threshold: None,
        millis_yellow_threshold: None,
        ..Default::default()
    };

    let page_outputs = pages()
        .par_iter()
        .map(|page| -> Result<(String, String), LandingError> {
            let route_start = Instant::now();
            let route = page.route_raw();
            let file_path = route_file_path(route, &options.output_dir);

            let html = page.render(&PageContext {
                binder: &binder,
                options,
                current_path: route,
            });

            write_route_file(html.into_string().as_bytes(), &file_path).map_err(|source| {
                BuildError::WriteFailed {
                    route: route.to_string(),
                    path: file_path.clone(),
                    source,
                }
            })?;

            info!(target: "pages", "{} -> {} {}", route, file_path.to_string_lossy().dimmed(), format_elapsed_time(route_start.elapsed(), &route_format_options));

            Ok((route.to_string(), file_path.to_string_lossy().to_string()))
        })
        .collect::<Result<Vec<_>, LandingError>>()?;

    let page_count = page_outputs.len();
    for (route, file_path) in page_outputs {
        build_metadata.add_page(route, file_path);
    }

    info!(target: "pages", "{}", format!("generated {} pages in {}", page_count, format_elapsed_time(pages_start.elapsed(), &section_format_options)).bold());

    if options.static_dir.exists() {
        let assets_start = Instant::now();
        print_title("copying static files");

        copy_recursively(
            &options.static_dir,
            &options.output_dir,
            &mut build_metadata,
        )
        .map_err(|source| BuildError::StaticCopyFailed {
            path: options.static_dir.clone(),
            source,
        })?;

        info!(target: "build", "{}", format!("Static files copied in {}", format_elapsed_time(assets_start.elapsed(), &FormatElapsedTimeOptions::default())).bold());
    } else {
        debug!(target: "build", "No static directory at {}, skipping", options.static_dir.display());
    }

    info!(target: "SKIP_FORMAT", "{}", "");
    info!(target: "build", "{}", format!("Build completed in {}", format_elapsed_time(build_start.elapsed(), &section_format_options)).bold());

    let _ = clean_up_handle.await;

    Ok(build_metadata)
}

fn copy_recursively(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    build_metadata: &mut BuildOutput,
) -> io::Result<()> {
    fs::create_dir_all(&destination)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let filetype = entry.file_type()?;
        if filetype.is_dir() {
            copy_recursively(
                entry.path(),
                destination.as_ref().join(entry.file_name()),
                build_metadata,
            )?;
        } else {
            fs::copy(entry.path(), destination.as_ref().join(entry.file_name()))?;

            build_metadata.add_static_file(
                destination
                    .as_ref()
                    .join(entry.file_name())
                    .to_string_lossy()
                    .to_string(),
                entry.path().to_string_lossy().to_string(),
            );
        }
    }
    Ok(())
}

fn write_route_file(content: &[u8], file_path: &Path) -> Result<(), io::Error> {
    if let Some(parent_dir) = file_path.parent() {
        fs::create_dir_all(parent_dir)?
    }

    fs::write(file_path, content)?;

    Ok(())
}
