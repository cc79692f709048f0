mod build;
mod consts;
mod logging;
mod preview;
mod server_utils;
mod signup;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use landing::BuildOptions;
use landing::signup::{SignupField, SignupForm, SignupOptions, DEFAULT_ENDPOINT};
use tracing::error;

use build::start_build;
use preview::start_preview_web_server;
use signup::send_signup;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Silence all output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the site
    Build(BuildArgs),
    /// Serve a built site locally
    Preview {
        /// Directory containing the built site
        #[arg(long, default_value = "dist")]
        dist: PathBuf,
        /// Listen on every interface instead of localhost only
        #[arg(long)]
        host: bool,
    },
    /// Send a signup to the form endpoint
    Signup(SignupArgs),
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// JSON content document
    #[arg(long, env = "LANDING_CONTENT", default_value = "data/data.json")]
    content: PathBuf,
    #[arg(long, default_value = "dist")]
    out: PathBuf,
    /// Copied as-is into the output directory
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,
    /// Used for canonical URLs
    #[arg(long, env = "LANDING_BASE_URL")]
    base_url: Option<String>,
    /// Where the signup form posts to
    #[arg(long, env = "LANDING_FORM_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
    /// Fail instead of rendering placeholders when the content document can't be loaded
    #[arg(long)]
    strict: bool,
    /// Keep whatever is already in the output directory
    #[arg(long)]
    no_clean: bool,
}

impl From<BuildArgs> for BuildOptions {
    fn from(args: BuildArgs) -> Self {
        BuildOptions {
            content_path: args.content,
            output_dir: args.out,
            static_dir: args.static_dir,
            base_url: args.base_url,
            clean_output_dir: !args.no_clean,
            strict_content: args.strict,
            signup: SignupOptions::with_endpoint(args.endpoint),
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
struct SignupArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long, default_value = "")]
    message: String,
    #[arg(long, env = "LANDING_FORM_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
}

impl SignupArgs {
    fn into_parts(self) -> (SignupForm, SignupOptions) {
        let mut form = SignupForm::new();
        form.set(SignupField::Name, self.name);
        form.set(SignupField::Email, self.email);
        form.set(SignupField::Message, self.message);

        (form, SignupOptions::with_endpoint(self.endpoint))
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init_logging(cli.quiet);

    let success = match cli.command {
        Commands::Build(args) => start_build(args.into()).await,
        Commands::Preview { dist, host } => {
            if !dist.exists() {
                error!(
                    "{} does not exist. Run `landing-cli build` first.",
                    dist.display()
                );
                return ExitCode::FAILURE;
            }

            match start_preview_web_server(dist, host).await {
                Ok(()) => true,
                Err(err) => {
                    error!("Preview server stopped: {}", err);
                    false
                }
            }
        }
        Commands::Signup(args) => {
            let (form, options) = args.into_parts();
            send_signup(form, options).await
        }
    };

    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
