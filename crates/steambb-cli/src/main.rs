//! `steambb`: renders Steam-flavored BBCode to HTML.

mod error;

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use error::CliError;
use steambb_core::{
    RenderOptions, SAMPLE_DOCUMENT, UrlPolicy, render_sanitized_with_options, render_with_options,
};
use steambb_renderer::{Renderer, Theme};

/// Render Steam-flavored BBCode to HTML.
#[derive(Parser, Debug)]
#[command(name = "steambb", version, about)]
struct Cli {
    /// Document to render. Reads stdin when absent.
    input: Option<PathBuf>,

    /// Write the result here instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the HTML fragment without the surrounding page.
    #[arg(long)]
    raw: bool,

    /// Page theme.
    #[arg(long, value_enum, default_value_t = ThemeArg::Auto)]
    theme: ThemeArg,

    /// Run the output through a second allow-list sanitizer.
    #[arg(long)]
    sanitized: bool,

    /// Which link and image destinations are accepted.
    #[arg(long, value_enum, default_value_t = PolicyArg::Allowlist)]
    url_policy: PolicyArg,

    /// Render the built-in sample document instead of reading input.
    #[arg(long, conflicts_with = "input")]
    sample: bool,

    /// Also write the page stylesheet into this directory.
    #[arg(long, value_name = "DIR")]
    css_out: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Auto,
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Auto => Theme::Auto,
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    Allowlist,
    Blocklist,
}

impl From<PolicyArg> for UrlPolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::Allowlist => UrlPolicy::Allowlist,
            PolicyArg::Blocklist => UrlPolicy::Blocklist,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let source = read_source(&cli)?;
    let options = RenderOptions::default().with_url_policy(cli.url_policy.into());

    let fragment = if cli.sanitized {
        render_sanitized_with_options(&source, &options)
    } else {
        render_with_options(&source, &options)
    };

    let renderer = Renderer::new(cli.theme.into());
    if let Some(dir) = &cli.css_out {
        renderer
            .generate_files(dir)
            .map_err(|source| CliError::Write {
                path: dir.clone(),
                source,
            })?;
        log::debug!("wrote stylesheet into {}", dir.display());
    }

    let mut html = if cli.raw {
        fragment
    } else {
        renderer.embed_html(&fragment, true)
    };
    if !html.ends_with('\n') {
        html.push('\n');
    }

    match &cli.output {
        Some(path) => {
            fs::write(path, &html).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            log::debug!("wrote {} bytes to {}", html.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn read_source(cli: &Cli) -> Result<String, CliError> {
    if cli.sample {
        return Ok(SAMPLE_DOCUMENT.to_string());
    }
    match &cli.input {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::Stdin)?;
            Ok(buffer)
        }
    }
}
