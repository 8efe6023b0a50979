//! CLI for the Tagkit markup library.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tagkit_core::config;

use commands::{run_anchor, run_escape, run_image, run_redirect, run_tag, run_url};
use commands::{AnchorArgs, ImageArgs, TagArgs, UrlArgs};

/// Top-level CLI for Tagkit.
#[derive(Debug, Parser)]
#[command(name = "tagkit")]
#[command(about = "Tagkit: assemble URLs and HTML tags from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Parse a URL, optionally modify it, and print the reassembled result.
    Url {
        /// URL to parse ("ref" loads --referrer).
        raw: String,

        /// Add or overwrite a query parameter (KEY=VALUE, value is form-encoded).
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// Set the #fragment.
        #[arg(long)]
        anchor: Option<String>,

        /// Referrer of the simulated request.
        #[arg(long)]
        referrer: Option<String>,

        /// Incoming query parameter of the simulated request (KEY=VALUE); copied when missing.
        #[arg(long = "get", value_name = "KEY=VALUE")]
        get: Vec<String>,

        /// Print the URL components as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Render an arbitrary tag.
    Tag {
        /// Tag name (lower-cased, length-capped).
        name: String,

        /// How the tag is closed: content, self, none, or the codes 0, 1, 2.
        #[arg(long, default_value = "content")]
        closure: String,

        /// Attribute (KEY=VALUE). `class` and `style` are routed to their stores.
        #[arg(long = "attr", value_name = "KEY=VALUE")]
        attrs: Vec<String>,

        /// Space-separated class names.
        #[arg(long = "class")]
        classes: Vec<String>,

        /// Compound style string (`k: v; k: v`).
        #[arg(long = "style")]
        styles: Vec<String>,

        /// Body content (escaped unless --raw).
        #[arg(long)]
        content: Option<String>,

        /// Insert the content without escaping.
        #[arg(long)]
        raw: bool,
    },

    /// Render an `<a>` link.
    Anchor {
        /// Link target ("print" builds a print-page link).
        href: String,

        /// Link text.
        text: String,

        /// Query parameter added to the link (KEY=VALUE).
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// `target` attribute, e.g. _blank.
        #[arg(long)]
        target: Option<String>,

        /// `title` attribute.
        #[arg(long)]
        title: Option<String>,
    },

    /// Render an `<img>` tag.
    Image {
        /// Image source URL.
        src: String,

        #[arg(long)]
        alt: Option<String>,

        #[arg(long)]
        title: Option<String>,

        /// Horizontal alignment (top, bottom, middle, left, right).
        #[arg(long)]
        align: Option<String>,

        /// Vertical alignment keyword or percentage.
        #[arg(long)]
        valign: Option<String>,
    },

    /// HTML-escape text.
    Escape {
        text: String,

        /// Keep character references that are already present.
        #[arg(long)]
        no_double_encode: bool,
    },

    /// Print the redirect headers for a URL and exit.
    Redirect {
        url: String,

        /// HTTP status code (default from config).
        #[arg(long)]
        status: Option<u16>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Url {
                raw,
                params,
                anchor,
                referrer,
                get,
                json,
            } => run_url(
                &cfg,
                &UrlArgs {
                    raw,
                    params,
                    anchor,
                    referrer,
                    get,
                    json,
                },
            )?,
            CliCommand::Tag {
                name,
                closure,
                attrs,
                classes,
                styles,
                content,
                raw,
            } => run_tag(
                &cfg,
                &TagArgs {
                    name,
                    closure,
                    attrs,
                    classes,
                    styles,
                    content,
                    raw,
                },
            )?,
            CliCommand::Anchor {
                href,
                text,
                params,
                target,
                title,
            } => run_anchor(&AnchorArgs {
                href,
                text,
                params,
                target,
                title,
            })?,
            CliCommand::Image {
                src,
                alt,
                title,
                align,
                valign,
            } => run_image(&ImageArgs {
                src,
                alt,
                title,
                align,
                valign,
            })?,
            CliCommand::Escape {
                text,
                no_double_encode,
            } => run_escape(&cfg, &text, no_double_encode),
            CliCommand::Redirect { url, status } => run_redirect(&cfg, &url, status)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
