//! tola-lang - multilanguage pages for static sites.

use anyhow::Result;
use clap::Parser;
use tola_lang::{
    build::{build_site, page_summary},
    cli::{Cli, Commands},
    config::SiteConfig,
    log,
};

fn main() {
    if let Err(err) = run() {
        log!("error"; "{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = SiteConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Build { manifest, print } => {
            let site = build_site(manifest, &config)?;
            for (_, page) in site.pages() {
                log!("build"; "{}", page_summary(&site, page));
                if *print && let Some(document) = &page.document {
                    println!("{}", document.as_str());
                }
            }
            log!("build"; "{} pages", site.pages().count());
        }
    }
    Ok(())
}
