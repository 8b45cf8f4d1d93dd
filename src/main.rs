use anyhow::Result;
use clap::{ColorChoice, Parser};
use folio::cli::{self, Cli, Commands};
use folio::config::FolioConfig;
use folio::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = FolioConfig::load(&cli)?;

    match &cli.command {
        Commands::Code { file, lang, output } => {
            cli::code::run_code(file, lang.as_deref(), output)
        }
        Commands::Ranges { ranges, output } => cli::code::run_ranges(ranges, output),
        Commands::Paginate {
            total,
            page,
            output,
            ..
        } => cli::paginate::run_paginate(*total, *page, output, &config),
        Commands::Toc { file, tree, output } => cli::toc::run_toc(file, *tree, output, &config),
        Commands::Render {
            file, json, output, ..
        } => cli::render::run_render(file, *json, output, &config),
        Commands::List { args } => cli::list::run_list(args, &config),
        Commands::Tags { output } => cli::list::run_tags(output, &config),
    }
}
