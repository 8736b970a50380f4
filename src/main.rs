use clap::Parser;
use eleventy_export::application::{ExportOptions, ExportService};
use eleventy_export::cli::{format_summary, Cli};
use eleventy_export::diagnostics::{Diagnostics, Palette};
use eleventy_export::error::ExportError;
use eleventy_export::infrastructure::FileSystemRepository;

fn main() {
    let cli = Cli::parse();
    let palette = Palette::for_stderr(cli.no_color);

    let result = run(cli, palette);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli, palette: Palette) -> Result<(), ExportError> {
    let repo = FileSystemRepository::open(&cli.journal)?;
    let service = ExportService::new(repo);
    let mut diag = Diagnostics::stderr(palette);

    let summary = service.execute(
        ExportOptions {
            format: cli.format,
            output: cli.output,
            config: cli.config,
            name: cli.name,
        },
        &mut diag,
    )?;

    print!("{}", format_summary(&summary));
    Ok(())
}
