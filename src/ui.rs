use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;

use crate::types::{ConversionReport, PipelineReport};

const EXPORT_PATH_PROMPT: &str = "Enter the path to the GrayJay export (zip or directory): ";

pub fn prompt_export_path() -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", EXPORT_PATH_PROMPT.bold())?;
    stdout.flush()?;

    read_export_path(io::stdin().lock())
}

fn read_export_path(mut input: impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(line.trim().to_string())
}

fn describe_pipeline(name: &str, report: &PipelineReport) -> String {
    if !report.source_present {
        return format!("{}: no source file, skipped", name);
    }

    format!(
        "{}: {} written, {} skipped, {} file(s)",
        name,
        report.written,
        report.skipped,
        report.outputs.len()
    )
}

pub fn print_report(report: &ConversionReport) -> () {
    let pipelines = [
        ("History", &report.history),
        ("Subscriptions", &report.subscriptions),
        ("Playlists", &report.playlists),
        ("Watch later", &report.watch_later),
    ];

    for (name, pipeline) in pipelines {
        let line = describe_pipeline(name, pipeline);

        if pipeline.source_present {
            println!("  {}", line);
        } else {
            println!("  {}", line.dark_grey());
        }
    }

    println!(
        "{} {}",
        "Conversion complete! Files saved in:".green(),
        report.output_dir.display()
    );
}
