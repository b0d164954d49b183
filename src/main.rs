mod cli;

use tsharvest::{config, harvest::Harvest, output};
use tsharvest_media::{should_continue, AssemblyReport, ContinueGate, MissingPolicy};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::io::{BufRead, Write};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "tsharvest=trace,tsharvest_archive=trace,tsharvest_media=trace,tsharvest_av=debug"
                .to_string()
        } else {
            "tsharvest=info,tsharvest_archive=info,tsharvest_media=info,tsharvest_av=info"
                .to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = config::load_config_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Extract { archive, out_dir } => extract(&config, &archive, &out_dir),
        Commands::Remux {
            archive,
            output,
            out_dir,
            yes,
            abort_on_missing,
        } => {
            let mut gate: Box<dyn ContinueGate> = if yes {
                Box::new(MissingPolicy::Continue)
            } else if abort_on_missing {
                Box::new(MissingPolicy::Abort)
            } else {
                Box::new(prompt_continue)
            };
            remux(&config, &archive, &output, &out_dir, gate.as_mut())
        }
        Commands::Concat { list, output } => {
            let bytes = output::concat_files(&list, &output)?;
            println!("Wrote {} bytes to {}", bytes, output.display());
            Ok(())
        }
        Commands::Clip {
            input,
            start,
            end,
            output,
        } => {
            let ffmpeg = tsharvest_av::tools::ffmpeg_path(config.tools.ffmpeg_path.as_deref())?;
            let output = tsharvest_av::clip(&ffmpeg, &input, &start, &end, &output)?;
            println!("Output: {}", output.display());
            Ok(())
        }
        Commands::Inspect { archive, json } => inspect(&config, &archive, json),
        Commands::CheckTools => check_tools(&config),
    }
}

fn extract(config: &config::Config, archive: &Path, out_dir: &Path) -> Result<()> {
    let harvest = Harvest::open(archive, &config.archive)?;
    let extraction = output::write_extraction(&harvest, out_dir, &config.output)?;

    for name in extraction.report.missing_names() {
        eprintln!(
            "[notice] {} was not captured; left out of {} and {}",
            name, config.output.manifest_name, config.output.concat_list_name
        );
    }

    println!(
        "Wrote {} segments and {} manifests to {}",
        extraction.segments_written,
        extraction.manifests_written,
        out_dir.display()
    );
    println!("Manifest: {}", extraction.manifest_path.display());
    println!("Concat list: {}", extraction.concat_list_path.display());

    Ok(())
}

fn remux(
    config: &config::Config,
    archive: &Path,
    output: &Path,
    out_dir: &Path,
    gate: &mut dyn ContinueGate,
) -> Result<()> {
    let harvest = Harvest::open(archive, &config.archive)?;
    let ffmpeg = tsharvest_av::tools::ffmpeg_path(config.tools.ffmpeg_path.as_deref())?;

    std::fs::create_dir_all(out_dir)?;
    let stream_path = out_dir.join(&config.output.stream_name);
    let report = output::write_stream(&harvest, &stream_path)?;

    for name in report.missing_names() {
        eprintln!("[notice] {} was not captured; skipped", name);
    }

    println!(
        "Assembled {} segments ({} bytes) into {}",
        report.emitted,
        report.bytes_written,
        stream_path.display()
    );

    if !should_continue(&report, gate) {
        println!("Stopped before remux; {} segments missing", report.missing.len());
        return Ok(());
    }

    let output = tsharvest_av::remux_stream(&ffmpeg, &stream_path, output)?;
    println!("Output: {}", output.display());

    Ok(())
}

/// Ask on the terminal whether to remux a stream with gaps.
fn prompt_continue(report: &AssemblyReport) -> bool {
    eprint!(
        "{} segments are missing. Continue anyway? [y/N]: ",
        report.missing.len()
    );
    let _ = std::io::stderr().flush();

    let mut answer = String::new();
    match std::io::stdin().lock().read_line(&mut answer) {
        Ok(_) => answer.trim().eq_ignore_ascii_case("y"),
        Err(_) => false,
    }
}

fn inspect(config: &config::Config, archive: &Path, json: bool) -> Result<()> {
    let harvest = Harvest::open(archive, &config.archive)?;
    let summary = harvest.summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Archive: {}", archive.display());
    if let Some(ref version) = summary.har_version {
        println!("HAR version: {}", version);
    }
    println!("Segments captured: {}", summary.segments_captured);

    println!("\nManifests: {}", summary.manifests.len());
    for (i, manifest) in summary.manifests.iter().enumerate() {
        println!("  [{}] {} ({} segments)", i + 1, manifest.name, manifest.segments);
    }

    let secs = summary.duration_secs as u64;
    println!(
        "\nReconciled: {} segments, {:02}:{:02}:{:02}",
        summary.reconciled,
        secs / 3600,
        (secs / 60) % 60,
        secs % 60
    );

    println!("Missing: {}", summary.missing.len());
    for missing in &summary.missing {
        println!("  {}", missing.name);
    }

    Ok(())
}

fn check_tools(config: &config::Config) -> Result<()> {
    println!("Checking external tools...\n");

    let tools = tsharvest_av::check_tools(config.tools.ffmpeg_path.as_deref());
    let mut all_ok = true;

    for tool in &tools {
        let status = if tool.available {
            "✓"
        } else {
            all_ok = false;
            "✗"
        };

        print!("{} {}", status, tool.name);

        if let Some(ref version) = tool.version {
            print!(" ({})", version);
        }

        if let Some(ref path) = tool.path {
            print!(" - {}", path.display());
        }

        println!();
    }

    println!();
    if all_ok {
        println!("All required tools are available!");
    } else {
        println!("Some tools are missing. Install them to enable remux and clip.");
    }

    Ok(())
}
