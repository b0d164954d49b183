//! Writing harvest artifacts to disk.

use crate::config::OutputConfig;
use crate::harvest::Harvest;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tsharvest_common::with_position_suffix;
use tsharvest_media::{manifest_files, parse_concat_list, segment_files, AssemblyReport};

/// What multi-file extraction wrote.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub segments_written: usize,
    pub manifests_written: usize,
    pub manifest_path: PathBuf,
    pub concat_list_path: PathBuf,
    /// Missing references; the same set for the manifest and the list.
    pub report: AssemblyReport,
}

/// Write every captured segment and manifest plus the rebuilt manifest and
/// concat list into `out_dir`.
pub fn write_extraction(harvest: &Harvest, out_dir: &Path, config: &OutputConfig) -> Result<Extraction> {
    let assembler = harvest.assembler();
    let rebuilt = assembler.render_manifest();
    let concat_list = assembler.render_concat_list();
    let mut manifests = manifest_files(&harvest.capture.manifests);
    rename_reserved(
        &mut manifests,
        &[config.manifest_name.as_str(), config.concat_list_name.as_str()],
    );

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", out_dir))?;

    let mut segments_written = 0;
    for (name, data) in segment_files(&harvest.capture.segments) {
        write_file(&out_dir.join(name), data)?;
        segments_written += 1;
    }

    for (name, text) in &manifests {
        write_file(&out_dir.join(name), text.as_bytes())?;
    }

    let manifest_path = out_dir.join(&config.manifest_name);
    write_file(&manifest_path, rebuilt.text.as_bytes())?;

    let concat_list_path = out_dir.join(&config.concat_list_name);
    write_file(&concat_list_path, concat_list.text.as_bytes())?;

    tracing::info!(
        "Extracted {} segments and {} manifests to {:?}",
        segments_written,
        manifests.len(),
        out_dir
    );

    Ok(Extraction {
        segments_written,
        manifests_written: manifests.len(),
        manifest_path,
        concat_list_path,
        report: rebuilt.report,
    })
}

/// Concatenate the reconciled segments into one transport stream at `path`.
pub fn write_stream(harvest: &Harvest, path: &Path) -> Result<AssemblyReport> {
    let file =
        File::create(path).with_context(|| format!("Failed to create stream file: {:?}", path))?;

    harvest
        .assembler()
        .write_stream(BufWriter::new(file))
        .with_context(|| format!("Failed to write stream file: {:?}", path))
}

/// Concatenate the files named by a concat list into `output`.
///
/// Names resolve relative to the list's directory. Every listed file is
/// checked before `output` is created.
pub fn concat_files(list: &Path, output: &Path) -> Result<u64> {
    let text = std::fs::read_to_string(list)
        .with_context(|| format!("Failed to read concat list: {:?}", list))?;
    let names = parse_concat_list(&text).with_context(|| format!("Invalid concat list: {:?}", list))?;

    let base = list.parent().unwrap_or_else(|| Path::new(""));
    let paths: Vec<PathBuf> = names.iter().map(|n| base.join(n)).collect();

    if let Some(missing) = paths.iter().find(|p| !p.is_file()) {
        anyhow::bail!("Listed file does not exist: {:?}", missing);
    }

    let file =
        File::create(output).with_context(|| format!("Failed to create output: {:?}", output))?;
    let mut out = BufWriter::new(file);
    let mut total = 0;

    for path in &paths {
        let mut input =
            File::open(path).with_context(|| format!("Failed to open segment: {:?}", path))?;
        total += std::io::copy(&mut input, &mut out)
            .with_context(|| format!("Failed to copy segment: {:?}", path))?;
    }

    out.flush()?;

    tracing::info!("Concatenated {} files ({} bytes) into {:?}", paths.len(), total, output);

    Ok(total)
}

/// Suffix captured manifests whose name would be overwritten by a rebuilt file.
fn rename_reserved(manifests: &mut [(String, &str)], reserved: &[&str]) {
    for (position, (name, _)) in manifests.iter_mut().enumerate() {
        if reserved.contains(&name.as_str()) {
            let renamed = with_position_suffix(name, position + 1);
            tracing::warn!(
                "Captured manifest {} clashes with a rebuilt file, writing it as {}",
                name,
                renamed
            );
            *name = renamed;
        }
    }
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    std::fs::write(path, data).with_context(|| format!("Failed to write {:?}", path))
}
