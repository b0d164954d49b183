//! Output assembly from a reconciled segment order.
//!
//! The [`Assembler`] joins the reconciled order with the captured segment
//! bodies and emits one of three artifacts:
//!
//! - the concatenated transport stream
//! - a rebuilt manifest (`<metadata>\n<name>\n` per segment)
//! - a concat list (`file <name>\n` per segment)
//!
//! References without a captured body are skipped and listed in the
//! returned [`AssemblyReport`]. Whether to carry on with a lossy stream is
//! left to the caller through a [`ContinueGate`].

use crate::hls::SegmentRef;
use crate::Result;
use std::fmt::Write as _;
use std::io::Write;
use tsharvest_common::{with_position_suffix, ManifestText, SegmentPayloads};

/// A reconciled reference with no captured body.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct MissingSegment {
    /// Segment file name.
    pub name: String,
}

/// Outcome of one assembly pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct AssemblyReport {
    /// Number of segments emitted.
    pub emitted: usize,
    /// Bytes of segment data written (stream assembly only).
    pub bytes_written: u64,
    /// References skipped for lack of a body, in playback order.
    pub missing: Vec<MissingSegment>,
}

impl AssemblyReport {
    /// Whether any reference was skipped.
    pub fn had_missing(&self) -> bool {
        !self.missing.is_empty()
    }

    /// Names of the skipped references.
    pub fn missing_names(&self) -> impl Iterator<Item = &str> {
        self.missing.iter().map(|m| m.name.as_str())
    }
}

/// A rendered text artifact together with its report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub report: AssemblyReport,
}

/// Joins a reconciled order with the captured payloads.
#[derive(Debug, Clone, Copy)]
pub struct Assembler<'a> {
    order: &'a [SegmentRef],
    payloads: &'a SegmentPayloads,
}

impl<'a> Assembler<'a> {
    /// Create an assembler over a reconciled order.
    pub fn new(order: &'a [SegmentRef], payloads: &'a SegmentPayloads) -> Self {
        Self { order, payloads }
    }

    /// References with no captured payload, in playback order.
    pub fn missing(&self) -> Vec<MissingSegment> {
        self.order
            .iter()
            .filter(|s| !self.payloads.contains_key(&s.name))
            .map(|s| MissingSegment {
                name: s.name.clone(),
            })
            .collect()
    }

    /// Write the payloads of all captured segments to `out`, in order.
    pub fn write_stream<W: Write>(&self, mut out: W) -> Result<AssemblyReport> {
        let mut report = AssemblyReport::default();

        for segment in self.order {
            match self.payloads.get(&segment.name) {
                Some(data) => {
                    out.write_all(data)?;
                    report.emitted += 1;
                    report.bytes_written += data.len() as u64;
                }
                None => record_missing(&mut report, segment),
            }
        }

        out.flush()?;

        tracing::info!(
            "Assembled {} segments ({} bytes), {} missing",
            report.emitted,
            report.bytes_written,
            report.missing.len()
        );

        Ok(report)
    }

    /// Render a manifest listing every captured segment with its metadata.
    pub fn render_manifest(&self) -> Rendered {
        self.render(|out, segment| {
            writeln!(out, "{}", segment.metadata).unwrap();
            writeln!(out, "{}", segment.name).unwrap();
        })
    }

    /// Render a concat list naming every captured segment.
    pub fn render_concat_list(&self) -> Rendered {
        self.render(|out, segment| {
            writeln!(out, "file {}", segment.name).unwrap();
        })
    }

    fn render(&self, mut line: impl FnMut(&mut String, &SegmentRef)) -> Rendered {
        let mut text = String::new();
        let mut report = AssemblyReport::default();

        for segment in self.order {
            if self.payloads.contains_key(&segment.name) {
                line(&mut text, segment);
                report.emitted += 1;
            } else {
                record_missing(&mut report, segment);
            }
        }

        Rendered { text, report }
    }
}

fn record_missing(report: &mut AssemblyReport, segment: &SegmentRef) {
    tracing::warn!("Segment {} was not captured, skipping", segment.name);
    report.missing.push(MissingSegment {
        name: segment.name.clone(),
    });
}

/// Raw segment files to write in multi-file extraction, as `(name, bytes)`.
pub fn segment_files(payloads: &SegmentPayloads) -> impl Iterator<Item = (&str, &[u8])> {
    payloads.iter().map(|(name, data)| (name.as_str(), &data[..]))
}

/// Raw manifest files to write in multi-file extraction, as `(name, text)`.
///
/// A lone manifest keeps its own name. When several were captured, the one
/// at 1-based position `N > 1` is named `<stem>_N.m3u8`.
pub fn manifest_files(manifests: &[ManifestText]) -> Vec<(String, &str)> {
    manifests
        .iter()
        .enumerate()
        .map(|(index, m)| {
            let name = if index == 0 {
                m.name.clone()
            } else {
                with_position_suffix(&m.name, index + 1)
            };
            (name, m.content.as_str())
        })
        .collect()
}

/// Decides whether to continue after segments went missing.
pub trait ContinueGate {
    /// Return `true` to continue with the lossy stream.
    fn should_continue(&mut self, report: &AssemblyReport) -> bool;
}

impl<F> ContinueGate for F
where
    F: FnMut(&AssemblyReport) -> bool,
{
    fn should_continue(&mut self, report: &AssemblyReport) -> bool {
        self(report)
    }
}

/// Fixed answer for the continue gate, chosen before the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    /// Carry on without the missing segments.
    Continue,
    /// Stop when anything is missing.
    #[default]
    Abort,
}

impl ContinueGate for MissingPolicy {
    fn should_continue(&mut self, _report: &AssemblyReport) -> bool {
        *self == MissingPolicy::Continue
    }
}

/// Apply `gate` to a report. Complete reports always continue.
pub fn should_continue(report: &AssemblyReport, gate: &mut dyn ContinueGate) -> bool {
    !report.had_missing() || gate.should_continue(report)
}
