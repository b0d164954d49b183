//! Merging successive manifest snapshots into one playback order.

use super::{ManifestSegmentList, SegmentRef};
use std::collections::HashSet;

/// Merge manifest snapshots, in capture order, into one segment order.
///
/// The first list is taken whole. Every later list contributes only the
/// references whose names do not appear in the list captured immediately
/// before it, in their original order.
///
/// Only the adjacent snapshot is consulted. That matches a sliding-window
/// live playlist, where a refresh repeats the tail of the previous window,
/// but a name that left the window two or more snapshots ago and comes back
/// is emitted again.
pub fn reconcile(lists: &[ManifestSegmentList]) -> Vec<SegmentRef> {
    let mut order = Vec::new();
    let mut previous: Option<HashSet<&str>> = None;

    for list in lists {
        match &previous {
            None => order.extend(list.segments.iter().cloned()),
            Some(seen) => {
                let before = order.len();
                order.extend(
                    list.segments
                        .iter()
                        .filter(|s| !seen.contains(s.name.as_str()))
                        .cloned(),
                );
                tracing::trace!(
                    "{}: kept {} of {} references",
                    list.manifest,
                    order.len() - before,
                    list.len()
                );
            }
        }

        previous = Some(list.names().collect());
    }

    tracing::debug!(
        "Reconciled {} manifests into {} segments",
        lists.len(),
        order.len()
    );

    order
}
