// src/discovery/walker.rs

use crate::config::path_resolve::ResolvedInput;
use crate::config::DiscoveryConfig;
use ignore::{WalkBuilder, WalkParallel};
use log::debug;

/// Configures the parallel walker for an input directory.
///
/// Dot-prefixed entries are skipped; `.gitignore` and similar files are not
/// consulted. The output root is pruned when it lies inside the input, and
/// so are entries matching the `-i` globs (relative to the input path).
pub(super) fn build_walker(config: &DiscoveryConfig, resolved: &ResolvedInput) -> WalkParallel {
    let mut builder = WalkBuilder::new(&resolved.path);
    builder
        .standard_filters(false)
        .hidden(true)
        .follow_links(false);

    let input_root = resolved.path.clone();
    let output_root = resolved.output_root.clone();
    let ignore_globs = config.ignore_patterns.clone().unwrap_or_default();
    debug!(
        "Configuring walker for '{}' ({} ignore globs, output root '{}')",
        input_root.display(),
        ignore_globs.len(),
        output_root.display()
    );

    builder.filter_entry(move |entry| {
        let path = entry.path();
        if entry.depth() > 0 && path.starts_with(&output_root) {
            debug!("Skipping output root: {}", path.display());
            return false;
        }
        if let Ok(relative) = path.strip_prefix(&input_root) {
            if ignore_globs.iter().any(|glob| glob.matches_path(relative)) {
                debug!("Skipping {} (matches ignore glob)", path.display());
                return false;
            }
        }
        true
    });

    builder.build_parallel()
}
