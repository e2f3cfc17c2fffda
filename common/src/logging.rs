//! Common logging initializer
//!

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use tracing_tree::HierarchicalLayer;

/// Set up `tracing` for a binary.
///
/// Filters come from `RUST_LOG`.  With `use_tree` we get the hierarchical output from
/// `tracing-tree`, otherwise a compact one-line format.  Everything goes to stderr.
///
pub fn init_logging(name: &'static str, use_tree: bool) {
    // Load filters from environment
    //
    let filter = EnvFilter::from_default_env();

    // Do we want hierarchical output?
    //
    let (tree, flat) = if use_tree {
        (
            Some(
                HierarchicalLayer::new(2)
                    .with_ansi(true)
                    .with_span_retrace(true)
                    .with_span_modes(true)
                    .with_targets(true)
                    .with_verbose_entry(true)
                    .with_verbose_exit(true)
                    .with_bracketed_fields(true),
            ),
            None,
        )
    } else {
        (
            None,
            Some(
                fmt::layer()
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .compact(),
            ),
        )
    };

    // Combine filter & specific format
    //
    tracing_subscriber::registry()
        .with(filter)
        .with(tree)
        .with(flat)
        .init();

    tracing::trace!("{name}: logging initialised.");
}
