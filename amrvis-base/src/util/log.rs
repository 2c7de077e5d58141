//! Logging conventions shared by the amrvis crates.

/// Log target of the per-box messages emitted whenever a `GridPicture` (in `amrvis-render`)
/// is built or rescaled.
pub const GRID_PICTURE_TARGET: &str = "amrvis_render::grid_picture";

/// Provides the recommended log filter for programs which want to exclude particularly noisy
/// details of amrvis and its dependencies.
///
/// The guiding principle for this filtering is that at [`log::Level::Debug`] or lower level,
/// there should be no messages produced for every box of every level unless tracing was
/// asked for explicitly. Per-box mapping messages are therefore only let through at
/// [`log::Level::Trace`] when `trace_boxes` is true.
#[allow(clippy::missing_inline_in_public_items)]
pub fn standard_filter(metadata: &log::Metadata<'_>, trace_boxes: bool) -> bool {
    let target = metadata.target();

    if target.starts_with(GRID_PICTURE_TARGET) {
        return trace_boxes || metadata.level() < log::Level::Trace;
    }

    !(target.starts_with("x11rb::") // noisy
        || target.starts_with("winit::") // noisy at Debug level
        || target.starts_with("calloop::"))
}
