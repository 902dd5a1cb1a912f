use crate::core::data::render_params::RenderParams;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;

/// Everything one computation needs: the plane rectangle, the output
/// resolution and the quality parameters, snapshotted together at dispatch
/// time so a mid-computation commit cannot mix old and new values.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComputeJob {
    pub viewport: Viewport,
    pub resolution: Resolution,
    pub params: RenderParams,
}
