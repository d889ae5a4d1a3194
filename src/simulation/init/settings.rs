use super::perf_stats::PerfStats;
use super::SimCore;

pub(super) fn set_container(core: &mut SimCore, width: f32, height: f32) {
    core.container_w = width.max(0.0);
    core.container_h = height.max(0.0);
}

pub(super) fn set_body_size(core: &mut SimCore, id: u32, w: f32, h: f32) -> bool {
    let Some(body) = core.bodies.get_mut(id) else {
        return false;
    };
    body.size.x = w.max(0.0);
    body.size.y = h.max(0.0);
    true
}

pub(super) fn enable_perf_metrics(core: &mut SimCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats = PerfStats::default();
    }
}

pub(super) fn get_perf_stats(core: &SimCore) -> PerfStats {
    core.perf_stats.clone()
}
