use std::collections::HashMap;

use crate::body::{BodyStore, TagBody, TagTheme};
use crate::config::SimConfig;
use crate::math::Vec2;

use super::perf_stats::PerfStats;
use super::{extract, random, SimCore};

pub(super) fn create_sim_core(config: SimConfig) -> SimCore {
    SimCore {
        config,
        bodies: BodyStore::new(),
        drags: HashMap::new(),
        container_w: 0.0,
        container_h: 0.0,
        transforms: Vec::new(),
        frame: 0,
        rng_state: 12345,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

/// Scatter a new tag above the container: columns cycle left to right,
/// each spawn sits `spawn_stagger` higher than the last, and a small
/// random horizontal velocity breaks up the fall.
pub(super) fn spawn_tag(core: &mut SimCore, label: &str, theme: TagTheme, w: f32, h: f32) -> u32 {
    let index = core.bodies.len() as u32;
    let cfg = core.config;

    let columns = cfg.spawn_columns.max(1);
    let column = index % columns;
    let column_w = if core.container_w > 0.0 {
        core.container_w / columns as f32
    } else {
        0.0
    };

    let jitter_range = (column_w - w).max(0.0);
    let jitter = random::unit_f32(&mut core.rng_state) * jitter_range;
    let x = (column as f32 * column_w + jitter)
        .min((core.container_w - w).max(0.0))
        .max(0.0);
    let y = -(cfg.spawn_clearance + index as f32 * cfg.spawn_stagger);

    let vx = (random::unit_f32(&mut core.rng_state) - 0.5) * 2.0 * cfg.scatter_speed;

    let mut body = TagBody::new(label, theme, w, h);
    body.pos = Vec2::new(x, y);
    body.vel = Vec2::new(vx, 0.0);

    let id = core.bodies.insert(body);
    extract::rebuild_transforms(core);
    id
}
