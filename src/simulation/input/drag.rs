//! Pointer drag state machine.
//!
//! One drag per pointer, one pointer per body. While a drag is live the
//! body's position belongs to the pointer alone: velocity is pinned to
//! zero and the integrator/solver leave the body where the pointer put
//! it. Release turns recent pointer motion into a fling velocity.

use std::collections::VecDeque;

use crate::math::Vec2;

use super::SimCore;

/// Retained pointer samples per drag. Oldest is evicted first.
pub(super) const HISTORY_CAP: usize = 8;

pub(super) struct DragSample {
    pub(super) pos: Vec2,
    pub(super) time_ms: f64,
}

pub(super) struct DragState {
    pub(super) body_id: u32,
    /// Pointer position minus body top-left at grab time
    pub(super) grab: Vec2,
    pub(super) history: VecDeque<DragSample>,
}

pub(super) fn pointer_down(
    core: &mut SimCore,
    body_id: u32,
    pointer_id: i32,
    x: f32,
    y: f32,
    _time_ms: f64,
) -> bool {
    if core.drags.contains_key(&pointer_id) {
        return false;
    }
    if core.drags.values().any(|d| d.body_id == body_id) {
        return false;
    }

    let Some(body) = core.bodies.get_mut(body_id) else {
        return false;
    };
    if !body.is_measured() {
        return false;
    }

    body.dragging = true;
    body.sleeping = false;
    body.vel = Vec2::zero();

    // History fills from move events only, so a long press followed by
    // a quick flick still flings at flick speed.
    core.drags.insert(
        pointer_id,
        DragState {
            body_id,
            grab: Vec2::new(x, y) - body.pos,
            history: VecDeque::with_capacity(HISTORY_CAP),
        },
    );
    true
}

pub(super) fn pointer_move(
    core: &mut SimCore,
    pointer_id: i32,
    x: f32,
    y: f32,
    time_ms: f64,
) -> bool {
    let Some(drag) = core.drags.get_mut(&pointer_id) else {
        return false;
    };
    let Some(body) = core.bodies.get_mut(drag.body_id) else {
        return false;
    };

    let target = Vec2::new(x, y) - drag.grab;

    // Soft bound: the tag may poke past the container edges by
    // `drag_slack`, never further. min-before-max keeps a degenerate
    // container from inverting the range.
    let slack = core.config.drag_slack;
    let max_x = core.container_w - body.size.x + slack;
    let max_y = core.container_h - body.size.y + slack;
    body.pos.x = target.x.min(max_x).max(-slack);
    body.pos.y = target.y.min(max_y).max(-slack);
    body.vel = Vec2::zero();

    if drag.history.len() == HISTORY_CAP {
        drag.history.pop_front();
    }
    drag.history.push_back(DragSample { pos: body.pos, time_ms });
    true
}

/// Release a drag (pointer up and pointer cancel both land here).
/// Returns the freed body id, or 0 when the pointer owned nothing.
pub(super) fn pointer_up(core: &mut SimCore, pointer_id: i32) -> u32 {
    let Some(drag) = core.drags.remove(&pointer_id) else {
        return 0;
    };
    let Some(body) = core.bodies.get_mut(drag.body_id) else {
        return 0;
    };

    body.dragging = false;
    body.vel = fling_velocity(&drag, &core.config);
    drag.body_id
}

/// Velocity imparted at release: displacement between the oldest and
/// newest retained samples over their time span (px/ms), scaled to
/// px/frame and clamped per axis. Fewer than two samples, or a
/// non-positive span, flings nothing.
fn fling_velocity(drag: &DragState, config: &crate::config::SimConfig) -> Vec2 {
    let (Some(oldest), Some(newest)) = (drag.history.front(), drag.history.back()) else {
        return Vec2::zero();
    };
    if drag.history.len() < 2 {
        return Vec2::zero();
    }

    let span_ms = (newest.time_ms - oldest.time_ms) as f32;
    if span_ms <= 0.0 {
        return Vec2::zero();
    }

    let max = config.max_fling_speed;
    let vx = (newest.pos.x - oldest.pos.x) / span_ms * config.fling_scale;
    let vy = (newest.pos.y - oldest.pos.y) / span_ms * config.fling_scale;
    Vec2::new(vx.clamp(-max, max), vy.clamp(-max, max))
}
