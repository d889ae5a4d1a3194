use crate::body::TagBody;
use crate::config::SimConfig;

use super::SimCore;

/// Iterative position solver: each pass clamps against the container
/// walls, then separates overlapping tag pairs. Corrections are small
/// (`baumgarte` of the excess past `slop`) so deep stacks relax over a
/// few frames instead of exploding apart.
pub(super) fn solve(core: &mut SimCore) {
    let iterations = core.config.solver_iterations;

    let mut wall_contacts = 0u32;
    let mut pairs_checked = 0u32;
    let mut pairs_resolved = 0u32;

    for _ in 0..iterations {
        wall_contacts += resolve_walls(core);
        let (checked, resolved) = resolve_pairs(core);
        pairs_checked += checked;
        pairs_resolved += resolved;
    }

    if core.perf_enabled {
        core.perf_stats.wall_contacts = wall_contacts;
        core.perf_stats.pairs_checked = pairs_checked;
        core.perf_stats.pairs_resolved = pairs_resolved;
    }
}

/// Clamp bodies into the container. There is no ceiling: tags spawn
/// above the container and fall in through the open top.
pub(super) fn resolve_walls(core: &mut SimCore) -> u32 {
    let cfg = core.config;
    let cw = core.container_w;
    let ch = core.container_h;
    let rest_cutoff = cfg.micro_bounce_cutoff();

    let mut contacts = 0u32;

    for body in core.bodies.iter_mut() {
        if !body.is_measured() || body.dragging {
            continue;
        }

        // Floor: clamp, bounce, rub off horizontal speed, and flatten
        // bounces too small to ever leave the ground again.
        if body.bottom() > ch {
            body.pos.y = ch - body.size.y;
            body.vel.y = -body.vel.y * cfg.wall_bounce;
            body.vel.x *= cfg.ground_friction;
            if body.vel.y.abs() < rest_cutoff {
                body.vel.y = 0.0;
            }
            contacts += 1;
        }

        if body.pos.x < 0.0 {
            body.pos.x = 0.0;
            body.vel.x = -body.vel.x * cfg.wall_bounce;
            contacts += 1;
        }
        if body.right() > cw {
            body.pos.x = cw - body.size.x;
            body.vel.x = -body.vel.x * cfg.wall_bounce;
            contacts += 1;
        }
    }

    contacts
}

/// One sweep over every unordered body pair.
/// Returns (pairs overlap-tested, pairs that actually overlapped).
pub(super) fn resolve_pairs(core: &mut SimCore) -> (u32, u32) {
    let cfg = core.config;
    let mut checked = 0u32;
    let mut resolved = 0u32;

    let bodies = core.bodies.as_mut_slice();
    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (left, right) = bodies.split_at_mut(j);
            let a = &mut left[i];
            let b = &mut right[0];

            if !a.is_measured() || !b.is_measured() {
                continue;
            }
            // A pair of pointer-owned bodies has no free participant
            if a.dragging && b.dragging {
                continue;
            }

            checked += 1;
            if resolve_pair(&cfg, a, b) {
                resolved += 1;
            }
        }
    }

    (checked, resolved)
}

fn resolve_pair(cfg: &SimConfig, a: &mut TagBody, b: &mut TagBody) -> bool {
    let overlap_x = (a.right().min(b.right())) - (a.pos.x.max(b.pos.x));
    let overlap_y = (a.bottom().min(b.bottom())) - (a.pos.y.max(b.pos.y));
    if overlap_x <= 0.0 || overlap_y <= 0.0 {
        return false;
    }

    // Contact wakes whatever it touches
    a.sleeping = false;
    b.sleeping = false;

    // Separate along the shallower axis; X on ties
    if overlap_x <= overlap_y {
        let dir = if b.center().x >= a.center().x { 1.0 } else { -1.0 };
        apply_correction(cfg, a, b, overlap_x, dir, Axis::X);
        apply_impulse(cfg, a, b, dir, Axis::X);
    } else {
        let dir = if b.center().y >= a.center().y { 1.0 } else { -1.0 };
        apply_correction(cfg, a, b, overlap_y, dir, Axis::Y);
        apply_impulse(cfg, a, b, dir, Axis::Y);

        // Vertical stacking rubs off horizontal slide
        if !a.dragging {
            a.vel.x *= cfg.stack_friction;
        }
        if !b.dragging {
            b.vel.x *= cfg.stack_friction;
        }
    }

    true
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

/// Positional correction: `baumgarte` of the overlap past `slop`,
/// split evenly between two free bodies. A dragged body is an anchor;
/// its partner absorbs the full correction.
fn apply_correction(cfg: &SimConfig, a: &mut TagBody, b: &mut TagBody, overlap: f32, dir: f32, axis: Axis) {
    if overlap <= cfg.slop {
        return;
    }
    let correction = (overlap - cfg.slop) * cfg.baumgarte;

    let (a_share, b_share) = if a.dragging {
        (0.0, correction)
    } else if b.dragging {
        (correction, 0.0)
    } else {
        (correction * 0.5, correction * 0.5)
    };

    match axis {
        Axis::X => {
            a.pos.x -= dir * a_share;
            b.pos.x += dir * b_share;
        }
        Axis::Y => {
            a.pos.y -= dir * a_share;
            b.pos.y += dir * b_share;
        }
    }
}

/// Velocity impulse along the separation axis, only when the pair is
/// closing. Dragged bodies keep their pinned zero velocity.
fn apply_impulse(cfg: &SimConfig, a: &mut TagBody, b: &mut TagBody, dir: f32, axis: Axis) {
    let rel = match axis {
        Axis::X => (b.vel.x - a.vel.x) * dir,
        Axis::Y => (b.vel.y - a.vel.y) * dir,
    };
    if rel >= 0.0 {
        return;
    }

    let impulse = -rel * cfg.body_bounce;
    match axis {
        Axis::X => {
            if !a.dragging {
                a.vel.x -= dir * impulse;
            }
            if !b.dragging {
                b.vel.x += dir * impulse;
            }
        }
        Axis::Y => {
            if !a.dragging {
                a.vel.y -= dir * impulse;
            }
            if !b.dragging {
                b.vel.y += dir * impulse;
            }
        }
    }
}
