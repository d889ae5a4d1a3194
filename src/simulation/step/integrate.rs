use super::SimCore;

/// Gravity, air friction, speed clamp, then advance.
///
/// Dragged bodies are pointer-owned and sleeping bodies are at rest, so
/// both are skipped; so are bodies the host has not measured yet.
pub(super) fn integrate(core: &mut SimCore) {
    let cfg = core.config;

    for body in core.bodies.iter_mut() {
        if !body.is_measured() || body.dragging || body.sleeping {
            continue;
        }

        body.vel.y += cfg.gravity;
        body.vel.x *= cfg.air_friction;
        body.vel.y *= cfg.air_friction;

        body.vel.x = body.vel.x.clamp(-cfg.max_speed, cfg.max_speed);
        body.vel.y = body.vel.y.clamp(-cfg.max_speed, cfg.max_speed);

        body.pos += body.vel;
    }
}
