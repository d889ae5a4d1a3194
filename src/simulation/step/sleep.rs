use crate::math::Vec2;

use super::SimCore;

/// Sleep hysteresis, evaluated before gravity is applied each frame.
///
/// A resting body's velocity is zeroed by the floor clamp at the end of
/// the previous frame; reading it here, before the integrator re-adds
/// gravity, is what lets the speed ever fall below the sleep threshold.
///
/// Sleeping bodies hold velocity at exactly zero until something pushes
/// them past `wake_speed` (the solver on contact, the drag system on
/// grab, or a config change). Falling asleep additionally requires the
/// body to be settling onto the floor: low downward speed and a bottom
/// edge within `floor_snap` of the container bottom.
pub(super) fn update_sleep(core: &mut SimCore) {
    let cfg = &core.config;
    let floor = core.container_h;

    for body in core.bodies.iter_mut() {
        if !body.is_measured() || body.dragging {
            continue;
        }

        let speed = body.vel.length();
        if body.sleeping {
            if speed > cfg.wake_speed {
                body.sleeping = false;
            } else {
                // Drift below the wake threshold is noise; pin to rest
                body.vel = Vec2::zero();
            }
        } else {
            let near_floor = (floor - body.bottom()).abs() <= cfg.floor_snap;
            if speed < cfg.sleep_speed && body.vel.y < cfg.sleep_max_fall && near_floor {
                body.sleeping = true;
                body.vel = Vec2::zero();
            }
        }
    }
}
