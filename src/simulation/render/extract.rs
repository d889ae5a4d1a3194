use super::{SimCore, TRANSFORM_STRIDE};

/// Rebuild the render snapshot: `TRANSFORM_STRIDE` f32s per body in
/// spawn order (x, y, dragging flag, sleeping flag). JS reads this
/// buffer zero-copy through `transforms_ptr`; physics state itself is
/// never handed out mutably.
pub(super) fn rebuild_transforms(core: &mut SimCore) {
    core.transforms.clear();
    core.transforms.reserve(core.bodies.len() * TRANSFORM_STRIDE);

    for body in core.bodies.iter() {
        core.transforms.push(body.pos.x);
        core.transforms.push(body.pos.y);
        core.transforms.push(if body.dragging { 1.0 } else { 0.0 });
        core.transforms.push(if body.sleeping { 1.0 } else { 0.0 });
    }
}
