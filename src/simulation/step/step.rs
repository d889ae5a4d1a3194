use super::{extract, integrate, sleep, solve, PerfTimer, SimCore};

pub(super) fn step(core: &mut SimCore) {
    // A zero-area container means the host has not measured itself yet;
    // idle until real bounds arrive instead of collapsing every body
    // onto a zero-width floor.
    if !core.is_ready() {
        return;
    }

    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
        core.perf_stats.frame = core.frame;
        core.perf_stats.bodies_total = core.bodies.len() as u32;
        core.perf_stats.active_drags = core.drags.len() as u32;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // Sleep hysteresis reads last frame's settled velocities, so it must
    // run before the integrator re-applies gravity.
    if perf_on {
        let t0 = PerfTimer::start();
        sleep::update_sleep(core);
        core.perf_stats.sleep_ms = t0.elapsed_ms();
    } else {
        sleep::update_sleep(core);
    }

    if perf_on {
        let t0 = PerfTimer::start();
        integrate::integrate(core);
        core.perf_stats.integrate_ms = t0.elapsed_ms();
    } else {
        integrate::integrate(core);
    }

    if perf_on {
        let t0 = PerfTimer::start();
        solve::solve(core);
        core.perf_stats.solve_ms = t0.elapsed_ms();
    } else {
        solve::solve(core);
    }

    if perf_on {
        let t0 = PerfTimer::start();
        extract::rebuild_transforms(core);
        core.perf_stats.extract_ms = t0.elapsed_ms();
    } else {
        extract::rebuild_transforms(core);
    }

    if perf_on {
        // Post-step body census
        let mut sleeping = 0u32;
        let mut dragging = 0u32;
        for body in core.bodies.iter() {
            if body.sleeping {
                sleeping += 1;
            }
            if body.dragging {
                dragging += 1;
            }
        }
        core.perf_stats.bodies_sleeping = sleeping;
        core.perf_stats.bodies_dragging = dragging;
        core.perf_stats.bodies_awake =
            core.perf_stats.bodies_total - sleeping;
        if let Some(start) = step_start {
            core.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    core.frame += 1;
}
