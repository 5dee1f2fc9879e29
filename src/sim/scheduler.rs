//! Target slot scheduling
//!
//! Each slot cycles idle -> armed -> idle on randomized deadlines. The
//! schedule is plain data: a slot owns at most one `Pending` transition and
//! `advance` fires whatever is due, in chronological order. Chained
//! deadlines are based on the fired deadline's own timestamp rather than
//! the observation time, so the cadence is a pure function of the seed no
//! matter how irregularly the host polls.

use rand::Rng;

use super::state::{GameState, Outcome, Pending, PendingKind, TargetColor, TargetState};
use crate::consts::*;

/// Kick off (or re-kick) the cycle for every slot, superseding any pending
/// transition they already had.
pub fn start(state: &mut GameState, now_ms: f64) {
    for slot in 0..state.targets.len() {
        schedule_arm(state, slot, now_ms);
    }
    log::debug!("scheduler started for {} slots", state.targets.len());
}

/// Cancel every outstanding transition. Nothing fires after this until
/// `start` is called again.
pub fn stop(state: &mut GameState) {
    for t in &mut state.targets {
        t.epoch = t.epoch.wrapping_add(1);
        t.pending = None;
    }
}

/// Fire every transition that is due at `now_ms`.
///
/// Frozen once the outcome is terminal; restart is the only way back.
pub fn advance(state: &mut GameState, now_ms: f64) {
    if state.outcome != Outcome::Playing {
        return;
    }
    loop {
        // Earliest due deadline across slots; ties break to the lowest index
        let mut next: Option<(usize, f64)> = None;
        for (slot, t) in state.targets.iter().enumerate() {
            if let Some(p) = &t.pending {
                if p.fires_at <= now_ms && next.is_none_or(|(_, at)| p.fires_at < at) {
                    next = Some((slot, p.fires_at));
                }
            }
        }
        let Some((slot, _)) = next else { break };

        let Some(pending) = state.targets[slot].pending.take() else {
            break;
        };
        if pending.epoch != state.targets[slot].epoch {
            // Stale deadline from a superseded transition
            continue;
        }
        match pending.kind {
            PendingKind::Arm => arm(state, slot, pending.fires_at),
            PendingKind::Revert => revert(state, slot, pending.fires_at),
        }
    }
}

/// Queue the slot's next arm after a fresh random delay
pub(crate) fn schedule_arm(state: &mut GameState, slot: usize, base_ms: f64) {
    let delay = state.rng.random_range(0.0..ARM_DELAY_MAX_MS);
    let t = &mut state.targets[slot];
    t.epoch = t.epoch.wrapping_add(1);
    t.pending = Some(Pending {
        kind: PendingKind::Arm,
        fires_at: base_ms + delay,
        epoch: t.epoch,
    });
}

/// Idle -> Armed with a random color; exposure revert queued behind it
fn arm(state: &mut GameState, slot: usize, at: f64) {
    let color = if state.rng.random_bool(0.5) {
        TargetColor::Blue
    } else {
        TargetColor::Red
    };
    let t = &mut state.targets[slot];
    t.state = TargetState::Armed(color);
    t.armed_at = Some(at);
    t.epoch = t.epoch.wrapping_add(1);
    t.pending = Some(Pending {
        kind: PendingKind::Revert,
        fires_at: at + EXPOSURE_MS,
        epoch: t.epoch,
    });
    log::debug!("slot {slot} armed {color:?} at {at}ms");
}

/// Back to Idle (exposure expired or resolve hold finished), then queue the
/// next arm
fn revert(state: &mut GameState, slot: usize, at: f64) {
    let t = &mut state.targets[slot];
    t.state = TargetState::Idle;
    t.armed_at = None;
    schedule_arm(state, slot, at);
}

/// Resolution path used by the collision evaluator: set the hit/miss visual
/// and replace the slot's exposure revert with the shorter resolve hold.
/// The epoch bump and the state write share this one critical section, so
/// the superseded exposure deadline can never fire.
pub(crate) fn force_resolve(
    state: &mut GameState,
    slot: usize,
    resolved: TargetState,
    now_ms: f64,
) {
    let t = &mut state.targets[slot];
    t.state = resolved;
    t.armed_at = None;
    t.epoch = t.epoch.wrapping_add(1);
    t.pending = Some(Pending {
        kind: PendingKind::Revert,
        fires_at: now_ms + RESOLVE_HOLD_MS,
        epoch: t.epoch,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_queues_all_slots() {
        let mut state = GameState::new(11);
        start(&mut state, 0.0);
        for t in &state.targets {
            let p = t.pending.as_ref().expect("every slot scheduled");
            assert_eq!(p.kind, PendingKind::Arm);
            assert!(p.fires_at >= 0.0 && p.fires_at < ARM_DELAY_MAX_MS);
            assert_eq!(p.epoch, t.epoch);
        }
    }

    #[test]
    fn test_arm_and_auto_revert_cycle() {
        let mut state = GameState::new(11);
        start(&mut state, 0.0);

        // Step finely; with a 2000ms exposure and 50ms steps an armed slot
        // is guaranteed to be observed before the first exposure expires
        let mut observed = None;
        let mut now = 0.0;
        while observed.is_none() && now < ARM_DELAY_MAX_MS {
            now += 50.0;
            advance(&mut state, now);
            observed = state
                .targets
                .iter()
                .position(|t| matches!(t.state, TargetState::Armed(_)));
        }
        let slot = observed.expect("some slot arms within the max delay");

        let armed_at = state.targets[slot].armed_at.expect("armed slot has armed_at");
        let p = state.targets[slot].pending.expect("armed slot has a revert queued");
        assert_eq!(p.kind, PendingKind::Revert);
        assert_eq!(p.fires_at, armed_at + EXPOSURE_MS);

        // Exposure elapses untouched: back to Idle with a new arm queued
        advance(&mut state, p.fires_at);
        assert_eq!(state.targets[slot].state, TargetState::Idle);
        assert!(state.targets[slot].armed_at.is_none());
        let next = state.targets[slot].pending.expect("cycle continues");
        assert_eq!(next.kind, PendingKind::Arm);
        assert!(next.fires_at >= p.fires_at && next.fires_at < p.fires_at + ARM_DELAY_MAX_MS);
    }

    #[test]
    fn test_stale_deadline_is_dropped() {
        let mut state = GameState::new(11);
        start(&mut state, 0.0);

        // Supersede slot 0's arm by hand without clearing the old deadline
        let stale = state.targets[0].pending.unwrap();
        state.targets[0].epoch = state.targets[0].epoch.wrapping_add(1);
        state.targets[0].pending = Some(stale);

        advance(&mut state, stale.fires_at);
        // The stale arm must not have fired
        assert_eq!(state.targets[0].state, TargetState::Idle);
        assert!(state.targets[0].armed_at.is_none());
    }

    #[test]
    fn test_stop_cancels_everything() {
        let mut state = GameState::new(11);
        start(&mut state, 0.0);
        stop(&mut state);
        assert!(state.targets.iter().all(|t| t.pending.is_none()));

        // Nothing fires afterward
        advance(&mut state, 10.0 * ARM_DELAY_MAX_MS);
        assert!(state.targets.iter().all(|t| t.state == TargetState::Idle));
    }

    #[test]
    fn test_terminal_outcome_freezes_scheduler() {
        let mut state = GameState::new(11);
        start(&mut state, 0.0);
        state.outcome = Outcome::Won;
        advance(&mut state, 10.0 * ARM_DELAY_MAX_MS);
        assert!(state.targets.iter().all(|t| t.state == TargetState::Idle));
    }

    #[test]
    fn test_determinism_same_seed() {
        let mut a = GameState::new(99999);
        let mut b = GameState::new(99999);
        start(&mut a, 0.0);
        start(&mut b, 0.0);
        for step in 1..200 {
            let now = step as f64 * 100.0;
            advance(&mut a, now);
            advance(&mut b, now);
            for (ta, tb) in a.targets.iter().zip(&b.targets) {
                assert_eq!(ta.state, tb.state);
                assert_eq!(ta.armed_at, tb.armed_at);
            }
        }
    }

    #[test]
    fn test_late_poll_matches_timely_poll() {
        let mut timely = GameState::new(4242);
        let mut late = GameState::new(4242);
        start(&mut timely, 0.0);
        start(&mut late, 0.0);

        let horizon = 20_000.0;
        for step in 1..=2000 {
            advance(&mut timely, horizon * step as f64 / 2000.0);
        }
        advance(&mut late, horizon);

        for (ta, tb) in timely.targets.iter().zip(&late.targets) {
            assert_eq!(ta.state, tb.state);
            assert_eq!(ta.armed_at, tb.armed_at);
            assert_eq!(
                ta.pending.map(|p| (p.kind, p.fires_at)),
                tb.pending.map(|p| (p.kind, p.fires_at))
            );
        }
    }
}
