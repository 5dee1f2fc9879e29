//! Hand Beat entry point
//!
//! Headless demo mode: an autopilot plays a session against the scheduler,
//! striking armed targets with the matching hand until the game is won. A
//! real deployment wires `GameSession` to a camera, a hand-tracking
//! detector, and a renderer instead.

use hand_beat::GameSession;
use hand_beat::sim::Outcome;
use hand_beat::tracker::{AutoPilot, LandmarkSource};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xBEA7);
    log::info!("Hand Beat demo starting with seed {seed}");

    let mut session = GameSession::new(seed, 0.0);
    let mut pilot = AutoPilot::new();

    // ~30fps frames for up to two minutes of game time
    let frame_ms = 33.0;
    let mut now = 0.0;
    let mut last_score = 0;
    while session.outcome() == Outcome::Playing && now < 120_000.0 {
        now += frame_ms;
        let input = pilot.next_frame(now).unwrap_or_default();
        let view = session.on_frame(input, now);
        if view.score != last_score {
            log::info!("t={now:.0}ms score {} -> {}", last_score, view.score);
            last_score = view.score;
        }
        pilot.observe(view);
    }

    println!(
        "demo finished at t={:.1}s: outcome {:?}, score {}",
        now / 1000.0,
        session.outcome(),
        session.score()
    );
    assert_eq!(session.outcome(), Outcome::Won, "autopilot plays a clean game");
}
