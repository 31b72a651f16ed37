//! End-to-end sessions driven through the public game loop

use rope_jump::platform::{InputEvent, ManualClock};
use rope_jump::renderer::{RecordingRenderer, RopeFrame};
use rope_jump::sim::{GameState, SceneFrame, SceneState};
use rope_jump::{Error, GameLoop, LoopPhase, Tuning};

const FRAME_MS: f64 = 16.67;

fn rope_game() -> GameLoop<GameState, ManualClock, RecordingRenderer<RopeFrame>> {
    let mut game = GameLoop::new(
        GameState::new(&Tuning::default()),
        ManualClock::new(1_000.0),
        RecordingRenderer::default(),
    );
    game.start().unwrap();
    game
}

fn step(game: &mut GameLoop<GameState, ManualClock, RecordingRenderer<RopeFrame>>) -> bool {
    game.clock_mut().advance(FRAME_MS);
    game.frame()
}

#[test]
fn test_failed_renderer_never_starts() {
    let mut game = GameLoop::new(
        GameState::default(),
        ManualClock::default(),
        RecordingRenderer::<RopeFrame>::failing("no context"),
    );
    let err = game.start().unwrap_err();
    assert!(matches!(err, Error::RendererUnavailable(_)));
    assert_eq!(game.phase(), LoopPhase::Initializing);

    for _ in 0..5 {
        game.clock_mut().advance(FRAME_MS);
        assert!(!game.frame());
    }
    assert!(game.renderer().frames.is_empty());
    assert_eq!(game.sim().rope.angle_degrees, 0.0);
}

#[test]
fn test_first_threshold_crossing_scores_exactly_once() {
    let mut game = rope_game();

    let mut first_cross = None;
    for _ in 0..2000 {
        let angle = game.sim().rope.angle_degrees;
        if !game.sim().player.airborne && angle > 240.0 && angle < 250.0 {
            game.queue(InputEvent::Jump);
        }
        assert!(step(&mut game), "rope caught the player");
        if game.sim().rope.angle_degrees > 270.0 {
            first_cross = Some(game.renderer().frames.len() - 1);
            break;
        }
    }
    let first_cross = first_cross.expect("rope never reached 270°");

    // Finish the lap
    while game.sim().rope.angle_degrees > 200.0 {
        assert!(step(&mut game));
    }

    let frames = &game.renderer().frames;
    let scores: Vec<u32> = frames.iter().map(|f| f.score).collect();
    assert!(scores[..first_cross].iter().all(|&s| s == 1));
    assert!(scores[first_cross..].iter().all(|&s| s == 2));
    assert_eq!(frames[first_cross].jumps_cleared, 1);
}

#[test]
fn test_collision_halts_the_loop_for_good() {
    let mut game = rope_game();

    let mut ticks = 0;
    while step(&mut game) {
        ticks += 1;
        assert!(ticks < 1000, "grounded player was never caught");
    }
    assert_eq!(game.phase(), LoopPhase::Over);

    // The terminal frame is still drawn
    let drawn = game.renderer().frames.len();
    let last = *game.renderer().last().unwrap();
    assert!(last.over);
    assert_eq!(last.score, 1);

    for _ in 0..10 {
        assert!(!step(&mut game));
    }
    assert_eq!(game.renderer().frames.len(), drawn);
    assert_eq!(game.sim().rope.angle_degrees, last.rope_angle_degrees);
}

#[test]
fn test_clock_skew_does_not_rewind() {
    let mut game = rope_game();
    for _ in 0..30 {
        step(&mut game);
    }
    let angle = game.sim().rope.angle_degrees;

    game.clock_mut().advance(-500.0);
    assert!(game.frame());
    assert_eq!(game.sim().rope.angle_degrees, angle);

    // Timing resumes from the skewed timestamp
    game.clock_mut().advance(1000.0);
    assert!(game.frame());
    assert!(game.sim().rope.angle_degrees > angle);
}

#[test]
fn test_long_stall_keeps_state_valid() {
    let mut game = rope_game();
    game.queue(InputEvent::Jump);
    step(&mut game);

    // A backgrounded tab resumes with one huge delta
    game.clock_mut().advance(3_600_000.0);
    game.frame();
    let sim = game.sim();
    assert!(sim.rope.angle_degrees >= 0.0 && sim.rope.angle_degrees < 360.0);
    assert!(sim.player.height.is_finite());
}

#[test]
fn test_autopilot_session() {
    let mut game = rope_game();
    game.set_autopilot(true);
    for _ in 0..600 {
        assert!(step(&mut game), "autopilot was caught");
    }
    assert!(game.sim().jumps_cleared() >= 2);
}

#[test]
fn test_scene_runs_forever_and_turns() {
    let mut game = GameLoop::new(
        SceneState::default(),
        ManualClock::default(),
        RecordingRenderer::<SceneFrame>::default(),
    );
    game.start().unwrap();

    for _ in 0..5 {
        game.queue(InputEvent::RotateCameraRight);
    }
    game.queue(InputEvent::RotateCameraLeft);
    game.queue(InputEvent::Jump);

    for _ in 0..120 {
        game.clock_mut().advance(FRAME_MS);
        assert!(game.frame());
    }

    let last = game.renderer().last().unwrap();
    assert_eq!(last.camera_angle_degrees, 274.0);
    // 120 frames of 16.67 ms at 30°/s
    assert!((last.spin_degrees - 60.01).abs() < 0.05);
    assert_eq!(game.phase(), LoopPhase::Running);
}
