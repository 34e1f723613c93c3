//! Full-game runs against the default maze layout

use maze_core::prelude::*;

/// Waypoints for a winning run: up through the gap between the walls at
/// (600, 200) and (800, 200), along the top corridor, then onto the goal.
/// Every point keeps at least 40px of clearance from the nearest wall.
const WINNING_PATH: [(f32, f32); 5] = [
    (700.0, 360.0),
    (700.0, 240.0),
    (700.0, 100.0),
    (900.0, 100.0),
    (1090.0, 100.0),
];

fn default_game() -> MazeGame {
    MazeGame::new(MazeConfig::default()).expect("default config is valid")
}

/// A frame holding a pinch at the given index-tip position
fn pinch_hold(x: f32, y: f32) -> FrameInput {
    FrameInput::pinch(PinchSample::new(
        Point2::new(x, y),
        Point2::new(x + 8.0, y + 6.0),
    ))
}

fn has_banner(commands: &[DrawCommand], prefix: &str) -> bool {
    commands
        .iter()
        .any(|c| matches!(c, DrawCommand::Text { text, .. } if text.starts_with(prefix)))
}

#[test]
fn test_winning_run_through_the_gap() {
    let mut game = default_game();

    game.step(&FrameInput::idle());
    game.step(&pinch_hold(640.0, 360.0));
    assert!(game.snapshot().grabbed);

    let mut last = Vec::new();
    for &(x, y) in &WINNING_PATH {
        assert!(
            game.status().is_playing(),
            "run ended early at ({x}, {y}): {:?}",
            game.status()
        );
        last = game.step(&pinch_hold(x, y));
    }

    assert_eq!(game.status(), GameStatus::Won);
    assert!(has_banner(&last, "YOU WIN!"));

    // The won world ignores further movement
    game.step(&pinch_hold(640.0, 360.0));
    assert_eq!(game.snapshot().position, Point2::new(1090.0, 100.0));
}

#[test]
fn test_crash_freeze_and_recover() {
    let mut game = default_game();

    game.step(&pinch_hold(640.0, 360.0));
    let commands = game.step(&pinch_hold(800.0, 400.0)); // dead center of a wall
    assert_eq!(game.status(), GameStatus::GameOver);
    assert!(has_banner(&commands, "GAME OVER!"));

    // Frozen frames repeat the same picture no matter the input
    let first = game.step(&FrameInput::idle());
    let second = game.step(&pinch_hold(100.0, 100.0));
    assert_eq!(first, second);
    assert_eq!(game.snapshot().position, Point2::new(800.0, 400.0));

    // Reset restores the start and play resumes
    let commands = game.step(&FrameInput::reset());
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.snapshot().position, Point2::new(640.0, 360.0));
    assert!(!has_banner(&commands, "GAME OVER!"));

    game.step(&pinch_hold(700.0, 360.0));
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.snapshot().position, Point2::new(700.0, 360.0));
}

#[test]
fn test_replay_is_deterministic() {
    fn run_script(script: &[FrameInput]) -> (Vec<Vec<DrawCommand>>, GameSnapshot) {
        let mut game = default_game();
        let frames = script.iter().map(|input| game.step(input)).collect();
        (frames, game.snapshot())
    }

    let mut script = vec![FrameInput::idle(), pinch_hold(640.0, 360.0)];
    script.push(pinch_hold(400.0, 400.0)); // crash
    script.push(FrameInput::idle());
    script.push(FrameInput::reset());
    script.push(pinch_hold(640.0, 360.0));
    for &(x, y) in &WINNING_PATH {
        script.push(pinch_hold(x, y));
    }
    script.push(FrameInput::idle());

    let (first_frames, first_end) = run_script(&script);
    let (second_frames, second_end) = run_script(&script);

    assert_eq!(first_frames, second_frames);
    assert_eq!(first_end, second_end);
    assert_eq!(first_end.status, GameStatus::Won);
}

#[test]
fn test_tracker_landmarks_drive_the_game() {
    use maze_core::landmarks::{INDEX_FINGER_TIP, MIDDLE_FINGER_TIP};

    let mut game = default_game();

    // A full 21-point hand with the pinch fingertips over the disc start
    let mut points = vec![Point2::new(0.0, 0.0); 21];
    points[INDEX_FINGER_TIP] = Point2::new(640.0, 360.0);
    points[MIDDLE_FINGER_TIP] = Point2::new(648.0, 366.0);
    let frame = HandFrame::new(points);

    game.step(&FrameInput {
        hand: frame.pinch_sample(),
        reset_requested: false,
    });
    assert!(game.snapshot().grabbed);

    // A frame cut short of the middle fingertip counts as no hand
    let short = HandFrame::new(vec![Point2::new(0.0, 0.0); 10]);
    game.step(&FrameInput {
        hand: short.pinch_sample(),
        reset_requested: false,
    });
    assert!(game.snapshot().grabbed);
    assert_eq!(game.snapshot().position, Point2::new(640.0, 360.0));
}

#[test]
fn test_open_hand_parks_the_disc() {
    let mut game = default_game();

    game.step(&pinch_hold(700.0, 300.0));
    assert!(game.snapshot().grabbed);

    // Fingers spread far apart: the disc is released where it sits
    let open = FrameInput::pinch(PinchSample::new(
        Point2::new(100.0, 100.0),
        Point2::new(200.0, 200.0),
    ));
    game.step(&open);
    let snapshot = game.snapshot();
    assert!(!snapshot.grabbed);
    assert_eq!(snapshot.position, Point2::new(700.0, 300.0));

    // A half-tracked hand is no hand at all
    assert_eq!(
        FrameInput::from_fingertips(Some(Point2::new(50.0, 50.0)), None, false),
        FrameInput::idle()
    );
    game.step(&FrameInput::from_fingertips(
        Some(Point2::new(50.0, 50.0)),
        None,
        false,
    ));
    assert_eq!(game.snapshot().position, Point2::new(700.0, 300.0));
}
