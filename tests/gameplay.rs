use std::collections::VecDeque;

use snake_powerups::game::{FOOD_BURST, FOOD_POINTS, Game, GameStatus};
use snake_powerups::grid::{Cell, Direction, GRID_WIDTH};
use snake_powerups::rng::{RandomSource, SeededRng};

/// Replays queued integers, then falls back to the low end of each range.
struct Scripted(VecDeque<i32>);

impl Scripted {
    fn new(values: &[i32]) -> Self {
        Scripted(values.iter().copied().collect())
    }
}

impl RandomSource for Scripted {
    fn range_i32(&mut self, low: i32, _high: i32) -> i32 {
        self.0.pop_front().unwrap_or(low)
    }

    fn range_f32(&mut self, low: f32, _high: f32) -> f32 {
        low
    }
}

#[test]
fn eat_then_run_into_the_wall() {
    let mut game = Game::new(10.0, Scripted::new(&[25, 15]));
    assert_eq!(game.food(), Cell::new(25, 15));
    assert_eq!(game.snake().head(), Cell::new(20, 15));

    let mut now = 0.0;
    let mut tick = |game: &mut Game<Scripted>| {
        now += 0.1;
        game.tick(now).status
    };

    for _ in 0..4 {
        assert_eq!(tick(&mut game), GameStatus::Playing);
    }
    assert_eq!(game.score(), 0);

    tick(&mut game);
    assert_eq!(game.score(), FOOD_POINTS);
    assert_eq!(game.snake().len(), 1, "growth waits for the next move");
    assert_eq!(game.particles().len(), FOOD_BURST);
    assert_eq!(game.food(), Cell::new(0, 0));

    tick(&mut game);
    assert_eq!(game.snake().len(), 2);

    while game.snake().head().x < GRID_WIDTH - 1 {
        assert_eq!(tick(&mut game), GameStatus::Playing);
    }
    assert_eq!(tick(&mut game), GameStatus::GameOver);
    assert_eq!(game.score(), FOOD_POINTS);

    // Nothing moves after the game is over.
    let head = game.snake().head();
    assert_eq!(tick(&mut game), GameStatus::GameOver);
    assert_eq!(game.snake().head(), head);

    game.restart();
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.score(), 0);
}

#[test]
fn reversal_input_is_ignored() {
    let mut game = Game::new(10.0, Scripted::new(&[0, 0]));
    game.on_input(Direction::Left);
    game.tick(0.1);
    assert_eq!(game.snake().direction(), Direction::Right);
    assert_eq!(game.snake().head(), Cell::new(21, 15));
}

#[test]
fn length_grows_by_at_most_one_per_tick() {
    let mut rng = SeededRng::seeded(2024);
    let dirs = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    for round in 0..20 {
        let mut game = Game::new(10.0, SeededRng::seeded(round));
        let mut now = 0.0;
        while game.status() == GameStatus::Playing && now < 120.0 {
            if rng.range_i32(0, 4) == 0 {
                game.on_input(dirs[rng.index(dirs.len())]);
            }
            let before = game.snake().len();
            now += 0.1;
            let snap = game.tick(now);
            assert!(snap.snake.len() <= before + 1);
            assert!(!snap.snake.is_empty());
            assert!(snap.particles.iter().all(|p| p.life > 0));
            assert!(!snap.snake.contains(&snap.food) || snap.modifiers.ghost());
        }
    }
}

#[test]
fn length_only_grows_on_the_tick_after_eating() {
    let mut steer = SeededRng::seeded(7);
    let dirs = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    for round in 100..120 {
        let mut game = Game::new(10.0, SeededRng::seeded(round));
        let mut now = 0.0;
        let mut grow_pending = false;
        while game.status() == GameStatus::Playing && now < 120.0 {
            if steer.range_i32(0, 3) == 0 {
                game.on_input(dirs[steer.index(dirs.len())]);
            }
            let (before_len, before_score) = (game.snake().len(), game.score());
            now += 0.1;
            let snap = game.tick(now);
            let after = snap.snake.len();

            if snap.status == GameStatus::GameOver {
                assert_eq!(after, before_len);
                break;
            }
            if after > before_len {
                assert!(grow_pending, "round {round}: grew at {now:.1}s without eating");
                assert_eq!(after, before_len + 1);
            }
            // A shrink pickup on the growth tick is the only way to fall short.
            if grow_pending && after != before_len + 1 {
                assert!(after <= before_len);
            }
            if !grow_pending && after < before_len {
                assert!(after >= 3);
            }
            grow_pending = snap.score > before_score;
        }
    }
}
