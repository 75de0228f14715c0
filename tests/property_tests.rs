//! Property tests over random boards and seeds.

use proptest::prelude::*;

use snakes_ladders::{
    ChaChaSource, DiceGame, Die, EventRecorder, GameEnd, GameObserver, Jump, JumpTable,
    SnakesAndLadders,
};

const TURN_LIMIT: u32 = 2_000;

/// Final square plus jumps that all stay on the board.
fn board_strategy() -> impl Strategy<Value = (usize, Vec<Jump>)> {
    (2usize..60).prop_flat_map(|final_square| {
        let jump = (1..final_square, 0..=final_square)
            .prop_map(|(square, target)| Jump::new(square, target as i64 - square as i64));
        (Just(final_square), prop::collection::vec(jump, 0..12))
    })
}

fn game(final_square: usize, jumps: &[Jump], sides: u32, seed: u64) -> SnakesAndLadders {
    let board = JumpTable::new(final_square, jumps).unwrap();
    let die = Die::new(sides, Box::new(ChaChaSource::new(seed))).unwrap();
    SnakesAndLadders::new(board, die)
        .with_turn_limit(Some(TURN_LIMIT))
        .unwrap()
}

/// Records any notification that sees the token off the board.
#[derive(Default)]
struct BoundsChecker {
    violations: Vec<usize>,
    notifications: usize,
}

impl BoundsChecker {
    fn check(&mut self, game: &dyn DiceGame) {
        self.notifications += 1;
        if game.square() > game.final_square() {
            self.violations.push(game.square());
        }
    }
}

impl GameObserver for BoundsChecker {
    fn notify_start(&mut self, game: &dyn DiceGame) {
        assert_eq!(game.square(), 0);
        self.check(game);
    }

    fn notify_turn(&mut self, game: &dyn DiceGame, _roll: u32) {
        self.check(game);
    }

    fn notify_end(&mut self, game: &dyn DiceGame) {
        self.check(game);
    }
}

proptest! {
    #[test]
    fn prop_play_terminates_within_limit(
        (final_square, jumps) in board_strategy(),
        sides in 1u32..12,
        seed in any::<u64>(),
    ) {
        let mut game = game(final_square, &jumps, sides, seed);
        let outcome = game.play();

        prop_assert!(outcome.turns <= TURN_LIMIT);
        match outcome.end {
            GameEnd::Won => prop_assert_eq!(outcome.final_position, final_square),
            GameEnd::TurnLimit => prop_assert_eq!(outcome.turns, TURN_LIMIT),
        }
    }

    #[test]
    fn prop_square_stays_on_board(
        (final_square, jumps) in board_strategy(),
        sides in 1u32..12,
        seed in any::<u64>(),
    ) {
        let mut game = game(final_square, &jumps, sides, seed);
        let mut checker = BoundsChecker::default();
        let outcome = game.play_with(&mut checker);

        prop_assert!(checker.violations.is_empty(), "off board: {:?}", checker.violations);
        prop_assert_eq!(checker.notifications, outcome.turns as usize + 2);
    }

    #[test]
    fn prop_replay_with_reset_source_is_identical(
        (final_square, jumps) in board_strategy(),
        sides in 1u32..12,
        seed in any::<u64>(),
    ) {
        let mut game = game(final_square, &jumps, sides, seed);

        let mut first = EventRecorder::new();
        game.play_with(&mut first);

        game.die_mut().replace_source(Box::new(ChaChaSource::new(seed)));
        let mut second = EventRecorder::new();
        game.play_with(&mut second);

        prop_assert_eq!(first.events(), second.events());
    }

    #[test]
    fn prop_rolls_within_sides(sides in 1u32..100, seed in any::<u64>()) {
        let mut die = Die::new(sides, Box::new(ChaChaSource::new(seed))).unwrap();
        for _ in 0..50 {
            let roll = die.roll();
            prop_assert!((1..=sides).contains(&roll));
        }
    }

    #[test]
    fn prop_out_of_range_jumps_rejected(
        final_square in 1usize..60,
        square in 0usize..60,
        overshoot in 1i64..20,
    ) {
        prop_assume!(square <= final_square);
        let past_end = Jump::new(square, final_square as i64 - square as i64 + overshoot);
        let before_start = Jump::new(square, -(square as i64) - overshoot);

        prop_assert!(JumpTable::new(final_square, &[past_end]).is_err());
        prop_assert!(JumpTable::new(final_square, &[before_start]).is_err());
    }
}
