use std::collections::HashSet;

use crate::games::SessionRng;
use crate::{log, log_warn};
use super::clock::ElapsedTime;
use super::events::{CellPaint, GameEvent, SessionEvent, SessionSummary};
use super::prompt::Prompt;
use super::settings::SnakeSessionSettings;
use super::entity::Snake;
use super::types::{Cell, Direction, EndReason, Input, SessionStatus};
use super::walls::build_walls;

const FOOD_SAMPLE_ATTEMPTS: usize = 100;

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    settings: SnakeSessionSettings,
    snake: Snake,
    food: Option<Cell>,
    walls: HashSet<Cell>,
    direction: Option<Direction>,
    pending_direction: Option<Direction>,
    status: SessionStatus,
    score: u32,
    elapsed: ElapsedTime,
    end_reason: Option<EndReason>,
}

impl SnakeGameState {
    pub fn new(settings: SnakeSessionSettings) -> Self {
        let walls = if settings.walls_enabled() {
            build_walls(&settings.bounds)
        } else {
            HashSet::new()
        };

        Self {
            settings,
            snake: Snake::centered(Cell::new(0, 0)),
            food: None,
            walls,
            direction: None,
            pending_direction: None,
            status: SessionStatus::NotStarted,
            score: 0,
            elapsed: ElapsedTime::default(),
            end_reason: None,
        }
    }

    /// Everything a blank canvas and UI need to show the freshly created session.
    pub fn initial_events(&self) -> Vec<GameEvent> {
        let mut events = vec![GameEvent::Cleared];

        let mut walls: Vec<Cell> = self.walls.iter().copied().collect();
        walls.sort_by_key(|cell| (cell.y, cell.x));
        events.extend(walls.into_iter().map(|cell| GameEvent::paint(cell, CellPaint::Wall)));
        events.extend(self.snake.cells().map(|cell| GameEvent::paint(cell, CellPaint::Snake)));
        if let Some(food) = self.food {
            events.push(GameEvent::paint(food, CellPaint::Food));
        }

        events.push(GameEvent::ScoreChanged(self.score));
        events.push(GameEvent::ClockChanged(self.elapsed));
        events.push(GameEvent::PromptChanged(self.prompt()));
        events
    }

    pub fn apply(&mut self, event: SessionEvent, rng: &mut SessionRng) -> Vec<GameEvent> {
        match event {
            SessionEvent::MoveTick => self.update(rng),
            SessionEvent::ClockTick => self.clock_tick(),
            SessionEvent::Input(input) => self.handle_input(input),
        }
    }

    pub fn handle_input(&mut self, input: Input) -> Vec<GameEvent> {
        let mut events = Vec::new();

        match (self.status, input) {
            (SessionStatus::NotStarted, Input::Start) => {
                self.direction = Some(Direction::Right);
                self.status = SessionStatus::Running;
                events.push(GameEvent::PromptChanged(Prompt::GameStarted));
                log!(
                    "Session started: {} mode, {} difficulty",
                    self.settings.mode.label(),
                    self.settings.difficulty.label()
                );
            }
            (SessionStatus::Running, Input::Turn(requested)) => {
                if let Some(current) = self.direction
                    && !requested.is_opposite(&current)
                {
                    self.pending_direction = Some(requested);
                }
            }
            _ => {}
        }

        events
    }

    /// One movement tick.
    pub fn update(&mut self, rng: &mut SessionRng) -> Vec<GameEvent> {
        let mut events = Vec::new();

        let Some(mut direction) = self.direction else {
            return events;
        };

        if self.food.is_none() {
            self.place_food(rng, &mut events);
        }

        if let Some(pending) = self.pending_direction.take() {
            direction = pending;
            self.direction = Some(pending);
        }

        let next_head = self.settings.bounds.wrap(self.snake.head().offset(direction));

        if self.snake.contains(&next_head) {
            self.finish(EndReason::SelfCollision, &mut events);
            return events;
        }
        if self.walls.contains(&next_head) {
            self.finish(EndReason::WallCollision, &mut events);
            return events;
        }

        self.snake.push_head(next_head);
        events.push(GameEvent::paint(next_head, CellPaint::Snake));

        if self.food == Some(next_head) {
            self.score += 1;
            self.food = None;
            events.push(GameEvent::FoodEaten { cell: next_head, score: self.score });
            events.push(GameEvent::ScoreChanged(self.score));
            log!("Ate food at ({}, {}). Score: {}", next_head.x, next_head.y, self.score);
            self.place_food(rng, &mut events);
        } else if let Some(tail) = self.snake.pop_tail() {
            events.push(GameEvent::paint(tail, CellPaint::Empty));
        }

        events
    }

    pub fn clock_tick(&mut self) -> Vec<GameEvent> {
        if !self.is_clock_running() {
            return Vec::new();
        }
        self.elapsed.tick();
        vec![GameEvent::ClockChanged(self.elapsed)]
    }

    fn finish(&mut self, reason: EndReason, events: &mut Vec<GameEvent>) {
        self.status = SessionStatus::GameOver;
        self.direction = None;
        self.pending_direction = None;
        self.end_reason = Some(reason);

        events.push(GameEvent::PromptChanged(Prompt::GameOver));
        events.push(GameEvent::Ended(reason));
        log!(
            "Game over ({:?}). Score: {}, time: {}",
            reason,
            self.score,
            self.elapsed
        );
    }

    fn place_food(&mut self, rng: &mut SessionRng, events: &mut Vec<GameEvent>) -> Option<Cell> {
        let Some(cell) = self.choose_food_cell(rng) else {
            log_warn!("No free cell left for food");
            return None;
        };

        self.food = Some(cell);
        events.push(GameEvent::paint(cell, CellPaint::Food));
        Some(cell)
    }

    fn choose_food_cell(&self, rng: &mut SessionRng) -> Option<Cell> {
        let bounds = self.settings.bounds;

        for _ in 0..FOOD_SAMPLE_ATTEMPTS {
            let cell = Cell::new(
                rng.random_range(bounds.min_x()..=bounds.max_x()),
                rng.random_range(bounds.min_y()..=bounds.max_y()),
            );
            if self.is_free(&cell) {
                return Some(cell);
            }
        }

        // Crowded grid: pick uniformly among the cells that are actually free.
        let free: Vec<Cell> = bounds.cells().filter(|cell| self.is_free(cell)).collect();
        rng.pick(&free)
    }

    fn is_free(&self, cell: &Cell) -> bool {
        !self.snake.contains(cell) && !self.walls.contains(cell)
    }

    pub fn settings(&self) -> &SnakeSessionSettings {
        &self.settings
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn walls(&self) -> &HashSet<Cell> {
        &self.walls
    }

    /// Heading the snake will take on the next movement tick; `None` while not moving.
    pub fn direction(&self) -> Option<Direction> {
        self.pending_direction.or(self.direction)
    }

    #[cfg(test)]
    pub fn direction_vector(&self) -> (i32, i32) {
        self.direction().map_or((0, 0), |d| d.delta())
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn elapsed(&self) -> ElapsedTime {
        self.elapsed
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn is_clock_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    pub fn prompt(&self) -> Prompt {
        match self.status {
            SessionStatus::NotStarted => Prompt::PressEnterToStart,
            SessionStatus::Running => Prompt::GameStarted,
            SessionStatus::GameOver => Prompt::GameOver,
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            score: self.score,
            elapsed: self.elapsed,
            snake_length: self.snake.len(),
            end_reason: self.end_reason,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_snake(settings: SnakeSessionSettings, snake: Snake) -> Self {
        let mut state = Self::new(settings);
        state.snake = snake;
        state
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use proptest::prelude::*;

    use super::*;
    use crate::games::snake::{Difficulty, GameMode, GridBounds, MIN_WALLS_HALF_EXTENT};

    fn settings(mode: GameMode, half_width: i32, half_height: i32) -> SnakeSessionSettings {
        SnakeSessionSettings {
            bounds: GridBounds::new(half_width, half_height),
            cell_size: 10,
            mode,
            difficulty: Difficulty::Medium,
            tick_interval: Duration::from_millis(100),
        }
    }

    fn snake_of(cells: &[(i32, i32)]) -> Snake {
        Snake::from_tail_to_head(cells.iter().map(|&(x, y)| Cell::new(x, y))).unwrap()
    }

    fn started(mut state: SnakeGameState) -> SnakeGameState {
        state.handle_input(Input::Start);
        state
    }

    fn body(state: &SnakeGameState) -> Vec<Cell> {
        state.snake().cells().collect()
    }

    fn run_until_game_over(state: &mut SnakeGameState, rng: &mut SessionRng) {
        for _ in 0..100 {
            if state.status() == SessionStatus::GameOver {
                return;
            }
            state.apply(SessionEvent::MoveTick, rng);
        }
    }

    #[test]
    fn test_new_session_is_not_started() {
        let state = SnakeGameState::new(settings(GameMode::Classic, 10, 10));
        assert_eq!(state.status(), SessionStatus::NotStarted);
        assert_eq!(state.snake().len(), 5);
        assert_eq!(state.snake().head(), Cell::new(2, 0));
        assert_eq!(state.food(), None);
        assert_eq!(state.direction_vector(), (0, 0));
        assert_eq!(state.score(), 0);
        assert_eq!(state.elapsed().seconds(), 0);
        assert!(state.walls().is_empty());
        assert_eq!(state.prompt(), Prompt::PressEnterToStart);
    }

    #[test]
    fn test_walls_mode_precomputes_walls() {
        let state = SnakeGameState::new(settings(GameMode::Walls, 5, 5));
        assert_eq!(state.walls().len(), 64);
        assert!(state.snake().cells().all(|cell| !state.walls().contains(&cell)));
    }

    #[test]
    fn test_initial_events_paint_everything() {
        let state = SnakeGameState::new(settings(GameMode::Walls, 6, 6));
        let events = state.initial_events();

        assert_eq!(events.first(), Some(&GameEvent::Cleared));
        assert_eq!(
            events.last(),
            Some(&GameEvent::PromptChanged(Prompt::PressEnterToStart))
        );
        let walls_painted = events
            .iter()
            .filter(|e| matches!(e, GameEvent::CellPainted { paint: CellPaint::Wall, .. }))
            .count();
        let snake_painted = events
            .iter()
            .filter(|e| matches!(e, GameEvent::CellPainted { paint: CellPaint::Snake, .. }))
            .count();
        assert_eq!(walls_painted, state.walls().len());
        assert_eq!(snake_painted, 5);
        assert!(events.contains(&GameEvent::ClockChanged(ElapsedTime::default())));
    }

    #[test]
    fn test_tick_without_direction_changes_nothing() {
        let mut rng = SessionRng::new(42);
        let mut state = SnakeGameState::new(settings(GameMode::Classic, 10, 10));
        let before = body(&state);

        let events = state.update(&mut rng);

        assert!(events.is_empty());
        assert_eq!(body(&state), before);
        assert_eq!(state.food(), None);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_turn_before_start_is_ignored() {
        let mut state = SnakeGameState::new(settings(GameMode::Classic, 10, 10));
        assert!(state.handle_input(Input::Turn(Direction::Up)).is_empty());
        assert_eq!(state.status(), SessionStatus::NotStarted);
        assert_eq!(state.direction(), None);
    }

    #[test]
    fn test_start_moves_right_and_runs_clock() {
        let mut state = SnakeGameState::new(settings(GameMode::Classic, 10, 10));
        let events = state.handle_input(Input::Start);

        assert_eq!(events, vec![GameEvent::PromptChanged(Prompt::GameStarted)]);
        assert_eq!(state.status(), SessionStatus::Running);
        assert_eq!(state.direction_vector(), (1, 0));
        assert!(state.is_clock_running());

        assert!(state.handle_input(Input::Start).is_empty());
        assert_eq!(state.direction(), Some(Direction::Right));
    }

    #[test]
    fn test_one_move_shifts_snake_right() {
        let mut rng = SessionRng::new(42);
        let mut state = started(SnakeGameState::new(settings(GameMode::Classic, 10, 10)));
        state.food = Some(Cell::new(-8, -8));
        let old_head = state.snake().head();

        let events = state.update(&mut rng);

        assert_eq!(state.snake().head(), Cell::new(old_head.x + 1, old_head.y));
        assert!(!state.snake().contains(&Cell::new(-2, 0)));
        assert_eq!(state.snake().len(), 5);
        assert!(state.snake().is_consistent());
        assert_eq!(
            events,
            vec![
                GameEvent::paint(Cell::new(3, 0), CellPaint::Snake),
                GameEvent::paint(Cell::new(-2, 0), CellPaint::Empty),
            ]
        );
    }

    #[test]
    fn test_first_tick_places_food_off_the_snake() {
        let mut rng = SessionRng::new(42);
        let mut state = started(SnakeGameState::new(settings(GameMode::Classic, 10, 10)));

        let body_before = body(&state);

        let events = state.update(&mut rng);

        let placed: Vec<Cell> = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::CellPainted { cell, paint: CellPaint::Food } => Some(*cell),
                _ => None,
            })
            .collect();
        let first_food = *placed.first().expect("food should be placed on the first moving tick");
        assert!(!body_before.contains(&first_food));
        assert_eq!(state.food(), placed.last().copied());
    }

    #[test]
    fn test_eating_food_grows_and_scores() {
        let mut rng = SessionRng::new(42);
        let mut state = started(SnakeGameState::new(settings(GameMode::Classic, 10, 10)));
        state.food = Some(Cell::new(3, 0));

        let events = state.update(&mut rng);

        assert_eq!(state.score(), 1);
        assert_eq!(state.snake().len(), 6);
        assert_eq!(state.snake().tail(), Cell::new(-2, 0));
        assert!(events.contains(&GameEvent::FoodEaten { cell: Cell::new(3, 0), score: 1 }));
        assert!(events.contains(&GameEvent::ScoreChanged(1)));

        let new_food = state.food().expect("new food should be placed right away");
        assert!(!state.snake().contains(&new_food));
    }

    #[test]
    fn test_reverse_turn_rejected() {
        let mut state = started(SnakeGameState::new(settings(GameMode::Classic, 10, 10)));

        state.handle_input(Input::Turn(Direction::Left));
        assert_eq!(state.direction(), Some(Direction::Right));

        state.handle_input(Input::Turn(Direction::Up));
        assert_eq!(state.direction(), Some(Direction::Up));
    }

    #[test]
    fn test_two_quick_turns_cannot_reverse() {
        let mut rng = SessionRng::new(42);
        let mut state = started(SnakeGameState::new(settings(GameMode::Classic, 10, 10)));
        state.food = Some(Cell::new(-8, -8));

        // Still moving right: Up is accepted, Left is checked against Right and refused.
        state.handle_input(Input::Turn(Direction::Up));
        state.handle_input(Input::Turn(Direction::Left));
        assert_eq!(state.direction(), Some(Direction::Up));

        state.update(&mut rng);
        assert_eq!(state.status(), SessionStatus::Running);
        assert_eq!(state.snake().head(), Cell::new(2, 1));
    }

    #[test]
    fn test_self_collision_ends_game_and_keeps_snake() {
        let mut rng = SessionRng::new(42);
        let snake = snake_of(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (1, 1)]);
        let mut state = started(SnakeGameState::with_snake(settings(GameMode::Classic, 10, 10), snake));
        state.food = Some(Cell::new(-8, -8));
        let before = body(&state);

        let events = state.update(&mut rng);

        assert_eq!(state.status(), SessionStatus::GameOver);
        assert_eq!(state.end_reason(), Some(EndReason::SelfCollision));
        assert_eq!(state.direction_vector(), (0, 0));
        assert!(!state.is_clock_running());
        assert_eq!(body(&state), before);
        assert!(events.contains(&GameEvent::Ended(EndReason::SelfCollision)));
        assert!(events.contains(&GameEvent::PromptChanged(Prompt::GameOver)));
    }

    #[test]
    fn test_moving_into_current_tail_is_a_collision() {
        let mut rng = SessionRng::new(42);
        let snake = snake_of(&[(2, 1), (2, 0), (1, 0), (1, 1)]);
        let mut state = started(SnakeGameState::with_snake(settings(GameMode::Classic, 10, 10), snake));
        state.food = Some(Cell::new(-8, -8));

        state.update(&mut rng);

        assert_eq!(state.end_reason(), Some(EndReason::SelfCollision));
        assert_eq!(state.snake().len(), 4);
    }

    #[test]
    fn test_wall_collision_ends_game() {
        let mut rng = SessionRng::new(42);
        let mut state = started(SnakeGameState::new(settings(GameMode::Walls, 8, 8)));
        state.food = Some(Cell::new(-5, -5));

        // Inner wall ring is at x = 6: three free moves before hitting it.
        for expected_x in 3..=5 {
            state.update(&mut rng);
            assert_eq!(state.status(), SessionStatus::Running);
            assert_eq!(state.snake().head(), Cell::new(expected_x, 0));
        }

        let events = state.update(&mut rng);

        assert_eq!(state.status(), SessionStatus::GameOver);
        assert_eq!(state.end_reason(), Some(EndReason::WallCollision));
        assert_eq!(state.snake().head(), Cell::new(5, 0));
        assert_eq!(state.snake().len(), 5);
        assert!(events.contains(&GameEvent::Ended(EndReason::WallCollision)));
    }

    #[test]
    fn test_smallest_walls_grid_gives_room_to_turn() {
        let mut rng = SessionRng::new(42);
        let bounds = GridBounds::new(MIN_WALLS_HALF_EXTENT, MIN_WALLS_HALF_EXTENT);
        let mut state = started(SnakeGameState::new(settings(
            GameMode::Walls,
            bounds.half_width,
            bounds.half_height,
        )));
        state.food = Some(Cell::new(-5, -5));

        state.update(&mut rng);
        state.handle_input(Input::Turn(Direction::Up));
        for _ in 0..3 {
            state.update(&mut rng);
        }

        assert_eq!(state.status(), SessionStatus::Running);
        assert_eq!(state.snake().head(), Cell::new(3, 3));
    }

    #[test]
    fn test_head_wraps_to_opposite_edge() {
        let mut rng = SessionRng::new(42);
        let snake = snake_of(&[(7, 0), (8, 0), (9, 0)]);
        let mut state = started(SnakeGameState::with_snake(settings(GameMode::Classic, 10, 8), snake));
        state.food = Some(Cell::new(0, 5));

        state.update(&mut rng);

        assert_eq!(state.snake().head(), Cell::new(-10, 0));
        assert!(!state.snake().contains(&Cell::new(7, 0)));
        assert_eq!(state.snake().len(), 3);
    }

    #[test]
    fn test_head_wraps_downward_past_bottom() {
        let mut rng = SessionRng::new(42);
        let snake = snake_of(&[(0, -6), (0, -7), (0, -8)]);
        let mut state = started(SnakeGameState::with_snake(settings(GameMode::Classic, 10, 8), snake));
        state.food = Some(Cell::new(5, 5));
        state.handle_input(Input::Turn(Direction::Down));

        state.update(&mut rng);

        assert_eq!(state.snake().head(), Cell::new(0, 7));
    }

    #[test]
    fn test_clock_only_runs_while_running() {
        let mut rng = SessionRng::new(42);
        let mut state = SnakeGameState::new(settings(GameMode::Walls, 8, 8));
        state.food = Some(Cell::new(-5, -5));
        assert!(state.clock_tick().is_empty());

        state.handle_input(Input::Start);
        for _ in 0..3661 {
            state.apply(SessionEvent::ClockTick, &mut rng);
        }
        assert_eq!(state.elapsed().to_string(), "01:01:01");

        run_until_game_over(&mut state, &mut rng);
        assert_eq!(state.status(), SessionStatus::GameOver);
        assert!(state.clock_tick().is_empty());
        assert_eq!(state.elapsed().seconds(), 3661);
    }

    #[test]
    fn test_input_ignored_after_game_over() {
        let mut rng = SessionRng::new(42);
        let mut state = started(SnakeGameState::new(settings(GameMode::Walls, 8, 8)));
        state.food = Some(Cell::new(-5, -5));
        run_until_game_over(&mut state, &mut rng);
        assert_eq!(state.status(), SessionStatus::GameOver);

        assert!(state.handle_input(Input::Start).is_empty());
        assert!(state.handle_input(Input::Turn(Direction::Up)).is_empty());
        assert_eq!(state.direction(), None);
        assert!(state.update(&mut rng).is_empty());
    }

    #[test]
    fn test_food_avoids_walls() {
        let mut rng = SessionRng::new(3);
        let mut state = SnakeGameState::new(settings(GameMode::Walls, 5, 5));
        for _ in 0..200 {
            state.food = None;
            let food = state.place_food(&mut rng, &mut Vec::new()).unwrap();
            assert!(!state.walls().contains(&food));
            assert!(!state.snake().contains(&food));
        }
    }

    #[test]
    fn test_no_free_cell_leaves_food_absent() {
        let mut rng = SessionRng::new(42);
        let bounds = GridBounds::new(5, 5);
        let snake = Snake::from_tail_to_head(bounds.cells()).unwrap();
        let mut state = SnakeGameState::with_snake(settings(GameMode::Classic, 5, 5), snake);
        let mut events = Vec::new();

        assert_eq!(state.place_food(&mut rng, &mut events), None);
        assert_eq!(state.food(), None);
        assert!(events.is_empty());
    }

    #[test]
    fn test_random_play_keeps_snake_consistent() {
        let mut rng = SessionRng::new(42);
        let mut turns = SessionRng::new(7);
        let directions = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
        let mut state = started(SnakeGameState::new(settings(GameMode::Classic, 6, 6)));

        for step in 0..2000 {
            if step % 3 == 0
                && let Some(direction) = turns.pick(&directions)
            {
                state.apply(SessionEvent::Input(Input::Turn(direction)), &mut rng);
            }
            let length_before = state.snake().len();
            let score_before = state.score();

            state.apply(SessionEvent::MoveTick, &mut rng);

            assert!(state.snake().is_consistent());
            if state.status() == SessionStatus::Running {
                let grew = state.snake().len() - length_before;
                assert_eq!(grew as u32, state.score() - score_before);
            }
            if state.status() == SessionStatus::GameOver {
                state = started(SnakeGameState::new(settings(GameMode::Classic, 6, 6)));
            }
        }
    }

    proptest! {
        #[test]
        fn prop_food_never_on_snake(
            cells in prop::collection::hash_set((-6i32..6, -6i32..6), 1..100),
            seed in any::<u64>(),
        ) {
            let snake = Snake::from_tail_to_head(cells.into_iter().map(|(x, y)| Cell::new(x, y))).unwrap();
            let mut state = SnakeGameState::with_snake(settings(GameMode::Classic, 6, 6), snake);
            let mut rng = SessionRng::new(seed);

            let food = state.place_food(&mut rng, &mut Vec::new());

            prop_assert!(food.is_some());
            let food = food.unwrap();
            prop_assert!(!state.snake().contains(&food));
            prop_assert_eq!(state.food(), Some(food));
        }

        #[test]
        fn prop_food_never_on_snake_or_walls(
            cells in prop::collection::hash_set((-4i32..4, -4i32..4), 1..40),
            seed in any::<u64>(),
        ) {
            let snake = Snake::from_tail_to_head(cells.into_iter().map(|(x, y)| Cell::new(x, y))).unwrap();
            let mut state = SnakeGameState::with_snake(settings(GameMode::Walls, 6, 6), snake);
            let mut rng = SessionRng::new(seed);

            let food = state.place_food(&mut rng, &mut Vec::new()).unwrap();

            prop_assert!(!state.snake().contains(&food));
            prop_assert!(!state.walls().contains(&food));
        }
    }
}
