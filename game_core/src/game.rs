//! The match context
//!
//! `Game` owns everything a match needs and is the only thing that mutates
//! it. Input adapters write into latest-value slots; `update` consumes them
//! once per tick.

use glam::Vec2;
use hecs::World;

use crate::stats::{self, MemoryStats, StatsStore};
use crate::systems::*;
use crate::{
    ball_snapshot, create_ball, create_paddle, paddle_snapshot, Ball, Config, ConfigError,
    Difficulty, DifficultyProfile, Events, GameRng, InputState, MatchAction, MatchFsm,
    MatchState, Paddle, Params, Particle, Side, SparkColor, Stats, Time, TransitionResult,
};

pub struct Game {
    world: World,
    config: Config,
    fsm: MatchFsm,
    difficulty: Difficulty,
    time: Time,
    events: Events,
    input: InputState,
    rng: GameRng,
    stats: Stats,
    store: Box<dyn StatsStore>,
}

impl Game {
    /// Default court, in-memory stats
    pub fn new(seed: u64) -> Self {
        Self::assemble(
            Config::new(),
            Box::new(MemoryStats::new()),
            GameRng::new(seed),
            Stats::default(),
        )
    }

    pub fn with_config(
        config: Config,
        store: Box<dyn StatsStore>,
        rng: GameRng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let stats = stats::load_or_default(store.as_ref());
        log::info!(
            "New game on {}x{} court, record {}-{}",
            config.court_width,
            config.court_height,
            stats.wins,
            stats.losses
        );

        Ok(Self::assemble(config, store, rng, stats))
    }

    fn assemble(config: Config, store: Box<dyn StatsStore>, rng: GameRng, stats: Stats) -> Self {
        let mut world = World::new();
        Self::spawn_entities(&mut world, &config);

        Self {
            world,
            fsm: MatchFsm::new(config.score_pause),
            config,
            difficulty: Difficulty::default(),
            time: Time::default(),
            events: Events::new(),
            input: InputState::new(),
            rng,
            stats,
            store,
        }
    }

    fn spawn_entities(world: &mut World, config: &Config) {
        create_paddle(world, Side::Left, config);
        create_paddle(world, Side::Right, config);
        create_ball(world, config, config.court_center(), Vec2::ZERO);
    }

    /// Advance the match by `dt` seconds
    ///
    /// Deltas outside `(0, max_dt]` are dropped without touching any state.
    pub fn update(&mut self, dt: f32) {
        let Some(dt) = Time::sanitize(dt, self.config.max_dt) else {
            log::debug!("Dropped tick with dt={}", dt);
            return;
        };

        self.events.clear();
        if self.fsm.state() == MatchState::Paused {
            self.input.nudge = 0.0;
            return;
        }
        self.time = Time::new(dt, self.time.now + dt);

        match self.fsm.state() {
            MatchState::Playing => self.step_playing(),
            MatchState::Scored => {
                self.input.nudge = 0.0;
                if self.fsm.tick_pause(dt) {
                    self.launch_ball();
                }
            }
            MatchState::Menu | MatchState::GameOver | MatchState::Paused => {
                self.input.nudge = 0.0;
            }
        }

        update_particles(&mut self.world, &self.time);
        gc(&mut self.world);
    }

    fn step_playing(&mut self) {
        // 1. Ingest sampled input
        let input = self.input.take();
        apply_human_input(&mut self.world, &input, &self.config);

        // 2. Move ball
        move_ball(&mut self.world, &self.time);

        // 3. Walls
        check_wall_bounce(&mut self.world, &self.config, &mut self.events);
        if self.events.ball_hit_wall {
            self.sparks_at_ball(Params::SPARKS_WALL, SparkColor::Wall);
        }

        // 4. Scoring ends the rally before any paddle check
        if let Some(scorer) = check_scoring(&mut self.world, &self.config, &mut self.events) {
            self.on_score(scorer);
            clamp_paddles(&mut self.world, &self.config);
            return;
        }

        // 5. Paddles
        check_paddle_collisions(&mut self.world, &self.config, &mut self.events);
        if self.events.ball_hit_paddle {
            self.sparks_at_ball(Params::SPARKS_PADDLE, SparkColor::Paddle);
        }

        // 6. AI, then keep both paddles on the court
        update_ai(&mut self.world, &self.time, self.difficulty.profile());
        clamp_paddles(&mut self.world, &self.config);
    }

    fn on_score(&mut self, scorer: Side) {
        self.sparks_at_ball(Params::SPARKS_SCORE, SparkColor::Score);
        let (left, right) = self.scores();

        if let Some(winner) = winner(&self.world, self.config.win_score) {
            self.fsm.transition(MatchAction::MatchWon(winner));
            self.events.match_won = Some(winner);
            log::info!("{:?} wins the match {}-{}", winner, left, right);

            self.stats.record(winner);
            if let Err(e) = self.store.save(&self.stats) {
                log::warn!("Could not save stats: {}", e);
            }
        } else {
            log::info!("{:?} scores, {}-{}", scorer, left, right);
            self.fsm.transition(MatchAction::PointScored);
        }

        self.recenter_ball();
    }

    /// Click, tap, space or enter: start from the menu, leave the results
    pub fn confirm_action(&mut self) -> TransitionResult {
        let result = self.fsm.transition(MatchAction::Confirm);
        if result.success && result.to_state == MatchState::Playing {
            self.start_match();
        }
        result
    }

    /// Escape: toggle pause
    pub fn cancel_action(&mut self) -> TransitionResult {
        self.fsm.transition(MatchAction::Cancel)
    }

    /// Absolute paddle position from pointer or touch, in court units
    pub fn set_human_paddle_y(&mut self, y: f32) {
        self.input.set_target_y(y);
    }

    /// Keyboard movement: `direction` is -1 for up, 1 for down
    pub fn nudge_human_paddle(&mut self, direction: i8, dt: f32) {
        if !self.fsm.is_playing() {
            return;
        }
        let Some(dt) = Time::sanitize(dt, self.config.max_dt) else {
            return;
        };
        let dir = direction.signum() as f32;
        self.input.push_nudge(dir * self.config.keyboard_paddle_speed * dt);
    }

    pub fn cycle_difficulty(&mut self) {
        self.difficulty.cycle();
        log::info!("Difficulty: {}", self.difficulty.profile().label);
    }

    fn start_match(&mut self) {
        reset_scores(&mut self.world);
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.body.pos = Vec2::new(
                self.config.paddle_x(paddle.side),
                self.config.court_height / 2.0,
            );
        }
        self.recenter_ball();
        self.launch_ball();
    }

    fn recenter_ball(&mut self) {
        let center = self.config.court_center();
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.recenter(center);
        }
    }

    fn launch_ball(&mut self) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.launch(
                self.config.ball_speed_initial,
                self.config.launch_max_angle,
                &mut self.rng,
            );
        }
    }

    fn sparks_at_ball(&mut self, count: usize, color: SparkColor) {
        let pos = self.ball().body.pos;
        emit_sparks(
            &mut self.world,
            &mut self.rng,
            pos,
            count,
            color,
            Params::SPARK_SPEED,
        );
    }

    pub fn state(&self) -> MatchState {
        self.fsm.state()
    }

    pub fn winner(&self) -> Option<Side> {
        self.fsm.winner()
    }

    pub fn score_pause_timer(&self) -> f32 {
        self.fsm.score_pause_timer()
    }

    pub fn ball(&self) -> Ball {
        ball_snapshot(&self.world).unwrap_or_else(|| Ball::new(self.config.ball_size))
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        paddle_snapshot(&self.world, side).unwrap_or_else(|| {
            Paddle::new(side, self.config.paddle_width, self.config.paddle_height)
        })
    }

    /// Human paddle first, AI paddle second
    pub fn paddles(&self) -> [Paddle; 2] {
        [self.paddle(Side::Left), self.paddle(Side::Right)]
    }

    /// (human, AI)
    pub fn scores(&self) -> (u32, u32) {
        (self.paddle(Side::Left).score, self.paddle(Side::Right).score)
    }

    pub fn difficulty(&self) -> &'static DifficultyProfile {
        self.difficulty.profile()
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// What happened during the last accepted tick
    pub fn events(&self) -> Events {
        self.events
    }

    /// Live sparks and their remaining-life fraction
    pub fn particles(&self) -> Vec<(Particle, f32)> {
        particle_snapshot(&self.world)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn time(&self) -> Time {
        self.time
    }
}
