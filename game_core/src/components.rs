use glam::Vec2;

/// Axis-aligned rectangle with a centered position and a fixed size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2, // Center
    size: Vec2,
}

impl Body {
    pub fn new(width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "body size must be positive");
        Self {
            pos: Vec2::ZERO,
            size: Vec2::new(width, height),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn half_width(&self) -> f32 {
        self.size.x / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.size.y / 2.0
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Strict overlap test; touching edges do not count
    pub fn overlaps(&self, other: &Body) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Court side. The human plays left, the AI plays right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn is_human(self) -> bool {
        self == Side::Left
    }
}

/// Paddle component - one per side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub body: Body,
    pub side: Side,
    pub score: u32,
}

impl Paddle {
    pub fn new(side: Side, width: f32, height: f32) -> Self {
        Self {
            body: Body::new(width, height),
            side,
            score: 0,
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub body: Body,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(size: f32) -> Self {
        Self {
            body: Body::new(size, size),
            vel: Vec2::ZERO,
        }
    }

    /// Put the ball at `center` and stop it
    pub fn recenter(&mut self, center: Vec2) {
        self.body.pos = center;
        self.vel = Vec2::ZERO;
    }

    /// Give a resting ball a random launch velocity
    ///
    /// Direction is left or right with equal odds, angled up to `max_angle`
    /// away from horizontal. A ball that is already moving keeps its velocity.
    pub fn launch(&mut self, speed: f32, max_angle: f32, rng: &mut crate::GameRng) {
        if self.vel.length() != 0.0 {
            return;
        }

        use rand::Rng;
        let dir = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let angle: f32 = rng.0.gen_range(-max_angle..=max_angle);

        self.vel = Vec2::new(angle.cos() * dir, angle.sin()) * speed;
    }
}

/// Short-lived visual spark
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: SparkColor,
}

impl Particle {
    pub fn step(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// Colour tag for the drawing side; the core does not care about actual colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparkColor {
    Wall,
    Paddle,
    Score,
}

/// Remaining life of a transient entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lifetime {
    pub t_left: f32,
    pub t_total: f32,
}

impl Lifetime {
    pub fn new(t: f32) -> Self {
        Self {
            t_left: t,
            t_total: t,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.t_left <= 0.0
    }

    /// Fraction of life left, 1.0 when fresh
    pub fn fraction(&self) -> f32 {
        if self.t_total <= 0.0 {
            0.0
        } else {
            (self.t_left / self.t_total).clamp(0.0, 1.0)
        }
    }
}
