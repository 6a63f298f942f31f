use std::fmt;
use std::ops::Add;

/// Unique identifier for any entity tracked in the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Reserved identifier for the controllable player character.
    pub const PLAYER: Self = Self(0);

    /// Returns true if this entity represents the player.
    #[inline]
    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::PLAYER
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
///
/// `y` grows downwards, matching terminal rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev (king-move) distance.
    pub fn distance(self, other: Position) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        dx.max(dy)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add<Offset> for Position {
    type Output = Position;

    fn add(self, rhs: Offset) -> Position {
        Position::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

/// Signed single-step displacement: one of the eight compass offsets or [`Offset::ZERO`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const ZERO: Self = Self::new(0, 0);
    pub const NORTH: Self = Self::new(0, -1);
    pub const SOUTH: Self = Self::new(0, 1);
    pub const EAST: Self = Self::new(1, 0);
    pub const WEST: Self = Self::new(-1, 0);
    pub const NORTH_EAST: Self = Self::new(1, -1);
    pub const NORTH_WEST: Self = Self::new(-1, -1);
    pub const SOUTH_EAST: Self = Self::new(1, 1);
    pub const SOUTH_WEST: Self = Self::new(-1, 1);

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub const fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

/// Integer resource meter (e.g., health) tracked per actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }

    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Subtracts `amount`, saturating at zero. Returns the amount actually removed.
    pub fn drain(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.current);
        self.current -= removed;
        removed
    }
}
