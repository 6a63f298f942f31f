/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Radius (in tiles) of the player's field of view.
    pub fov_radius: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// One slot per inventory letter (`a`..=`z`).
    pub const MAX_INVENTORY_SLOTS: usize = 26;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FOV_RADIUS: u32 = 8;

    pub fn new() -> Self {
        Self {
            fov_radius: Self::DEFAULT_FOV_RADIUS,
        }
    }

    pub fn with_fov_radius(fov_radius: u32) -> Self {
        Self { fov_radius }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
