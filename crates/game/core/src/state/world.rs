use super::Position;

/// Static terrain of a single tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TerrainKind {
    #[default]
    Floor,
    Wall,
}

impl TerrainKind {
    pub fn is_passable(self) -> bool {
        matches!(self, TerrainKind::Floor)
    }

    pub fn blocks_sight(self) -> bool {
        matches!(self, TerrainKind::Wall)
    }
}

/// Rectangular tile grid with field-of-view layers.
///
/// `visible` is recomputed every turn; `explored` only ever grows.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TileMap {
    width: u32,
    height: u32,
    terrain: Vec<TerrainKind>,
    visible: Vec<bool>,
    explored: Vec<bool>,
}

impl TileMap {
    /// Creates a map filled with `fill`.
    pub fn new(width: u32, height: u32, fill: TerrainKind) -> Self {
        let len = (width * height) as usize;
        Self {
            width,
            height,
            terrain: vec![fill; len],
            visible: vec![false; len],
            explored: vec![false; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.in_bounds(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }

    pub fn terrain(&self, position: Position) -> Option<TerrainKind> {
        self.index(position).map(|index| self.terrain[index])
    }

    pub fn set_terrain(&mut self, position: Position, terrain: TerrainKind) {
        if let Some(index) = self.index(position) {
            self.terrain[index] = terrain;
        }
    }

    /// Out-of-bounds tiles are never walkable.
    pub fn is_walkable(&self, position: Position) -> bool {
        self.terrain(position).is_some_and(TerrainKind::is_passable)
    }

    /// Out-of-bounds tiles block sight.
    pub fn blocks_sight(&self, position: Position) -> bool {
        self.terrain(position).is_none_or(TerrainKind::blocks_sight)
    }

    pub fn is_visible(&self, position: Position) -> bool {
        self.index(position).is_some_and(|index| self.visible[index])
    }

    pub fn is_explored(&self, position: Position) -> bool {
        self.index(position).is_some_and(|index| self.explored[index])
    }

    pub fn clear_visible(&mut self) {
        self.visible.iter_mut().for_each(|cell| *cell = false);
    }

    /// Marks a tile as visible and explored.
    pub fn reveal(&mut self, position: Position) {
        if let Some(index) = self.index(position) {
            self.visible[index] = true;
            self.explored[index] = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_and_terrain_queries() {
        let mut map = TileMap::new(4, 3, TerrainKind::Floor);
        map.set_terrain(Position::new(1, 1), TerrainKind::Wall);

        assert!(map.in_bounds(Position::new(3, 2)));
        assert!(!map.in_bounds(Position::new(4, 0)));
        assert!(!map.in_bounds(Position::new(-1, 0)));
        assert!(!map.is_walkable(Position::new(1, 1)));
        assert!(map.is_walkable(Position::new(0, 0)));
        assert!(!map.is_walkable(Position::new(9, 9)));
        assert!(map.blocks_sight(Position::new(9, 9)));
    }

    #[test]
    fn reveal_marks_explored_and_survives_clear() {
        let mut map = TileMap::new(2, 2, TerrainKind::Floor);
        map.reveal(Position::new(1, 0));
        map.clear_visible();

        assert!(!map.is_visible(Position::new(1, 0)));
        assert!(map.is_explored(Position::new(1, 0)));
    }
}
