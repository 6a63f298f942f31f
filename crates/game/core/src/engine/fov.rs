//! Field of view by ray casting.
//!
//! Every tile inside the radius circle is tested with a Bresenham line from the
//! origin. A tile is visible when no sight-blocking tile lies strictly between
//! it and the origin, so walls bounding a room are themselves visible.

use crate::state::{Position, TileMap};

/// Clears the visible layer and reveals everything in sight of `origin`.
///
/// The radius is capped at the larger map dimension; nothing beyond it can be
/// in bounds.
pub fn compute(map: &mut TileMap, origin: Position, radius: u32) {
    map.clear_visible();
    if !map.in_bounds(origin) {
        return;
    }
    map.reveal(origin);

    let extent = map.width().max(map.height());
    let r = i64::from(radius.min(extent));
    let r_squared = r * r;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy > r_squared {
                continue;
            }
            let target = Position::new(origin.x + dx as i32, origin.y + dy as i32);
            if map.in_bounds(target) && has_line_of_sight(map, origin, target) {
                map.reveal(target);
            }
        }
    }
}

fn has_line_of_sight(map: &TileMap, origin: Position, target: Position) -> bool {
    line(origin, target)
        .into_iter()
        .skip(1)
        .take_while(|&step| step != target)
        .all(|step| !map.blocks_sight(step))
}

/// Bresenham line including both endpoints.
fn line(from: Position, to: Position) -> Vec<Position> {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };

    let mut points = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    let (mut x, mut y) = (from.x, from.y);
    let mut err = dx + dy;
    loop {
        points.push(Position::new(x, y));
        if x == to.x && y == to.y {
            break;
        }
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            x += sx;
        }
        if doubled <= dx {
            err += dx;
            y += sy;
        }
    }
    points
}
