//! Built-in starting level.
use game_core::{GameState, LayoutError};

const START_LAYOUT: [&str; 15] = [
    "############################################",
    "#..........#######################.........#",
    "#..........#######################....T....#",
    "#....@.....#######################.........#",
    "#.......!..........................o.......#",
    "#..........############.##########.........#",
    "#..........############.##########.........#",
    "######.################.################.###",
    "######.################.################.###",
    "######.#########...............#########.###",
    "######.#########.......o.......#########.###",
    "######.#########....?..........#########.###",
    "######.#########............!............###",
    "######.........................#############",
    "############################################",
];

pub fn starting_state() -> Result<GameState, LayoutError> {
    GameState::from_layout(&START_LAYOUT)
}
