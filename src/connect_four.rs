//! The rules of Connect 4 on a persistent, column based board

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use crate::{
    board::Board,
    error::{GameError, Result},
    piece::Piece,
    HEIGHT, SEGMENT_LENGTH, WIDTH,
};

/// Returns the columns ordered from the middle outwards, left before right,
/// as the middle columns take part in the most alignments
pub const fn move_order() -> [usize; WIDTH] {
    let mut move_order = [0; WIDTH];
    let mut i = 0;
    while i < WIDTH {
        move_order[i] = (WIDTH / 2) + (1 - i % 2) * (i / 2) - (i % 2) * (i / 2 + 1);
        i += 1;
    }
    move_order
}

/// Window scores, see [`score_window`]
mod weights {
    pub const OWN_FULL: i32 = 500;
    pub const OWN_ONE_SHORT: i32 = 50;
    pub const OWN_HALF: i32 = 3;
    pub const OPPONENT_FULL: i32 = -95;
    pub const OPPONENT_ONE_SHORT: i32 = -80;
    pub const OPPONENT_HALF: i32 = -5;
    pub const OPPONENT_OPEN_ENDS: i32 = -80;
}

/// A single column of tiles, filled from the bottom
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Column {
    cells: [Piece; HEIGHT],
    height: usize,
}

impl Column {
    fn new() -> Self {
        Self {
            cells: [Piece::Empty; HEIGHT],
            height: 0,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_full(&self) -> bool {
        self.height == HEIGHT
    }

    /// The tile at `row` (0 is the bottom), `Empty` above the top tile
    pub fn get(&self, row: usize) -> Piece {
        if row < self.height {
            self.cells[row]
        } else {
            Piece::Empty
        }
    }

    /// Drops a tile on top, returning the row it landed in, or `None` if the
    /// column is already full
    fn push(&mut self, piece: Piece) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        let row = self.height;
        self.cells[row] = piece;
        self.height += 1;
        Some(row)
    }
}

/// A direction on the board together with every starting tile of a window
/// that fits in that direction
struct Orientation {
    step: (isize, isize),
    columns: Range<usize>,
    rows: Range<usize>,
}

static ORIENTATIONS: [Orientation; 4] = [
    // vertical
    Orientation {
        step: (0, 1),
        columns: 0..WIDTH,
        rows: 0..HEIGHT - SEGMENT_LENGTH + 1,
    },
    // horizontal
    Orientation {
        step: (1, 0),
        columns: 0..WIDTH - SEGMENT_LENGTH + 1,
        rows: 0..HEIGHT,
    },
    // diagonal /
    Orientation {
        step: (1, 1),
        columns: 0..WIDTH - SEGMENT_LENGTH + 1,
        rows: 0..HEIGHT - SEGMENT_LENGTH + 1,
    },
    // diagonal \
    Orientation {
        step: (1, -1),
        columns: 0..WIDTH - SEGMENT_LENGTH + 1,
        rows: SEGMENT_LENGTH - 1..HEIGHT,
    },
];

pub type Window = [Piece; SEGMENT_LENGTH];

/// An immutable Connect 4 position
///
/// Playing a move copies only the column that changed, every other column is
/// shared with the parent position.
#[derive(Clone, Debug)]
pub struct ConnectFourBoard {
    pub(crate) columns: [Arc<Column>; WIDTH],
    turn: Piece,
}

impl ConnectFourBoard {
    /// An empty board with the first player to move
    pub fn new() -> Self {
        Self {
            columns: Default::default(),
            turn: Piece::PlayerOne,
        }
    }

    /// An empty board with `turn` to move first
    pub fn starting_with(turn: Piece) -> Result<Self> {
        if turn.is_empty() {
            return Err(GameError::InvalidPosition(
                "the player to move cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            turn,
            ..Self::new()
        })
    }

    /// Plays a string of 1-indexed column numbers from the empty board,
    /// starting with the first player
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        Self::new().play_moves(moves)
    }

    /// Plays a string of 1-indexed column numbers from this position
    pub fn play_moves<S: AsRef<str>>(&self, moves: S) -> Result<Self> {
        let mut board = self.clone();
        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => board = board.play(column - 1)?,
                _ => {
                    return Err(GameError::ParseMove {
                        character: column_char,
                    })
                }
            }
        }
        Ok(board)
    }

    /// Builds an arbitrary position from the tiles of each column (bottom to
    /// top) and the player to move. The position is not required to be
    /// reachable in a real game.
    pub fn from_columns(columns: &[Vec<Piece>], turn: Piece) -> Result<Self> {
        if columns.len() != WIDTH {
            return Err(GameError::InvalidPosition(format!(
                "expected {} columns, got {}",
                WIDTH,
                columns.len()
            )));
        }
        let mut board = Self::starting_with(turn)?;
        for (index, pieces) in columns.iter().enumerate() {
            let mut column = Column::new();
            for &piece in pieces {
                if piece.is_empty() {
                    return Err(GameError::InvalidPosition(format!(
                        "column {} contains an empty tile",
                        index
                    )));
                }
                column
                    .push(piece)
                    .ok_or_else(|| {
                        GameError::InvalidPosition(format!(
                            "column {} holds more than {} tiles",
                            index, HEIGHT
                        ))
                    })?;
            }
            board.columns[index] = Arc::new(column);
        }
        Ok(board)
    }

    pub fn column(&self, index: usize) -> &Column {
        &self.columns[index]
    }

    /// The tile at `column`, `row` (row 0 is the bottom)
    pub fn get(&self, column: usize, row: usize) -> Piece {
        self.columns[column].get(row)
    }

    pub fn playable(&self, column: usize) -> bool {
        !self.columns[column].is_full()
    }

    pub fn num_moves(&self) -> usize {
        self.columns.iter().map(|column| column.height()).sum()
    }

    fn window(&self, column: usize, row: usize, (dx, dy): (isize, isize)) -> Window {
        let mut window = [Piece::Empty; SEGMENT_LENGTH];
        for (k, cell) in window.iter_mut().enumerate() {
            let x = column as isize + dx * k as isize;
            let y = row as isize + dy * k as isize;
            *cell = self.get(x as usize, y as usize);
        }
        window
    }

    /// Every run of `SEGMENT_LENGTH` tiles on the board: columns, rows and
    /// both diagonal directions
    pub fn windows(&self) -> impl Iterator<Item = Window> + '_ {
        ORIENTATIONS.iter().flat_map(move |orientation| {
            orientation.columns.clone().flat_map(move |column| {
                orientation
                    .rows
                    .clone()
                    .map(move |row| self.window(column, row, orientation.step))
            })
        })
    }
}

/// Scores a single window for `player`
///
/// Tiles of `player` count towards a bonus and tiles of the opponent towards a
/// penalty, each only when the rest of the window is still open. A window with
/// both ends open and the opponent on every tile in between is penalised
/// again on top of that.
pub fn score_window(window: &Window, player: Piece) -> i32 {
    let opponent = player.opposite();
    let count = |piece: Piece| window.iter().filter(|&&cell| cell == piece).count();
    let (own, theirs, empty) = (count(player), count(opponent), count(Piece::Empty));

    let mut score = 0;
    if own == SEGMENT_LENGTH {
        score += weights::OWN_FULL;
    } else if own == SEGMENT_LENGTH - 1 && empty == 1 {
        score += weights::OWN_ONE_SHORT;
    } else if own == SEGMENT_LENGTH - 2 && empty == 2 {
        score += weights::OWN_HALF;
    }

    if theirs == SEGMENT_LENGTH {
        score += weights::OPPONENT_FULL;
    } else if theirs == SEGMENT_LENGTH - 1 && empty == 1 {
        score += weights::OPPONENT_ONE_SHORT;
    } else if theirs == SEGMENT_LENGTH - 2 && empty == 2 {
        score += weights::OPPONENT_HALF;
    }

    let open_ends = window[0].is_empty() && window[SEGMENT_LENGTH - 1].is_empty();
    if open_ends && window[1..SEGMENT_LENGTH - 1].iter().all(|&cell| cell == opponent) {
        score += weights::OPPONENT_OPEN_ENDS;
    }

    score
}

impl Default for ConnectFourBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for ConnectFourBoard {
    type Piece = Piece;
    type Move = usize;

    fn turn(&self) -> Piece {
        self.turn
    }

    fn legal_moves(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&column| self.playable(column)).collect()
    }

    fn play(&self, column: usize) -> Result<Self> {
        let target = self
            .columns
            .get(column)
            .ok_or(GameError::ColumnOutOfRange {
                column,
                width: WIDTH,
            })?;

        let mut updated = Column::clone(target);
        updated
            .push(self.turn)
            .ok_or(GameError::ColumnFull { column })?;

        let mut columns = self.columns.clone();
        columns[column] = Arc::new(updated);
        Ok(Self {
            columns,
            turn: self.turn.opposite(),
        })
    }

    fn is_win(&self) -> bool {
        self.windows()
            .any(|window| !window[0].is_empty() && window.iter().all(|&cell| cell == window[0]))
    }

    fn evaluate(&self, player: Piece) -> f64 {
        self.windows()
            .map(|window| score_window(&window, player))
            .sum::<i32>() as f64
    }

    fn tie_break_order(&self) -> Vec<usize> {
        move_order().to_vec()
    }
}

impl fmt::Display for ConnectFourBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = "-".repeat(4 * WIDTH + 1);
        writeln!(f, "{}", line)?;
        for row in (0..HEIGHT).rev() {
            write!(f, "|")?;
            for column in 0..WIDTH {
                write!(f, " {} |", self.get(column, row).symbol())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", line)?;
        let numbers: Vec<String> = (1..=WIDTH).map(|x| x.to_string()).collect();
        write!(f, "  {}", numbers.join("   "))
    }
}
