//! Fixed board topology: adjacency and mill lines.
//!
//! ```text
//!  0-----------1-----------2
//!  |           |           |
//!  |   3-------4-------5   |
//!  |   |       |       |   |
//!  |   |   6---7---8   |   |
//!  |   |   |       |   |   |
//!  9--10--11      12--13--14
//!  |   |   |       |   |   |
//!  |   |  15--16--17   |   |
//!  |   |       |       |   |
//!  |  18------19------20   |
//!  |           |           |
//! 21----------22----------23
//! ```
//!
//! Every table here is a compile-time constant. Each position lies on
//! exactly two mill lines; [`LINES_THROUGH`] indexes them so a mill check
//! touches at most four other positions.

/// The 16 mill lines: eight rows, then eight columns.
pub const MILL_LINES: [[u8; 3]; 16] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [9, 10, 11],
    [12, 13, 14],
    [15, 16, 17],
    [18, 19, 20],
    [21, 22, 23],
    // Columns
    [0, 9, 21],
    [3, 10, 18],
    [6, 11, 15],
    [1, 4, 7],
    [16, 19, 22],
    [8, 12, 17],
    [5, 13, 20],
    [2, 14, 23],
];

/// Neighbours of each position.
pub const ADJACENCY: [&[u8]; 24] = [
    &[1, 9],           // 0
    &[0, 2, 4],        // 1
    &[1, 14],          // 2
    &[4, 10],          // 3
    &[1, 3, 5, 7],     // 4
    &[4, 13],          // 5
    &[7, 11],          // 6
    &[4, 6, 8],        // 7
    &[7, 12],          // 8
    &[0, 10, 21],      // 9
    &[3, 9, 11, 18],   // 10
    &[6, 10, 15],      // 11
    &[8, 13, 17],      // 12
    &[5, 12, 14, 20],  // 13
    &[2, 13, 23],      // 14
    &[11, 16],         // 15
    &[15, 17, 19],     // 16
    &[12, 16],         // 17
    &[10, 19],         // 18
    &[16, 18, 20, 22], // 19
    &[13, 19],         // 20
    &[9, 22],          // 21
    &[19, 21, 23],     // 22
    &[14, 22],         // 23
];

/// For each position, the indices into [`MILL_LINES`] of the two lines
/// passing through it.
pub const LINES_THROUGH: [[usize; 2]; 24] = build_lines_through();

const fn build_lines_through() -> [[usize; 2]; 24] {
    let mut index = [[usize::MAX; 2]; 24];
    let mut filled = [0usize; 24];
    let mut line = 0;
    while line < MILL_LINES.len() {
        let mut k = 0;
        while k < 3 {
            let pos = MILL_LINES[line][k] as usize;
            assert!(filled[pos] < 2, "position on more than two mill lines");
            index[pos][filled[pos]] = line;
            filled[pos] += 1;
            k += 1;
        }
        line += 1;
    }
    let mut pos = 0;
    while pos < 24 {
        assert!(filled[pos] == 2, "position not on exactly two mill lines");
        pos += 1;
    }
    index
}
