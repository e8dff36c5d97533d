use std::fmt;

use crate::compass_edges::kernel::Kernel;

/// Robinson's Compass weights, ordered as [`Direction::ALL`]
const ROBINSON_COMPASS: [[[i32; 3]; 3]; 8] = [
    [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]],   // N
    [[0, 1, 2], [-1, 0, 1], [-2, -1, 0]],   // NW
    [[1, 2, 1], [0, 0, 0], [-1, -2, -1]],   // W
    [[2, 1, 0], [1, 0, -1], [0, -1, -2]],   // SW
    [[1, 0, -1], [2, 0, -2], [1, 0, -1]],   // S
    [[0, -1, -2], [1, 0, -1], [2, 1, 0]],   // SE
    [[-1, -2, -1], [0, 0, 0], [1, 2, 1]],   // E
    [[-2, -1, 0], [-1, 0, 1], [0, 1, 2]],   // NE
];

/// Compass direction of a directional edge kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// North
    N,
    /// North-west
    NW,
    /// West
    W,
    /// South-west
    SW,
    /// South
    S,
    /// South-east
    SE,
    /// East
    E,
    /// North-east
    NE,
}

impl Direction {
    /// Every direction in the fixed compass order
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NW,
        Direction::W,
        Direction::SW,
        Direction::S,
        Direction::SE,
        Direction::E,
        Direction::NE,
    ];

    /// Position of the direction in [`Direction::ALL`]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short name used in output file names
    pub const fn suffix(self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NW => "NW",
            Direction::W => "W",
            Direction::SW => "SW",
            Direction::S => "S",
            Direction::SE => "SE",
            Direction::E => "E",
            Direction::NE => "NE",
        }
    }

    /// The 3x3 integer kernel responding to edges in this direction
    pub fn kernel(self) -> Kernel<i32> {
        Kernel::from_rows_unchecked(ROBINSON_COMPASS[self.index()])
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// The eight Robinson's Compass kernels in compass order
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalKernelSet {
    kernels: [Kernel<i32>; 8],
}

impl DirectionalKernelSet {
    /// Kernel for `direction`
    #[inline]
    pub fn get(&self, direction: Direction) -> &Kernel<i32> {
        &self.kernels[direction.index()]
    }

    /// Iterates `(direction, kernel)` pairs in compass order
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &Kernel<i32>)> + '_ {
        Direction::ALL.into_iter().zip(self.kernels.iter())
    }

    /// Always 8
    #[inline]
    pub fn len(&self) -> usize {
        self.kernels.len()
    }

    /// Always false
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Returns the eight fixed directional kernels (N, NW, W, SW, S, SE, E, NE).
pub fn directional_kernels() -> DirectionalKernelSet {
    DirectionalKernelSet {
        kernels: Direction::ALL.map(Direction::kernel),
    }
}
