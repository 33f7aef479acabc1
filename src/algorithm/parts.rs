//! Glyph parts, walk facings, and the facing × turn move table
//!
//! Every transition a walk can take is table-driven: the current facing and the
//! chosen turn determine both the glyph written into the departed cell and the
//! position delta applied. Grid coordinates grow rightward in x and upward in y.

/// Symbolic content of one grid cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Part {
    /// Unoccupied cell
    #[default]
    Empty,
    /// Vertical straight segment
    Vertical,
    /// Horizontal straight segment
    Horizontal,
    /// Corner connecting up and left
    UpLeft,
    /// Corner connecting up and right
    UpRight,
    /// Corner connecting down and left
    DownLeft,
    /// Corner connecting down and right
    DownRight,
    /// Junction where two perpendicular segments cross
    Cross,
    /// Tail glyph marking where a walk began
    Start,
    /// Head glyph facing right
    HeadRight,
    /// Head glyph facing up
    HeadUp,
    /// Head glyph facing left
    HeadLeft,
    /// Head glyph facing down
    HeadDown,
}

impl Part {
    /// Box-drawing character used for text rendering
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Vertical => '│',
            Self::Horizontal => '─',
            Self::UpLeft => '┘',
            Self::UpRight => '└',
            Self::DownLeft => '┐',
            Self::DownRight => '┌',
            Self::Cross => '┼',
            Self::Start => 'X',
            Self::HeadRight => '>',
            Self::HeadUp => '^',
            Self::HeadLeft => '<',
            Self::HeadDown => 'v',
        }
    }

    /// Whether this part is a straight segment (the only crossable parts)
    pub const fn is_straight(self) -> bool {
        matches!(self, Self::Vertical | Self::Horizontal)
    }

    /// Whether this part is a directional head glyph
    pub const fn is_head(self) -> bool {
        matches!(
            self,
            Self::HeadRight | Self::HeadUp | Self::HeadLeft | Self::HeadDown
        )
    }
}

/// Relative turn a walk can take from its current facing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// Continue in the current facing
    Forward,
    /// Rotate one step counterclockwise
    Left,
    /// Rotate one step clockwise
    Right,
}

impl Turn {
    /// All turns in candidate-evaluation order
    pub const ALL: [Self; 3] = [Self::Forward, Self::Left, Self::Right];
}

/// Glyph written into the departed cell and the position delta applied
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    /// Part laid down at the walk's current cell
    pub part: Part,
    /// Horizontal step
    pub dx: i32,
    /// Vertical step (positive is up)
    pub dy: i32,
}

const fn mv(part: Part, dx: i32, dy: i32) -> Move {
    Move { part, dx, dy }
}

/// Cardinal facing of a walk
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Facing positive x
    Right,
    /// Facing positive y
    Up,
    /// Facing negative x
    Left,
    /// Facing negative y
    Down,
}

impl Direction {
    /// Facing after applying a turn (left is counterclockwise)
    pub const fn turned(self, turn: Turn) -> Self {
        match turn {
            Turn::Forward => self,
            Turn::Left => match self {
                Self::Right => Self::Up,
                Self::Up => Self::Left,
                Self::Left => Self::Down,
                Self::Down => Self::Right,
            },
            Turn::Right => match self {
                Self::Right => Self::Down,
                Self::Up => Self::Right,
                Self::Left => Self::Up,
                Self::Down => Self::Left,
            },
        }
    }

    /// Glyph and delta for taking a turn from this facing
    pub const fn candidate(self, turn: Turn) -> Move {
        match self {
            Self::Right => match turn {
                Turn::Forward => mv(Part::Horizontal, 1, 0),
                Turn::Left => mv(Part::UpLeft, 0, 1),
                Turn::Right => mv(Part::DownLeft, 0, -1),
            },
            Self::Up => match turn {
                Turn::Forward => mv(Part::Vertical, 0, 1),
                Turn::Left => mv(Part::DownLeft, -1, 0),
                Turn::Right => mv(Part::DownRight, 1, 0),
            },
            Self::Left => match turn {
                Turn::Forward => mv(Part::Horizontal, -1, 0),
                Turn::Left => mv(Part::DownRight, 0, -1),
                Turn::Right => mv(Part::UpRight, 0, 1),
            },
            Self::Down => match turn {
                Turn::Forward => mv(Part::Vertical, 0, -1),
                Turn::Left => mv(Part::UpRight, 1, 0),
                Turn::Right => mv(Part::UpLeft, -1, 0),
            },
        }
    }

    /// Straight segment that a walk moving in this facing may cross
    pub const fn crossable(self) -> Part {
        match self {
            Self::Right | Self::Left => Part::Vertical,
            Self::Up | Self::Down => Part::Horizontal,
        }
    }

    /// Head glyph placed when a walk terminates in this facing
    pub const fn head(self) -> Part {
        match self {
            Self::Right => Part::HeadRight,
            Self::Up => Part::HeadUp,
            Self::Left => Part::HeadLeft,
            Self::Down => Part::HeadDown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, Part, Turn};

    #[test]
    fn test_four_left_turns_return_to_start() {
        for dir in [
            Direction::Right,
            Direction::Up,
            Direction::Left,
            Direction::Down,
        ] {
            let mut facing = dir;
            for _ in 0..4 {
                facing = facing.turned(Turn::Left);
            }
            assert_eq!(facing, dir);
        }
    }

    #[test]
    fn test_left_then_right_cancels() {
        for dir in [
            Direction::Right,
            Direction::Up,
            Direction::Left,
            Direction::Down,
        ] {
            assert_eq!(dir.turned(Turn::Left).turned(Turn::Right), dir);
        }
    }

    #[test]
    fn test_candidate_deltas_are_unit_steps() {
        for dir in [
            Direction::Right,
            Direction::Up,
            Direction::Left,
            Direction::Down,
        ] {
            for turn in Turn::ALL {
                let mv = dir.candidate(turn);
                assert_eq!(mv.dx.abs() + mv.dy.abs(), 1);
            }
        }
    }

    #[test]
    fn test_forward_moves_lay_straight_segments() {
        assert_eq!(
            Direction::Right.candidate(Turn::Forward).part,
            Part::Horizontal
        );
        assert_eq!(Direction::Up.candidate(Turn::Forward).part, Part::Vertical);
        assert_eq!(
            Direction::Left.candidate(Turn::Forward).part,
            Part::Horizontal
        );
        assert_eq!(
            Direction::Down.candidate(Turn::Forward).part,
            Part::Vertical
        );
    }

    #[test]
    fn test_crossable_is_perpendicular() {
        assert_eq!(Direction::Up.crossable(), Part::Horizontal);
        assert_eq!(Direction::Down.crossable(), Part::Horizontal);
        assert_eq!(Direction::Left.crossable(), Part::Vertical);
        assert_eq!(Direction::Right.crossable(), Part::Vertical);
    }
}
