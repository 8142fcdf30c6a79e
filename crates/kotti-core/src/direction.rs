/// Signed direction of travel along one axis.
///
/// `Forward` is left-to-right on x and top-to-bottom on y.
#[repr(i8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Backward = -1,
    #[default]
    Still = 0,
    Forward = 1,
}

impl Direction {
    /// Sign of `delta`; a zero delta is `Still`.
    pub fn from_delta(delta: f32) -> Self {
        if delta > 0.0 {
            Direction::Forward
        } else if delta < 0.0 {
            Direction::Backward
        } else {
            Direction::Still
        }
    }

    /// The opposite direction. `Still` stays `Still`.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Backward => Direction::Forward,
            Direction::Still => Direction::Still,
            Direction::Forward => Direction::Backward,
        }
    }

    pub fn signum(self) -> i8 {
        self as i8
    }

    pub fn is_still(self) -> bool {
        self == Direction::Still
    }
}
