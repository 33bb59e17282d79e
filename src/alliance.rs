use core::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alliance {
    White,
    Black,
}

impl fmt::Debug for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::White => write!(f, "White"),
            Self::Black => write!(f, "Black"),
        }
    }
}

impl Alliance {
    /// Sign applied to pawn offsets. Index 0 is a8, so White advances
    /// toward lower indices and Black toward higher ones.
    pub const fn direction(&self) -> isize {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    pub fn is_white(&self) -> bool {
        matches!(self, Self::White)
    }

    pub fn is_black(&self) -> bool {
        matches!(self, Self::Black)
    }
}
