/// Depth tier of a star layer.
///
/// Layers are updated back-to-front: Far first, Near last.
/// Nearer layers expand faster, which is the whole parallax cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Depth {
    Far = 0,
    Mid = 1,
    Near = 2,
}

impl Depth {
    /// Total number of depth layers.
    pub const COUNT: usize = 3;

    /// All layers in update order.
    pub const ALL: [Depth; Depth::COUNT] = [Depth::Far, Depth::Mid, Depth::Near];

    /// Convert from an index to a Depth.
    /// Returns None if the value is out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Far),
            1 => Some(Self::Mid),
            2 => Some(Self::Near),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Default radial speed multiplier applied per tick.
    pub fn speed(self) -> f32 {
        match self {
            Self::Far => 1.002,
            Self::Mid => 1.004,
            Self::Near => 1.008,
        }
    }

    /// The layer receives `count / divisor` stars (truncating).
    pub fn divisor(self) -> u32 {
        match self {
            Self::Far => 2,
            Self::Mid => 3,
            Self::Near => 6,
        }
    }

    /// Number of stars this layer gets out of a total budget.
    pub fn share(self, count: u32) -> usize {
        (count / self.divisor()) as usize
    }
}
