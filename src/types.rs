//! Core data types: the RGB triple and the cyclic color state.

/// An RGB color in [0, 255] duty-cycle units per component.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
    pub const YELLOW: Self = Self::new(255, 255, 0);
    pub const CYAN: Self = Self::new(0, 255, 255);
    pub const MAGENTA: Self = Self::new(255, 0, 255);
}

/// Cyclic cursor over the fixed six-color sequence.
///
/// The cursor starts on red. [`advance`](Self::advance) steps to the
/// next entry and wraps after magenta, so six advances return to the
/// starting color.
///
/// # Example
///
/// ```
/// use rc_lights::{ColorCycle, Rgb};
///
/// let mut cycle = ColorCycle::new();
/// assert_eq!(cycle.current(), Rgb::RED);
/// assert_eq!(cycle.advance(), Rgb::GREEN);
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorCycle {
    index: usize,
}

impl ColorCycle {
    /// The fixed color order.
    pub const SEQUENCE: [Rgb; 6] = [
        Rgb::RED,
        Rgb::GREEN,
        Rgb::BLUE,
        Rgb::YELLOW,
        Rgb::CYAN,
        Rgb::MAGENTA,
    ];

    /// Create a cycle positioned on red.
    #[must_use]
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Step to the next color (wrapping) and return it.
    pub fn advance(&mut self) -> Rgb {
        self.index = (self.index + 1) % Self::SEQUENCE.len();
        Self::SEQUENCE[self.index]
    }

    /// The color the cursor currently rests on.
    #[must_use]
    pub const fn current(&self) -> Rgb {
        Self::SEQUENCE[self.index]
    }

    /// Current position in the sequence.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }
}
