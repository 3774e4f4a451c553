//! Physical buttons

/// Front buttons of the badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Button {
    A = 0,
    B = 1,
    C = 2,
    Up = 3,
    Down = 4,
}

impl Button {
    /// All buttons in bit order
    pub const ALL: [Button; 5] = [Button::A, Button::B, Button::C, Button::Up, Button::Down];

    /// Bit mask of this button in a [`ButtonSet`]
    pub const fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of buttons, one bit per [`Button`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSet(u8);

impl ButtonSet {
    /// No buttons
    pub const EMPTY: Self = Self(0);

    const VALID_BITS: u8 = 0b1_1111;

    /// Build a set from raw bits, ignoring unknown bits
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::VALID_BITS)
    }

    /// Raw bit representation
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Set containing only `button`
    pub const fn single(button: Button) -> Self {
        Self(button.mask())
    }

    /// Copy of this set with `button` added
    pub const fn with(self, button: Button) -> Self {
        Self(self.0 | button.mask())
    }

    pub const fn contains(self, button: Button) -> bool {
        self.0 & button.mask() != 0
    }

    /// True when every button in `other` is also in `self`
    pub const fn contains_all(self, other: ButtonSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when at least one button is shared
    pub const fn intersects(self, other: ButtonSet) -> bool {
        self.0 & other.0 != 0
    }

    /// Buttons present in both sets
    pub const fn intersection(self, other: ButtonSet) -> Self {
        Self(self.0 & other.0)
    }

    /// Buttons in `self` that are not in `other`
    pub const fn difference(self, other: ButtonSet) -> Self {
        Self(self.0 & !other.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the buttons in the set
    pub fn iter(self) -> impl Iterator<Item = Button> {
        Button::ALL.into_iter().filter(move |b| self.contains(*b))
    }
}

impl FromIterator<Button> for ButtonSet {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        iter.into_iter().fold(ButtonSet::EMPTY, ButtonSet::with)
    }
}
