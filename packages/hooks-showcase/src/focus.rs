/// A keyboard-focusable control on the showcase page, in tab order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FocusSlot {
    /// The counter widget's "Scream!" button.
    #[default]
    ScreamButton,
    /// The list builder's text input.
    FruitInput,
    /// The list builder's "Add Fruit" button.
    AddFruitButton,
    /// The filtered search widget's text input.
    SearchInput,
    /// The render counter widget's text input.
    RenderCounterInput,
    /// The auto-focus widget's text input.
    AutoFocusInput,
}

impl FocusSlot {
    /// Every slot, in tab order.
    pub const ALL: [FocusSlot; 6] = [
        FocusSlot::ScreamButton,
        FocusSlot::FruitInput,
        FocusSlot::AddFruitButton,
        FocusSlot::SearchInput,
        FocusSlot::RenderCounterInput,
        FocusSlot::AutoFocusInput,
    ];

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|slot| *slot == self)
            .unwrap_or_default()
    }
}

/// Tracks which [`FocusSlot`] currently receives keyboard input.
///
/// This is the only state owned by the page rather than by a widget. Widgets are told whether
/// one of their slots has focus, and may request focus, but never see each other's state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusRing {
    current: FocusSlot,
}

impl FocusRing {
    /// Returns the focused slot.
    pub fn current(&self) -> FocusSlot {
        self.current
    }

    /// Returns true if `slot` is focused.
    pub fn is_focused(&self, slot: FocusSlot) -> bool {
        self.current == slot
    }

    /// Returns the ring with focus moved to `slot`.
    pub fn focus(self, slot: FocusSlot) -> Self {
        Self { current: slot }
    }

    /// Returns the ring with focus moved to the next slot, wrapping around.
    pub fn next(self) -> Self {
        let i = (self.current.index() + 1) % FocusSlot::ALL.len();
        self.focus(FocusSlot::ALL[i])
    }

    /// Returns the ring with focus moved to the previous slot, wrapping around.
    pub fn prev(self) -> Self {
        let len = FocusSlot::ALL.len();
        let i = (self.current.index() + len - 1) % len;
        self.focus(FocusSlot::ALL[i])
    }
}
