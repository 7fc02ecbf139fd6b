/// CSS-like display mode. `None` removes the element from the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Fixed(u16),
    #[default]
    Auto,
}

impl Size {
    /// Returns true for a height that occupies no rows.
    pub fn is_collapsed(&self) -> bool {
        matches!(self, Size::Fixed(0))
    }
}
