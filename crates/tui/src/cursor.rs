//! The card cursor and the focused form field.

/// Position of the card cursor on the board.
///
/// The cursor always sits on a column; it sits on a card only after the
/// user moved it there. Navigation wraps at both ends.
///
/// # Examples
///
/// ```
/// use taskboard_tui::cursor::Cursor;
///
/// let counts = [2, 0, 1];
/// let mut cursor = Cursor::default();
/// cursor.navigate_down(&counts);
/// assert_eq!(cursor.card, Some(0));
///
/// cursor.navigate_right(&counts);
/// assert_eq!((cursor.column, cursor.card), (1, None));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Column index.
    pub column: usize,
    /// Card index within the column, if a card is selected.
    pub card: Option<usize>,
}

impl Cursor {
    /// Moves one column left, wrapping to the last column.
    pub fn navigate_left(&mut self, counts: &[usize]) {
        if counts.is_empty() {
            return;
        }
        self.column = self.column.checked_sub(1).unwrap_or(counts.len() - 1);
        self.clamp(counts);
    }

    /// Moves one column right, wrapping to the first column.
    pub fn navigate_right(&mut self, counts: &[usize]) {
        if counts.is_empty() {
            return;
        }
        self.column = (self.column + 1) % counts.len();
        self.clamp(counts);
    }

    /// Moves one card up, wrapping to the bottom.
    pub fn navigate_up(&mut self, counts: &[usize]) {
        let len = counts.get(self.column).copied().unwrap_or(0);
        self.card = match (len, self.card) {
            (0, _) => None,
            (_, Some(idx)) if idx > 0 => Some(idx - 1),
            (_, Some(_)) => Some(len - 1),
            (_, None) => Some(0),
        };
    }

    /// Moves one card down, wrapping to the top.
    pub fn navigate_down(&mut self, counts: &[usize]) {
        let len = counts.get(self.column).copied().unwrap_or(0);
        self.card = match (len, self.card) {
            (0, _) => None,
            (_, Some(idx)) if idx + 1 < len => Some(idx + 1),
            _ => Some(0),
        };
    }

    /// Deselects the card, keeping the column.
    pub fn clear(&mut self) {
        self.card = None;
    }

    /// Pulls the cursor back inside the board after cards moved.
    pub fn clamp(&mut self, counts: &[usize]) {
        if self.column >= counts.len() {
            self.column = counts.len().saturating_sub(1);
        }
        let len = counts.get(self.column).copied().unwrap_or(0);
        self.card = match self.card {
            _ if len == 0 => None,
            Some(idx) => Some(idx.min(len - 1)),
            None => None,
        };
    }
}

/// A field of the add or edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Task title.
    #[default]
    Title,
    /// Task description.
    Description,
    /// Task status.
    Status,
}

impl FormField {
    /// All fields in tab order.
    pub const ALL: [Self; 3] = [Self::Title, Self::Description, Self::Status];

    /// Position of the field in tab order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Title => 0,
            Self::Description => 1,
            Self::Status => 2,
        }
    }

    /// The next field, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The previous field, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Returns `true` for free-text fields.
    #[must_use]
    pub const fn is_text(self) -> bool {
        !matches!(self, Self::Status)
    }
}
