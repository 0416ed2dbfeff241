use std::fmt;
use std::str::FromStr;

use super::error::{PaginatorError, Result};

/// Every button a book view exposes, addressed by role instead of by slot in the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    First,
    Previous,
    Stop,
    Next,
    Last,
    Counter,
    EnterIndex,
    GoBack,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::First,
        Action::Previous,
        Action::Stop,
        Action::Next,
        Action::Last,
        Action::Counter,
        Action::EnterIndex,
        Action::GoBack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Previous => "previous",
            Self::Stop => "stop",
            Self::Next => "next",
            Self::Last => "last",
            Self::Counter => "counter",
            Self::EnterIndex => "enter_index",
            Self::GoBack => "go_back",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    pub disabled: bool,
    pub label: String,
}

impl ControlState {
    fn new(label: &str, disabled: bool) -> Self {
        Self {
            disabled,
            label: label.to_string(),
        }
    }
}

/// Enabled/disabled state and labels of every navigation control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    pub first: ControlState,
    pub previous: ControlState,
    pub stop: ControlState,
    pub next: ControlState,
    pub last: ControlState,
    pub counter: ControlState,
    pub enter_index: ControlState,
    pub go_back: ControlState,
}

impl Controls {
    pub fn new(position: usize, total: usize, has_previous: bool) -> Self {
        let mut controls = Self {
            first: ControlState::new("<<", true),
            previous: ControlState::new("<", true),
            stop: ControlState::new("🛑", false),
            next: ControlState::new(">", false),
            last: ControlState::new(">>", false),
            counter: ControlState::new("", true),
            enter_index: ControlState::new("🔢", false),
            go_back: ControlState::new("↩", true),
        };
        controls.refresh(position, total, has_previous);
        controls
    }

    /// Recomputes which controls are usable for the given position.
    pub fn refresh(&mut self, position: usize, total: usize, has_previous: bool) {
        let at_start = position == 0;
        let at_end = position + 1 >= total;

        self.first.disabled = at_start;
        self.previous.disabled = at_start;
        self.next.disabled = at_end;
        self.last.disabled = at_end;
        self.go_back.disabled = !has_previous;
        self.counter.label = format!("{}/{}", position + 1, total);
    }

    pub fn get(&self, action: Action) -> &ControlState {
        match action {
            Action::First => &self.first,
            Action::Previous => &self.previous,
            Action::Stop => &self.stop,
            Action::Next => &self.next,
            Action::Last => &self.last,
            Action::Counter => &self.counter,
            Action::EnterIndex => &self.enter_index,
            Action::GoBack => &self.go_back,
        }
    }
}

/// Where a reader currently is in a book and where they came from.
///
/// Moves clamp at both ends. The remembered position is single-step: going back
/// forgets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    position: usize,
    previous: Option<usize>,
    total: usize,
}

#[allow(dead_code)]
impl Navigation {
    pub fn new(total: usize) -> Self {
        Self {
            position: 0,
            previous: None,
            total,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn previous_position(&self) -> Option<usize> {
        self.previous
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn first(&mut self) {
        self.move_to(0);
    }

    pub fn previous(&mut self) {
        self.move_to(self.position.saturating_sub(1));
    }

    pub fn next(&mut self) {
        self.move_to((self.position + 1).min(self.last_position()));
    }

    pub fn last(&mut self) {
        self.move_to(self.last_position());
    }

    pub fn jump(&mut self, position: usize) -> Result<()> {
        if position >= self.total {
            return Err(PaginatorError::PositionOutOfRange {
                position,
                total: self.total,
            });
        }
        self.move_to(position);
        Ok(())
    }

    /// Returns to the remembered position. Does nothing when there is none.
    pub fn go_back(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.position = previous.min(self.last_position());
        }
    }

    /// Adjusts to a new page count, placing the reader on `position` and the
    /// go-back target on `previous` without recording a move.
    pub(crate) fn reset(&mut self, position: usize, previous: Option<usize>, total: usize) {
        self.total = total;
        self.position = position.min(self.last_position());
        self.previous = previous.filter(|p| *p < total && *p != self.position);
    }

    pub fn controls(&self) -> Controls {
        Controls::new(self.position, self.total, self.previous.is_some())
    }

    fn last_position(&self) -> usize {
        self.total.saturating_sub(1)
    }

    fn move_to(&mut self, position: usize) {
        if position != self.position {
            self.previous = Some(self.position);
            self.position = position;
        }
    }
}
