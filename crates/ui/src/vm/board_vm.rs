use daile_core::model::{DisplayMode, Feedback, GuessBoard, Slot};

/// Hint rendered next to a slot after a wrong guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotBadge {
    Up,
    Down,
}

impl SlotBadge {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SlotBadge::Up => "up ↑",
            SlotBadge::Down => "down ↓",
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            SlotBadge::Up => "slot__badge slot__badge--up",
            SlotBadge::Down => "slot__badge slot__badge--down",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotVm {
    pub index: usize,
    pub input_id: String,
    pub input: String,
    pub locked: bool,
    pub badge: Option<SlotBadge>,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardVm {
    pub clock_label: String,
    pub slots: Vec<SlotVm>,
    pub complete: bool,
    pub root_class: &'static str,
    pub toggle_icon: &'static str,
    pub toggle_label: &'static str,
}

/// DOM id of a slot's input field.
#[must_use]
pub fn slot_input_id(index: usize) -> String {
    format!("slot-{index}")
}

#[must_use]
pub fn map_slot(index: usize, slot: &Slot) -> SlotVm {
    let badge = match slot.feedback() {
        Feedback::Higher => Some(SlotBadge::Up),
        Feedback::Lower => Some(SlotBadge::Down),
        Feedback::None | Feedback::Correct => None,
    };
    let class = if slot.is_locked() {
        "slot slot--correct"
    } else {
        "slot"
    };

    SlotVm {
        index,
        input_id: slot_input_id(index),
        input: slot.input().to_string(),
        locked: slot.is_locked(),
        badge,
        class,
    }
}

#[must_use]
pub fn map_board(board: &GuessBoard) -> BoardVm {
    let (root_class, toggle_icon, toggle_label) = match board.display_mode() {
        DisplayMode::Light => ("page", "🌙", "다크 모드로 전환"),
        DisplayMode::Dark => ("page dark", "🌞", "라이트 모드로 전환"),
    };

    BoardVm {
        clock_label: board.elapsed().to_string(),
        slots: board
            .slots()
            .iter()
            .enumerate()
            .map(|(index, slot)| map_slot(index, slot))
            .collect(),
        complete: board.is_complete(),
        root_class,
        toggle_icon,
        toggle_label,
    }
}
