mod board_vm;

pub use board_vm::{BoardVm, SlotBadge, SlotVm, map_board, map_slot, slot_input_id};
