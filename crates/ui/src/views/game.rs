use std::sync::Arc;

use daile_core::model::GuessBoard;
use dioxus::document::eval;
use dioxus::prelude::*;
use services::{GameService, ShareOutcome, TICK_PERIOD};

use crate::context::AppContext;
use crate::vm::{SlotBadge, SlotVm, map_board, slot_input_id};

use super::faq::{FaqSection, IntroStats};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameIntent {
    Input { index: usize, raw: String },
    Commit(usize),
    ToggleDisplayMode,
    Share,
}

/// Follow-up work in the webview after the board has been updated.
#[derive(Debug, PartialEq, Eq)]
enum IntentEffect {
    None,
    Shared(ShareOutcome),
    /// The field shows text the board dropped; a re-render will not touch it
    /// when the stored value is unchanged.
    ResetField { input_id: String, value: String },
}

impl IntentEffect {
    fn script(&self) -> Option<String> {
        match self {
            IntentEffect::None => None,
            IntentEffect::Shared(outcome) => Some(format!("alert({:?});", outcome.acknowledgment)),
            IntentEffect::ResetField { input_id, value } => Some(format!(
                "{{ const field = document.getElementById({input_id:?}); if (field) {{ field.value = {value:?}; }} }}"
            )),
        }
    }
}

fn apply_intent(service: &GameService, board: &mut GuessBoard, intent: GameIntent) -> IntentEffect {
    let result = match intent {
        GameIntent::Input { index, raw } => service.set_input(board, index, &raw).map(|_| {
            match board.slot(index) {
                Some(slot) if slot.input() != raw => IntentEffect::ResetField {
                    input_id: slot_input_id(index),
                    value: slot.input().to_string(),
                },
                _ => IntentEffect::None,
            }
        }),
        GameIntent::Commit(index) => service
            .commit_guess(board, index)
            .map(|_| IntentEffect::None),
        GameIntent::ToggleDisplayMode => {
            board.toggle_display_mode();
            Ok(IntentEffect::None)
        }
        GameIntent::Share => Ok(IntentEffect::Shared(service.share(board))),
    };
    result.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "intent rejected");
        IntentEffect::None
    })
}

#[component]
pub fn GameView() -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.game_service();

    let board = use_signal({
        let service = Arc::clone(&service);
        move || service.start_board()
    });

    // Dropped with the component, and returns on its own once the board is complete.
    #[cfg_attr(not(test), allow(unused_variables))]
    let timer = use_future({
        let service = Arc::clone(&service);
        move || {
            let service = Arc::clone(&service);
            let mut board = board;
            async move {
                loop {
                    tokio::time::sleep(TICK_PERIOD).await;
                    if !service.tick(&mut board.write()) {
                        break;
                    }
                }
            }
        }
    });

    #[cfg(test)]
    let handles = try_consume_context::<GameTestHandles>();

    let dispatch = use_callback({
        #[cfg(test)]
        let handles = handles.clone();
        move |intent: GameIntent| {
            let mut board = board;
            let effect = apply_intent(&service, &mut board.write(), intent);
            let Some(js) = effect.script() else {
                return;
            };
            #[cfg(test)]
            {
                if let Some(handles) = &handles {
                    handles.record_script(&js);
                }
            }
            let _ = eval(&js);
        }
    });

    #[cfg(test)]
    {
        if let Some(handles) = handles {
            handles.register(dispatch, board, timer);
        }
    }

    let vm = map_board(&board.read());

    rsx! {
        div { class: "{vm.root_class}",
            main { class: "board",
                div { class: "board__header",
                    h1 { "Daile - 로또 번호 맞추기" }
                    button {
                        class: "theme-toggle",
                        r#type: "button",
                        aria_label: "{vm.toggle_label}",
                        onclick: move |_| dispatch.call(GameIntent::ToggleDisplayMode),
                        "{vm.toggle_icon}"
                    }
                }

                IntroStats {}

                div { class: "board__clock",
                    p { "시간 : {vm.clock_label}" }
                }

                div { class: "board__slots",
                    for (index, slot) in vm.slots.iter().cloned().enumerate() {
                        SlotField { key: "{index}", slot, on_intent: dispatch }
                    }
                }

                if vm.complete {
                    div { class: "board__complete",
                        p { class: "board__congrats", "🎉 축하합니다! 🎉" }
                        p { "걸린 시간: {vm.clock_label}" }
                        button {
                            class: "share-button",
                            r#type: "button",
                            onclick: move |_| dispatch.call(GameIntent::Share),
                            "결과 공유하기"
                        }
                    }
                }

                FaqSection {}
            }
        }
    }
}

#[component]
fn SlotField(slot: SlotVm, on_intent: Callback<GameIntent>) -> Element {
    let index = slot.index;
    let up_label = SlotBadge::Up.label();
    let down_label = SlotBadge::Down.label();

    rsx! {
        div { class: "{slot.class}",
            if slot.badge == Some(SlotBadge::Up) {
                div { class: SlotBadge::Up.class(), "{up_label}" }
            }
            input {
                id: "{slot.input_id}",
                class: "slot__input",
                r#type: "text",
                inputmode: "numeric",
                maxlength: "2",
                value: "{slot.input}",
                disabled: slot.locked,
                oninput: move |evt| on_intent.call(GameIntent::Input { index, raw: evt.value() }),
                onkeydown: move |evt| {
                    if matches!(evt.data.key(), Key::Enter) {
                        evt.prevent_default();
                        on_intent.call(GameIntent::Commit(index));
                    }
                },
            }
            if slot.badge == Some(SlotBadge::Down) {
                div { class: SlotBadge::Down.class(), "{down_label}" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct GameTestHandles {
    dispatch: Rc<RefCell<Option<Callback<GameIntent>>>>,
    board: Rc<RefCell<Option<Signal<GuessBoard>>>>,
    timer: Rc<RefCell<Option<UseFuture>>>,
    scripts: Rc<RefCell<Vec<String>>>,
}

#[cfg(test)]
impl GameTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<GameIntent>,
        board: Signal<GuessBoard>,
        timer: UseFuture,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.board.borrow_mut() = Some(board);
        *self.timer.borrow_mut() = Some(timer);
    }

    pub(crate) fn record_script(&self, js: &str) {
        self.scripts.borrow_mut().push(js.to_string());
    }

    pub(crate) fn dispatch(&self) -> Callback<GameIntent> {
        (*self.dispatch.borrow()).expect("game dispatch registered")
    }

    pub(crate) fn board(&self) -> Signal<GuessBoard> {
        (*self.board.borrow()).expect("game board registered")
    }

    pub(crate) fn timer(&self) -> UseFuture {
        (*self.timer.borrow()).expect("game timer registered")
    }

    pub(crate) fn scripts(&self) -> Vec<String> {
        self.scripts.borrow().clone()
    }
}
