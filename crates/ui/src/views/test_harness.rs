use std::sync::Arc;
use std::time::Duration;

use daile_core::model::{AnswerKey, DisplayMode, GuessBoard};
use daile_core::time::{ManualClock, fixed_clock};
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{GameService, MemoryClipboard, TICK_PERIOD};

use crate::context::{AppContext, UiApp};
use super::game::{GameIntent, GameTestHandles, GameView};

struct TestApp {
    game: Arc<GameService>,
}

impl UiApp for TestApp {
    fn game_service(&self) -> Arc<GameService> {
        Arc::clone(&self.game)
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    handles: GameTestHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HarnessProps {}

#[component]
fn HarnessRoot(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| AppContext::new(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { GameView {} }
}

pub struct GameHarness {
    pub dom: VirtualDom,
    pub clipboard: Arc<MemoryClipboard>,
    pub clock: ManualClock,
    handles: GameTestHandles,
}

impl GameHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&mut self, intent: GameIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn guess(&mut self, index: usize, raw: &str) {
        self.dispatch(GameIntent::Input {
            index,
            raw: raw.to_string(),
        });
        self.dispatch(GameIntent::Commit(index));
    }

    pub fn board(&self) -> GuessBoard {
        let board = self.handles.board();
        self.dom.in_runtime(|| board.read().clone())
    }

    /// Scripts sent to the webview, oldest first.
    pub fn scripts(&self) -> Vec<String> {
        self.handles.scripts()
    }

    pub fn timer_finished(&self) -> bool {
        let timer = self.handles.timer();
        self.dom.in_runtime(|| timer.finished())
    }

    /// Let one tick period pass on tokio's paused clock and flush the timer task.
    pub async fn run_tick(&mut self) {
        let settle = Duration::from_millis(10);
        let _ = tokio::time::timeout(settle, self.dom.wait_for_work()).await;
        tokio::time::sleep(TICK_PERIOD).await;
        let _ = tokio::time::timeout(settle, self.dom.wait_for_work()).await;
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_game_harness(mode: DisplayMode) -> GameHarness {
    let clipboard = Arc::new(MemoryClipboard::new());
    let clock = fixed_clock();
    let game = GameService::new(clock.clone().into(), AnswerKey::default(), clipboard.clone())
    .with_display_mode(mode);
    let handles = GameTestHandles::default();

    let dom = VirtualDom::new_with_props(
        HarnessRoot,
        HarnessProps {
            app: Arc::new(TestApp {
                game: Arc::new(game),
            }),
            handles: handles.clone(),
        },
    );

    GameHarness {
        dom,
        clipboard,
        clock,
        handles,
    }
}
