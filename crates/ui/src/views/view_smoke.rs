use chrono::Duration;
use daile_core::model::{DisplayMode, Feedback};

use super::GameIntent;
use super::test_harness::setup_game_harness;

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_renders_initial_page() {
    let mut harness = setup_game_harness(DisplayMode::Light);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Daile - 로또 번호 맞추기"), "missing title in {html}");
    assert!(html.contains("시간 : 00:00"), "missing clock in {html}");
    assert!(html.contains("질문과 답변"), "missing faq in {html}");
    assert!(html.contains("🌙"), "missing toggle in {html}");
    for index in 0..6 {
        let id = format!("slot-{index}");
        assert!(html.contains(&id), "missing {id} in {html}");
    }
    assert!(!html.contains("축하합니다"), "unexpected banner in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_shows_direction_badges() {
    let mut harness = setup_game_harness(DisplayMode::Light);
    harness.rebuild();

    harness.guess(0, "10");
    harness.guess(1, "99");

    let html = harness.render();
    assert!(html.contains("up ↑"), "missing up badge in {html}");
    assert!(html.contains("down ↓"), "missing down badge in {html}");

    let board = harness.board();
    assert_eq!(board.slot(0).unwrap().feedback(), Feedback::Higher);
    assert_eq!(board.slot(1).unwrap().feedback(), Feedback::Lower);
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_sanitizes_typed_input() {
    let mut harness = setup_game_harness(DisplayMode::Light);
    harness.rebuild();

    harness.dispatch(GameIntent::Input {
        index: 4,
        raw: "a1b2c3".to_string(),
    });

    assert_eq!(harness.board().slot(4).unwrap().input(), "12");
    let html = harness.render();
    assert!(html.contains("value=\"12\""), "missing sanitized value in {html}");
    let scripts = harness.scripts();
    assert_eq!(scripts.len(), 1, "expected one field reset, got {scripts:?}");
    assert!(scripts[0].contains(r#"getElementById("slot-4")"#), "{scripts:?}");
    assert!(scripts[0].contains(r#"field.value = "12""#), "{scripts:?}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_resets_field_when_stored_input_is_unchanged() {
    let mut harness = setup_game_harness(DisplayMode::Light);
    harness.rebuild();

    harness.dispatch(GameIntent::Input {
        index: 0,
        raw: "1".to_string(),
    });
    assert!(harness.scripts().is_empty(), "clean input needs no reset");

    harness.dispatch(GameIntent::Input {
        index: 0,
        raw: "1a".to_string(),
    });
    assert_eq!(harness.board().slot(0).unwrap().input(), "1");
    let scripts = harness.scripts();
    assert_eq!(scripts.len(), 1, "{scripts:?}");
    assert!(scripts[0].contains(r#"getElementById("slot-0")"#), "{scripts:?}");
    assert!(scripts[0].contains(r#"field.value = "1""#), "{scripts:?}");

    harness.dispatch(GameIntent::Input {
        index: 1,
        raw: "a".to_string(),
    });
    assert_eq!(harness.board().slot(1).unwrap().input(), "");
    let last = harness.scripts().pop().unwrap();
    assert!(last.contains(r#"getElementById("slot-1")"#), "{last}");
    assert!(last.contains(r#"field.value = """#), "{last}");

    let html = harness.render();
    assert!(html.contains("value=\"1\""), "missing stored value in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_completes_and_shares() {
    let mut harness = setup_game_harness(DisplayMode::Light);
    harness.rebuild();

    for (index, raw) in ["42", "12", "1", "3", "6", "2"].iter().enumerate() {
        harness.guess(index, raw);
    }

    let html = harness.render();
    assert!(html.contains("🎉 축하합니다! 🎉"), "missing banner in {html}");
    assert!(html.contains("걸린 시간: 00:00"), "missing frozen time in {html}");
    assert!(html.contains("결과 공유하기"), "missing share button in {html}");
    assert!(!html.contains("up ↑") && !html.contains("down ↓"), "unexpected badge in {html}");
    assert!(harness.board().is_complete());

    harness.dispatch(GameIntent::Share);
    assert_eq!(
        harness.clipboard.last().as_deref(),
        Some("Daile - 오늘의 로또 번호를 0초만에 맞췄어요! 🎉\n")
    );
    let alert = harness.scripts().pop().unwrap();
    assert!(alert.starts_with("alert("), "{alert}");
    assert!(alert.contains("결과가 클립보드에 복사되었습니다!"), "{alert}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn game_view_smoke_timer_ticks_until_board_completes() {
    let mut harness = setup_game_harness(DisplayMode::Light);
    harness.rebuild();

    harness.clock.advance(Duration::seconds(75));
    harness.run_tick().await;
    let html = harness.render();
    assert!(html.contains("시간 : 01:15"), "clock did not advance in {html}");
    assert!(!harness.timer_finished());

    for (index, raw) in ["42", "12", "1", "3", "6", "2"].iter().enumerate() {
        harness.guess(index, raw);
    }
    assert!(harness.board().is_complete());

    harness.clock.advance(Duration::seconds(100));
    harness.run_tick().await;
    assert!(harness.timer_finished(), "timer kept running after completion");

    let html = harness.render();
    assert!(html.contains("시간 : 01:15"), "clock moved after completion in {html}");
    assert!(html.contains("걸린 시간: 01:15"), "missing frozen time in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_locked_slot_ignores_edits() {
    let mut harness = setup_game_harness(DisplayMode::Light);
    harness.rebuild();

    harness.guess(0, "42");
    harness.guess(0, "7");

    let board = harness.board();
    let slot = board.slot(0).unwrap();
    assert_eq!(slot.input(), "42");
    assert!(slot.is_locked());
    assert!(!board.is_complete());
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_toggles_display_mode() {
    let mut harness = setup_game_harness(DisplayMode::Dark);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("page dark"), "missing dark class in {html}");
    assert!(html.contains("🌞"), "missing sun toggle in {html}");

    harness.dispatch(GameIntent::ToggleDisplayMode);
    let html = harness.render();
    assert!(!html.contains("page dark"), "dark class still present in {html}");
    assert_eq!(harness.board().display_mode(), DisplayMode::Light);
}
