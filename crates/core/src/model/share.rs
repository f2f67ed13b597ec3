use crate::model::Elapsed;

pub const APP_NAME: &str = "Daile";

/// Acknowledgment shown after the share action.
pub const SHARE_ACK: &str = "결과가 클립보드에 복사되었습니다!";

/// Build the clipboard text for a result.
///
/// A finished board reports its frozen total in seconds; an unfinished one
/// falls back to the live `MM:SS` clock label.
#[must_use]
pub fn share_message(frozen: Option<Elapsed>, live: Elapsed) -> String {
    let time = match frozen {
        Some(total) => format!("{}초", total.as_secs()),
        None => live.to_string(),
    };
    format!("{APP_NAME} - 오늘의 로또 번호를 {time}만에 맞췄어요! 🎉\n")
}
