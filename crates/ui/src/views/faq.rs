use dioxus::prelude::*;

const ROUND: u32 = 1000;
const SOLVERS: u32 = 10;
const BEST_TIME: &str = "10:00";

struct FaqEntry {
    question: &'static str,
    answers: &'static [&'static str],
}

static FAQ: [FaqEntry; 3] = [
    FaqEntry {
        question: "Q. Daile는 무엇인가요?",
        answers: &[
            "A. Daile는 로또 번호를 맞히는 게임입니다. 정답 번호를 추측하면 추측한 번호가 정답 번호보다 작은지, 큰지 알려줍니다. 가장 근접한 번호를 찾아가며 로또를 맞춰보세요",
        ],
    },
    FaqEntry {
        question: "Q. 하루에 한 번 이상 플레이할 수는 없나요?",
        answers: &[
            "Daile은 하루에 여러 번 플레이할 수 있습니다. 새로고침을 통해 새로운 로또 번호를 맞힐 수 있습니다",
            "정답 번호는 난수로 리로드마다 초기화됩니다.",
        ],
    },
    FaqEntry {
        question: "Q. 다른 질문이나 피드백은 어떻게 보내나요?",
        answers: &["메일로 문의해주세요."],
    },
];

#[component]
pub fn IntroStats() -> Element {
    rsx! {
        div { class: "intro",
            p {
                span { class: "accent", "{ROUND}" }
                "번째 새롭게 생성되는 로또 번호를 예측해보세요"
            }
            p {
                "로또 번호를 맞춘 사람은 "
                span { class: "accent", "{SOLVERS}" }
                "명입니다"
            }
            p {
                "로또 번호를 맞추는데 걸린 최단시간은 "
                span { class: "accent", "{BEST_TIME}" }
                "입니다"
            }
        }
    }
}

#[component]
pub fn FaqSection() -> Element {
    rsx! {
        section { class: "faq",
            h2 { "질문과 답변" }
            div { class: "faq__list",
                for entry in FAQ.iter() {
                    div { class: "faq__entry",
                        p { class: "faq__question", "{entry.question}" }
                        for answer in entry.answers.iter() {
                            p { class: "faq__answer", "{answer}" }
                        }
                    }
                }
            }
        }
    }
}
