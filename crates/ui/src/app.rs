use dioxus::prelude::*;

use crate::views::GameView;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Daile" }

        ErrorBoundary {
            handle_error: |errors: ErrorContext| rsx! {
                div { class: "fatal",
                    h1 { "Something went wrong" }
                    pre { "{errors:?}" }
                }
            },
            GameView {}
        }
    }
}
