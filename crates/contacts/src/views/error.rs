use maud::{DOCTYPE, Markup, html};

/// Generic error boundary page. Every unhandled failure renders through
/// this, with no per-route customisation.
pub fn error_page(status: u16, reason: &str, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Oh no!" }
                link rel="stylesheet" href="/app.css";
            }
            body {
                div id="error-page" {
                    h1 { "Application Error" }
                    p { i { (status) " " (reason) } }
                    pre { (message) }
                    p { a href="/" { "Back to contacts" } }
                }
            }
        }
    }
}
