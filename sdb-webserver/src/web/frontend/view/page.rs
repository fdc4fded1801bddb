use maud::{html, Markup, DOCTYPE};
use rocket::request::FlashMessage;

const MAIN_CSS_URL: &str = "/main.css";

pub fn page(title: &str, flash: Option<FlashMessage<'_>>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no";
            title { (title) }
            link rel="stylesheet" href=(MAIN_CSS_URL);
        }
        body {
            (flash_msg(flash))
            (header())
            (content)
        }
    }
}

fn flash_msg(flash: Option<FlashMessage<'_>>) -> Markup {
    html! {
        @if let Some(msg) = flash {
            div class=(format!("flash {}", msg.kind())) {
                (msg.message())
            }
        }
    }
}

fn header() -> Markup {
    html! {
        header {
            a class="brand" href="/" { "stagedb" }
            nav {
                a href="/venues" { "venues" }
                a href="/artists" { "artists" }
                a href="/shows" { "shows" }
            }
        }
    }
}
