use maud::{html, Markup};
use rocket::request::FlashMessage;

use sdb_core::usecases;

mod artist;
mod page;
mod show;
mod venue;

pub use self::{artist::*, show::*, venue::*};
use self::page::*;

// The genre choices offered by the venue and artist forms.
const GENRE_CHOICES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

pub fn index(
    flash: Option<FlashMessage<'_>>,
    venue_count: usize,
    artist_count: usize,
    show_count: usize,
) -> Markup {
    page(
        "stagedb",
        flash,
        html! {
            main class="home" {
                h1 { "stagedb" }
                p { "A booking directory for venues, artists and their shows." }
                ul class="stats" {
                    li { (venue_count) " venues" }
                    li { (artist_count) " artists" }
                    li { (show_count) " shows" }
                }
                nav class="actions" {
                    a class="btn" href="/venues/create" { "List a venue" }
                    a class="btn" href="/artists/create" { "List an artist" }
                    a class="btn" href="/shows/create" { "List a show" }
                }
            }
        },
    )
}

pub fn not_found() -> Markup {
    page(
        "Not Found",
        None,
        html! {
            main class="error-page" {
                h1 { "404" }
                p { "The page or record you were looking for does not exist." }
                a href="/" { "back to start" }
            }
        },
    )
}

pub fn internal_error(notification: Option<&str>) -> Markup {
    page(
        "Internal Error",
        None,
        html! {
            main class="error-page" {
                h1 { "500" }
                @if let Some(msg) = notification {
                    div class="flash error" { (msg) }
                }
                p { "Something went wrong on our side. The operation could not be completed." }
                a href="/" { "back to start" }
            }
        },
    )
}

fn search_form(action: &str, search_term: Option<&str>) -> Markup {
    html! {
        form class="search-form" action=(action) method="POST" {
            input
                type="text"
                name="search_term"
                value=(search_term.unwrap_or(""))
                placeholder="search by name";
            input class="btn" type="submit" value="search";
        }
    }
}

fn error_msg(error: Option<&usecases::Error>) -> Markup {
    html! {
        @if let Some(err) = error {
            div class="flash error" { (err) }
        }
    }
}

fn search_result_count(count: usize, search_term: &str) -> Markup {
    html! {
        p class="count" {
            (count)
            @if count == 1 { " result" } @else { " results" }
            " for "
            em { (format!("'{search_term}'")) }
        }
    }
}

fn genre_select(selected: &[String]) -> Markup {
    html! {
        select name="genres" multiple {
            @for genre in GENRE_CHOICES {
                option value=(genre) selected[selected.iter().any(|g| g == genre)] {
                    (genre)
                }
            }
        }
    }
}
