use maud::{html, Markup};

use super::{super::forms::ShowForm, *};

pub fn shows(flash: Option<FlashMessage<'_>>, shows: &[usecases::ShowListing]) -> Markup {
    page(
        "Shows",
        flash,
        html! {
            main {
                h2 { "Shows" }
                a class="btn" href="/shows/create" { "List a new show" }
                @if shows.is_empty() {
                    p class="no-results" { "No shows have been listed yet." }
                } @else {
                    ul class="show-list" {
                        @for show in shows {
                            li {
                                @if let Some(ref image) = show.artist_image_url {
                                    img src=(image) alt=(show.artist_name);
                                }
                                div {
                                    a href=(format!("/artists/{}", show.artist_id)) {
                                        (show.artist_name)
                                    }
                                    " at "
                                    a href=(format!("/venues/{}", show.venue_id)) {
                                        (show.venue_name)
                                    }
                                    span class="time" { (show.start_time) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn new_show(form: &ShowForm, error: Option<&usecases::Error>) -> Markup {
    page(
        "New Show",
        None,
        html! {
            main {
                h2 { "List a new show" }
                (error_msg(error))
                form action="/shows/create" method="POST" {
                    label { "Artist id"
                        input type="text" name="artist_id" value=(form.artist_id);
                    }
                    label { "Venue id"
                        input type="text" name="venue_id" value=(form.venue_id);
                    }
                    label { "Start time"
                        input
                            type="text"
                            name="start_time"
                            value=(form.start_time)
                            placeholder="YYYY-MM-DD HH:MM:SS";
                    }
                    input class="btn" type="submit" value="create";
                }
            }
        },
    )
}
