use maud::{html, Markup};

use sdb_core::entities::*;

use super::{super::forms::ArtistForm, *};

pub fn artists(flash: Option<FlashMessage<'_>>, artists: &[(ArtistId, String)]) -> Markup {
    page(
        "Artists",
        flash,
        html! {
            main {
                h2 { "Artists" }
                (search_form("/artists/search", None))
                a class="btn" href="/artists/create" { "List a new artist" }
                @if artists.is_empty() {
                    p class="no-results" { "No artists have been listed yet." }
                } @else {
                    ul class="artist-list" {
                        @for (id, name) in artists {
                            li { a href=(format!("/artists/{id}")) { (name) } }
                        }
                    }
                }
            }
        },
    )
}

pub fn artist_search_results(
    search_term: &str,
    results: &usecases::SearchResults<ArtistId>,
) -> Markup {
    page(
        "Artist Search",
        None,
        html! {
            main {
                h2 { "Artist search" }
                (search_form("/artists/search", Some(search_term)))
                (search_result_count(results.count, search_term))
                ul class="result-list" {
                    @for hit in &results.hits {
                        li { a href=(format!("/artists/{}", hit.id)) { (hit.name) } }
                    }
                }
            }
        },
    )
}

pub fn artist(flash: Option<FlashMessage<'_>>, detail: &usecases::ArtistDetail) -> Markup {
    let artist = &detail.artist;
    page(
        &artist.name,
        flash,
        html! {
            main class="details artist" {
                div class="entity-type" { "Artist" }
                h2 { (artist.name) }
                ul class="genres" {
                    @for genre in &artist.genres {
                        li { (genre) }
                    }
                }
                p class="address" { (artist.city) ", " (artist.state) }
                @if let Some(ref phone) = artist.phone {
                    p class="phone" { (phone) }
                }
                @if let Some(ref website) = artist.website {
                    p { a href=(website) { (website) } }
                }
                @if let Some(ref facebook) = artist.facebook {
                    p { a href=(facebook) { (facebook) } }
                }
                @if artist.seeking_venue {
                    div class="seeking" {
                        h4 { "Seeking a venue" }
                        @if let Some(ref description) = artist.seeking_description {
                            p { (description) }
                        }
                    }
                }
                @if let Some(ref image_url) = artist.image_url {
                    img src=(image_url) alt=(artist.name);
                }
                section class="shows" {
                    h4 { "Past shows (" (detail.past_shows_count()) ")" }
                    (artist_show_items(&detail.past_shows))
                }
                section class="shows" {
                    h4 { "Upcoming shows (" (detail.upcoming_shows_count()) ")" }
                    (artist_show_items(&detail.upcoming_shows))
                }
                nav class="actions" {
                    a class="btn" href=(format!("/artists/{}/edit", artist.id)) { "edit" }
                }
            }
        },
    )
}

fn artist_show_items(shows: &[usecases::ArtistShow]) -> Markup {
    html! {
        @if shows.is_empty() {
            p class="no-results" { "No shows." }
        } @else {
            ul class="show-list" {
                @for show in shows {
                    li {
                        @if let Some(ref image) = show.venue_image_url {
                            img src=(image) alt=(show.venue_name);
                        }
                        a href=(format!("/venues/{}", show.venue_id)) { (show.venue_name) }
                        " "
                        span class="time" { (show.start_time) }
                    }
                }
            }
        }
    }
}

pub fn new_artist(form: &ArtistForm, error: Option<&usecases::Error>) -> Markup {
    page(
        "New Artist",
        None,
        html! {
            main {
                h2 { "List a new artist" }
                (error_msg(error))
                form action="/artists/create" method="POST" {
                    (artist_form_fields(form))
                    input class="btn" type="submit" value="create";
                }
            }
        },
    )
}

pub fn edit_artist(id: ArtistId, form: &ArtistForm, error: Option<&usecases::Error>) -> Markup {
    page(
        "Edit Artist",
        None,
        html! {
            main {
                h2 { "Edit artist" }
                (error_msg(error))
                form action=(format!("/artists/{id}/edit")) method="POST" {
                    (artist_form_fields(form))
                    input class="btn" type="submit" value="save";
                }
            }
        },
    )
}

fn artist_form_fields(form: &ArtistForm) -> Markup {
    html! {
        label { "Name"
            input type="text" name="name" value=(form.name);
        }
        label { "City"
            input type="text" name="city" value=(form.city);
        }
        label { "State"
            input type="text" name="state" value=(form.state);
        }
        label { "Phone"
            input type="tel" name="phone" value=(form.phone.as_deref().unwrap_or(""));
        }
        label { "Genres"
            (genre_select(&form.genres))
        }
        label { "Website"
            input type="url" name="website_link"
                value=(form.website_link.as_deref().unwrap_or(""));
        }
        label { "Facebook"
            input type="url" name="facebook_link"
                value=(form.facebook_link.as_deref().unwrap_or(""));
        }
        label { "Image link"
            input type="url" name="image_link"
                value=(form.image_link.as_deref().unwrap_or(""));
        }
        label class="checkbox" {
            input type="checkbox" name="seeking_venue" checked[form.seeking_venue];
            "Seeking a venue"
        }
        label { "Seeking description"
            textarea name="seeking_description" {
                (form.seeking_description.as_deref().unwrap_or(""))
            }
        }
    }
}
