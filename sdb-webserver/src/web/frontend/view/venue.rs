use maud::{html, Markup, PreEscaped};

use sdb_core::entities::*;

use super::{super::forms::VenueForm, *};

const DELETE_VENUE_JS: &str = r#"
function deleteVenue(id) {
  if (!window.confirm('Delete this venue and all of its shows?')) { return; }
  fetch('/venues/' + id, { method: 'DELETE' }).then(function (response) {
    window.location.href = response.redirected ? response.url : '/venues';
  });
}
"#;

pub fn venues(flash: Option<FlashMessage<'_>>, groups: &[usecases::VenueGroup]) -> Markup {
    page(
        "Venues",
        flash,
        html! {
            main {
                h2 { "Venues" }
                (search_form("/venues/search", None))
                a class="btn" href="/venues/create" { "List a new venue" }
                @if groups.is_empty() {
                    p class="no-results" { "No venues have been listed yet." }
                }
                @for group in groups {
                    section class="location" {
                        h3 { (group.city) ", " (group.state) }
                        ul class="venue-list" {
                            @for venue in &group.venues {
                                li {
                                    a href=(format!("/venues/{}", venue.id)) { (venue.name) }
                                    " "
                                    span class="upcoming" {
                                        (venue.num_upcoming_shows) " upcoming shows"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn venue_search_results(
    search_term: &str,
    results: &usecases::SearchResults<VenueId>,
) -> Markup {
    page(
        "Venue Search",
        None,
        html! {
            main {
                h2 { "Venue search" }
                (search_form("/venues/search", Some(search_term)))
                (search_result_count(results.count, search_term))
                ul class="result-list" {
                    @for hit in &results.hits {
                        li { a href=(format!("/venues/{}", hit.id)) { (hit.name) } }
                    }
                }
            }
        },
    )
}

pub fn venue(flash: Option<FlashMessage<'_>>, detail: &usecases::VenueDetail) -> Markup {
    let venue = &detail.venue;
    page(
        &venue.name,
        flash,
        html! {
            main class="details venue" {
                div class="entity-type" { "Venue" }
                h2 { (venue.name) }
                ul class="genres" {
                    @for genre in &venue.genres {
                        li { (genre) }
                    }
                }
                p class="address" { (venue.address) ", " (venue.city) ", " (venue.state) }
                @if let Some(ref phone) = venue.phone {
                    p class="phone" { (phone) }
                }
                @if let Some(ref website) = venue.website {
                    p { a href=(website) { (website) } }
                }
                @if let Some(ref facebook) = venue.facebook {
                    p { a href=(facebook) { (facebook) } }
                }
                @if venue.seeking_talent {
                    div class="seeking" {
                        h4 { "Seeking talent" }
                        @if let Some(ref description) = venue.seeking_description {
                            p { (description) }
                        }
                    }
                }
                @if let Some(ref image_url) = venue.image_url {
                    img src=(image_url) alt=(venue.name);
                }
                section class="shows" {
                    h4 { "Past shows (" (detail.past_shows_count()) ")" }
                    (venue_show_items(&detail.past_shows))
                }
                section class="shows" {
                    h4 { "Upcoming shows (" (detail.upcoming_shows_count()) ")" }
                    (venue_show_items(&detail.upcoming_shows))
                }
                nav class="actions" {
                    a class="btn" href=(format!("/venues/{}/edit", venue.id)) { "edit" }
                    button class="btn danger" onclick=(format!("deleteVenue({})", venue.id)) {
                        "delete"
                    }
                }
                script { (PreEscaped(DELETE_VENUE_JS)) }
            }
        },
    )
}

fn venue_show_items(shows: &[usecases::VenueShow]) -> Markup {
    html! {
        @if shows.is_empty() {
            p class="no-results" { "No shows." }
        } @else {
            ul class="show-list" {
                @for show in shows {
                    li {
                        @if let Some(ref image) = show.artist_image_url {
                            img src=(image) alt=(show.artist_name);
                        }
                        a href=(format!("/artists/{}", show.artist_id)) { (show.artist_name) }
                        " "
                        span class="time" { (show.start_time) }
                    }
                }
            }
        }
    }
}

pub fn new_venue(form: &VenueForm, error: Option<&usecases::Error>) -> Markup {
    page(
        "New Venue",
        None,
        html! {
            main {
                h2 { "List a new venue" }
                (error_msg(error))
                form action="/venues/create" method="POST" {
                    (venue_form_fields(form))
                    input class="btn" type="submit" value="create";
                }
            }
        },
    )
}

pub fn edit_venue(id: VenueId, form: &VenueForm, error: Option<&usecases::Error>) -> Markup {
    page(
        "Edit Venue",
        None,
        html! {
            main {
                h2 { "Edit venue" }
                (error_msg(error))
                form action=(format!("/venues/{id}/edit")) method="POST" {
                    (venue_form_fields(form))
                    input class="btn" type="submit" value="save";
                }
            }
        },
    )
}

fn venue_form_fields(form: &VenueForm) -> Markup {
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
        label { "Address"
            input type="text" name="address" value=(form.address);
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
            input type="checkbox" name="seeking_talent" checked[form.seeking_talent];
            "Seeking talent"
        }
        label { "Seeking description"
            textarea name="seeking_description" {
                (form.seeking_description.as_deref().unwrap_or(""))
            }
        }
    }
}
