use maud::Markup;
use rocket::{
    catch, delete,
    form::Form,
    get, post,
    request::FlashMessage,
    response::{content::RawCss, Flash, Redirect},
    routes, uri, Route,
};

use sdb_application::{
    error::{AppError, BError},
    prelude as flows,
};
use sdb_core::{entities::*, repositories::*, usecases};

use crate::web::sqlite;

mod error;
mod forms;
mod view;

#[cfg(test)]
mod tests;

use self::{
    error::{FormError, FrontendError},
    forms::*,
};

type Result<T> = std::result::Result<T, FrontendError>;
type SubmissionResult = std::result::Result<Flash<Redirect>, FormError>;

const MAIN_CSS: &str = include_str!("main.css");

#[get("/")]
pub fn get_index(db: sqlite::Connections, flash: Option<FlashMessage<'_>>) -> Result<Markup> {
    let (venue_count, artist_count, show_count) = {
        let db = db.shared()?;
        (db.count_venues()?, db.count_artists()?, db.count_shows()?)
    };
    Ok(view::index(flash, venue_count, artist_count, show_count))
}

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

//  Venues
//  ----------------------------------------------------------------

#[get("/venues")]
pub fn get_venues(db: sqlite::Connections, flash: Option<FlashMessage<'_>>) -> Result<Markup> {
    let groups = usecases::query_venues(&db.shared()?)?;
    Ok(view::venues(flash, &groups))
}

#[post("/venues/search", data = "<data>")]
pub fn post_search_venues(db: sqlite::Connections, data: Form<SearchQuery>) -> Result<Markup> {
    let SearchQuery { search_term } = data.into_inner();
    let results = usecases::search_venues(&db.shared()?, &search_term)?;
    Ok(view::venue_search_results(&search_term, &results))
}

#[get("/venues/<id>")]
pub fn get_venue(
    db: sqlite::Connections,
    id: i64,
    flash: Option<FlashMessage<'_>>,
) -> Result<Markup> {
    let detail = usecases::get_venue(&db.shared()?, VenueId::from(id))?;
    Ok(view::venue(flash, &detail))
}

#[get("/venues/create")]
pub fn get_create_venue() -> Markup {
    view::new_venue(&VenueForm::default(), None)
}

#[post("/venues/create", data = "<data>")]
pub fn post_create_venue(db: sqlite::Connections, data: Form<VenueForm>) -> SubmissionResult {
    let form = data.into_inner();
    match flows::create_venue(&db, form.clone().into()) {
        Ok(venue) => Ok(Flash::success(
            Redirect::to(uri!(get_venue(venue.id.as_i64()))),
            format!("Venue {} was successfully listed!", venue.name),
        )),
        Err(AppError::Business(BError::Parameter(err))) => {
            Err(FormError::Invalid(view::new_venue(&form, Some(&err))))
        }
        Err(err) => Err(FormError::Failed(FrontendError::with_notification(
            err,
            format!("An error occurred. Venue {} could not be listed.", form.name),
        ))),
    }
}

#[get("/venues/<id>/edit")]
pub fn get_edit_venue(db: sqlite::Connections, id: i64) -> Result<Markup> {
    let venue = db.shared()?.get_venue(VenueId::from(id))?;
    Ok(view::edit_venue(venue.id, &VenueForm::from(&venue), None))
}

#[post("/venues/<id>/edit", data = "<data>")]
pub fn post_edit_venue(
    db: sqlite::Connections,
    id: i64,
    data: Form<VenueForm>,
) -> SubmissionResult {
    let id = VenueId::from(id);
    let form = data.into_inner();
    match flows::update_venue(&db, id, form.clone().into()) {
        Ok(venue) => Ok(Flash::success(
            Redirect::to(uri!(get_venue(venue.id.as_i64()))),
            format!("Venue {} was successfully updated!", venue.name),
        )),
        Err(AppError::Business(BError::Parameter(err))) => {
            Err(FormError::Invalid(view::edit_venue(id, &form, Some(&err))))
        }
        Err(err) if err.is_not_found() => Err(FormError::Failed(err.into())),
        Err(err) => Err(FormError::Failed(FrontendError::with_notification(
            err,
            format!("An error occurred. Venue {} could not be updated.", form.name),
        ))),
    }
}

#[delete("/venues/<id>")]
pub fn delete_venue(db: sqlite::Connections, id: i64) -> std::result::Result<Flash<Redirect>, FrontendError> {
    let id = VenueId::from(id);
    // Resolve the name up front so that even a failed delete can report
    // what it was about; an unknown id short-circuits to the 404 page.
    let name = db.shared()?.get_venue(id)?.name;
    match flows::delete_venue(&db, id) {
        Ok(venue) => Ok(Flash::success(
            Redirect::to(uri!(get_venues)),
            format!("Venue {} was successfully deleted!", venue.name),
        )),
        Err(err) => Err(FrontendError::with_notification(
            err,
            format!("An error occurred. Venue {name} could not be removed."),
        )),
    }
}

//  Artists
//  ----------------------------------------------------------------

#[get("/artists")]
pub fn get_artists(db: sqlite::Connections, flash: Option<FlashMessage<'_>>) -> Result<Markup> {
    let artists = usecases::list_artists(&db.shared()?)?;
    Ok(view::artists(flash, &artists))
}

#[post("/artists/search", data = "<data>")]
pub fn post_search_artists(db: sqlite::Connections, data: Form<SearchQuery>) -> Result<Markup> {
    let SearchQuery { search_term } = data.into_inner();
    let results = usecases::search_artists(&db.shared()?, &search_term)?;
    Ok(view::artist_search_results(&search_term, &results))
}

#[get("/artists/<id>")]
pub fn get_artist(
    db: sqlite::Connections,
    id: i64,
    flash: Option<FlashMessage<'_>>,
) -> Result<Markup> {
    let detail = usecases::get_artist(&db.shared()?, ArtistId::from(id))?;
    Ok(view::artist(flash, &detail))
}

#[get("/artists/create")]
pub fn get_create_artist() -> Markup {
    view::new_artist(&ArtistForm::default(), None)
}

#[post("/artists/create", data = "<data>")]
pub fn post_create_artist(db: sqlite::Connections, data: Form<ArtistForm>) -> SubmissionResult {
    let form = data.into_inner();
    match flows::create_artist(&db, form.clone().into()) {
        Ok(artist) => Ok(Flash::success(
            Redirect::to(uri!(get_artist(artist.id.as_i64()))),
            format!("Artist {} was successfully listed!", artist.name),
        )),
        Err(AppError::Business(BError::Parameter(err))) => {
            Err(FormError::Invalid(view::new_artist(&form, Some(&err))))
        }
        Err(err) => Err(FormError::Failed(FrontendError::with_notification(
            err,
            format!("An error occurred. Artist {} could not be listed.", form.name),
        ))),
    }
}

#[get("/artists/<id>/edit")]
pub fn get_edit_artist(db: sqlite::Connections, id: i64) -> Result<Markup> {
    let artist = db.shared()?.get_artist(ArtistId::from(id))?;
    Ok(view::edit_artist(artist.id, &ArtistForm::from(&artist), None))
}

#[post("/artists/<id>/edit", data = "<data>")]
pub fn post_edit_artist(
    db: sqlite::Connections,
    id: i64,
    data: Form<ArtistForm>,
) -> SubmissionResult {
    let id = ArtistId::from(id);
    let form = data.into_inner();
    match flows::update_artist(&db, id, form.clone().into()) {
        Ok(artist) => Ok(Flash::success(
            Redirect::to(uri!(get_artist(artist.id.as_i64()))),
            format!("Artist {} was successfully updated!", artist.name),
        )),
        Err(AppError::Business(BError::Parameter(err))) => {
            Err(FormError::Invalid(view::edit_artist(id, &form, Some(&err))))
        }
        Err(err) if err.is_not_found() => Err(FormError::Failed(err.into())),
        Err(err) => Err(FormError::Failed(FrontendError::with_notification(
            err,
            format!(
                "An error occurred. Artist {} could not be updated.",
                form.name
            ),
        ))),
    }
}

//  Shows
//  ----------------------------------------------------------------

#[get("/shows")]
pub fn get_shows(db: sqlite::Connections, flash: Option<FlashMessage<'_>>) -> Result<Markup> {
    let shows = usecases::list_shows(&db.shared()?)?;
    Ok(view::shows(flash, &shows))
}

#[get("/shows/create")]
pub fn get_create_show() -> Markup {
    view::new_show(&ShowForm::default(), None)
}

#[post("/shows/create", data = "<data>")]
pub fn post_create_show(db: sqlite::Connections, data: Form<ShowForm>) -> SubmissionResult {
    let form = data.into_inner();
    let outcome = form
        .to_new_show()
        .map_err(AppError::from)
        .and_then(|new_show| flows::create_show(&db, new_show));
    match outcome {
        Ok(_) => Ok(Flash::success(
            Redirect::to(uri!(get_shows)),
            "Show was successfully listed!",
        )),
        Err(AppError::Business(BError::Parameter(err))) => {
            Err(FormError::Invalid(view::new_show(&form, Some(&err))))
        }
        Err(err) => Err(FormError::Failed(FrontendError::with_notification(
            err,
            "An error occurred. Show could not be listed.",
        ))),
    }
}

//  Catchers
//  ----------------------------------------------------------------

#[catch(404)]
pub fn not_found() -> Markup {
    view::not_found()
}

#[catch(500)]
pub fn internal_error() -> Markup {
    view::internal_error(None)
}

pub fn routes() -> Vec<Route> {
    routes![
        get_index,
        get_main_css,
        get_venues,
        post_search_venues,
        get_venue,
        get_create_venue,
        post_create_venue,
        get_edit_venue,
        post_edit_venue,
        delete_venue,
        get_artists,
        post_search_artists,
        get_artist,
        get_create_artist,
        post_create_artist,
        get_edit_artist,
        post_edit_artist,
        get_shows,
        get_create_show,
        post_create_show,
    ]
}
