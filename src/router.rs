use crate::domain::catalog::Catalog;
use crate::domain::dispatch::DetailView;
use crate::domain::overlay::Overlay;
use crate::errors::ServerError;
use crate::responses::{html_response, no_content, ResultResp};
use crate::templates;
use astra::Request;
use tracing::debug;

pub fn handle(req: Request, catalog: &Catalog) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    debug!("{method} {path}");

    match (method, path) {
        ("GET", "/") => html_response(templates::pages::dashboard_page(catalog)?),

        // Dismissal target: the empty, hidden overlay.
        ("GET", "/overlay") => html_response(templates::overlay(&Overlay::default())),

        ("GET", p) if p.starts_with("/listings/") => {
            let id = &p["/listings/".len()..];
            if id.is_empty() || id.contains('/') {
                return Err(ServerError::BadRequest(format!("Invalid listing id: {id}")));
            }
            listing_overlay(catalog, id)
        }

        _ => Err(ServerError::NotFound),
    }
}

/// A card click. Unknown ids get a 204 so the page stays as it is.
fn listing_overlay(catalog: &Catalog, id: &str) -> ResultResp {
    let mut view = DetailView::setup(catalog);

    if !view.click(id) {
        debug!("No listing {id} in catalog");
        return no_content();
    }

    html_response(templates::overlay(view.overlay()))
}
