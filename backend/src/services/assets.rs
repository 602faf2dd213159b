//! # Embedded Asset Service
//!
//! Serves the compiled frontend bundle embedded into the binary at build
//! time (`static/dist`, copied from `frontend/dist` by `build.rs`).
//!
//! Any path that does not name an embedded file is answered with
//! `index.html`, so that client-side routes such as `/profile/2` or `/admin`
//! load the application when opened directly. Without an embedded index the
//! host answers `404 Not Found`.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::{from_path, Mime};

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

/// A file picked from an embedded directory to answer a request.
#[derive(Debug)]
pub struct Asset {
    pub path: &'static str,
    pub contents: &'static [u8],
    pub mime: Mime,
}

/// Picks the file answering `request_path` from `dir`.
pub fn resolve(dir: &'static Dir<'static>, request_path: &str) -> Option<Asset> {
    let path = request_path.trim_start_matches('/');
    let path = if path.is_empty() { INDEX } else { path };

    let file = dir.get_file(path).or_else(|| dir.get_file(INDEX))?;
    let path = file.path().to_str()?;
    Some(Asset {
        path,
        contents: file.contents(),
        mime: from_path(path).first_or_octet_stream(),
    })
}

pub fn respond(dir: &'static Dir<'static>, request_path: &str) -> HttpResponse {
    match resolve(dir, request_path) {
        Some(asset) => HttpResponse::Ok()
            .content_type(asset.mime.as_ref())
            .body(asset.contents.to_vec()),
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

/// Default service of the host: every request is answered from the bundle.
pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    respond(&STATIC_DIR, req.path())
}
