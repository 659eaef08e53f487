use std::io::ErrorKind;
use std::sync::Arc;
use std::{fmt, io};

use ntex::web;
use ntex_files::NamedFile;
use spdlog::{error, info, warn};

use crate::config::Config;
use crate::pages::{render_feed, render_home_page, render_list_page, render_not_found_page, render_post_page};
use crate::store::PostStore;

struct AppState {
    store: PostStore,
    config: Config,
}

fn html_page(rendered: String) -> web::HttpResponse {
    web::HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(rendered)
}

fn not_found_page(config: &Config) -> web::HttpResponse {
    web::HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(render_not_found_page(config))
}

// The body never carries the cause. It goes to the log instead.
fn internal_error(what: &str, e: impl fmt::Display) -> web::HttpResponse {
    error!("Error rendering {}: {}", what, e);
    web::HttpResponse::InternalServerError()
        .content_type("text/html; charset=utf-8")
        .body("Something went wrong")
}

#[web::get("/")]
async fn index(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    match render_home_page(&state.config, &state.store) {
        Ok(rendered) => html_page(rendered),
        Err(e) => internal_error("home page", e),
    }
}

#[web::get("/blog")]
async fn blog_list(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    match render_list_page(&state.config, &state.store) {
        Ok(rendered) => html_page(rendered),
        Err(e) => internal_error("post list", e),
    }
}

#[web::get("/blog/{slug}")]
async fn blog_view(slug: web::types::Path<String>, state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let slug = slug.into_inner();

    match render_post_page(&state.config, &state.store, &slug) {
        Ok(rendered) => html_page(rendered),
        Err(e) if e.kind() == ErrorKind::NotFound => not_found_page(&state.config),
        Err(e) => internal_error(&format!("post {}", slug), e),
    }
}

#[web::get("/blog/{slug}/")]
async fn blog_view_with_slash(slug: web::types::Path<String>) -> web::HttpResponse {
    web::HttpResponse::TemporaryRedirect()
        .header("Location", format!("/blog/{}", slug.into_inner()))
        .content_type("text/html; charset=utf-8")
        .finish()
}

#[web::get("/rss")]
async fn rss(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let Some(ref feed) = state.config.rss_feed else {
        return not_found_page(&state.config);
    };

    match render_feed(feed, &state.store) {
        Ok(xml) => web::HttpResponse::Ok()
            .content_type("application/rss+xml; charset=utf-8")
            .body(xml),
        Err(e) => internal_error("rss feed", e),
    }
}

#[web::get("/public/{file_name}")]
async fn public_files(path: web::types::Path<String>, state: web::types::State<Arc<AppState>>) -> Result<NamedFile, web::Error> {
    if path.contains("../") {
        return Err(web::error::ErrorUnauthorized("Access forbidden").into());
    }

    let file_path = state.config.paths.public_dir.join(path.into_inner());

    Ok(NamedFile::open(file_path)?)
}

pub async fn server_run(config: Config) -> io::Result<()> {
    let store = PostStore::new(config.paths.posts_dir.clone());

    // Informational only. The store is read again on every request.
    match store.list_slugs() {
        Ok(slugs) => {
            for slug in slugs.iter() {
                info!("Post: {}", slug);
            }
        }
        Err(e) => warn!("Posts directory is not readable: {}", e),
    }

    let bind_addr = config.server.address.clone();
    let bind_port = config.server.port;
    let app_state = Arc::new(AppState {
        store,
        config,
    });

    web::HttpServer::new(move || {
        web::App::new()
            .state(app_state.clone())
            .service(index)
            .service(public_files)
            .service(blog_list)
            .service(blog_view)
            .service(blog_view_with_slash)
            .service(rss)
    })
        .bind((bind_addr, bind_port))?
        .run()
        .await
}
