use std::io;
use std::sync::Arc;

use ntex::http::StatusCode;
use ntex::web;
use ntex::web::HttpRequest;
use ntex_files::NamedFile;
use spdlog::{error, info};

use crate::config::Config;
use crate::page_processor::{Page, PageError, PageResult, Site, PAGE_NOT_FOUND};
use crate::query_string::QueryString;
use crate::store::sanity::SanityClient;
use crate::view::*;

type AppState = web::types::State<Arc<Site>>;

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
const RSS_CONTENT_TYPE: &str = "application/rss+xml; charset=utf-8";

fn html_response(status: StatusCode, body: String) -> web::HttpResponse {
    web::HttpResponse::build(status)
        .content_type(HTML_CONTENT_TYPE)
        .body(body)
}

fn error_response(what: &str, e: PageError) -> web::HttpResponse {
    error!("Error rendering {}: {}", what, e);
    web::HttpResponse::InternalServerError()
        .content_type("text/plain; charset=utf-8")
        .body(format!("Error rendering {}", what))
}

fn page_response(what: &str, result: PageResult<String>) -> web::HttpResponse {
    match result {
        Ok(body) => html_response(StatusCode::OK, body),
        Err(e) => error_response(what, e),
    }
}

fn get_cur_page(req: &HttpRequest) -> u32 {
    match req.uri().query() {
        Some(query_str) => QueryString::from(query_str).get_page(),
        None => 1,
    }
}

#[web::get("/")]
async fn index(state: AppState) -> web::HttpResponse {
    page_response("home page", state.render_home().await)
}

#[web::get("/blog")]
async fn blog(req: HttpRequest, state: AppState) -> web::HttpResponse {
    let cur_page = get_cur_page(&req);
    page_response("blog index", state.render_blog(cur_page).await)
}

#[web::get("/blog/{slug}")]
async fn post(slug: web::types::Path<String>, state: AppState) -> web::HttpResponse {
    match state.render_post(&slug).await {
        Ok(Page::Found(body)) => html_response(StatusCode::OK, body),
        Ok(Page::NotFound(body)) => html_response(StatusCode::NOT_FOUND, body),
        Err(e) => error_response("post", e),
    }
}

#[web::get("/category/{slug}")]
async fn category(slug: web::types::Path<String>, state: AppState) -> web::HttpResponse {
    page_response("category", state.render_category(&slug).await)
}

#[web::get("/contact")]
async fn contact(state: AppState) -> web::HttpResponse {
    html_response(StatusCode::OK, state.render_static(CONTACT_TPL, "Contact"))
}

#[web::get("/privacy-policy")]
async fn privacy_policy(state: AppState) -> web::HttpResponse {
    html_response(StatusCode::OK, state.render_static(PRIVACY_POLICY_TPL, "Privacy Policy"))
}

#[web::get("/terms-of-use")]
async fn terms_of_use(state: AppState) -> web::HttpResponse {
    html_response(StatusCode::OK, state.render_static(TERMS_OF_USE_TPL, "Terms of Use"))
}

#[web::get("/rss")]
async fn rss(state: AppState) -> web::HttpResponse {
    match state.render_rss().await {
        Ok(Some(xml)) => web::HttpResponse::Ok()
            .content_type(RSS_CONTENT_TYPE)
            .body(xml),
        Ok(None) => html_response(StatusCode::NOT_FOUND, state.render_message(PAGE_NOT_FOUND)),
        Err(e) => error_response("feed", e),
    }
}

#[web::get("/public/{file_name}")]
async fn public_files(path: web::types::Path<String>, state: AppState) -> Result<NamedFile, web::Error> {
    if path.contains("..") {
        return Err(web::error::ErrorUnauthorized("Access forbidden").into());
    }

    let file_path = state.config.paths.public_dir.join(path.into_inner());
    Ok(NamedFile::open(file_path)?)
}

async fn not_found(state: AppState) -> web::HttpResponse {
    html_response(StatusCode::NOT_FOUND, state.render_message(PAGE_NOT_FOUND))
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(blog)
        .service(post)
        .service(category)
        .service(contact)
        .service(privacy_policy)
        .service(terms_of_use)
        .service(rss)
        .service(public_files);
}

pub async fn server_run(config: Config) -> io::Result<()> {
    let templates = SiteTemplates::load(&config.paths.template_dir)?;
    let store = SanityClient::new(&config.store)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    info!("Serving project {} dataset {}", config.store.project_id, config.store.dataset);

    let bind_addr = config.server.address.clone();
    let bind_port = config.server.port;
    let site = Arc::new(Site::new(config, templates, Arc::new(store)));

    info!("Listening on {}:{}", bind_addr, bind_port);
    web::HttpServer::new(move || {
        web::App::new()
            .state(site.clone())
            .configure(routes)
            .default_service(web::route().to(not_found))
    })
        .bind((bind_addr, bind_port))?
        .run()
        .await
}
