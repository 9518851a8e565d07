use std::io::Result;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{
    web::{self, resource, scope},
    App, HttpResponse, HttpServer,
};

use crate::pages;
use crate::render::layout::STYLESHEET;
use crate::types::Project;

pub async fn start_server(addr: String, projects: Vec<Project>, assets_path: String) -> Result<()> {
    let catalog = web::Data::new(projects);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(catalog.clone())
            .configure(configure)
            // static assets (images, logos, the resume PDF) resolve last
            .service(Files::new("/", assets_path.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_header()
                    .allow_any_method(),
            )
    })
    .bind(&addr)?;
    println!("Server started at {}", addr);
    server.run().await
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(resource("/").route(web::get().to(home_handler)))
        .service(resource("/work").route(web::get().to(work_handler)))
        .service(resource("/growth").route(web::get().to(growth_handler)))
        .service(resource("/contact").route(web::get().to(contact_handler)))
        .service(resource("/styles.css").route(web::get().to(styles_handler)))
        .service(
            scope("/v1")
                .service(resource("/projects").route(web::get().to(projects_handler)))
                .service(resource("/folio").route(web::get().to(status_handler))),
        );
}

fn html(markup: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(markup)
}

async fn home_handler() -> HttpResponse {
    html(pages::home::render())
}

async fn work_handler(catalog: web::Data<Vec<Project>>) -> HttpResponse {
    html(pages::work::render(&catalog))
}

async fn growth_handler() -> HttpResponse {
    html(pages::growth::render())
}

async fn contact_handler() -> HttpResponse {
    html(pages::contact::render())
}

async fn styles_handler() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(STYLESHEET)
}

async fn projects_handler(catalog: web::Data<Vec<Project>>) -> HttpResponse {
    HttpResponse::Ok().json(catalog.get_ref())
}

async fn status_handler() -> HttpResponse {
    HttpResponse::Ok().body("folio is running")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::built_in_catalog;
    use actix_web::{http::header, test};

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(built_in_catalog()))
                    .configure(configure),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn page_routes_serve_html() {
        let app = test_app!();
        for uri in ["/", "/work", "/growth", "/contact"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert!(resp.status().is_success(), "{} failed", uri);
            let content_type = resp
                .headers()
                .get(header::CONTENT_TYPE)
                .unwrap()
                .to_str()
                .unwrap();
            assert!(content_type.starts_with("text/html"), "{}", uri);
        }
    }

    #[actix_web::test]
    async fn work_page_contains_catalog_anchors() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/work").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains(r#"id="polymarket""#));
        assert!(html.contains(r#"id="wispr-flow""#));
    }

    #[actix_web::test]
    async fn projects_endpoint_returns_catalog_json() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/v1/projects").to_request();
        let projects: Vec<Project> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(projects, built_in_catalog());
    }

    #[actix_web::test]
    async fn stylesheet_is_served_as_css() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/styles.css").to_request();
        let resp = test::call_service(&app, req).await;
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("text/css"));
    }

    #[actix_web::test]
    async fn status_probe_answers() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/v1/folio").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "folio is running");
    }
}
