use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder, get, web};

use crate::domain::catalog::CatalogPageRequest;
use crate::forms::catalog::CatalogQueryForm;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::catalog::get_catalog_page as get_catalog_page_service;

fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Validation(_) | ServiceError::Form(_) => HttpResponse::BadRequest()
            .content_type(ContentType::plaintext())
            .body(err.to_string()),
        ServiceError::Internal => HttpResponse::InternalServerError().finish(),
    }
}

#[get("/ProductCatalog")]
pub async fn get_product_catalog(
    params: web::Query<CatalogQueryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let request = match CatalogPageRequest::try_from(params.into_inner()) {
        Ok(request) => request,
        Err(err) => return error_response(err.into()),
    };

    let repo = repo.into_inner();
    match web::block(move || get_catalog_page_service(request, repo.as_ref())).await {
        Ok(Ok(page)) => HttpResponse::Ok().json(page),
        Ok(Err(err)) => error_response(err),
        Err(e) => {
            log::error!("Catalog query task failed: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
