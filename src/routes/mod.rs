use actix_web::web;

pub mod catalog;

/// Register every route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(catalog::get_product_catalog);
}
