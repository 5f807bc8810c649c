use std::time::Instant;

use actix_web::{delete, get, post, web, HttpResponse};

use crate::dcavg::{calculate_regular, DemandCalculationRequest};
use crate::drawing::{DrawingLinkRequest, DRAWING_LINKS};
use crate::error::ServiceError;

#[post("/dcavg/regular")]
pub async fn dcavg_regular(
    request: web::Json<DemandCalculationRequest>,
) -> Result<HttpResponse, ServiceError> {
    let calc_start = Instant::now();
    let result = calculate_regular(&request)?;
    let calc_dur = calc_start.elapsed();
    log::info!(
        "Dcavg regular pass over {} devices took: {:?}",
        result.devices.len(),
        calc_dur
    );

    let response = match serde_json::to_string(&result) {
        Ok(res) => HttpResponse::Ok()
            .content_type("application/json")
            .body(res),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error serializing data: {}", e)),
    };

    Ok(response)
}

#[post("/drawing/link")]
pub async fn link_drawing(request: web::Json<DrawingLinkRequest>) -> HttpResponse {
    let link = DRAWING_LINKS.link(&request);
    log::info!(
        "Linked drawing {} to {}/{}",
        link.drawing.drawing_no,
        link.resource_type,
        link.resource_id
    );

    match serde_json::to_string(&link) {
        Ok(res) => HttpResponse::Ok()
            .content_type("application/json")
            .body(res),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error serializing data: {}", e)),
    }
}

#[get("/drawing/link/{resource_type}/{resource_id}")]
pub async fn get_drawing_link(
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ServiceError> {
    let (resource_type, resource_id) = path.into_inner();
    let link = DRAWING_LINKS.get(&resource_type, &resource_id)?;

    let response = match serde_json::to_string(&link) {
        Ok(res) => HttpResponse::Ok()
            .content_type("application/json")
            .body(res),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error serializing data: {}", e)),
    };

    Ok(response)
}

#[delete("/drawing/link/{resource_type}/{resource_id}")]
pub async fn unlink_drawing(
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ServiceError> {
    let (resource_type, resource_id) = path.into_inner();
    let link = DRAWING_LINKS.unlink(&resource_type, &resource_id)?;
    log::info!(
        "Unlinked drawing {} from {}/{}",
        link.drawing.drawing_no,
        link.resource_type,
        link.resource_id
    );

    let response = match serde_json::to_string(&link) {
        Ok(res) => HttpResponse::Ok()
            .content_type("application/json")
            .body(res),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error serializing data: {}", e)),
    };

    Ok(response)
}
