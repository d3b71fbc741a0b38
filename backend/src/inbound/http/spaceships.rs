//! Spaceship HTTP handlers.
//!
//! ```text
//! GET    /v1/spaceships
//! GET    /v1/spaceships/{id}
//! POST   /v1/spaceships
//! POST   /v1/spaceships/{id}
//! DELETE /v1/spaceships/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::ports::{ArmamentPayload, SpaceshipPayload};
use crate::domain::{Error, Spaceship, SpaceshipId, SpaceshipSummary};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// One armament line in a request body.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ArmamentRequest {
    pub title: String,
    pub qty: u32,
}

/// Full spaceship body for create and update. Missing fields take their
/// zero value so the service decides what is required.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SpaceshipRequest {
    pub name: String,
    pub class: String,
    pub crew: u32,
    pub image: String,
    pub value: f64,
    pub status: String,
    pub armament: Vec<ArmamentRequest>,
}

impl From<SpaceshipRequest> for SpaceshipPayload {
    fn from(value: SpaceshipRequest) -> Self {
        Self {
            name: value.name,
            class: value.class,
            crew: value.crew,
            image: value.image,
            value: value.value,
            status: value.status,
            armament: value
                .armament
                .into_iter()
                .map(|line| ArmamentPayload {
                    title: line.title,
                    quantity: line.qty,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ArmamentResponse {
    pub title: String,
    pub qty: u32,
}

/// Full spaceship representation.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SpaceshipResponse {
    pub id: i64,
    pub name: String,
    pub class: String,
    pub armament: Vec<ArmamentResponse>,
    pub crew: u32,
    pub image: String,
    pub value: f64,
    pub status: String,
}

impl From<Spaceship> for SpaceshipResponse {
    fn from(ship: Spaceship) -> Self {
        Self {
            id: ship.id.get(),
            armament: ship
                .armament
                .iter()
                .map(|item| ArmamentResponse {
                    title: item.title().to_owned(),
                    qty: item.quantity(),
                })
                .collect(),
            name: ship.name.as_str().to_owned(),
            class: ship.class,
            crew: ship.crew,
            image: ship.image,
            value: ship.value,
            status: ship.status.label().to_owned(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SpaceshipSummaryResponse {
    pub id: i64,
    pub name: String,
    pub status: String,
}

impl From<SpaceshipSummary> for SpaceshipSummaryResponse {
    fn from(summary: SpaceshipSummary) -> Self {
        Self {
            id: summary.id.get(),
            name: summary.name.as_str().to_owned(),
            status: summary.status.label().to_owned(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SpaceshipListResponse {
    pub data: Vec<SpaceshipSummaryResponse>,
}

/// Storage ids are positive; anything else cannot name a spaceship.
fn parse_id(raw: i64) -> Result<SpaceshipId, Error> {
    SpaceshipId::new(raw).ok_or_else(|| {
        Error::not_found(format!("spaceship {raw} not found"))
            .with_details(json!({ "id": raw, "code": "not_found" }))
    })
}

fn success() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "success": true }))
}

#[get("/spaceships")]
pub async fn list_spaceships(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<SpaceshipListResponse>> {
    let summaries = state.fleet_query.list_spaceships().await?;
    Ok(web::Json(SpaceshipListResponse {
        data: summaries.into_iter().map(Into::into).collect(),
    }))
}

#[get("/spaceships/{id}")]
pub async fn get_spaceship(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<SpaceshipResponse>> {
    let id = parse_id(path.into_inner())?;
    let ship = state.fleet_query.get_spaceship(id).await?;
    Ok(web::Json(ship.into()))
}

#[post("/spaceships")]
pub async fn create_spaceship(
    state: web::Data<HttpState>,
    payload: web::Json<SpaceshipRequest>,
) -> ApiResult<web::Json<SpaceshipResponse>> {
    let ship = state
        .fleet_command
        .create_spaceship(payload.into_inner().into())
        .await?;
    Ok(web::Json(ship.into()))
}

#[post("/spaceships/{id}")]
pub async fn update_spaceship(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<SpaceshipRequest>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(path.into_inner())?;
    state
        .fleet_command
        .update_spaceship(id, payload.into_inner().into())
        .await?;
    Ok(success())
}

#[delete("/spaceships/{id}")]
pub async fn delete_spaceship(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(path.into_inner())?;
    state.fleet_command.delete_spaceship(id).await?;
    Ok(success())
}

#[cfg(test)]
#[path = "spaceships_tests.rs"]
mod tests;
