//! Handler tests for the spaceship endpoints.

use actix_web::http::StatusCode;
use actix_web::test;
use mockall::predicate::eq;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::{ArmamentLoadout, SpaceshipName, SpaceshipStatus};
use crate::inbound::http::test_utils::{TestPorts, init_app};

fn devastator() -> Spaceship {
    Spaceship {
        id: SpaceshipId::new(1).expect("positive id"),
        name: SpaceshipName::new("Devastator").expect("valid name"),
        class: "Star Destroyer".to_owned(),
        crew: 35_000,
        image: "https://example.test/devastator.png".to_owned(),
        value: 1_999.99,
        status: SpaceshipStatus::Operational,
        armament: ArmamentLoadout::try_from_pairs([("Turbolaser", 60), ("Ion Cannon", 60)])
            .expect("valid loadout"),
    }
}

#[actix_web::test]
async fn list_wraps_summaries_in_data() {
    let mut ports = TestPorts::default();
    ports
        .fleet_query
        .expect_list_spaceships()
        .times(1)
        .return_once(|| Ok(vec![devastator().summary()]));
    let app = init_app(ports).await;

    let req = test::TestRequest::get().uri("/v1/spaceships").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body,
        json!({ "data": [{ "id": 1, "name": "Devastator", "status": "Operational" }] })
    );
}

#[actix_web::test]
async fn get_renders_the_full_ship() {
    let mut ports = TestPorts::default();
    ports
        .fleet_query
        .expect_get_spaceship()
        .with(eq(SpaceshipId::new(1).expect("positive id")))
        .times(1)
        .return_once(|_| Ok(devastator()));
    let app = init_app(ports).await;

    let req = test::TestRequest::get().uri("/v1/spaceships/1").to_request();
    let body: SpaceshipResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, SpaceshipResponse::from(devastator()));
    assert_eq!(body.armament.len(), 2);
    assert_eq!(body.status, "Operational");
}

#[rstest]
#[case("/v1/spaceships/0")]
#[case("/v1/spaceships/-4")]
#[actix_web::test]
async fn non_positive_ids_are_not_found(#[case] uri: &str) {
    let app = init_app(TestPorts::default()).await;

    let req = test::TestRequest::get().uri(uri).to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn missing_ships_return_not_found() {
    let mut ports = TestPorts::default();
    ports
        .fleet_query
        .expect_get_spaceship()
        .return_once(|_| Err(Error::not_found("spaceship 9 not found")));
    let app = init_app(ports).await;

    let req = test::TestRequest::get().uri("/v1/spaceships/9").to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn create_forwards_the_body_and_returns_the_ship() {
    let mut ports = TestPorts::default();
    ports
        .fleet_command
        .expect_create_spaceship()
        .withf(|payload| {
            payload.name == "Devastator"
                && payload.status == "operational"
                && payload.armament
                    == vec![ArmamentPayload {
                        title: "Turbolaser".to_owned(),
                        quantity: 60,
                    }]
        })
        .times(1)
        .return_once(|_| Ok(devastator()));
    let app = init_app(ports).await;

    let req = test::TestRequest::post()
        .uri("/v1/spaceships")
        .set_json(json!({
            "name": "Devastator",
            "class": "Star Destroyer",
            "crew": 35000,
            "image": "https://example.test/devastator.png",
            "value": 1999.99,
            "status": "operational",
            "armament": [{ "title": "Turbolaser", "qty": 60 }]
        }))
        .to_request();
    let body: SpaceshipResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.id, 1);
}

#[actix_web::test]
async fn validation_failures_are_bad_requests() {
    let mut ports = TestPorts::default();
    ports.fleet_command.expect_create_spaceship().return_once(|_| {
        Err(Error::invalid_request("spaceship name is required").with_reason("name_required"))
    });
    let app = init_app(ports).await;

    let req = test::TestRequest::post()
        .uri("/v1/spaceships")
        .set_json(json!({ "name": "  " }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["details"]["code"], "name_required");
}

#[actix_web::test]
async fn malformed_bodies_are_bad_requests() {
    let app = init_app(TestPorts::default()).await;

    let req = test::TestRequest::post()
        .uri("/v1/spaceships")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"crew\": -1")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn update_reports_success() {
    let mut ports = TestPorts::default();
    ports
        .fleet_command
        .expect_update_spaceship()
        .withf(|id, payload| id.get() == 5 && payload.armament.is_empty())
        .times(1)
        .return_once(|_, _| Ok(()));
    let app = init_app(ports).await;

    let req = test::TestRequest::post()
        .uri("/v1/spaceships/5")
        .set_json(json!({ "name": "Executor", "armament": [] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!({ "success": true }));
}

#[actix_web::test]
async fn name_conflicts_are_reported() {
    let mut ports = TestPorts::default();
    ports.fleet_command.expect_update_spaceship().return_once(|_, _| {
        Err(Error::conflict("spaceship name is already taken").with_reason("name_taken"))
    });
    let app = init_app(ports).await;

    let req = test::TestRequest::post()
        .uri("/v1/spaceships/5")
        .set_json(json!({ "name": "Devastator" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[rstest]
#[case(Ok(()), StatusCode::OK)]
#[case(Err(Error::not_found("spaceship 3 not found")), StatusCode::NOT_FOUND)]
#[case(Err(Error::service_unavailable("database unavailable")), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Err(Error::internal("delete failed")), StatusCode::INTERNAL_SERVER_ERROR)]
#[actix_web::test]
async fn delete_maps_outcomes(#[case] outcome: Result<(), Error>, #[case] expected: StatusCode) {
    let mut ports = TestPorts::default();
    ports
        .fleet_command
        .expect_delete_spaceship()
        .with(eq(SpaceshipId::new(3).expect("positive id")))
        .times(1)
        .return_once(move |_| outcome);
    let app = init_app(ports).await;

    let req = test::TestRequest::delete().uri("/v1/spaceships/3").to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), expected);
}
