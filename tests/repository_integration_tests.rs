//! Integration tests for the repository over the real HTTP client
//!
//! These run the CatalogRepository against an HttpCatalogClient pointed at
//! a mockito server, covering the normalization and failure-collapse
//! policies end to end.

use mockito::Server;
use pokedex::{CatalogRepository, HttpCatalogClient};
use std::sync::Arc;

fn repository_for(server: &Server) -> CatalogRepository {
    let client = HttpCatalogClient::with_base_url(server.url()).unwrap();
    CatalogRepository::new(Arc::new(client))
}

#[tokio::test]
async fn test_list_maps_envelope_names_in_order() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/pokemon?limit=151")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "count": 2,
                "results": [
                    {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                    {"name": "charmander", "url": "https://pokeapi.co/api/v2/pokemon/4/"}
                ]
            }"#,
        )
        .create_async()
        .await;

    let repository = repository_for(&server);
    let names = repository.pokemon_names().await;

    assert_eq!(names, vec!["bulbasaur".to_string(), "charmander".to_string()]);
}

#[tokio::test]
async fn test_list_server_error_collapses_to_empty() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/pokemon?limit=151")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let repository = repository_for(&server);
    assert!(repository.pokemon_names().await.is_empty());
}

#[tokio::test]
async fn test_detail_maps_all_fields_without_unit_transformation() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/pokemon/pikachu")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "name": "pikachu",
                "height": 4,
                "weight": 60,
                "types": [
                    {"slot": 1, "type": {"name": "electric", "url": ""}}
                ],
                "stats": [
                    {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": ""}},
                    {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": ""}}
                ],
                "sprites": {"front_default": "https://sprites.example/25.png"}
            }"#,
        )
        .create_async()
        .await;

    let repository = repository_for(&server);
    let detail = repository.pokemon_detail("pikachu").await.unwrap();

    assert_eq!(detail.name, "pikachu");
    assert_eq!(detail.height, 4);
    assert_eq!(detail.weight, 60);
    assert_eq!(detail.types, vec!["electric".to_string()]);
    assert_eq!(detail.stats.len(), 2);
    assert_eq!(detail.stats[0].name, "hp");
    assert_eq!(detail.stats[0].base, 35);
    assert_eq!(detail.stats[1].name, "speed");
    assert_eq!(detail.stats[1].base, 90);
    assert_eq!(
        detail.sprite_url.as_deref(),
        Some("https://sprites.example/25.png")
    );
}

#[tokio::test]
async fn test_detail_not_found_is_absent() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/pokemon/missingno")
        .with_status(404)
        .with_body("Not Found")
        .create_async()
        .await;

    let repository = repository_for(&server);
    assert!(repository.pokemon_detail("missingno").await.is_none());
}

#[tokio::test]
async fn test_detail_malformed_payload_is_absent() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/pokemon/glitch")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"name": "glitch", "height": "not a number"}"#)
        .create_async()
        .await;

    let repository = repository_for(&server);
    assert!(repository.pokemon_detail("glitch").await.is_none());
}
