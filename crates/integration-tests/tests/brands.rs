//! Integration tests for brand listing and brand products.

use catalog_mock_api::fixtures::Fixtures;
use catalog_mock_core::NewBrand;
use catalog_mock_integration_tests::{TestServer, fixture_json};
use reqwest::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_brands_returns_fixture_list() {
    let server = TestServer::spawn().await;

    let resp = server
        .client()
        .get(server.url("/v1/brands"))
        .send()
        .await
        .expect("Failed to request brands");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Response was not JSON");
    assert_eq!(body, fixture_json("brands.json"));
}

#[tokio::test]
async fn test_unknown_brand_id_is_not_found() {
    let server = TestServer::spawn().await;

    for brand_id in ["a", "99", "02", "0"] {
        let resp = server
            .client()
            .get(server.url(&format!("/v1/brands/{brand_id}/products")))
            .send()
            .await
            .expect("Failed to request brand products");

        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "brand id {brand_id:?}");
        assert!(resp.text().await.expect("Failed to read body").is_empty());
    }
}

#[tokio::test]
async fn test_brand_without_products_returns_empty_array() {
    let server = TestServer::spawn().await;
    let brand_id = server
        .state()
        .catalog()
        .brands()
        .write()
        .await
        .add_one(NewBrand::named("Old Navy"))
        .id;

    let resp = server
        .client()
        .get(server.url(&format!("/v1/brands/{brand_id}/products")))
        .send()
        .await
        .expect("Failed to request brand products");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Response was not JSON");
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_brand_products_returns_brand_products_in_order() {
    let server = TestServer::spawn().await;
    let image = "https://image.shutterstock.com/z/stock-photo-yellow-sunglasses-white-backgound-600820286.jpg";

    let resp = server
        .client()
        .get(server.url("/v1/brands/2/products"))
        .send()
        .await
        .expect("Failed to request brand products");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Response was not JSON");
    assert_eq!(
        body,
        json!([
            {
                "id": "4",
                "categoryId": "2",
                "name": "Better glasses",
                "description": "The best glasses in the world",
                "price": 1500,
                "imageUrls": [image, image, image]
            },
            {
                "id": "5",
                "categoryId": "2",
                "name": "Glasses",
                "description": "The most normal glasses in the world",
                "price": 150,
                "imageUrls": [image, image, image]
            }
        ])
    );
}

#[tokio::test]
async fn test_catalog_reset_restores_fixture_brands() {
    let server = TestServer::spawn().await;
    let catalog = server.state().catalog();
    catalog
        .brands()
        .write()
        .await
        .add_one(NewBrand::named("Old Navy"));

    let fixtures = Fixtures::load(&server.state().config().data_dir)
        .expect("Failed to reload fixtures");
    catalog.reset(fixtures).await;

    let body: Value = server
        .client()
        .get(server.url("/v1/brands"))
        .send()
        .await
        .expect("Failed to request brands")
        .json()
        .await
        .expect("Response was not JSON");
    assert_eq!(body, fixture_json("brands.json"));
}

#[tokio::test]
async fn test_unknown_brand_reason_phrase() {
    let server = TestServer::spawn().await;

    for path in ["/v1/brands/a/products", "/v1/brands/99/products"] {
        let status_line = server.status_line("GET", path, None).await;
        assert_eq!(status_line, "HTTP/1.1 404 no brand with that id found", "{path}");
    }
}
