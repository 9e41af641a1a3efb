use crate::helpers::spawn_app;
use hyper::StatusCode;

#[tokio::test]
async fn upload_stores_file_and_serves_it_back() {
    let app = spawn_app().await;

    let part = reqwest::multipart::Part::bytes(b"png bytes".to_vec()).file_name("shoe.png");
    let form = reqwest::multipart::Form::new().part("image", part);

    let r = app
        .post("/api/upload")
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(r.status(), StatusCode::OK);

    let body: serde_json::Value = r.json().await.unwrap();
    let image = body["image"].as_str().unwrap();
    assert!(image.starts_with("/uploads/image-"));
    assert!(image.ends_with(".png"));

    let served = app.get(image).send().await.unwrap();
    assert_eq!(served.status(), StatusCode::OK);
    assert_eq!(served.bytes().await.unwrap().as_ref(), b"png bytes");
}

#[tokio::test]
async fn upload_rejects_non_image_extensions() {
    let app = spawn_app().await;

    let part = reqwest::multipart::Part::bytes(b"#!/bin/sh".to_vec()).file_name("script.sh");
    let form = reqwest::multipart::Form::new().part("image", part);

    let r = app
        .post("/api/upload")
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(r.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upload_without_image_field_is_rejected() {
    let app = spawn_app().await;

    let form = reqwest::multipart::Form::new().text("comment", "no file here");

    let r = app
        .post("/api/upload")
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(r.status(), StatusCode::BAD_REQUEST);
}
