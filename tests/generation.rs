use std::fs;
use std::io::Cursor;

use qrstyle::{blocking, QrClient, ServiceConfig};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn tiny_png() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(3, 3, image::Rgba([0, 0, 0, 255]));
    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

#[tokio::test]
async fn scheme_prefix_is_applied_exactly_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/qr/custom"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"imageUrl": "//example.test/x.png"})),
        )
        .mount(&server)
        .await;

    let client = QrClient::new(ServiceConfig::new().with_base_url(server.uri()));
    let result = client.generate_to_file("hello", 1, None).await;

    assert!(result.success);
    assert_eq!(result.message, "Success");
    assert_eq!(result.image_url.as_deref(), Some("http://example.test/x.png"));
}

#[tokio::test]
async fn unknown_style_id_sends_the_builtin_preset() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/qr/custom"))
        .and(body_partial_json(json!({
            "data": "hello",
            "size": 1000,
            "download": "imageUrl",
            "file": "png",
            "config": {
                "body": "square",
                "eye": "frame13",
                "eyeBall": "ball14",
                "gradientOnEyes": true,
                "eye1Color": "#021326",
                "eyeBall1Color": "#074f03"
            }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"imageUrl": "//example.test/y.png"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = QrClient::new(ServiceConfig::new().with_base_url(server.uri()));
    let result = client.generate_to_file("hello", 999, None).await;

    assert!(result.success, "unexpected failure: {}", result.message);
}

#[tokio::test]
async fn http_error_surfaces_the_remote_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/qr/custom"))
        .respond_with(ResponseTemplate::new(422).set_body_string("bad style id"))
        .mount(&server)
        .await;

    let client = QrClient::new(ServiceConfig::new().with_base_url(server.uri()));
    let result = client.generate_to_file("hello", 1, None).await;

    assert!(!result.success);
    assert_eq!(result.message, "Error: bad style id");
    assert!(result.image_url.is_none());
}

#[tokio::test]
async fn missing_image_url_is_a_fixed_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/qr/custom"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    let client = QrClient::new(ServiceConfig::new().with_base_url(server.uri()));
    let result = client.generate_to_file("hello", 1, None).await;

    assert!(!result.success);
    assert_eq!(result.message, "Failed to get image URL");
    assert!(result.image_url.is_none());
}

#[tokio::test]
async fn save_path_downloads_the_rendered_image() {
    let server = MockServer::start().await;
    let png = tiny_png();
    let relative_url = format!("{}/img.png", server.uri().trim_start_matches("http:"));

    Mock::given(method("POST"))
        .and(path("/qr/custom"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"imageUrl": relative_url})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/img.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png.clone()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let save_path = dir.path().join("out.png");

    let client = QrClient::new(ServiceConfig::new().with_base_url(server.uri()));
    let result = client.generate_to_file("hello", 1, Some(&save_path)).await;

    assert!(result.success, "unexpected failure: {}", result.message);
    assert_eq!(fs::read(&save_path).unwrap(), png);
}

#[tokio::test]
async fn in_memory_generation_decodes_the_image() {
    let server = MockServer::start().await;
    let relative_url = format!("{}/img.png", server.uri().trim_start_matches("http:"));

    Mock::given(method("POST"))
        .and(path("/qr/custom"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"imageUrl": relative_url})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/img.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(tiny_png()))
        .mount(&server)
        .await;

    let client = QrClient::new(ServiceConfig::new().with_base_url(server.uri()));
    let outcome = client.generate_to_image("hello", 1).await;

    assert!(outcome.result.success);
    let image = outcome.image.expect("decoded image");
    assert_eq!((image.width(), image.height()), (3, 3));
}

#[tokio::test]
async fn in_memory_generation_reports_failures_structurally() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/qr/custom"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = QrClient::new(ServiceConfig::new().with_base_url(server.uri()));
    let outcome = client.generate_to_image("hello", 1).await;

    assert!(!outcome.result.success);
    assert_eq!(outcome.result.message, "Error: boom");
    assert!(outcome.image.is_none());
}

#[test]
fn blocking_client_mirrors_the_async_flow() {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/qr/custom"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"imageUrl": "//example.test/x.png"})),
            )
            .mount(&server),
    );

    let client = blocking::QrClient::new(ServiceConfig::new().with_base_url(server.uri()));
    let result = client.generate_to_file("hello", 1, None);

    assert!(result.success);
    assert_eq!(result.image_url.as_deref(), Some("http://example.test/x.png"));
}
