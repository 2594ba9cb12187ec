use std::path::Path;

use qrstyle::{Ball, Body, Eye, Gradient, QrClient, ServiceConfig, StyleConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    qrstyle::logger::init_with_config(
        qrstyle::logger::LoggerConfig::development()
            .with_level(qrstyle::logger::LogLevel::Debug),
    )?;

    let config = ServiceConfig::from_env();
    log::info!("🌐 Generation endpoint: {}", config.generate_url());
    log::info!("🌐 Upload endpoint: {}", config.upload_url());

    let mut client = QrClient::new(config);

    client.add_style(
        2,
        StyleConfig::new()
            .with_body(Body::Round)
            .with_eye(Eye::Frame2)
            .with_eye_ball(Ball::Ball3)
            .with_gradient(Gradient::Radial)
            .with_colors("#0b509e", "#FFFFFF"),
    );

    log::info!("🔄 Generating with the built-in preset...");
    let result = client
        .generate_to_file("https://example.com", 1, Some(Path::new("qr_default.png")))
        .await;
    if result.success {
        log::info!("✅ Generated: {}", result.image_url.unwrap_or_default());
    } else {
        log::error!("❌ {}", result.message);
    }

    log::info!("🔄 Generating with the custom style, in memory...");
    let image_result = client.generate_to_image("https://example.com", 2).await;
    match image_result.image {
        Some(image) => {
            log::info!("✅ Decoded image: {}x{}", image.width(), image.height());
        }
        None => {
            log::error!("❌ {}", image_result.result.message);
        }
    }

    log::info!("🎉 Done");
    Ok(())
}
