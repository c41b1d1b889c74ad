use roomgen::{Config, RoomGenClient};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    roomgen::logger::init_with_config(
        roomgen::logger::LoggerConfig::development()
            .with_level(roomgen::logger::LogLevel::Debug),
    )?;

    log::info!("🔍 Checking environment...");

    match env::var("ROOMGEN_API_URL") {
        Ok(url) => log::info!("ROOMGEN_API_URL: {}", url),
        Err(_) => log::warn!("No ROOMGEN_API_URL set, using http://localhost:8000/api"),
    }

    let config = Config::from_env();

    log::info!("🔄 Creating roomgen client...");
    let client = match RoomGenClient::new(config) {
        Ok(client) => {
            log::info!("✅ Client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize client: {}", e);
            return Err(e.into());
        }
    };

    log::info!("📚 Loading catalog...");
    let catalog = match client.catalog().load_catalog().await {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("❌ Catalog load failed: {}", e);
            return Err(e.into());
        }
    };

    log::info!("🏠 Available room types:");
    for room in &catalog.options.room_types {
        log::info!("  {} - {}", room.id, room.name);
    }

    log::info!("🎨 Available design styles:");
    for style in &catalog.design_styles {
        let architects = catalog.architects_for_style(&style.id);
        log::info!("  {} - {} ({} architects)", style.id, style.name, architects.len());
    }

    log::info!("🖼️  Loading gallery sessions...");
    match client.gallery().refresh_sessions().await {
        Ok(count) => {
            log::info!("✅ {} sessions loaded", count);
            let facets = client.gallery().facets();
            log::info!(
                "   Facets: {} room types, {} styles",
                facets.room_types.len(),
                facets.design_styles.len()
            );
        }
        Err(e) => log::warn!("⚠️  Session load failed: {}", e),
    }

    // Optional end-to-end batch against a live backend
    if env::var("ROOMGEN_DEMO_BATCH").map_or(false, |v| v == "true") {
        run_demo_batch(&client, &catalog).await?;
    }

    Ok(())
}

async fn run_demo_batch(
    client: &RoomGenClient,
    catalog: &roomgen::Catalog,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(style) = catalog.design_styles.first() else {
        log::warn!("No design styles available, skipping demo batch");
        return Ok(());
    };
    let architects = catalog.architects_for_style(&style.id);
    let designers = catalog.designers_for_style(&style.id);
    let (Some(architect), Some(designer)) = (architects.first(), designers.first()) else {
        log::warn!("No architect/designer for style {}, skipping demo batch", style.id);
        return Ok(());
    };

    let request = roomgen::BatchRequest {
        room_type_ids: catalog
            .options
            .room_types
            .iter()
            .take(2)
            .map(|r| r.id.clone())
            .collect(),
        design_style_id: style.id.clone(),
        architect_id: architect.id.clone(),
        designer_id: designer.id.clone(),
        color_wheel_id: catalog
            .options
            .color_wheel_options
            .first()
            .map(|o| o.id.clone())
            .unwrap_or_else(|| "light".to_string()),
        aspect_ratio_id: catalog
            .options
            .aspect_ratios
            .first()
            .map(|o| o.id.clone())
            .unwrap_or_else(|| "16:9".to_string()),
        image_quality_id: catalog
            .options
            .image_quality_options
            .first()
            .map(|o| o.id.clone())
            .unwrap_or_else(|| "standard".to_string()),
        flooring_type_id: None,
        floor_board_width_id: None,
    };

    log::info!("🔄 Submitting demo batch for {} rooms...", request.room_type_ids.len());
    match client.generator().submit_batch(&request, &catalog.options).await {
        Ok(outcome) => {
            log::info!(
                "✅ Batch finished: {} completed, {} failed",
                outcome.completed,
                outcome.failed
            );
            let refreshed = client.gallery().refresh_sessions().await?;
            log::info!("🖼️  Gallery now holds {} sessions", refreshed);
        }
        Err(e) => log::error!("❌ Batch failed: {}", e),
    }

    Ok(())
}
