use anyhow::Context;
use base64::Engine;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use matrix_forge::api;
use matrix_forge::models::{AppConfig, BackgroundImage, EditorState};
use matrix_forge::rendering::{compose, ExportRenderer};
use matrix_forge::server;

#[derive(Parser)]
#[command(name = "matrix-forge")]
#[command(about = "Confusion-matrix heatmap editor and PNG exporter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server with the browser editor
    Serve {
        /// Config file (YAML); MATRIX_FORGE_CONFIG is used when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Listen address, overriding the config file
        #[arg(short, long)]
        listen: Option<String>,
    },
    /// Render an editor state directly to a PNG file
    Render {
        /// Editor state JSON file; defaults are used when omitted
        #[arg(short, long)]
        state: Option<PathBuf>,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Background image file (PNG; other formats need --aspect)
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// Aspect ratio (width/height) of the background image
        #[arg(short, long)]
        aspect: Option<f64>,

        /// Export with no background fill or frame
        #[arg(short, long)]
        transparent: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Matrix Forge API",
        description = "Confusion-matrix heatmap editor and PNG exporter",
        version = "0.3.0",
        license(name = "MIT")
    ),
    paths(api::export::handle_export, api::preview::handle_preview),
    components(schemas(
        EditorState,
        matrix_forge::models::TextStyle,
        BackgroundImage,
        api::PreviewResponse,
        api::CellPreview,
        api::ScalePreview,
        api::FitPreview,
    )),
    tags(
        (name = "Export", description = "PNG export of the editor surface"),
        (name = "Preview", description = "Derived view data for the editor")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, listen } => run_server(config, listen).await,
        Commands::Render {
            state,
            output,
            image,
            aspect,
            transparent,
        } => run_render_command(state.as_deref(), &output, image.as_deref(), aspect, transparent),
    }
}

/// Render an editor state to a PNG file (no server needed)
fn run_render_command(
    state_path: Option<&Path>,
    output: &Path,
    image: Option<&Path>,
    aspect: Option<f64>,
    transparent: bool,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "matrix_forge=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let mut state: EditorState = match state_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading state file {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("parsing state file {}", path.display()))?
        }
        None => EditorState::default(),
    };

    if let Some(path) = image {
        state.background_image = Some(load_background_image(path, aspect)?);
    }
    if transparent {
        state.transparent = true;
    }

    let config = AppConfig::load(
        std::env::var("MATRIX_FORGE_CONFIG")
            .ok()
            .map(PathBuf::from)
            .as_deref(),
    );

    let scene = compose(&state).map_err(|e| anyhow::anyhow!("composing scene: {e}"))?;
    let renderer = ExportRenderer::new();
    let png = renderer
        .render_png(&scene, config.max_raster_pixels)
        .context("rendering PNG")?;

    std::fs::write(output, &png)
        .with_context(|| format!("writing {}", output.display()))?;
    println!("Wrote {} ({} bytes)", output.display(), png.len());
    Ok(())
}

/// Wrap an image file as a data URL, probing PNG headers for the aspect
/// ratio when none is given.
fn load_background_image(path: &Path, aspect: Option<f64>) -> anyhow::Result<BackgroundImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading image {}", path.display()))?;

    let is_png = bytes.starts_with(b"\x89PNG\r\n\x1a\n");
    let aspect = match aspect {
        Some(a) => a,
        None if is_png => {
            let decoder = png::Decoder::new(std::io::Cursor::new(&bytes));
            let reader = decoder.read_info().context("reading PNG header")?;
            let info = reader.info();
            info.width as f64 / info.height as f64
        }
        None => anyhow::bail!(
            "cannot determine the aspect ratio of {}; pass --aspect",
            path.display()
        ),
    };

    let mime = if is_png { "image/png" } else { "image/jpeg" };
    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
    Ok(BackgroundImage {
        href: format!("data:{mime};base64,{encoded}"),
        aspect,
    })
}

/// Start the HTTP server
async fn run_server(config_path: Option<PathBuf>, listen: Option<String>) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "matrix_forge=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = config_path.or_else(|| {
        std::env::var("MATRIX_FORGE_CONFIG")
            .ok()
            .map(PathBuf::from)
    });
    let mut config = AppConfig::load(config_path.as_deref());
    if let Some(listen) = listen {
        config.listen = listen;
    }

    let addr = config.listen.clone();
    let state = server::create_app_state(config);
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "Matrix Forge listening");

    axum::serve(listener, app).await.context("serving")?;
    Ok(())
}
