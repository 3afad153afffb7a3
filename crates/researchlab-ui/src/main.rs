//! ResearchLab Desktop Application
//!
//! GPUI-based client for the research backend: idea generation, the
//! multi-agent research dashboard, and settings.

use anyhow::Context as _;
use gpui::*;
use researchlab_core::load_config;
use researchlab_ui::components::register_text_input_bindings;
use researchlab_ui::{AppState, JobManager};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod window;

use window::LabWindow;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("ResearchLab v{}", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    let config = load_config(config_path.as_deref()).context("loading configuration")?;
    let state = AppState::from_config(config).context("initializing services")?;
    let jobs = JobManager::with_new_runtime().context("starting Tokio runtime")?;

    App::new().run(move |cx: &mut AppContext| {
        // Register key bindings for text input
        register_text_input_bindings(cx);

        let window_options = WindowOptions {
            titlebar: Some(TitlebarOptions {
                title: Some("ResearchLab".into()),
                appears_transparent: true,
                traffic_light_position: Some(point(px(9.0), px(9.0))),
            }),
            window_bounds: Some(WindowBounds::Windowed(Bounds {
                origin: point(px(100.0), px(100.0)),
                size: size(px(1200.0), px(800.0)),
            })),
            focus: true,
            show: true,
            kind: WindowKind::Normal,
            is_movable: true,
            window_background: WindowBackgroundAppearance::Opaque,
            app_id: Some("com.researchlab.app".to_string()),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |cx| {
            cx.new_view(|cx| LabWindow::new(cx, &state, jobs))
        });
        if let Err(e) = opened {
            tracing::error!("Failed to open window: {}", e);
            cx.quit();
        }
    });

    Ok(())
}
