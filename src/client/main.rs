/**
 * Reelview Desktop Client - Main Entry Point
 *
 * Native eframe application: authentication screen, then the movie
 * catalog with reviews. Network requests run on background threads and
 * are drained from the update loop.
 */
use eframe::egui;
use reelview::client::{views, AppState};

fn main() -> Result<(), eframe::Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Reelview",
        options,
        Box::new(|_cc| Ok(Box::new(ReelviewApp::default()))),
    )
}

/// Main application state
struct ReelviewApp {
    state: AppState,
}

impl Default for ReelviewApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for ReelviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_results();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        // Keep polling while a background request is pending
        if self.state.busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
