//! Headless host for the menu icon.
//!
//! Simulates a user tapping the icon, including a second tap while the first
//! transition is still running, and writes every rendered frame as a PNG.
//!
//! Run with:
//! ```text
//! RUST_LOG=lattice_menu_icon=debug \
//!     cargo run -p lattice-menu-icon --example menu_icon_host -- [config.toml] [out_dir]
//! ```

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use lattice_menu_icon::render::{Color, LineRenderer, Point, Size, SoftwareRenderer};
use lattice_menu_icon::{AnimatedMenuIcon, Dp, MenuIconConfig, MenuToggle};
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(16);
const PADDING: f32 = 8.0;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => MenuIconConfig::load(path)?,
        None => MenuIconConfig::new().with_size(Dp(96.0)),
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "menu_icon_frames".into()));
    std::fs::create_dir_all(&out_dir)?;

    let toggle = Arc::new(MenuToggle::new(config.menu_opened.into()));
    toggle.changed.connect(|state| {
        tracing::info!(%state, "menu toggled");
    });

    let mut icon = AnimatedMenuIcon::with_toggle(config, toggle.clone());
    let side = (icon.size_px() + 2.0 * PADDING).ceil() as u32;
    let mut renderer = SoftwareRenderer::new(side, side)?;
    let viewport = Size::square(side as f32);

    // Taps at 0ms (open), 150ms (close again mid-flight) and 700ms (open).
    let taps = [Duration::ZERO, Duration::from_millis(150), Duration::from_millis(700)];
    let start = Instant::now();
    let end = start + Duration::from_millis(1100);

    let mut now = start;
    let mut pending = taps.iter().peekable();
    let mut written = 0usize;
    // Paint the first frame, and one more after each transition settles.
    let mut dirty = true;

    while now <= end {
        while let Some(tap) = pending.next_if(|tap| start + **tap <= now) {
            tracing::debug!(at_ms = tap.as_millis() as u64, "simulated tap");
            toggle.toggle();
        }

        if icon.needs_repaint(now) || dirty {
            renderer.begin_frame(Color::WHITE, viewport);
            let frame = icon.paint(&mut renderer, Point::new(PADDING, PADDING), now);
            let stats = renderer.end_frame();

            let path = out_dir.join(format!("frame_{written:03}.png"));
            renderer.save_png(&path)?;
            tracing::debug!(
                path = %path.display(),
                target_state = %frame.target,
                running = frame.running,
                draw_calls = stats.draw_calls,
                "frame written"
            );
            written += 1;
            dirty = frame.running;
        }

        now += FRAME;
    }

    tracing::info!(frames = written, dir = %out_dir.display(), "done");
    Ok(())
}
