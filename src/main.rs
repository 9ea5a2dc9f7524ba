use std::time::Instant;

use anyhow::Result;
use log::info;

use mandelfield::{RenderConfig, generate, save_png, show};

fn main() -> Result<()> {
    env_logger::init();

    let mut view = false;
    let mut config_path: Option<String> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--view" => view = true,
            path => config_path = Some(path.to_string()),
        }
    }

    let cfg = match &config_path {
        Some(path) => RenderConfig::from_file(path)?,
        None => RenderConfig::default(),
    };
    info!(
        "{}x{} grid over [{}, {}] x [{}, {}], {} iterations, threshold {}",
        cfg.width,
        cfg.height,
        cfg.real_low,
        cfg.real_high,
        cfg.imag_low,
        cfg.imag_high,
        cfg.max_iters,
        cfg.upper_bound
    );

    let start = Instant::now();
    let field = generate(
        cfg.width,
        cfg.height,
        cfg.real_low,
        cfg.real_high,
        cfg.imag_low,
        cfg.imag_high,
        cfg.max_iters,
        cfg.upper_bound,
    )?;
    let generated = start.elapsed();

    let start = Instant::now();
    save_png(&field, &cfg.output)?;
    let rendered = start.elapsed();

    println!(
        "generated the field in {:.8} seconds",
        generated.as_secs_f64()
    );
    println!(
        "rendered {} in {:.8} seconds",
        cfg.output,
        rendered.as_secs_f64()
    );

    if view {
        show(&field);
    }

    Ok(())
}
