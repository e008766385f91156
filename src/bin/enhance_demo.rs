use raster_enhance::config::{load_config, RuntimeConfig};
use raster_enhance::raster::io::{load_image, save_image, write_json_file};
use raster_enhance::{EnhanceSession, ProcessSource};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    if config.pipeline.is_empty() {
        return Err("Config pipeline is empty; nothing to do".to_string());
    }

    let original = load_image(&config.input)?;
    println!(
        "Loaded {} ({}x{}, {} channel{})",
        config.input.display(),
        original.width(),
        original.height(),
        original.channels(),
        if original.is_color() { "s" } else { "" }
    );

    let mut session = EnhanceSession::new();
    session.load_original(original);

    for (index, op) in config.pipeline.iter().enumerate() {
        if index == 1 {
            // Chain every subsequent operation on the previous result.
            session.set_source(ProcessSource::Enhanced);
        }
        let label = op.name();
        let result = session
            .apply(op, &mut |pct: f32| {
                if op.reports_progress() {
                    eprint!("\r  {label}: {pct:5.1}%");
                }
            })
            .map_err(|e| format!("Pipeline step {} failed: {e}", index + 1))?;
        if op.reports_progress() {
            eprintln!();
        }
        println!(
            "  {label} -> {}x{}x{}",
            result.width(),
            result.height(),
            result.channels()
        );
    }

    write_outputs(&config, &mut session)
}

fn write_outputs(config: &RuntimeConfig, session: &mut EnhanceSession) -> Result<(), String> {
    if let Some(path) = &config.output.histogram_json {
        session.set_source(ProcessSource::Enhanced);
        let hist = session
            .histogram()
            .map_err(|e| format!("Histogram failed: {e}"))?;
        write_json_file(path, &hist)?;
        println!("Histogram written to {}", path.display());
    }

    if let Some(path) = &config.output.image_out {
        let enhanced = session
            .take_enhanced()
            .ok_or_else(|| "No enhanced image to save".to_string())?;
        save_image(&enhanced, path)?;
        println!("Enhanced image written to {}", path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: enhance_demo <config.json>\n\
     Config: { \"input\": <image>, \"pipeline\": [ { \"op\": ... } ], \
     \"output\": { \"image_out\": <png>, \"histogram_json\": <json> } }"
        .to_string()
}
