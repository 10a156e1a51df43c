use std::io;
use std::path::Path;

use borocast_core::Borough;

/// Width of the ASCII probability bar.
const BAR_WIDTH: usize = 30;

pub fn run(model_path: &Path, text: &str, json: bool) -> io::Result<()> {
    let classifier = super::load_classifier(model_path)?;
    let prediction = classifier.predict(text);

    if json {
        let out = serde_json::to_string_pretty(&prediction)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        println!("{out}");
        return Ok(());
    }

    println!("Complaint: {text}");
    println!();
    println!(
        "Predicted borough: {} ({:.0}%)",
        prediction.borough,
        prediction.confidence() * 100.0
    );
    println!();
    for borough in Borough::ALL {
        let p = prediction.probabilities[borough.index()];
        let marker = if borough == prediction.borough { "▸" } else { " " };
        println!(
            "  {marker} {:<14} {:>5.2}  {}",
            borough.label(),
            p,
            ascii_bar(p, BAR_WIDTH)
        );
    }
    Ok(())
}

/// Render a probability in [0, 1] as a fixed-width bar.
fn ascii_bar(value: f64, width: usize) -> String {
    let filled = (value.clamp(0.0, 1.0) * width as f64).round() as usize;
    let mut bar = String::with_capacity(width * 3);
    for i in 0..width {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
