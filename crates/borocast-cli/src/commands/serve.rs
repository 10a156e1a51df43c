use std::io;
use std::path::Path;

pub fn run(model_path: &Path, host: &str, port: u16) -> io::Result<()> {
    let classifier = super::load_classifier(model_path)?;

    let base = format!("http://{host}:{port}");
    println!("🗽 Borocast Server v{}", borocast_core::VERSION);
    println!("   {base}");
    println!("   model: {}", classifier.manifest().name);
    println!();
    println!("   Endpoints:");
    println!("     GET  /                       API index (try: curl {base})");
    println!("     POST /api/v1/predict         Predict a complaint's borough");
    println!("     GET  /api/v1/history         Session prediction history");
    println!("     GET  /api/v1/dashboard       Mock aggregate charts");
    println!("     GET  /api/v1/map             Density map document (HTML)");
    println!("     POST /api/v1/heatmap/clear   Drop all heatmap points");
    println!("     GET  /health                 Session health check");
    println!();
    println!("   Examples:");
    println!(
        "     curl -X POST {base}/api/v1/predict -H 'content-type: application/json' \\"
    );
    println!("          -d '{{\"text\": \"Noise complaint from construction site\"}}'");
    println!("     curl {base}/api/v1/map > map.html");
    println!();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(borocast_server::run_server(classifier, host, port));
    Ok(())
}
