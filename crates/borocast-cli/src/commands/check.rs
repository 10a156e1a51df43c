use std::io;
use std::path::Path;

use borocast_core::ModelManifest;

pub fn run(model_path: &Path, init: bool) -> io::Result<()> {
    if init {
        ModelManifest::placeholder().write(model_path)?;
        println!("Wrote placeholder artifact to {}", model_path.display());
    }

    let manifest = ModelManifest::load(model_path)?;
    println!("✅ Model artifact loaded successfully");
    println!("   {}", model_path.display());
    println!(
        "   {} v{} ({}), embedding dim {}",
        manifest.name, manifest.version, manifest.architecture, manifest.embedding_dim
    );
    println!("   labels: {}", manifest.labels.join(", "));
    Ok(())
}
