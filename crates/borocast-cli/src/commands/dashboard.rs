use std::io;
use std::path::Path;

use crate::tui::app::App;

pub fn run(model_path: &Path) -> io::Result<()> {
    let classifier = super::load_classifier(model_path)?;
    App::new(classifier).run()
}
