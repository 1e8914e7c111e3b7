//! Analog clock widget binary.

use tickface::error::Result;
use tickface::ui::app;
use tickface::ui::faces::analog::AnalogFace;

fn main() -> Result<()> {
    env_logger::init();
    app::run(Box::new(AnalogFace::default()))
}
