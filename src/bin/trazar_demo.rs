//! trazar-demo - Render the gem scene to a PNG with a few random sketches.
//!
//! Draws the reference scene (ruled grid, axes, the gem figure rasterized
//! with both walkers), then simulates a handful of clicks, each of which
//! sketches a random segment in the lower half of the canvas.

use trazar::prelude::*;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("trazar_demo.png"));

    let scene = Scene::new().build()?;
    let mut canvas = scene.to_canvas()?;

    let mut rng = rand::rng();
    for _ in 0..3 {
        let (from, to) = scene.sketch(&mut canvas, &mut rng);
        println!(
            "sketched ({:.0}, {:.0}) -> ({:.0}, {:.0})",
            from.x, from.y, to.x, to.y
        );
    }

    PngEncoder::write_to_file(&canvas, &path)?;
    println!("wrote {path}");

    TextPreview::new().width(72).print(&canvas);

    Ok(())
}
