// Minimal smoke run of the compositing pipeline without touching the input folder

use backdrop_compositor::{
    composition::Compositor,
    config::Config,
    imaging::{ImageCrateBackend, ImagingBackend, SourceImage},
};
use image::{Rgba, RgbaImage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🖼️  Testing Backdrop-Compositor Core Functionality");

    // Test 1: Configuration
    println!("\n1. Testing Configuration...");
    let config = Config::default();
    config.validate()?;
    println!(
        "   Canvas: {}x{}, color {:?}",
        config.canvas.width, config.canvas.height, config.canvas.color
    );

    // Test 2: Synthetic source with a transparent window
    println!("\n2. Creating synthetic 640x480 source...");
    let source = SourceImage::new(RgbaImage::from_fn(640, 480, |x, y| {
        let inside_window = (220..420).contains(&x) && (140..340).contains(&y);
        let alpha = if inside_window { 0 } else { 255 };
        Rgba([(x * 255 / 639) as u8, (y * 255 / 479) as u8, 128, alpha])
    }));

    // Test 3: Placement
    println!("\n3. Testing Placement...");
    let compositor = Compositor::new(config)?;
    let placement = compositor.placement_for(&source)?;
    println!(
        "   Overlay {}x{} at ({}, {})",
        placement.overlay_width, placement.overlay_height, placement.x, placement.y
    );

    // Test 4: Compose and encode
    println!("\n4. Composing...");
    let canvas = compositor.compose(&source)?;
    let bytes = ImageCrateBackend::new().encode(&canvas, compositor.config().io.format)?;

    match std::fs::write("minimal_test_output.png", &bytes) {
        Ok(()) => println!("   📁 Output saved to: minimal_test_output.png"),
        Err(e) => println!("   ⚠️  Could not save file: {}", e),
    }

    println!("\n🎉 All checks passed! Backdrop-Compositor core is working.");
    Ok(())
}
