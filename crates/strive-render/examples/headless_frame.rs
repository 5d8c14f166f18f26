//! Draw two frames on a recording renderer and print what reached it.
//!
//! Run with `RUST_LOG=debug` to see the lifecycle messages.

use strive_core::{CoordinateMode, PointerSample};
use strive_render::{RecordingRenderer, TrackedRenderer};

fn main() {
    env_logger::init();

    let mut ctx = TrackedRenderer::new(RecordingRenderer::planar(400.0, 300.0));
    ctx.init();

    for mode in [CoordinateMode::RightHand, CoordinateMode::LeftHand] {
        ctx.set_coordinate_mode(mode);
        let result = ctx.frame(|ctx| {
            ctx.apply_translate(200.0, 150.0, None)?;
            ctx.responsive_text("origin", 0.0, 0.0);

            ctx.push();
            ctx.apply_rotate(30.0, None)?;
            ctx.responsive_text("tilted", 50.0, 20.0);
            let pointer = ctx.map_pointer(PointerSample::new(250.0, 100.0))?;
            println!("{}: pointer (250, 100) -> {pointer:?}", mode.as_str());
            // Left open on purpose; post_frame discards it.
            ctx.push();
            Ok(())
        });
        if let Err(err) = result {
            eprintln!("frame failed: {err}");
        }

        for (value, device, upright) in ctx.inner().texts() {
            println!("  {value:<8} at ({:.1}, {:.1}) upright={upright}", device.x, device.y);
        }
        ctx.inner_mut().take_calls();
    }
}
