//! Headless frame-loop demo: a drawer entity driven by scripted actions.
//!
//! Builds the registries the way a host does at startup, creates one drawer,
//! then runs a few frames that queue shapes and flush them onto a CPU pixel
//! surface. Prints a coarse ASCII dump of the final frame.
//!
//! Run with:
//!   cargo run --example frame_demo -p scrawl-drawer

use scrawl_drawer::prelude::*;
use scrawl_scene::prelude::*;

const WIDTH: u32 = 64;
const HEIGHT: u32 = 32;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Startup: binding table + object factory, built once.
    let mut bindings = ExtensionRegistry::new();
    register_bindings(&mut bindings);
    let mut objects = ObjectRegistry::new();
    register_object_type(&mut objects);

    let mut images = ImageBank::new();
    let mut drawer = objects
        .create(DRAWER_TYPE_ID, "demo")
        .expect("drawer type is registered");
    drawer.initialize_from_placement(&Placement {
        x: 8.0,
        y: 8.0,
        ..Placement::default()
    });

    let mut surface = PixelSurface::new(WIDTH, HEIGHT);

    for frame in 0..3u32 {
        let mut ctx = ScriptContext { images: &mut images, elapsed: 1.0 / 60.0 };

        // Style setup.
        bindings
            .run_action(
                "Drawer::SetFillColor",
                &mut ctx,
                drawer.as_mut(),
                &Instruction::new(vec![Param::Text("0;200;80".into())]),
            )
            .unwrap();
        bindings
            .run_action(
                "Drawer::SetOutlineSize",
                &mut ctx,
                drawer.as_mut(),
                &Instruction::new(vec![Param::Text("=".into()), Param::Number(1.0)]),
            )
            .unwrap();

        // A rectangle sliding right one pixel per frame, plus a circle.
        let x = 4.0 + frame as f64;
        bindings
            .run_action(
                "Drawer::Rectangle",
                &mut ctx,
                drawer.as_mut(),
                &Instruction::new(vec![
                    Param::Number(x),
                    Param::Number(6.0),
                    Param::Number(x + 20.0),
                    Param::Number(16.0),
                ]),
            )
            .unwrap();
        bindings
            .run_action(
                "Drawer::Circle",
                &mut ctx,
                drawer.as_mut(),
                &Instruction::new(vec![
                    Param::Number(44.0),
                    Param::Number(16.0),
                    Param::Number(7.0),
                ]),
            )
            .unwrap();

        surface.clear(Rgba::opaque(0, 0, 0));
        let ok = drawer.draw(&mut surface);
        tracing::info!(frame, ok, "frame drawn");
    }

    // Coarse dump: one character per pixel.
    for y in 0..HEIGHT {
        let row: String = (0..WIDTH)
            .map(|x| match surface.pixel(x, y) {
                Some([0, 0, 0, _]) => ' ',
                Some([_, g, _, _]) if g > 100 => '#',
                _ => '+',
            })
            .collect();
        println!("{row}");
    }
}
