mod bitmap;
mod config;
mod display;
mod effects;
mod error;
mod math3d;
mod util;

use std::path::Path;

use bitmap::Bitmap;
use config::RenderConfig;
use display::{
    Display, FrameBuffer, GridMode, InputEvent, RectMode, RenderTarget, DEFAULT_HEIGHT,
    DEFAULT_WIDTH,
};
use effects::{Billboard, Effect, PointField};
use math3d::Projection;
use sdl2::keyboard::Keycode;
use util::FpsCounter;

const CONFIG_PATH: &str = "dotfield.json";
/// Camera z step per Up/Down press
const DOLLY_STEP: f32 = 0.25;
/// Keep the camera behind the point cloud; at z = -1 the near points would
/// sit on the projection plane and every frame would fail with ZeroDepth.
const DOLLY_RANGE: (f32, f32) = (-20.0, -1.5);

/// Parse command line arguments and return (width, height, vsync)
fn parse_args() -> (u32, u32, bool) {
    let args: Vec<String> = std::env::args().collect();
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut vsync = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => vsync = false,
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<u32>() {
                        width = w;
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<u32>() {
                        height = h;
                    }
                    i += 1;
                }
            },
            "--resolution" | "-r" => {
                if i + 1 < args.len() {
                    // Parse WxH format (e.g., 1920x1080)
                    let parts: Vec<&str> = args[i + 1].split('x').collect();
                    if parts.len() == 2 {
                        if let (Ok(w), Ok(h)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                            width = w;
                            height = h;
                        }
                    }
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: dotfield [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  --width W, -w W       Set window width (default: {})",
                    DEFAULT_WIDTH
                );
                println!(
                    "  --height H, -h H      Set window height (default: {})",
                    DEFAULT_HEIGHT
                );
                println!("  --resolution WxH, -r WxH  Set resolution (e.g., 1920x1080)");
                println!("  --no-vsync            Disable VSync for uncapped framerate");
                println!("  --help                Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    (width, height, vsync)
}

/// Load the scene config, falling back to defaults. A missing file is the
/// normal first-run case; a present-but-broken file gets reported.
fn load_config() -> RenderConfig {
    if !Path::new(CONFIG_PATH).exists() {
        return RenderConfig::default();
    }
    match RenderConfig::load(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {}: {} (using defaults)", CONFIG_PATH, e);
            RenderConfig::default()
        },
    }
}

/// Decode the billboard image, substituting a checkerboard placeholder when
/// there is no path configured or decoding fails.
fn load_billboard_bitmap(config: &RenderConfig) -> Bitmap {
    let placeholder = || {
        Bitmap::checkerboard(
            128,
            16,
            util::rgb(0xFF, 0x00, 0xFF),
            util::rgb(0x20, 0x20, 0x20),
        )
    };

    match &config.image_path {
        Some(path) => match Bitmap::load(path) {
            Ok(bmp) => bmp,
            Err(e) => {
                eprintln!("{} (using checkerboard placeholder)", e);
                placeholder()
            },
        },
        None => placeholder(),
    }
}

fn main() -> Result<(), String> {
    let (width, height, vsync) = parse_args();
    let mut config = load_config();

    let (mut display, texture_creator) = Display::with_options("dotfield", width, height, vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, width, height)?;
    let mut buffer = FrameBuffer::new(width, height).map_err(|e| e.to_string())?;

    // FPS counter with 60 sample rolling average
    let mut fps_counter = FpsCounter::new(60);
    let mut show_fps = false;

    let billboard_bitmap = load_billboard_bitmap(&config);
    let mut effects: Vec<Box<dyn Effect>> = vec![
        Box::new(PointField::new()),
        Box::new(Billboard::new(billboard_bitmap)),
    ];
    let mut current_effect = 0usize;

    println!("=== dotfield ===");
    println!("Resolution: {}x{}", width, height);
    if vsync {
        println!("VSync: ON (60fps locked). Use --no-vsync for uncapped.");
    } else {
        println!("VSync: OFF (uncapped framerate)");
    }
    println!("Use --help for command line options.");
    println!("Controls:");
    println!("  Tab/Left/Right - Cycle through scenes");
    println!("  G              - Toggle grid mode (lines/dots)");
    println!("  P              - Toggle projection (orthographic/perspective)");
    println!("  R              - Toggle showcase rectangle mode (outline/fill)");
    println!("  Up/Down        - Dolly the camera");
    println!("  F              - Toggle FPS readout in the window title");
    println!("  S              - Save scene config to {}", CONFIG_PATH);
    println!("  Escape         - Quit");

    'main: loop {
        // Delta time and FPS measurement
        let (dt, avg_fps) = fps_counter.tick();

        for event in display.poll_events() {
            match event {
                InputEvent::Quit => break 'main,
                InputEvent::KeyDown(key) => match key {
                    Keycode::Escape => break 'main,
                    Keycode::Tab | Keycode::Right => {
                        current_effect = (current_effect + 1) % effects.len();
                    },
                    Keycode::Left => {
                        current_effect = (current_effect + effects.len() - 1) % effects.len();
                    },
                    Keycode::G => {
                        config.grid_mode = match config.grid_mode {
                            GridMode::Lines => GridMode::Dots,
                            GridMode::Dots => GridMode::Lines,
                        };
                        println!("Grid mode: {:?}", config.grid_mode);
                    },
                    Keycode::P => {
                        config.projection = match config.projection {
                            Projection::Orthographic => Projection::Perspective,
                            Projection::Perspective => Projection::Orthographic,
                        };
                        println!("Projection: {:?}", config.projection);
                    },
                    Keycode::R => {
                        config.rect_mode = match config.rect_mode {
                            RectMode::Outline => RectMode::Fill,
                            RectMode::Fill => RectMode::Outline,
                        };
                        println!("Rectangle mode: {:?}", config.rect_mode);
                    },
                    Keycode::Up => {
                        config.camera.position.z = (config.camera.position.z + DOLLY_STEP)
                            .clamp(DOLLY_RANGE.0, DOLLY_RANGE.1);
                    },
                    Keycode::Down => {
                        config.camera.position.z = (config.camera.position.z - DOLLY_STEP)
                            .clamp(DOLLY_RANGE.0, DOLLY_RANGE.1);
                    },
                    Keycode::F => {
                        show_fps = !show_fps;
                        if !show_fps {
                            display.set_title("dotfield");
                        }
                    },
                    Keycode::S => {
                        if let Err(e) = config.save(CONFIG_PATH) {
                            eprintln!("Failed to save config: {}", e);
                        } else {
                            println!("Config saved to {}", CONFIG_PATH);
                        }
                    },
                    _ => {},
                },
            }
        }

        // Update and render the current scene. Neither failure is fatal:
        // the previous frame's state stays intact and the loop moves on.
        let effect = &mut effects[current_effect];
        if let Err(e) = effect.update(dt, width, height, &config) {
            eprintln!("{}: update skipped: {}", effect.name(), e);
        }
        if let Err(e) = effect.render(&mut buffer, &config) {
            eprintln!("{}: render failed: {}", effect.name(), e);
        }

        if show_fps {
            display.set_title(&format!(
                "dotfield | {} | {:.0} fps ({:.1} ms)",
                effect.name(),
                avg_fps,
                fps_counter.avg_frame_time_ms()
            ));
        }

        // Present
        display.present(&mut target, &buffer)?;
    }

    Ok(())
}
