// src/main.rs
use log::{debug, info, warn};
use nannou::prelude::*;
use std::time::Instant;

use taxiclock::{
    config::*,
    controllers::{ClockController, OscCommand, OscController},
    render::{
        draw_ampm, draw_background, draw_colon, draw_controls, draw_debug, draw_neon_glow,
        draw_vehicles,
    },
    services::{FixedTime, SystemTime, TimeSource},
    views::{ClockLayout, FlairControls, FlairMode},
};

struct Model {
    config: Config,

    // Core components:
    layout: ClockLayout,
    clock: ClockController,
    controls: FlairControls,
    time_source: Box<dyn TimeSource>,

    // Comms components:
    osc_controller: Option<OscController>,

    // Clock polling
    since_tick: f32,

    // FPS
    last_update: Instant,
    fps: f32,

    // Message
    debug_flag: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    let time_source: Box<dyn TimeSource> = match &config.clock.fixed_time {
        Some(text) => {
            let (hours, minutes) = parse_fixed_time(text).expect("Invalid fixed_time");
            info!("Clock frozen at {:02}:{:02}", hours, minutes);
            Box::new(FixedTime { hours, minutes })
        }
        None => Box::new(SystemTime),
    };

    // OSC remote control is optional; a busy port only disables it
    let osc_controller = if config.osc.enabled {
        match OscController::new(config.osc.rx_port) {
            Ok(controller) => {
                info!("Listening for OSC on port {}", config.osc.rx_port);
                Some(controller)
            }
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    } else {
        None
    };

    // Create window
    app.new_window()
        .title("taxiclock")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .resized(resized)
        .build()
        .unwrap();

    let layout = ClockLayout::compute(
        config.window.width as f32,
        config.window.height as f32,
        &config.layout,
    );
    let mut clock = ClockController::new(&layout, config.animation.clone(), config.vehicle);
    let controls = FlairControls::new(layout.controls_center);

    // first paint shows the time straight away
    clock.tick(&time_source.read(), app.time);

    Model {
        config,
        layout,
        clock,
        controls,
        time_source,
        osc_controller,
        since_tick: 0.0,
        last_update: Instant::now(),
        fps: 0.0,
        debug_flag: false,
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::C => model.controls.select(FlairMode::Cinematic),
        Key::N => model.controls.select(FlairMode::Neon),
        Key::D => model.debug_flag = !model.debug_flag,
        Key::Q => app.quit(),
        _ => (),
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    // nannou reports the mouse centred with y up
    let rect = app.window_rect();
    let point = vec2(app.mouse.x + rect.w() / 2.0, rect.h() / 2.0 - app.mouse.y);
    if let Some(mode) = model.controls.click(point) {
        info!("Flair mode: {}", mode.label());
    }
}

fn resized(app: &App, model: &mut Model, size: Vec2) {
    model.layout = ClockLayout::compute(size.x, size.y, &model.config.layout);
    model.clock.on_resize(&model.layout);
    model.controls.place(model.layout.controls_center);
    debug!("Resized to {}x{} at {:.2}s", size.x, size.y, app.time);
}

fn update(app: &App, model: &mut Model, update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    // FPS calculation
    if model.debug_flag {
        model.fps = 1.0 / duration.as_secs_f32().max(f32::EPSILON);
    }

    // Process OSC messages
    if let Some(osc) = model.osc_controller.as_mut() {
        osc.process_messages();
    }
    launch_commands(model);

    // Poll the time source
    model.since_tick += update.since_last.as_secs_f32();
    if model.since_tick >= model.config.clock.poll_interval {
        model.since_tick = 0.0;
        let reading = model.time_source.read();
        model.clock.tick(&reading, app.time);
    }

    model.clock.update(app.time);
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let mode = model.controls.mode();
    let vehicle_size = vec2(model.config.vehicle.width, model.config.vehicle.height);

    draw_background(&draw, mode);
    if mode == FlairMode::Neon {
        let mut rng = rand::thread_rng();
        draw_neon_glow(&draw, &model.layout, &mut rng);
    }
    draw_vehicles(&draw, &model.clock, &model.layout, vehicle_size);
    draw_colon(&draw, &model.layout, mode);
    draw_ampm(&draw, &model.layout, model.clock.ampm_text(), mode);
    draw_controls(&draw, &model.layout, &model.controls);

    if model.debug_flag {
        draw_debug(&draw, &model.clock, &model.layout, model.fps);
    }

    draw.to_frame(app, &frame).unwrap();
}

// ******************************* OSC Launcher *******************************

fn launch_commands(model: &mut Model) {
    let Some(osc) = model.osc_controller.as_mut() else {
        return;
    };
    for command in osc.take_commands() {
        match command {
            OscCommand::SetFlair(mode) => model.controls.select(mode),
            OscCommand::SetDebug(setting) => model.debug_flag = setting,
            OscCommand::ToggleDebug => model.debug_flag = !model.debug_flag,
        }
    }
}
