//! Bouncing Balls entry point
//!
//! Browser: acquires the canvas, brings up WebGPU, spawns a ball per click and
//! steps the simulation once per animation frame.
//! Native: runs a short seeded headless simulation and prints the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use bouncing_balls::InitError;
    use bouncing_balls::Settings;
    use bouncing_balls::renderer::{RenderState, ShapeBatch};
    use bouncing_balls::sim::{SimState, Viewport, tick};

    /// Id of the canvas element in index.html
    const CANVAS_ID: &str = "canvas";

    /// Frame loop context: simulation plus the surface it paints to
    struct App {
        sim: SimState,
        batch: ShapeBatch,
        render_state: RenderState,
    }

    impl App {
        /// One animation frame: step, tessellate, draw
        fn frame(&mut self) {
            tick(&mut self.sim, &mut self.batch);

            match self.render_state.render(&self.batch) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("Surface lost, reconfiguring");
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    pub async fn run() -> Result<(), InitError> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Bouncing Balls starting...");

        let window = web_sys::window().ok_or(InitError::NoWindow)?;
        let document = window.document().ok_or(InitError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| InitError::CanvasNotFound(CANVAS_ID.to_string()))?
            .dyn_into()
            .map_err(|_| InitError::NotACanvas)?;

        let settings = Settings::from_attribute(canvas.get_attribute(Settings::ATTRIBUTE).as_deref());

        // Viewport is fixed here for the life of the page
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let viewport = Viewport::from_client_size(client_w, client_h)?;

        let dpr = window.device_pixel_ratio();
        let width = ((client_w as f64 * dpr) as u32).max(1);
        let height = ((client_h as f64 * dpr) as u32).max(1);
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let sim = SimState::from_settings(seed, viewport, &settings);
        log::info!(
            "Simulation initialized with seed {} on {}x{} viewport",
            sim.seed,
            viewport.width,
            viewport.height
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, viewport).await?;

        let app = Rc::new(RefCell::new(App {
            sim,
            batch: ShapeBatch::new(settings.circle_segments),
            render_state,
        }));

        setup_click_handler(&canvas, app.clone());

        request_animation_frame(app);

        log::info!("Bouncing Balls running!");
        Ok(())
    }

    /// Each click spawns a ball at the pointer
    fn setup_click_handler(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let x = event.offset_x() as f32;
            let y = event.offset_y() as f32;
            app.borrow_mut().sim.spawn(x, y);
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window disappeared, frame loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_app::run().await.map_err(|e| {
        log::error!("Failed to start: {}", e);
        JsValue::from_str(&e.to_string())
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bouncing_balls::Settings;
    use bouncing_balls::sim::{DrawCommand, SimState, Viewport, tick};

    env_logger::init();
    log::info!("Bouncing Balls (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    const SEED: u64 = 0x00ba_11ba_11;
    const FRAMES: u32 = 600;
    let clicks = [(120.0, 80.0), (400.0, 0.0), (680.0, 300.0), (400.0, 550.0)];

    let settings = Settings {
        seed: Some(SEED),
        ..Settings::default()
    };
    let mut sim = SimState::from_settings(SEED, Viewport::new(800.0, 600.0), &settings);
    for (x, y) in clicks {
        sim.spawn(x, y);
    }

    let mut surface: Vec<DrawCommand> = Vec::new();
    for _ in 0..FRAMES {
        surface.clear();
        tick(&mut sim, &mut surface);
    }

    log::info!(
        "Ran {} frames with {} balls ({} draw commands in the last frame)",
        sim.frame(),
        sim.ball_count(),
        surface.len()
    );

    let balls: Vec<_> = sim.balls().collect();
    match serde_json::to_string_pretty(&balls) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
