//! Blockwork entry point
//!
//! Handles platform-specific initialization and runs the animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlInputElement, HtmlSelectElement};

    use blockwork::consts::*;
    use blockwork::renderer::{RenderState, VertexCanvas, draw_scene};
    use blockwork::settings::Settings;
    use blockwork::sim::{ForceKind, SimState, Speed, TickInput, tick};

    /// Application instance holding all state
    struct App {
        state: SimState,
        render_state: Option<RenderState>,
        scene: VertexCanvas,
        settings: Settings,
        input: TickInput,
        accumulator: f32,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl App {
        fn new(settings: Settings) -> Self {
            let mut state = SimState::new();
            state.speed = settings.speed;
            state.show_diagram = settings.show_diagram;

            Self {
                state,
                render_state: None,
                scene: VertexCanvas::new(),
                settings,
                input: TickInput::default(),
                accumulator: 0.0,
                last_time: 0.0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input.clone();
                tick(&mut self.state, &input);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot commands after processing
                self.input.play = false;
                self.input.pause = false;
                self.input.replay = false;
                self.input.toggle_diagram = false;
                self.input.speed = None;
                self.input.force_kind = None;
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Calculate FPS from oldest to newest frame
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            self.scene.clear();
            draw_scene(&self.state, &mut self.scene);

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.scene.vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Write readouts and overlay labels back to the DOM
        fn update_hud(&self, document: &Document) {
            if let Some(el) = document.get_element_by_id("displacement-output") {
                if let Ok(field) = el.dyn_into::<HtmlInputElement>() {
                    field.set_value(&format!("{:.2}", self.state.displacement));
                }
            }

            if let Some(el) = document.get_element_by_id("work-output") {
                if let Ok(field) = el.dyn_into::<HtmlInputElement>() {
                    field.set_value(&format!("{:.2}", self.state.work));
                }
            }

            if self.settings.show_fps {
                if let Some(el) = document.get_element_by_id("hud-fps") {
                    el.set_text_content(Some(&format!("{} fps", self.fps)));
                }
            }

            // Rebuild the force-label overlay to match this frame's scene
            if let Some(container) = document.get_element_by_id("labels") {
                container.set_inner_html("");
                for label in &self.scene.labels {
                    if let Ok(el) = document.create_element("span") {
                        el.set_text_content(Some(&label.text));
                        let style = format!(
                            "position:absolute;left:{}px;top:{}px",
                            label.pos.x, label.pos.y
                        );
                        let _ = el.set_attribute("style", &style);
                        let _ = container.append_child(&el);
                    }
                }
            }
        }
    }

    /// Parse a numeric input field; `None` keeps the prior value
    fn parse_force(document: &Document, id: &str) -> Option<f32> {
        let el = document.get_element_by_id(id)?;
        let field = el.dyn_into::<HtmlInputElement>().ok()?;
        field
            .value()
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Blockwork starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Decode display settings from the page, if present
        let settings = canvas
            .get_attribute("data-settings")
            .map(|json| Settings::from_json(&json))
            .unwrap_or_default();

        // Set canvas backing store size (DPR-scaled)
        let dpr = window.device_pixel_ratio();
        let width = (CANVAS_WIDTH as f64 * dpr) as u32;
        let height = (CANVAS_HEIGHT as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let app = Rc::new(RefCell::new(App::new(settings.clone())));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        app.borrow_mut().render_state = Some(render_state);

        init_widgets(&document, &app.borrow());
        setup_controls(&document, app.clone());

        if !settings.show_fps {
            if let Some(el) = document.get_element_by_id("hud-fps") {
                let _ = el.set_attribute("class", "hidden");
            }
        }

        // Start the animation loop
        request_animation_frame(app);

        log::info!("Blockwork running!");
    }

    /// Reflect the startup state into the widgets
    fn init_widgets(document: &Document, app: &App) {
        let fields = [
            ("applied-input", format!("{}", app.state.applied_force)),
            ("friction-input", format!("{}", app.state.friction_force)),
            ("displacement-output", "0.00".to_string()),
            ("work-output", format!("{:.2}", app.state.work)),
        ];
        for (id, value) in fields {
            if let Some(el) = document.get_element_by_id(id) {
                if let Ok(field) = el.dyn_into::<HtmlInputElement>() {
                    field.set_value(&value);
                }
            }
        }

        if let Some(el) = document.get_element_by_id("diagram-check") {
            if let Ok(check) = el.dyn_into::<HtmlInputElement>() {
                check.set_checked(app.state.show_diagram);
            }
        }

        if let Some(el) = document.get_element_by_id("force-select") {
            if let Ok(select) = el.dyn_into::<HtmlSelectElement>() {
                select.set_value(app.state.force_kind.as_str());
            }
        }
    }

    /// Wire the control widgets to tick commands
    fn setup_controls(document: &Document, app: Rc<RefCell<App>>) {
        // Play button
        if let Some(btn) = document.get_element_by_id("play-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                app.borrow_mut().input.play = true;
                log::info!("Play");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pause button
        if let Some(btn) = document.get_element_by_id("pause-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                app.borrow_mut().input.pause = true;
                log::info!("Pause");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Replay button
        if let Some(btn) = document.get_element_by_id("replay-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                app.borrow_mut().input.replay = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Speed buttons
        if let Some(btn) = document.get_element_by_id("slow-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                app.borrow_mut().input.speed = Some(Speed::Slow);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("normal-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                app.borrow_mut().input.speed = Some(Speed::Normal);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Force diagram checkbox
        if let Some(el) = document.get_element_by_id("diagram-check") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow_mut().input.toggle_diagram = true;
            });
            let _ = el.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Force selection dropdown
        if let Some(el) = document.get_element_by_id("force-select") {
            if let Ok(select) = el.dyn_into::<HtmlSelectElement>() {
                let app = app.clone();
                let select_clone = select.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                    if let Some(kind) = ForceKind::from_str(&select_clone.value()) {
                        app.borrow_mut().input.force_kind = Some(kind);
                    }
                });
                let _ = select
                    .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();
            let mut a = app.borrow_mut();

            // Force fields are live inputs, read every frame
            a.input.applied_force = parse_force(&document, "applied-input");
            a.input.friction_force = parse_force(&document, "friction-input");

            // Calculate delta time
            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            a.last_time = time;

            a.update(dt, time);
            a.render();
            a.update_hud(&document);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Blockwork (native) starting...");
    log::info!("Native mode requires winit integration - run with `trunk serve` for web version");

    // Run tests
    println!("\nRunning simulation smoke check...");
    smoke_check();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_check() {
    use blockwork::sim::{SimState, TickInput, tick};

    let mut state = SimState::new();
    let input = TickInput {
        play: true,
        ..Default::default()
    };
    tick(&mut state, &input);

    assert!(
        (state.block_x - 102.0).abs() < 1e-4,
        "block should advance 2 px at normal speed"
    );
    assert!(
        (state.work - 2.0).abs() < 1e-3,
        "work should be 2 J after one tick"
    );
    println!("✓ Simulation smoke check passed!");
}
