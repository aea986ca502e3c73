//! Road Drive entry point
//!
//! Handles platform-specific initialization and runs the scene loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use road_drive::consts::*;
    use road_drive::platform::KeyboardState;
    use road_drive::renderer::{DrawList, RenderState, SceneBinding};
    use road_drive::sim::{SceneState, tick};
    use road_drive::{QualityPreset, Settings, Tuning};

    /// Scene instance holding all state
    struct Game {
        state: SceneState,
        keys: KeyboardState,
        draw_list: DrawList,
        binding: SceneBinding,
        render_state: Option<RenderState>,
        settings: Settings,
        accumulator: f32,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64, tuning: Tuning, settings: Settings) -> Self {
            let state = SceneState::new(seed, tuning);
            let mut draw_list = DrawList::new();
            let binding = SceneBinding::register(&mut draw_list, &state);
            Self {
                state,
                keys: KeyboardState::new(),
                draw_list,
                binding,
                render_state: None,
                settings,
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
                let input = self.keys.snapshot();
                tick(&mut self.state, &input, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
            if substeps > 0 {
                self.binding.sync(&mut self.draw_list, &self.state);
            }

            // FPS over the last 60 frames
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
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
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.draw_list, &self.state) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        log::warn!("Surface lost, reconfiguring");
                        render_state.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("hud-speed") {
                let class = if !self.settings.show_speed {
                    "hud-item hidden"
                } else if self.state.car.is_stopped() {
                    "hud-item stopped"
                } else {
                    "hud-item"
                };
                let _ = el.set_attribute("class", class);
            }
            if let Some(el) = document.query_selector("#hud-speed .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.car.speed_readout()));
            }

            if let Some(el) = document.get_element_by_id("hud-fps") {
                let class = if self.settings.show_fps {
                    "hud-item"
                } else {
                    "hud-item hidden"
                };
                let _ = el.set_attribute("class", class);
            }
            if self.settings.show_fps {
                if let Some(el) = document.query_selector("#hud-fps .hud-value").ok().flatten() {
                    el.set_text_content(Some(&self.fps.to_string()));
                }
            }
        }
    }

    /// Find `quality=<preset>` in a `?a=b&c=d` query string
    fn quality_from_query(search: &str) -> Option<QualityPreset> {
        search
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "quality")
            .and_then(|(_, value)| QualityPreset::from_str(value))
    }

    /// Canvas backing size in device pixels
    fn canvas_size(window: &web_sys::Window, canvas: &HtmlCanvasElement) -> (u32, u32) {
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        (width.max(1), height.max(1))
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Road Drive starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (width, height) = canvas_size(&window, &canvas);
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize scene
        let mut settings = Settings::load();
        // `?quality=low|medium|high` overrides the stored preset for this session
        if let Some(preset) = window
            .location()
            .search()
            .ok()
            .and_then(|search| quality_from_query(&search))
        {
            log::info!("Quality override from URL: {}", preset.as_str());
            settings.quality = preset;
        }
        let tuning = settings.apply_to(Tuning::load());
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, tuning, settings.clone())));

        log::info!("Scene initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
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

        match RenderState::new(surface, &adapter, width, height, &tuning, &settings).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => {
                log::error!("Failed to create device: {}", e);
                return;
            }
        }

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        setup_input_handlers(game.clone());
        setup_focus_release(game.clone());
        setup_resize(&canvas, game.clone());

        // Start scene loop
        request_animation_frame(game);

        log::info!("Road Drive running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                if g.keys.key_down(&event.key()) {
                    // Keep arrow keys from scrolling the page
                    event.prevent_default();
                } else if event.key().eq_ignore_ascii_case("f") && !event.repeat() {
                    g.settings.show_fps = !g.settings.show_fps;
                    g.settings.save();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if game.borrow_mut().keys.key_up(&event.key()) {
                    event.prevent_default();
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Keyup never arrives once focus is gone, so drop every held key
    fn setup_focus_release(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    game.borrow_mut().keys.release_all();
                    log::info!("Released keys (tab hidden)");
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().keys.release_all();
                log::info!("Released keys (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let canvas = canvas.clone();
        let window_clone = window.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (width, height) = canvas_size(&window_clone, &canvas);
            canvas.set_width(width);
            canvas.set_height(height);
            if let Some(ref mut render_state) = game.borrow_mut().render_state {
                render_state.resize(width, height);
            }
            log::info!("Resized to {}x{}", width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Road Drive (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    headless_drive();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted drive through the simulation and draw list, without a GPU
#[cfg(not(target_arch = "wasm32"))]
fn headless_drive() {
    use road_drive::Tuning;
    use road_drive::consts::SIM_DT;
    use road_drive::renderer::{DrawList, SceneBinding};
    use road_drive::sim::{SceneState, TickInput, tick};

    let mut state = SceneState::new(42, Tuning::default());
    let mut list = DrawList::new();
    let binding = SceneBinding::register(&mut list, &state);

    // (ticks, input): accelerate, drift left while cruising, then coast
    let script = [
        (
            120,
            TickInput {
                forward: true,
                ..Default::default()
            },
        ),
        (
            60,
            TickInput {
                forward: true,
                left: true,
                ..Default::default()
            },
        ),
        (120, TickInput::default()),
    ];

    for (ticks, input) in script {
        for _ in 0..ticks {
            tick(&mut state, &input, SIM_DT);
        }
        binding.sync(&mut list, &state);
        log::info!(
            "t={} speed={} pos=({:.2}, {:.2}) camera=({:.2}, {:.2}, {:.2})",
            state.time_ticks,
            state.car.speed_readout(),
            state.car.pos.x,
            state.car.pos.z,
            state.camera.position.x,
            state.camera.position.y,
            state.camera.position.z,
        );
    }

    println!(
        "Drove {:.1} units in {} ticks; {} drawables, stopped: {}",
        -state.car.pos.z,
        state.time_ticks,
        list.len(),
        state.car.is_stopped()
    );
}
