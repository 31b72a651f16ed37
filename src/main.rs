//! Rope Jump entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use rope_jump::platform::{InputEvent, PerformanceClock};
    use rope_jump::renderer::{CanvasRenderer, Renderer};
    use rope_jump::sim::{GameState, SceneState};
    use rope_jump::{GameLoop, Simulation, Tuning};

    type Game<S> = GameLoop<S, PerformanceClock, CanvasRenderer>;

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Rope Jump starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let canvas: HtmlCanvasElement = match document
            .get_element_by_id("webgl")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        {
            Some(canvas) => canvas,
            None => {
                log::error!("Failed to find the <canvas id=\"webgl\"> element");
                return;
            }
        };

        let tuning = Tuning::load();
        // `#scene` in the URL selects the spinning scene
        let hash = window.location().hash().unwrap_or_default();
        if hash == "#scene" {
            launch(&window, canvas, SceneState::new(&tuning));
        } else {
            launch(&window, canvas, GameState::new(&tuning));
        }
    }

    fn launch<S>(window: &web_sys::Window, canvas: HtmlCanvasElement, sim: S)
    where
        S: Simulation + 'static,
        CanvasRenderer: Renderer<S::Frame>,
    {
        let Some(clock) = PerformanceClock::new() else {
            log::error!("No performance timer available");
            return;
        };

        let mut game = GameLoop::new(sim, clock, CanvasRenderer::new(canvas));
        if let Err(e) = game.start() {
            log::error!("Failed to start the game: {}", e);
            return;
        }

        let game = Rc::new(RefCell::new(game));
        setup_input_handlers(window, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Rope Jump running!");
    }

    fn setup_input_handlers<S>(window: &web_sys::Window, game: Rc<RefCell<Game<S>>>)
    where
        S: Simulation + 'static,
        CanvasRenderer: Renderer<S::Frame>,
    {
        // Key press: camera turns repeat while held, space must not scroll the page
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                match InputEvent::from_key(&event.key()) {
                    Some(InputEvent::Jump) => event.prevent_default(),
                    Some(other) => {
                        game.borrow_mut().queue(other);
                    }
                    None => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key release: jump
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(InputEvent::Jump) = InputEvent::from_key(&event.key()) {
                    game.borrow_mut().queue(InputEvent::Jump);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame<S>(game: Rc<RefCell<Game<S>>>)
    where
        S: Simulation + 'static,
        CanvasRenderer: Renderer<S::Frame>,
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop<S>(game: Rc<RefCell<Game<S>>>)
    where
        S: Simulation + 'static,
        CanvasRenderer: Renderer<S::Frame>,
    {
        let running = game.borrow_mut().frame();

        if running {
            request_animation_frame(game);
        } else {
            log::info!("Game over after {} frames", game.borrow().frames());
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::str::FromStr;
    use std::time::Duration;

    use serde::Serialize;

    use rope_jump::consts::FRAME_MS;
    use rope_jump::platform::{Clock, ManualClock, SystemClock};
    use rope_jump::renderer::LogRenderer;
    use rope_jump::sim::{GameState, SceneState};
    use rope_jump::{GameLoop, Simulation, Tuning};

    /// One minute at 60 fps
    pub const MAX_FRAMES: u64 = 60 * 60;

    /// Which demo to run
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "lowercase")]
    pub enum Demo {
        Rope,
        Scene,
    }

    impl FromStr for Demo {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.to_lowercase().as_str() {
                "rope" | "jump" => Ok(Demo::Rope),
                "scene" | "windmill" => Ok(Demo::Scene),
                other => Err(format!("unknown demo '{other}'")),
            }
        }
    }

    /// Parsed command line: `[rope|scene] [--realtime]`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Options {
        pub demo: Demo,
        /// Pace frames on the wall clock instead of a simulated one
        pub realtime: bool,
    }

    impl Options {
        pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, String> {
            let mut options = Options {
                demo: Demo::Rope,
                realtime: false,
            };
            for arg in args {
                match arg.as_str() {
                    "--realtime" => options.realtime = true,
                    other => options.demo = other.parse()?,
                }
            }
            Ok(options)
        }
    }

    /// Logged at the end of a headless run
    #[derive(Debug, Serialize)]
    pub struct Summary {
        pub demo: Demo,
        pub frames: u64,
        pub finished: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub score: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub jumps_cleared: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub rope_speed: Option<f32>,
    }

    /// Drive a loop until it stops or runs `max_frames`; `wait` lets one
    /// frame's worth of time pass on the clock
    fn drive<S, C>(
        game: &mut GameLoop<S, C, LogRenderer>,
        max_frames: u64,
        mut wait: impl FnMut(&mut C),
    ) -> bool
    where
        S: Simulation,
        S::Frame: std::fmt::Debug,
        C: Clock,
    {
        if let Err(e) = game.start() {
            log::error!("Failed to start: {}", e);
            return false;
        }
        while game.frames() < max_frames {
            wait(game.clock_mut());
            if !game.frame() {
                return true;
            }
        }
        false
    }

    fn session<C: Clock>(
        demo: Demo,
        tuning: &Tuning,
        clock: C,
        max_frames: u64,
        wait: impl FnMut(&mut C),
    ) -> Summary {
        match demo {
            Demo::Rope => {
                let mut game = GameLoop::new(GameState::new(tuning), clock, LogRenderer::default());
                game.set_autopilot(true);
                let finished = drive(&mut game, max_frames, wait);
                let sim = game.sim();
                Summary {
                    demo,
                    frames: game.frames(),
                    finished,
                    score: Some(sim.score()),
                    jumps_cleared: Some(sim.jumps_cleared()),
                    rope_speed: Some(sim.rope.angular_speed),
                }
            }
            Demo::Scene => {
                let mut game = GameLoop::new(SceneState::new(tuning), clock, LogRenderer::default());
                let finished = drive(&mut game, max_frames, wait);
                Summary {
                    demo,
                    frames: game.frames(),
                    finished,
                    score: None,
                    jumps_cleared: None,
                    rope_speed: None,
                }
            }
        }
    }

    pub fn run(options: Options, tuning: &Tuning) -> Summary {
        let summary = if options.realtime {
            let frame = Duration::from_secs_f32(FRAME_MS / 1000.0);
            session(options.demo, tuning, SystemClock::default(), MAX_FRAMES, |_| {
                std::thread::sleep(frame)
            })
        } else {
            session(options.demo, tuning, ManualClock::default(), MAX_FRAMES, |clock| {
                clock.advance(FRAME_MS as f64)
            })
        };

        match serde_json::to_string(&summary) {
            Ok(json) => log::info!("Session summary: {}", json),
            Err(e) => log::warn!("Failed to serialize summary: {}", e),
        }
        summary
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn args(list: &[&str]) -> Vec<String> {
            list.iter().map(|s| s.to_string()).collect()
        }

        #[test]
        fn test_demo_from_str() {
            assert_eq!("rope".parse::<Demo>(), Ok(Demo::Rope));
            assert_eq!("Windmill".parse::<Demo>(), Ok(Demo::Scene));
            assert!("pong".parse::<Demo>().is_err());
        }

        #[test]
        fn test_options_parse() {
            assert_eq!(
                Options::parse(args(&[])),
                Ok(Options {
                    demo: Demo::Rope,
                    realtime: false
                })
            );
            assert_eq!(
                Options::parse(args(&["scene", "--realtime"])),
                Ok(Options {
                    demo: Demo::Scene,
                    realtime: true
                })
            );
            assert!(Options::parse(args(&["--fast"])).is_err());
        }

        #[test]
        fn test_simulated_rope_run_is_capped() {
            let summary = run(
                Options {
                    demo: Demo::Rope,
                    realtime: false,
                },
                &Tuning::default(),
            );
            assert!(summary.frames > 0 && summary.frames <= MAX_FRAMES);
            assert!(summary.score.is_some());
        }

        #[test]
        fn test_wall_clock_session() {
            let mut waits = 0;
            let summary = session(Demo::Rope, &Tuning::default(), SystemClock::default(), 5, |_| {
                waits += 1;
                std::thread::sleep(Duration::from_millis(2));
            });
            assert_eq!(waits, 5);
            assert_eq!(summary.frames, 5);
            assert!(!summary.finished);
            assert_eq!(summary.score, Some(1));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Rope Jump (native) starting...");
    log::info!("Native mode runs headless - use `trunk serve` for the playable web version");

    let options = match headless::Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: rope-jump [rope|scene] [--realtime]");
            std::process::exit(2);
        }
    };

    let tuning = rope_jump::Tuning::load();
    headless::run(options, &tuning);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
