//! Frame-driven session driver
//!
//! The host calls [`GameLoop::frame`] once per display frame (from
//! `requestAnimationFrame` in the browser, a plain loop natively) for as
//! long as it returns true. Each call measures the frame delta, runs one
//! simulation tick and hands the result to the renderer.

use crate::error::Result;
use crate::platform::{Clock, InputEvent};
use crate::renderer::{Renderer, RopeFrame};
use crate::sim::{GameEvent, GameState, SceneFrame, SceneState, TickInput, tick};

/// A simulation the loop can drive
pub trait Simulation {
    type Frame;

    /// Advance by one tick of `delta_ms`; false means the session has ended
    fn step(&mut self, input: &TickInput, delta_ms: f32) -> bool;

    /// Parameters for drawing the current state
    fn frame(&self) -> Self::Frame;

    /// Whether this simulation reacts to `event`
    fn accepts(&self, event: InputEvent) -> bool;
}

impl Simulation for GameState {
    type Frame = RopeFrame;

    fn step(&mut self, input: &TickInput, delta_ms: f32) -> bool {
        let running = tick(self, input, delta_ms);
        for event in &self.events {
            match event {
                GameEvent::Scored { score } => log::info!("Scored! score is now {}", score),
                GameEvent::GameOver { score } => log::info!("Game over with score {}", score),
                GameEvent::Jumped | GameEvent::Landed => log::debug!("{:?}", event),
            }
        }
        running
    }

    fn frame(&self) -> RopeFrame {
        RopeFrame::from_state(self)
    }

    fn accepts(&self, event: InputEvent) -> bool {
        event == InputEvent::Jump
    }
}

impl Simulation for SceneState {
    type Frame = SceneFrame;

    fn step(&mut self, input: &TickInput, delta_ms: f32) -> bool {
        self.advance(input, delta_ms);
        true
    }

    fn frame(&self) -> SceneFrame {
        SceneState::frame(self)
    }

    fn accepts(&self, event: InputEvent) -> bool {
        matches!(
            event,
            InputEvent::RotateCameraLeft | InputEvent::RotateCameraRight
        )
    }
}

/// Lifecycle of a session: Initializing -> Running -> Over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    /// Waiting for the renderer to report ready
    Initializing,
    Running,
    /// Terminal, no more ticks
    Over,
}

/// Owns one session: simulation, clock, renderer and pending input
pub struct GameLoop<S, C, R> {
    sim: S,
    clock: C,
    renderer: R,
    phase: LoopPhase,
    last_time: f64,
    input: TickInput,
    frames: u64,
}

impl<S, C, R> GameLoop<S, C, R>
where
    S: Simulation,
    C: Clock,
    R: Renderer<S::Frame>,
{
    pub fn new(sim: S, clock: C, renderer: R) -> Self {
        Self {
            sim,
            clock,
            renderer,
            phase: LoopPhase::Initializing,
            last_time: 0.0,
            input: TickInput::default(),
            frames: 0,
        }
    }

    /// Wait for the renderer, then begin ticking from the current time
    ///
    /// On error the loop stays in `Initializing` and never ticks.
    pub fn start(&mut self) -> Result<()> {
        if self.phase != LoopPhase::Initializing {
            return Ok(());
        }
        if let Err(e) = self.renderer.ready() {
            log::error!("Renderer failed to start: {}", e);
            return Err(e);
        }
        self.last_time = self.clock.now_ms();
        self.phase = LoopPhase::Running;
        log::info!("Session started");
        Ok(())
    }

    /// Buffer an input event for the next tick
    ///
    /// Events the simulation has no use for are dropped; returns whether
    /// `event` was kept.
    pub fn queue(&mut self, event: InputEvent) -> bool {
        if !self.sim.accepts(event) {
            log::debug!("Ignoring {:?}", event);
            return false;
        }
        event.apply(&mut self.input);
        true
    }

    /// Idle/demo mode
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.input.autopilot = enabled;
    }

    /// Run one tick; returns whether the host should schedule another
    pub fn frame(&mut self) -> bool {
        if self.phase != LoopPhase::Running {
            return false;
        }

        let now = self.clock.now_ms();
        let elapsed = now - self.last_time;
        self.last_time = now;
        let delta_ms = if elapsed.is_finite() && elapsed >= 0.0 {
            elapsed as f32
        } else {
            log::warn!("Clock went backwards by {:.3} ms, treating as 0", -elapsed);
            0.0
        };

        let running = self.sim.step(&self.input, delta_ms);
        self.input.clear_one_shots();

        self.renderer.draw(&self.sim.frame());
        self.frames += 1;

        if !running {
            self.phase = LoopPhase::Over;
            log::info!("Session over after {} frames", self.frames);
        }
        running
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    /// Ticks run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn sim(&self) -> &S {
        &self.sim
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
