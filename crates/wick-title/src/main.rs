//! Wick sample title - a spinning cube driven by the phased runtime
//!
//! Wires the six-phase scheduler, the stage/set/role presentation chain
//! and the cube actor together, then drives frames: dispatch delayed
//! events, run every phase, check the exit flag.
//!
//! Usage:
//!   wick-title [--config <title.toml>] [--frames N]

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use wick_cast::{Actor, Role};
use wick_core::encode_floats;
use wick_runtime::{EventDispatcher, ExitFlag, Phase, Scheduler, TitleClock, TitleEvent};
use wick_stage::{CubeRole, Stage};
use wick_title::{CubeActor, TitleConfig};

#[derive(Parser)]
#[command(name = "wick-title")]
#[command(about = "Wick sample title - spin a cube through the phased runtime")]
struct Args {
    /// Path to the title configuration file
    #[arg(long, default_value = "title.toml")]
    config: String,

    /// Override the configured frame cap
    #[arg(long)]
    frames: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let args = Args::parse();

    let config = TitleConfig::load_or_default(Path::new(&args.config))
        .context("failed to load title configuration")?;
    let max_frames = args.frames.unwrap_or(config.max_frames);

    // Delayed-event dispatch and the cooperative exit flag. The quit
    // callback is the title's shutdown hook.
    let mut dispatcher = EventDispatcher::new();
    let exit = ExitFlag::new();
    let on_quit = exit.clone();
    dispatcher.install(TitleEvent::Quit, Box::new(move |_| on_quit.request_exit()));

    // The scheduler runs six fixed phases in order. The handles are handed
    // to whoever registers work; nothing reaches for a global phase.
    let mut scheduler = Scheduler::new(6);
    let actor_phase = scheduler.add_phase(Phase::new("actor"))?;
    let _post_actor_phase = scheduler.add_phase(Phase::new("post-actor"))?;
    let _pre_role_phase = scheduler.add_phase(Phase::new("pre-role"))?;
    let _role_phase = scheduler.add_phase(Phase::new("role"))?;
    let set_phase = scheduler.add_phase(Phase::new("set"))?;
    let stage_phase = scheduler.add_phase(Phase::new("stage"))?;

    // Presentation chain: stage owns the set; the cube role attaches to
    // the set and is composed during the stage phase.
    let stage = Stage::new(config.stage.width, config.stage.height);
    let cube_role = Arc::new(CubeRole::new());
    cube_role.init().context("failed to initialize cube role")?;
    stage.set().borrow_mut().attach_role(cube_role.clone());
    stage.register_phase_tasks(&mut scheduler, set_phase, stage_phase)?;

    // The actor, with its startup properties in the serialized wire form
    // a resource loader would hand over.
    let actor = Rc::new(RefCell::new(CubeActor::with_spin_period(
        config.spin_period_ms,
    )));
    {
        let mut actor = actor.borrow_mut();
        actor.bind_role(cube_role.clone());
        actor.set_property("position", &encode_floats(&[0.0, 0.0, 0.0]))?;
        actor.set_property("orientation", &encode_floats(&[0.0, 1.0, 1.0, 1.0]))?;
        actor.set_property("scale", &encode_floats(&[1.0, 1.0, 1.0]))?;
    }

    let clock = TitleClock::new();
    CubeActor::init(&actor, &mut scheduler, actor_phase, clock)
        .context("failed to initialize cube actor")?;

    log::info!(
        "running {}x{} stage, one revolution per {} ms",
        stage.width(),
        stage.height(),
        config.spin_period_ms
    );

    // The frame driver: dispatch delayed events, then run the scheduled
    // phases, until the exit flag is observed.
    let mut frame = 0u64;
    while !exit.should_exit() {
        dispatcher.dispatch();
        scheduler.run().context("frame aborted")?;

        frame += 1;
        if frame == max_frames {
            dispatcher.post(TitleEvent::Quit);
        }
    }
    log::info!("exit requested after {frame} frames");

    actor.borrow_mut().dispose(&mut scheduler, actor_phase)?;
    cube_role.dispose();
    Ok(())
}
