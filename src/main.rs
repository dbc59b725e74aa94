//! Headless driver: steps the simulation at 60 Hz with a scripted player,
//! loading `assets/levels/level{N}.json` as phase transitions come in.

use bevy::app::{AppExit, ScheduleRunnerPlugin};
use bevy::ecs::message::MessageWriter;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use std::path::PathBuf;
use std::time::Duration;

use internus::core::{EntityRole, FrameSet, PAUSE_LOADING, SimulationGate};
use internus::level::{LevelLoadQueue, read_level_file};
use internus::{FrameInput, HorizontalIntent, OutboundEvents, SimEvent, SimulationPlugin};

const LEVEL_DIR: &str = "assets/levels";
const CONFIG_FILE: &str = "assets/data/simulation.ron";
const FIRST_PHASE: u32 = 1;
/// Frames between autopilot jump presses
const JUMP_INTERVAL: u64 = 45;
/// Stop after ten minutes of simulated time
const MAX_FRAMES: u64 = 60 * 60 * 10;

#[derive(Resource, Debug)]
struct Driver {
    level_dir: PathBuf,
    frame: u64,
}

impl Driver {
    fn level_path(&self, phase: u32) -> PathBuf {
        self.level_dir.join(format!("level{}.json", phase))
    }

    /// Queue the level file for `phase`. Returns false when it cannot be read.
    fn queue_phase(&self, phase: u32, gate: &mut SimulationGate, queue: &mut LevelLoadQueue) -> bool {
        let path = self.level_path(phase);
        match read_level_file(&path) {
            Ok(json) => {
                gate.pause(PAUSE_LOADING);
                queue.request(path.display().to_string(), json);
                true
            }
            Err(e) => {
                warn!("{}", e);
                false
            }
        }
    }
}

fn main() {
    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 60.0,
            ))),
        )
        .add_plugins(LogPlugin::default())
        .add_plugins(SimulationPlugin::with_config_file(CONFIG_FILE))
        .insert_resource(Driver {
            level_dir: PathBuf::from(LEVEL_DIR),
            frame: 0,
        })
        .add_systems(Startup, queue_first_level)
        .add_systems(Update, drive_frame.after(FrameSet::Outbound))
        .run();
}

fn queue_first_level(
    driver: Res<Driver>,
    mut gate: ResMut<SimulationGate>,
    mut queue: ResMut<LevelLoadQueue>,
    mut exit: MessageWriter<AppExit>,
) {
    if !driver.queue_phase(FIRST_PHASE, &mut gate, &mut queue) {
        error!("No level for phase {}", FIRST_PHASE);
        exit.write(AppExit::error());
    }
}

/// React to this frame's outcomes, then script the next frame's input.
fn drive_frame(
    mut driver: ResMut<Driver>,
    mut outbound: ResMut<OutboundEvents>,
    mut input: ResMut<FrameInput>,
    mut gate: ResMut<SimulationGate>,
    mut queue: ResMut<LevelLoadQueue>,
    mut exit: MessageWriter<AppExit>,
) {
    for event in outbound.drain() {
        match event {
            SimEvent::LevelLoaded { id, name } => info!("Now playing level {} '{}'", id, name),
            SimEvent::LevelLoadFailed { reason } => {
                error!("Level rejected: {}", reason);
                exit.write(AppExit::error());
            }
            SimEvent::PhaseTransition {
                from_level,
                next_phase,
            } => {
                if !driver.queue_phase(next_phase, &mut gate, &mut queue) {
                    info!(
                        "Level {} cleared and no phase {} exists, run complete",
                        from_level, next_phase
                    );
                    exit.write(AppExit::Success);
                }
            }
            SimEvent::EntityDied {
                role: EntityRole::Player,
                ..
            } => {
                info!("Player died after {} frames", driver.frame);
                exit.write(AppExit::Success);
            }
            SimEvent::EntityDied { entity, role } => debug!("{:?} {:?} died", role, entity),
        }
    }

    if gate.is_paused() {
        return;
    }

    driver.frame += 1;
    if driver.frame >= MAX_FRAMES {
        info!("Frame limit reached");
        exit.write(AppExit::Success);
    }

    let next = FrameInput::moving(HorizontalIntent::Right);
    *input = if driver.frame % JUMP_INTERVAL == 0 {
        next.with_jump()
    } else {
        next
    };
}
