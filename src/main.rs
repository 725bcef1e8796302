//! Tile Platformer entry point
//!
//! Headless driver: runs the simulation at a fixed 30 Hz step with a simple
//! autopilot (hold right, jump when stuck) and prints the final viewport as
//! text. Rendering and real audio belong to a host engine.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use glam::IVec2;

use tile_platformer::audio::{AudioSink, LogSink};
use tile_platformer::consts::*;
use tile_platformer::sim::{
    GameEvent, GamePhase, GameState, TileKind, demo_level, parse_ascii, tick,
};
use tile_platformer::{AudioManager, ButtonsHeld, Controls, Settings};

/// Command line options
#[derive(Debug, Clone, PartialEq)]
struct Options {
    settings: Option<PathBuf>,
    level: Option<PathBuf>,
    frames: u64,
    trace: bool,
    mute: bool,
    volume: Option<f32>,
    sfx_volume: Option<f32>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            settings: None,
            level: None,
            frames: 3000,
            trace: false,
            mute: false,
            volume: None,
            sfx_volume: None,
        }
    }
}

impl Options {
    fn parse(args: &[String]) -> Result<Self> {
        let mut options = Options::default();
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--settings" => {
                    let v = args.next().context("missing value for --settings")?;
                    options.settings = Some(v.into());
                }
                "--level" => {
                    let v = args.next().context("missing value for --level")?;
                    options.level = Some(v.into());
                }
                "--frames" => {
                    let v = args.next().context("missing value for --frames")?;
                    options.frames = v
                        .parse()
                        .map_err(|_| anyhow!("invalid --frames value: {}", v))?;
                }
                "--volume" => {
                    let v = args.next().context("missing value for --volume")?;
                    options.volume = Some(parse_volume(v)?);
                }
                "--sfx-volume" => {
                    let v = args.next().context("missing value for --sfx-volume")?;
                    options.sfx_volume = Some(parse_volume(v)?);
                }
                "--mute" => options.mute = true,
                "--trace" => options.trace = true,
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
        }
        Ok(options)
    }

    /// Command line audio overrides on top of the loaded settings
    fn apply_audio<S: AudioSink>(&self, audio: &mut AudioManager<S>) {
        if let Some(vol) = self.volume {
            audio.set_master_volume(vol);
        }
        if let Some(vol) = self.sfx_volume {
            audio.set_sfx_volume(vol);
        }
        if self.mute {
            audio.set_muted(true);
        }
    }
}

fn parse_volume(v: &str) -> Result<f32> {
    v.parse::<f32>()
        .ok()
        .filter(|vol| vol.is_finite())
        .ok_or_else(|| anyhow!("invalid volume: {}", v))
}

/// Hold right; tap jump whenever the player did not advance
struct Autopilot {
    last_x: i32,
    jump_next: bool,
}

impl Autopilot {
    fn buttons(&mut self, state: &GameState) -> ButtonsHeld {
        let x = state.player.pos.x;
        let stuck = x == self.last_x;
        self.last_x = x;

        let won = state.phase == GamePhase::Won;
        // Release jump every other frame so each attempt is a fresh press
        let up = stuck && self.jump_next;
        self.jump_next = !up;

        ButtonsHeld {
            right: !won,
            up,
            quit: won,
            ..Default::default()
        }
    }
}

/// Text view of the viewport: tiles plus the player as `@`
fn render_text(state: &GameState) -> String {
    let grid = state.grid();
    let scroll = state.camera.offset();
    let columns = state.camera.viewport_width / TILE_SIZE;
    let first = tile_platformer::pixel_to_tile(scroll.x);
    let center = state.player.pos + IVec2::new(PLAYER_WIDTH / 2, PLAYER_HEIGHT / 2);
    let player = (
        tile_platformer::pixel_to_tile(center.x),
        tile_platformer::pixel_to_tile(center.y),
    );

    let mut out = String::new();
    for row in 0..grid.height() {
        for column in first..first + columns {
            let ch = if (column, row) == player {
                '@'
            } else {
                match grid.tile_at(column, row) {
                    TileKind::Empty => '.',
                    TileKind::Solid => '#',
                    TileKind::OneWaySolid => '=',
                    TileKind::Goal => 'G',
                    TileKind::Decoration => '>',
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

fn run(options: &Options) -> Result<()> {
    let settings = match &options.settings {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };

    let grid = match &options.level {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("could not read level {}", path.display()))?;
            parse_ascii(&text).with_context(|| format!("bad level {}", path.display()))?
        }
        None => demo_level(),
    };
    log::info!("Stage {}x{} tiles", grid.width(), grid.height());

    let mut state = GameState::new(grid, &settings);
    let mut audio = AudioManager::new(LogSink, &settings.audio);
    options.apply_audio(&mut audio);
    let mut controls = Controls::new();
    let mut autopilot = Autopilot {
        last_x: i32::MIN,
        jump_next: true,
    };

    for frame in 0..options.frames {
        let now = frame as f64 * SIM_DT;
        let input = controls.sample(autopilot.buttons(&state));
        let out = tick(&mut state, &input, now);

        if options.trace {
            match serde_json::to_string(&out.render) {
                Ok(line) => println!("{}", line),
                Err(e) => log::warn!("Could not trace frame {}: {}", frame, e),
            }
        }

        for event in out.events {
            match event {
                GameEvent::Jumped(sound) => audio.play(sound),
                GameEvent::Won => {
                    println!("You Won!!! Thanks for playing! (frame {})", out.render.frame)
                }
                GameEvent::QuitRequested => {
                    print!("{}", render_text(&state));
                    return Ok(());
                }
            }
        }
    }

    log::info!("Stopped after {} frames", options.frames);
    print!("{}", render_text(&state));
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Tile Platformer (headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = Options::parse(&args)?;
    run(&options)
}
