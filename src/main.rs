// SPDX-License-Identifier: MPL-2.0
//! Interactive driver for a single video block.
//!
//! Binds a widget to the standard template and a simulated media element,
//! then reads one command per line from stdin:
//!
//! ```text
//! load <secs>       metadata arrives, media can play
//! stall | resume    buffering stops / resumes
//! event <name>      inject a raw media event (e.g. `waiting`)
//! click <selector>  click the first element matching <selector>
//! move              pointer movement
//! scrub <0-100>     drag the scrubber
//! advance <secs>    let playback run
//! wait <ms>         let real time pass (idle timer)
//! show              print the container markup
//! ```

use std::path::Path;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use video_block::config::{self, Config};
use video_block::domain::video::{IdleTimeout, Volume};
use video_block::markup::Selector;
use video_block::media::{MediaEvent, SimulatedMedia};
use video_block::scheduler::{TimerId, TokioScheduler};
use video_block::widget::{template, VideoBlock};

type Block = VideoBlock<SimulatedMedia, TokioScheduler>;
type BoxError = Box<dyn std::error::Error + Send + Sync>;

struct Flags {
    config: Option<String>,
    idle_ms: Option<u64>,
    volume: Option<f64>,
}

const HELP: &str = "\
Usage: video-block [--config <path>] [--idle-ms <ms>] [--volume <0-1>]

Reads widget commands from stdin; see the crate docs for the command list.";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config: args.opt_value_from_str("--config")?,
        idle_ms: args.opt_value_from_str("--idle-ms")?,
        volume: args.opt_value_from_str("--volume")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn load_config(flags: &Flags) -> video_block::error::Result<Config> {
    let mut config = match &flags.config {
        Some(path) => config::load_from_path(Path::new(path))?,
        None => config::load()?,
    };
    if let Some(idle_ms) = flags.idle_ms {
        config.idle_timeout_ms = Some(idle_ms);
    }
    Ok(config)
}

fn status(block: &Block) -> String {
    let classes = block.container().classes().join(" ");
    format!(
        "[{classes}] {} / {} scrubber={}",
        block.elapsed_text(),
        block.duration_text(),
        block.scrubber_value()
    )
}

fn drain_timers(block: &mut Block, fired: &mut mpsc::UnboundedReceiver<TimerId>) {
    while let Ok(id) = fired.try_recv() {
        block.handle_idle_timeout(id);
    }
}

async fn wait(block: &mut Block, fired: &mut mpsc::UnboundedReceiver<TimerId>, ms: u64) {
    let sleep = tokio::time::sleep(Duration::from_millis(ms));
    tokio::pin!(sleep);

    loop {
        tokio::select! {
            _ = &mut sleep => break,
            Some(id) = fired.recv() => block.handle_idle_timeout(id),
        }
    }
}

async fn run_command(
    block: &mut Block,
    fired: &mut mpsc::UnboundedReceiver<TimerId>,
    line: &str,
) -> Result<(), BoxError> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(());
    };
    let argument = words.collect::<Vec<_>>().join(" ");

    match command {
        "load" => block.media_mut().load(argument.parse()?),
        "stall" => block.media_mut().stall(),
        "resume" => block.media_mut().resume_buffering(),
        "event" => block.handle_media_event(argument.parse::<MediaEvent>()?),
        "click" => {
            let selector = Selector::parse(&argument)?;
            let Some(target) = block.container().query_selector(&selector) else {
                println!("no element matches `{argument}`");
                return Ok(());
            };
            let action = block.handle_click(&target)?;
            println!("click -> {action:?}");
        }
        "move" => block.handle_pointer_move(),
        "scrub" => block.handle_scrub(argument.parse()?),
        "advance" => block.media_mut().advance(argument.parse()?),
        "wait" => wait(block, fired, argument.parse()?).await,
        "show" => println!("{}", block.container()),
        other => {
            println!("unknown command `{other}`");
            return Ok(());
        }
    }

    block.pump_media_events();
    drain_timers(block, fired);
    println!("{}", status(block));
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, Registry};

    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    let subscriber = Registry::default().with(env_filter).with(
        fmt::Layer::default()
            .with_writer(std::io::stderr)
            .with_ansi(false),
    );
    tracing::subscriber::set_global_default(subscriber)?;

    let Some(flags) = parse_flags()? else {
        println!("{HELP}");
        return Ok(());
    };

    let config = load_config(&flags)?;
    let idle_timeout: IdleTimeout = config.idle_timeout();
    let volume = flags.volume.map(Volume::new).unwrap_or_default();

    let (scheduler, mut fired) = TokioScheduler::new();
    let mut block = VideoBlock::bind(template(), SimulatedMedia::new(volume), scheduler, idle_timeout)?;
    println!("{}", status(&block));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if let Err(err) = run_command(&mut block, &mut fired, line.trim()).await {
            println!("error: {err}");
        }
    }

    Ok(())
}
