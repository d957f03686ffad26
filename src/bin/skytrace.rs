use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use skytrace::{
    DistanceUnit, FixedRateScheduler, FlightPlan, FrameScheduler, MonotonicTime, MotionEngine,
    MotionRequest, MotionSettings, RecordingSurface, TimeSource, virtual_clock,
};

#[derive(Parser, Debug)]
#[command(name = "skytrace", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the flight plan (distance, average speed) without animating.
    Plan(MissionArgs),
    /// Run the animation and print the surface event log as JSON lines.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
struct MissionArgs {
    /// Start longitude, degrees (WGS84).
    #[arg(long)]
    start_lng: f64,

    /// Start latitude, degrees (WGS84).
    #[arg(long)]
    start_lat: f64,

    /// End longitude, degrees (WGS84).
    #[arg(long)]
    end_lng: f64,

    /// End latitude, degrees (WGS84).
    #[arg(long)]
    end_lat: f64,

    /// Planned duration of the motion, in seconds.
    #[arg(long)]
    duration: f64,

    /// Distance unit for the plan.
    #[arg(long, value_enum, default_value_t = UnitChoice::Miles)]
    unit: UnitChoice,
}

#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
struct SimulateArgs {
    #[command(flatten)]
    mission: MissionArgs,

    /// Tick rate of the frame loop.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Drive a virtual clock instead of real time (completes immediately).
    #[arg(long)]
    instant: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum UnitChoice {
    Meters,
    Kilometers,
    Miles,
    NauticalMiles,
    Feet,
}

impl UnitChoice {
    fn to_unit(self) -> DistanceUnit {
        match self {
            Self::Meters => DistanceUnit::Meters,
            Self::Kilometers => DistanceUnit::Kilometers,
            Self::Miles => DistanceUnit::Miles,
            Self::NauticalMiles => DistanceUnit::NauticalMiles,
            Self::Feet => DistanceUnit::Feet,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn request_from(args: &MissionArgs) -> MotionRequest {
    MotionRequest::new(
        args.start_lng,
        args.start_lat,
        args.end_lng,
        args.end_lat,
        args.duration,
    )
}

fn cmd_plan(args: MissionArgs) -> anyhow::Result<()> {
    let plan = FlightPlan::build(&request_from(&args), args.unit.to_unit())?;
    println!(
        "{}",
        serde_json::to_string_pretty(&plan).context("serialize plan")?
    );
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    if args.fps == 0 {
        anyhow::bail!("--fps must be > 0");
    }
    let frame = Duration::from_secs_f64(1.0 / f64::from(args.fps));
    let request = request_from(&args.mission);
    let settings = MotionSettings {
        unit: args.mission.unit.to_unit(),
        ..MotionSettings::default()
    };

    let surface = if args.instant {
        let (time, mut scheduler) = virtual_clock(frame);
        run_mission(request, settings, time, &mut scheduler)?
    } else {
        let mut scheduler = FixedRateScheduler::new(frame);
        run_mission(request, settings, MonotonicTime::new(), &mut scheduler)?
    };

    for event in surface.events() {
        println!(
            "{}",
            serde_json::to_string(event).context("serialize event")?
        );
    }
    eprintln!("{} surface events", surface.events().len());
    Ok(())
}

fn run_mission<T: TimeSource>(
    request: MotionRequest,
    settings: MotionSettings,
    time: T,
    scheduler: &mut dyn FrameScheduler,
) -> anyhow::Result<RecordingSurface> {
    let mut engine = MotionEngine::with_settings(RecordingSurface::new(), time, settings);
    engine.start(request)?;
    engine.run(scheduler)?;
    Ok(engine.into_surface())
}
