//! CLI application for controlling LIFX lights through the cloud API.
//!
//! Run with: LIFX_TOKEN=... cargo run --example lifx_cli -- --help
//!
//! A token can be created at <https://cloud.lifx.com/settings>.

use std::time::Duration;

use clap::{Parser, Subcommand};
use lifx_cloud_rs::{Brightness, Client, Direction, ReqwestTransport, Selector, State};

#[derive(Parser)]
#[command(name = "lifx-cli")]
#[command(about = "Control LIFX lights through the LIFX cloud API", long_about = None)]
struct Cli {
    /// LIFX personal access token
    #[arg(long, env = "LIFX_TOKEN", hide_env_values = true)]
    token: String,

    /// Light selector, e.g. "all", "label:Lamp", "group:Kitchen"
    #[arg(short, long, global = true, default_value = "all")]
    selector: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "10")]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all lights on the account
    List {
        /// Print the raw JSON body
        #[arg(long)]
        raw: bool,
    },

    /// Toggle the selected lights on/off
    Toggle {
        /// Toggle every light, ignoring the selector
        #[arg(long)]
        all: bool,
        /// Transition time in seconds
        #[arg(short, long, default_value = "0", value_parser = parse_seconds)]
        duration: Duration,
    },

    /// Set brightness (0.0-1.0)
    Brightness { level: f64 },

    /// Set the color (any LIFX color string: "blue", "#ff8800", "kelvin:3500")
    Color {
        color: String,
        /// Also power the lights on
        #[arg(long)]
        on: bool,
        /// Brightness to apply together with the color (0.0-1.0)
        #[arg(short, long)]
        brightness: Option<f64>,
    },

    /// Start the move effect on multizone lights
    Move {
        /// forward or backward
        #[arg(short, long, default_value = "forward")]
        direction: Direction,
        /// Seconds per effect cycle
        #[arg(short, long, default_value = "1", value_parser = parse_seconds)]
        period: Duration,
        /// Turn the lights on first
        #[arg(long)]
        power_on: bool,
    },

    /// Stop any running effect
    EffectsOff {
        /// Also turn the lights off
        #[arg(long)]
        power_off: bool,
    },

    /// Turn on, dim to 50%, cycle yellow/blue/white, turn off
    Demo,
}

/// Parse a non-negative, finite number of seconds.
fn parse_seconds(arg: &str) -> Result<Duration, String> {
    let secs: f64 = arg.parse().map_err(|e| format!("{e}"))?;
    Duration::try_from_secs_f64(secs).map_err(|e| format!("{arg}: {e}"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let transport = ReqwestTransport::with_timeout(Duration::from_secs(cli.timeout))?;
    let lifx = Client::new(transport, &cli.token)?;
    let selector = Selector::from(cli.selector);

    match cli.command {
        Commands::List { raw } => {
            if raw {
                println!("{}", serde_json::to_string_pretty(&lifx.list_lights()?)?);
            } else {
                let lights = lifx.lights()?;
                println!("Found {} light(s):", lights.len());
                for light in lights {
                    println!(
                        "  {:20}  {:14}  power: {:3}  connected: {}",
                        light.label,
                        light.id,
                        light.power.as_deref().unwrap_or("?"),
                        light.connected
                    );
                }
            }
        }

        Commands::Toggle { all, duration } => {
            println!("Toggling {}...", if all { "all" } else { selector.as_str() });
            let status = lifx.toggle_light(&selector, all, Some(duration))?;
            println!("Status: {}", status);
        }

        Commands::Brightness { level } => {
            let brightness = Brightness::create(level).ok_or("brightness must be 0.0-1.0")?;
            println!("Setting brightness to {} on {}...", level, selector);
            println!("Status: {}", lifx.set_brightness(&selector, &brightness)?);
        }

        Commands::Color {
            color,
            on,
            brightness,
        } => {
            let mut state = State::new();
            state.color(&color);
            if on {
                state.power(true);
            }
            if let Some(level) = brightness {
                state.brightness(
                    &Brightness::create(level).ok_or("brightness must be 0.0-1.0")?,
                );
            }
            println!("Setting color to {} on {}...", color, selector);
            println!("Status: {}", lifx.set_color(&selector, &state)?);
        }

        Commands::Move {
            direction,
            period,
            power_on,
        } => {
            println!("Starting move effect ({}) on {}...", direction, selector);
            let status = lifx.move_effect(&selector, direction, period, power_on)?;
            println!("Status: {}", status);
        }

        Commands::EffectsOff { power_off } => {
            println!("Stopping effects on {}...", selector);
            println!("Status: {}", lifx.effects_off(&selector, Some(power_off))?);
        }

        Commands::Demo => {
            println!("Turning on light...");
            lifx.toggle_light(&selector, false, None)?;

            let brightness = Brightness::create(0.5).ok_or("brightness must be 0.0-1.0")?;
            lifx.set_brightness(&selector, &brightness)?;

            for color in ["yellow", "blue", "white"] {
                println!("Setting light to: {}", color);
                let mut state = State::new();
                state.power(true).color(color).brightness(&brightness);
                lifx.set_color(&selector, &state)?;
            }

            println!("Turning off light...");
            lifx.toggle_light(&selector, false, None)?;
        }
    }

    Ok(())
}
