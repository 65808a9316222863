//! Demo driver: spin every variant, or run one variant through a scripted
//! workload with messages, progress, and interleaved log output.

use std::io::{self, Write};
use std::time::Duration;

use clap::Parser;

use whirl::{Config, ElementKind, Level, Spinner, Variant, catalog};

#[derive(Parser)]
#[command(name = "whirl", version, about = "A colorful terminal spinner, animated in place.")]
struct Cli {
    /// Spinner variant (see --list for the catalog)
    #[arg(short, long, default_value = "snake2")]
    variant: Variant,

    /// Refresh interval in milliseconds (default: the variant's own cadence)
    #[arg(short, long)]
    interval: Option<u64>,

    /// How long to run the demo, in seconds
    #[arg(short, long, default_value_t = 6)]
    duration: u64,

    /// Static prefix written before the spinner
    #[arg(short, long, default_value = "")]
    prefix: String,

    /// Play the frame cycle backwards
    #[arg(short, long, default_value_t = false)]
    reverse: bool,

    /// Disable coloring
    #[arg(long, default_value_t = false)]
    no_color: bool,

    /// List all variants with their frames and exit
    #[arg(short, long, default_value_t = false)]
    list: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list {
        list_variants();
        return Ok(());
    }

    let spinner = Spinner::new(Config {
        variant: cli.variant,
        interval: cli.interval.map(Duration::from_millis),
        prefix: cli.prefix,
        reversed: cli.reverse,
        color_level: if cli.no_color {
            Level::None
        } else {
            Level::Color256
        },
        order: [ElementKind::Char, ElementKind::Message, ElementKind::Progress],
        final_message: "Done!\n".to_string(),
        ..Config::default()
    })?;

    let messages = [
        "initializing",
        "starting",
        "long message: this message continues much further than the limit allows",
        "gathering data",
        "short",
        "processing",
    ];

    spinner.start();

    let steps = messages.len() as u64;
    for (i, message) in messages.iter().enumerate() {
        // interleave our own output with the animation
        spinner.erase();
        println!("step {}: {message}", i + 1);
        io::stdout().flush()?;
        spinner.current();

        spinner.message(message);
        spinner.progress((i + 1) as f64 / steps as f64);
        tokio::time::sleep(Duration::from_millis(cli.duration * 1000 / steps)).await;
    }

    spinner.stop().await;
    Ok(())
}

fn list_variants() {
    let sets = catalog();
    for variant in Variant::all() {
        let set = &sets[variant];
        println!(
            "{:<18} {:>4}ms  {}",
            variant.name(),
            set.interval.as_millis(),
            set.frames.join(" ")
        );
    }
}
