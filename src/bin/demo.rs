use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use crescent::animation::Animation;
use crescent::clock::FrameClock;
use crescent::color::Color;
use crescent::config::Config;
use crescent::events::{EventHost, EventRegistry};
use crescent::logging;

#[derive(Parser)]
#[command(
    name = "demo",
    about = "Drive the crescent utilities against a simulated host"
)]
struct Cli {
    /// Number of simulated frames to run
    #[arg(long, default_value_t = 120)]
    frames: u32,

    /// Fade duration in seconds (default comes from the config file)
    #[arg(long)]
    duration: Option<f32>,
}

/// Stand-in for the host's native event source
#[derive(Default)]
struct SimulatedHost {
    hooks: Vec<String>,
}

impl EventHost for SimulatedHost {
    fn install_hook(&mut self, event: &str) {
        info!(target: "demo", "Host hook installed: {}", event);
        self.hooks.push(event.to_string());
    }
}

fn main() {
    logging::init("info");
    logging::install_panic_hook();

    let cli = Cli::parse();

    let config = Config::load(&Config::config_path()).unwrap_or_else(|_| {
        info!("No config found, using defaults");
        Config::default()
    });
    let duration = cli.duration.unwrap_or(config.animation.default_duration);

    // Payload is the frame time the "host" measured for this tick
    let mut registry: EventRegistry<f32> = EventRegistry::new();

    let fade = Rc::new(RefCell::new(Animation::new(duration)));
    let anim = fade.clone();
    registry.subscribe("Draw", move |frame_time| {
        let mut anim = anim.borrow_mut();
        anim.update(true, *frame_time);

        let color = anim.lerp_color(Color::TRANSPARENT, Color::WHITE);
        info!(
            target: "demo",
            "Draw: weight={:.3} eased={:.3} alpha={:.1}",
            anim.weight(),
            anim.value(),
            color.a
        );
    });

    let mut host = SimulatedHost::default();
    registry.bind_hooks(&mut host);
    let hooks = host.hooks.clone();

    let mut clock = FrameClock::new();
    for _ in 0..cli.frames {
        std::thread::sleep(Duration::from_millis(4));
        let frame_time = clock.tick();

        // The real host fires each hooked event once per tick
        for hook in &hooks {
            registry.dispatch(hook, &frame_time);
        }
    }

    info!(
        target: "demo",
        "Done: {} frames in {:.2}s, final weight {:.3}",
        cli.frames,
        clock.elapsed(),
        fade.borrow().weight()
    );
}
