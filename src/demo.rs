//! Demo driver: one emitter, three inline observers, a fixed acceleration loop.
//!
//! Two closures listen on the warning channel and one on the fatal channel.
//! Both warning closures bump a shared counter, the way a handler would
//! capture a local variable from its registration scope.
//!
//! Observers cannot hold the output writer (they outlive this borrow), so
//! they append lines to a shared transcript that is flushed to the writer
//! after every step. Output order is therefore exactly notification order.
//!
//! # Example
//!
//! ```rust
//! use rs_overspeed::{config::Config, demo};
//!
//! let mut out = Vec::new();
//! let summary = demo::run(&Config::default(), &mut out).unwrap();
//!
//! assert_eq!(summary.final_speed, 220);
//! assert_eq!(summary.about_to_blow_count, 10);
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.ends_with("AboutToBlow event was fired 10 times.\n"));
//! ```

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::emitter::{SpeedState, SpeedThresholdEmitter};
use crate::events::SpeedEvent;
use crate::recorders::InvocationCounter;

/// Totals from a demo run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DemoSummary {
    /// Speed after the last step.
    pub final_speed: i64,
    /// Individual warning observer invocations (both observers counted).
    pub about_to_blow_count: usize,
    /// Steps that notified the warning channel.
    pub warn_notifications: usize,
    /// Steps that notified the fatal channel.
    pub fatal_notifications: usize,
}

type Transcript = Rc<RefCell<Vec<String>>>;

/// Run the demo scenario described by `config`, writing observer output to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<DemoSummary> {
    let mut car = SpeedThresholdEmitter::from_config(&config.emitter);
    let transcript: Transcript = Rc::default();
    let about_to_blow = InvocationCounter::new();

    register_observers(&mut car, &transcript, &about_to_blow);
    log::info!(
        "driving {} for {} steps of {:+}",
        car.name(),
        config.drive.steps,
        config.drive.increment
    );

    let mut summary = DemoSummary::default();
    for step in 1..=config.drive.steps {
        let report = car.accelerate(config.drive.increment);
        summary.warn_notifications += usize::from(report.warned);
        summary.fatal_notifications += usize::from(report.exploded);

        for line in transcript.borrow_mut().drain(..) {
            writeln!(out, "{}", line)
                .with_context(|| format!("writing output for step {}", step))?;
        }
    }

    summary.final_speed = car.current_speed();
    summary.about_to_blow_count = about_to_blow.count();

    writeln!(out).context("writing summary")?;
    writeln!(
        out,
        "AboutToBlow event was fired {} times.",
        summary.about_to_blow_count
    )
    .context("writing summary")?;
    out.flush().context("flushing output")?;

    log::info!("demo finished: {:?}", summary);
    Ok(summary)
}

fn register_observers(
    car: &mut SpeedThresholdEmitter,
    transcript: &Transcript,
    about_to_blow: &InvocationCounter,
) {
    // Ignores both arguments.
    let lines = transcript.clone();
    let counter = about_to_blow.clone();
    car.register_warn_observer(move |_: &SpeedState, _: &SpeedEvent| {
        counter.increment();
        lines.borrow_mut().push("Eek! Going too fast!".to_string());
    });

    let lines = transcript.clone();
    let counter = about_to_blow.clone();
    car.register_warn_observer(move |source: &SpeedState, event: &SpeedEvent| {
        counter.increment();
        let message = event.message(&source.name);
        lines
            .borrow_mut()
            .push(format!("Message from Car: {}", message));
    });

    let lines = transcript.clone();
    car.register_fatal_observer(move |source: &SpeedState, event: &SpeedEvent| {
        let message = event.message(&source.name);
        lines
            .borrow_mut()
            .push(format!("Fatal Message from Car: {}", message));
    });
}
