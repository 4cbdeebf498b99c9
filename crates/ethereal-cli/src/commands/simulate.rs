use std::str::FromStr;
use std::time::{Duration, Instant};

use anyhow::Result;
use serde::Serialize;

use ethereal_core::{AppConfig, Carousel, DotRow, TrackSurface, TweenTrack};

/// Simulated frame length
const FRAME: Duration = Duration::from_millis(16);

/// One scripted stimulus
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Next,
    Previous,
    Select(usize),
    Tick,
    Wait(Duration),
    Drag(f64),
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        match name {
            "next" => Ok(Step::Next),
            "prev" | "previous" => Ok(Step::Previous),
            "tick" => Ok(Step::Tick),
            "select" => required(name, arg, "an index")?
                .parse()
                .map(Step::Select)
                .map_err(|e| format!("bad index in `{}`: {}", s, e)),
            "wait" => required(name, arg, "milliseconds")?
                .parse()
                .map(|ms| Step::Wait(Duration::from_millis(ms)))
                .map_err(|e| format!("bad duration in `{}`: {}", s, e)),
            "drag" => required(name, arg, "a distance")?
                .parse()
                .map(Step::Drag)
                .map_err(|e| format!("bad distance in `{}`: {}", s, e)),
            _ => Err(format!(
                "unknown step `{}` (expected next, prev, select:N, tick, wait:MS, drag:DX)",
                s
            )),
        }
    }
}

fn required<'a>(name: &str, arg: Option<&'a str>, what: &str) -> Result<&'a str, String> {
    arg.ok_or_else(|| format!("`{}` needs {}, e.g. {}:2", name, what, name))
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Next => write!(f, "next"),
            Step::Previous => write!(f, "prev"),
            Step::Select(i) => write!(f, "select:{}", i),
            Step::Tick => write!(f, "tick"),
            Step::Wait(d) => write!(f, "wait:{}", d.as_millis()),
            Step::Drag(dx) => write!(f, "drag:{}", dx),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StepRecord {
    pub step: String,
    pub elapsed_ms: u64,
    pub cursor: usize,
    pub active: usize,
    pub offset: f64,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub items: usize,
    pub records: Vec<StepRecord>,
    /// Active indicator after each step
    pub indicators: Vec<usize>,
}

/// Headless carousel driven by a synthetic clock
struct Simulation {
    carousel: Carousel<usize, TweenTrack, DotRow>,
    start: Instant,
    now: Instant,
    transition: Duration,
}

impl Simulation {
    fn new(config: &AppConfig, items: usize, width: f64) -> Self {
        let start = Instant::now();
        let track = TweenTrack::new(width, config.carousel.easing);
        let mut carousel = Carousel::new(track, DotRow::new(), config.carousel.transition());
        let items: Vec<usize> = (0..items).collect();
        carousel.initialize(&items, config.carousel.auto_advance(), start);

        Self {
            carousel,
            start,
            now: start,
            transition: config.carousel.transition(),
        }
    }

    /// Advance the clock frame by frame for `duration`
    fn advance(&mut self, duration: Duration) {
        let end = self.now + duration;
        while self.now < end {
            self.now = (self.now + FRAME).min(end);
            self.carousel.update(self.now);
        }
    }

    /// Let any running transition finish
    fn settle(&mut self) {
        if self.carousel.is_animating() {
            self.advance(self.transition + FRAME);
        }
    }

    fn apply(&mut self, step: Step) {
        let now = self.now;
        match step {
            Step::Next => self.carousel.next(now),
            Step::Previous => self.carousel.previous(now),
            Step::Select(index) => self.carousel.select_indicator(index, now),
            Step::Tick => self.carousel.tick(now),
            Step::Wait(duration) => self.advance(duration),
            Step::Drag(dx) => {
                if self.carousel.drag_start(0.0) {
                    self.carousel.drag_move(dx);
                    self.carousel.drag_end(now);
                }
            }
        }
        self.settle();
    }

    fn record(&self, step: Step) -> StepRecord {
        StepRecord {
            step: step.to_string(),
            elapsed_ms: self.now.duration_since(self.start).as_millis() as u64,
            cursor: self.carousel.cursor(),
            active: self.carousel.active_indicator(),
            offset: self.carousel.surface().map_or(0.0, |s| s.offset()),
        }
    }
}

pub fn simulate(config: &AppConfig, items: usize, width: f64, steps: &[Step]) -> Report {
    let mut sim = Simulation::new(config, items, width);

    let records: Vec<StepRecord> = steps
        .iter()
        .map(|step| {
            sim.apply(*step);
            sim.record(*step)
        })
        .collect();

    Report {
        items: sim.carousel.len(),
        indicators: records.iter().map(|r| r.active).collect(),
        records,
    }
}

pub fn run(
    config: &AppConfig,
    items: Option<usize>,
    width: f64,
    steps: Vec<Step>,
    json: bool,
) -> Result<()> {
    let items = items.unwrap_or(config.carousel.testimonials.len());

    // Default script: one full lap
    let steps = if steps.is_empty() {
        vec![Step::Next; items]
    } else {
        steps
    };

    let report = simulate(config, items, width, &steps);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.items == 0 {
        println!("Carousel is empty, nothing to simulate.");
        return Ok(());
    }

    println!("Carousel with {} items\n", report.items);
    for record in &report.records {
        println!(
            "  {:<12} t={:>6}ms  cursor={}  active={}  offset={:.1}",
            record.step, record.elapsed_ms, record.cursor, record.active, record.offset
        );
    }

    let sequence: Vec<String> = report.indicators.iter().map(|i| i.to_string()).collect();
    println!("\nIndicators: {}", sequence.join(" "));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig::default()
    }

    #[test]
    fn test_parse_steps() {
        assert_eq!("next".parse::<Step>(), Ok(Step::Next));
        assert_eq!("previous".parse::<Step>(), Ok(Step::Previous));
        assert_eq!("select:3".parse::<Step>(), Ok(Step::Select(3)));
        assert_eq!(
            "wait:250".parse::<Step>(),
            Ok(Step::Wait(Duration::from_millis(250)))
        );
        assert_eq!("drag:-60".parse::<Step>(), Ok(Step::Drag(-60.0)));
        assert!("select".parse::<Step>().is_err());
        assert!("jump".parse::<Step>().is_err());
        assert!("wait:soon".parse::<Step>().is_err());
    }

    #[test]
    fn test_full_lap_indicator_sequence() {
        let report = simulate(&config(), 5, 100.0, &[Step::Next; 5]);
        assert_eq!(report.indicators, vec![1, 2, 3, 4, 0]);
        assert_eq!(report.records.last().map(|r| r.cursor), Some(1));
        assert_eq!(report.records.last().map(|r| r.offset), Some(-100.0));
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let report = simulate(&config(), 3, 100.0, &[Step::Previous]);
        assert_eq!(report.indicators, vec![2]);
        assert_eq!(report.records[0].cursor, 3);
    }

    #[test]
    fn test_select_and_wait_for_auto_advance() {
        let report = simulate(
            &config(),
            5,
            100.0,
            &[Step::Select(2), Step::Wait(Duration::from_millis(5000))],
        );
        assert_eq!(report.indicators, vec![2, 3]);
    }

    #[test]
    fn test_drag_past_midpoint() {
        // 30 units at double speed is 60% of a slot
        let report = simulate(&config(), 5, 100.0, &[Step::Drag(-30.0), Step::Drag(10.0)]);
        assert_eq!(report.indicators, vec![1, 1]);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let report = simulate(&config(), 0, 100.0, &[Step::Next, Step::Tick]);
        assert_eq!(report.items, 0);
        assert_eq!(report.indicators, vec![0, 0]);
    }

    #[test]
    fn test_report_serializes() {
        let report = simulate(&config(), 2, 100.0, &[Step::Next]);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"indicators\":[1]"));
    }
}
