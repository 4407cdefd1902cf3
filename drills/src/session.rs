//! Interactive sessions: the prompt/retry loops around each drill's core.
//!
//! Every session reads through a [`Console`] and never retries inside
//! [`crate::core`]; a rejected answer is reported and the prompt repeats.

use std::io::{BufRead, Write};

use anyhow::{Result, bail};
use tracing::{debug, info};

use crate::core::distinct::distinct_in_order;
use crate::core::likes::likes_message;
use crate::core::numbers::{join_numbers, parse_number};
use crate::core::reverse::reverse_name;
use crate::core::smallest::{ValidationError, smallest_n};
use crate::core::unique::{Collected, UniqueCollector};
use crate::exit_codes;
use crate::io::config::DrillsConfig;
use crate::io::console::Console;

/// How an interactive drill ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrillOutcome {
    /// The drill finished and printed this final line.
    Finished(String),
    /// Input ended before the drill could finish.
    InputClosed,
}

impl DrillOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            DrillOutcome::Finished(_) => exit_codes::OK,
            DrillOutcome::InputClosed => exit_codes::INPUT_CLOSED,
        }
    }
}

/// The drills offered by the menu, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drill {
    Likes,
    Reverse,
    Unique,
    Distinct,
    Smallest,
}

impl Drill {
    pub const ALL: [Drill; 5] = [
        Drill::Likes,
        Drill::Reverse,
        Drill::Unique,
        Drill::Distinct,
        Drill::Smallest,
    ];

    /// Resolve a 1-based menu choice.
    pub fn from_choice(choice: &str) -> Option<Drill> {
        let index: usize = choice.trim().parse().ok()?;
        index
            .checked_sub(1)
            .and_then(|index| Drill::ALL.get(index).copied())
    }

    pub fn title(self) -> &'static str {
        match self {
            Drill::Likes => "Who likes your post",
            Drill::Reverse => "Reverse your name",
            Drill::Unique => "Sort unique numbers",
            Drill::Distinct => "Drop repeated numbers",
            Drill::Smallest => "Smallest numbers of a list",
        }
    }
}

/// Print the menu, read a choice and run that drill.
pub fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &DrillsConfig,
) -> Result<DrillOutcome> {
    console.say("Array & List drills")?;
    for (number, drill) in (1..).zip(Drill::ALL) {
        console.say(&format!("{number}. {}", drill.title()))?;
    }
    let Some(choice) = console.ask(&format!("Pick from 1 to {}:", Drill::ALL.len()))? else {
        return Ok(DrillOutcome::InputClosed);
    };
    let Some(drill) = Drill::from_choice(&choice) else {
        bail!(
            "unknown drill '{}': pick from 1 to {}",
            choice.trim(),
            Drill::ALL.len()
        );
    };
    info!(?drill, "drill selected");
    run_drill(drill, console, config)
}

pub fn run_drill<R: BufRead, W: Write>(
    drill: Drill,
    console: &mut Console<R, W>,
    config: &DrillsConfig,
) -> Result<DrillOutcome> {
    match drill {
        Drill::Likes => run_likes(console),
        Drill::Reverse => run_reverse(console),
        Drill::Unique => run_unique(console, config.unique.count),
        Drill::Distinct => run_distinct(console),
        Drill::Smallest => run_smallest(console, config.smallest.min_count, config.smallest.k),
    }
}

/// Ask for a comma-separated list until it validates, then print its `k`
/// smallest values.
pub fn run_smallest<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    min_count: usize,
    k: usize,
) -> Result<DrillOutcome> {
    let prompt = format!("Please enter at least {min_count} numbers:");
    loop {
        let Some(line) = console.ask(&prompt)? else {
            return Ok(DrillOutcome::InputClosed);
        };
        match smallest_n(&line, min_count, k) {
            Ok(smallest) => return finish(console, join_numbers(&smallest)),
            Err(err) => {
                debug!(%err, "list rejected");
                console.say(&invalid_list_message(&err, min_count))?;
            }
        }
    }
}

/// Collect names until an empty line, then print who likes the post.
pub fn run_likes<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<DrillOutcome> {
    let mut names = Vec::new();
    while let Some(name) = console.ask("Please enter a name (or just press Enter to finish):")? {
        let name = name.trim();
        if name.is_empty() {
            break;
        }
        names.push(name.to_string());
    }
    debug!(count = names.len(), "names collected");
    finish(console, likes_message(&names).unwrap_or_default())
}

pub fn run_reverse<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<DrillOutcome> {
    let Some(name) = console.ask("Please enter your name:")? else {
        return Ok(DrillOutcome::InputClosed);
    };
    finish(console, reverse_name(&name))
}

/// Ask for numbers one at a time until `count` unique ones were entered,
/// then print them sorted.
pub fn run_unique<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    count: usize,
) -> Result<DrillOutcome> {
    let mut collector = UniqueCollector::new(count);
    loop {
        let Some(answer) = console.ask("Please enter a number:")? else {
            return Ok(DrillOutcome::InputClosed);
        };
        let number = match parse_number(&answer) {
            Ok(number) => number,
            Err(err) => {
                console.say(&format!("{err}."))?;
                continue;
            }
        };
        match collector.offer(number) {
            Ok(Collected::Complete(sorted)) => return finish(console, join_numbers(&sorted)),
            Ok(Collected::Pending { remaining }) => debug!(number, remaining, "number accepted"),
            Err(duplicate) => console.say(&format!("{duplicate}."))?,
        }
    }
}

/// Read numbers until an empty line, then print each value once in entry
/// order.
pub fn run_distinct<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<DrillOutcome> {
    let mut numbers = Vec::new();
    while let Some(answer) =
        console.ask("Please enter a number (or just press Enter to finish):")?
    {
        if answer.trim().is_empty() {
            break;
        }
        match parse_number(&answer) {
            Ok(number) => numbers.push(number),
            Err(err) => console.say(&format!("{err}."))?,
        }
    }
    debug!(count = numbers.len(), "numbers collected");
    finish(console, join_numbers(&distinct_in_order(&numbers)))
}

fn finish<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    line: String,
) -> Result<DrillOutcome> {
    console.say(&line)?;
    Ok(DrillOutcome::Finished(line))
}

fn invalid_list_message(err: &ValidationError, min_count: usize) -> String {
    match err {
        ValidationError::TooFewNumbers { .. } => {
            format!("Invalid List. At least {min_count} numbers.")
        }
        ValidationError::NotANumber { token } => {
            format!("Invalid List. '{token}' is not a number.")
        }
    }
}
