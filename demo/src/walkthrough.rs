//! The walkthroughs run by each subcommand.

use core::hint::black_box;
use std::io;

use anyhow::{ensure, Result};
use collections::traceback::{self, Error, Frame, Traceable};
use collections::Set;
use colored::Colorize;
use log::debug;

use crate::Style;

// A function ending in a call may give its frame to the callee; the results go through
// `black_box` so that each level stays on the trace in release builds.
#[inline(never)]
fn level1() -> Result<(), Error> {
    black_box(level2())
}

#[inline(never)]
fn level2() -> Result<(), Error> {
    black_box(level3())
}

#[inline(never)]
fn level3() -> Result<(), Error> {
    black_box(do_something().wrap_err("level3 failed"))
}

fn do_something() -> io::Result<()> {
    Err(io::Error::new(io::ErrorKind::Other, "original error"))
}

fn compact(frame: &Frame) -> String {
    format!("at {} ({}:{})", frame.function, frame.file, frame.line)
}

/// Prints the message and the trace of a failure three calls deep.
pub fn traceback(style: Style) {
    let Err(err) = level1() else {
        return;
    };

    println!("{}", err.to_string().red().bold());
    println!("{}", "=== StackTrace ===".bold());
    print!("{}", err.trace());

    let frames = traceback::frames_of(Some(&err));
    debug!("{} frames recovered from the error", frames.len());

    if style == Style::Compact && !frames.is_empty() {
        println!();
        print!("{}", frames.format(compact).dimmed());
    }
}

/// Walks through the basic operations of a [`Set`].
///
/// # Errors
/// Fails if the set does not behave as expected.
pub fn set() -> Result<()> {
    let mut set = Set::new();
    ensure!(set.is_empty(), "set should be empty initially");

    set.insert(1);
    ensure!(!set.is_empty(), "set should not be empty after insertion");

    set.insert_all([2, 3]);
    ensure!(set.contains(&2), "set should contain 2");

    set.remove(&2);
    ensure!(!set.contains(&2), "set should not contain 2 after removal");

    let mut elements = set.to_vec();
    elements.sort_unstable();
    println!("{} {elements:?}", "set:".green().bold());

    Ok(())
}
