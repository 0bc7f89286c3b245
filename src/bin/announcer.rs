//! Console entry point for the announcer.
//!
//! Counts up to the answer on stdout, keeps every diagnostic on stderr,
//! consumes no arguments, and always exits successfully.

use std::io;

use log::error;

use announcer::{logging, Announcer};

fn main() {
    if let Err(e) = logging::try_init("debug") {
        eprintln!("logger setup failed: {}", e);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = Announcer::default().announce(&mut out) {
        error!("announcement interrupted: {}", e);
    }
}
