#![no_main]

use fcfs_calc::fcfs::Schedule;
use fcfs_calc::input::read_workload;
use fcfs_calc::policy::{Limits, ValidationPolicy};
use libfuzzer_sys::fuzz_target;
use std::io::{self, Cursor};

fuzz_target!(|data: &[u8]| {
    // Reading and scheduling must never panic, whatever the input
    for policy in [ValidationPolicy::Strict, ValidationPolicy::Lenient] {
        let limits = Limits::new(policy, 20);
        if let Ok(bursts) = read_workload(Cursor::new(data), &mut io::sink(), &limits) {
            let _ = Schedule::compute(&bursts);
        }
    }
});
