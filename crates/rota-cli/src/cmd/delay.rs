use super::{print_assignments, Service};

pub fn run(service: &mut Service, all: bool, days: u32, json: bool) -> anyhow::Result<()> {
    let schedule = service.delay(all, days)?;
    if !json {
        let what = if all { "all upcoming assignments" } else { "the next assignment" };
        println!("Delayed {what} by {days} day(s):");
    }
    print_assignments(schedule.entries(), json)
}
