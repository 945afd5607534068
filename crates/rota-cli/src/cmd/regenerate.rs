use super::{print_assignments, Service};

pub fn run(service: &mut Service, json: bool) -> anyhow::Result<()> {
    let schedule = service.regenerate()?;
    if !json {
        println!("Started a new rotation:");
    }
    print_assignments(schedule.entries(), json)
}
