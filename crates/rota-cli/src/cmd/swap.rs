use super::{print_assignments, Service};

pub fn run(service: &mut Service, user_a: &str, user_b: &str, json: bool) -> anyhow::Result<()> {
    let schedule = service.swap(user_a, user_b)?;
    if !json {
        println!("Swapped {user_a} and {user_b}:");
    }
    print_assignments(schedule.entries(), json)
}
