use super::{print_assignments, Service};

pub fn run(service: &mut Service, json: bool) -> anyhow::Result<()> {
    let schedule = service.list()?;
    if schedule.is_empty() && !json {
        println!("No users yet. Run: rota add <username>");
        return Ok(());
    }
    print_assignments(schedule.entries(), json)
}
