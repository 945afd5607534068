use super::{print_assignments, Service};

pub fn get(service: &mut Service, username: &str, json: bool) -> anyhow::Result<()> {
    let assignment = service.get(username)?;
    print_assignments(std::slice::from_ref(&assignment), json)
}

pub fn add(service: &mut Service, username: &str, json: bool) -> anyhow::Result<()> {
    let schedule = service.add_user(username)?;
    if !json {
        let date = schedule.get(username)?.date;
        println!("Added {username}, scheduled for {date}");
        return Ok(());
    }
    print_assignments(schedule.entries(), json)
}

pub fn remove(service: &mut Service, username: &str) -> anyhow::Result<()> {
    service.remove_user(username)?;
    println!("Removed {username}");
    Ok(())
}
