use super::{print_assignments, Service};
use chrono::NaiveDate;

pub fn run(
    service: &mut Service,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    json: bool,
) -> anyhow::Result<()> {
    let hits = service.lookup(from, to)?;
    if hits.is_empty() && !json {
        println!("No assignments in that period.");
        return Ok(());
    }
    print_assignments(&hits, json)
}
