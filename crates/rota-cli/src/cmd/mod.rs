pub mod delay;
pub mod lookup;
pub mod regenerate;
pub mod show;
pub mod swap;
pub mod user;

use rota_core::clock::SystemClock;
use rota_core::service::ScheduleService;
use rota_core::store::FileStore;
use rota_core::Assignment;

pub type Service = ScheduleService<FileStore, SystemClock>;

/// Print assignments as the `{"assignments": [...]}` JSON object the
/// server emits, or as a USER/DATE table for humans.
pub(crate) fn print_assignments(entries: &[Assignment], json: bool) -> anyhow::Result<()> {
    if json {
        let payload = serde_json::json!({ "assignments": entries });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }
    if entries.is_empty() {
        println!("(no assignments)");
        return Ok(());
    }
    // Dates are fixed-width ISO-8601, so only the user column needs sizing.
    let user_width = entries
        .iter()
        .map(|a| a.user.len())
        .max()
        .unwrap_or(0)
        .max("USER".len());
    println!("{:user_width$}  DATE", "USER");
    println!("{}  {}", "-".repeat(user_width), "-".repeat(10));
    for a in entries {
        println!("{:user_width$}  {}", a.user, a.date);
    }
    Ok(())
}
