use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;

use crate::error::AppError;
use crate::state::AppState;
use rota_core::Assignment;

/// POST /webhook — fulfillment endpoint for a conversational assistant.
///
/// The request carries a `queryResult` with a resolved `action` and its
/// `parameters`; each action maps onto one engine operation and the
/// response is plain fulfillment text (or one message per assignment
/// for list-shaped answers).
pub async fn fulfill(
    State(app): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, AppError> {
    let query = &body["queryResult"];
    let action = query["action"].as_str().unwrap_or_default();
    let params = &query["parameters"];

    let mut svc = app.service.lock().await;
    let response = match action {
        "next" => {
            let hits = svc.lookup(None, None)?;
            match hits.first() {
                Some(a) => text(format!("The next person is {} ({}).", a.user, a.date)),
                None => text("There is no upcoming assignment.".to_string()),
            }
        }
        "get-assignments-for-period" => {
            let period = &params["date-period"];
            let begin = parse_period_date(&period["startDate"])?;
            let end = parse_period_date(&period["endDate"])?;
            let hits = svc.lookup(Some(begin), Some(end))?;
            messages(&hits)
        }
        "show-all" => {
            let schedule = svc.list()?;
            if schedule.is_empty() {
                text("There are no users added yet.".to_string())
            } else {
                messages(schedule.entries())
            }
        }
        "lookup-user" => {
            let username = person_name(&params["person"])?;
            let a = svc.get(username)?;
            text(format!("{} is scheduled for {}.", a.user, a.date))
        }
        "add" => {
            let username = person_name(&params["person"])?;
            svc.add_user(username)?;
            let a = svc.get(username)?;
            text(format!(
                "I added {}. They are scheduled for {}.",
                a.user, a.date
            ))
        }
        "remove" => {
            let username = person_name(&params["person"])?;
            svc.remove_user(username)?;
            text(format!("Ok, I removed {username} from the list."))
        }
        "swap" => {
            let a = person_name(&params["person"])?;
            let b = person_name(&params["other_person"])?;
            svc.swap(a, b)?;
            text(format!("Ok, I swapped {a} and {b}."))
        }
        "delay-next" | "delay-all" => {
            let days = duration_days(&params["duration"])
                .ok_or_else(|| AppError::bad_request("missing parameter: duration"))?;
            let all = action == "delay-all";
            svc.delay(all, days)?;
            let what = if all { "all assignments" } else { "the next assignment" };
            let days_str = if days == 1 {
                "1 day".to_string()
            } else {
                format!("{days} days")
            };
            text(format!("Ok, I delayed {what} by {days_str}."))
        }
        _ => text("Sorry, that failed. Can you try again?".to_string()),
    };

    Ok(Json(response))
}

fn text(msg: String) -> serde_json::Value {
    serde_json::json!({ "fulfillment_text": msg })
}

fn messages(entries: &[Assignment]) -> serde_json::Value {
    let lines: Vec<serde_json::Value> = entries
        .iter()
        .map(|a| serde_json::json!({ "text": { "text": [format!("{}:\t{}", a.user, a.date)] } }))
        .collect();
    serde_json::json!({ "fulfillmentMessages": lines })
}

fn person_name(person: &serde_json::Value) -> Result<&str, AppError> {
    person["name"]
        .as_str()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::bad_request("missing parameter: person"))
}

/// Numeric parameters arrive as either integers or whole-valued floats
/// (`3` and `3.0` both mean three days).
fn duration_days(value: &serde_json::Value) -> Option<u32> {
    if let Some(d) = value.as_u64() {
        return u32::try_from(d).ok();
    }
    let f = value.as_f64()?;
    if f.fract() == 0.0 && f >= 0.0 && f <= f64::from(u32::MAX) {
        Some(f as u32)
    } else {
        None
    }
}

/// Period boundaries arrive as full ISO-8601 datetimes; only the
/// calendar date matters here.
fn parse_period_date(value: &serde_json::Value) -> Result<NaiveDate, AppError> {
    let raw = value
        .as_str()
        .ok_or_else(|| AppError::bad_request("missing parameter: date-period"))?;
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| raw.parse::<NaiveDate>())
        .map_err(|_| AppError::bad_request(format!("invalid period date: {raw}")))
}
