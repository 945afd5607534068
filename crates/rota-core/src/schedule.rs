use crate::config::Config;
use crate::error::{Result, RotaError};
use crate::users::validate_username;
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Assignment
// ---------------------------------------------------------------------------

/// One turn in the rotation: the user and the date their turn falls on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(rename = "name")]
    pub user: String,
    pub date: NaiveDate,
}

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

/// The rotation schedule: an ordered sequence of assignments.
///
/// Position is turn order. The operations below maintain three
/// invariants: usernames are unique, dates are sorted non-decreasing,
/// and every user holds exactly one date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    entries: Vec<Assignment>,
}

/// Next date on or after `today` that lands on the configured anchor
/// weekday. The weekday difference is taken modulo `interval_days`
/// (not modulo 7), so non-weekly intervals anchor relative to the
/// current weekday. When today already matches the anchor and
/// `allow_start_today` is off, the start is pushed a full interval out.
pub fn first_assignment_date(today: NaiveDate, config: &Config) -> NaiveDate {
    let interval = i64::from(config.interval_days);
    let weekday = i64::from(today.weekday().num_days_from_monday());
    let mut diff = (i64::from(config.weekday_start) - weekday).rem_euclid(interval);
    if diff == 0 && !config.allow_start_today {
        diff = interval;
    }
    today + Days::new(diff as u64)
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schedule from already-aligned entries, e.g. a decoded
    /// snapshot. Order is taken as-is.
    pub fn from_entries(entries: Vec<Assignment>) -> Self {
        Self { entries }
    }

    /// Generate a fresh schedule for `users` in the given order: the
    /// first turn falls on [`first_assignment_date`], each following
    /// turn one interval later.
    pub fn generate(users: Vec<String>, today: NaiveDate, config: &Config) -> Result<Self> {
        let mut schedule = Self::new();
        let start = first_assignment_date(today, config);
        for (i, user) in users.into_iter().enumerate() {
            validate_username(&user)?;
            if schedule.contains(&user) {
                return Err(RotaError::UserExists(user));
            }
            let date = start + Days::new(i as u64 * u64::from(config.interval_days));
            schedule.entries.push(Assignment { user, date });
        }
        Ok(schedule)
    }

    /// Regenerate from today's anchor, keeping the existing turn order.
    pub fn regenerate(&self, today: NaiveDate, config: &Config) -> Result<Self> {
        Self::generate(self.users().map(str::to_string).collect(), today, config)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[Assignment] {
        &self.entries
    }

    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.user.as_str())
    }

    pub fn contains(&self, username: &str) -> bool {
        self.position(username).is_some()
    }

    fn position(&self, username: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.user == username)
    }

    /// The single assignment held by `username`.
    pub fn get(&self, username: &str) -> Result<&Assignment> {
        self.position(username)
            .map(|i| &self.entries[i])
            .ok_or_else(|| RotaError::UserNotFound(username.to_string()))
    }

    /// Append `username` at the end of the rotation. The new turn falls
    /// one interval after the current last date, or on the first
    /// assignment date when the schedule is empty.
    pub fn add_user(&mut self, username: &str, today: NaiveDate, config: &Config) -> Result<()> {
        validate_username(username)?;
        if self.contains(username) {
            return Err(RotaError::UserExists(username.to_string()));
        }
        let date = match self.entries.last() {
            Some(last) => last.date + Days::new(u64::from(config.interval_days)),
            None => first_assignment_date(today, config),
        };
        self.entries.push(Assignment {
            user: username.to_string(),
            date,
        });
        Ok(())
    }

    /// Remove `username` and shrink the date list so it stays gap-free.
    ///
    /// If the user's turn already happened (date on or before today)
    /// the rotation has consumed a past slot, so the earliest date is
    /// dropped and every remaining user keeps their position relative
    /// to the passed turns. If the turn is still ahead, nobody has
    /// taken that slot yet and the latest date is discarded instead.
    /// The surviving dates are then re-aligned positionally to the
    /// remaining users.
    pub fn remove_user(&mut self, username: &str, today: NaiveDate) -> Result<()> {
        let assigned = self.get(username)?.date;

        let mut dates: Vec<NaiveDate> = self.entries.iter().map(|e| e.date).collect();
        if assigned <= today {
            dates.remove(0);
        } else {
            dates.pop();
        }

        let users: Vec<String> = self
            .entries
            .iter()
            .filter(|e| e.user != username)
            .map(|e| e.user.clone())
            .collect();

        self.entries = users
            .into_iter()
            .zip(dates)
            .map(|(user, date)| Assignment { user, date })
            .collect();
        Ok(())
    }

    /// Push upcoming turns into the future.
    ///
    /// With `delay_all`, every date strictly after today shifts forward
    /// uniformly, which preserves ordering. Without it only the next
    /// turn shifts, and the shift must keep it strictly before the turn
    /// after it (unless it is the last one).
    pub fn delay(&mut self, delay_all: bool, delay_days: u32, today: NaiveDate) -> Result<()> {
        let next = self
            .entries
            .iter()
            .position(|e| e.date > today)
            .ok_or(RotaError::NoUpcomingAssignment)?;
        let shift = Days::new(u64::from(delay_days));

        if delay_all {
            for entry in &mut self.entries[next..] {
                entry.date = entry.date + shift;
            }
        } else if next == self.entries.len() - 1 {
            // No successor to overtake.
            self.entries[next].date = self.entries[next].date + shift;
        } else {
            let gap = (self.entries[next + 1].date - self.entries[next].date).num_days();
            if i64::from(delay_days) >= gap {
                return Err(RotaError::InvalidDelay {
                    days: delay_days,
                    max: gap,
                });
            }
            self.entries[next].date = self.entries[next].date + shift;
        }
        Ok(())
    }

    /// Exchange the positions of two users; the dates stay put, so the
    /// two users trade their assigned dates. Swapping a user with
    /// themselves is a no-op.
    pub fn swap(&mut self, user_a: &str, user_b: &str) -> Result<()> {
        let a = self
            .position(user_a)
            .ok_or_else(|| RotaError::UserNotFound(user_a.to_string()))?;
        let b = self
            .position(user_b)
            .ok_or_else(|| RotaError::UserNotFound(user_b.to_string()))?;
        if a == b {
            return Ok(());
        }
        let user = std::mem::take(&mut self.entries[a].user);
        self.entries[a].user = std::mem::replace(&mut self.entries[b].user, user);
        Ok(())
    }

    /// Assignments falling within a period. Without `period_end` the
    /// single next assignment on or after `period_begin` is returned;
    /// with it, every assignment up to and including the end date.
    pub fn lookup(&self, period_begin: NaiveDate, period_end: Option<NaiveDate>) -> &[Assignment] {
        let Some(begin) = self.entries.iter().position(|e| e.date >= period_begin) else {
            return &[];
        };
        match period_end {
            None => &self.entries[begin..=begin],
            Some(end) => {
                let stop = self.entries[begin..]
                    .iter()
                    .position(|e| e.date > end)
                    .map(|i| begin + i)
                    .unwrap_or(self.entries.len());
                &self.entries[begin..stop]
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
