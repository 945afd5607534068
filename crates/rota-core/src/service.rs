use crate::clock::Clock;
use crate::config::Config;
use crate::error::Result;
use crate::schedule::{Assignment, Schedule};
use crate::store::SnapshotStore;
use chrono::NaiveDate;

/// Stateful wrapper that owns the cached schedule and ties the pure
/// [`Schedule`] operations to a [`SnapshotStore`] and a [`Clock`].
///
/// Every operation loads the snapshot on first access, applies the
/// transformation in memory, and (for mutations) persists the result
/// synchronously before returning. A failed save keeps the mutated
/// copy in the cache, so memory runs ahead of durable state until a
/// retried save succeeds; the error is still surfaced to the caller.
///
/// The service does no internal locking. Embedders must serialize
/// access, e.g. behind a single mutex.
pub struct ScheduleService<S: SnapshotStore, C: Clock> {
    store: S,
    clock: C,
    config: Config,
    cached: Option<Schedule>,
}

impl<S: SnapshotStore, C: Clock> ScheduleService<S, C> {
    pub fn new(store: S, clock: C, config: Config) -> Self {
        Self {
            store,
            clock,
            config,
            cached: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    fn load_if_needed(&mut self) -> Result<()> {
        if self.cached.is_none() {
            let schedule = self.store.load()?.unwrap_or_default();
            tracing::debug!(users = schedule.len(), "loaded schedule snapshot");
            self.cached = Some(schedule);
        }
        Ok(())
    }

    fn schedule_mut(&mut self) -> Result<&mut Schedule> {
        self.load_if_needed()?;
        Ok(self.cached.get_or_insert_with(Schedule::new))
    }

    fn persist(&mut self) -> Result<Schedule> {
        let schedule = self.cached.get_or_insert_with(Schedule::new);
        self.store.save(schedule)?;
        Ok(schedule.clone())
    }

    // -----------------------------------------------------------------------
    // Read operations (never persist)
    // -----------------------------------------------------------------------

    pub fn list(&mut self) -> Result<Schedule> {
        self.schedule_mut().map(|s| s.clone())
    }

    pub fn get(&mut self, username: &str) -> Result<Assignment> {
        self.schedule_mut()?.get(username).cloned()
    }

    /// Assignments in the period; `period_begin` defaults to today.
    pub fn lookup(
        &mut self,
        period_begin: Option<NaiveDate>,
        period_end: Option<NaiveDate>,
    ) -> Result<Vec<Assignment>> {
        let begin = period_begin.unwrap_or_else(|| self.clock.today());
        let schedule = self.schedule_mut()?;
        Ok(schedule.lookup(begin, period_end).to_vec())
    }

    // -----------------------------------------------------------------------
    // Mutations (persist after success)
    // -----------------------------------------------------------------------

    pub fn add_user(&mut self, username: &str) -> Result<Schedule> {
        let today = self.clock.today();
        let config = self.config.clone();
        self.schedule_mut()?.add_user(username, today, &config)?;
        tracing::info!(user = username, "added user to rotation");
        self.persist()
    }

    pub fn remove_user(&mut self, username: &str) -> Result<Schedule> {
        let today = self.clock.today();
        self.schedule_mut()?.remove_user(username, today)?;
        tracing::info!(user = username, "removed user from rotation");
        self.persist()
    }

    /// Replace all dates, recomputed from today's anchor, keeping the
    /// existing turn order.
    pub fn regenerate(&mut self) -> Result<Schedule> {
        let today = self.clock.today();
        let config = self.config.clone();
        let schedule = self.schedule_mut()?;
        *schedule = schedule.regenerate(today, &config)?;
        tracing::info!("regenerated rotation");
        self.persist()
    }

    pub fn delay(&mut self, delay_all: bool, delay_days: u32) -> Result<Schedule> {
        let today = self.clock.today();
        self.schedule_mut()?.delay(delay_all, delay_days, today)?;
        tracing::info!(all = delay_all, days = delay_days, "delayed assignments");
        self.persist()
    }

    pub fn swap(&mut self, user_a: &str, user_b: &str) -> Result<Schedule> {
        self.schedule_mut()?.swap(user_a, user_b)?;
        tracing::info!(user_a, user_b, "swapped assignments");
        self.persist()
    }
}
