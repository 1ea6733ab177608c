use async_trait::async_trait;
use dashmap::DashMap;

use mergington::data::{Activities, Activity};
use mergington::errors::RosterError;
use mergington::id::{ActivityName, ParticipantEmail};
use mergington::log;

/// Aggregate counts over the whole roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterStats {
    pub activities: usize,
    pub participants: usize,
}

/// A trait for managing activities and the students enrolled in them.
///
/// The set of activities is fixed when the service is built. Only the
/// participant rosters change, through [`RosterService::enroll`] and
/// [`RosterService::withdraw`]. A failed call never modifies a roster.
///
/// # Examples
///
/// ```rust,ignore
/// async fn example_usage<S: RosterService>(service: &S) -> Result<(), S::Error> {
///     let chess = ActivityName::from("Chess Club");
///     let email = ParticipantEmail::from("newstudent@mergington.edu");
///
///     let message = service.enroll(&chess, &email).await?;
///     assert_eq!(message, "Signed up newstudent@mergington.edu for Chess Club");
///
///     service.withdraw(&chess, &email).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait RosterService {
    /// The error type returned by operations on this service.
    type Error;

    /// Returns every activity with its current roster.
    async fn list_activities(&self) -> Result<Activities, Self::Error>;

    /// Returns a single activity.
    ///
    /// # Errors
    ///
    /// Returns an error if no activity has the given name.
    async fn get_activity(&self, activity_name: &ActivityName) -> Result<Activity, Self::Error>;

    /// Appends a participant to an activity's roster and returns a
    /// confirmation message.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or the participant is
    /// already enrolled.
    ///
    /// `max_participants` is enforced here as well: an activity whose roster
    /// has reached capacity rejects further signups, keeping every roster
    /// within its advertised size.
    async fn enroll(
        &self,
        activity_name: &ActivityName,
        email: &ParticipantEmail,
    ) -> Result<String, Self::Error>;

    /// Removes a participant from an activity's roster and returns a
    /// confirmation message.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or the participant is
    /// not enrolled in it.
    async fn withdraw(
        &self,
        activity_name: &ActivityName,
        email: &ParticipantEmail,
    ) -> Result<String, Self::Error>;

    /// Counts activities and enrolled participants.
    async fn stats(&self) -> Result<RosterStats, Self::Error>;
}

/// An in-memory implementation of the `RosterService` trait.
///
/// Activities live in a `DashMap`. A roster is checked and modified while
/// holding the entry's write guard, so concurrent requests against the same
/// activity are applied one at a time. Listing follows the order the
/// activities were seeded in.
pub struct RosterServiceInMemory {
    activities: DashMap<ActivityName, Activity>,
    order: Vec<ActivityName>,
}

impl RosterServiceInMemory {
    pub fn new(seed: impl IntoIterator<Item = (ActivityName, Activity)>) -> Self {
        let activities = DashMap::new();
        let mut order = Vec::new();

        for (name, activity) in seed {
            // A repeated name replaces the earlier entry but keeps its position.
            if activities.insert(name.clone(), activity).is_none() {
                order.push(name);
            }
        }

        Self { activities, order }
    }

    /// A service holding the school's standard activities.
    pub fn seeded() -> Self {
        Self::new(super::seed::seed_activities())
    }
}

impl Default for RosterServiceInMemory {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl RosterService for RosterServiceInMemory {
    type Error = RosterError;

    async fn list_activities(&self) -> Result<Activities, Self::Error> {
        let mut activities = Activities::new();
        for name in &self.order {
            if let Some(entry) = self.activities.get(name) {
                activities.push(name.clone(), entry.value().clone());
            }
        }
        Ok(activities)
    }

    async fn get_activity(&self, activity_name: &ActivityName) -> Result<Activity, Self::Error> {
        self.activities
            .get(activity_name)
            .map(|entry| entry.value().clone())
            .ok_or(RosterError::ActivityNotFound)
    }

    async fn enroll(
        &self,
        activity_name: &ActivityName,
        email: &ParticipantEmail,
    ) -> Result<String, Self::Error> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(RosterError::ActivityNotFound)?;

        if activity.is_enrolled(email) {
            return Err(RosterError::AlreadySignedUp);
        }
        if activity.is_full() {
            log::warn!(
                "Rejected signup of {} for {}: {} of {} spots taken",
                email,
                activity_name,
                activity.participants.len(),
                activity.max_participants
            );
            return Err(RosterError::ActivityFull);
        }

        activity.participants.push(email.clone());
        log::info!("Signed up {} for {}", email, activity_name);

        Ok(format!("Signed up {email} for {activity_name}"))
    }

    async fn withdraw(
        &self,
        activity_name: &ActivityName,
        email: &ParticipantEmail,
    ) -> Result<String, Self::Error> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(RosterError::ActivityNotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|participant| participant == email)
            .ok_or(RosterError::NotSignedUp)?;

        activity.participants.remove(position);
        log::info!("Unregistered {} from {}", email, activity_name);

        Ok(format!("Unregistered {email} from {activity_name}"))
    }

    async fn stats(&self) -> Result<RosterStats, Self::Error> {
        let participants = self
            .activities
            .iter()
            .map(|entry| entry.value().participants.len())
            .sum();

        Ok(RosterStats {
            activities: self.activities.len(),
            participants,
        })
    }
}
