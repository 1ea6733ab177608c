//! Data structures shared between the frontend and backend.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::id::{ActivityName, ParticipantEmail};

/// An extracurricular activity and its current roster.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    /// Enrolled participants in signup order.
    pub participants: Vec<ParticipantEmail>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: usize,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, P>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<ParticipantEmail>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_enrolled(&self, email: &ParticipantEmail) -> bool {
        self.participants.contains(email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }
}

/// All activities keyed by name, in a stable order.
///
/// On the wire this is a JSON object. Unlike a `HashMap`, the key order of
/// the object is preserved in both directions.
///
/// # Example
/// ```
/// use mergington::data::{Activities, Activity};
/// use mergington::id::ActivityName;
///
/// let activities = Activities::from(vec![
///     (ActivityName::from("Chess Club"), Activity::new("Chess", "Fridays", 12)),
///     (ActivityName::from("Art Studio"), Activity::new("Art", "Mondays", 18)),
/// ]);
/// let json = mergington::serde_json::to_string(&activities).unwrap();
/// assert!(json.find("Chess Club").unwrap() < json.find("Art Studio").unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Activities(Vec<(ActivityName, Activity)>);

impl Activities {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, name: ActivityName, activity: Activity) {
        self.0.push((name, activity));
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0
            .iter()
            .find(|(key, _)| key.as_str() == name)
            .map(|(_, activity)| activity)
    }

    pub fn names(&self) -> impl Iterator<Item = &ActivityName> {
        self.0.iter().map(|(name, _)| name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ActivityName, &Activity)> {
        self.0.iter().map(|(name, activity)| (name, activity))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<(ActivityName, Activity)>> for Activities {
    fn from(entries: Vec<(ActivityName, Activity)>) -> Self {
        Self(entries)
    }
}

impl Serialize for Activities {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, activity) in &self.0 {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Activities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ActivitiesVisitor;

        impl<'de> Visitor<'de> for ActivitiesVisitor {
            type Value = Activities;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of activity name to activity")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, activity)) = access.next_entry()? {
                    entries.push((name, activity));
                }
                Ok(Activities(entries))
            }
        }

        deserializer.deserialize_map(ActivitiesVisitor)
    }
}

/// Query string for the signup and unregister endpoints: `?email=<id>`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EmailQuery {
    pub email: String,
}

/// Successful response body of a roster mutation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response body: `{"detail": "..."}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UptimeInfo {
    pub seconds: i64,
    pub human: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RosterInfo {
    pub activities: usize,
    pub participants: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub started_at: String,
    pub uptime: UptimeInfo,
    pub roster: RosterInfo,
}
