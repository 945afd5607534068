//! Persisted form of a [`Schedule`]:
//!
//! ```json
//! { "assignments": { "alice": "2026-03-09", "bob": "2026-03-16" } }
//! ```
//!
//! Key order is turn order, so the map is written and read entry by
//! entry instead of going through a keyed struct (which would lose the
//! ordering to an unordered map type).

use crate::schedule::{Assignment, Schedule};
use chrono::NaiveDate;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

impl Serialize for Schedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Assignments<'a>(&'a Schedule);

        impl Serialize for Assignments<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for entry in self.0.entries() {
                    map.serialize_entry(&entry.user, &entry.date)?;
                }
                map.end()
            }
        }

        let mut root = serializer.serialize_map(Some(1))?;
        root.serialize_entry("assignments", &Assignments(self))?;
        root.end()
    }
}

impl<'de> Deserialize<'de> for Schedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AssignmentMap(Vec<Assignment>);

        impl<'de> Deserialize<'de> for AssignmentMap {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct MapVisitor;

                impl<'de> Visitor<'de> for MapVisitor {
                    type Value = AssignmentMap;

                    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                        f.write_str("a map of username to ISO-8601 date")
                    }

                    fn visit_map<A: MapAccess<'de>>(
                        self,
                        mut map: A,
                    ) -> Result<Self::Value, A::Error> {
                        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                        while let Some((user, date)) = map.next_entry::<String, NaiveDate>()? {
                            entries.push(Assignment { user, date });
                        }
                        Ok(AssignmentMap(entries))
                    }
                }

                deserializer.deserialize_map(MapVisitor)
            }
        }

        struct RootVisitor;

        impl<'de> Visitor<'de> for RootVisitor {
            type Value = Schedule;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a snapshot object with an \"assignments\" map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries: Option<AssignmentMap> = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == "assignments" {
                        if entries.is_some() {
                            return Err(de::Error::duplicate_field("assignments"));
                        }
                        entries = Some(map.next_value()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                let entries = entries.ok_or_else(|| de::Error::missing_field("assignments"))?;
                Ok(Schedule::from_entries(entries.0))
            }
        }

        deserializer.deserialize_map(RootVisitor)
    }
}
