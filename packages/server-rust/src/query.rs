//! Derived read views over the record store.
//!
//! Every view recomputes from live collection state on each call — there is
//! no caching, so results always reflect the latest writes — and none of
//! them mutates the store. All sorts are stable: ties at every key keep the
//! records' prior (insertion) order.
//!
//! Records without a creation timestamp sort as time zero, i.e. oldest.

use std::cmp::Reverse;

use campushub_core::{Announcement, Assessment, Message};

use crate::storage::PortalStore;

/// Sort key for recency ordering. Absent timestamps count as time zero.
fn recency(created_at: Option<i64>) -> Reverse<i64> {
    Reverse(created_at.unwrap_or(0))
}

impl PortalStore {
    /// All assessments referencing `course_id`, in insertion order.
    ///
    /// A stable filter with no re-sort. Returns an empty vec, not an error,
    /// when nothing references the course.
    #[must_use]
    pub fn assessments_by_course(&self, course_id: &str) -> Vec<Assessment> {
        self.assessments
            .list()
            .into_iter()
            .filter(|a| a.course_id == course_id)
            .collect()
    }

    /// All messages sent by or addressed to `user_id`, most recent first.
    #[must_use]
    pub fn messages_for(&self, user_id: &str) -> Vec<Message> {
        let mut messages: Vec<Message> = self
            .messages
            .list()
            .into_iter()
            .filter(|m| m.sender_id == user_id || m.recipient_id.as_deref() == Some(user_id))
            .collect();
        messages.sort_by_key(|m| recency(m.created_at));
        messages
    }

    /// All announcements, most recent first.
    #[must_use]
    pub fn announcements(&self) -> Vec<Announcement> {
        let mut announcements = self.announcements.list();
        announcements.sort_by_key(|a| recency(a.created_at));
        announcements
    }

    /// Channel-board ordering: pinned posts first, then higher upvotes,
    /// then more recent; ties keep insertion order.
    ///
    /// With `channel` set, only messages posted to that channel are
    /// considered; otherwise every message participates.
    #[must_use]
    pub fn ranked_messages(&self, channel: Option<&str>) -> Vec<Message> {
        let mut messages: Vec<Message> = self
            .messages
            .list()
            .into_iter()
            .filter(|m| channel.is_none_or(|c| m.channel.as_deref() == Some(c)))
            .collect();
        messages.sort_by_key(|m| {
            (
                Reverse(m.is_pinned),
                Reverse(m.upvotes),
                recency(m.created_at),
            )
        });
        messages
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use campushub_core::{
        Assessment, AssessmentStatus, AssessmentType, Message, MessageType,
    };
    use proptest::prelude::*;

    use crate::storage::{Collection, Keyed, PortalStore, SequentialIdGenerator};

    fn test_store() -> PortalStore {
        PortalStore::new(Arc::new(SequentialIdGenerator::new("id")))
    }

    /// Inserts a message with explicit id and ordering fields, bypassing
    /// create-time stamping so tests control recency.
    fn seed_message(
        store: &PortalStore,
        id: &str,
        sender: &str,
        recipient: Option<&str>,
        channel: Option<&str>,
        pinned: bool,
        upvotes: u32,
        created_at: Option<i64>,
    ) {
        store.messages.insert(Message {
            id: id.to_string(),
            sender_id: sender.to_string(),
            recipient_id: recipient.map(str::to_string),
            group_name: None,
            content: format!("message {id}"),
            kind: if channel.is_some() {
                MessageType::Channel
            } else {
                MessageType::Direct
            },
            channel: channel.map(str::to_string),
            upvotes,
            is_admin: false,
            is_pinned: pinned,
            is_read: false,
            created_at,
        });
    }

    fn seed_assessment(store: &PortalStore, id: &str, course_id: &str) {
        store.assessments.insert(Assessment {
            id: id.to_string(),
            course_id: course_id.to_string(),
            title: format!("assessment {id}"),
            kind: AssessmentType::Quiz,
            due_date: None,
            total_questions: None,
            completed_questions: None,
            time_remaining: None,
            grade: None,
            status: AssessmentStatus::Pending,
            created_at: None,
        });
    }

    #[test]
    fn assessments_by_course_filters_in_insertion_order() {
        let store = test_store();
        seed_assessment(&store, "a1", "course2");
        seed_assessment(&store, "a2", "course1");
        seed_assessment(&store, "a3", "course1");

        let ids: Vec<String> = store
            .assessments_by_course("course1")
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["a2", "a3"]);
    }

    #[test]
    fn assessments_by_course_empty_for_unreferenced_course() {
        let store = test_store();
        seed_assessment(&store, "a1", "course1");
        assert!(store.assessments_by_course("course9").is_empty());
    }

    #[test]
    fn messages_for_matches_sender_or_recipient() {
        let store = test_store();
        seed_message(&store, "m1", "u2", Some("u1"), None, false, 0, Some(100));
        seed_message(&store, "m2", "u1", Some("u3"), None, false, 0, Some(200));
        seed_message(&store, "m3", "u3", Some("u2"), None, false, 0, Some(300));

        let ids: Vec<String> = store.messages_for("u1").into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["m2", "m1"]);
    }

    #[test]
    fn messages_for_sorts_most_recent_first_with_stable_ties() {
        let store = test_store();
        seed_message(&store, "old", "u1", None, None, false, 0, Some(10));
        seed_message(&store, "tie-a", "u1", None, None, false, 0, Some(50));
        seed_message(&store, "tie-b", "u1", None, None, false, 0, Some(50));
        seed_message(&store, "new", "u1", None, None, false, 0, Some(90));

        let ids: Vec<String> = store.messages_for("u1").into_iter().map(|m| m.id).collect();
        // Equal timestamps keep store order: tie-a before tie-b.
        assert_eq!(ids, vec!["new", "tie-a", "tie-b", "old"]);
    }

    #[test]
    fn absent_created_at_sorts_oldest() {
        let store = test_store();
        seed_message(&store, "undated", "u1", None, None, false, 0, None);
        seed_message(&store, "dated", "u1", None, None, false, 0, Some(1));

        let ids: Vec<String> = store.messages_for("u1").into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["dated", "undated"]);
    }

    #[test]
    fn ranked_messages_orders_pinned_then_upvotes_then_recency() {
        let store = test_store();
        // The contract scenario: A(unpinned, 5 votes, t=100),
        // B(pinned, 1 vote, t=50), C(unpinned, 5 votes, t=200) -> [B, C, A].
        seed_message(&store, "A", "u1", None, Some("general"), false, 5, Some(100));
        seed_message(&store, "B", "u2", None, Some("general"), true, 1, Some(50));
        seed_message(&store, "C", "u3", None, Some("general"), false, 5, Some(200));

        let ids: Vec<String> = store
            .ranked_messages(None)
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec!["B", "C", "A"]);
    }

    #[test]
    fn ranked_messages_filters_by_channel() {
        let store = test_store();
        seed_message(&store, "g1", "u1", None, Some("general"), false, 3, Some(10));
        seed_message(&store, "h1", "u1", None, Some("homework"), false, 9, Some(20));
        seed_message(&store, "d1", "u1", Some("u2"), None, false, 0, Some(30));

        let ids: Vec<String> = store
            .ranked_messages(Some("homework"))
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec!["h1"]);
    }

    #[test]
    fn ranked_messages_full_tie_keeps_insertion_order() {
        let store = test_store();
        seed_message(&store, "first", "u1", None, Some("c"), true, 7, Some(40));
        seed_message(&store, "second", "u2", None, Some("c"), true, 7, Some(40));

        let ids: Vec<String> = store
            .ranked_messages(Some("c"))
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn announcements_sorted_most_recent_first() {
        let store = test_store();
        store.announcements.insert(campushub_core::Announcement {
            id: "an1".to_string(),
            title: "older".to_string(),
            content: String::new(),
            kind: campushub_core::AnnouncementType::Alert,
            priority: campushub_core::Priority::High,
            created_at: Some(100),
        });
        store.announcements.insert(campushub_core::Announcement {
            id: "an2".to_string(),
            title: "newer".to_string(),
            content: String::new(),
            kind: campushub_core::AnnouncementType::Event,
            priority: campushub_core::Priority::Normal,
            created_at: Some(200),
        });

        let titles: Vec<String> = store
            .announcements()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["newer", "older"]);
    }

    #[test]
    fn queries_do_not_mutate_the_store() {
        let store = test_store();
        seed_message(&store, "m1", "u1", None, Some("c"), false, 2, Some(5));
        let before = store.messages.list();

        let _ = store.messages_for("u1");
        let _ = store.ranked_messages(Some("c"));

        assert_eq!(store.messages.list(), before);
    }

    proptest! {
        #[test]
        fn ranked_order_is_non_increasing_in_all_three_keys(
            entries in proptest::collection::vec((any::<bool>(), 0u32..10, proptest::option::of(0i64..1000)), 0..32)
        ) {
            let store = test_store();
            for (i, (pinned, upvotes, created_at)) in entries.iter().enumerate() {
                seed_message(
                    &store,
                    &format!("m{i}"),
                    "u1",
                    None,
                    Some("c"),
                    *pinned,
                    *upvotes,
                    *created_at,
                );
            }

            let ranked = store.ranked_messages(Some("c"));
            prop_assert_eq!(ranked.len(), entries.len());
            for pair in ranked.windows(2) {
                let key = |m: &Message| {
                    (m.is_pinned, m.upvotes, m.created_at.unwrap_or(0))
                };
                prop_assert!(key(&pair[0]) >= key(&pair[1]));
            }
        }
    }

    #[test]
    fn keyed_kind_names_are_lowercase() {
        assert_eq!(Message::KIND, "message");
        let _c: &Collection<Message> = &test_store().messages;
    }
}
