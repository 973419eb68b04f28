mod common;

use common::mock_data::{TicketBuilder, seeded_store};
use smarthelp::types::{FOCUS_CONFIDENCE_THRESHOLD, InboxFilter, TicketStatus};
use smarthelp::{bucket_counts, filter_tickets, matches_filter, triage};

fn ids(tickets: &[smarthelp::MatchedTicket]) -> Vec<String> {
    tickets.iter().map(|m| m.ticket.id.clone()).collect()
}

#[test]
fn test_focus_threshold_is_inclusive() {
    let at = TicketBuilder::new("T-1")
        .confidence(FOCUS_CONFIDENCE_THRESHOLD)
        .build();
    let below = TicketBuilder::new("T-2")
        .confidence(FOCUS_CONFIDENCE_THRESHOLD - 1)
        .build();

    assert!(matches_filter(&at, InboxFilter::Focus));
    assert!(!matches_filter(&at, InboxFilter::Review));
    assert!(matches_filter(&below, InboxFilter::Review));
    assert!(!matches_filter(&below, InboxFilter::Focus));
}

fn mixed_tickets() -> Vec<smarthelp::types::Ticket> {
    let statuses = [
        TicketStatus::Open,
        TicketStatus::Pending,
        TicketStatus::Resolved,
        TicketStatus::Escalated,
    ];
    let mut tickets = Vec::new();
    for (s, status) in statuses.into_iter().enumerate() {
        for confidence in [0, 89, 90, 100] {
            tickets.push(
                TicketBuilder::new(&format!("T-{s}{confidence:03}"))
                    .status(status)
                    .confidence(confidence)
                    .build(),
            );
        }
    }
    tickets
}

fn filtered_ids(tickets: &[smarthelp::types::Ticket], filter: InboxFilter) -> Vec<String> {
    filter_tickets(tickets, filter)
        .into_iter()
        .map(|t| t.id.clone())
        .collect()
}

#[test]
fn test_filtering_twice_changes_nothing() {
    let tickets = mixed_tickets();
    for filter in InboxFilter::ALL {
        let once: Vec<_> = filter_tickets(&tickets, filter)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(
            filtered_ids(&once, filter),
            filtered_ids(&tickets, filter),
            "{filter} is not idempotent"
        );
    }
}

#[test]
fn test_focus_and_review_partition_open_tickets() {
    let tickets = mixed_tickets();
    let focus = filtered_ids(&tickets, InboxFilter::Focus);
    let review = filtered_ids(&tickets, InboxFilter::Review);

    assert!(focus.iter().all(|id| !review.contains(id)));

    let mut union: Vec<String> = focus.iter().chain(&review).cloned().collect();
    union.sort();
    let mut open: Vec<String> = tickets
        .iter()
        .filter(|t| t.status == TicketStatus::Open)
        .map(|t| t.id.clone())
        .collect();
    open.sort();
    assert_eq!(union, open);

    assert_eq!(focus, ["T-0090", "T-0100"]);
    assert_eq!(review, ["T-0000", "T-0089"]);
    assert_eq!(filtered_ids(&tickets, InboxFilter::Snoozed).len(), 4);
    assert_eq!(filtered_ids(&tickets, InboxFilter::Escalated).len(), 4);
}

#[test]
fn test_status_decides_non_open_buckets() {
    let escalated = TicketBuilder::new("T-1")
        .status(TicketStatus::Escalated)
        .confidence(99)
        .build();
    let snoozed = TicketBuilder::new("T-2")
        .status(TicketStatus::Pending)
        .confidence(10)
        .build();

    assert!(matches_filter(&escalated, InboxFilter::Escalated));
    assert!(!matches_filter(&escalated, InboxFilter::Focus));
    assert!(matches_filter(&snoozed, InboxFilter::Snoozed));
    assert!(!matches_filter(&snoozed, InboxFilter::Review));
}

#[test]
fn test_resolved_tickets_are_in_no_bucket() {
    let resolved = TicketBuilder::new("T-1")
        .status(TicketStatus::Resolved)
        .build();
    for filter in InboxFilter::ALL {
        assert!(!matches_filter(&resolved, filter), "{filter} matched");
    }

    let counts = bucket_counts(&[resolved]);
    assert_eq!(counts.total(), 0);
}

#[test]
fn test_filter_keeps_store_order() {
    let tickets = vec![
        TicketBuilder::new("T-3").confidence(95).build(),
        TicketBuilder::new("T-1").confidence(50).build(),
        TicketBuilder::new("T-2").confidence(91).build(),
    ];
    let focus: Vec<&str> = filter_tickets(&tickets, InboxFilter::Focus)
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(focus, ["T-3", "T-2"]);
}

#[test]
fn test_seeded_bucket_counts() {
    let store = seeded_store();
    let counts = bucket_counts(store.tickets());
    assert_eq!(counts.get(InboxFilter::Focus), 2);
    assert_eq!(counts.get(InboxFilter::Review), 1);
    assert_eq!(counts.get(InboxFilter::Escalated), 1);
    assert_eq!(counts.get(InboxFilter::Snoozed), 1);
    assert_eq!(counts.total(), store.len());
}

#[test]
fn test_search_narrows_bucket() {
    let store = seeded_store();
    assert_eq!(
        ids(&triage(store.tickets(), InboxFilter::Focus, "")),
        ["T-1024", "T-1025"]
    );
    assert_eq!(
        ids(&triage(store.tickets(), InboxFilter::Focus, "sarah")),
        ["T-1024"]
    );
    // Search never reaches outside the active bucket
    assert!(triage(store.tickets(), InboxFilter::Focus, "Elena").is_empty());
}

#[test]
fn test_search_highlights_subject_characters() {
    let tickets = vec![TicketBuilder::new("T-9").subject("Refund request").build()];
    let matched = triage(&tickets, InboxFilter::Focus, "refund");
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].subject_indices.len(), 6);
    assert!(matched[0].subject_indices.iter().all(|&i| i < "Refund request".len()));
    assert!(matched[0].score > 0);
}

#[test]
fn test_blank_query_matches_everything() {
    let store = seeded_store();
    let all = triage(store.tickets(), InboxFilter::Focus, "   ");
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|m| m.score == 0 && m.subject_indices.is_empty()));
}
