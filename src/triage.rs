//! Inbox triage: bucket filtering and fuzzy search
//!
//! Both steps keep the input order of the ticket list. Search narrows a
//! bucket but never re-ranks it, so the inbox reads the same way whether or
//! not a query is active.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use std::sync::Arc;

use crate::types::{InboxFilter, Ticket, TicketStatus};

/// Whether a ticket belongs in the given inbox bucket
pub fn matches_filter(ticket: &Ticket, filter: InboxFilter) -> bool {
    if ticket.status == TicketStatus::Resolved {
        return false;
    }

    match filter {
        InboxFilter::Focus => ticket.status == TicketStatus::Open && ticket.is_focus_candidate(),
        InboxFilter::Review => ticket.status == TicketStatus::Open && !ticket.is_focus_candidate(),
        InboxFilter::Escalated => ticket.status == TicketStatus::Escalated,
        InboxFilter::Snoozed => ticket.status == TicketStatus::Pending,
    }
}

/// Tickets in the given bucket, in their original order
pub fn filter_tickets(tickets: &[Ticket], filter: InboxFilter) -> Vec<&Ticket> {
    tickets
        .iter()
        .filter(|t| matches_filter(t, filter))
        .collect()
}

/// Number of tickets in each inbox bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketCounts {
    pub focus: usize,
    pub review: usize,
    pub escalated: usize,
    pub snoozed: usize,
}

impl BucketCounts {
    pub fn get(&self, filter: InboxFilter) -> usize {
        match filter {
            InboxFilter::Focus => self.focus,
            InboxFilter::Review => self.review,
            InboxFilter::Escalated => self.escalated,
            InboxFilter::Snoozed => self.snoozed,
        }
    }

    pub fn total(&self) -> usize {
        self.focus + self.review + self.escalated + self.snoozed
    }
}

pub fn bucket_counts(tickets: &[Ticket]) -> BucketCounts {
    let mut counts = BucketCounts::default();
    for ticket in tickets {
        for filter in InboxFilter::ALL {
            if matches_filter(ticket, filter) {
                match filter {
                    InboxFilter::Focus => counts.focus += 1,
                    InboxFilter::Review => counts.review += 1,
                    InboxFilter::Escalated => counts.escalated += 1,
                    InboxFilter::Snoozed => counts.snoozed += 1,
                }
            }
        }
    }
    counts
}

/// A ticket that survived triage, with fuzzy match details for highlighting
#[derive(Debug, Clone)]
pub struct MatchedTicket {
    /// The ticket (shared via Arc to avoid cloning per render)
    pub ticket: Arc<Ticket>,
    /// Fuzzy match score, 0 when no query is active
    pub score: i64,
    /// Character indices of matches within the subject
    pub subject_indices: Vec<usize>,
}

impl MatchedTicket {
    fn unscored(ticket: &Ticket) -> Self {
        Self {
            ticket: Arc::new(ticket.clone()),
            score: 0,
            subject_indices: vec![],
        }
    }
}

fn searchable_text(ticket: &Ticket) -> String {
    format!(
        "{} {} {} {}",
        ticket.id, ticket.subject, ticket.customer.name, ticket.ai_detected_issue
    )
}

/// Fuzzy-search tickets by id, subject, customer name and detected issue
///
/// Smart case: case-insensitive unless the query contains uppercase.
pub fn search_tickets(tickets: &[&Ticket], query: &str) -> Vec<MatchedTicket> {
    let query = query.trim();
    if query.is_empty() {
        return tickets.iter().map(|t| MatchedTicket::unscored(t)).collect();
    }

    let matcher = SkimMatcherV2::default().smart_case();

    tickets
        .iter()
        .filter_map(|ticket| {
            let text = searchable_text(ticket);
            matcher.fuzzy_indices(&text, query).map(|(score, indices)| {
                let subject_start = ticket.id.chars().count() + 1;
                let subject_end = subject_start + ticket.subject.chars().count();
                let subject_indices = indices
                    .into_iter()
                    .filter(|&i| i >= subject_start && i < subject_end)
                    .map(|i| i - subject_start)
                    .collect();

                MatchedTicket {
                    ticket: Arc::new((*ticket).clone()),
                    score,
                    subject_indices,
                }
            })
        })
        .collect()
}

/// Bucket filter followed by search: what the inbox list shows
pub fn triage(tickets: &[Ticket], filter: InboxFilter, query: &str) -> Vec<MatchedTicket> {
    search_tickets(&filter_tickets(tickets, filter), query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed_tickets;
    use jiff::Timestamp;

    fn ids<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> Vec<&'a str> {
        tickets.into_iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_seed_buckets() {
        let tickets = seed_tickets(Timestamp::UNIX_EPOCH);
        assert_eq!(
            ids(filter_tickets(&tickets, InboxFilter::Focus)),
            ["T-1024", "T-1025"]
        );
        assert_eq!(ids(filter_tickets(&tickets, InboxFilter::Review)), ["T-1026"]);
        assert_eq!(
            ids(filter_tickets(&tickets, InboxFilter::Escalated)),
            ["T-1027"]
        );
        assert_eq!(ids(filter_tickets(&tickets, InboxFilter::Snoozed)), ["T-1028"]);
    }

    #[test]
    fn test_threshold_boundary() {
        let mut tickets = seed_tickets(Timestamp::UNIX_EPOCH);
        tickets[0].ai_confidence = crate::types::Percent::clamped(90);
        tickets[1].ai_confidence = crate::types::Percent::clamped(89);
        assert!(matches_filter(&tickets[0], InboxFilter::Focus));
        assert!(matches_filter(&tickets[1], InboxFilter::Review));
    }

    #[test]
    fn test_resolved_never_matches() {
        let mut tickets = seed_tickets(Timestamp::UNIX_EPOCH);
        for ticket in &mut tickets {
            ticket.status = TicketStatus::Resolved;
        }
        for filter in InboxFilter::ALL {
            assert!(filter_tickets(&tickets, filter).is_empty());
        }
    }

    #[test]
    fn test_bucket_counts() {
        let tickets = seed_tickets(Timestamp::UNIX_EPOCH);
        let counts = bucket_counts(&tickets);
        assert_eq!(
            counts,
            BucketCounts {
                focus: 2,
                review: 1,
                escalated: 1,
                snoozed: 1
            }
        );
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.get(InboxFilter::Focus), 2);
    }

    #[test]
    fn test_search_empty_query_keeps_everything() {
        let tickets = seed_tickets(Timestamp::UNIX_EPOCH);
        let refs: Vec<&Ticket> = tickets.iter().collect();
        let results = search_tickets(&refs, "   ");
        assert_eq!(results.len(), 5);
        assert!(results.iter().all(|m| m.score == 0));
    }

    #[test]
    fn test_search_by_customer_name() {
        let tickets = seed_tickets(Timestamp::UNIX_EPOCH);
        let refs: Vec<&Ticket> = tickets.iter().collect();
        let results = search_tickets(&refs, "johnson");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].ticket.id, "T-1025");
    }

    #[test]
    fn test_search_highlights_subject() {
        let tickets = seed_tickets(Timestamp::UNIX_EPOCH);
        let refs: Vec<&Ticket> = tickets.iter().collect();
        let results = search_tickets(&refs, "unhappy");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].ticket.id, "T-1026");
        assert_eq!(results[0].subject_indices.len(), 7);
        assert_eq!(results[0].subject_indices.last(), Some(&33));
    }

    #[test]
    fn test_search_preserves_input_order() {
        let tickets = seed_tickets(Timestamp::UNIX_EPOCH);
        let refs: Vec<&Ticket> = tickets.iter().collect();
        let results = search_tickets(&refs, "t-10");
        let got: Vec<&str> = results.iter().map(|m| m.ticket.id.as_str()).collect();
        assert_eq!(got, ["T-1024", "T-1025", "T-1026", "T-1027", "T-1028"]);
    }

    #[test]
    fn test_triage_combines_filter_and_search() {
        let tickets = seed_tickets(Timestamp::UNIX_EPOCH);
        let results = triage(&tickets, InboxFilter::Focus, "invite");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].ticket.id, "T-1025");
        assert!(triage(&tickets, InboxFilter::Review, "invite").is_empty());
    }
}
