//! Performance figures for the dashboard screen, computed from the store.

use jiff::Timestamp;

use crate::triage::{BucketCounts, bucket_counts};
use crate::types::{Priority, Ticket, TicketStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub buckets: BucketCounts,
    pub resolved: usize,
    pub total: usize,
    /// Mean AI confidence over unresolved tickets
    pub average_confidence: Option<f64>,
    /// Unresolved tickets past their SLA deadline
    pub sla_breached: usize,
    /// Unresolved tickets due within the next hour
    pub sla_at_risk: usize,
    pub critical_open: usize,
    /// Customers with high churn risk and an unresolved ticket
    pub churn_risk_customers: Vec<String>,
}

impl DashboardStats {
    pub fn compute(tickets: &[Ticket], now: Timestamp) -> Self {
        let active: Vec<&Ticket> = tickets
            .iter()
            .filter(|t| t.status != TicketStatus::Resolved)
            .collect();

        let average_confidence = if active.is_empty() {
            None
        } else {
            let sum: u32 = active.iter().map(|t| u32::from(t.ai_confidence.value())).sum();
            Some(f64::from(sum) / active.len() as f64)
        };

        let mut churn_risk_customers: Vec<String> = Vec::new();
        for ticket in active.iter().filter(|t| t.is_high_churn_risk()) {
            if !churn_risk_customers.contains(&ticket.customer.name) {
                churn_risk_customers.push(ticket.customer.name.clone());
            }
        }

        Self {
            buckets: bucket_counts(tickets),
            resolved: tickets.len() - active.len(),
            total: tickets.len(),
            average_confidence,
            sla_breached: active.iter().filter(|t| t.is_sla_breached(now)).count(),
            sla_at_risk: active
                .iter()
                .filter(|t| !t.is_sla_breached(now) && t.minutes_until_sla(now) <= 60)
                .count(),
            critical_open: active
                .iter()
                .filter(|t| t.priority == Priority::Critical)
                .count(),
            churn_risk_customers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed_tickets;
    use jiff::SignedDuration;

    #[test]
    fn test_seed_stats() {
        let now = Timestamp::UNIX_EPOCH + SignedDuration::from_hours(100);
        let stats = DashboardStats::compute(&seed_tickets(now), now);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.resolved, 0);
        assert_eq!(stats.buckets.total(), 5);
        assert_eq!(stats.sla_breached, 0);
        assert_eq!(stats.sla_at_risk, 1);
        assert_eq!(stats.critical_open, 1);
        assert_eq!(stats.churn_risk_customers, ["Elena Rodriguez"]);
        let avg = stats.average_confidence.unwrap();
        assert!((avg - 85.6).abs() < 1e-9);
    }

    #[test]
    fn test_stats_after_deadlines_pass() {
        let start = Timestamp::UNIX_EPOCH + SignedDuration::from_hours(100);
        let mut tickets = seed_tickets(start);
        tickets[2].status = TicketStatus::Resolved;
        let later = start + SignedDuration::from_hours(5);
        let stats = DashboardStats::compute(&tickets, later);
        assert_eq!(stats.resolved, 1);
        assert_eq!(stats.sla_breached, 2);
        assert!(stats.churn_risk_customers.is_empty());
    }

    #[test]
    fn test_stats_all_resolved() {
        let now = Timestamp::UNIX_EPOCH;
        let mut tickets = seed_tickets(now);
        for ticket in &mut tickets {
            ticket.status = TicketStatus::Resolved;
        }
        let stats = DashboardStats::compute(&tickets, now);
        assert_eq!(stats.average_confidence, None);
        assert_eq!(stats.buckets.total(), 0);
    }
}
