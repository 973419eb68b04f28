//! Built-in ticket dataset loaded at startup.
//!
//! Timestamps are expressed relative to `now` so the inbox always shows
//! recent tickets and SLA deadlines in the near future.

use jiff::{SignedDuration, Timestamp};

use crate::types::{Customer, Percent, Priority, Sentiment, Ticket, TicketStatus, Tier};

fn minutes_ago(now: Timestamp, minutes: i64) -> Timestamp {
    now - SignedDuration::from_mins(minutes)
}

fn hours_ahead(now: Timestamp, hours: i64) -> Timestamp {
    now + SignedDuration::from_hours(hours)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn customer(id: &str, name: &str, email: &str, tier: Tier, ltv: u64, churn_risk: u8) -> Customer {
    let avatar_index = id.trim_start_matches("C-").trim_start_matches('0');
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        tier,
        ltv,
        avatar_url: format!("https://picsum.photos/200/200?random={avatar_index}"),
        churn_risk: Percent::clamped(churn_risk),
    }
}

/// The five demo tickets the inbox starts with
pub fn seed_tickets(now: Timestamp) -> Vec<Ticket> {
    vec![
        Ticket {
            id: "T-1024".to_string(),
            customer_id: "C-001".to_string(),
            customer: customer(
                "C-001",
                "Sarah Chen",
                "sarah.c@techcorp.io",
                Tier::Enterprise,
                12_500,
                12,
            ),
            subject: "API Rate Limiting interfering with production".to_string(),
            description: "Hi support, we're seeing 429 errors on our production endpoint starting 20 minutes ago. We are on the Enterprise plan and shouldn't be hitting limits yet. This is blocking our checkout flow.".to_string(),
            received_at: minutes_ago(now, 15),
            status: TicketStatus::Open,
            priority: Priority::Critical,
            ai_confidence: Percent::clamped(94),
            ai_summary: "Customer reports 429 errors (Rate Limiting) on production endpoints despite Enterprise tier. Blocking checkout flow.".to_string(),
            ai_detected_issue: "API Infrastructure / False Positive Limit".to_string(),
            ai_reasoning: strings(&[
                "Customer is Enterprise Tier (Unlimited API access).",
                "Keywords '429 error' and 'blocking checkout' indicate high urgency.",
                "System logs show a spike in traffic from their IP triggered DDOS protection erroneously.",
            ]),
            suggested_response: "Hi Sarah,\n\nI've immediately investigated the 429 errors you're seeing. It looks like our automated DDOS protection triggered a false positive due to the traffic spike. I have manually whitelisted your production IP range, and the errors should subside within the next 2 minutes.\n\nI'll monitor this closely for the next hour to ensure stability.\n\nBest,\n[Agent Name]".to_string(),
            sla_breach_at: hours_ahead(now, 1),
            sentiment: Sentiment::Negative,
            tags: strings(&["Technical", "Urgent", "Enterprise"]),
        },
        Ticket {
            id: "T-1025".to_string(),
            customer_id: "C-002".to_string(),
            customer: customer(
                "C-002",
                "Marcus Johnson",
                "marcus@startuplab.com",
                Tier::Pro,
                850,
                5,
            ),
            subject: "How do I invite a teammate?".to_string(),
            description: "Hey, just upgraded to Pro but can't find the invite button. Can you help?".to_string(),
            received_at: minutes_ago(now, 45),
            status: TicketStatus::Open,
            priority: Priority::Low,
            ai_confidence: Percent::clamped(99),
            ai_summary: "User needs help locating the 'Invite Team Member' functionality after upgrading to Pro.".to_string(),
            ai_detected_issue: "UX / Navigation Support".to_string(),
            ai_reasoning: strings(&[
                "Question matches FAQ #402 exactly.",
                "User status is confirmed as Pro.",
                "Low sentiment risk.",
            ]),
            suggested_response: "Hi Marcus,\n\nWelcome to Pro! You can invite your team by going to Settings > Team Members and clicking the blue 'Invite' button in the top right corner.\n\nHere is a quick link: [Link to Settings]\n\nLet me know if you have any trouble finding it!\n\nCheers,\n[Agent Name]".to_string(),
            sla_breach_at: hours_ahead(now, 4),
            sentiment: Sentiment::Positive,
            tags: strings(&["How-to", "Onboarding"]),
        },
        Ticket {
            id: "T-1026".to_string(),
            customer_id: "C-003".to_string(),
            customer: customer(
                "C-003",
                "Elena Rodriguez",
                "elena@vandalay.com",
                Tier::Free,
                0,
                85,
            ),
            subject: "Refund request - extremely unhappy".to_string(),
            description: "I was charged for a Pro subscription I didn't authorize. I want my money back immediately or I will file a chargeback. This is ridiculous.".to_string(),
            received_at: minutes_ago(now, 120),
            status: TicketStatus::Open,
            priority: Priority::High,
            ai_confidence: Percent::clamped(72),
            ai_summary: "Customer demands refund for unauthorized Pro charge. Threatening chargeback.".to_string(),
            ai_detected_issue: "Billing / Refund / Churn Risk".to_string(),
            ai_reasoning: strings(&[
                "Detected high negative sentiment and keywords 'chargeback', 'ridiculous'.",
                "Refund policy allows full refund within 7 days.",
                "Billing history shows trial ended yesterday.",
            ]),
            suggested_response: "Hi Elena,\n\nI completely understand your concern. It looks like your trial automatically converted to a subscription yesterday. Since you caught this immediately, I have processed a full refund of $29.00 right now. You should see it on your statement in 3-5 business days.\n\nI've also downgraded your account back to Free so no future charges will occur.\n\nSincere apologies for the surprise.\n\nBest,\n[Agent Name]".to_string(),
            sla_breach_at: hours_ahead(now, 2),
            sentiment: Sentiment::Angry,
            tags: strings(&["Billing", "Refund", "Risk"]),
        },
        Ticket {
            id: "T-1027".to_string(),
            customer_id: "C-004".to_string(),
            customer: customer(
                "C-004",
                "David Kim",
                "david.k@enterprise.net",
                Tier::Enterprise,
                45_000,
                2,
            ),
            subject: "Custom SSO Integration Issue".to_string(),
            description: "We are trying to configure SAML with Okta but getting a 500 error on the callback URL. Logs attached.".to_string(),
            received_at: minutes_ago(now, 300),
            status: TicketStatus::Escalated,
            priority: Priority::Medium,
            ai_confidence: Percent::clamped(65),
            ai_summary: "Enterprise customer facing 500 errors during SAML SSO setup with Okta.".to_string(),
            ai_detected_issue: "Technical / Integration".to_string(),
            ai_reasoning: strings(&[
                "Complex integration issue requiring log analysis.",
                "AI lacks access to backend logs for this specific error code.",
                "Escalated to Solutions Engineering.",
            ]),
            suggested_response: String::new(),
            sla_breach_at: hours_ahead(now, 24),
            sentiment: Sentiment::Neutral,
            tags: strings(&["Technical", "SSO", "Escalated"]),
        },
        Ticket {
            id: "T-1028".to_string(),
            customer_id: "C-005".to_string(),
            customer: customer(
                "C-005",
                "Priya Patel",
                "priya@agency.design",
                Tier::Pro,
                1_200,
                8,
            ),
            subject: "Feature Request: Dark Mode".to_string(),
            description: "Any updates on when dark mode is coming? My eyes are burning.".to_string(),
            received_at: minutes_ago(now, 1440),
            status: TicketStatus::Pending,
            priority: Priority::Low,
            ai_confidence: Percent::clamped(98),
            ai_summary: "User inquiring about Dark Mode release date.".to_string(),
            ai_detected_issue: "Feature Request".to_string(),
            ai_reasoning: strings(&[
                "Feature request tag identified.",
                "Snoozed until next product release update.",
            ]),
            suggested_response: String::new(),
            sla_breach_at: hours_ahead(now, 48),
            sentiment: Sentiment::Neutral,
            tags: strings(&["Feature Request", "Snoozed"]),
        },
    ]
}
