pub const SAMPLE_STAKEHOLDERS: &str = r#"# Stakeholder profiles, keyed by email.
stakeholders:
  - id: maria.chen@example.com
    name: Maria Chen
    role: VP Product
    authority_level: executive
    communication:
      channel: meeting
      frequency: weekly
      detail: summary
    influence:
      authority: 0.9
      expertise: 0.6
      network: 0.8
    interests:
      - revenue growth
      - launch dates

  - id: dev.okafor@example.com
    name: Dev Okafor
    role: Engineering Manager
    authority_level: manager
    communication:
      channel: chat
      frequency: daily
      detail: detailed
    influence:
      authority: 0.6
      expertise: 0.8
      network: 0.5
    interests:
      - team capacity
      - technical debt

  - id: lena.fischer@example.com
    name: Lena Fischer
    role: Security Lead
    authority_level: senior
    communication:
      channel: document
      frequency: biweekly
      detail: detailed
    influence:
      authority: 0.5
      expertise: 0.9
      network: 0.4
      weights:
        authority: 0.3
        expertise: 0.5
        network: 0.2
    interests:
      - compliance
"#;

pub const SAMPLE_FRAMEWORKS: &str = r#"# Decision frameworks. Criteria weights must sum to 1.
frameworks:
  - name: weighted-scoring
    description: Rate each option per criterion and take the weighted sum.
    scale:
      min: 1
      max: 5
    criteria:
      - name: cost
        weight: 0.3
      - name: impact
        weight: 0.4
      - name: risk
        weight: 0.3

  - name: build-vs-buy
    description: Compare building in house against buying a vendor product.
    criteria:
      - name: time_to_market
        weight: 0.35
      - name: total_cost
        weight: 0.25
      - name: control
        weight: 0.2
      - name: maintenance
        weight: 0.2
"#;

pub const SAMPLE_PROJECTS: &str = r#"# Projects, their owners and milestones.
projects:
  - id: billing-v2
    name: Billing platform v2
    owner: maria.chen@example.com
    framework: build-vs-buy
    stakeholders:
      - maria.chen@example.com
      - dev.okafor@example.com
      - lena.fischer@example.com
    milestones:
      - name: vendor shortlist
        due: 2026-09-15
        done: true
      - name: decision
        due: 2026-11-02
      - name: pilot
        due: 2027-01-18

  - id: mobile-redesign
    name: Mobile app redesign
    owner: dev.okafor@example.com
    framework: weighted-scoring
    stakeholders:
      - dev.okafor@example.com
    milestones:
      - name: research readout
        due: 2026-10-30
"#;

/// Sample record files written by `decide init`, as (file name, content)
pub fn sample_files(config: &crate::config::DecideConfig) -> Vec<(&str, &'static str)> {
    vec![
        (config.stakeholders.as_str(), SAMPLE_STAKEHOLDERS),
        (config.frameworks.as_str(), SAMPLE_FRAMEWORKS),
        (config.projects.as_str(), SAMPLE_PROJECTS),
    ]
}
