use serde::{Deserialize, Serialize};

/// One party to the agreement. Plain data; the editor layer owns validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartyInfo {
    pub name: String,
    pub organization: String,
    pub email: String,
    pub address: String,
}

/// One row of the scope-of-work table. All three columns wrap independently
/// against their configured widths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScopeRow {
    pub category: String,
    pub flow: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MilestoneRow {
    pub title: String,
    pub days: u32,
    /// Payment weight in percent of the project fee.
    pub weight: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MilestoneGroup {
    pub title: String,
    pub rows: Vec<MilestoneRow>,
}

impl MilestoneGroup {
    pub fn total_days(&self) -> u32 {
        self.rows.iter().map(|row| row.days).sum()
    }
}

/// Narrative and closing paragraphs of the agreement. The defaults carry the
/// standard contract boilerplate so a freshly created agreement paginates
/// before the editor has touched any text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionTexts {
    pub intro: String,
    pub definitions: String,
    pub scope_narrative: String,
    pub approval: String,
    pub feedback: String,
    pub revisions: String,
    pub style_guide_lock: String,
}

impl Default for SectionTexts {
    fn default() -> Self {
        Self {
            intro: "This Service Agreement is entered into between the Agency and the \
                    Client identified below and governs the design and development \
                    services described in the Scope of Work. By signing this agreement \
                    both parties accept the deliverables, schedules and payment \
                    milestones set out in the sections that follow."
                .to_string(),
            definitions: "Deliverable means any artifact produced under this agreement, \
                    including wireframes, visual designs, source code and deployed \
                    environments. Business day means any day other than a Saturday, \
                    Sunday or public holiday at the Agency's principal place of \
                    business. Milestone means a named stage of work with an agreed \
                    duration and payment weight."
                .to_string(),
            scope_narrative: "The Agency will deliver the flows enumerated in the Scope \
                    of Work table above. Work outside the enumerated flows requires a \
                    written change order agreed by both parties before work begins."
                .to_string(),
            approval: "Each milestone deliverable is submitted to the Client for \
                    approval. A deliverable is considered accepted if the Client does \
                    not reject it in writing, with specific reasons, within five \
                    business days of submission."
                .to_string(),
            feedback: "The Client agrees to consolidate feedback from all of its \
                    stakeholders into a single response per review round. Feedback \
                    provided after a deliverable has been accepted is handled as a \
                    revision request."
                .to_string(),
            revisions: "Each milestone includes up to two rounds of revisions at no \
                    additional cost. Further rounds, or revisions that reopen accepted \
                    deliverables, are billed at the Agency's standard hourly rate."
                .to_string(),
            style_guide_lock: "Once the visual style guide has been approved it is \
                    locked for the remainder of the engagement. Subsequent changes to \
                    typography, color or component styling are treated as new scope."
                .to_string(),
        }
    }
}

/// Root document model for one pagination run. Immutable once handed to the
/// engine; the editor produces a fresh snapshot for every change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgreementModel {
    pub client: PartyInfo,
    pub agency: PartyInfo,
    pub scope: Vec<ScopeRow>,
    pub design_milestones: MilestoneGroup,
    pub development_milestones: MilestoneGroup,
    pub deployment_milestones: MilestoneGroup,
    pub sections: SectionTexts,
}

impl AgreementModel {
    pub fn milestone_groups(&self) -> [&MilestoneGroup; 3] {
        [
            &self.design_milestones,
            &self.development_milestones,
            &self.deployment_milestones,
        ]
    }

    /// A model with no rows and no text at all cannot produce a meaningful
    /// agreement; the engine rejects it up front.
    pub(crate) fn is_blank(&self) -> bool {
        let texts = &self.sections;
        self.scope.is_empty()
            && self.milestone_groups().iter().all(|g| g.rows.is_empty())
            && texts.intro.trim().is_empty()
            && texts.definitions.trim().is_empty()
            && texts.scope_narrative.trim().is_empty()
            && texts.approval.trim().is_empty()
            && texts.feedback.trim().is_empty()
            && texts.revisions.trim().is_empty()
            && texts.style_guide_lock.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_payload_maps_camel_case() {
        let json = r#"{
            "client": {"name": "Dana Reyes", "organization": "Northwind"},
            "scope": [{"category": "Onboarding", "flow": "Sign up", "description": "Email and SSO"}],
            "designMilestones": {"title": "Design", "rows": [{"title": "Wireframes", "days": 5, "weight": 10.0}]}
        }"#;
        let model: AgreementModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.client.name, "Dana Reyes");
        assert_eq!(model.scope[0].flow, "Sign up");
        assert_eq!(model.design_milestones.rows[0].days, 5);
        // Untouched sections fall back to the boilerplate.
        assert!(!model.sections.approval.is_empty());
    }

    #[test]
    fn total_days_sums_rows() {
        let group = MilestoneGroup {
            title: "Development".to_string(),
            rows: vec![
                MilestoneRow {
                    title: "API".to_string(),
                    days: 8,
                    weight: 20.0,
                },
                MilestoneRow {
                    title: "Frontend".to_string(),
                    days: 13,
                    weight: 25.0,
                },
            ],
        };
        assert_eq!(group.total_days(), 21);
    }

    #[test]
    fn default_model_is_not_blank() {
        assert!(!AgreementModel::default().is_blank());
    }

    #[test]
    fn stripped_model_is_blank() {
        let mut model = AgreementModel::default();
        model.sections = SectionTexts {
            intro: String::new(),
            definitions: String::new(),
            scope_narrative: String::new(),
            approval: String::new(),
            feedback: String::new(),
            revisions: String::new(),
            style_guide_lock: String::new(),
        };
        assert!(model.is_blank());
    }
}
