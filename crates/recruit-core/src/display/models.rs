//! Display implementations for domain models.
//!
//! All output is markdown, rendered by the CLI with termimad and returned
//! verbatim by the MCP server.

use std::fmt;

use super::{
    collections::TimelineView,
    datetime::{LocalDate, LocalDateTime},
};
use crate::{
    models::{Plan, PlanMetadata, StageStatus, StatusKind, TimelineStep},
    tracker::PlanDetail,
};

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for StageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.with_icon())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.plan_name)?;
        writeln!(f)?;

        writeln!(f, "- Status: {} ({})", self.status, self.status.as_str())?;
        if let Some(request) = &self.request {
            writeln!(
                f,
                "- Request: {} (ID: {})",
                request.request_title, request.request_id
            )?;
        }
        writeln!(f, "- Sent by: {}", self.sender_name())?;
        if let Some(created_at) = &self.created_at {
            writeln!(f, "- Created: {}", LocalDateTime(created_at))?;
        }
        if let Some(deadline) = &self.recruitment_deadline {
            writeln!(f, "- Recruitment deadline: {}", LocalDate(deadline))?;
        }
        if let Some(deadline) = &self.delivery_deadline {
            writeln!(f, "- Delivery deadline: {}", LocalDate(deadline))?;
        }
        writeln!(
            f,
            "- Headcount: {} required, {} candidates to source",
            self.output_required(),
            self.input_required()
        )?;

        if let Some(request) = self.request.as_ref().filter(|r| !r.tech_quantities.is_empty()) {
            writeln!(f, "\n## Technologies")?;
            writeln!(f)?;
            for row in &request.tech_quantities {
                writeln!(f, "- {}: {}", row.technology_name, row.requested_count)?;
            }
        }

        if let Some(note) = self.note.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            writeln!(f)?;
            writeln!(f, "{note}")?;
        }

        Ok(())
    }
}

impl fmt::Display for TimelineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.key.index() + 1,
            self.title,
            self.status
        )?;
        writeln!(f)?;
        writeln!(f, "- Actor: {}", self.actor)?;
        writeln!(f, "- {}", self.detail)?;
        if self.status == StageStatus::Rejected {
            if let Some(reason) = &self.reject_reason {
                writeln!(f, "- Reason: {reason}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for PlanMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- Candidates: {} ({} hired)",
            self.candidate_count, self.candidate_passed_count
        )?;
        writeln!(f, "- Trainees: {}", self.training_count)?;
        writeln!(
            f,
            "- Handed over: {}",
            self.resolved_handover().unwrap_or_default()
        )?;
        if let Some(status) = &self.request_status {
            writeln!(f, "- Request status: {status}")?;
        }
        if self.has_reject_reason() {
            writeln!(f, "- Request rejection: {}", self.request_reject_reason.trim())?;
        }
        Ok(())
    }
}

impl fmt::Display for PlanDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plan)?;
        writeln!(f, "\n## Progress")?;
        writeln!(f)?;
        write!(f, "{}", self.metadata)?;
        writeln!(f, "\n## Timeline")?;
        writeln!(f)?;
        write!(f, "{}", TimelineView(&self.timeline))
    }
}
