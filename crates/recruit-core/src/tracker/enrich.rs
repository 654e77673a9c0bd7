//! Status enrichment for plan lists and the plan detail view.

use futures::future::join_all;
use jiff::tz::TimeZone;
use log::{debug, warn};

use super::{PlanDetail, Tracker};
use crate::{
    error::{RecruitError, Result},
    models::{find_by_plan_name, find_by_request_title, Plan, PlanFilter, PlanMetadata},
    params::{ListPlans, ShowPlan},
    source::PlanSource,
    workflow::{build_workflow_timeline, derive_plan_status},
};

impl<S: PlanSource> Tracker<S> {
    /// Replaces every plan's status with its canonical status.
    ///
    /// For each plan the handover count and the request's rejection reason
    /// are looked up concurrently, starting from the values embedded in the
    /// plan. A failed lookup keeps those local values, so the result always
    /// has one entry per input plan, in input order.
    pub async fn enrich_plan_list(&self, plans: Vec<Plan>) -> Vec<Plan> {
        join_all(plans.into_iter().map(|plan| self.enrich_plan(plan))).await
    }

    async fn enrich_plan(&self, mut plan: Plan) -> Plan {
        let request_id = plan.request_id();
        let (handover, request) = tokio::join!(
            self.source.fetch_handover_count(plan.id),
            async {
                match request_id {
                    Some(id) => Some(self.source.fetch_request_detail(id).await),
                    None => None,
                }
            }
        );

        let mut handover_count = plan
            .handover_count
            .or(plan.delivered_count)
            .unwrap_or_default();
        match handover {
            Ok(Some(count)) => handover_count = count,
            Ok(None) => {}
            Err(e) => warn!("Lookup 'handover-count' for plan {} failed: {e}", plan.id),
        }

        let mut reject_reason = plan.request_reject_reason.clone().unwrap_or_default();
        match request {
            Some(Ok(Some(detail))) => {
                if let Some(reason) = detail.reject_reason.filter(|r| !r.is_empty()) {
                    reject_reason = reason;
                }
            }
            Some(Ok(None)) | None => {}
            Some(Err(e)) => warn!("Lookup 'request-detail' for plan {} failed: {e}", plan.id),
        }

        let metadata = PlanMetadata::for_listing(handover_count, reject_reason);
        let status = derive_plan_status(&plan, Some(&metadata));
        if status != plan.status {
            debug!(
                "Plan {} status {} -> {}",
                plan.id,
                plan.status.as_str(),
                status.as_str()
            );
        }
        plan.status = status;
        plan
    }

    /// Lists plans with canonical statuses, filtered and newest first.
    ///
    /// Dates are matched in the system time zone.
    pub async fn list_plans(&self, params: &ListPlans) -> Result<Vec<Plan>> {
        let filter = PlanFilter::try_from(params)?;
        let plans = self.source.fetch_plans().await?;
        let enriched = self.enrich_plan_list(plans).await;
        Ok(filter.apply(&enriched, &TimeZone::system()))
    }

    /// Loads a plan with fresh metadata, its canonical status and timeline.
    ///
    /// `previous` is kept when every metadata lookup fails.
    pub async fn plan_detail(&self, plan_id: u64, previous: &PlanMetadata) -> Result<PlanDetail> {
        let mut plan = self.find_plan(plan_id).await?;
        let metadata = self
            .refresh_metadata(Some(plan.id), plan.request_id(), previous)
            .await;

        let status = derive_plan_status(&plan, Some(&metadata));
        let timeline = build_workflow_timeline(&plan, &metadata);
        if status != plan.status {
            plan.status = status.clone();
        }

        Ok(PlanDetail {
            plan,
            metadata,
            status,
            timeline,
        })
    }

    /// Resolves which plan a [`ShowPlan`] refers to.
    ///
    /// # Errors
    ///
    /// * `RecruitError::InvalidInput` - No selector given, or no plan has the
    ///   given name or request title
    /// * `RecruitError::PlanNotFound` - No plan with the given ID
    pub async fn locate_plan(&self, params: &ShowPlan) -> Result<Plan> {
        if let Some(id) = params.id {
            return self.find_plan(id).await;
        }

        let name = params.name.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let request = params
            .request
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let (field, found) = match (name, request) {
            (Some(name), _) => {
                let plans = self.source.fetch_plans().await?;
                ("name", find_by_plan_name(&plans, name).cloned())
            }
            (None, Some(title)) => {
                let plans = self.source.fetch_plans().await?;
                ("request", find_by_request_title(&plans, title).cloned())
            }
            (None, None) => {
                return Err(RecruitError::invalid_input("id")
                    .with_reason("Give a plan ID, a plan name or a request title"));
            }
        };

        found.ok_or_else(|| {
            RecruitError::invalid_input(field).with_reason(format!(
                "No plan matches '{}'",
                name.or(request).unwrap_or_default()
            ))
        })
    }

    /// [`Tracker::plan_detail`] for a plan picked by ID, name or request title.
    pub async fn show_plan(&self, params: &ShowPlan, previous: &PlanMetadata) -> Result<PlanDetail> {
        let plan = self.locate_plan(params).await?;
        self.plan_detail(plan.id, previous).await
    }

    pub(crate) async fn find_plan(&self, plan_id: u64) -> Result<Plan> {
        self.source
            .fetch_plans()
            .await?
            .into_iter()
            .find(|plan| plan.id == plan_id)
            .ok_or(RecruitError::PlanNotFound { id: plan_id })
    }
}
