//! Confirm and reject actions.

use log::info;

use super::{Tracker, REJECT_NOTE_PREFIX};
use crate::{
    error::{RecruitError, Result},
    models::{Plan, StatusKind},
    params::{Id, RejectPlan},
    source::PlanSource,
    workflow::derive_plan_status,
};

impl<S: PlanSource> Tracker<S> {
    /// Confirms a plan that is still awaiting approval.
    ///
    /// # Errors
    ///
    /// * `RecruitError::PlanNotFound` - No plan with this ID
    /// * `RecruitError::InvalidInput` - The plan is no longer `NEW`
    pub async fn confirm_plan(&self, params: &Id) -> Result<Plan> {
        self.ensure_pending(params.id).await?;
        let plan = self.source.confirm_plan(params.id).await?;
        info!("Plan {} confirmed", plan.id);
        Ok(plan)
    }

    /// Rejects a plan that is still awaiting approval.
    ///
    /// The stored note is the reason prefixed with [`REJECT_NOTE_PREFIX`].
    ///
    /// # Errors
    ///
    /// * `RecruitError::InvalidInput` - The reason is blank or the plan is no
    ///   longer `NEW`
    /// * `RecruitError::PlanNotFound` - No plan with this ID
    pub async fn reject_plan(&self, params: &RejectPlan) -> Result<Plan> {
        let reason = params.validated_reason()?;
        self.ensure_pending(params.id).await?;

        let note = format!("{REJECT_NOTE_PREFIX}{reason}");
        let plan = self.source.reject_plan(params.id, &note).await?;
        info!("Plan {} rejected", plan.id);
        Ok(plan)
    }

    async fn ensure_pending(&self, plan_id: u64) -> Result<()> {
        let plan = self.find_plan(plan_id).await?;
        let status = derive_plan_status(&plan, None);
        if status != StatusKind::New {
            return Err(RecruitError::invalid_input("status").with_reason(format!(
                "Plan {plan_id} is {} ({}); only NEW plans can be approved or rejected",
                status.as_str(),
                status.label()
            )));
        }
        Ok(())
    }
}
