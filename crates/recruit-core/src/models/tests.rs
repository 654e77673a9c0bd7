#[cfg(test)]
mod model_tests {
    use jiff::{civil::date, tz::TimeZone, Timestamp};
    use serde_json::json;

    use crate::{
        models::{
            coerce_count, find_by_plan_name, find_by_request_title, Candidate, CreatedOn, Plan,
            PlanFilter, PlanMetadata, Snapshot, SourceRequest, StatusKind, StepKey, TechQuantity,
        },
        params::ListPlans,
    };

    fn create_test_plan(id: u64, name: &str, created: i64) -> Plan {
        let mut plan = Plan::new(id, name);
        plan.created_at = Some(Timestamp::from_second(created).unwrap());
        plan
    }

    fn with_request(mut plan: Plan, title: &str, counts: &[u32]) -> Plan {
        plan.request = Some(SourceRequest {
            request_id: plan.id * 10,
            request_title: title.to_string(),
            tech_quantities: counts
                .iter()
                .enumerate()
                .map(|(i, n)| TechQuantity {
                    technology_name: format!("tech-{i}"),
                    requested_count: *n,
                })
                .collect(),
            ..Default::default()
        });
        plan
    }

    #[test]
    fn test_status_normalize_known_values() {
        assert_eq!(StatusKind::normalize("new"), StatusKind::New);
        assert_eq!(StatusKind::normalize(" Confirmed"), StatusKind::Confirmed);
        assert_eq!(StatusKind::normalize("REJECTED\n"), StatusKind::Rejected);
        assert_eq!(StatusKind::normalize("canceled"), StatusKind::Canceled);
        assert_eq!(StatusKind::normalize("FAILURE"), StatusKind::Failed);
        assert_eq!(StatusKind::normalize(""), StatusKind::Other(String::new()));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(StatusKind::New.label(), "Mới tạo");
        assert_eq!(StatusKind::Completed.label(), "Đã hoàn thành");
        assert_eq!(StatusKind::Failed.label(), "Thất bại");
        assert_eq!(StatusKind::Other(String::new()).label(), "Không rõ");
        assert_eq!(StatusKind::normalize("on_hold").label(), "ON_HOLD");
    }

    #[test]
    fn test_status_serde_keeps_unknown_values() {
        let status: StatusKind = serde_json::from_value(json!("paused")).unwrap();
        assert_eq!(status, StatusKind::Other("PAUSED".to_string()));
        assert_eq!(serde_json::to_value(&status).unwrap(), json!("PAUSED"));
        assert_eq!(
            serde_json::to_value(StatusKind::Confirmed).unwrap(),
            json!("CONFIRMED")
        );
    }

    #[test]
    fn test_plan_deserializes_lenient_counts() {
        let plan: Plan = serde_json::from_value(json!({
            "id": 5,
            "plan_name": "Kế hoạch Java",
            "status": "completed",
            "handover_count": "4",
            "delivered_count": "n/a",
            "recruitment_deadline": "2025-06-30"
        }))
        .unwrap();

        assert_eq!(plan.status, StatusKind::Completed);
        assert_eq!(plan.handover_count, Some(4));
        assert_eq!(plan.delivered_count, None);
        assert_eq!(plan.recruitment_deadline, Some(date(2025, 6, 30)));
        assert!(plan.request.is_none());
    }

    #[test]
    fn test_coerce_count() {
        assert_eq!(coerce_count(&json!(7)), Some(7));
        assert_eq!(coerce_count(&json!(3.0)), Some(3));
        assert_eq!(coerce_count(&json!(" 12 ")), Some(12));
        assert_eq!(coerce_count(&json!(-1)), None);
        assert_eq!(coerce_count(&json!(2.5)), None);
        assert_eq!(coerce_count(&json!(null)), None);
        assert_eq!(coerce_count(&json!([1])), None);
    }

    #[test]
    fn test_required_headcount() {
        let plan = with_request(Plan::new(1, "p"), "r", &[3, 2, 0]);
        assert_eq!(plan.output_required(), 5);
        assert_eq!(plan.input_required(), 10);

        let bare = Plan::new(2, "no request");
        assert_eq!(bare.output_required(), 0);
        assert_eq!(bare.input_required(), 0);
    }

    #[test]
    fn test_candidate_hired_marker() {
        let hired = |status: Option<&str>| Candidate {
            plan_id: 1,
            full_name: "A".to_string(),
            status: status.map(str::to_string),
        };

        assert!(hired(Some("Đã nhận việc")).is_hired());
        assert!(hired(Some("  ĐÃ NHẬN VIỆC ")).is_hired());
        assert!(!hired(Some("Đang phỏng vấn")).is_hired());
        assert!(!hired(None).is_hired());
    }

    #[test]
    fn test_metadata_baseline() {
        let baseline = PlanMetadata::default();
        assert_eq!(baseline.handover_count, Some(0));
        assert_eq!(baseline.delivered_count, None);
        assert_eq!(baseline.request_status, None);
        assert!(!baseline.has_reject_reason());
        assert_eq!(baseline.candidate_count, 0);
        assert_eq!(baseline.training_count, 0);

        let listing = PlanMetadata::for_listing(3, "  ");
        assert_eq!(listing.resolved_handover(), Some(3));
        assert!(!listing.has_reject_reason());
    }

    #[test]
    fn test_created_on_parsing() {
        assert_eq!("2024".parse::<CreatedOn>(), Ok(CreatedOn::Year(2024)));
        assert_eq!(
            "2024-02".parse::<CreatedOn>(),
            Ok(CreatedOn::Month {
                year: 2024,
                month: 2
            })
        );
        assert_eq!(
            "2024-02-29".parse::<CreatedOn>(),
            Ok(CreatedOn::Day(date(2024, 2, 29)))
        );
        assert!("2024-13".parse::<CreatedOn>().is_err());
        assert!("2023-02-29".parse::<CreatedOn>().is_err());
        assert!("yesterday".parse::<CreatedOn>().is_err());
        assert_eq!(CreatedOn::Month { year: 2024, month: 2 }.to_string(), "2024-02");
    }

    #[test]
    fn test_filter_sorts_newest_first_and_undated_last() {
        let plans = vec![
            create_test_plan(1, "Kế hoạch A", 1_700_000_000),
            Plan::new(2, "Kế hoạch B"),
            create_test_plan(3, "Kế hoạch C", 1_710_000_000),
        ];

        let sorted = PlanFilter::default().apply(&plans, &TimeZone::UTC);
        let ids: Vec<u64> = sorted.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_filter_by_name_status_and_date() {
        let mut rejected = create_test_plan(1, "Tuyển Java", 1_704_067_200); // 2024-01-01 UTC
        rejected.status = StatusKind::Rejected;
        let plans = vec![
            rejected,
            create_test_plan(2, "Tuyển JAVA nâng cao", 1_706_745_600), // 2024-02-01 UTC
            create_test_plan(3, "Tuyển React", 1_704_067_200),
            Plan::new(4, "Tuyển Java chưa có ngày"),
        ];

        let by_name = PlanFilter {
            name_contains: Some("java".to_string()),
            ..Default::default()
        };
        assert_eq!(by_name.apply(&plans, &TimeZone::UTC).len(), 3);

        let by_status = PlanFilter {
            status: Some(StatusKind::New),
            ..Default::default()
        };
        assert_eq!(by_status.apply(&plans, &TimeZone::UTC).len(), 3);

        let by_month = PlanFilter {
            created_on: Some(CreatedOn::Month {
                year: 2024,
                month: 1,
            }),
            ..Default::default()
        };
        let january: Vec<u64> = by_month
            .apply(&plans, &TimeZone::UTC)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(january.len(), 2);
        assert!(january.contains(&1) && january.contains(&3));
    }

    #[test]
    fn test_filter_status_uses_derived_status() {
        let mut plan = with_request(create_test_plan(1, "p", 1_704_067_200), "r", &[10]);
        plan.status = StatusKind::Completed;
        plan.handover_count = Some(4);
        plan.request_reject_reason = Some("Thiếu nhân sự".to_string());

        let failed = PlanFilter {
            status: Some(StatusKind::Failed),
            ..Default::default()
        };
        assert!(failed.matches(&plan, &TimeZone::UTC));
    }

    #[test]
    fn test_filter_from_params_rejects_bad_date() {
        let params = ListPlans {
            date: Some("01/02/2024".to_string()),
            ..Default::default()
        };
        let err = PlanFilter::try_from(&params).unwrap_err();
        assert!(err.to_string().contains("'date'"));
    }

    #[test]
    fn test_find_helpers_ignore_case() {
        let plans = vec![
            with_request(Plan::new(1, "Kế hoạch Java"), "Nhu cầu Java", &[1]),
            with_request(Plan::new(2, "Kế hoạch Go"), "Nhu cầu Go", &[1]),
        ];

        assert_eq!(find_by_plan_name(&plans, "kế hoạch go").map(|p| p.id), Some(2));
        assert_eq!(
            find_by_request_title(&plans, "NHU CẦU JAVA").map(|p| p.id),
            Some(1)
        );
        assert!(find_by_plan_name(&plans, "Kế hoạch").is_none());
    }

    #[test]
    fn test_snapshot_from_json() {
        let snapshot = Snapshot::from_json(
            r#"{
                "requests": [{"request_id": 3, "status": "rejected", "reject_reason": "Hết ngân sách"}],
                "plans": [{"id": 1, "plan_name": "Kế hoạch", "request": {"request_id": 3}}],
                "trainees": [{"plan_id": 1, "full_name": "B", "delivered": true}]
            }"#,
        )
        .unwrap();

        assert_eq!(snapshot.requests[0].status, Some(StatusKind::Rejected));
        assert_eq!(snapshot.plans[0].request_id(), Some(3));
        assert!(snapshot.candidates.is_empty());
        assert!(snapshot.trainees[0].delivered);
    }

    #[test]
    fn test_step_keys_are_ordered() {
        for (i, key) in StepKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
        assert_eq!(
            serde_json::to_value(StepKey::PlanApprove).unwrap(),
            json!("plan-approve")
        );
    }
}
