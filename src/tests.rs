#[cfg(test)]
mod integration_tests {
    use crate::schemas::ApiResponse;
    use crate::test_utils::test_utils::{date, seed_analytic_invoice, setup_test_app};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use model::entities::{account_move, journal};
    use rust_decimal::Decimal;
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    };
    use serde_json::json;

    #[tokio::test]
    async fn test_health_check() {
        let (app, _state, _master) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_timesheet_line_derives_fields() {
        let (app, _state, master) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/v1/timesheet-lines")
            .json(&json!({
                "name": "migration work",
                "date": "2024-01-30",
                "unit_amount": "8",
                "amount": "800",
                "uom": "hour",
                "user_id": master.alice_id,
                "company_id": master.company_id,
                "task_id": master.task_id,
                "project_id": master.project_id,
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);

        // Product, periods and task flags are derived server-side.
        let line = &body.data;
        assert_eq!(line["product_id"], master.product_id);
        assert_eq!(line["week_id"], master.week_id);
        assert_eq!(line["month_id"], master.month_id);
        assert_eq!(line["correction_charge"], true);
        assert_eq!(line["chargeable"], true);
        assert_eq!(line["state"], "draft");
    }

    #[tokio::test]
    async fn test_update_timesheet_line_reresolves_product() {
        let (app, _state, master) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_response = server
            .post("/api/v1/timesheet-lines")
            .json(&json!({
                "name": "migration work",
                "date": "2024-01-30",
                "unit_amount": "8",
                "amount": "800",
                "uom": "hour",
                "user_id": master.alice_id,
                "company_id": master.company_id,
                "task_id": master.task_id,
            }))
            .await;
        create_response.assert_status(StatusCode::CREATED);
        let create_body: ApiResponse<serde_json::Value> = create_response.json();
        let line_id = create_body.data["id"].as_i64().unwrap();
        assert_eq!(create_body.data["product_id"], master.product_id);

        // Bob has no product assignment on this task.
        let response = server
            .put(&format!("/api/v1/timesheet-lines/{}", line_id))
            .json(&json!({ "user_id": master.bob_id }))
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["user_id"], master.bob_id);
        assert!(body.data["product_id"].is_null());
    }

    /// Creates a draft customer invoice billing the seeded analytic
    /// invoice, returning its id.
    async fn create_invoice_for_analytic(
        server: &TestServer,
        master: &crate::test_utils::test_utils::MasterData,
        analytic_id: i32,
    ) -> i64 {
        let response = server
            .post("/api/v1/invoices")
            .json(&json!({
                "invoice_type": "out_invoice",
                "journal_id": master.sale_journal_id,
                "account_id": master.receivable_id,
                "lines": [{
                    "name": "Consulting January",
                    "quantity": "8",
                    "price_unit": "100",
                    "account_id": master.revenue_id,
                    "product_id": master.product_id,
                    "analytic_invoice_id": analytic_id,
                    "user_id": master.alice_id,
                }],
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["month_id"], master.month_id);
        body.data["id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn test_open_invoice_creates_wip_entry_and_reversal() {
        let (app, state, master) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let (analytic_id, _) =
            seed_analytic_invoice(&state.db, &master, Decimal::new(8, 0), Decimal::new(800, 0))
                .await;
        let invoice_id = create_invoice_for_analytic(&server, &master, analytic_id).await;

        // Worked in January, invoiced in February.
        let response = server
            .post(&format!("/api/v1/invoices/{}/open", invoice_id))
            .json(&json!({ "date": "2024-02-15" }))
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["state"], "open");
        assert_eq!(body.data["number"], "INV/2024/00001");
        assert!(!body.data["move_id"].is_null());
        assert!(!body.data["wip_move_id"].is_null());

        // The WIP journal holds the entry at the end of the worked month
        // plus its next-day reversal.
        let wip_journal = journal::Entity::find()
            .filter(journal::Column::JournalType.eq(journal::JournalType::Wip))
            .one(&state.db)
            .await
            .unwrap()
            .unwrap();
        let wip_moves = account_move::Entity::find()
            .filter(account_move::Column::JournalId.eq(wip_journal.id))
            .order_by_asc(account_move::Column::Id)
            .all(&state.db)
            .await
            .unwrap();
        assert_eq!(wip_moves.len(), 2);
        assert_eq!(wip_moves[0].date, date(2024, 1, 31));
        assert_eq!(wip_moves[1].date, date(2024, 2, 1));
        assert!(wip_moves[1].name.starts_with("WIP/2024/"));
    }

    #[tokio::test]
    async fn test_open_invoice_same_month_skips_wip() {
        let (app, state, master) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let (analytic_id, _) =
            seed_analytic_invoice(&state.db, &master, Decimal::new(8, 0), Decimal::new(800, 0))
                .await;
        let invoice_id = create_invoice_for_analytic(&server, &master, analytic_id).await;

        let response = server
            .post(&format!("/api/v1/invoices/{}/open", invoice_id))
            .json(&json!({ "date": "2024-01-25" }))
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["state"], "open");
        assert!(!body.data["move_id"].is_null());
        assert!(body.data["wip_move_id"].is_null());
    }

    #[tokio::test]
    async fn test_open_invoice_twice_is_conflict() {
        let (app, state, master) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let (analytic_id, _) =
            seed_analytic_invoice(&state.db, &master, Decimal::new(8, 0), Decimal::new(800, 0))
                .await;
        let invoice_id = create_invoice_for_analytic(&server, &master, analytic_id).await;

        server
            .post(&format!("/api/v1/invoices/{}/open", invoice_id))
            .json(&json!({ "date": "2024-02-15" }))
            .await
            .assert_status(StatusCode::OK);

        let response = server
            .post(&format!("/api/v1/invoices/{}/open", invoice_id))
            .json(&json!({ "date": "2024-02-15" }))
            .await;
        response.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_refund_gets_no_wip_entry() {
        let (app, state, master) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let (analytic_id, _) =
            seed_analytic_invoice(&state.db, &master, Decimal::new(8, 0), Decimal::new(800, 0))
                .await;

        let create_response = server
            .post("/api/v1/invoices")
            .json(&json!({
                "invoice_type": "out_refund",
                "journal_id": master.sale_journal_id,
                "account_id": master.receivable_id,
                "lines": [{
                    "name": "Credit January",
                    "quantity": "8",
                    "price_unit": "100",
                    "account_id": master.revenue_id,
                    "analytic_invoice_id": analytic_id,
                    "user_id": master.alice_id,
                }],
            }))
            .await;
        create_response.assert_status(StatusCode::CREATED);
        let create_body: ApiResponse<serde_json::Value> = create_response.json();
        let invoice_id = create_body.data["id"].as_i64().unwrap();

        let response = server
            .post(&format!("/api/v1/invoices/{}/open", invoice_id))
            .json(&json!({ "date": "2024-02-15" }))
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(!body.data["move_id"].is_null());
        assert!(body.data["wip_move_id"].is_null());
    }

    #[tokio::test]
    async fn test_missing_wip_sequence_is_unprocessable() {
        let (app, state, master) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let (analytic_id, _) =
            seed_analytic_invoice(&state.db, &master, Decimal::new(8, 0), Decimal::new(800, 0))
                .await;
        let invoice_id = create_invoice_for_analytic(&server, &master, analytic_id).await;

        // Strip the sequence off the WIP journal.
        let wip_journal = journal::Entity::find()
            .filter(journal::Column::JournalType.eq(journal::JournalType::Wip))
            .one(&state.db)
            .await
            .unwrap()
            .unwrap();
        let mut active: journal::ActiveModel = wip_journal.into();
        active.sequence_id = Set(None);
        active.update(&state.db).await.unwrap();

        let response = server
            .post(&format!("/api/v1/invoices/{}/open", invoice_id))
            .json(&json!({ "date": "2024-02-15" }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "MISSING_WIP_SEQUENCE");
        assert_eq!(body["error"], "Please define a sequence on the WIP journal");
    }

    #[tokio::test]
    async fn test_cancel_invoice_removes_wip_entry() {
        let (app, state, master) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let (analytic_id, _) =
            seed_analytic_invoice(&state.db, &master, Decimal::new(8, 0), Decimal::new(800, 0))
                .await;
        let invoice_id = create_invoice_for_analytic(&server, &master, analytic_id).await;

        let open_response = server
            .post(&format!("/api/v1/invoices/{}/open", invoice_id))
            .json(&json!({ "date": "2024-02-15" }))
            .await;
        open_response.assert_status(StatusCode::OK);
        let open_body: ApiResponse<serde_json::Value> = open_response.json();
        let wip_move_id = open_body.data["wip_move_id"].as_i64().unwrap() as i32;

        let response = server
            .post(&format!("/api/v1/invoices/{}/cancel", invoice_id))
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["state"], "cancelled");
        assert!(body.data["wip_move_id"].is_null());
        assert!(body.data["move_id"].is_null());

        // The WIP move is gone from the ledger.
        let deleted = account_move::Entity::find_by_id(wip_move_id)
            .one(&state.db)
            .await
            .unwrap();
        assert!(deleted.is_none());
    }

    #[tokio::test]
    async fn test_timesheet_groups_report() {
        let (app, state, master) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let (analytic_id, _) =
            seed_analytic_invoice(&state.db, &master, Decimal::new(8, 0), Decimal::new(800, 0))
                .await;
        let invoice_id = create_invoice_for_analytic(&server, &master, analytic_id).await;

        let response = server
            .get(&format!("/api/v1/invoices/{}/timesheet-groups", invoice_id))
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);

        let buckets = body.data["buckets"].as_array().unwrap();
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0]["project_id"], master.project_id);
        assert_eq!(buckets[0]["user_id"], master.alice_id);
        assert_eq!(buckets[0]["user_name"], "alice");
        let total_hours: Decimal = buckets[0]["total_hours"].as_str().unwrap().parse().unwrap();
        assert_eq!(total_hours, Decimal::new(8, 0));
        assert_eq!(buckets[0]["lines"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_report_refreshes_after_line_update() {
        let (app, state, master) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let (analytic_id, detail_id) =
            seed_analytic_invoice(&state.db, &master, Decimal::new(8, 0), Decimal::new(800, 0))
                .await;
        let invoice_id = create_invoice_for_analytic(&server, &master, analytic_id).await;

        // Prime the report cache.
        let first = server
            .get(&format!("/api/v1/invoices/{}/timesheet-groups", invoice_id))
            .await;
        first.assert_status(StatusCode::OK);
        let first_body: ApiResponse<serde_json::Value> = first.json();
        let hours: Decimal = first_body.data["buckets"][0]["total_hours"]
            .as_str()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(hours, Decimal::new(8, 0));

        server
            .put(&format!("/api/v1/timesheet-lines/{}", detail_id))
            .json(&json!({ "unit_amount": "10", "amount": "1000" }))
            .await
            .assert_status(StatusCode::OK);

        // The edit must show up in the report, not a stale cached copy.
        let second = server
            .get(&format!("/api/v1/invoices/{}/timesheet-groups", invoice_id))
            .await;
        second.assert_status(StatusCode::OK);
        let second_body: ApiResponse<serde_json::Value> = second.json();
        let hours: Decimal = second_body.data["buckets"][0]["total_hours"]
            .as_str()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(hours, Decimal::new(10, 0));
        let amount: Decimal = second_body.data["buckets"][0]["total_amount"]
            .as_str()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(amount, Decimal::new(1000, 0));
    }

    #[tokio::test]
    async fn test_target_amount_roundtrip() {
        let (app, state, master) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let (analytic_id, _) =
            seed_analytic_invoice(&state.db, &master, Decimal::new(8, 0), Decimal::new(800, 0))
                .await;
        let invoice_id = create_invoice_for_analytic(&server, &master, analytic_id).await;

        // Untaxed 800, target 600: a uniform 25% discount.
        let response = server
            .post(&format!("/api/v1/invoices/{}/target-amount", invoice_id))
            .json(&json!({ "target_invoice_amount": "600" }))
            .await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        let discount: Decimal = body.data["lines"][0]["discount"]
            .as_str()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(discount, Decimal::new(25, 0));

        let reset_response = server
            .post(&format!(
                "/api/v1/invoices/{}/reset-target-amount",
                invoice_id
            ))
            .await;
        reset_response.assert_status(StatusCode::OK);
        let reset_body: ApiResponse<serde_json::Value> = reset_response.json();
        let discount: Decimal = reset_body.data["lines"][0]["discount"]
            .as_str()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(discount, Decimal::ZERO);
        assert!(reset_body.data["target_invoice_amount"].is_null());
    }
}
