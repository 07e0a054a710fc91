use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};

use fittvp_backend::config::AppConfig;
use fittvp_backend::handlers::routes;

const EPSILON: f64 = 1e-9;

fn config(strict: bool) -> AppConfig {
    AppConfig {
        strict_activity_matching: strict,
        ..AppConfig::default()
    }
}

macro_rules! app {
    ($config:expr) => {
        test::init_service(App::new().app_data(web::Data::new($config)).configure(routes)).await
    };
}

#[actix_web::test]
async fn guideline_by_bracket_name() {
    let app = app!(config(false));

    let req = test::TestRequest::get().uri("/v1/guidelines/older_adults").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["bracket"], "older_adults");
    assert_eq!(body["ageRange"], "65+ years");
}

#[actix_web::test]
async fn unknown_bracket_is_not_found() {
    let app = app!(config(false));

    let req = test::TestRequest::get().uri("/v1/guidelines/teenagers").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("teenagers"));
}

#[actix_web::test]
async fn guideline_by_age_uses_thresholds() {
    let app = app!(config(false));

    for (age, bracket) in [(17, "children_adolescents"), (18, "adults"), (64, "adults"), (65, "older_adults")] {
        let req = test::TestRequest::get().uri(&format!("/v1/guidelines?age={}", age)).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["bracket"], bracket, "age {}", age);
    }
}

#[actix_web::test]
async fn malformed_age_query_is_bad_request() {
    let app = app!(config(false));

    let req = test::TestRequest::get().uri("/v1/schedule?age=old").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn weekly_met_minutes_meets_target() {
    let app = app!(config(false));

    let req = test::TestRequest::post()
        .uri("/v1/met-minutes")
        .set_json(json!({
            "activities": [{ "activity": "快走", "durationMinutes": 30, "frequencyPerWeek": 5 }]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert!((body["totalMetMinutes"].as_f64().unwrap() - 525.0).abs() < EPSILON);
    assert_eq!(body["whoRecommendationStatus"], "符合");
    assert_eq!(body["breakdown"][0]["matchedActivity"], "快走");
}

#[actix_web::test]
async fn empty_week_is_below_target() {
    let app = app!(config(false));

    let req = test::TestRequest::post()
        .uri("/v1/met-minutes")
        .set_json(json!({ "activities": [] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["totalMetMinutes"].as_f64(), Some(0.0));
    assert_eq!(body["whoRecommendationStatus"], "未達標");
}

#[actix_web::test]
async fn unmatched_activity_depends_on_matching_mode() {
    let payload = json!({
        "activities": [
            { "activity": "快走", "durationMinutes": 30, "frequencyPerWeek": 5 },
            { "activity": "skydiving", "durationMinutes": 60, "frequencyPerWeek": 1 }
        ]
    });

    let lenient = app!(config(false));
    let req = test::TestRequest::post().uri("/v1/met-minutes").set_json(&payload).to_request();
    let body: Value = test::call_and_read_body_json(&lenient, req).await;
    assert_eq!(body["unmatched"], json!(["skydiving"]));
    assert!((body["totalMetMinutes"].as_f64().unwrap() - 525.0).abs() < EPSILON);

    let strict = app!(config(true));
    let req = test::TestRequest::post().uri("/v1/met-minutes").set_json(&payload).to_request();
    let resp = test::call_service(&strict, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn zero_duration_entry_is_rejected() {
    let app = app!(config(false));

    let req = test::TestRequest::post()
        .uri("/v1/met-minutes")
        .set_json(json!({
            "activities": [{ "activity": "快走", "durationMinutes": 0, "frequencyPerWeek": 5 }]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn huge_entry_is_rejected_or_exact() {
    let app = app!(config(false));

    let req = test::TestRequest::post()
        .uri("/v1/met-minutes")
        .set_json(json!({
            "activities": [{ "activity": "快走", "durationMinutes": 100000, "frequencyPerWeek": 100000 }]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/v1/met-minutes")
        .set_json(json!({
            "activities": [{ "activity": "快走", "durationMinutes": 30, "frequencyPerWeek": 15 }]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/v1/met-minutes")
        .set_json(json!({
            "activities": [{ "activity": "快走", "durationMinutes": 1440, "frequencyPerWeek": 14 }]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["breakdown"][0]["weeklyMinutes"], 20160);
    assert!((body["totalMetMinutes"].as_f64().unwrap() - 3.5 * 20160.0).abs() < EPSILON);
}

#[actix_web::test]
async fn zero_minute_expenditure_is_invalid_input() {
    let app = app!(config(false));

    let req = test::TestRequest::post()
        .uri("/v1/expenditure")
        .set_json(json!({ "weightKg": 70.0, "metValue": 3.5, "durationMinutes": 0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "durationMinutes must be at least 1");
}

#[actix_web::test]
async fn expenditure_follows_formula() {
    let app = app!(config(false));

    let req = test::TestRequest::post()
        .uri("/v1/expenditure")
        .set_json(json!({ "weightKg": 70.0, "metValue": 3.5, "durationMinutes": 30 }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!((body["caloriesBurned"].as_f64().unwrap() - 122.5).abs() < EPSILON);
}

#[actix_web::test]
async fn non_positive_weight_is_invalid_input() {
    let app = app!(config(false));

    let req = test::TestRequest::post()
        .uri("/v1/expenditure")
        .set_json(json!({ "weightKg": -5.0, "metValue": 3.5, "durationMinutes": 30 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "weightKg must be a positive number");
}

#[actix_web::test]
async fn met_range_query_is_sorted() {
    let app = app!(config(false));

    let req = test::TestRequest::get().uri("/v1/activity?minMet=3.0&maxMet=5.9").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let mets: Vec<f64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["metValue"].as_f64().unwrap())
        .collect();
    assert_eq!(mets, vec![3.5, 4.0, 4.5, 4.8, 5.0]);
}

#[actix_web::test]
async fn inverted_met_range_is_invalid_input() {
    let app = app!(config(false));

    let req = test::TestRequest::get().uri("/v1/activity?minMet=6&maxMet=3").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn intensity_filter_and_search() {
    let app = app!(config(false));

    let req = test::TestRequest::get().uri("/v1/activity?intensity=vigorous").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 5);

    let req = test::TestRequest::get().uri("/v1/activity/search?keyword=crossfit").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body[0]["name"], "重量訓練");
}

#[actix_web::test]
async fn library_and_strategies() {
    let app = app!(config(false));

    let req = test::TestRequest::get().uri("/v1/library?category=occupational").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let req = test::TestRequest::get().uri("/v1/library?category=gardening").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/v1/strategies").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["target"], "500 MET-分鐘/週");
    assert_eq!(body["strategies"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn met_introduction_sections() {
    let app = app!(config(false));

    let req = test::TestRequest::get().uri("/v1/met/introduction").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["basicConcepts"][0]["label"], "定義");
    assert_eq!(body["intensityClasses"].as_array().unwrap().len(), 3);
    assert_eq!(body["intensityClasses"][2]["intensity"], "vigorous");
    assert_eq!(body["applications"][1]["topic"], "運動處方");
    assert_eq!(body["usageNotes"].as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn age_range_is_shared_across_routes() {
    let app = app!(config(false));

    for uri in ["/v1/guidelines?age=4", "/v1/schedule?age=121", "/v1/populations/pregnancy?age=3"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
    }

    let req = test::TestRequest::post()
        .uri("/v1/prescription")
        .set_json(json!({ "age": 4, "bodyWeightKg": 20.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/v1/guidelines?age=5").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["bracket"], "children_adolescents");
}

#[actix_web::test]
async fn individualized_prescription() {
    let app = app!(config(false));

    let req = test::TestRequest::post()
        .uri("/v1/prescription")
        .set_json(json!({ "age": 35, "bodyWeightKg": 70.0 }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["ageGroup"], "adults");
    assert_eq!(body["basePrescription"]["intensity"], "moderate");
    assert_eq!(body["recommendedActivities"][0]["calories30min"], 122.5);
    assert_eq!(body["metExplanation"]["intensityLevels"].as_array().unwrap().len(), 3);
    assert_eq!(body["metExplanation"]["prescriptionGuidance"][1]["text"], "MET值 × 運動時間(分鐘) = MET-分鐘");
}

#[actix_web::test]
async fn fitt_vp_with_periodized_plan() {
    let app = app!(config(false));

    let req = test::TestRequest::post()
        .uri("/v1/fitt-vp")
        .set_json(json!({
            "goal": "weight_loss",
            "currentFitness": "beginner",
            "timeAvailable": 45,
            "frequencyAvailable": 5,
            "limitations": ["knee pain"],
            "weeks": 16
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["prescription"]["frequency"], "3 days/week");
    assert_eq!(body["prescription"]["volume"], "90 minutes/week");
    assert_eq!(body["prescription"]["modifications"], json!(["Use low-impact aerobic activities"]));
    assert_eq!(body["periodizedPlan"]["phases"].as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn populations_and_conditions() {
    let app = app!(config(false));

    let req = test::TestRequest::get()
        .uri("/v1/populations/pregnancy?age=30&condition=diabetes")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["population"], "Pregnant Women");
    assert_eq!(body["chronicCondition"]["condition"], "diabetes");
    assert_eq!(body["starterProgram"]["modifications"].as_array().unwrap().len(), 3);

    let req = test::TestRequest::get().uri("/v1/populations/chronic_disease?age=50").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/v1/conditions/copd").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/v1/populations/sedentary?age=40&activityLevel=Sedentary")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["starterProgram"]["stages"].as_array().unwrap().len(), 3);

    let req = test::TestRequest::get().uri("/v1/conditions/arthritis").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn personal_plan_for_adult() {
    let app = app!(config(false));

    let req = test::TestRequest::post()
        .uri("/v1/plan")
        .set_json(json!({
            "age": 30,
            "gender": "female",
            "heightCm": 170.0,
            "weightKg": 60.0,
            "fitnessLevel": "good",
            "exerciseHabit": "moderate"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["ageGroup"], "adult");
    assert_eq!(body["frequency"], 4);
    assert_eq!(body["type"], json!(["有氧運動", "肌力訓練"]));
    assert_eq!(body["bmi"]["category"], "normal");
}

#[actix_web::test]
async fn personal_plan_rejects_out_of_range_age() {
    let app = app!(config(false));

    let req = test::TestRequest::post()
        .uri("/v1/plan")
        .set_json(json!({
            "age": 4,
            "gender": "male",
            "heightCm": 100.0,
            "weightKg": 20.0,
            "fitnessLevel": "good",
            "exerciseHabit": "none"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
