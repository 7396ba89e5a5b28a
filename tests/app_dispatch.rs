// ../tests/app_dispatch.rs
use async_trait::async_trait;
use elden_scout::api::{self, DataService};
use elden_scout::app::{Action, App};
use elden_scout::encounter::{
    EncounterRecord, EnemyStub, LocationVariant, NgLevel, ProgressStats, RegionSummary,
};
use elden_scout::error::ApiError;
use elden_scout::navigation::{Intent, Request, Response, View};
use elden_scout::settings::Settings;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MockService {
    calls: Mutex<Vec<String>>,
}

impl MockService {
    fn record(&self, call: String) {
        self.calls.lock().expect("calls lock").push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl DataService for MockService {
    async fn search(&self, query: &str, ng: NgLevel) -> Result<Vec<EnemyStub>, ApiError> {
        self.record(format!("search {query} {}", ng.as_param()));
        Ok(match query {
            "wolf" => vec![
                EnemyStub {
                    name: "Wolf".to_string(),
                    location: "Limgrave".to_string(),
                    hp: Some(300),
                },
                EnemyStub {
                    name: "Wolf".to_string(),
                    location: "Caelid".to_string(),
                    hp: Some(900),
                },
            ],
            _ => Vec::new(),
        })
    }

    async fn region_enemies(&self, region: &str, ng: NgLevel) -> Result<Vec<EnemyStub>, ApiError> {
        self.record(format!("region_enemies {region} {}", ng.as_param()));
        Ok(Vec::new())
    }

    async fn region_average(&self, region: &str, _ng: NgLevel) -> Result<RegionSummary, ApiError> {
        Err(ApiError::NotFound(format!("/api/region/{region}")))
    }

    async fn encounter_detail(
        &self,
        name: &str,
        ng: NgLevel,
        location: Option<&str>,
    ) -> Result<EncounterRecord, ApiError> {
        self.record(format!(
            "encounter_detail {name} {} {}",
            ng.as_param(),
            location.unwrap_or("-")
        ));
        Ok(EncounterRecord {
            name: name.to_string(),
            location: location.unwrap_or("Limgrave").to_string(),
            hp: 300,
            location_variants: vec![
                LocationVariant {
                    location: "Limgrave".to_string(),
                    hp: Some(300),
                },
                LocationVariant {
                    location: "Caelid".to_string(),
                    hp: Some(900),
                },
            ],
            ..Default::default()
        })
    }

    async fn progress_stats(&self, ng: NgLevel) -> Result<ProgressStats, ApiError> {
        self.record(format!("progress_stats {}", ng.as_param()));
        Ok(ProgressStats {
            total_enemies: 400,
            analyzed_enemies: 40,
            percentage: 10.0,
        })
    }
}

#[tokio::test]
async fn test_execute_routes_requests_to_service() {
    let service = MockService::default();

    let response = api::execute(
        &service,
        &Request::Search {
            query: "wolf".to_string(),
            ng: NgLevel::NgPlus1,
        },
    )
    .await
    .expect("search succeeds");
    assert!(matches!(response, Response::Enemies(ref results) if results.len() == 2));

    let response = api::execute(&service, &Request::Progress { ng: NgLevel::Ng })
        .await
        .expect("progress succeeds");
    assert!(matches!(response, Response::Progress(ref stats) if stats.percentage == 10.0));

    let error = api::execute(
        &service,
        &Request::RegionAverage {
            region: "Nowhere".to_string(),
            ng: NgLevel::Ng,
        },
    )
    .await;
    assert!(matches!(error, Err(ApiError::NotFound(_))));

    assert_eq!(
        service.calls(),
        vec!["search wolf NG+", "progress_stats NG"]
    );
}

#[tokio::test]
async fn test_app_search_to_detail_round_trip() {
    let service = Arc::new(MockService::default());
    let mut app = App::new(Settings::default(), service.clone());

    app.handle_action(Action::Navigate(Intent::Search("wolf".to_string())));
    assert!(app.controller().is_busy());
    assert!(app.process_next_action().await);

    let View::SearchResults { results } = app.controller().view() else {
        panic!("expected search results, got {:?}", app.controller().view());
    };
    assert_eq!(results.len(), 1);

    app.handle_action(Action::Navigate(Intent::SelectEnemy("Wolf".to_string())));
    // Detail completion, then the progress refresh it triggers.
    assert!(app.process_next_action().await);
    assert!(app.process_next_action().await);

    let View::EnemyDetail { record, .. } = app.controller().view() else {
        panic!("expected detail, got {:?}", app.controller().view());
    };
    assert_eq!(record.name, "Wolf");
    assert_eq!(record.location_variants.len(), 2);
    assert_eq!(
        app.controller().progress().stats().map(|s| s.analyzed_enemies),
        Some(40)
    );
    assert!(!app.controller().is_busy());
}

#[tokio::test]
async fn test_app_unknown_query_reaches_no_results() {
    let service = Arc::new(MockService::default());
    let mut app = App::new(Settings::default(), service.clone());

    app.handle_action(Action::Navigate(Intent::Search("Nobody".to_string())));
    assert!(app.process_next_action().await);
    assert!(app.process_next_action().await);

    assert_eq!(
        app.controller().view(),
        &View::NoResults {
            query: "Nobody".to_string()
        }
    );
    assert_eq!(
        service.calls(),
        vec!["search Nobody NG", "region_enemies Nobody NG"]
    );
}

#[tokio::test]
async fn test_app_quit_stops_running() {
    let mut app = App::new(Settings::default(), Arc::new(MockService::default()));
    assert!(app.is_running());
    app.handle_action(Action::Quit);
    assert!(!app.is_running());
}
