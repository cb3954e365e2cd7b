use pokedex_notion::config::{Config, Credentials, DetailFailurePolicy};
use pokedex_notion::{Pipeline, RunPhase};
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DELAY_MS: u64 = 20;

const NAMES: [&str; 5] = ["bulbasaur", "ivysaur", "venusaur", "charmander", "charmeleon"];

/// Creates a test configuration pointing both APIs at the mock server
fn create_test_config(server: &MockServer, start: u32, end: u32) -> Config {
    let mut config = Config::default();
    config.source.base_url = server.uri();
    config.source.start = start;
    config.source.end = end;
    config.source.timeout_secs = 5;
    config.notion.api_base = format!("{}/v1", server.uri());
    config.publisher.delay_ms = DELAY_MS;
    config
}

fn credentials() -> Credentials {
    Credentials::new("secret_token", "db-test")
}

fn pokemon_body(id: u32, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "species": { "name": name, "url": format!("https://pokeapi.co/api/v2/pokemon-species/{}/", id) },
        "height": 7,
        "weight": 69,
        "types": [ { "slot": 1, "type": { "name": "grass" } } ],
        "stats": [
            { "base_stat": 45, "stat": { "name": "hp" } },
            { "base_stat": 49, "stat": { "name": "attack" } },
            { "base_stat": 49, "stat": { "name": "defense" } },
            { "base_stat": 65, "stat": { "name": "special-attack" } },
            { "base_stat": 65, "stat": { "name": "special-defense" } },
            { "base_stat": 45, "stat": { "name": "speed" } }
        ],
        "sprites": {
            "front_default": format!("https://img.example/{}.png", id),
            "other": { "official-artwork": { "front_default": format!("https://img.example/art/{}.png", id) } }
        }
    })
}

fn species_body(name: &str) -> Value {
    json!({
        "flavor_text_entries": [
            { "flavor_text": format!("About\n{}.", name), "language": { "name": "en" } }
        ],
        "genera": [ { "genus": "Seed Pokémon", "language": { "name": "en" } } ],
        "generation": { "name": "generation-i" }
    })
}

/// Mounts successful primary and species responses for `ids`
async fn mount_source(server: &MockServer, ids: impl IntoIterator<Item = u32>) {
    for id in ids {
        let name = NAMES[(id - 1) as usize];

        Mock::given(method("GET"))
            .and(path(format!("/pokemon/{}", id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(pokemon_body(id, name)))
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("/pokemon-species/{}", id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(species_body(name)))
            .mount(server)
            .await;
    }
}

/// Mounts a page-creation endpoint that accepts `expected` requests
async fn mount_notion(server: &MockServer, expected: u64) {
    Mock::given(method("POST"))
        .and(path("/v1/pages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "page",
            "id": "created-page",
            "url": "https://www.notion.so/created-page"
        })))
        .expect(expected)
        .mount(server)
        .await;
}

/// Bodies of all page-creation requests, in the order received
async fn page_requests(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .into_iter()
        .filter(|request| request.url.path() == "/v1/pages")
        .map(|request| serde_json::from_slice(&request.body).expect("page body is JSON"))
        .collect()
}

fn page_numbers(pages: &[Value]) -> Vec<u64> {
    pages
        .iter()
        .map(|page| page["properties"]["No"]["number"].as_u64().expect("No is a number"))
        .collect()
}

#[tokio::test]
async fn test_full_run_publishes_every_record_in_order() {
    let server = MockServer::start().await;
    mount_source(&server, 1..=5).await;
    mount_notion(&server, 5).await;

    let config = create_test_config(&server, 1, 5);
    let mut pipeline = Pipeline::new(config, credentials()).expect("Failed to create pipeline");

    let start = Instant::now();
    let report = pipeline.run().await.expect("Run failed");
    let elapsed = start.elapsed();

    assert_eq!(pipeline.phase(), RunPhase::Done);
    assert!(report.is_clean(), "unexpected failures: {:?}", report);
    assert_eq!(report.fetched, 5);
    assert_eq!(report.enriched, 5);
    assert_eq!(report.published_count(), 5);

    // Every publish waited on the limiter
    assert_eq!(report.rate_limit_acquires, 5);
    assert!(
        elapsed >= Duration::from_millis(DELAY_MS * 5),
        "run took {:?}",
        elapsed
    );

    let pages = page_requests(&server).await;
    assert_eq!(page_numbers(&pages), vec![1, 2, 3, 4, 5]);

    let first = &pages[0];
    assert_eq!(first["parent"]["database_id"], "db-test");
    assert_eq!(first["properties"]["Name"]["title"][0]["text"]["content"], "Bulbasaur");
    assert_eq!(
        first["properties"]["Category"]["rich_text"][0]["text"]["content"],
        "Seed Pokémon"
    );
    assert_eq!(first["properties"]["Generation"]["select"]["name"], "I");
    assert_eq!(first["children"][0]["quote"]["rich_text"][0]["text"]["content"], "About bulbasaur.");
    assert_eq!(
        first["children"][2]["bookmark"]["url"],
        "https://bulbapedia.bulbagarden.net/wiki/Bulbasaur_(Pokémon)"
    );
}

#[tokio::test]
async fn test_primary_failure_drops_the_record() {
    let server = MockServer::start().await;
    mount_source(&server, [1, 2, 4, 5]).await;

    Mock::given(method("GET"))
        .and(path("/pokemon/3"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    // A record that failed the primary fetch is never enriched
    Mock::given(method("GET"))
        .and(path("/pokemon-species/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(species_body("venusaur")))
        .expect(0)
        .mount(&server)
        .await;

    mount_notion(&server, 4).await;

    let config = create_test_config(&server, 1, 5);
    let mut pipeline = Pipeline::new(config, credentials()).expect("Failed to create pipeline");
    let report = pipeline.run().await.expect("Run failed");

    assert_eq!(report.fetched, 4);
    assert_eq!(report.primary_failures.len(), 1);
    assert_eq!(report.primary_failures[0].id, 3);
    assert_eq!(report.published_count(), 4);

    let pages = page_requests(&server).await;
    assert_eq!(page_numbers(&pages), vec![1, 2, 4, 5]);
}

#[tokio::test]
async fn test_detail_failure_publishes_blank_fields_by_default() {
    let server = MockServer::start().await;
    mount_source(&server, [1, 3]).await;

    Mock::given(method("GET"))
        .and(path("/pokemon/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pokemon_body(2, "ivysaur")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemon-species/2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    mount_notion(&server, 3).await;

    let config = create_test_config(&server, 1, 3);
    let mut pipeline = Pipeline::new(config, credentials()).expect("Failed to create pipeline");
    let report = pipeline.run().await.expect("Run failed");

    assert_eq!(report.enriched, 2);
    assert_eq!(report.detail_failures.len(), 1);
    assert_eq!(report.detail_failures[0].name.as_deref(), Some("Ivysaur"));
    assert_eq!(report.published_count(), 3);

    let pages = page_requests(&server).await;
    let ivysaur = &pages[1];
    assert_eq!(ivysaur["properties"]["No"]["number"], 2);
    assert_eq!(ivysaur["properties"]["Category"]["rich_text"], json!([]));
    assert_eq!(ivysaur["properties"]["Generation"]["select"], Value::Null);
    assert_eq!(ivysaur["children"][0]["quote"]["rich_text"], json!([]));
}

#[tokio::test]
async fn test_detail_failure_with_skip_policy() {
    let server = MockServer::start().await;
    mount_source(&server, [1, 3]).await;

    Mock::given(method("GET"))
        .and(path("/pokemon/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pokemon_body(2, "ivysaur")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemon-species/2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    mount_notion(&server, 2).await;

    let mut config = create_test_config(&server, 1, 3);
    config.publisher.detail_failure = DetailFailurePolicy::Skip;
    let mut pipeline = Pipeline::new(config, credentials()).expect("Failed to create pipeline");
    let report = pipeline.run().await.expect("Run failed");

    assert_eq!(report.skipped, 1);
    assert_eq!(report.published_count(), 2);
    assert_eq!(page_numbers(&page_requests(&server).await), vec![1, 3]);
}

#[tokio::test]
async fn test_publish_failure_does_not_stop_the_run() {
    let server = MockServer::start().await;
    mount_source(&server, 1..=5).await;

    // Mounted first so it wins over the generic endpoint for record 4
    Mock::given(method("POST"))
        .and(path("/v1/pages"))
        .and(body_partial_json(json!({ "properties": { "No": { "number": 4 } } })))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "object": "error",
            "status": 400,
            "code": "validation_error",
            "message": "body failed validation"
        })))
        .expect(1)
        .mount(&server)
        .await;

    mount_notion(&server, 4).await;

    let config = create_test_config(&server, 1, 5);
    let mut pipeline = Pipeline::new(config, credentials()).expect("Failed to create pipeline");
    let report = pipeline.run().await.expect("Run failed");

    assert_eq!(report.published_count(), 4);
    assert_eq!(report.publish_failures.len(), 1);
    assert_eq!(report.publish_failures[0].id, 4);
    assert!(report.publish_failures[0].error.contains("validation_error"));

    // All five were attempted, in order
    assert_eq!(page_numbers(&page_requests(&server).await), vec![1, 2, 3, 4, 5]);
    assert_eq!(report.rate_limit_acquires, 5);
}

#[tokio::test]
async fn test_dry_run_never_contacts_notion() {
    let server = MockServer::start().await;
    mount_source(&server, 1..=2).await;
    mount_notion(&server, 0).await;

    let config = create_test_config(&server, 1, 2);
    let mut pipeline = Pipeline::dry_run(config, "db-test").expect("Failed to create pipeline");
    let report = pipeline.run().await.expect("Run failed");

    assert!(report.dry_run);
    assert_eq!(report.published_count(), 2);
    assert_eq!(report.rate_limit_acquires, 0);
    assert!(page_requests(&server).await.is_empty());
}
