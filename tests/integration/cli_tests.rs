use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn pokemon_body(id: u32, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "species": { "name": name },
        "height": 10,
        "weight": 130,
        "types": [ { "slot": 1, "type": { "name": "grass" } } ],
        "stats": [
            { "base_stat": 60, "stat": { "name": "hp" } },
            { "base_stat": 62, "stat": { "name": "attack" } },
            { "base_stat": 63, "stat": { "name": "defense" } },
            { "base_stat": 80, "stat": { "name": "special-attack" } },
            { "base_stat": 80, "stat": { "name": "special-defense" } },
            { "base_stat": 60, "stat": { "name": "speed" } }
        ],
        "sprites": { "front_default": format!("https://img.example/{}.png", id) }
    })
}

async fn mount_record(server: &MockServer, id: u32, name: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/pokemon/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(pokemon_body(id, name)))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/pokemon-species/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "flavor_text_entries": [
                { "flavor_text": "A seed\nsprouts.", "language": { "name": "en" } }
            ],
            "genera": [ { "genus": "Seed Pokémon", "language": { "name": "en" } } ],
            "generation": { "name": "generation-i" }
        })))
        .mount(server)
        .await;
}

/// Config file whose range is only made valid by the command-line flags
fn write_config(server: &MockServer) -> NamedTempFile {
    let content = format!(
        r#"
[source]
base-url = "{}"
start = 5
end = 4
timeout-secs = 5

[notion]
token-env = "CLI_TEST_NOTION_KEY"
database-id-env = "CLI_TEST_NOTION_DATABASE_ID"

[publisher]
delay-ms = 1
"#,
        server.uri()
    );

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn test_dry_run_stdout_is_only_page_json() {
    let server = MockServer::start().await;
    mount_record(&server, 1, "bulbasaur").await;
    mount_record(&server, 2, "ivysaur").await;
    let config = write_config(&server);

    let output = Command::new(env!("CARGO_BIN_EXE_pokedex-notion"))
        .arg("--config")
        .arg(config.path())
        .args(["--start", "1", "--end", "2", "--dry-run"])
        .env_remove("CLI_TEST_NOTION_KEY")
        .env_remove("CLI_TEST_NOTION_DATABASE_ID")
        .output()
        .await
        .expect("Failed to run binary");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "run failed: {}", stderr);

    let pages: Vec<Value> = serde_json::Deserializer::from_slice(&output.stdout)
        .into_iter::<Value>()
        .collect::<Result<_, _>>()
        .expect("stdout holds only JSON documents");

    let names: Vec<&str> = pages
        .iter()
        .map(|page| {
            page["properties"]["Name"]["title"][0]["text"]["content"]
                .as_str()
                .expect("page has a title")
        })
        .collect();
    assert_eq!(names, vec!["Bulbasaur", "Ivysaur"]);

    // The summary still appears, on stderr
    assert!(stderr.contains("=== Run Summary ==="));
    assert!(stderr.contains("Printed (dry run): 2"));
}

#[tokio::test]
async fn test_invalid_range_without_overrides_is_rejected() {
    let server = MockServer::start().await;
    let config = write_config(&server);

    let output = Command::new(env!("CARGO_BIN_EXE_pokedex-notion"))
        .arg("--config")
        .arg(config.path())
        .arg("--dry-run")
        .output()
        .await
        .expect("Failed to run binary");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}
