//! Pipeline coordinator - main run orchestration logic

use crate::config::{Config, Credentials, DetailFailurePolicy};
use crate::entity::{EnrichedEntity, RawEntity};
use crate::mapping::{map_entity, PageRequest};
use crate::output::{FailureRecord, PublishedPage, RunReport};
use crate::publish::{NotionClient, RateLimiter};
use crate::source::{build_http_client, PokeApiClient};
use crate::state::RunPhase;
use crate::{PublishError, SyncError};

/// Where mapped pages go
#[derive(Debug)]
pub enum PublishMode {
    /// Create pages through the Notion API
    Live {
        notion: NotionClient,
        database_id: String,
    },

    /// Print each request body to stdout instead of sending it
    DryRun { database_id: String },
}

impl PublishMode {
    pub fn database_id(&self) -> &str {
        match self {
            Self::Live { database_id, .. } | Self::DryRun { database_id } => database_id,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        matches!(self, Self::DryRun { .. })
    }
}

/// Main pipeline coordinator structure
pub struct Pipeline {
    config: Config,
    source: PokeApiClient,
    mode: PublishMode,
    phase: RunPhase,
}

impl Pipeline {
    /// Creates a pipeline that publishes to Notion
    ///
    /// # Arguments
    ///
    /// * `config` - The validated configuration
    /// * `credentials` - Notion token and destination database
    ///
    /// # Returns
    ///
    /// * `Ok(Pipeline)` - Ready to run
    /// * `Err(SyncError)` - An HTTP client could not be built
    pub fn new(config: Config, credentials: Credentials) -> Result<Self, SyncError> {
        let client = build_http_client(&config.user_agent, config.source.timeout())?;
        let notion = NotionClient::from_config(client, &config.notion, &credentials);
        let mode = PublishMode::Live {
            notion,
            database_id: credentials.database_id,
        };
        Self::with_mode(config, mode)
    }

    /// Creates a pipeline that prints page requests instead of publishing them
    pub fn dry_run(config: Config, database_id: impl Into<String>) -> Result<Self, SyncError> {
        let mode = PublishMode::DryRun {
            database_id: database_id.into(),
        };
        Self::with_mode(config, mode)
    }

    fn with_mode(config: Config, mode: PublishMode) -> Result<Self, SyncError> {
        let source = PokeApiClient::from_config(&config.source, &config.user_agent)?;
        Ok(Self {
            config,
            source,
            mode,
            phase: RunPhase::FetchPrimary,
        })
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn mode(&self) -> &PublishMode {
        &self.mode
    }

    fn advance(&mut self, to: RunPhase) -> Result<(), SyncError> {
        self.phase = self.phase.transition(to)?;
        tracing::debug!("Entering phase {}", self.phase);
        Ok(())
    }

    /// Runs every phase in order and returns the run report
    ///
    /// Per-entity failures never abort the run; they are logged and recorded
    /// in the report. The only errors returned are phase-order violations,
    /// e.g. calling `run` twice on the same pipeline.
    pub async fn run(&mut self) -> Result<RunReport, SyncError> {
        if self.phase != RunPhase::FetchPrimary {
            return Err(SyncError::InvalidTransition {
                from: self.phase,
                to: RunPhase::FetchPrimary,
            });
        }

        let mut report = RunReport::new(self.config.source.len(), self.mode.is_dry_run());
        tracing::info!(
            "Starting run for ids {}..={} ({} records)",
            self.config.source.start,
            self.config.source.end,
            report.requested
        );

        let raw = self.fetch_primary(&mut report).await;

        self.advance(RunPhase::FetchDetail)?;
        let enriched = self.fetch_details(raw, &mut report).await;

        self.advance(RunPhase::PublishAll)?;
        let publishable = self.select_publishable(enriched, &mut report);
        self.publish_all(&publishable, &mut report).await;

        self.advance(RunPhase::Done)?;
        report.finish();
        tracing::info!("Operation complete.");

        Ok(report)
    }

    /// Fetches primary records for the configured range, in ascending order
    ///
    /// Failed identifiers are logged, recorded, and left out of the result.
    pub async fn fetch_primary(&mut self, report: &mut RunReport) -> Vec<RawEntity> {
        // Grows with successful fetches only; the range itself may be huge
        let mut entities = Vec::new();

        for id in self.config.source.start..=self.config.source.end {
            match self.source.fetch_pokemon(id).await {
                Ok(entity) => {
                    tracing::info!("Fetched {}.", entity.name);
                    entities.push(entity);
                }
                Err(e) => {
                    tracing::error!("Error fetching record {}: {}", id, e);
                    report.primary_failures.push(FailureRecord::new(id, None, &e));
                }
            }
        }

        report.fetched = entities.len();
        entities
    }

    /// Attaches species detail to every primary record, keeping collection order
    ///
    /// A failed lookup yields an entity without detail rather than dropping it.
    pub async fn fetch_details(
        &mut self,
        entities: Vec<RawEntity>,
        report: &mut RunReport,
    ) -> Vec<EnrichedEntity> {
        let mut enriched = Vec::with_capacity(entities.len());

        for entity in entities {
            let detail = match self.source.fetch_species(entity.id).await {
                Ok(detail) => {
                    tracing::info!("Fetched flavor info for {}.", entity.name);
                    report.enriched += 1;
                    Some(detail)
                }
                Err(e) => {
                    tracing::error!("Error fetching flavor info for {}: {}", entity.name, e);
                    report
                        .detail_failures
                        .push(FailureRecord::new(entity.id, Some(&entity.name), &e));
                    None
                }
            };
            enriched.push(entity.enrich(detail));
        }

        enriched
    }

    /// Applies the detail-failure policy
    pub fn select_publishable(
        &self,
        entities: Vec<EnrichedEntity>,
        report: &mut RunReport,
    ) -> Vec<EnrichedEntity> {
        match self.config.publisher.detail_failure {
            DetailFailurePolicy::Publish => entities,
            DetailFailurePolicy::Skip => {
                let (keep, dropped): (Vec<_>, Vec<_>) =
                    entities.into_iter().partition(EnrichedEntity::has_detail);
                for entity in &dropped {
                    tracing::warn!(
                        "Skipping {} (#{}): species detail unavailable",
                        entity.name(),
                        entity.id()
                    );
                }
                report.skipped = dropped.len();
                keep
            }
        }
    }

    /// Maps and publishes each entity in order, one request at a time
    ///
    /// Every live request first takes a token from a fresh rate limiter, so
    /// even the first page waits one configured interval.
    pub async fn publish_all(&mut self, entities: &[EnrichedEntity], report: &mut RunReport) {
        let publisher = &self.config.publisher;
        let mut limiter = RateLimiter::new(publisher.burst, publisher.delay());

        for entity in entities {
            let page = map_entity(entity, self.mode.database_id());

            let outcome = match &self.mode {
                PublishMode::Live { notion, .. } => {
                    limiter.acquire().await;
                    tracing::info!("Sending {} to Notion", entity.name());
                    notion
                        .create_page(entity.name(), &page)
                        .await
                        .map(|created| created.id)
                }
                PublishMode::DryRun { .. } => print_page(&page).map(|_| "dry-run".to_string()),
            };

            match outcome {
                Ok(page_id) => {
                    if self.mode.is_dry_run() {
                        tracing::debug!("Printed page for {}", entity.name());
                    } else {
                        tracing::info!("Created page {} for {}", page_id, entity.name());
                    }
                    report.published.push(PublishedPage {
                        id: entity.id(),
                        name: entity.name().to_string(),
                        page_id,
                    });
                }
                Err(e) => {
                    tracing::error!("Error creating Notion page for {}: {}", entity.name(), e);
                    report.publish_failures.push(FailureRecord::new(
                        entity.id(),
                        Some(entity.name()),
                        &e,
                    ));
                }
            }
        }

        report.rate_limit_acquires = limiter.acquired();
        report.rate_limit_wait = limiter.total_waited();
    }
}

/// Writes one request body to stdout as pretty JSON
fn print_page(page: &PageRequest) -> Result<(), PublishError> {
    println!("{}", serde_json::to_string_pretty(page)?);
    Ok(())
}
