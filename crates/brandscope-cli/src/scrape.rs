//! `scrape` and `select` command handlers.
//!
//! Scrapes never abort the run: a site that cannot be rendered still gets a
//! report (with the fallback profile), and a failed save is logged and
//! reported without touching the printed profile.

use std::path::Path;

use brandscope_core::{select_template, AppConfig, BrandProfile, ProfileStore, Template, TemplateKey};
use brandscope_scraper::{scrape_brand, BrandScrape, ChromiumRenderer, RenderOptions, Renderer};
use futures::stream::{self, StreamExt};
use serde::Serialize;

use crate::profile_file::read_profile_file;
use crate::store::JsonFileStore;

/// One line of `scrape` output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScrapeReport {
    pub url: String,
    pub profile: BrandProfile,
    pub template: Template,
    pub render_failed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
}

impl ScrapeReport {
    pub(crate) fn new(outcome: BrandScrape, requested: TemplateKey) -> Self {
        let template = select_template(requested, &outcome.profile);
        Self {
            url: outcome.url,
            render_failed: outcome.render_failure.is_some(),
            render_error: outcome.render_failure.map(|e| e.to_string()),
            profile: outcome.profile,
            template,
            project_id: None,
            record_id: None,
        }
    }
}

/// Project id a report is saved under, if any.
pub(crate) fn save_target(explicit: Option<&str>, save: bool) -> Option<String> {
    match explicit {
        Some(id) => Some(id.to_owned()),
        None if save => Some(uuid::Uuid::new_v4().to_string()),
        None => None,
    }
}

/// Scrape `urls` with at most `max_concurrent_scrapes` browsers at once and
/// print one pretty JSON report per URL as each finishes.
///
/// # Errors
///
/// Returns an error for an invalid argument combination or if a report
/// cannot be written to stdout. Per-URL failures are reported, not returned.
pub(crate) async fn run_scrape(
    config: &AppConfig,
    urls: &[String],
    template: TemplateKey,
    project_id: Option<&str>,
    save: bool,
) -> anyhow::Result<()> {
    if project_id.is_some() && urls.len() > 1 {
        anyhow::bail!("--project-id can only be used with a single URL; use --save instead");
    }

    let renderer = ChromiumRenderer::new(RenderOptions::from_app_config(config));
    let store = JsonFileStore::new(&config.output_dir);
    let run = ScrapeRun {
        template,
        project_id,
        save,
        max_concurrent: config.max_concurrent_scrapes.max(1),
    };
    tracing::info!(
        urls = urls.len(),
        max_concurrent = run.max_concurrent,
        "starting scrape run"
    );

    let failed = run
        .execute(&renderer, &store, urls, |report| {
            println!("{}", serde_json::to_string_pretty(report)?);
            Ok(())
        })
        .await?;

    tracing::info!(total = urls.len(), failed, "scrape run complete");
    Ok(())
}

/// Settings shared by every URL in one `scrape` invocation.
pub(crate) struct ScrapeRun<'a> {
    pub template: TemplateKey,
    pub project_id: Option<&'a str>,
    pub save: bool,
    pub max_concurrent: usize,
}

impl ScrapeRun<'_> {
    /// Scrapes `urls` concurrently and hands each report to `emit` as soon as
    /// its scrape (and save) completes. Returns the number of failed renders.
    pub(crate) async fn execute<R, S, F>(
        &self,
        renderer: &R,
        store: &S,
        urls: &[String],
        mut emit: F,
    ) -> anyhow::Result<usize>
    where
        R: Renderer,
        S: ProfileStore,
        F: FnMut(&ScrapeReport) -> anyhow::Result<()>,
    {
        let mut outcomes = stream::iter(urls)
            .map(|url| scrape_brand(renderer, url))
            .buffer_unordered(self.max_concurrent);

        let mut failed = 0usize;
        while let Some(outcome) = outcomes.next().await {
            let mut report = ScrapeReport::new(outcome, self.template);
            if report.render_failed {
                failed += 1;
            }

            if let Some(id) = save_target(self.project_id, self.save) {
                match store.store(&id, &report.profile).await {
                    Ok(record_id) => report.record_id = Some(record_id),
                    Err(e) => tracing::warn!(url = %report.url, project_id = %id, error = %e, "failed to store profile"),
                }
                report.project_id = Some(id);
            }

            emit(&report)?;
        }
        Ok(failed)
    }
}

/// Print the template key resolved for a profile file or stored project.
///
/// # Errors
///
/// Returns an error if the profile cannot be read or loaded.
pub(crate) async fn run_select(
    config: &AppConfig,
    profile_path: Option<&Path>,
    project_id: Option<&str>,
    template: TemplateKey,
) -> anyhow::Result<()> {
    let profile = match (profile_path, project_id) {
        (Some(path), _) => read_profile_file(path)?,
        (None, Some(id)) => JsonFileStore::new(&config.output_dir).load(id).await?,
        (None, None) => anyhow::bail!("either --profile or --project-id is required"),
    };

    let resolved = select_template(template, &profile);
    tracing::info!(
        requested = template.display_name(),
        resolved = resolved.display_name(),
        "template resolved"
    );
    println!("{resolved}");
    Ok(())
}
