use std::path::{Path, PathBuf};

use askama::Template;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::SiteSettings;
use crate::content::ContentSnapshot;
use crate::models::Faq;
use crate::pricing::{Billing, PricingData, PricingTable, Selection};
use crate::templates::{BaseTemplate, ChangelogPageTemplate, LandingPageTemplate, PricingPageTemplate};
use crate::utils::{absolute_url, page_path};

use super::changelog_service::paginate;
use super::error::SiteError;
use super::landing_service::landing_pages;

pub const PRICING_JSON_FILE: &str = "pricing.json";

/// A file ready to be written below the output directory.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputFile {
    /// Site path the file is served under (`/pricing/`).
    pub url_path: String,
    /// Path relative to the output directory.
    pub file: PathBuf,
    pub contents: String,
}

impl OutputFile {
    /// An HTML page at a directory-style URL (`/x/` -> `x/index.html`).
    pub fn page(url_path: String, contents: String) -> Self {
        let mut file = PathBuf::new();
        for seg in url_path.split('/').filter(|s| !s.is_empty()) {
            file.push(seg);
        }
        file.push("index.html");
        OutputFile { url_path, file, contents }
    }

    pub fn asset(name: &str, contents: String) -> Self {
        OutputFile {
            url_path: format!("/{}", name),
            file: PathBuf::from(name),
            contents,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub files: usize,
    pub bytes: usize,
}

pub fn pricing_path(billing: Billing) -> String {
    match billing {
        Billing::Yearly => page_path(&["pricing"]),
        Billing::Monthly => page_path(&["pricing", "monthly"]),
    }
}

/// Renders every page of the site from a content snapshot.
pub struct SiteBuilder<'a> {
    settings: &'a SiteSettings,
    show_progress: bool,
}

impl<'a> SiteBuilder<'a> {
    pub fn new(settings: &'a SiteSettings) -> Self {
        SiteBuilder {
            settings,
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Render the whole site in memory.
    ///
    /// Fails when the plans payload cannot be decoded: a pricing page built
    /// from partial data is worse than no build.
    pub fn render_all(&self, snapshot: &ContentSnapshot) -> Result<Vec<OutputFile>, SiteError> {
        let pricing = PricingData::from_snapshot(snapshot)?;
        let mut files = Vec::new();

        for billing in [Billing::Yearly, Billing::Monthly] {
            files.push(self.render_pricing(&pricing, billing, &snapshot.faqs)?);
        }
        let default_table = PricingTable::build(
            &pricing,
            &Selection::from_settings(self.settings, Billing::default()),
            self.settings,
        );
        files.push(OutputFile::asset(
            PRICING_JSON_FILE,
            serde_json::to_string_pretty(&default_table)?,
        ));

        files.extend(self.render_changelog(snapshot)?);
        files.extend(self.render_landing_pages(snapshot)?);

        tracing::info!(files = files.len(), "Rendered site");
        Ok(files)
    }

    pub fn render_pricing(
        &self,
        pricing: &PricingData,
        billing: Billing,
        faqs: &[Faq],
    ) -> Result<OutputFile, SiteError> {
        let selection = Selection::from_settings(self.settings, billing);
        let table = PricingTable::build(pricing, &selection, self.settings);
        let path = pricing_path(billing);
        let template = PricingPageTemplate {
            product_name: self.settings.product_name.clone(),
            page_title: "Pricing".to_string(),
            canonical_url: absolute_url(&self.settings.site_url, &path),
            table: &table,
            faqs,
            is_monthly: billing == Billing::Monthly,
            monthly_href: pricing_path(Billing::Monthly),
            yearly_href: pricing_path(Billing::Yearly),
            signup_url: self.settings.signup_url.clone(),
            support_mailto: self.settings.support_mailto(),
        };
        render_page(path, &template)
    }

    pub fn render_changelog(&self, snapshot: &ContentSnapshot) -> Result<Vec<OutputFile>, SiteError> {
        paginate(&snapshot.changelog_entries, self.settings.changelog_per_page)
            .iter()
            .map(|page| {
                let page_title = if page.first {
                    "Product Changelog".to_string()
                } else {
                    format!("Product Changelog - page {}", page.index)
                };
                let template = ChangelogPageTemplate {
                    product_name: self.settings.product_name.clone(),
                    page_title,
                    canonical_url: absolute_url(&self.settings.site_url, &page.path),
                    page,
                };
                render_page(page.path.clone(), &template)
            })
            .collect()
    }

    pub fn render_landing_pages(&self, snapshot: &ContentSnapshot) -> Result<Vec<OutputFile>, SiteError> {
        landing_pages(snapshot, self.settings)
            .iter()
            .map(|landing| {
                let template = LandingPageTemplate {
                    product_name: self.settings.product_name.clone(),
                    page_title: format!("{} CMS", landing.integration.name),
                    canonical_url: absolute_url(&self.settings.site_url, &landing.path),
                    landing,
                };
                render_page(landing.path.clone(), &template)
            })
            .collect()
    }

    /// Write rendered files below `output_dir`, creating directories as needed.
    pub async fn write(&self, files: &[OutputFile], output_dir: &Path) -> Result<BuildReport, SiteError> {
        let pb = if self.show_progress {
            let pb = ProgressBar::new(files.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
                    .map_err(|e| SiteError::Progress(e.to_string()))?
                    .progress_chars("#>-"),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        let mut bytes = 0;
        for file in files {
            let dest = output_dir.join(&file.file);
            if let Some(parent) = dest.parent() {
                tokio::fs::create_dir_all(parent).await.map_err(|source| SiteError::Io {
                    path: parent.display().to_string(),
                    source,
                })?;
            }
            tokio::fs::write(&dest, file.contents.as_bytes())
                .await
                .map_err(|source| SiteError::Io {
                    path: dest.display().to_string(),
                    source,
                })?;
            tracing::debug!(path = %dest.display(), url = %file.url_path, "Wrote page");
            bytes += file.contents.len();
            pb.set_message(file.url_path.clone());
            pb.inc(1);
        }
        pb.finish_and_clear();

        Ok(BuildReport {
            output_dir: output_dir.to_path_buf(),
            files: files.len(),
            bytes,
        })
    }

    pub async fn build(&self, snapshot: &ContentSnapshot, output_dir: &Path) -> Result<BuildReport, SiteError> {
        tracing::info!(output_dir = %output_dir.display(), "Building site");
        let files = self.render_all(snapshot)?;
        let report = self.write(&files, output_dir).await?;
        tracing::info!(files = report.files, bytes = report.bytes, "Site written");
        Ok(report)
    }
}

fn render_page<T: Template + BaseTemplate>(url_path: String, template: &T) -> Result<OutputFile, SiteError> {
    let html = template.render()?;
    tracing::debug!(url = %url_path, title = template.page_title(), canonical = template.canonical_url(), "Rendered page");
    Ok(OutputFile::page(url_path, html))
}
