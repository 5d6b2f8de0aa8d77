use serde_json::{json, Value};

use super::client::{fetch_text, graphql_query};
use super::error::ApiError;
use crate::content::ContentSnapshot;

/// Everything the site needs, aliased to the snapshot's field names.
pub const SITE_CONTENT_QUERY: &str = r#"
{
  plans: allNewPlans(first: 100, orderBy: position_ASC) {
    apiId
    name
    description
    position
    mostPopular
    promoTitle
    promoDescription
  }
  hints: allNewPricingHints(first: 100, orderBy: position_ASC) {
    apiId
    name
    description
    plans {
      plan { apiId }
      value
    }
  }
  faqs: allFaqs(first: 100, orderBy: position_ASC) {
    question
    answer(markdown: true)
  }
  changelogEntries: allChangelogEntries(first: 100, orderBy: publicationDate_DESC) {
    slug
    title
    publicationDate
    categories {
      name
      color { hex }
    }
    content(markdown: true)
  }
  integrations: allIntegrations(first: 100) {
    slug
    name
    logo { url }
    projectUrl
    documentationUrl
  }
  features: allFeatures(first: 100, orderBy: position_ASC) {
    id
    title
    description(markdown: true)
    image { url }
  }
  reviews: allReviews(first: 100, orderBy: position_ASC) {
    id
    name
    role
    website
    quote(markdown: true)
    image { url }
  }
  homePage {
    whosUsingDatocms {
      name
      logo { url }
    }
  }
}
"#;

/// Fetch the content collections and the plans payload, and assemble a snapshot.
pub async fn fetch_content(
    client: &reqwest::Client,
    content_api_url: &str,
    api_token: &str,
    plans_url: &str,
) -> Result<ContentSnapshot, ApiError> {
    let data = graphql_query(client, content_api_url, api_token, SITE_CONTENT_QUERY).await?;
    let plans_body = fetch_text(client, plans_url).await?;
    let snapshot = snapshot_from_response(data, plans_body)?;
    tracing::info!(
        plans = snapshot.plans.len(),
        hints = snapshot.hints.len(),
        changelog_entries = snapshot.changelog_entries.len(),
        integrations = snapshot.integrations.len(),
        "Fetched content"
    );
    Ok(snapshot)
}

/// Reshape the GraphQL `data` object into a [`ContentSnapshot`].
pub fn snapshot_from_response(mut data: Value, plans_body: String) -> Result<ContentSnapshot, ApiError> {
    let obj = data
        .as_object_mut()
        .ok_or_else(|| ApiError::Decode("data is not an object".into()))?;

    let who_is_using = obj
        .remove("homePage")
        .and_then(|mut home| home.get_mut("whosUsingDatocms").map(Value::take))
        .filter(|v| !v.is_null())
        .unwrap_or_else(|| json!([]));
    obj.insert("whoIsUsing".into(), who_is_using);
    obj.insert("datoPlans".into(), json!({ "body": plans_body }));

    serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
}
