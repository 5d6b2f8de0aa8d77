use askama::Template;

use crate::services::ChangelogPage;

#[derive(Template)]
#[template(path = "changelog.html")]
pub struct ChangelogPageTemplate<'a> {
    pub product_name: String,
    pub page_title: String,
    pub canonical_url: String,
    pub page: &'a ChangelogPage<'a>,
}

crate::impl_base_template!(ChangelogPageTemplate<'_>);
