use askama::Template;

use crate::services::LandingPage;

#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingPageTemplate<'a> {
    pub product_name: String,
    pub page_title: String,
    pub canonical_url: String,
    pub landing: &'a LandingPage<'a>,
}

crate::impl_base_template!(LandingPageTemplate<'_>);
