use askama::Template;

use crate::models::Faq;
use crate::pricing::PricingTable;

#[derive(Template)]
#[template(path = "pricing.html")]
pub struct PricingPageTemplate<'a> {
    pub product_name: String,
    pub page_title: String,
    pub canonical_url: String,
    pub table: &'a PricingTable,
    pub faqs: &'a [Faq],
    pub is_monthly: bool,
    pub monthly_href: String,
    pub yearly_href: String,
    pub signup_url: String,
    pub support_mailto: String,
}

crate::impl_base_template!(PricingPageTemplate<'_>);
