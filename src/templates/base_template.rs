/// Base template trait providing the page metadata every generated page carries.
pub trait BaseTemplate {
    fn product_name(&self) -> &str;
    fn page_title(&self) -> &str;
    fn canonical_url(&self) -> &str;
}

/// Macro to implement BaseTemplate for a struct with standard fields
#[macro_export]
macro_rules! impl_base_template {
    ($struct_name:ty) => {
        impl $crate::templates::BaseTemplate for $struct_name {
            fn product_name(&self) -> &str {
                &self.product_name
            }
            fn page_title(&self) -> &str {
                &self.page_title
            }
            fn canonical_url(&self) -> &str {
                &self.canonical_url
            }
        }
    };
}
