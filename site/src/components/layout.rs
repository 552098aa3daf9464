//! Page shell: header, centred main column, optional footer

use leptos::prelude::*;

use super::Header;

const MAIN_STYLE: &str = "margin: 0 auto; max-width: 960px; padding: 0 1.0875rem 1.45rem";

#[component]
pub fn Layout(
    #[prop(into, optional)] site_title: String,
    /// footer credit, omitted when empty
    #[prop(into, optional)]
    author: String,
    children: Children,
) -> impl IntoView {
    let footer = (!author.is_empty()).then(|| {
        view! { <footer>"© " {author}</footer> }
    });

    view! {
        <Header site_title=site_title />
        <div style=MAIN_STYLE>
            <main>{children()}</main>
            {footer}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_wraps_children_under_header() {
        let html = Owner::new().with(|| {
            view! {
                <Layout site_title="My Blog">
                    <p>"first post"</p>
                </Layout>
            }
            .to_html()
        });
        let header = html.find("My Blog").unwrap();
        let body = html.find("first post").unwrap();
        assert!(header < body);
        assert!(html.contains("<main>"));
        assert!(!html.contains("<footer>"));
    }

    #[test]
    fn test_layout_footer_names_author() {
        let html = Owner::new().with(|| {
            view! {
                <Layout site_title="My Blog" author="Jane">
                    <p>"first post"</p>
                </Layout>
            }
            .to_html()
        });
        assert!(html.contains("<footer>"));
        assert!(html.contains("Jane"));
        assert!(!html.contains(";;"));
    }
}
