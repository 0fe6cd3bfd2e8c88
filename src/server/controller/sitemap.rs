//! Root sitemap listing every documented endpoint.

use utoipa::openapi::{path::PathItem, OpenApi};

/// Renders an HTML page listing each method and path in the OpenAPI document.
///
/// Parameterless GET paths are rendered as links so they can be followed from a browser.
pub fn render(api: &OpenApi) -> String {
    let mut items = String::new();

    for (path, item) in api.paths.paths.iter() {
        for method in methods(item) {
            if method == "GET" && !path.contains('{') {
                items.push_str(&format!(
                    "<li>{} <a href=\"{}\">{}</a></li>",
                    method, path, path
                ));
            } else {
                items.push_str(&format!("<li>{} {}</li>", method, path));
            }
        }
    }

    format!(
        "<div style=\"text-align: center;\">\
         <h1>{title}</h1>\
         <p>API documentation: <a href=\"/docs\">/docs</a></p>\
         <p>Endpoints:</p>\
         <ul style=\"text-align: left;\">{items}</ul>\
         </div>",
        title = api.info.title,
        items = items
    )
}

fn methods(item: &PathItem) -> Vec<&'static str> {
    [
        ("GET", item.get.is_some()),
        ("POST", item.post.is_some()),
        ("PUT", item.put.is_some()),
        ("DELETE", item.delete.is_some()),
    ]
    .into_iter()
    .filter(|(_, present)| *present)
    .map(|(method, _)| method)
    .collect()
}
