//! Server-rendered HTML.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views are pure functions from data to `maud::Markup`. They never touch the
//! store; routes fetch, views render. The page layout pulls in the Bootstrap
//! tab plugin, select2 and TinyMCE so the modal behaves like the rest of the
//! admin UI, but every form field also works with scripts disabled.

pub mod contract_template_form;
pub mod contract_template_list;
pub mod modal;

use maud::{DOCTYPE, Markup, PreEscaped, html};

const WIDGET_INIT: &str = r"
$(function () {
    $('.select2').select2({ theme: 'bootstrap4' });
    if (window.tinymce) { tinymce.init({ selector: 'textarea.tinymce', menubar: false }); }
});
";

/// Full HTML document around `content`.
#[must_use]
pub fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@4.6.2/dist/css/bootstrap.min.css";
                link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@fortawesome/fontawesome-free@5.15.4/css/all.min.css";
                link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/select2@4.1.0-rc.0/dist/css/select2.min.css";
                link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@ttskch/select2-bootstrap4-theme@1.5.2/dist/select2-bootstrap4.min.css";
            }
            body {
                div.container."py-4" { (content) }
                script src="https://cdn.jsdelivr.net/npm/jquery@3.7.1/dist/jquery.min.js" {}
                script src="https://cdn.jsdelivr.net/npm/bootstrap@4.6.2/dist/js/bootstrap.bundle.min.js" {}
                script src="https://cdn.jsdelivr.net/npm/select2@4.1.0-rc.0/dist/js/select2.min.js" {}
                script src="https://cdn.jsdelivr.net/npm/tinymce@6/tinymce.min.js" {}
                script { (PreEscaped(WIDGET_INIT)) }
            }
        }
    }
}
