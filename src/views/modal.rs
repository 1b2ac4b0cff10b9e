//! Modal chrome shared by the admin dialogs: header, tab strip, footer.

use maud::{Markup, html};

pub struct Tab {
    pub id: &'static str,
    pub label: &'static str,
}

/// Dark title bar with a dismiss control. The close "button" is a link back
/// to `dismiss_href` so closing works without the modal plugin.
#[must_use]
pub fn modal_header(title: &str, icon: &str, dismiss_href: &str) -> Markup {
    html! {
        div.modal-header.bg-dark {
            h5.modal-title.text-white {
                i class={ "fa fa-fw " (icon) " mr-2" } {}
                (title)
            }
            a.close.text-white href=(dismiss_href) data-dismiss="modal" aria-label="Close" {
                span { "\u{00d7}" }
            }
        }
    }
}

/// Pill navigation for tab panes. The first tab starts active.
#[must_use]
pub fn tab_nav(tabs: &[Tab]) -> Markup {
    html! {
        ul.modal-header.nav.nav-pills.nav-justified role="tablist" {
            @for (i, tab) in tabs.iter().enumerate() {
                li.nav-item {
                    a.nav-link.active[i == 0]
                        id={ (tab.id) "-tab" }
                        data-toggle="tab"
                        href={ "#" (tab.id) }
                        role="tab" { (tab.label) }
                }
            }
        }
    }
}

/// Footer with the single submit button and a non-submitting cancel link.
#[must_use]
pub fn modal_footer(submit_name: &str, submit_label: &str, cancel_href: &str) -> Markup {
    html! {
        div.modal-footer {
            button.btn.btn-primary.text-bold type="submit" name=(submit_name) {
                i.fa.fa-check."mr-2" {}
                (submit_label)
            }
            a.btn.btn-light href=(cancel_href) role="button" data-dismiss="modal" {
                i.fa.fa-times."mr-2" {}
                "Cancel"
            }
        }
    }
}
